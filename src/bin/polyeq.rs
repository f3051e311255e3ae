//! Command-line interface for polyeq
//! Checks whether lines of text are single-variable polynomial equations and reports their degree.
//!
//! Usage:
//!   polyeq                                    - Prompt for equations until a line starting with `!`
//!   polyeq `<equation>`...                      - Check each argument, exit 1 if any is not an equation
//!   polyeq --format json -- "-x + 3 = 0"      - Use `--` before equations that start with `-`
//!   polyeq --list-formats                     - List all available output formats
//!
//! Settings come from the built-in defaults, then `polyeq.toml` in the working
//! directory if there is one, then `--config`, then the individual flags.

use clap::{Arg, ArgAction, ArgMatches, Command};
use log::LevelFilter;
use polyeq::polyeq::analysis::Analyzer;
use polyeq::polyeq::formats::FormatRegistry;
use polyeq::polyeq::recognizing::Backend;
use polyeq::polyeq::session::{Session, SessionOptions};
use polyeq_config::{ConfigError, Loader, PolyeqConfig};
use std::io;

fn main() {
    let matches = Command::new("polyeq")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Recognize single-variable polynomial equations and report their degree")
        .arg(
            Arg::new("equation")
                .help("Equations to check (reads lines interactively when omitted)")
                .num_args(1..)
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (e.g., 'text', 'json', 'yaml')"),
        )
        .arg(
            Arg::new("backend")
                .long("backend")
                .short('b')
                .help("Recognizer implementation")
                .value_parser(["descent", "combinator"]),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Path to a TOML configuration file layered over the defaults and ./polyeq.toml"),
        )
        .arg(
            Arg::new("show-tokens")
                .long("show-tokens")
                .help("Echo the token list before each verdict (text format)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase log verbosity (-v info, -vv debug, -vvv trace)")
                .action(ArgAction::Count),
        )
        .get_matches();

    init_logging(matches.get_count("verbose"));

    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(2);
    });
    let registry = FormatRegistry::with_defaults(config.session.show_tokens);

    if matches.get_flag("list-formats") {
        handle_list_formats_command(&registry);
        return;
    }

    if !registry.has(&config.output.format) {
        eprintln!("Format '{}' not supported", config.output.format);
        eprintln!("Available formats: {}", registry.list_formats().join(", "));
        std::process::exit(2);
    }

    let analyzer = Analyzer::new(Backend::from(config.recognizer.backend));
    match matches.get_many::<String>("equation") {
        Some(equations) => {
            let equations: Vec<&String> = equations.collect();
            handle_check_command(&analyzer, &registry, &config, &equations);
        }
        None => handle_session_command(analyzer, &registry, &config),
    }
}

/// Map `-v` occurrences to a level; `RUST_LOG` still applies on top
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

/// Project file picked up from the working directory when present
const LOCAL_CONFIG: &str = "polyeq.toml";

/// Defaults, then `./polyeq.toml`, then `--config`, then flags
fn load_config(matches: &ArgMatches) -> Result<PolyeqConfig, ConfigError> {
    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG);
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    if let Some(backend) = matches.get_one::<String>("backend") {
        loader = loader.set_override("recognizer.backend", backend.as_str())?;
    }
    if matches.get_flag("show-tokens") {
        loader = loader.set_override("session.show_tokens", true)?;
    }
    loader.build()
}

/// Handle equations given as arguments
fn handle_check_command(
    analyzer: &Analyzer,
    registry: &FormatRegistry,
    config: &PolyeqConfig,
    equations: &[&String],
) {
    let mut all_equations = true;

    for equation in equations {
        let analysis = analyzer.analyze(equation);
        all_equations &= analysis.verdict.is_equation();

        let output = registry
            .serialize(&analysis, &config.output.format)
            .unwrap_or_else(|e| {
                eprintln!("Error formatting result: {}", e);
                std::process::exit(2);
            });
        println!("{}", output);
    }

    if !all_equations {
        std::process::exit(1);
    }
}

/// Handle the interactive loop on stdin/stdout
fn handle_session_command(analyzer: Analyzer, registry: &FormatRegistry, config: &PolyeqConfig) {
    let session = Session::new(analyzer, registry, SessionOptions::from_config(config));
    let stdin = io::stdin();
    let stdout = io::stdout();

    if let Err(e) = session.run(stdin.lock(), stdout.lock()) {
        eprintln!("Session error: {}", e);
        std::process::exit(2);
    }
}

/// Handle the list-formats command
fn handle_list_formats_command(registry: &FormatRegistry) {
    println!("Available output formats:\n");

    for name in registry.list_formats() {
        println!("  {}", name);
        if let Some(formatter) = registry.get(&name) {
            println!("    {}", formatter.description());
        }
        println!();
    }
}
