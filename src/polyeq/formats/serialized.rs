//! Structured output through serde
//!
//! `json` renders one compact object per line so a session's output can be
//! consumed as JSON Lines. `yaml` renders one document per line.

use super::registry::{FormatError, Formatter};
use crate::polyeq::analysis::Analysis;

pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, analysis: &Analysis) -> Result<String, FormatError> {
        serde_json::to_string(analysis).map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    fn description(&self) -> &str {
        "One JSON object per line"
    }
}

pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, analysis: &Analysis) -> Result<String, FormatError> {
        let yaml = serde_yaml::to_string(analysis)
            .map_err(|e| FormatError::SerializationError(e.to_string()))?;
        // Keep documents separable when several lines are rendered in a row
        Ok(format!("---\n{}", yaml.trim_end()))
    }

    fn description(&self) -> &str {
        "One YAML document per line"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::polyeq::analysis::analyze;

    #[test]
    fn test_json_equation() {
        let output = JsonFormatter.serialize(&analyze("x^2 = 4")).expect("json");
        let value: serde_json::Value = serde_json::from_str(&output).expect("valid json");
        assert_eq!(value["verdict"]["kind"], "equation");
        assert_eq!(value["verdict"]["variables"], "one");
        assert_eq!(value["verdict"]["degree"], 2);
        assert_eq!(value["backend"], "descent");
        assert_eq!(value["tokens"][0]["kind"], "identifier");
        assert_eq!(value["tokens"][0]["value"], "x");
    }

    #[test]
    fn test_json_not_an_equation() {
        let output = JsonFormatter.serialize(&analyze("x +")).expect("json");
        let value: serde_json::Value = serde_json::from_str(&output).expect("valid json");
        assert_eq!(value["verdict"]["kind"], "not-an-equation");
        assert!(value["verdict"].get("degree").is_none());
        assert!(value.get("lex_error").is_none());
    }

    #[test]
    fn test_yaml_document() {
        let output = YamlFormatter.serialize(&analyze("3 + 4 = 7")).expect("yaml");
        assert!(output.starts_with("---\n"));
        let value: serde_yaml::Value = serde_yaml::from_str(&output).expect("valid yaml");
        assert_eq!(value["verdict"]["variables"].as_str(), Some("zero"));
        assert_eq!(value["verdict"]["degree"].as_u64(), Some(0));
    }
}
