//! # polyeq
//!
//! A recognizer for single-variable polynomial equations.
//!
//! Given a line such as `3x^2 - x + 4 = 0`, polyeq decides whether the line
//! is an equation of the shape `<expression> = <expression>`, where an
//! expression is a signed sum of terms `<number>`, `[<number>] <identifier>`
//! and `[<number>] <identifier> ^ <natural>`, and if so reports how many
//! distinct variables it uses and its degree.
//!
//! File Layout
//!
//! Two recognizer designs run side by side over the same token list. The
//! contract is the same global input (a token slice) and the same global
//! output (accepted or not, and the degree):
//!
//! src/polyeq
//!   ├── lexing        logos tokenizer producing a `TokenList`
//!   ├── recognizing   cursor, degree state and the two backends
//!   │     ├── descent       hand-written recursive descent (default)
//!   │     └── combinators   chumsky grammar
//!   ├── variables     distinct identifier analysis
//!   ├── analysis      the per-line protocol tying the above together
//!   ├── formats       text / json / yaml output
//!   └── session       the interactive line loop

pub mod polyeq;
