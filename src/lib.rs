#![allow(nonstandard_style)]

//! Calculation engine: tokenizer, shunting-yard parser, postfix evaluator,
//! arithmetic operation set and unit conversion table.
//!
//! Every call is a pure function of its arguments and the static tables, so
//! the engine can be shared between threads without synchronization.

pub mod error_handling;
pub mod evaluating;
pub mod formatting;
pub mod operations;
pub mod parsing;
pub mod scanning;
pub mod settings;
pub mod units;

pub use error_handling::{CalcError, Result};
pub use formatting::format_number;
pub use settings::Settings;
pub use units::resolve_selection;

use evaluating::*;
use operations::Family;
use parsing::*;
use scanning::*;

/// Tokenizes, parses and evaluates an infix expression.
pub fn evaluate_expression(text: &str) -> Result<f64> {
    let tokens = tokenize(text)?;
    let expression = parse(&tokens)?;
    evaluate(&expression)
}

/// Applies one of `add`, `subtract`, `multiply`, `divide` or `percent`.
pub fn apply_basic_op(left: f64, right: f64, name: &str) -> Result<f64> {
    match operations::find(name) {
        Some(operation) if operation.family == Family::basic => operation.call(&[left, right]),
        _ => Err(CalcError::unknown_operation(name.into())),
    }
}

/// Applies a scientific function (`sqrt`, `pow`, `sin`, `cos`, `tan`, `log`, `exp`, `tau`).
pub fn apply_function(name: &str, arguments: &[f64]) -> Result<f64> {
    match operations::find(name) {
        Some(operation) if operation.family == Family::scientific => operation.call(arguments),
        _ => Err(CalcError::unknown_function(name.into())),
    }
}

pub fn convert_units(value: f64, from: &str, to: &str) -> Result<f64> {
    units::convert(value, from, to)
}
