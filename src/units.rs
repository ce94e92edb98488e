use crate::error_handling::*;

use lazy_static::lazy_static;
use std::collections::HashMap;
use std::f64::consts::{E, PI, TAU};

/// Source unit that turns a conversion into a multiple of a named constant.
pub const CONSTANT_UNIT: &str = "const";

const CONSTANT_PREFIX: &str = "const:";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dimension {
    length,
    time,
    mass,
    speed,
}

/// Factor of each unit relative to its dimension's base unit (m, s, kg, m/s).
pub static UNITS: [(&str, Dimension, f64); 10] = [
    ("km", Dimension::length, 1000.0),
    ("m", Dimension::length, 1.0),
    ("cm", Dimension::length, 0.01),
    ("h", Dimension::time, 3600.0),
    ("min", Dimension::time, 60.0),
    ("s", Dimension::time, 1.0),
    ("kg", Dimension::mass, 1.0),
    ("g", Dimension::mass, 0.001),
    ("m/s", Dimension::speed, 1.0),
    ("km/h", Dimension::speed, 1.0 / 3.6),
];

pub static CONSTANTS: [(&str, f64); 3] = [
    ("pi", PI),
    ("e", E),
    ("tau", TAU),
];

lazy_static! {
    static ref UNIT_TABLE: HashMap<&'static str, (Dimension, f64)> = UNITS
        .iter()
        .map(|(unit, dimension, factor)| (*unit, (*dimension, *factor)))
        .collect();

    static ref CONSTANT_TABLE: HashMap<&'static str, f64> = CONSTANTS.iter().copied().collect();
}

pub fn factor(unit: &str) -> Option<(Dimension, f64)> {
    UNIT_TABLE.get(unit).copied()
}

pub fn constant(name: &str) -> Option<f64> {
    CONSTANT_TABLE.get(name).copied()
}

fn unsupported(from: &str, to: &str) -> CalcError {
    CalcError::unsupported_conversion {
        from: from.into(),
        to: to.into(),
    }
}

/// Converts `value` between two units of one dimension, or, when `from` is
/// `"const"`, scales the constant named by `to` by `value`.
pub fn convert(value: f64, from: &str, to: &str) -> Result<f64> {
    if !value.is_finite() {
        return Err(CalcError::invalid_operand(value));
    }
    if from == to {
        return Ok(value);
    }

    let result = if from == CONSTANT_UNIT {
        match constant(to) {
            Some(scale) => scale * value,
            None => return Err(unsupported(from, to)),
        }
    } else {
        match (factor(from), factor(to)) {
            (Some((from_dimension, from_factor)), Some((to_dimension, to_factor)))
                if from_dimension == to_dimension =>
            {
                value * from_factor / to_factor
            },
            _ => return Err(unsupported(from, to)),
        }
    };

    if result.is_finite() {
        Ok(result)
    } else {
        Err(CalcError::non_finite_result)
    }
}

/// Maps a front-end selection pair onto `convert` arguments: if either side is
/// `const:<name>` the pair becomes `("const", <name>)`.
pub fn resolve_selection<'a>(from: &'a str, to: &'a str) -> (&'a str, &'a str) {
    if let Some(name) = from.strip_prefix(CONSTANT_PREFIX) {
        (CONSTANT_UNIT, name)
    } else if let Some(name) = to.strip_prefix(CONSTANT_PREFIX) {
        (CONSTANT_UNIT, name)
    } else {
        (from, to)
    }
}
