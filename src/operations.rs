use crate::error_handling::*;

use lazy_static::lazy_static;
use std::collections::HashMap;
use std::f64::consts::TAU;

/// Which front-end form may call an operation by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Family {
    basic,
    scientific,
}

#[derive(Clone, Copy)]
pub enum Action {
    constant(f64),
    cast(fn(f64) -> f64),
    tie(fn(f64, f64) -> Result<f64>),
}

pub struct Operation {
    pub name: &'static str,
    pub family: Family,
    pub action: Action,
}

impl Operation {
    pub fn arity(&self) -> usize {
        match self.action {
            Action::constant(_) => 0,
            Action::cast(_) => 1,
            Action::tie(_) => 2,
        }
    }

    /// Applies the operation. Fails before doing anything if an argument is
    /// not finite, and fails afterwards if the result is not finite.
    pub fn call(&self, arguments: &[f64]) -> Result<f64> {
        if let Some(operand) = arguments.iter().find(|value| !value.is_finite()) {
            return Err(CalcError::invalid_operand(*operand));
        }

        let result = match (self.action, arguments) {
            (Action::constant(value), []) => value,
            (Action::cast(action), [value]) => action(*value),
            (Action::tie(action), [left, right]) => action(*left, *right)?,
            _ => {
                return Err(CalcError::wrong_argument_count {
                    name: self.name.into(),
                    expected: self.arity(),
                    found: arguments.len(),
                })
            },
        };

        if result.is_finite() {
            Ok(result)
        } else {
            Err(CalcError::non_finite_result)
        }
    }
}

fn add(left: f64, right: f64) -> Result<f64> {
    Ok(left + right)
}

fn subtract(left: f64, right: f64) -> Result<f64> {
    Ok(left - right)
}

fn multiply(left: f64, right: f64) -> Result<f64> {
    Ok(left * right)
}

fn divide(left: f64, right: f64) -> Result<f64> {
    if right == 0.0 {
        return Err(CalcError::divide_by_zero);
    }
    Ok(left / right)
}

fn percent(left: f64, right: f64) -> Result<f64> {
    Ok(left * right / 100.0)
}

fn pow(left: f64, right: f64) -> Result<f64> {
    Ok(left.powf(right))
}

pub static OPERATIONS: [Operation; 13] = [
    Operation { name: "add", family: Family::basic, action: Action::tie(add) },
    Operation { name: "subtract", family: Family::basic, action: Action::tie(subtract) },
    Operation { name: "multiply", family: Family::basic, action: Action::tie(multiply) },
    Operation { name: "divide", family: Family::basic, action: Action::tie(divide) },
    Operation { name: "percent", family: Family::basic, action: Action::tie(percent) },
    Operation { name: "pow", family: Family::scientific, action: Action::tie(pow) },
    Operation { name: "sqrt", family: Family::scientific, action: Action::cast(f64::sqrt) },
    Operation { name: "sin", family: Family::scientific, action: Action::cast(f64::sin) },
    Operation { name: "cos", family: Family::scientific, action: Action::cast(f64::cos) },
    Operation { name: "tan", family: Family::scientific, action: Action::cast(f64::tan) },
    // natural logarithm
    Operation { name: "log", family: Family::scientific, action: Action::cast(f64::ln) },
    Operation { name: "exp", family: Family::scientific, action: Action::cast(f64::exp) },
    Operation { name: "tau", family: Family::scientific, action: Action::constant(TAU) },
];

lazy_static! {
    static ref BY_NAME: HashMap<&'static str, &'static Operation> =
        OPERATIONS.iter().map(|operation| (operation.name, operation)).collect();
}

pub fn find(name: &str) -> Option<&'static Operation> {
    BY_NAME.get(name).copied()
}
