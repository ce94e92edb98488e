use crate::error_handling::*;
use crate::operations;
use crate::scanning::*;

fn parse_number(content: &str) -> Result<f64> {
    content.parse::<f64>().map_err(|_| CalcError::invalid_number(content.into()))
}

/// Evaluates a postfix expression with a value stack.
pub fn evaluate(expression: &[Token]) -> Result<f64> {
    let mut slots = Vec::<f64>::new();
    for token in expression {
        match token {
            Token::number(content) => slots.push(parse_number(content)?),

            Token::operator(operator) => {
                let right = slots.pop().ok_or(CalcError::stack_underflow)?;
                let left = slots.pop().ok_or(CalcError::stack_underflow)?;
                let name = operator.operation_name();
                let operation = operations::find(name)
                    .ok_or_else(|| CalcError::unknown_operation(name.into()))?;
                slots.push(operation.call(&[left, right])?);
            },

            Token::left_paren => return Err(CalcError::mismatched_paren(')')),
            Token::right_paren => return Err(CalcError::mismatched_paren('(')),
        }
    }

    match slots.as_slice() {
        [value] if value.is_finite() => Ok(*value),
        [_] => Err(CalcError::non_finite_result),
        _ => Err(CalcError::stack_underflow),
    }
}
