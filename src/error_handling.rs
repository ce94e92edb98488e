use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalcError {
    #[error("invalid character, '{character}', encountered at position {position}")]
    invalid_character { character: char, position: usize },

    #[error("could not find matching '{0}'")]
    mismatched_paren(char),

    #[error("'{0}' is not a valid number")]
    invalid_number(String),

    #[error("expression is missing an operand or has too many")]
    stack_underflow,

    #[error("operand, {0}, is not a finite number")]
    invalid_operand(f64),

    #[error("division by zero")]
    divide_by_zero,

    #[error("result is not a finite number")]
    non_finite_result,

    #[error("function, '{0}', is not defined")]
    unknown_function(String),

    #[error("operation, '{0}', is not defined")]
    unknown_operation(String),

    #[error("'{name}' takes {expected} argument(s) but {found} were given")]
    wrong_argument_count { name: String, expected: usize, found: usize },

    #[error("did not expect '{0}'")]
    did_not_expect(String),

    #[error("cannot convert from '{from}' to '{to}'")]
    unsupported_conversion { from: String, to: String },
}

pub type Result<T> = std::result::Result<T, CalcError>;
