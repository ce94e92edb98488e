use crate::error_handling::*;
use crate::parsing::BinaryOperator;

use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum Token {
    /// Raw literal text, validated only when evaluated.
    number(String),
    operator(BinaryOperator),
    left_paren,
    right_paren,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::number(content) => write!(f, "{}", content),
            Token::operator(operator) => write!(f, "{}", operator.symbol()),
            Token::left_paren => write!(f, "("),
            Token::right_paren => write!(f, ")"),
        }
    }
}

fn is_digit_or_dot(character: char) -> bool {
    character.is_ascii_digit() || character == '.'
}

/// Yields tokens left to right and stops after the first invalid character.
pub struct StringScanner<'a> {
    string: &'a str,
    index: usize,
    position: usize,
    failed: bool,
}

impl<'a> StringScanner<'a> {
    pub fn new(string: &'a str) -> Self {
        Self {
            string,
            index: 0,
            position: 0,
            failed: false,
        }
    }

    fn view(&self) -> &'a str {
        &self.string[self.index..]
    }

    fn skip_whitespace(&mut self) {
        for character in self.view().chars().take_while(|c| c.is_whitespace()) {
            self.index += character.len_utf8();
            self.position += 1;
        }
    }

    // digits and '.' are ascii, so the char count is also the byte count
    fn get_number(&self) -> &'a str {
        let count = self.view().chars().take_while(|c| is_digit_or_dot(*c)).count();
        &self.view()[..count]
    }

    fn get_token(&mut self) -> Option<Result<Token>> {
        self.skip_whitespace();
        let character = self.view().chars().next()?;

        let token = if is_digit_or_dot(character) {
            Token::number(self.get_number().into())
        } else if character == '(' {
            Token::left_paren
        } else if character == ')' {
            Token::right_paren
        } else if let Some(operator) = BinaryOperator::from_symbol(character) {
            Token::operator(operator)
        } else {
            self.failed = true;
            return Some(Err(CalcError::invalid_character {
                character,
                position: self.position,
            }));
        };

        let length = match &token {
            Token::number(content) => content.len(),
            _ => 1,
        };
        self.index += length;
        self.position += length;
        Some(Ok(token))
    }
}

impl<'a> Iterator for StringScanner<'a> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        self.get_token()
    }
}

pub fn tokenize(text: &str) -> Result<Vec<Token>> {
    StringScanner::new(text).collect()
}
