use crate::error_handling::*;
use crate::scanning::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Associativity {
    left,
    right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOperator {
    addition,
    subtraction,
    multiplication,
    division,
    exponentiation,
}

impl BinaryOperator {
    pub fn from_symbol(symbol: char) -> Option<Self> {
        use BinaryOperator::*;
        match symbol {
            '+' => Some(addition),
            '-' => Some(subtraction),
            '*' => Some(multiplication),
            '/' => Some(division),
            '^' => Some(exponentiation),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        use BinaryOperator::*;
        match self {
            addition => '+',
            subtraction => '-',
            multiplication => '*',
            division => '/',
            exponentiation => '^',
        }
    }

    pub fn precedence(&self) -> i32 {
        use BinaryOperator::*;
        match self {
            addition | subtraction => 1,
            multiplication | division => 2,
            exponentiation => 3,
        }
    }

    pub fn associativity(&self) -> Associativity {
        match self {
            Self::exponentiation => Associativity::right,
            _ => Associativity::left,
        }
    }

    /// Name of the entry in the operation set this operator applies.
    pub fn operation_name(&self) -> &'static str {
        use BinaryOperator::*;
        match self {
            addition => "add",
            subtraction => "subtract",
            multiplication => "multiply",
            division => "divide",
            exponentiation => "pow",
        }
    }

    /// Whether `self`, already on the stack, must be output before `incoming` is pushed.
    fn binds_before(&self, incoming: &BinaryOperator) -> bool {
        self.precedence() > incoming.precedence()
            || (self.precedence() == incoming.precedence()
                && incoming.associativity() == Associativity::left)
    }
}

enum StackNode {
    operator(BinaryOperator),
    paren,
}

struct Yard {
    expression: Vec<Token>,
    stack: Vec<StackNode>,
}

impl Yard {
    fn new() -> Self {
        Self{expression: Vec::new(), stack: Vec::new()}
    }

    fn add_number(&mut self, content: &str) {
        self.expression.push(Token::number(content.into()));
    }

    fn pop_higher_operator(&mut self, incoming: &BinaryOperator) -> Option<BinaryOperator> {
        match self.stack.last() {
            Some(StackNode::operator(top)) if top.binds_before(incoming) => {
                let top = *top;
                self.stack.pop();
                Some(top)
            },
            _ => None,
        }
    }

    fn add_operator(&mut self, operator: BinaryOperator) {
        while let Some(higher) = self.pop_higher_operator(&operator) {
            self.expression.push(Token::operator(higher));
        }
        self.stack.push(StackNode::operator(operator));
    }

    fn add_left_paren(&mut self) {
        self.stack.push(StackNode::paren);
    }

    fn add_right_paren(&mut self) -> Result<()> {
        while let Some(stack_node) = self.stack.pop() {
            match stack_node {
                StackNode::paren => return Ok(()),
                StackNode::operator(operator) => self.expression.push(Token::operator(operator)),
            }
        }
        Err(CalcError::mismatched_paren('('))
    }

    fn finish(mut self) -> Result<Vec<Token>> {
        while let Some(stack_node) = self.stack.pop() {
            match stack_node {
                StackNode::paren => return Err(CalcError::mismatched_paren(')')),
                StackNode::operator(operator) => self.expression.push(Token::operator(operator)),
            }
        }
        Ok(self.expression)
    }
}

/// Reorders infix tokens into postfix with the shunting-yard algorithm.
///
/// Equal precedence operators group left to right, except `^` which groups
/// right to left, so `2^3^2` becomes `2 3 2 ^ ^`.
pub fn parse(tokens: &[Token]) -> Result<Vec<Token>> {
    let mut yard = Yard::new();

    for token in tokens {
        match token {
            Token::number(content) => yard.add_number(content),
            Token::operator(operator) => yard.add_operator(*operator),
            Token::left_paren => yard.add_left_paren(),
            Token::right_paren => yard.add_right_paren()?,
        }
    }
    yard.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn postfix(text: &str) -> Result<String> {
        let tokens = tokenize(text)?;
        let expression = parse(&tokens)?;
        Ok(expression.iter().map(|t| t.to_string()).collect::<Vec<_>>().join(" "))
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        assert_eq!(postfix("3+4*2").unwrap(), "3 4 2 * +");
    }

    #[test]
    fn exponentiation_is_right_associative() {
        assert_eq!(postfix("2^3^2").unwrap(), "2 3 2 ^ ^");
    }

    #[test]
    fn other_operators_are_left_associative() {
        assert_eq!(postfix("8-3-2").unwrap(), "8 3 - 2 -");
        assert_eq!(postfix("8/4/2").unwrap(), "8 4 / 2 /");
        assert_eq!(postfix("8/4*2").unwrap(), "8 4 / 2 *");
    }

    #[test]
    fn parentheses_override_precedence() {
        assert_eq!(postfix("(3+4)*2").unwrap(), "3 4 + 2 *");
        assert_eq!(postfix("3+4*2/(1-5)^2^3").unwrap(), "3 4 2 * 1 5 - 2 3 ^ ^ / +");
    }

    #[test]
    fn unclosed_paren_is_rejected() {
        assert_eq!(postfix("(1+2"), Err(CalcError::mismatched_paren(')')));
        assert_eq!(postfix("((1)"), Err(CalcError::mismatched_paren(')')));
    }

    #[test]
    fn unopened_paren_is_rejected() {
        assert_eq!(postfix("1+2)"), Err(CalcError::mismatched_paren('(')));
        assert_eq!(postfix(")("), Err(CalcError::mismatched_paren('(')));
    }

    #[test]
    fn operator_metadata() {
        use crate::parsing::BinaryOperator::*;
        assert_eq!(BinaryOperator::from_symbol('^'), Some(exponentiation));
        assert_eq!(BinaryOperator::from_symbol('%'), None);
        assert_eq!(exponentiation.associativity(), Associativity::right);
        for operator in [addition, subtraction, multiplication, division] {
            assert_eq!(operator.associativity(), Associativity::left);
            assert_eq!(BinaryOperator::from_symbol(operator.symbol()), Some(operator));
        }
        assert!(multiplication.precedence() > subtraction.precedence());
        assert!(exponentiation.precedence() > division.precedence());
    }
}
