//! Broken Calculator
//!
//! Reach 42 using only the keys that still work: `1 2 5 + - *`.

use super::{Attempt, Puzzle, PuzzleError};
use crate::domain::catalog::PuzzleId;
use crate::domain::progress::Percent;

pub const TARGET: f64 = 42.0;
pub const WORKING_KEYS: [char; 6] = ['1', '2', '5', '+', '-', '*'];
pub const BROKEN_KEYS: [char; 8] = ['0', '3', '4', '6', '7', '8', '9', '/'];

const OPERATORS: [char; 3] = ['+', '-', '*'];

#[derive(Debug, Clone, Default)]
pub struct BrokenCalculator {
    display: String,
    last_result: Option<f64>,
    progress: Percent,
    solved: bool,
}

impl BrokenCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn last_result(&self) -> Option<f64> {
        self.last_result
    }

    /// Press one key
    ///
    /// An operator cannot start the expression, and an operator right after
    /// another replaces it.
    pub fn press(&mut self, key: char) -> Result<(), PuzzleError> {
        if self.solved {
            return Err(PuzzleError::AlreadySolved);
        }
        if BROKEN_KEYS.contains(&key) {
            return Err(PuzzleError::BrokenKey(key));
        }
        if !WORKING_KEYS.contains(&key) {
            return Err(PuzzleError::UnknownKey(key));
        }

        if OPERATORS.contains(&key) {
            match self.display.chars().last() {
                None => return Ok(()),
                Some(last) if OPERATORS.contains(&last) => {
                    self.display.pop();
                }
                Some(_) => {}
            }
        }
        self.display.push(key);
        self.progress = Percent::hint(self.display.len() as f64 * 10.0);
        Ok(())
    }

    pub fn clear(&mut self) {
        if !self.solved {
            self.display.clear();
            self.last_result = None;
        }
    }

    /// The `=` key
    pub fn calculate(&mut self) -> Result<Attempt, PuzzleError> {
        if self.solved {
            return Err(PuzzleError::AlreadySolved);
        }
        if self.display.is_empty() {
            return Err(PuzzleError::EmptyExpression);
        }

        let result = evaluate(&self.display)?;
        self.last_result = Some(result);
        if (result - TARGET).abs() < f64::EPSILON {
            self.solved = true;
            self.progress = Percent::FULL;
            Ok(Attempt::Solved)
        } else {
            Ok(Attempt::Incorrect(format!(
                "Result: {result}. Try again! Target is {TARGET}."
            )))
        }
    }
}

impl Puzzle for BrokenCalculator {
    const ID: PuzzleId = PuzzleId::BrokenCalc;

    fn progress(&self) -> Percent {
        self.progress
    }

    fn is_solved(&self) -> bool {
        self.solved
    }
}

/// Evaluate an arithmetic expression over non-negative integers and
/// `+ - * /`, with the usual precedence and left associativity
///
/// Whitespace is ignored; anything else is an [`PuzzleError::InvalidExpression`].
pub fn evaluate(expression: &str) -> Result<f64, PuzzleError> {
    let tokens: Vec<char> = expression.chars().filter(|c| !c.is_whitespace()).collect();
    if tokens.is_empty() {
        return Err(PuzzleError::EmptyExpression);
    }

    let mut parser = Parser { tokens, pos: 0 };
    let value = parser.expression()?;
    if parser.pos != parser.tokens.len() {
        return Err(PuzzleError::InvalidExpression);
    }
    Ok(value)
}

struct Parser {
    tokens: Vec<char>,
    pos: usize,
}

impl Parser {
    fn peek(&self) -> Option<char> {
        self.tokens.get(self.pos).copied()
    }

    // expression := term (('+' | '-') term)*
    fn expression(&mut self) -> Result<f64, PuzzleError> {
        let mut value = self.term()?;
        while let Some(op @ ('+' | '-')) = self.peek() {
            self.pos += 1;
            let rhs = self.term()?;
            value = if op == '+' { value + rhs } else { value - rhs };
        }
        Ok(value)
    }

    // term := number (('*' | '/') number)*
    fn term(&mut self) -> Result<f64, PuzzleError> {
        let mut value = self.number()?;
        while let Some(op @ ('*' | '/')) = self.peek() {
            self.pos += 1;
            let rhs = self.number()?;
            value = if op == '*' {
                value * rhs
            } else if rhs == 0.0 {
                return Err(PuzzleError::DivisionByZero);
            } else {
                value / rhs
            };
        }
        Ok(value)
    }

    fn number(&mut self) -> Result<f64, PuzzleError> {
        let start = self.pos;
        let mut value = 0.0;
        while let Some(digit) = self.peek().and_then(|c| c.to_digit(10)) {
            value = value * 10.0 + f64::from(digit);
            self.pos += 1;
        }
        if self.pos == start {
            return Err(PuzzleError::InvalidExpression);
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press_all(calc: &mut BrokenCalculator, keys: &str) {
        for key in keys.chars() {
            calc.press(key).unwrap();
        }
    }

    #[test]
    fn test_evaluate_precedence() {
        assert_eq!(evaluate("2+5*2").unwrap(), 12.0);
        assert_eq!(evaluate("12-5-2").unwrap(), 5.0);
        assert_eq!(evaluate("8/4/2").unwrap(), 1.0);
        assert_eq!(evaluate(" 21 * 2 ").unwrap(), 42.0);
        assert_eq!(evaluate("7/2").unwrap(), 3.5);
    }

    #[test]
    fn test_evaluate_rejects_outside_grammar() {
        assert_eq!(evaluate("5/0"), Err(PuzzleError::DivisionByZero));
        assert_eq!(evaluate("5+"), Err(PuzzleError::InvalidExpression));
        assert_eq!(evaluate("*5"), Err(PuzzleError::InvalidExpression));
        assert_eq!(evaluate("(5)"), Err(PuzzleError::InvalidExpression));
        assert_eq!(evaluate("2**5"), Err(PuzzleError::InvalidExpression));
        assert_eq!(evaluate("alert(1)"), Err(PuzzleError::InvalidExpression));
        assert_eq!(evaluate(""), Err(PuzzleError::EmptyExpression));
    }

    #[test]
    fn test_broken_keys_are_rejected() {
        let mut calc = BrokenCalculator::new();
        assert_eq!(calc.press('7'), Err(PuzzleError::BrokenKey('7')));
        assert_eq!(calc.press('/'), Err(PuzzleError::BrokenKey('/')));
        assert_eq!(calc.press('x'), Err(PuzzleError::UnknownKey('x')));
        assert_eq!(calc.display(), "");
    }

    #[test]
    fn test_operator_rules() {
        let mut calc = BrokenCalculator::new();
        calc.press('+').unwrap();
        assert_eq!(calc.display(), "");

        press_all(&mut calc, "5+-*2");
        assert_eq!(calc.display(), "5*2");
    }

    #[test]
    fn test_progress_hint() {
        let mut calc = BrokenCalculator::new();
        press_all(&mut calc, "1+2");
        assert_eq!(calc.progress().value(), 30);

        press_all(&mut calc, "1111111111111");
        assert_eq!(calc.progress().value(), 99);
    }

    #[test]
    fn test_solving_reveals_code() {
        let mut calc = BrokenCalculator::new();
        press_all(&mut calc, "5*5+12+5");
        assert_eq!(calc.calculate().unwrap(), Attempt::Solved);
        assert!(calc.is_solved());
        assert_eq!(calc.progress(), Percent::FULL);
        assert_eq!(calc.revealed_code(), Some("BETA"));
        assert_eq!(calc.press('1'), Err(PuzzleError::AlreadySolved));
    }

    #[test]
    fn test_wrong_result_keeps_going() {
        let mut calc = BrokenCalculator::new();
        press_all(&mut calc, "2*2");
        assert!(matches!(calc.calculate().unwrap(), Attempt::Incorrect(_)));
        assert_eq!(calc.last_result(), Some(4.0));
        assert_eq!(calc.revealed_code(), None);

        calc.clear();
        assert_eq!(calc.calculate(), Err(PuzzleError::EmptyExpression));
    }
}
