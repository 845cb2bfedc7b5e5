//! # Arithmetic expression parser
//!
//! Recursive-descent evaluator restricted to digits, decimal points, the four
//! basic operators with standard precedence, parentheses, and unary minus.
//! Anything else is a parse error. Replaces the generic evaluate-string-as-code
//! construct such mock responders tend to grow; no code path here executes input.
//!
//! Evaluation is in f64, so division by zero yields a non-finite value instead
//! of failing; callers decide how to present that.

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CalcError {
    #[error("unexpected character '{0}'")]
    UnexpectedChar(char),
    #[error("unexpected end of expression")]
    UnexpectedEnd,
    #[error("trailing input after expression")]
    TrailingInput,
}

/// Evaluates an arithmetic expression, e.g. `"2 + 3 * (4 - 1)"` → `11.0`.
pub fn eval(expr: &str) -> Result<f64, CalcError> {
    let mut parser = Parser {
        chars: expr.chars().collect(),
        pos: 0,
    };
    let value = parser.expression()?;
    parser.skip_whitespace();
    if parser.pos < parser.chars.len() {
        return Err(CalcError::TrailingInput);
    }
    Ok(value)
}

struct Parser {
    chars: Vec<char>,
    pos: usize,
}

impl Parser {
    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|c| c.is_whitespace()) {
            self.pos += 1;
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek();
        if c.is_some() {
            self.pos += 1;
        }
        c
    }

    // expression := term (('+' | '-') term)*
    fn expression(&mut self) -> Result<f64, CalcError> {
        let mut value = self.term()?;
        loop {
            self.skip_whitespace();
            match self.peek() {
                Some('+') => {
                    self.pos += 1;
                    value += self.term()?;
                }
                Some('-') => {
                    self.pos += 1;
                    value -= self.term()?;
                }
                _ => return Ok(value),
            }
        }
    }

    // term := factor (('*' | '/') factor)*
    fn term(&mut self) -> Result<f64, CalcError> {
        let mut value = self.factor()?;
        loop {
            self.skip_whitespace();
            match self.peek() {
                Some('*') => {
                    self.pos += 1;
                    value *= self.factor()?;
                }
                Some('/') => {
                    self.pos += 1;
                    value /= self.factor()?;
                }
                _ => return Ok(value),
            }
        }
    }

    // factor := '-' factor | '(' expression ')' | number
    fn factor(&mut self) -> Result<f64, CalcError> {
        self.skip_whitespace();
        match self.peek() {
            Some('-') => {
                self.pos += 1;
                Ok(-self.factor()?)
            }
            Some('(') => {
                self.pos += 1;
                let value = self.expression()?;
                self.skip_whitespace();
                match self.advance() {
                    Some(')') => Ok(value),
                    Some(c) => Err(CalcError::UnexpectedChar(c)),
                    None => Err(CalcError::UnexpectedEnd),
                }
            }
            Some(c) if c.is_ascii_digit() || c == '.' => self.number(),
            Some(c) => Err(CalcError::UnexpectedChar(c)),
            None => Err(CalcError::UnexpectedEnd),
        }
    }

    // number := digits ['.' digits], at least one digit overall
    fn number(&mut self) -> Result<f64, CalcError> {
        let start = self.pos;
        let mut seen_dot = false;
        let mut seen_digit = false;

        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                seen_digit = true;
                self.pos += 1;
            } else if c == '.' && !seen_dot {
                seen_dot = true;
                self.pos += 1;
            } else {
                break;
            }
        }

        if !seen_digit {
            return match self.peek() {
                Some(c) => Err(CalcError::UnexpectedChar(c)),
                None => Err(CalcError::UnexpectedEnd),
            };
        }

        let text: String = self.chars[start..self.pos].iter().collect();
        text.parse()
            .map_err(|_| CalcError::UnexpectedChar('.'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precedence_and_parens() {
        assert_eq!(eval("2+2").unwrap(), 4.0);
        assert_eq!(eval("2 + 3 * 4").unwrap(), 14.0);
        assert_eq!(eval("(2 + 3) * 4").unwrap(), 20.0);
        assert_eq!(eval("10 / 4").unwrap(), 2.5);
        assert_eq!(eval("7 - 2 - 1").unwrap(), 4.0);
    }

    #[test]
    fn test_unary_minus_and_decimals() {
        assert_eq!(eval("-3 + 5").unwrap(), 2.0);
        assert_eq!(eval("--4").unwrap(), 4.0);
        assert_eq!(eval("1.5 * 2").unwrap(), 3.0);
        assert_eq!(eval("-(2 + 2)").unwrap(), -4.0);
    }

    #[test]
    fn test_division_by_zero_is_non_finite_not_a_panic() {
        assert!(eval("2/0").unwrap().is_infinite());
        assert!(eval("0/0").unwrap().is_nan());
    }

    #[test]
    fn test_rejects_anything_that_is_not_arithmetic() {
        assert_eq!(eval("2 + x").unwrap_err(), CalcError::UnexpectedChar('x'));
        assert_eq!(eval("system('ls')").unwrap_err(), CalcError::UnexpectedChar('s'));
        assert_eq!(eval("2 +").unwrap_err(), CalcError::UnexpectedEnd);
        assert_eq!(eval("(1 + 2").unwrap_err(), CalcError::UnexpectedEnd);
        assert_eq!(eval("1 2").unwrap_err(), CalcError::TrailingInput);
        assert_eq!(eval("").unwrap_err(), CalcError::UnexpectedEnd);
    }
}
