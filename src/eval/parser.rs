//! Recursive-descent parser producing an expression tree.
//!
//! Grammar (lowest to highest precedence):
//!
//! ```text
//! expr  := term (('+' | '-') term)*
//! term  := unary (('*' | '/' | '//') unary)*
//! unary := ('+' | '-') unary | power
//! power := atom ('**' unary)?
//! atom  := NUMBER | '(' expr ')'
//! ```
//!
//! `**` is right-associative and binds tighter than a sign on its left, so
//! `-2**2` is `-(2**2)` while `2**-1` is `2**(-1)`.
//!
//! Runs of left-associative operators are kept flat in [`Expr::Chain`], so
//! the tree only grows deeper through parentheses, signs and `**`, all of
//! which count against `MAX_DEPTH`.

use super::lexer::Token;
use super::number::Number;
use super::EvalError;

/// Nesting limit for parentheses, chained signs and powers.
const MAX_DEPTH: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    FloorDiv,
}

impl BinaryOp {
    fn apply(self, lhs: Number, rhs: Number) -> Result<Number, EvalError> {
        match self {
            BinaryOp::Add => lhs.add(rhs),
            BinaryOp::Sub => lhs.sub(rhs),
            BinaryOp::Mul => lhs.mul(rhs),
            BinaryOp::Div => lhs.div(rhs),
            BinaryOp::FloorDiv => lhs.floor_div(rhs),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(Number),
    Neg(Box<Expr>),
    Pos(Box<Expr>),
    /// `first op1 e1 op2 e2 ...`, folded left to right.
    Chain {
        first: Box<Expr>,
        rest: Vec<(BinaryOp, Expr)>,
    },
    Power {
        base: Box<Expr>,
        exponent: Box<Expr>,
    },
}

impl Expr {
    /// Evaluate the tree, left operand first.
    pub fn eval(&self) -> Result<Number, EvalError> {
        match self {
            Expr::Literal(n) => Ok(n.clone()),
            Expr::Neg(inner) => inner.eval()?.neg(),
            Expr::Pos(inner) => inner.eval(),
            Expr::Chain { first, rest } => rest
                .iter()
                .try_fold(first.eval()?, |acc, (op, rhs)| op.apply(acc, rhs.eval()?)),
            Expr::Power { base, exponent } => {
                let base = base.eval()?;
                base.pow(exponent.eval()?)
            }
        }
    }
}

/// Parse a full token stream into a single expression.
pub fn parse(tokens: &[Token]) -> Result<Expr, EvalError> {
    if tokens.is_empty() {
        return Err(EvalError::Syntax("empty expression".to_string()));
    }
    let mut parser = Parser {
        tokens,
        pos: 0,
        depth: 0,
    };
    let expr = parser.expr()?;
    match parser.peek() {
        None => Ok(expr),
        Some(token) => Err(EvalError::Syntax(format!("unexpected token {:?}", token))),
    }
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<&'a Token> {
        let token = self.peek();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn descend(&mut self) -> Result<(), EvalError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(EvalError::Syntax("expression nested too deeply".to_string()));
        }
        Ok(())
    }

    /// Parse `operand (op operand)*` for one precedence level.
    fn chain(
        &mut self,
        operand: fn(&mut Self) -> Result<Expr, EvalError>,
        operator: fn(&Token) -> Option<BinaryOp>,
    ) -> Result<Expr, EvalError> {
        let first = operand(self)?;
        let mut rest = Vec::new();
        while let Some(op) = self.peek().and_then(operator) {
            self.pos += 1;
            rest.push((op, operand(self)?));
        }
        if rest.is_empty() {
            return Ok(first);
        }
        Ok(Expr::Chain {
            first: Box::new(first),
            rest,
        })
    }

    fn expr(&mut self) -> Result<Expr, EvalError> {
        self.chain(Self::term, |token| match token {
            Token::Plus => Some(BinaryOp::Add),
            Token::Minus => Some(BinaryOp::Sub),
            _ => None,
        })
    }

    fn term(&mut self) -> Result<Expr, EvalError> {
        self.chain(Self::unary, |token| match token {
            Token::Star => Some(BinaryOp::Mul),
            Token::Slash => Some(BinaryOp::Div),
            Token::FloorDiv => Some(BinaryOp::FloorDiv),
            _ => None,
        })
    }

    fn unary(&mut self) -> Result<Expr, EvalError> {
        match self.peek() {
            Some(Token::Minus) | Some(Token::Plus) => {
                let negate = matches!(self.advance(), Some(Token::Minus));
                self.descend()?;
                let inner = Box::new(self.unary()?);
                self.depth -= 1;
                Ok(if negate { Expr::Neg(inner) } else { Expr::Pos(inner) })
            }
            _ => self.power(),
        }
    }

    fn power(&mut self) -> Result<Expr, EvalError> {
        let base = self.atom()?;
        if matches!(self.peek(), Some(Token::Power)) {
            self.pos += 1;
            self.descend()?;
            let exponent = self.unary()?;
            self.depth -= 1;
            return Ok(Expr::Power {
                base: Box::new(base),
                exponent: Box::new(exponent),
            });
        }
        Ok(base)
    }

    fn atom(&mut self) -> Result<Expr, EvalError> {
        match self.advance() {
            Some(Token::Number(n)) => Ok(Expr::Literal(n.clone())),
            Some(Token::LParen) => {
                self.descend()?;
                let inner = self.expr()?;
                self.depth -= 1;
                match self.advance() {
                    Some(Token::RParen) => Ok(inner),
                    _ => Err(EvalError::Syntax("missing closing parenthesis".to_string())),
                }
            }
            Some(token) => Err(EvalError::Syntax(format!("unexpected token {:?}", token))),
            None => Err(EvalError::Syntax("unexpected end of expression".to_string())),
        }
    }
}
