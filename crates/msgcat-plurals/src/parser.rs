//! Recursive-descent parser for the Plural-Forms grammar.
//!
//! Precedence ladder, loosest to tightest (all match C):
//!
//! ```text
//! expr   := cond
//! cond   := or ( '?' expr ':' expr )?
//! or     := and  ( '||' and )*
//! and    := eq   ( '&&' eq )*
//! eq     := rel  ( ('==' | '!=') rel )*
//! rel    := add  ( ('<' | '<=' | '>' | '>=') add )*
//! add    := mul  ( ('+' | '-') mul )*
//! mul    := unary( ('*' | '/' | '%') unary )*
//! unary  := '!' unary | primary
//! primary:= NUMBER | 'n' | '(' expr ')'
//! ```
//!
//! The conditional is right-associative, so Slavic-style chains
//! `a ? 0 : b ? 1 : 2` group as `a ? 0 : (b ? 1 : 2)`.

use crate::ast::{BinOp, Expr};
use crate::error::PluralsError;
use crate::lexer::Lexer;
use crate::token::Token;

/// Tokens accepted at an operand position.
const OPERAND_EXPECTED: &[&str] = &["NUMBER", "'n'", "'!'", "'('"];

pub(crate) fn parse(src: &str) -> Result<Expr, PluralsError> {
    let mut parser = Parser::new(src)?;
    let expr = parser.cond()?;
    if parser.token != Token::Eof {
        return Err(parser.unexpected(&["$end"]));
    }
    Ok(expr)
}

struct Parser<'a> {
    src: &'a str,
    lexer: Lexer<'a>,
    token: Token,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(src: &'a str) -> Result<Self, PluralsError> {
        let mut lexer = Lexer::new(src);
        let first = lexer.next_token()?;
        Ok(Self {
            src,
            lexer,
            token: first.token,
            pos: first.start,
        })
    }

    fn bump(&mut self) -> Result<(), PluralsError> {
        let next = self.lexer.next_token()?;
        self.token = next.token;
        self.pos = next.start;
        Ok(())
    }

    fn unexpected(&self, expected: &[&str]) -> PluralsError {
        PluralsError::syntax(self.src, self.pos, self.token, expected)
    }

    fn cond(&mut self) -> Result<Expr, PluralsError> {
        let cond = self.or()?;
        if self.token != Token::Question {
            return Ok(cond);
        }
        self.bump()?;
        let then = self.cond()?;
        if self.token != Token::Colon {
            return Err(self.unexpected(&["':'"]));
        }
        self.bump()?;
        let otherwise = self.cond()?;
        Ok(Expr::Cond(
            Box::new(cond),
            Box::new(then),
            Box::new(otherwise),
        ))
    }

    fn or(&mut self) -> Result<Expr, PluralsError> {
        let mut lhs = self.and()?;
        while self.token == Token::OrOr {
            self.bump()?;
            let rhs = self.and()?;
            lhs = Expr::Binary(BinOp::Or, Box::new(lhs), Box::new(rhs));
        }
        Ok(lhs)
    }

    fn and(&mut self) -> Result<Expr, PluralsError> {
        let mut lhs = self.equality()?;
        while self.token == Token::AndAnd {
            self.bump()?;
            let rhs = self.equality()?;
            lhs = Expr::Binary(BinOp::And, Box::new(lhs), Box::new(rhs));
        }
        Ok(lhs)
    }

    fn equality(&mut self) -> Result<Expr, PluralsError> {
        let mut lhs = self.relational()?;
        loop {
            let op = match self.token {
                Token::EqEq => BinOp::Eq,
                Token::Ne => BinOp::Ne,
                _ => return Ok(lhs),
            };
            self.bump()?;
            let rhs = self.relational()?;
            lhs = Expr::Binary(op, Box::new(lhs), Box::new(rhs));
        }
    }

    fn relational(&mut self) -> Result<Expr, PluralsError> {
        let mut lhs = self.additive()?;
        loop {
            let op = match self.token {
                Token::Lt => BinOp::Lt,
                Token::Le => BinOp::Le,
                Token::Gt => BinOp::Gt,
                Token::Ge => BinOp::Ge,
                _ => return Ok(lhs),
            };
            self.bump()?;
            let rhs = self.additive()?;
            lhs = Expr::Binary(op, Box::new(lhs), Box::new(rhs));
        }
    }

    fn additive(&mut self) -> Result<Expr, PluralsError> {
        let mut lhs = self.multiplicative()?;
        loop {
            let op = match self.token {
                Token::Plus => BinOp::Add,
                Token::Minus => BinOp::Sub,
                _ => return Ok(lhs),
            };
            self.bump()?;
            let rhs = self.multiplicative()?;
            lhs = Expr::Binary(op, Box::new(lhs), Box::new(rhs));
        }
    }

    fn multiplicative(&mut self) -> Result<Expr, PluralsError> {
        let mut lhs = self.unary()?;
        loop {
            let op = match self.token {
                Token::Star => BinOp::Mul,
                Token::Slash => BinOp::Div,
                Token::Percent => BinOp::Rem,
                _ => return Ok(lhs),
            };
            self.bump()?;
            let rhs = self.unary()?;
            lhs = Expr::Binary(op, Box::new(lhs), Box::new(rhs));
        }
    }

    fn unary(&mut self) -> Result<Expr, PluralsError> {
        if self.token == Token::Bang {
            self.bump()?;
            return Ok(Expr::Not(Box::new(self.unary()?)));
        }
        self.primary()
    }

    fn primary(&mut self) -> Result<Expr, PluralsError> {
        match self.token {
            Token::Number(value) => {
                self.bump()?;
                Ok(Expr::Num(value))
            }
            Token::Var => {
                self.bump()?;
                Ok(Expr::Var)
            }
            Token::LParen => {
                self.bump()?;
                let inner = self.cond()?;
                if self.token != Token::RParen {
                    return Err(self.unexpected(&["')'"]));
                }
                self.bump()?;
                Ok(inner)
            }
            _ => Err(self.unexpected(OPERAND_EXPECTED)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::parse;
    use crate::ast::{BinOp, Expr};

    #[test]
    fn parses_single_variable() {
        assert_eq!(parse("n").expect("parse"), Expr::Var);
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        let expr = parse("2+3*4").expect("parse");
        assert_eq!(expr.eval(0), 14);
    }

    #[test]
    fn relational_binds_tighter_than_equality() {
        // 1+2==3  =>  (1+2) == 3  =>  1
        assert_eq!(parse("1+2==3").expect("parse").eval(0), 1);
        // n==1<2  =>  n == (1<2)  =>  n == 1
        assert_eq!(parse("n==1<2").expect("parse").eval(1), 1);
        assert_eq!(parse("n==1<2").expect("parse").eval(3), 0);
    }

    #[test]
    fn conditional_is_right_associative() {
        let expr = parse("n==1 ? 0 : n==2 ? 1 : 2").expect("parse");
        assert_eq!(expr.eval(1), 0);
        assert_eq!(expr.eval(2), 1);
        assert_eq!(expr.eval(7), 2);
    }

    #[test]
    fn parenthesized_groups_override_precedence() {
        assert_eq!(parse("(2+3)*4").expect("parse").eval(0), 20);
    }

    #[test]
    fn double_negation_collapses_to_boolean() {
        assert_eq!(parse("!!n").expect("parse").eval(9), 1);
        assert_eq!(parse("!!n").expect("parse").eval(0), 0);
    }

    #[test]
    fn leading_close_paren_is_rejected_with_caret() {
        let err = parse(")1>2").unwrap_err();
        assert_eq!(
            err.to_string(),
            "parse error: syntax error: unexpected ')', expecting NUMBER or 'n' or '!' or '('\n)1>2\n^"
        );
    }

    #[test]
    fn doubled_relational_operator_is_rejected_with_caret() {
        let err = parse("1>>2").unwrap_err();
        assert_eq!(
            err.to_string(),
            "parse error: syntax error: unexpected '>', expecting NUMBER or 'n' or '!' or '('\n1>>2\n  ^"
        );
    }

    #[test]
    fn missing_colon_is_rejected() {
        let err = parse("n==1 ? 0").unwrap_err();
        assert!(err.to_string().contains("expecting ':'"), "{err}");
    }

    #[test]
    fn unbalanced_parenthesis_is_rejected() {
        let err = parse("(n==1").unwrap_err();
        assert!(err.to_string().contains("unexpected $end, expecting ')'"), "{err}");
    }

    #[test]
    fn trailing_tokens_are_rejected() {
        let err = parse("n n").unwrap_err();
        assert!(err.to_string().contains("unexpected 'n', expecting $end"), "{err}");
    }

    #[test]
    fn non_n_identifier_is_a_syntax_error() {
        let err = parse("count==1").unwrap_err();
        assert!(err.to_string().contains("unexpected IDENT"), "{err}");
    }

    #[test]
    fn triple_equals_fails_to_parse() {
        // `!==` lexes as `!=` then a stray `=`.
        let err = parse("(n!==1 ? 1 : 0)").unwrap_err();
        assert!(err.to_string().contains("invalid character '='"), "{err}");
    }

    #[test]
    fn empty_parens_are_rejected() {
        let err = parse("()").unwrap_err();
        assert!(err.to_string().contains("unexpected ')'"), "{err}");
    }

    #[test]
    fn mismatched_parser_state_reports_binary_op_misuse() {
        let err = parse("n==").unwrap_err();
        assert!(err.to_string().contains("unexpected $end"), "{err}");
    }
}
