mod r#impl;

use thiserror::Error;

use crate::core::lexer::Lexer;
use crate::core::token::Token;

type Result<T> = std::result::Result<T, ParserError>;

/// Token-stream parser with a two-token window, the sole producer of AST
/// values. Recoverable errors are collected in `errors` and parsing resumes
/// at the next statement.
#[derive(Debug)]
pub struct Parser {
    lexer: Lexer,
    token: Token,
    peek_token: Token,
    errors: Vec<ParserError>,
}

#[derive(Debug, Error, PartialEq)]
pub enum ParserError {
    #[error("expected an identifier, got `{0}`")]
    ExpectedIdentifier(Token),

    #[error("expected `=`, got `{0}`")]
    ExpectedAssign(Token),

    #[error("no rule to parse `{0}` at the start of an expression")]
    ExpectedExpression(Token),
}
