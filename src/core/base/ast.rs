use std::fmt::{Display, Formatter, Result};

use crate::core::token::Token;

/// Common capability of every tree element: report the literal text of the
/// token that introduced it, and write itself back out as source text (the
/// `Display` impl). Both operations are total — they never fail, including on
/// nodes whose optional children are absent.
pub trait Node: Display {
    fn token_literal(&self) -> &str;
}

/// Root of the tree: one parsed source unit, an ordered sequence of
/// statements. Sole owner of every node beneath it.
#[derive(Debug, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

/// The closed set of statement-shaped nodes. Consumers match exhaustively;
/// adding a variant is a compile-visible change at every match site.
#[derive(Debug, PartialEq, Clone)]
pub enum Statement {
    // let ident = expr;
    Let(LetStatement),
    // return; or return expr;
    Return(ReturnStatement),
    // a bare expression in statement position
    Expression(ExpressionStatement),
}

/// The closed set of expression-shaped nodes. Identifiers are the only
/// expression this grammar has so far.
#[derive(Debug, PartialEq, Clone)]
pub enum Expression {
    Identifier(Identifier),
}

/// `let <name> = <value>;`
///
/// `value` may be absent on a partially built node; rendering tolerates that
/// and omits the value text rather than failing.
#[derive(Debug, PartialEq, Clone)]
pub struct LetStatement {
    /// the `let` token
    pub token: Token,
    pub name: Identifier,
    pub value: Option<Expression>,
}

/// `return;` or `return <expr>;`
#[derive(Debug, PartialEq, Clone)]
pub struct ReturnStatement {
    /// the `return` token
    pub token: Token,
    pub return_value: Option<Expression>,
}

/// Wraps an expression used in statement position, e.g. a lone `foobar;`.
#[derive(Debug, PartialEq, Clone)]
pub struct ExpressionStatement {
    /// the first token of the expression
    pub token: Token,
    pub expression: Option<Expression>,
}

/// A name in expression position. Leaf node, owns no children.
/// `name` always equals `token.literal`; `new` enforces it.
#[derive(Debug, PartialEq, Clone)]
pub struct Identifier {
    pub token: Token,
    pub name: String,
}

impl Program {
    pub fn new() -> Self {
        Program {
            statements: Vec::new(),
        }
    }

    /// Appends one statement at the end, in source order. The parser is the
    /// only caller; it vouches for syntactic validity.
    pub fn push(&mut self, statement: Statement) {
        self.statements.push(statement);
    }
}

impl Identifier {
    /// Builds an identifier from its token, deriving the surface name from
    /// the token literal so the two can never disagree.
    pub fn new(token: Token) -> Self {
        let name = token.literal.clone();
        Identifier { token, name }
    }
}

impl Node for Program {
    /// Literal of the first statement's token, or empty text for an empty
    /// program. Never indexes out of bounds.
    fn token_literal(&self) -> &str {
        match self.statements.first() {
            Some(statement) => statement.token_literal(),
            None => "",
        }
    }
}

impl Node for Statement {
    fn token_literal(&self) -> &str {
        match self {
            Statement::Let(let_statement) => let_statement.token_literal(),
            Statement::Return(return_statement) => return_statement.token_literal(),
            Statement::Expression(expression_statement) => expression_statement.token_literal(),
        }
    }
}

impl Node for Expression {
    fn token_literal(&self) -> &str {
        match self {
            Expression::Identifier(identifier) => identifier.token_literal(),
        }
    }
}

impl Node for LetStatement {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Node for ReturnStatement {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Node for ExpressionStatement {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Node for Identifier {
    fn token_literal(&self) -> &str {
        &self.token.literal
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        // statements self-terminate, no separator between them
        for statement in &self.statements {
            write!(f, "{}", statement)?;
        }
        Ok(())
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Statement::Let(let_statement) => write!(f, "{}", let_statement),
            Statement::Return(return_statement) => write!(f, "{}", return_statement),
            Statement::Expression(expression_statement) => write!(f, "{}", expression_statement),
        }
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Expression::Identifier(identifier) => write!(f, "{}", identifier),
        }
    }
}

impl Display for LetStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{} {} = ", self.token_literal(), self.name)?;
        if let Some(value) = &self.value {
            write!(f, "{}", value)?;
        }
        write!(f, ";")
    }
}

impl Display for ReturnStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.token_literal())?;
        if let Some(return_value) = &self.return_value {
            write!(f, " {}", return_value)?;
        }
        write!(f, ";")
    }
}

impl Display for ExpressionStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        if let Some(expression) = &self.expression {
            write!(f, "{}", expression)?;
        }
        Ok(())
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.name)
    }
}
