use crate::core::base::ast::{
    Expression, ExpressionStatement, Identifier, LetStatement, Program, ReturnStatement, Statement,
};
use crate::core::lexer::Lexer;
use crate::core::parser::{Parser, ParserError, Result};
use crate::core::token::{Token, TokenKind};

impl Parser {
    pub fn new(lexer: Lexer) -> Parser {
        let mut parser = Parser {
            lexer,
            token: Token::eof(),
            peek_token: Token::eof(),
            errors: vec![],
        };
        parser.next_token();
        parser.next_token();
        parser
    }

    /// Builds a Parser straight from source text.
    pub fn from(input: &str) -> Self {
        let lexer = Lexer::new(input);
        Parser::new(lexer)
    }

    /// Parses statements until end of input, appending them to the program
    /// in source order.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::new();
        while self.has_next() {
            match self.parse_statement() {
                Ok(statement) => program.push(statement),
                Err(err) => self.errors.push(err),
            }
            self.next_token();
        }
        program
    }

    pub fn errors(&self) -> &[ParserError] {
        &self.errors
    }

    /// Reads the next token into the two-token window.
    fn next_token(&mut self) {
        self.token = self.peek_token.clone();
        self.peek_token = self.lexer.parse_token();
    }

    fn has_next(&self) -> bool {
        self.token.kind != TokenKind::Eof
    }

    fn parse_statement(&mut self) -> Result<Statement> {
        match self.token.kind {
            TokenKind::Let => self.parse_let_statement(),
            TokenKind::Return => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }

    /// let identifier = expression;
    fn parse_let_statement(&mut self) -> Result<Statement> {
        // cur token is `let`
        let token = self.token.clone();
        self.expect_peek(TokenKind::Ident, ParserError::ExpectedIdentifier)?;
        let name = Identifier::new(self.token.clone());
        self.expect_peek(TokenKind::Assign, ParserError::ExpectedAssign)?;
        self.next_token(); // eat =
        let value = self.parse_expression()?;
        if self.peek_token.kind == TokenKind::Semicolon {
            self.next_token(); // eat ;
        }
        Ok(Statement::Let(LetStatement {
            token,
            name,
            value: Some(value),
        }))
    }

    /// 1. return;
    /// 2. return expr;
    fn parse_return_statement(&mut self) -> Result<Statement> {
        let token = self.token.clone();
        self.next_token(); // eat return
        let mut return_value = None;
        if self.token.kind != TokenKind::Semicolon && self.token.kind != TokenKind::Eof {
            return_value = Some(self.parse_expression()?);
            if self.peek_token.kind == TokenKind::Semicolon {
                self.next_token(); // eat ;
            }
        }
        Ok(Statement::Return(ReturnStatement {
            token,
            return_value,
        }))
    }

    /// expr;
    fn parse_expression_statement(&mut self) -> Result<Statement> {
        let token = self.token.clone();
        let expression = self.parse_expression()?;
        if self.peek_token.kind == TokenKind::Semicolon {
            self.next_token(); // eat ;
        }
        Ok(Statement::Expression(ExpressionStatement {
            token,
            expression: Some(expression),
        }))
    }

    /// Identifiers are the only expression form the grammar has so far; any
    /// other leading token is reported, not guessed at.
    fn parse_expression(&mut self) -> Result<Expression> {
        match self.token.kind {
            TokenKind::Ident => Ok(Expression::Identifier(Identifier::new(self.token.clone()))),
            _ => Err(ParserError::ExpectedExpression(self.token.clone())),
        }
    }

    fn expect_peek(&mut self, kind: TokenKind, err: fn(Token) -> ParserError) -> Result<()> {
        if self.peek_token.kind == kind {
            self.next_token();
            Ok(())
        } else {
            Err(err(self.peek_token.clone()))
        }
    }
}
