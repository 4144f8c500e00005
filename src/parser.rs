use crate::ast::{Expression, InfixOperator, PrefixOperator, Program, Statement};
use crate::lexer::Lexer;
use crate::token::Token;
use anyhow::{bail, Result};
use std::mem;

#[derive(PartialOrd, PartialEq)]
enum Precedence {
    LOWEST,
    EQUALS,
    LESS,
    SUM,
    PRODUCT,
    PREFIX,
    CALL,
}

impl Token {
    fn precedence(&self) -> Precedence {
        use Precedence::*;
        use Token::*;
        match self {
            PLUS | MINUS => SUM,
            ASTERISK | SLASH => PRODUCT,
            LT | GT => LESS,
            EQ | NEQ => EQUALS,
            LPAREN => CALL,
            _ => LOWEST,
        }
    }
}

type PrefixParseFn<'a> = fn(&mut Parser<'a>) -> Result<Expression>;
type InfixParseFn<'a> = fn(&mut Parser<'a>, Expression) -> Result<Expression>;

pub struct Parser<'a> {
    l: Lexer<'a>,
    cur: Token,
    peek: Token,
    errors: Vec<String>,
}

impl<'a> Parser<'a> {
    pub fn new(l: Lexer<'a>) -> Self {
        let mut parser = Parser {
            l,
            cur: Token::EOF,
            peek: Token::EOF,
            errors: Vec::new(),
        };
        parser.next_token();
        parser.next_token();
        parser
    }

    // one table row per token kind that can start an expression
    fn prefix_parse_fn(token: &Token) -> Option<PrefixParseFn<'a>> {
        use Token::*;
        match token {
            IDENT(..) => Some(Self::parse_identifier),
            INT(..) => Some(Self::parse_integer_literal),
            TRUE | FALSE => Some(Self::parse_boolean),
            BANG | MINUS => Some(Self::parse_prefix_expression),
            LPAREN => Some(Self::parse_grouped_expression),
            IF => Some(Self::parse_if_expression),
            FUNCTION => Some(Self::parse_function_literal),
            _ => None,
        }
    }

    // one table row per token kind that can continue an expression
    fn infix_parse_fn(token: &Token) -> Option<InfixParseFn<'a>> {
        use Token::*;
        match token {
            PLUS | MINUS | ASTERISK | SLASH | LT | GT | EQ | NEQ => {
                Some(Self::parse_infix_expression)
            }
            LPAREN => Some(Self::parse_call_expression),
            _ => None,
        }
    }

    fn next_token(&mut self) {
        self.cur = self.peek.clone();
        self.peek = self.l.next().unwrap_or(Token::EOF);
    }
    fn cur_token_is(&self, token: Token) -> bool {
        self.cur == token
    }
    fn peek_token_is(&self, token: Token) -> bool {
        self.peek == token
    }
    fn expect_peek(&mut self, expected: Token) -> Result<()> {
        if mem::discriminant(&self.peek) == mem::discriminant(&expected) {
            self.next_token();
            Ok(())
        } else {
            bail!(
                "expected next token to be {}, got {} instead",
                expected.kind(),
                self.peek.kind()
            );
        }
    }
    fn expect_ident(&mut self) -> Result<String> {
        match &self.peek {
            Token::IDENT(name) => {
                let name = name.clone();
                self.next_token();
                Ok(name)
            }
            token => {
                bail!(
                    "expected next token to be IDENT, got {} instead",
                    token.kind()
                );
            }
        }
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn parse_program(&mut self) -> Program {
        let mut statements = Vec::new();
        while !self.cur_token_is(Token::EOF) {
            match self.parse_statement() {
                Ok(stmt) => statements.push(stmt),
                Err(err) => {
                    self.errors.push(err.to_string());
                    self.synchronize();
                }
            }
            self.next_token();
        }
        Program { statements }
    }

    // skip to the nearest statement boundary after a failed statement
    fn synchronize(&mut self) {
        while !self.cur_token_is(Token::SEMICOLON)
            && !self.cur_token_is(Token::RBRACE)
            && !self.cur_token_is(Token::EOF)
        {
            self.next_token();
        }
    }

    fn parse_statement(&mut self) -> Result<Statement> {
        match self.cur {
            Token::LET => self.parse_let_statement(),
            Token::RETURN => self.parse_return_statement(),
            _ => self.parse_expression_statement(),
        }
    }
    fn parse_let_statement(&mut self) -> Result<Statement> {
        let name = self.expect_ident()?;
        self.expect_peek(Token::ASSIGN)?;
        self.next_token();
        let value = self.parse_expression(Precedence::LOWEST)?;
        if self.peek_token_is(Token::SEMICOLON) {
            self.next_token();
        }
        Ok(Statement::LetStatement { name, value })
    }
    fn parse_return_statement(&mut self) -> Result<Statement> {
        if self.peek_token_is(Token::SEMICOLON) {
            self.next_token();
            return Ok(Statement::ReturnStatement(None));
        }
        self.next_token();
        let value = self.parse_expression(Precedence::LOWEST)?;
        if self.peek_token_is(Token::SEMICOLON) {
            self.next_token();
        }
        Ok(Statement::ReturnStatement(Some(value)))
    }
    fn parse_expression_statement(&mut self) -> Result<Statement> {
        let exp = self.parse_expression(Precedence::LOWEST)?;
        if self.peek_token_is(Token::SEMICOLON) {
            self.next_token();
        }
        Ok(Statement::ExpressionStatement(exp))
    }
    fn parse_expression(&mut self, precedence: Precedence) -> Result<Expression> {
        let prefix = match Self::prefix_parse_fn(&self.cur) {
            Some(prefix) => prefix,
            None => {
                bail!("no prefix parse function for {} found", self.cur.kind());
            }
        };
        let mut exp = prefix(self)?;
        while !self.peek_token_is(Token::SEMICOLON) && precedence < self.peek.precedence() {
            let infix = match Self::infix_parse_fn(&self.peek) {
                Some(infix) => infix,
                None => return Ok(exp),
            };
            self.next_token();
            exp = infix(self, exp)?;
        }
        Ok(exp)
    }
    fn parse_identifier(&mut self) -> Result<Expression> {
        match &self.cur {
            Token::IDENT(name) => Ok(Expression::Identifier(name.clone())),
            _ => unreachable!(),
        }
    }
    fn parse_integer_literal(&mut self) -> Result<Expression> {
        match &self.cur {
            Token::INT(literal) => {
                let value = literal.parse::<i64>()?;
                Ok(Expression::IntegerLiteral { value })
            }
            _ => unreachable!(),
        }
    }
    fn parse_boolean(&mut self) -> Result<Expression> {
        Ok(Expression::Boolean {
            value: self.cur_token_is(Token::TRUE),
        })
    }
    fn parse_grouped_expression(&mut self) -> Result<Expression> {
        self.next_token();
        let exp = self.parse_expression(Precedence::LOWEST)?;
        self.expect_peek(Token::RPAREN)?;
        Ok(exp)
    }
    fn parse_prefix_expression(&mut self) -> Result<Expression> {
        let op = match &self.cur {
            Token::MINUS => PrefixOperator::MINUS,
            Token::BANG => PrefixOperator::BANG,
            token => {
                bail!("unexpected operator: {:?}", token);
            }
        };
        self.next_token();
        let right = self.parse_expression(Precedence::PREFIX)?;
        Ok(Expression::PrefixExpression {
            operator: op,
            right: Box::new(right),
        })
    }
    fn parse_infix_expression(&mut self, left: Expression) -> Result<Expression> {
        let op = match &self.cur {
            Token::PLUS => InfixOperator::PLUS,
            Token::MINUS => InfixOperator::MINUS,
            Token::ASTERISK => InfixOperator::ASTERISK,
            Token::SLASH => InfixOperator::SLASH,
            Token::LT => InfixOperator::LT,
            Token::GT => InfixOperator::GT,
            Token::EQ => InfixOperator::EQ,
            Token::NEQ => InfixOperator::NEQ,
            token => {
                bail!("unexpected operator: {:?}", token);
            }
        };
        let precedence = self.cur.precedence();
        self.next_token();
        let right = self.parse_expression(precedence)?;
        Ok(Expression::InfixExpression {
            left: Box::new(left),
            operator: op,
            right: Box::new(right),
        })
    }
    fn parse_if_expression(&mut self) -> Result<Expression> {
        self.expect_peek(Token::LPAREN)?;
        self.next_token();
        let condition = self.parse_expression(Precedence::LOWEST)?;
        self.expect_peek(Token::RPAREN)?;
        self.expect_peek(Token::LBRACE)?;
        let consequence = self.parse_block_statement()?;
        let alternative = if self.peek_token_is(Token::ELSE) {
            self.next_token();
            self.expect_peek(Token::LBRACE)?;
            let alt = self.parse_block_statement()?;
            Some(Box::new(alt))
        } else {
            None
        };
        Ok(Expression::IfExpression {
            condition: Box::new(condition),
            consequence: Box::new(consequence),
            alternative,
        })
    }
    fn parse_function_literal(&mut self) -> Result<Expression> {
        self.expect_peek(Token::LPAREN)?;
        let parameters = self.parse_function_parameters()?;
        self.expect_peek(Token::LBRACE)?;
        let body = self.parse_block_statement()?;
        Ok(Expression::FunctionLiteral {
            parameters,
            body: Box::new(body),
        })
    }
    fn parse_function_parameters(&mut self) -> Result<Vec<String>> {
        let mut parameters = Vec::new();
        if self.peek_token_is(Token::RPAREN) {
            self.next_token();
            return Ok(parameters);
        }
        parameters.push(self.expect_ident()?);
        while self.peek_token_is(Token::COMMA) {
            self.next_token();
            parameters.push(self.expect_ident()?);
        }
        self.expect_peek(Token::RPAREN)?;
        Ok(parameters)
    }
    fn parse_call_expression(&mut self, function: Expression) -> Result<Expression> {
        let arguments = self.parse_call_arguments()?;
        Ok(Expression::CallExpression {
            function: Box::new(function),
            arguments,
        })
    }
    fn parse_call_arguments(&mut self) -> Result<Vec<Expression>> {
        let mut arguments = Vec::new();
        if self.peek_token_is(Token::RPAREN) {
            self.next_token();
            return Ok(arguments);
        }
        self.next_token();
        arguments.push(self.parse_expression(Precedence::LOWEST)?);
        while self.peek_token_is(Token::COMMA) {
            self.next_token();
            self.next_token();
            arguments.push(self.parse_expression(Precedence::LOWEST)?);
        }
        self.expect_peek(Token::RPAREN)?;
        Ok(arguments)
    }
    fn parse_block_statement(&mut self) -> Result<Statement> {
        self.next_token();
        let mut statements = Vec::new();
        while !self.cur_token_is(Token::RBRACE) {
            if self.cur_token_is(Token::EOF) {
                bail!("expected next token to be RBRACE, got EOF instead");
            }
            let stmt = self.parse_statement()?;
            statements.push(stmt);
            self.next_token();
        }
        Ok(Statement::BlockStatement(statements))
    }
}
