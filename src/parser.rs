use crate::error::{ParseError, SyntaxError};
use crate::lexer::Lexer;
use crate::token::{Kind, Token};
use log::{debug, trace};
use serde::Serialize;

/// What a successful pass saw. This is bookkeeping, not a syntax tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub tokens: usize,
    pub declared: Vec<String>,
    pub has_main: bool,
    pub blocks: usize,
    pub if_statements: usize,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Declaration {
    pub names: Vec<String>,
    pub main: bool,
}

/// Recursive-descent recognizer with a single token of lookahead.
pub struct Parser {
    lexer: Lexer,
    current: Token,
    summary: Summary,
}

impl Parser {
    pub fn new(source: &str) -> Result<Self, ParseError> {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token()?;
        Ok(Self {
            lexer,
            current,
            summary: Summary::default(),
        })
    }

    fn at(&self) -> &Token {
        &self.current
    }

    fn error(&self, expected: impl Into<String>) -> ParseError {
        SyntaxError::from_token(self.at(), expected).into()
    }

    /// Consume the current token if it has the expected kind.
    fn eat(&mut self, expecting: Kind) -> Result<Token, ParseError> {
        trace!("Eating token: {} {:?}", self.at().kind, self.at().lexeme());
        if self.at().kind != expecting {
            return Err(self.error(expecting.to_string()));
        }

        let next = self.lexer.next_token()?;
        self.summary.tokens += 1;
        Ok(std::mem::replace(&mut self.current, next))
    }

    fn eat_identifier(&mut self) -> Result<String, ParseError> {
        let token = self.eat(Kind::Identifier)?;
        Ok(token.text().unwrap_or_default().to_string())
    }

    /// Recognize the whole input. `EOF` itself is never consumed.
    pub fn parse(mut self) -> Result<Summary, ParseError> {
        debug!("Parsing started");
        while self.at().kind != Kind::EOF {
            match self.at().kind {
                Kind::Int => {
                    self.eat(Kind::Int)?;
                    self.parse_declaration()?;
                }
                Kind::Eol => {
                    self.eat(Kind::Eol)?;
                }
                Kind::If => self.parse_if_statement()?,
                Kind::Printf => self.parse_printf_statement()?,
                Kind::Begin => self.parse_block()?,
                Kind::Integer
                | Kind::LParen
                | Kind::RParen
                | Kind::Comma
                | Kind::Semi
                | Kind::Main
                | Kind::End
                | Kind::Identifier
                | Kind::RelOp
                | Kind::EOF => return Err(self.error("a declaration, statement or block")),
            }
        }

        Ok(self.summary)
    }

    fn parse_block(&mut self) -> Result<(), ParseError> {
        debug!("Block");
        self.eat(Kind::Begin)?;
        while self.at().kind != Kind::End {
            self.parse_statement()?;
        }
        self.eat(Kind::End)?;
        self.summary.blocks += 1;
        Ok(())
    }

    fn parse_statement(&mut self) -> Result<(), ParseError> {
        debug!("Statement");
        match self.at().kind {
            Kind::Int => {
                self.parse_declaration()?;
            }
            Kind::Eol => {
                self.eat(Kind::Eol)?;
            }
            Kind::If => self.parse_if_statement()?,
            Kind::Printf => self.parse_printf_statement()?,
            Kind::Integer
            | Kind::LParen
            | Kind::RParen
            | Kind::Comma
            | Kind::Semi
            | Kind::Main
            | Kind::Begin
            | Kind::End
            | Kind::Identifier
            | Kind::RelOp
            | Kind::EOF => return Err(self.error("a statement")),
        }
        Ok(())
    }

    fn parse_if_statement(&mut self) -> Result<(), ParseError> {
        debug!("If statement");
        self.eat(Kind::If)?;
        self.eat(Kind::LParen)?;
        self.parse_expression()?;
        self.eat(Kind::RParen)?;
        self.eat(Kind::Eol)?;
        self.parse_block()?;
        self.summary.if_statements += 1;
        Ok(())
    }

    fn parse_printf_statement(&mut self) -> Result<(), ParseError> {
        debug!("Printf statement");
        self.eat(Kind::Printf)?;
        self.eat(Kind::LParen)?;
        self.eat(Kind::Identifier)?;
        self.eat(Kind::RParen)?;
        self.eat(Kind::Semi)?;
        Ok(())
    }

    /// An optional `int` is re-checked on every round, so `int a, int b;`
    /// and `int , a;` are accepted while a missing `;` is not.
    fn parse_declaration(&mut self) -> Result<Declaration, ParseError> {
        debug!("Declaration");
        let mut declaration = Declaration::default();
        loop {
            if self.at().kind == Kind::Int {
                self.eat(Kind::Int)?;
            }

            match self.at().kind {
                Kind::Semi => {
                    self.eat(Kind::Semi)?;
                    break;
                }
                Kind::Main => {
                    self.eat(Kind::Main)?;
                    self.eat(Kind::LParen)?;
                    self.eat(Kind::RParen)?;
                    self.eat(Kind::Eol)?;
                    declaration.main = true;
                    break;
                }
                Kind::Identifier => {
                    declaration.names.push(self.eat_identifier()?);
                    if !matches!(self.at().kind, Kind::Comma | Kind::Semi) {
                        return Err(self.error("COMMA or SEMI"));
                    }
                }
                Kind::Comma => {
                    self.eat(Kind::Comma)?;
                }
                Kind::Integer
                | Kind::LParen
                | Kind::RParen
                | Kind::Eol
                | Kind::Int
                | Kind::Printf
                | Kind::Begin
                | Kind::End
                | Kind::If
                | Kind::RelOp
                | Kind::EOF => return Err(self.error("a declaration")),
            }
        }

        self.summary.declared.extend(declaration.names.iter().cloned());
        self.summary.has_main |= declaration.main;
        Ok(declaration)
    }

    fn parse_expression(&mut self) -> Result<(), ParseError> {
        debug!("Expression");
        self.eat(Kind::Identifier)?;
        while self.at().kind == Kind::RelOp {
            self.eat(Kind::RelOp)?;
            self.eat(Kind::Identifier)?;
        }
        Ok(())
    }
}

/// Check `source` against the grammar in one pass.
pub fn parse(source: &str) -> Result<Summary, ParseError> {
    Parser::new(source)?.parse()
}
