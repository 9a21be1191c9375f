use crate::token::{Kind, Token};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompilerError {
    #[error("FileNotFoundError: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("IOError: {0}")]
    IO(#[from] io::Error),
    #[error("ConfigError: {}: {}", .path.display(), .source)]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Failure of a single recognizer pass. Lexical errors surface here because
/// the parser pulls tokens from the lexer as it goes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error(transparent)]
    Lexing(#[from] LexingError),
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}

impl ParseError {
    pub fn line(&self) -> usize {
        match self {
            ParseError::Lexing(err) => err.line,
            ParseError::Syntax(err) => err.line,
        }
    }

    pub fn position(&self) -> usize {
        match self {
            ParseError::Lexing(err) => err.position,
            ParseError::Syntax(err) => err.position,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("{message} {character:?} at line {line}, column {position}")]
pub struct LexingError {
    pub message: String,
    pub character: char,
    pub line: usize,
    pub position: usize,
}

impl LexingError {
    pub fn new(message: impl Into<String>, character: char, line: usize, position: usize) -> Self {
        Self {
            message: message.into(),
            character,
            line,
            position,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("expected {expected} but found {found} {lexeme:?} at line {line}, column {position}")]
pub struct SyntaxError {
    pub expected: String,
    pub found: Kind,
    pub lexeme: String,
    pub line: usize,
    pub position: usize,
}

impl SyntaxError {
    pub fn from_token(token: &Token, expected: impl Into<String>) -> Self {
        Self {
            expected: expected.into(),
            found: token.kind,
            lexeme: token.lexeme(),
            line: token.line,
            position: token.position,
        }
    }
}
