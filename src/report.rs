use crate::error::{CompilerError, ParseError};
use crate::parser::Summary;
use crate::token::Kind;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Accepted,
    LexError,
    SyntaxError,
    Unexpected,
}

#[derive(Debug, Serialize)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

/// Final verdict of a run, printable as text or JSON.
#[derive(Debug, Serialize)]
pub struct Report {
    pub source: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<Summary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Token kind the recognizer stopped on, for syntax errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub found: Option<Kind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

impl Report {
    pub fn new(source: impl Into<String>, result: Result<Summary, CompilerError>) -> Self {
        let source = source.into();
        match result {
            Ok(summary) => Report {
                source,
                status: Status::Accepted,
                summary: Some(summary),
                error: None,
                found: None,
                location: None,
            },
            Err(CompilerError::Parse(err)) => {
                let (status, found) = match &err {
                    ParseError::Lexing(_) => (Status::LexError, None),
                    ParseError::Syntax(syntax) => (Status::SyntaxError, Some(syntax.found)),
                };
                Report {
                    source,
                    status,
                    summary: None,
                    found,
                    location: Some(Location {
                        line: err.line(),
                        column: err.position(),
                    }),
                    error: Some(err.to_string()),
                }
            }
            Err(err) => Report {
                source,
                status: Status::Unexpected,
                summary: None,
                error: Some(err.to_string()),
                found: None,
                location: None,
            },
        }
    }

    pub fn is_accepted(&self) -> bool {
        self.status == Status::Accepted
    }

    /// Process exit status: 0 when accepted, 1 otherwise.
    pub fn exit_status(&self) -> u8 {
        if self.is_accepted() {
            0
        } else {
            1
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let error = self.error.as_deref().unwrap_or_default();
        match self.status {
            Status::Accepted => write!(f, "Parsing completed successfully."),
            Status::LexError => write!(f, "Lexical error during parsing: {}", error),
            Status::SyntaxError => write!(f, "Syntax error during parsing: {}", error),
            Status::Unexpected => write!(f, "Parsing failed due to an unexpected error: {}", error),
        }
    }
}
