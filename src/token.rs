use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token {
    pub line: usize,
    pub position: usize,
    pub kind: Kind,
    pub value: Option<Value>,
}

impl Token {
    /// Source text of the token, as it would be echoed in a diagnostic.
    pub fn lexeme(&self) -> String {
        match &self.value {
            Some(Value::Integer(n)) => n.to_string(),
            Some(Value::Text(text)) => text.clone(),
            Some(Value::RelOp(op)) => op.to_string(),
            None => self.kind.to_string(),
        }
    }

    pub fn text(&self) -> Option<&str> {
        match &self.value {
            Some(Value::Text(text)) => Some(text.as_str()),
            _ => None,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Kind {
    // Literals
    Integer,     // 42

    // Delimiters
    LParen,      // (
    RParen,      // )
    Comma,       // ,
    Semi,        // ;
    Eol,         // \n

    // Keywords
    Int,         // int
    Main,        // main
    Printf,      // printf
    Begin,       // begin
    End,         // end
    If,          // if

    Identifier,
    RelOp,       // =, !=, <, >

    EOF
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Kind::Integer => "INTEGER",
            Kind::LParen => "LPAREN",
            Kind::RParen => "RPAREN",
            Kind::Comma => "COMMA",
            Kind::Semi => "SEMI",
            Kind::Eol => "EOL",
            Kind::Int => "INT",
            Kind::Main => "MAIN",
            Kind::Printf => "PRINTF",
            Kind::Begin => "BEGIN",
            Kind::End => "END",
            Kind::If => "IF",
            Kind::Identifier => "IDENT",
            Kind::RelOp => "RELOP",
            Kind::EOF => "EOF",
        };
        f.write_str(name)
    }
}

impl Serialize for Kind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Value {
    Integer(u64),
    Text(String),
    RelOp(RelOp),
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum RelOp {
    Equal,
    NotEqual,
    Less,
    Greater,
}

impl fmt::Display for RelOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let op = match self {
            RelOp::Equal => "=",
            RelOp::NotEqual => "!=",
            RelOp::Less => "<",
            RelOp::Greater => ">",
        };
        f.write_str(op)
    }
}

pub fn keyword(ident: &str) -> Option<Kind> {
    match ident {
        "int" => Some(Kind::Int),
        "main" => Some(Kind::Main),
        "printf" => Some(Kind::Printf),
        "begin" => Some(Kind::Begin),
        "end" => Some(Kind::End),
        "if" => Some(Kind::If),
        _ => None,
    }
}
