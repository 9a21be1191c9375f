use crate::error::LexingError;
use crate::token::{keyword, Kind, RelOp, Token, Value};

/// Pull-based tokenizer. Each call to [`Lexer::next_token`] classifies the
/// characters at the cursor and returns exactly one token; once the input is
/// exhausted it keeps returning `EOF`.
pub struct Lexer {
    chars: Vec<char>,
    current: usize,
    line: usize,
    position: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            current: 0,
            line: 1,
            position: 1,
        }
    }

    fn at(&self) -> Option<char> {
        self.chars.get(self.current).copied()
    }

    fn advance(&mut self) {
        if self.at() == Some('\n') {
            self.line += 1;
            self.position = 1;
        } else {
            self.position += 1;
        }
        self.current += 1;
    }

    fn create_token(&self, kind: Kind, value: Option<Value>, line: usize, position: usize) -> Token {
        Token {
            line,
            position,
            kind,
            value,
        }
    }

    /// Consume characters while `accept` holds, starting at the cursor.
    fn take_while(&mut self, accept: impl Fn(char) -> bool) -> String {
        let mut text = String::new();
        while let Some(c) = self.at().filter(|&c| accept(c)) {
            text.push(c);
            self.advance();
        }
        text
    }

    pub fn next_token(&mut self) -> Result<Token, LexingError> {
        // Only the space character is insignificant.
        while self.at() == Some(' ') {
            self.advance();
        }

        let (line, position) = (self.line, self.position);

        let ch = match self.at() {
            Some(ch) => ch,
            None => return Ok(self.create_token(Kind::EOF, None, line, position)),
        };

        if ch.is_ascii_digit() {
            let digits = self.take_while(|c| c.is_ascii_digit());
            let number = digits
                .parse::<u64>()
                .map_err(|_| LexingError::new("Integer literal out of range", ch, line, position))?;
            return Ok(self.create_token(Kind::Integer, Some(Value::Integer(number)), line, position));
        }

        if ch.is_alphabetic() {
            let ident = self.take_while(|c| c.is_alphanumeric() || c == '_');
            let kind = keyword(&ident).unwrap_or(Kind::Identifier);
            return Ok(self.create_token(kind, Some(Value::Text(ident)), line, position));
        }

        let kind = match ch {
            '(' => Kind::LParen,
            ')' => Kind::RParen,
            ',' => Kind::Comma,
            ';' => Kind::Semi,
            '\n' => Kind::Eol,
            '=' | '!' | '<' | '>' => return self.relational_operator(ch, line, position),
            _ => return Err(LexingError::new("Invalid character", ch, line, position)),
        };
        self.advance();

        Ok(self.create_token(kind, None, line, position))
    }

    fn relational_operator(&mut self, ch: char, line: usize, position: usize) -> Result<Token, LexingError> {
        self.advance();
        let op = match ch {
            '=' => RelOp::Equal,
            '<' => RelOp::Less,
            '>' => RelOp::Greater,
            _ => {
                if self.at() != Some('=') {
                    return Err(LexingError::new("Invalid character", ch, line, position));
                }
                self.advance();
                RelOp::NotEqual
            }
        };

        Ok(self.create_token(Kind::RelOp, Some(Value::RelOp(op)), line, position))
    }

    /// Drain the lexer into a vector ending with a single `EOF` token.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexingError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let done = token.kind == Kind::EOF;
            tokens.push(token);
            if done {
                return Ok(tokens);
            }
        }
    }
}
