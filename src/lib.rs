//! Grammar checker for a small C-like toy language: `int` declarations, a
//! `main()` entry block, `if` statements over relational comparisons and
//! `printf(ident)` calls. The crate only answers whether a source text
//! conforms; it builds no syntax tree.

pub mod config;
pub mod driver;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod report;
pub mod token;

pub use error::{CompilerError, LexingError, ParseError, SyntaxError};
pub use lexer::Lexer;
pub use parser::{parse, Parser, Summary};

/// Program checked when neither a path nor a configured sample is given.
pub const SAMPLE_PROGRAM: &str = "
int main()
begin
int n1, n, n3;
if( n1 > n2 )
begin
 printf(n1);
 end
 if ( n2 > n3 )
 begin
printf( n2);
 end
 if( n3 > n1 )
 begin
 printf( n3);
end
end";
