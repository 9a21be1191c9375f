use cmini_check::lexer::Lexer;
use cmini_check::token::{Kind, RelOp, Token, Value};
use rstest::rstest;

fn lex(source: &str) -> Vec<Token> {
    Lexer::new(source).tokenize().unwrap()
}

fn kinds(source: &str) -> Vec<Kind> {
    lex(source).into_iter().map(|token| token.kind).collect()
}

#[test]
fn empty_input_is_a_single_eof() {
    assert_eq!(kinds(""), vec![Kind::EOF]);
}

#[test]
fn spaces_only_is_a_single_eof() {
    assert_eq!(kinds("    "), vec![Kind::EOF]);
}

#[test]
fn lex_integer_value() {
    let tokens = lex("0042 7");
    assert_eq!(tokens[0].kind, Kind::Integer);
    assert_eq!(tokens[0].value, Some(Value::Integer(42)));
    assert_eq!(tokens[1].value, Some(Value::Integer(7)));
    assert_eq!(tokens[2].kind, Kind::EOF);
}

#[test]
fn lex_delimiters() {
    assert_eq!(
        kinds("( ) , ;\n"),
        vec![Kind::LParen, Kind::RParen, Kind::Comma, Kind::Semi, Kind::Eol, Kind::EOF]
    );
}

#[rstest]
#[case("int", Kind::Int)]
#[case("main", Kind::Main)]
#[case("printf", Kind::Printf)]
#[case("begin", Kind::Begin)]
#[case("end", Kind::End)]
#[case("if", Kind::If)]
fn lex_keywords(#[case] source: &str, #[case] kind: Kind) {
    let tokens = lex(source);
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, kind);
    assert_eq!(tokens[0].text(), Some(source));
}

#[rstest]
#[case("internal")]
#[case("mainly")]
#[case("ifx")]
#[case("end_")]
#[case("expr")]
#[case("relop")]
#[case("Int")]
#[case("n1")]
fn lex_identifiers(#[case] source: &str) {
    let tokens = lex(source);
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, Kind::Identifier);
    assert_eq!(tokens[0].text(), Some(source));
}

#[rstest]
#[case("=", RelOp::Equal)]
#[case("!=", RelOp::NotEqual)]
#[case("<", RelOp::Less)]
#[case(">", RelOp::Greater)]
fn lex_relational_operators(#[case] source: &str, #[case] op: RelOp) {
    let tokens = lex(source);
    assert_eq!(tokens[0].kind, Kind::RelOp);
    assert_eq!(tokens[0].value, Some(Value::RelOp(op)));
    assert_eq!(tokens[0].lexeme(), source);
}

#[test]
fn lex_condition_without_spaces() {
    assert_eq!(
        kinds("if(a!=b)"),
        vec![
            Kind::If,
            Kind::LParen,
            Kind::Identifier,
            Kind::RelOp,
            Kind::Identifier,
            Kind::RParen,
            Kind::EOF
        ]
    );
}

#[rstest]
#[case("n1 $ n2", '$', 1, 4)]
#[case("a ! b", '!', 1, 3)]
#[case("int x;\n\tx", '\t', 2, 1)]
#[case("x\r\n", '\r', 1, 2)]
fn lex_errors(#[case] source: &str, #[case] character: char, #[case] line: usize, #[case] position: usize) {
    let err = Lexer::new(source).tokenize().unwrap_err();
    assert_eq!(err.character, character);
    assert_eq!((err.line, err.position), (line, position));
}

#[test]
fn lex_error_is_raised_lazily() {
    let mut lexer = Lexer::new("n1 $ n2");
    assert_eq!(lexer.next_token().unwrap().text(), Some("n1"));
    assert!(lexer.next_token().is_err());
}

#[test]
fn tokens_record_their_line() {
    let tokens = lex("int main()\nbegin\nend");
    let lines: Vec<usize> = tokens.iter().map(|token| token.line).collect();
    assert_eq!(lines, vec![1, 1, 1, 1, 1, 2, 2, 3, 3]);
}

#[test]
fn less_equal_is_two_operators() {
    assert_eq!(kinds("a <= b"), vec![Kind::Identifier, Kind::RelOp, Kind::RelOp, Kind::Identifier, Kind::EOF]);
}
