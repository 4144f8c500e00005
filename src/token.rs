use once_cell::sync::Lazy;
use std::collections::HashMap;

#[derive(PartialEq, Debug, Clone)]
pub enum Token {
    ILLEGAL(char),
    EOF,

    IDENT(String), // foobar, x, y, ...
    INT(String),

    ASSIGN,   // =
    PLUS,     // +
    MINUS,    // -
    BANG,     // !
    ASTERISK, // *
    SLASH,    // /

    LT, // <
    GT, // >

    EQ,  // ==
    NEQ, // !=

    COMMA,     // ,
    SEMICOLON, // ;

    LPAREN, // (
    RPAREN, // )
    LBRACE, // {
    RBRACE, // }

    FUNCTION,
    LET,
    TRUE,
    FALSE,
    IF,
    ELSE,
    RETURN,
}

static KEYWORDS: Lazy<HashMap<&'static str, Token>> = Lazy::new(|| {
    use Token::*;
    let mut map = HashMap::new();
    map.insert("fn", FUNCTION);
    map.insert("let", LET);
    map.insert("true", TRUE);
    map.insert("false", FALSE);
    map.insert("if", IF);
    map.insert("else", ELSE);
    map.insert("return", RETURN);
    map
});

// checked only after the whole identifier is scanned, so `letx` stays IDENT
pub fn lookup_identifier(ident: &str) -> Token {
    KEYWORDS
        .get(ident)
        .cloned()
        .unwrap_or_else(|| Token::IDENT(ident.to_string()))
}

impl Token {
    /// Kind name used in parser error messages.
    pub fn kind(&self) -> &'static str {
        use Token::*;
        match self {
            ILLEGAL(..) => "ILLEGAL",
            EOF => "EOF",
            IDENT(..) => "IDENT",
            INT(..) => "INT",
            ASSIGN => "ASSIGN",
            PLUS => "PLUS",
            MINUS => "MINUS",
            BANG => "BANG",
            ASTERISK => "ASTERISK",
            SLASH => "SLASH",
            LT => "LT",
            GT => "GT",
            EQ => "EQ",
            NEQ => "NEQ",
            COMMA => "COMMA",
            SEMICOLON => "SEMICOLON",
            LPAREN => "LPAREN",
            RPAREN => "RPAREN",
            LBRACE => "LBRACE",
            RBRACE => "RBRACE",
            FUNCTION => "FUNCTION",
            LET => "LET",
            TRUE => "TRUE",
            FALSE => "FALSE",
            IF => "IF",
            ELSE => "ELSE",
            RETURN => "RETURN",
        }
    }
}
