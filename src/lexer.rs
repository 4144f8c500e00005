use crate::token::{lookup_identifier, Token};
use std::str::Chars;

pub struct Lexer<'a> {
    input: Chars<'a>,
    cur: Option<char>,
    peek: Option<char>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        let mut lexer = Self {
            input: input.chars(),
            cur: None,
            peek: None,
        };
        lexer.read_char();
        lexer.read_char();
        lexer
    }
    fn read_char(&mut self) {
        self.cur = self.peek;
        self.peek = self.input.next();
    }
    fn skip_whitespace(&mut self) {
        while self.cur.map_or(false, |c| c.is_ascii_whitespace()) {
            self.read_char();
        }
    }
    fn read_identifier(&mut self) -> String {
        let mut res = String::new();
        while self.cur.map_or(false, is_letter) {
            res.push(self.cur.unwrap());
            self.read_char();
        }
        res
    }
    fn read_number(&mut self) -> String {
        let mut res = String::new();
        while self.cur.map_or(false, |c| c.is_ascii_digit()) {
            res.push(self.cur.unwrap());
            self.read_char();
        }
        res
    }
}

fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        use Token::*;
        self.skip_whitespace();
        let c = self.cur?;
        let token = match c {
            '=' => {
                if self.peek == Some('=') {
                    self.read_char();
                    self.read_char();
                    EQ
                } else {
                    self.read_char();
                    ASSIGN
                }
            }
            '!' => {
                if self.peek == Some('=') {
                    self.read_char();
                    self.read_char();
                    NEQ
                } else {
                    self.read_char();
                    BANG
                }
            }
            '+' => {
                self.read_char();
                PLUS
            }
            '-' => {
                self.read_char();
                MINUS
            }
            '*' => {
                self.read_char();
                ASTERISK
            }
            '/' => {
                self.read_char();
                SLASH
            }
            '<' => {
                self.read_char();
                LT
            }
            '>' => {
                self.read_char();
                GT
            }
            ',' => {
                self.read_char();
                COMMA
            }
            ';' => {
                self.read_char();
                SEMICOLON
            }
            '(' => {
                self.read_char();
                LPAREN
            }
            ')' => {
                self.read_char();
                RPAREN
            }
            '{' => {
                self.read_char();
                LBRACE
            }
            '}' => {
                self.read_char();
                RBRACE
            }
            c if is_letter(c) => lookup_identifier(&self.read_identifier()),
            c if c.is_ascii_digit() => INT(self.read_number()),
            c => {
                self.read_char();
                ILLEGAL(c)
            }
        };
        Some(token)
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::Lexer;
    use crate::token::Token;
    use crate::token::Token::*;

    fn assert_tokens(input: &str, tests: Vec<Token>) {
        let lexer = Lexer::new(input);
        let tokens: Vec<Token> = lexer.collect();
        assert_eq!(tests, tokens);
    }

    #[test]
    fn test_next_token() {
        let input = r#"let five = 5;
let ten = 10;

let add = fn(x, y) {
  x + y;
};

let result = add(five, ten);
!-/*5;
5 < 10 > 5;

if (5 < 10) {
  return true;
} else {
  return false;
}

10 == 10;
10 != 9;
"#;
        let tests = vec![
            LET,
            IDENT("five".to_string()),
            ASSIGN,
            INT("5".to_string()),
            SEMICOLON,
            LET,
            IDENT("ten".to_string()),
            ASSIGN,
            INT("10".to_string()),
            SEMICOLON,
            LET,
            IDENT("add".to_string()),
            ASSIGN,
            FUNCTION,
            LPAREN,
            IDENT("x".to_string()),
            COMMA,
            IDENT("y".to_string()),
            RPAREN,
            LBRACE,
            IDENT("x".to_string()),
            PLUS,
            IDENT("y".to_string()),
            SEMICOLON,
            RBRACE,
            SEMICOLON,
            LET,
            IDENT("result".to_string()),
            ASSIGN,
            IDENT("add".to_string()),
            LPAREN,
            IDENT("five".to_string()),
            COMMA,
            IDENT("ten".to_string()),
            RPAREN,
            SEMICOLON,
            BANG,
            MINUS,
            SLASH,
            ASTERISK,
            INT("5".to_string()),
            SEMICOLON,
            INT("5".to_string()),
            LT,
            INT("10".to_string()),
            GT,
            INT("5".to_string()),
            SEMICOLON,
            IF,
            LPAREN,
            INT("5".to_string()),
            LT,
            INT("10".to_string()),
            RPAREN,
            LBRACE,
            RETURN,
            TRUE,
            SEMICOLON,
            RBRACE,
            ELSE,
            LBRACE,
            RETURN,
            FALSE,
            SEMICOLON,
            RBRACE,
            INT("10".to_string()),
            EQ,
            INT("10".to_string()),
            SEMICOLON,
            INT("10".to_string()),
            NEQ,
            INT("9".to_string()),
            SEMICOLON,
        ];
        assert_tokens(input, tests);
    }

    #[test]
    fn test_single_char_tokens() {
        let tests = vec![
            ("=", ASSIGN),
            ("+", PLUS),
            ("-", MINUS),
            ("!", BANG),
            ("*", ASTERISK),
            ("/", SLASH),
            ("<", LT),
            (">", GT),
            (",", COMMA),
            (";", SEMICOLON),
            ("(", LPAREN),
            (")", RPAREN),
            ("{", LBRACE),
            ("}", RBRACE),
        ];
        for (input, expected) in tests {
            let mut lexer = Lexer::new(input);
            assert_eq!(Some(expected), lexer.next());
            assert_eq!(None, lexer.next());
        }
    }

    #[test]
    fn test_two_char_operators() {
        assert_tokens("==", vec![EQ]);
        assert_tokens("!=", vec![NEQ]);
        assert_tokens("=5", vec![ASSIGN, INT("5".to_string())]);
        assert_tokens("!5", vec![BANG, INT("5".to_string())]);
        assert_tokens("= =", vec![ASSIGN, ASSIGN]);
    }

    #[test]
    fn test_keyword_identifier_boundary() {
        assert_tokens("letx", vec![IDENT("letx".to_string())]);
        assert_tokens("let x", vec![LET, IDENT("x".to_string())]);
        assert_tokens("_foo", vec![IDENT("_foo".to_string())]);
        assert_tokens(
            "fn if else return true false",
            vec![FUNCTION, IF, ELSE, RETURN, TRUE, FALSE],
        );
    }

    #[test]
    fn test_integer_literals() {
        assert_tokens("12345", vec![INT("12345".to_string())]);
        assert_tokens("-5", vec![MINUS, INT("5".to_string())]);
    }

    #[test]
    fn test_illegal_token() {
        assert_tokens("@", vec![ILLEGAL('@')]);
        assert_tokens("5 @ 5", vec![INT("5".to_string()), ILLEGAL('@'), INT("5".to_string())]);
    }

    #[test]
    fn test_exhausted_lexer_stays_exhausted() {
        let mut lexer = Lexer::new("1");
        assert_eq!(Some(INT("1".to_string())), lexer.next());
        assert_eq!(None, lexer.next());
        assert_eq!(None, lexer.next());
    }
}
