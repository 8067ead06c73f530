//! The lexer: `advance`, `match_kind`, `lexeme` exactly as spec.md §4.1
//! names them, dispatching on the leading character per the scanning table.

use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};

pub struct Lexer<'a> {
    cursor: Cursor<'a>,
    current: Option<Token>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { cursor: Cursor::new(source), current: None }
    }

    /// Replaces the current token with the next one in the stream.
    pub fn advance(&mut self) {
        self.current = Some(self.scan());
    }

    /// Returns whether the current token matches `kind`, lazily priming the
    /// current token on first use (spec.md §4.1).
    pub fn matches(&mut self, kind: TokenKind) -> bool {
        if self.current.is_none() {
            self.advance();
        }
        self.current.as_ref().map(|t| t.kind) == Some(kind)
    }

    /// The most recently scanned token's lexeme text.
    pub fn lexeme(&self) -> &str {
        self.current.as_ref().map(|t| t.lexeme.as_str()).unwrap_or("")
    }

    /// The current token's kind, lazily priming it on first use.
    pub fn kind(&mut self) -> TokenKind {
        if self.current.is_none() {
            self.advance();
        }
        self.current.as_ref().map(|t| t.kind).unwrap_or(TokenKind::Eof)
    }

    fn skip_spaces_and_tabs(&mut self) {
        while matches!(self.cursor.current_char(), ' ' | '\t') {
            self.cursor.advance();
        }
    }

    fn scan(&mut self) -> Token {
        self.skip_spaces_and_tabs();

        if self.cursor.is_at_end() {
            #[cfg(feature = "diagnostics")]
            tracing::trace!("lexer: eof");
            return Token::new(TokenKind::Eof, "");
        }

        let c = self.cursor.current_char();
        let tok = match c {
            d if d.is_ascii_digit() => self.scan_int(),
            l if l.is_ascii_alphabetic() || l == '_' => self.scan_id(),
            '+' => self.scan_plus(),
            '-' => self.scan_minus(),
            '*' | '/' => {
                self.cursor.advance();
                Token::new(TokenKind::MulDiv, c.to_string())
            }
            '&' => {
                self.cursor.advance();
                Token::new(TokenKind::And, "&")
            }
            '|' => {
                self.cursor.advance();
                Token::new(TokenKind::Or, "|")
            }
            '^' => {
                self.cursor.advance();
                Token::new(TokenKind::Xor, "^")
            }
            '=' => {
                self.cursor.advance();
                Token::new(TokenKind::Assign, "=")
            }
            '(' => {
                self.cursor.advance();
                Token::new(TokenKind::LParen, "(")
            }
            ')' => {
                self.cursor.advance();
                Token::new(TokenKind::RParen, ")")
            }
            '\n' => {
                self.cursor.advance();
                Token::new(TokenKind::End, "")
            }
            other => {
                self.cursor.advance();
                Token::new(TokenKind::Unknown, other.to_string())
            }
        };

        #[cfg(feature = "diagnostics")]
        tracing::trace!(?tok.kind, lexeme = %tok.lexeme, "lexer: token");
        tok
    }

    fn scan_int(&mut self) -> Token {
        let mut lexeme = String::new();
        while self.cursor.current_char().is_ascii_digit() {
            lexeme.push(self.cursor.current_char());
            self.cursor.advance();
        }
        Token::new(TokenKind::Int, lexeme)
    }

    fn scan_id(&mut self) -> Token {
        let mut lexeme = String::new();
        while {
            let c = self.cursor.current_char();
            c.is_ascii_alphanumeric() || c == '_'
        } {
            lexeme.push(self.cursor.current_char());
            self.cursor.advance();
        }
        Token::new(TokenKind::Id, lexeme)
    }

    fn scan_plus(&mut self) -> Token {
        self.cursor.advance();
        match self.cursor.current_char() {
            '+' => {
                self.cursor.advance();
                Token::new(TokenKind::IncDec, "++")
            }
            '=' => {
                self.cursor.advance();
                Token::new(TokenKind::AddSubAssign, "+=")
            }
            _ => Token::new(TokenKind::AddSub, "+"),
        }
    }

    fn scan_minus(&mut self) -> Token {
        self.cursor.advance();
        match self.cursor.current_char() {
            '-' => {
                self.cursor.advance();
                Token::new(TokenKind::IncDec, "--")
            }
            '=' => {
                self.cursor.advance();
                Token::new(TokenKind::AddSubAssign, "-=")
            }
            _ => Token::new(TokenKind::AddSub, "-"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str) -> Vec<TokenKind> {
        let mut lex = Lexer::new(src);
        let mut out = Vec::new();
        loop {
            lex.advance();
            let kind = lex.current.as_ref().unwrap().kind;
            out.push(kind);
            if kind == TokenKind::Eof {
                break;
            }
        }
        out
    }

    #[test]
    fn digraphs_disambiguate_on_one_char_lookahead() {
        let mut lex = Lexer::new("+ ++ += - -- -=");
        let expected = [
            (TokenKind::AddSub, "+"),
            (TokenKind::IncDec, "++"),
            (TokenKind::AddSubAssign, "+="),
            (TokenKind::AddSub, "-"),
            (TokenKind::IncDec, "--"),
            (TokenKind::AddSubAssign, "-="),
        ];
        for (kind, lexeme) in expected {
            lex.advance();
            assert_eq!(lex.current.as_ref().unwrap().kind, kind);
            assert_eq!(lex.lexeme(), lexeme);
        }
    }

    #[test]
    fn integers_and_identifiers() {
        assert_eq!(
            kinds("42 foo_1 \n"),
            vec![TokenKind::Int, TokenKind::Id, TokenKind::End, TokenKind::Eof]
        );
    }

    #[test]
    fn newline_is_not_whitespace() {
        assert_eq!(kinds("\n"), vec![TokenKind::End, TokenKind::Eof]);
    }

    #[test]
    fn unknown_character_is_reported_but_not_fatal_at_lex_time() {
        assert_eq!(kinds("@"), vec![TokenKind::Unknown, TokenKind::Eof]);
    }

    #[test]
    fn lexeme_is_truncated_past_255_bytes() {
        let long_ident = "a".repeat(400);
        let mut lex = Lexer::new(&long_ident);
        lex.advance();
        assert_eq!(lex.lexeme().len(), 255);
    }

    #[test]
    fn match_kind_lazily_primes_current_token() {
        let mut lex = Lexer::new("123");
        assert!(lex.matches(TokenKind::Int));
    }
}
