//! SQL tokenizer implementation.

use super::{Keyword, LexError, Span, Token, TokenKind};

/// A lexer that tokenizes SQL input.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    /// The input source code.
    input: &'a str,
    /// The current byte position.
    pos: usize,
    /// The byte position of the start of the current token.
    start: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            start: 0,
        }
    }

    /// Returns the current character without advancing.
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Returns the next character without advancing.
    fn peek_next(&self) -> Option<char> {
        let mut chars = self.input[self.pos..].chars();
        chars.next();
        chars.next()
    }

    /// Advances to the next character and returns it.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    /// Creates a token spanning from start to the current position.
    const fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(kind, Span::new(self.start, self.pos))
    }

    /// Scans an identifier or keyword. Keywords win over identifiers.
    fn scan_identifier(&mut self) -> Token {
        while self.peek().is_some_and(|c| c.is_alphanumeric() || c == '_') {
            self.advance();
        }

        let text = &self.input[self.start..self.pos];
        match Keyword::from_str(text) {
            Some(keyword) => self.make_token(TokenKind::Keyword(keyword)),
            None => self.make_token(TokenKind::Identifier(String::from(text))),
        }
    }

    /// Scans an unsigned integer or decimal.
    fn scan_number(&mut self) -> Result<Token, LexError> {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        let is_decimal =
            self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit());
        if is_decimal {
            self.advance(); // consume .
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        let text = &self.input[self.start..self.pos];
        if is_decimal {
            text.parse::<f64>()
                .map(|n| self.make_token(TokenKind::Decimal(n)))
                .map_err(|_| LexError::new("invalid decimal", text, self.start))
        } else {
            text.parse::<i64>()
                .map(|n| self.make_token(TokenKind::Integer(n)))
                .map_err(|_| LexError::new("integer out of range", text, self.start))
        }
    }

    /// Scans a quoted string literal. The contents are kept verbatim, except
    /// that a doubled quote character stands for one quote.
    fn scan_string(&mut self, quote: char) -> Result<Token, LexError> {
        self.advance(); // consume opening quote
        let mut value = String::new();

        loop {
            match self.advance() {
                Some(c) if c == quote => {
                    if self.peek() == Some(quote) {
                        value.push(quote);
                        self.advance();
                    } else {
                        break;
                    }
                }
                Some(c) => value.push(c),
                None => {
                    return Err(LexError::new(
                        "unterminated string literal",
                        &self.input[self.start..],
                        self.start,
                    ));
                }
            }
        }

        Ok(self.make_token(TokenKind::String(value)))
    }

    /// Scans the next token.
    ///
    /// # Errors
    ///
    /// Returns a `LexError` when the text at the current position matches no
    /// token class.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        self.skip_whitespace();
        self.start = self.pos;

        let Some(c) = self.advance() else {
            return Ok(self.make_token(TokenKind::Eof));
        };

        let token = match c {
            '(' => self.make_token(TokenKind::LeftParen),
            ')' => self.make_token(TokenKind::RightParen),
            ',' => self.make_token(TokenKind::Comma),
            ';' => self.make_token(TokenKind::Semicolon),
            '.' => self.make_token(TokenKind::Dot),
            '*' => self.make_token(TokenKind::Star),
            '=' => self.make_token(TokenKind::Eq),
            '<' => match self.peek() {
                Some('=') => {
                    self.advance();
                    self.make_token(TokenKind::LtEq)
                }
                Some('>') => {
                    self.advance();
                    self.make_token(TokenKind::NotEq)
                }
                _ => self.make_token(TokenKind::Lt),
            },
            '>' => {
                if self.peek() == Some('=') {
                    self.advance();
                    self.make_token(TokenKind::GtEq)
                } else {
                    self.make_token(TokenKind::Gt)
                }
            }
            '\'' | '"' => {
                self.pos = self.start;
                return self.scan_string(c);
            }
            c if c.is_ascii_digit() => {
                self.pos = self.start;
                return self.scan_number();
            }
            c if c.is_alphabetic() || c == '_' => {
                self.pos = self.start;
                self.scan_identifier()
            }
            _ => {
                return Err(LexError::new(
                    "unrecognized input",
                    &self.input[self.start..self.pos],
                    self.start,
                ));
            }
        };
        Ok(token)
    }

    /// Tokenizes the entire input. The last token is always `Eof`.
    ///
    /// # Errors
    ///
    /// Returns the first `LexError` encountered.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tracing::trace!(count = tokens.len(), "tokenized input");
        Ok(tokens)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_kinds(input: &str) -> Vec<TokenKind> {
        Lexer::new(input)
            .tokenize()
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    fn lex_err(input: &str) -> LexError {
        Lexer::new(input).tokenize().unwrap_err()
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(token_kinds(""), vec![TokenKind::Eof]);
        assert_eq!(token_kinds("   \n\t  "), vec![TokenKind::Eof]);
    }

    #[test]
    fn test_keywords_case_insensitive() {
        assert_eq!(
            token_kinds("select FROM wHeRe"),
            vec![
                TokenKind::Keyword(Keyword::Select),
                TokenKind::Keyword(Keyword::From),
                TokenKind::Keyword(Keyword::Where),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_keyword_prefix_is_identifier() {
        // Whole words are matched against the keyword table.
        assert_eq!(
            token_kinds("selected order_id intx"),
            vec![
                TokenKind::Identifier(String::from("selected")),
                TokenKind::Identifier(String::from("order_id")),
                TokenKind::Identifier(String::from("intx")),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_identifiers() {
        assert_eq!(
            token_kinds("foo bar_baz _qux t1"),
            vec![
                TokenKind::Identifier(String::from("foo")),
                TokenKind::Identifier(String::from("bar_baz")),
                TokenKind::Identifier(String::from("_qux")),
                TokenKind::Identifier(String::from("t1")),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_numbers() {
        assert_eq!(
            token_kinds("42 0 3.5 10"),
            vec![
                TokenKind::Integer(42),
                TokenKind::Integer(0),
                TokenKind::Decimal(3.5),
                TokenKind::Integer(10),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_number_followed_by_dot() {
        assert_eq!(
            token_kinds("1.x"),
            vec![
                TokenKind::Integer(1),
                TokenKind::Dot,
                TokenKind::Identifier(String::from("x")),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_strings_both_quotes() {
        assert_eq!(
            token_kinds("'hello' \"world\""),
            vec![
                TokenKind::String(String::from("hello")),
                TokenKind::String(String::from("world")),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_string_keeps_non_ascii() {
        assert_eq!(
            token_kinds("'%张%'"),
            vec![TokenKind::String(String::from("%张%")), TokenKind::Eof]
        );
    }

    #[test]
    fn test_string_with_escaped_quote() {
        assert_eq!(
            token_kinds("'it''s' \"say \"\"hi\"\"\""),
            vec![
                TokenKind::String(String::from("it's")),
                TokenKind::String(String::from("say \"hi\"")),
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_keyword_inside_quotes_is_string() {
        assert_eq!(
            token_kinds("'select'"),
            vec![TokenKind::String(String::from("select")), TokenKind::Eof]
        );
    }

    #[test]
    fn test_operators() {
        assert_eq!(
            token_kinds("= <> < <= > >="),
            vec![
                TokenKind::Eq,
                TokenKind::NotEq,
                TokenKind::Lt,
                TokenKind::LtEq,
                TokenKind::Gt,
                TokenKind::GtEq,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_punctuation() {
        assert_eq!(
            token_kinds("( ) , . * ;"),
            vec![
                TokenKind::LeftParen,
                TokenKind::RightParen,
                TokenKind::Comma,
                TokenKind::Dot,
                TokenKind::Star,
                TokenKind::Semicolon,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_simple_select() {
        assert_eq!(
            token_kinds("select * from blog where age>=18;"),
            vec![
                TokenKind::Keyword(Keyword::Select),
                TokenKind::Star,
                TokenKind::Keyword(Keyword::From),
                TokenKind::Identifier(String::from("blog")),
                TokenKind::Keyword(Keyword::Where),
                TokenKind::Identifier(String::from("age")),
                TokenKind::GtEq,
                TokenKind::Integer(18),
                TokenKind::Semicolon,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_span_tracking() {
        let tokens = Lexer::new("SELECT id;").tokenize().unwrap();
        assert_eq!(tokens[0].span, Span::new(0, 6));
        assert_eq!(tokens[1].span, Span::new(7, 9));
        assert_eq!(tokens[2].span, Span::new(9, 10));
        assert!(tokens[3].span.is_empty());
    }

    #[test]
    fn test_span_counts_bytes_of_non_ascii() {
        let tokens = Lexer::new("'张' x").tokenize().unwrap();
        assert_eq!(tokens[0].span, Span::new(0, 5));
        assert_eq!(tokens[1].span, Span::new(6, 7));
    }

    #[test]
    fn test_unrecognized_character() {
        let err = lex_err("SELECT a - b");
        assert_eq!(err.fragment, "-");
        assert_eq!(err.offset, 9);
        assert_eq!(err.to_string(), "unrecognized input '-' at offset 9");
    }

    #[test]
    fn test_bang_equal_is_rejected() {
        let err = lex_err("a != b");
        assert_eq!(err.fragment, "!");
        assert_eq!(err.offset, 2);
    }

    #[test]
    fn test_unterminated_string() {
        let err = lex_err("name = 'abc");
        assert_eq!(err.reason, "unterminated string literal");
        assert_eq!(err.fragment, "'abc");
        assert_eq!(err.offset, 7);
    }

    #[test]
    fn test_integer_overflow() {
        let err = lex_err("LIMIT 99999999999999999999");
        assert_eq!(err.reason, "integer out of range");
        assert_eq!(err.offset, 6);
    }
}
