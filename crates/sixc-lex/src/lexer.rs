use crate::cursor::Cursor;
use crate::error::{LexError, Result};
use crate::token::{Token, TokenKind};
use sixc_util::{Interner, Span};

/// Scans a source string into tokens, eagerly producing the full list
/// (the grammar has no reason to stream: the parser consumes the whole
/// token sequence anyway). Halts and returns on the first error.
pub struct Lexer<'a> {
    source: &'a str,
    cursor: Cursor<'a>,
    interner: &'a mut Interner,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, interner: &'a mut Interner) -> Self {
        Self { source, cursor: Cursor::new(source), interner }
    }

    pub fn tokenize(mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        Ok(tokens)
    }

    fn skip_whitespace_and_comments(&mut self) {
        loop {
            match self.cursor.current() {
                Some(b' ') | Some(b'\t') | Some(b'\r') | Some(b'\n') => {
                    self.cursor.advance();
                }
                Some(b'/') if self.cursor.peek_at(1) == Some(b'/') => {
                    self.cursor.bump_while(|b| b != b'\n');
                }
                _ => break,
            }
        }
    }

    fn start(&self) -> (usize, u32, u32) {
        (self.cursor.position(), self.cursor.line(), self.cursor.column())
    }

    fn span_from(&self, start: (usize, u32, u32)) -> Span {
        Span::new(start.0, self.cursor.position(), start.1, start.2)
    }

    fn next_token(&mut self) -> Result<Token> {
        self.skip_whitespace_and_comments();
        let start = self.start();

        let Some(byte) = self.cursor.current() else {
            return Ok(Token::new(TokenKind::Eof, self.span_from(start)));
        };

        let kind = match byte {
            b'0'..=b'9' => return self.lex_number(start),
            b'A'..=b'Z' | b'a'..=b'z' | b'_' => return self.lex_identifier(start),

            b';' => self.single(TokenKind::Semi),
            b'(' => self.single(TokenKind::LParen),
            b')' => self.single(TokenKind::RParen),
            b'{' => self.single(TokenKind::LBrace),
            b'}' => self.single(TokenKind::RBrace),
            b',' => self.single(TokenKind::Comma),

            b'+' => self.one_or_two(b'+', TokenKind::Plus, TokenKind::PlusPlus),
            b'-' => self.one_or_two(b'-', TokenKind::Minus, TokenKind::MinusMinus),
            b'~' => self.single(TokenKind::Tilde),
            b'!' => self.one_or_two(b'=', TokenKind::Bang, TokenKind::BangEq),
            b'=' => self.one_or_two(b'=', TokenKind::Eq, TokenKind::EqEq),
            b'&' => self.one_or_two(b'&', TokenKind::Amp, TokenKind::AmpAmp),
            b'|' => self.one_or_two(b'|', TokenKind::Pipe, TokenKind::PipePipe),
            b'^' => self.one_or_two(b'^', TokenKind::Caret, TokenKind::CaretCaret),
            b'<' => {
                if self.cursor.peek_at(1) == Some(b'<') {
                    self.cursor.advance();
                    self.cursor.advance();
                    TokenKind::Shl
                } else if self.cursor.peek_at(1) == Some(b'=') {
                    self.cursor.advance();
                    self.cursor.advance();
                    TokenKind::Le
                } else {
                    self.cursor.advance();
                    TokenKind::Lt
                }
            }
            b'>' => {
                if self.cursor.peek_at(1) == Some(b'>') {
                    self.cursor.advance();
                    self.cursor.advance();
                    TokenKind::Shr
                } else if self.cursor.peek_at(1) == Some(b'=') {
                    self.cursor.advance();
                    self.cursor.advance();
                    TokenKind::Ge
                } else {
                    self.cursor.advance();
                    TokenKind::Gt
                }
            }

            other => {
                self.cursor.advance();
                return Err(LexError::UnexpectedChar {
                    ch: other as char,
                    span: self.span_from(start),
                });
            }
        };

        Ok(Token::new(kind, self.span_from(start)))
    }

    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.cursor.advance();
        kind
    }

    fn one_or_two(&mut self, second: u8, one: TokenKind, two: TokenKind) -> TokenKind {
        self.cursor.advance();
        if self.cursor.current() == Some(second) {
            self.cursor.advance();
            two
        } else {
            one
        }
    }

    fn lex_number(&mut self, start: (usize, u32, u32)) -> Result<Token> {
        self.cursor.bump_while(|b| b.is_ascii_digit());
        let span = self.span_from(start);
        let text = self.source_slice(start.0, span.end);
        match text.parse::<u32>() {
            Ok(value) if value <= u8::MAX as u32 => {
                Ok(Token::new(TokenKind::Int(value as u8), span))
            }
            _ => Err(LexError::IntLiteralOutOfRange { text: text.to_string(), span }),
        }
    }

    fn lex_identifier(&mut self, start: (usize, u32, u32)) -> Result<Token> {
        self.cursor.bump_while(|b| b.is_ascii_alphanumeric() || b == b'_');
        let span = self.span_from(start);
        let text = self.source_slice(start.0, span.end);
        let kind = match text {
            "var" => TokenKind::Var,
            "if" => TokenKind::If,
            "else" => TokenKind::Else,
            "while" => TokenKind::While,
            "do" => TokenKind::Do,
            "input" => TokenKind::Input,
            "output" => TokenKind::Output,
            _ => TokenKind::Ident(self.interner.intern(text)),
        };
        Ok(Token::new(kind, span))
    }

    fn source_slice(&self, start: usize, end: usize) -> &'a str {
        self.source.get(start..end).unwrap_or("")
    }
}
