//! Core lexer implementation.
//!
//! This module contains the main Lexer struct, the scan loop, and the
//! per-lexeme dispatch.

use arixc_util::{Diagnostic, DiagnosticCode, Handler, Span, TextSpan};
use tracing::{debug, trace, warn};

use crate::buffer::TokenBuffer;
use crate::config::{LexConfig, UnknownCharPolicy};
use crate::cursor::Cursor;
use crate::error::{Feature, LexError, LexResult};
use crate::token::{Token, TokenKind};

/// What classifying a single lexeme produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanOutcome {
    /// The lexeme is a complete token of this kind.
    Token(TokenKind),
    /// The byte starts no token and was consumed without emitting one.
    Skipped(u8),
    /// The lexeme needs a feature the lexer does not implement.
    Unsupported(Feature),
    /// Nothing was left to consume.
    End,
}

/// Lexer for arithmetic expressions.
///
/// The lexer reads a byte buffer from front to back, classifies runs of
/// bytes into tokens, and appends them to its [`TokenBuffer`]. Token text is
/// never copied: each token's lexeme borrows from the buffer passed to
/// [`Lexer::new`].
///
/// # Example
///
/// ```
/// use arixc_lex::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::from_source("1 + 4 / 87");
/// let tokens = lexer.scan().unwrap();
///
/// assert_eq!(tokens.len(), 5);
/// assert_eq!(tokens[4].kind, TokenKind::NumericLiteral);
/// assert_eq!(tokens[4].lexeme, "87");
/// ```
pub struct Lexer<'src> {
    /// Byte cursor over the source.
    pub(super) cursor: Cursor<'src>,

    /// Starting position of the current lexeme (byte offset).
    token_start: usize,

    /// Line number where the current lexeme starts (1-based).
    token_start_line: u32,

    /// Column number where the current lexeme starts (1-based).
    token_start_column: u32,

    /// Tokens appended by [`Lexer::scan`].
    tokens: TokenBuffer<'src>,

    /// Diagnostics collected while scanning.
    handler: Handler,

    config: LexConfig,

    /// Set when a scan stopped on an error; cleared by the next scan.
    halted: bool,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer over `content` with the default configuration.
    pub fn new(content: &'src [u8]) -> Self {
        Self::with_config(content, LexConfig::default())
    }

    /// Creates a lexer over the bytes of `source`.
    pub fn from_source(source: &'src str) -> Self {
        Self::new(source.as_bytes())
    }

    /// Creates a lexer over `content` with an explicit configuration.
    pub fn with_config(content: &'src [u8], config: LexConfig) -> Self {
        Self {
            cursor: Cursor::new(content),
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
            tokens: TokenBuffer::with_capacity(config.initial_capacity),
            handler: Handler::new(),
            config,
            halted: false,
        }
    }

    /// Scans the whole buffer from the start and returns the token buffer.
    ///
    /// Position state is reset first, but the token buffer is not: scanning
    /// the same lexer twice appends the second run after the first. Call
    /// [`Lexer::deinit`] in between for a clean buffer.
    ///
    /// # Errors
    ///
    /// Stops at the first [`LexError`]. Tokens scanned before the error stay
    /// in the buffer.
    pub fn scan(&mut self) -> LexResult<&TokenBuffer<'src>> {
        self.cursor.reset();
        self.halted = false;
        self.mark_token_start();

        debug!(bytes = self.cursor.source().len(), "scan started");

        while let Some(token) = self.next_token()? {
            self.tokens.append(token);
        }

        debug!(
            tokens = self.tokens.len(),
            diagnostics = self.handler.len(),
            "scan finished"
        );
        Ok(&self.tokens)
    }

    /// Scans lexemes from the current position until one yields a token.
    ///
    /// Returns `Ok(None)` at the end of input, and after an error has
    /// stopped the lexer. The token is returned, not appended to the buffer.
    pub fn next_token(&mut self) -> LexResult<Option<Token<'src>>> {
        if self.halted {
            return Ok(None);
        }

        while !self.cursor.is_at_end() {
            self.mark_token_start();

            match self.scan_lexeme() {
                ScanOutcome::Token(kind) => {
                    let token = self.make_token(kind);
                    trace!(
                        kind = ?token.kind,
                        start = token.start(),
                        end = token.end(),
                        "token"
                    );
                    return Ok(Some(token));
                },
                ScanOutcome::Skipped(byte) => self.handle_unknown(byte)?,
                ScanOutcome::Unsupported(feature) => {
                    let span = self.lexeme_span();
                    self.handler.emit(
                        Diagnostic::error(format!("{} are not implemented", feature), span)
                            .with_code(DiagnosticCode::E_LEXER_UNSUPPORTED),
                    );
                    self.halted = true;
                    return Err(LexError::Unsupported { feature, span });
                },
                ScanOutcome::End => break,
            }
        }

        Ok(None)
    }

    /// Consumes one byte and classifies the lexeme it starts.
    ///
    /// Single-byte operators and parentheses complete immediately; a digit
    /// pulls in the rest of its digit run. The caller is expected to have
    /// marked the lexeme start.
    pub fn scan_lexeme(&mut self) -> ScanOutcome {
        let Some(byte) = self.cursor.advance() else {
            return ScanOutcome::End;
        };

        match byte {
            b'"' => self.lex_string(),
            c if c.is_ascii_digit() => self.lex_number(),
            c => TokenKind::from_byte(c).map_or(ScanOutcome::Skipped(c), ScanOutcome::Token),
        }
    }

    /// Applies the configured policy to a byte that starts no token.
    fn handle_unknown(&mut self, byte: u8) -> LexResult<()> {
        if byte.is_ascii_whitespace() {
            return Ok(());
        }

        let ch = char::from(byte);
        match self.config.unknown_chars {
            UnknownCharPolicy::Skip => {
                trace!(byte, "skipped unrecognised byte");
                Ok(())
            },
            UnknownCharPolicy::Report => {
                let span = self.lexeme_span();
                warn!(?ch, line = span.line, column = span.column, "unexpected character");
                self.handler.emit(
                    Diagnostic::error(format!("unexpected character {:?}", ch), span)
                        .with_code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR),
                );
                Ok(())
            },
            UnknownCharPolicy::Reject => {
                let span = self.lexeme_span();
                warn!(?ch, line = span.line, column = span.column, "rejected character");
                self.halted = true;
                Err(LexError::UnexpectedChar { ch, span })
            },
        }
    }

    fn mark_token_start(&mut self) {
        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();
    }

    /// Span of the lexeme from its start up to the cursor.
    fn lexeme_span(&self) -> Span {
        Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        )
    }

    fn make_token(&self, kind: TokenKind) -> Token<'src> {
        let span = self.lexeme_span();
        let lexeme = TextSpan::new(self.cursor.source(), span.start, span.len());
        Token::new(kind, lexeme, span)
    }

    /// Returns an iterator that pulls tokens from the current position.
    pub fn iter(&mut self) -> TokenIter<'_, 'src> {
        TokenIter { lexer: self }
    }

    /// Releases the token buffer, drops collected diagnostics and resets
    /// position state.
    ///
    /// The lexer can scan again afterwards; the buffer is re-initialised on
    /// the first append.
    pub fn deinit(&mut self) {
        self.tokens.deinit();
        self.handler.take();
        self.cursor.reset();
        self.mark_token_start();
        self.halted = false;
    }

    /// Tokens collected so far.
    pub fn tokens(&self) -> &TokenBuffer<'src> {
        &self.tokens
    }

    /// Consumes the lexer, handing the token buffer to the caller.
    pub fn into_tokens(self) -> TokenBuffer<'src> {
        self.tokens
    }

    /// Diagnostics collected so far.
    pub fn diagnostics(&self) -> &Handler {
        &self.handler
    }

    /// Removes and returns the collected diagnostics.
    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        self.handler.take()
    }

    /// The configuration this lexer was built with.
    pub fn config(&self) -> &LexConfig {
        &self.config
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the byte offset of the next unread byte.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }
}

/// Pulls tokens from a [`Lexer`] one at a time.
///
/// Created by [`Lexer::iter`]. Tokens are yielded, not appended to the
/// lexer's buffer. After an error the iterator is exhausted.
pub struct TokenIter<'a, 'src> {
    lexer: &'a mut Lexer<'src>,
}

impl<'src> Iterator for TokenIter<'_, 'src> {
    type Item = LexResult<Token<'src>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.lexer.next_token().transpose()
    }
}
