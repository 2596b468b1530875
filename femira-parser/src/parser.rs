use crate::ast::{AstNode, Block, Identifier};
use crate::lexer::{Token, TokenKind, BINARY_KINDS, LITERAL_KINDS, UNARY_KINDS};
use femira_source::SyntaxError;

mod expr;
mod stmt;

pub type ParseResult<T> = Result<T, SyntaxError>;

/// Saved cursor position. Only [`Parser::checkpoint`] creates one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint(usize);

pub struct Parser {
    /// Tokens produced by the lexer. Never modified after construction.
    tokens: Vec<Token>,
    /// Index of the current token. `tokens.len()` means end of input.
    cursor: usize,
    /// Operand parsed before a rewind, with the checkpoints it spans.
    /// Taken by the next `parse_expression(true)` starting at the same checkpoint.
    reparsed_operand: Option<(Checkpoint, AstNode, Checkpoint)>,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            cursor: 0,
            reparsed_operand: None,
        }
    }

    /// Parses the whole token stream into the top-level [`Block`].
    pub fn make_ast(&mut self) -> ParseResult<Block> {
        let mut statements = Vec::new();

        while !self.at_end() {
            statements.push(self.parse_expression(false)?);
            self.match_token(&[TokenKind::Semicolon]);
        }

        Ok(Block { statements })
    }
}

/// Parse utilities
impl Parser {
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn at_end(&self) -> bool {
        self.cursor >= self.tokens.len()
    }

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.cursor)
    }

    /// Moves the cursor back to a previously saved [`Checkpoint`].
    pub fn rewind(&mut self, checkpoint: Checkpoint) {
        debug_assert!(checkpoint.0 <= self.cursor);
        self.cursor = checkpoint.0;
    }

    /// Returns `true` if the token at `position` has one of the `kinds`.
    /// Out of range positions never match.
    pub fn is_token(&self, kinds: &[TokenKind], position: usize) -> bool {
        self.tokens
            .get(position)
            .map_or(false, |token| kinds.contains(&token.kind))
    }

    /// Eats the current token if it has one of the `kinds`.
    pub fn match_token(&mut self, kinds: &[TokenKind]) -> bool {
        if self.is_token(kinds, self.cursor) {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    /// Eats and returns the current token, or raises an unexpected token error.
    pub fn expect(&mut self, kinds: &[TokenKind]) -> ParseResult<Token> {
        if self.is_token(kinds, self.cursor) {
            let token = self.tokens[self.cursor].clone();
            self.cursor += 1;
            return Ok(token);
        }

        let expected = kinds
            .iter()
            .map(|kind| kind.name())
            .collect::<Vec<_>>()
            .join(", ");
        Err(SyntaxError::unexpected_token(
            expected,
            self.current_kind().name(),
            self.cursor,
            self.current_offset(),
        ))
    }

    /// Kind of the current token, [`TokenKind::Eof`] past the end.
    fn current_kind(&self) -> TokenKind {
        self.tokens
            .get(self.cursor)
            .map_or(TokenKind::Eof, |token| token.kind)
    }

    fn current_offset(&self) -> Option<usize> {
        self.tokens.get(self.cursor).map(|token| token.position)
    }

    /// Token just before the cursor. Only call after a successful match.
    fn previous(&self) -> Token {
        self.tokens[self.cursor - 1].clone()
    }
}
