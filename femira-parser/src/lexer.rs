use femira_source::LexError;
use logos::Logos;
use std::fmt;

#[derive(Debug, Logos, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // literals
    #[regex(r#""[^"]*""#)]
    String,
    #[regex(r"[0-9]+(\.[0-9]+)?")]
    Digit,
    #[token("nil")]
    Nil,
    #[token("true")]
    True,
    #[token("false")]
    False,

    // identifiers
    #[regex("[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,

    // binary operators
    // - arithmetics
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Asterisk,
    #[token("/")]
    Slash,
    // - assignment
    #[token(":=")]
    Assign,
    // - equality
    #[token("?=")]
    Eq,
    #[token("!=")]
    NotEq,
    // - ordering
    #[token(">")]
    Bigger,
    #[token("<")]
    Smaller,
    #[token(">=")]
    BiggerOrEq,
    #[token("<=")]
    SmallerOrEq,
    // - logical
    #[token("and")]
    And,
    #[token("or")]
    Or,

    #[token("!")]
    Not,
    #[token(":")]
    Annotate,

    // punctuation
    #[token("{")]
    Begin,
    #[token("}")]
    End,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LSqParen,
    #[token("]")]
    RSqParen,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token("->")]
    Arrow,
    #[token(";")]
    Semicolon,

    // keywords
    #[token("fn")]
    Function,
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("while")]
    While,
    #[token("for")]
    For,
    #[token("type")]
    Type,
    #[token("return")]
    Return,
    #[token("print")]
    Print,
    #[token("wait")]
    Wait,

    // misc
    #[regex(r"[ \t\n\r\f]+", logos::skip)]
    #[regex(r"//[^\n]*", logos::skip)] // single line comments
    #[error]
    Error,

    /// Never produced by [`make_tokens`]. Names the end of input in diagnostics.
    Eof,
}

impl TokenKind {
    /// Human readable name used in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::String => "string",
            TokenKind::Digit => "digit",
            TokenKind::Nil => "nil",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::Identifier => "identifier",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Asterisk => "*",
            TokenKind::Slash => "/",
            TokenKind::Assign => ":=",
            TokenKind::Eq => "?=",
            TokenKind::NotEq => "!=",
            TokenKind::Bigger => ">",
            TokenKind::Smaller => "<",
            TokenKind::BiggerOrEq => ">=",
            TokenKind::SmallerOrEq => "<=",
            TokenKind::And => "and",
            TokenKind::Or => "or",
            TokenKind::Not => "!",
            TokenKind::Annotate => ":",
            TokenKind::Begin => "{",
            TokenKind::End => "}",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LSqParen => "[",
            TokenKind::RSqParen => "]",
            TokenKind::Comma => ",",
            TokenKind::Dot => ".",
            TokenKind::Arrow => "->",
            TokenKind::Semicolon => "semicolon",
            TokenKind::Function => "fn",
            TokenKind::If => "if",
            TokenKind::Else => "else",
            TokenKind::While => "while",
            TokenKind::For => "for",
            TokenKind::Type => "type",
            TokenKind::Return => "return",
            TokenKind::Print => "print",
            TokenKind::Wait => "wait",
            TokenKind::Error => "invalid token",
            TokenKind::Eof => "end of input",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Kinds that start a literal expression.
pub const LITERAL_KINDS: &[TokenKind] = &[
    TokenKind::Nil,
    TokenKind::True,
    TokenKind::False,
    TokenKind::Digit,
    TokenKind::String,
];

/// Keyword operators taking a single operand.
pub const UNARY_KINDS: &[TokenKind] = &[TokenKind::Return, TokenKind::Print, TokenKind::Wait];

/// Every kind handled somewhere on the precedence ladder.
pub const BINARY_KINDS: &[TokenKind] = &[
    TokenKind::Plus,
    TokenKind::Minus,
    TokenKind::Asterisk,
    TokenKind::Slash,
    TokenKind::Eq,
    TokenKind::NotEq,
    TokenKind::Bigger,
    TokenKind::Smaller,
    TokenKind::BiggerOrEq,
    TokenKind::SmallerOrEq,
    TokenKind::And,
    TokenKind::Or,
    TokenKind::Assign,
];

/// A lexed token. `position` is the byte offset of its first character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub position: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, position: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            position,
        }
    }
}

/// Splits `source` into tokens. Whitespace and comments are dropped and no end marker is emitted.
pub fn make_tokens(source: &str) -> Result<Vec<Token>, LexError> {
    let mut tokens = Vec::new();

    for (kind, span) in TokenKind::lexer(source).spanned() {
        if kind == TokenKind::Error {
            let character = source[span.start..].chars().next().unwrap_or('\0');
            return Err(LexError::UnexpectedCharacter {
                character,
                position: span.start,
            });
        }
        tokens.push(Token::new(kind, &source[span.clone()], span.start));
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        make_tokens(source)
            .unwrap()
            .into_iter()
            .map(|token| token.kind)
            .collect()
    }

    #[test]
    fn test_operators() {
        use TokenKind::*;
        assert_eq!(
            kinds(":= ?= != >= <= > < : ! -> - + * /"),
            vec![
                Assign, Eq, NotEq, BiggerOrEq, SmallerOrEq, Bigger, Smaller, Annotate, Not,
                Arrow, Minus, Plus, Asterisk, Slash
            ]
        );
    }

    #[test]
    fn test_keywords_and_identifiers() {
        use TokenKind::*;
        assert_eq!(
            kinds("fn if else while for type return print wait and or"),
            vec![Function, If, Else, While, For, Type, Return, Print, Wait, And, Or]
        );
        assert_eq!(
            kinds("android printer fn_name _x1 nil nilly"),
            vec![Identifier, Identifier, Identifier, Identifier, Nil, Identifier]
        );
    }

    #[test]
    fn test_literals() {
        let tokens = make_tokens(r#"42 3.25 "hello world" true false"#).unwrap();
        assert_eq!(tokens[0], Token::new(TokenKind::Digit, "42", 0));
        assert_eq!(tokens[1], Token::new(TokenKind::Digit, "3.25", 3));
        assert_eq!(
            tokens[2],
            Token::new(TokenKind::String, "\"hello world\"", 8)
        );
        assert_eq!(tokens[3].kind, TokenKind::True);
        assert_eq!(tokens[4].kind, TokenKind::False);
    }

    #[test]
    fn test_whitespace_and_comments_are_skipped() {
        let tokens = make_tokens("print 1; // a comment\n\t wait 2").unwrap();
        let positions: Vec<_> = tokens.iter().map(|token| token.position).collect();
        assert_eq!(positions, vec![0, 6, 7, 24, 29]);
        assert!(make_tokens("  \n  ").unwrap().is_empty());
    }

    #[test]
    fn test_unexpected_character() {
        assert_eq!(
            make_tokens("print 1 $ 2"),
            Err(LexError::UnexpectedCharacter {
                character: '$',
                position: 8
            })
        );
        assert!(make_tokens("\"unterminated").is_err());
    }
}
