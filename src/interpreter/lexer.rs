use logos::Logos;
use tracing::trace;

use crate::{
    ast::Position,
    error::{LexError, LexErrorKind},
};

/// The kind of a lexical token.
///
/// This is the closed set of tokens the parser understands. Literal and
/// identifier tokens carry their source text in [`Token::lexeme`]; every other
/// kind has a fixed spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// End of input. Returned forever once the source is exhausted.
    Eof,
    /// Integer literal, such as `42`.
    Integer,
    /// Float literal, such as `2.5`.
    Float,
    /// String literal, such as `"hello"`.
    String,
    /// Identifier, such as `counter`.
    Identifier,
    /// `def` (reserved, unused by the grammar)
    Def,
    /// `return` (reserved, unused by the grammar)
    Return,
    /// `if`
    If,
    /// `else`
    Else,
    /// `while`
    While,
    /// `print`
    Print,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `=`
    Assign,
    /// `==`
    EqualEqual,
    /// `!=`
    BangEqual,
    /// `<`
    Less,
    /// `>`
    Greater,
    /// `<=`
    LessEqual,
    /// `>=`
    GreaterEqual,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// A line break. Terminates statements.
    NewLine,
}

impl TokenKind {
    /// Returns a short human readable description used in error messages.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Eof => "end of input",
            Self::Integer => "integer literal",
            Self::Float => "float literal",
            Self::String => "string literal",
            Self::Identifier => "identifier",
            Self::Def => "'def'",
            Self::Return => "'return'",
            Self::If => "'if'",
            Self::Else => "'else'",
            Self::While => "'while'",
            Self::Print => "'print'",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Star => "'*'",
            Self::Slash => "'/'",
            Self::Assign => "'='",
            Self::EqualEqual => "'=='",
            Self::BangEqual => "'!='",
            Self::Less => "'<'",
            Self::Greater => "'>'",
            Self::LessEqual => "'<='",
            Self::GreaterEqual => "'>='",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::Colon => "':'",
            Self::Comma => "','",
            Self::Semicolon => "';'",
            Self::NewLine => "newline",
        }
    }

    /// Returns `true` for the kinds that carry a lexeme.
    #[must_use]
    pub const fn has_lexeme(self) -> bool {
        matches!(self, Self::Integer | Self::Float | Self::String | Self::Identifier)
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.describe())
    }
}

/// A single lexical token together with its source position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// What kind of token this is.
    pub kind:   TokenKind,
    /// Source text for literals and identifiers. For strings this is the text
    /// between the quotes.
    pub lexeme: Option<String>,
    /// 1-based line of the token's first character.
    pub line:   usize,
    /// 1-based byte column of the token's first character.
    pub column: usize,
}

impl Token {
    /// Creates a token without a lexeme.
    #[must_use]
    pub const fn new(kind: TokenKind, position: Position) -> Self {
        Self { kind,
               lexeme: None,
               line: position.line,
               column: position.column }
    }

    /// Creates a token carrying its source text.
    #[must_use]
    pub fn with_lexeme(kind: TokenKind, lexeme: &str, position: Position) -> Self {
        Self { kind,
               lexeme: Some(lexeme.to_string()),
               line: position.line,
               column: position.column }
    }

    /// The position of the token's first character.
    #[must_use]
    pub const fn position(&self) -> Position {
        Position { line:   self.line,
                   column: self.column, }
    }

    /// Returns `true` if this is the end-of-input token.
    #[must_use]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// Describes the token for error messages, including its text when it
    /// has one.
    #[must_use]
    pub fn describe(&self) -> String {
        match (&self.lexeme, self.kind) {
            (Some(text), TokenKind::String) => format!("string literal \"{text}\""),
            (Some(text), kind) => format!("{kind} '{text}'"),
            (None, kind) => kind.describe().to_string(),
        }
    }
}

/// The raw token set recognised by the generated lexer. Kinds that only exist
/// to detect malformed input are turned into [`LexError`]s by [`Tokenizer`].
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum RawToken {
    /// Spaces, tabs and carriage returns.
    #[regex(r"[ \t\r]+", logos::skip)]
    Ignored,
    /// `# Comments` up to, but not including, the line break.
    #[regex(r"#[^\n]*", logos::skip, allow_greedy = true)]
    Comment,
    #[regex(r"[0-9]+\.[0-9]+")]
    Float,
    #[regex(r"[0-9]+")]
    Integer,
    #[regex(r#""[^"]*""#, allow_greedy = true)]
    String,
    /// A quote that is never closed before the end of input.
    #[regex(r#""[^"]*"#, allow_greedy = true)]
    UnterminatedString,
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,
    #[token("def")]
    Def,
    #[token("return")]
    Return,
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("while")]
    While,
    #[token("print")]
    Print,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("=")]
    Assign,
    #[token("==")]
    EqualEqual,
    #[token("!=")]
    BangEqual,
    /// A `!` that is not part of `!=`.
    #[token("!")]
    Bang,
    #[token("<")]
    Less,
    #[token(">")]
    Greater,
    #[token("<=")]
    LessEqual,
    #[token(">=")]
    GreaterEqual,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(":")]
    Colon,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
    #[token("\n")]
    NewLine,
}

impl RawToken {
    /// Maps a well-formed raw token to its public kind.
    const fn kind(self) -> Result<TokenKind, LexErrorKind> {
        Ok(match self {
            Self::Float => TokenKind::Float,
            Self::Integer => TokenKind::Integer,
            Self::String => TokenKind::String,
            Self::Identifier => TokenKind::Identifier,
            Self::Def => TokenKind::Def,
            Self::Return => TokenKind::Return,
            Self::If => TokenKind::If,
            Self::Else => TokenKind::Else,
            Self::While => TokenKind::While,
            Self::Print => TokenKind::Print,
            Self::Plus => TokenKind::Plus,
            Self::Minus => TokenKind::Minus,
            Self::Star => TokenKind::Star,
            Self::Slash => TokenKind::Slash,
            Self::Assign => TokenKind::Assign,
            Self::EqualEqual => TokenKind::EqualEqual,
            Self::BangEqual => TokenKind::BangEqual,
            Self::Less => TokenKind::Less,
            Self::Greater => TokenKind::Greater,
            Self::LessEqual => TokenKind::LessEqual,
            Self::GreaterEqual => TokenKind::GreaterEqual,
            Self::LParen => TokenKind::LParen,
            Self::RParen => TokenKind::RParen,
            Self::Colon => TokenKind::Colon,
            Self::Comma => TokenKind::Comma,
            Self::Semicolon => TokenKind::Semicolon,
            Self::NewLine => TokenKind::NewLine,
            Self::Bang => return Err(LexErrorKind::BareBang),
            Self::UnterminatedString => return Err(LexErrorKind::UnterminatedString),
            // Skipped by the lexer, never produced.
            Self::Ignored | Self::Comment => TokenKind::Eof,
        })
    }
}

/// Converts source text into tokens, one at a time.
///
/// The tokenizer is lazy: nothing is scanned until a token is requested.
/// Every call either yields a token or a [`LexError`], and always consumes the
/// offending input, so repeated calls make progress.
///
/// # Example
/// ```
/// use lofy::interpreter::lexer::{TokenKind, Tokenizer};
///
/// let mut tokenizer = Tokenizer::new("x = 1");
/// assert_eq!(tokenizer.next_token().unwrap().kind, TokenKind::Identifier);
/// assert_eq!(tokenizer.next_token().unwrap().kind, TokenKind::Assign);
/// assert_eq!(tokenizer.next_token().unwrap().kind, TokenKind::Integer);
/// assert_eq!(tokenizer.next_token().unwrap().kind, TokenKind::Eof);
/// assert_eq!(tokenizer.next_token().unwrap().kind, TokenKind::Eof);
/// ```
pub struct Tokenizer<'src> {
    lexer:      logos::Lexer<'src, RawToken>,
    line:       usize,
    line_start: usize,
    finished:   bool,
}

/// Starts tokenizing `source`.
#[must_use]
pub fn tokenize(source: &str) -> Tokenizer<'_> {
    Tokenizer::new(source)
}

impl<'src> Tokenizer<'src> {
    /// Creates a tokenizer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { lexer:      RawToken::lexer(source),
               line:       1,
               line_start: 0,
               finished:   false, }
    }

    /// Consumes and returns the next token.
    ///
    /// Once the input is exhausted this returns an end-of-input token on every
    /// call.
    ///
    /// # Errors
    /// Returns a [`LexError`] for an unterminated string, a `!` that is not
    /// followed by `=`, or any character outside the language. The offending
    /// input is consumed.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        let Some(raw) = self.lexer.next() else {
            let end = self.lexer.source().len();
            return Ok(Token::new(TokenKind::Eof, self.position_of(end)));
        };

        let span = self.lexer.span();
        let slice = self.lexer.slice();
        let position = self.position_of(span.start);
        self.track_line_breaks(span.start, slice);

        let kind = match raw {
            Ok(raw) => raw.kind(),
            Err(()) => Err(LexErrorKind::UnexpectedCharacter(slice.chars().next().unwrap_or('\0'))),
        }.map_err(|kind| LexError { kind,
                                    line: position.line,
                                    column: position.column })?;

        let token = match kind {
            TokenKind::String => {
                Token::with_lexeme(kind, &slice[1..slice.len() - 1], position)
            },
            kind if kind.has_lexeme() => Token::with_lexeme(kind, slice, position),
            kind => Token::new(kind, position),
        };

        trace!(kind = ?token.kind, lexeme = ?token.lexeme, line = token.line, column = token.column, "token");
        Ok(token)
    }

    fn position_of(&self, offset: usize) -> Position {
        Position { line:   self.line,
                   column: offset - self.line_start + 1, }
    }

    /// Line breaks only ever appear inside newline and string tokens.
    fn track_line_breaks(&mut self, start: usize, slice: &str) {
        for (index, _) in slice.match_indices('\n') {
            self.line += 1;
            self.line_start = start + index + 1;
        }
    }
}

/// Yields every token up to and including the end-of-input token, then stops.
impl Iterator for Tokenizer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let item = self.next_token();
        if let Ok(token) = &item
           && token.is_eof()
        {
            self.finished = true;
        }
        Some(item)
    }
}
