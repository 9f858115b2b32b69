/// Location of a token inside the position value, for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub column: usize,
}

impl Span {
    pub fn new(start: usize, end: usize, column: usize) -> Self {
        Self { start, end, column }
    }
}

/// One of the reserved `object-position` keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PositionKeyword {
    Left,
    Right,
    Top,
    Bottom,
    Center,
}

impl PositionKeyword {
    /// Look up a keyword. Matching is exact and case-sensitive.
    pub fn lookup(text: &str) -> Option<Self> {
        match text {
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            "top" => Some(Self::Top),
            "bottom" => Some(Self::Bottom),
            "center" => Some(Self::Center),
            _ => None,
        }
    }

    /// Fractional offset along the keyword's axis.
    pub fn fraction(self) -> f64 {
        match self {
            Self::Left | Self::Top => 0.0,
            Self::Right | Self::Bottom => 1.0,
            Self::Center => 0.5,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Center => "center",
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }
}

/// Token classification for a position value.
///
/// `Percentage` carries the already-divided fraction, which is NaN when the
/// numeric part could not be read.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    Percentage(f64),
    Keyword(PositionKeyword),
    Empty,
    Other(String),
}

/// A token produced by the position scanner.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    pub fn is_empty(&self) -> bool {
        self.kind == TokenKind::Empty
    }
}
