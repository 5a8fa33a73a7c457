use std::fmt;
use std::str::FromStr;

use crate::foundation::error::PathMorphError;

/// The six absolute SVG path instructions.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub enum CommandKind {
    Move,
    Line,
    QuadraticCurve,
    BezierCurve,
    Arc,
    ClosePath,
}

impl CommandKind {
    pub const ALL: [Self; 6] = [
        Self::Move,
        Self::Line,
        Self::QuadraticCurve,
        Self::BezierCurve,
        Self::Arc,
        Self::ClosePath,
    ];

    /// The uppercase path-data letter.
    pub fn svg_char(self) -> char {
        match self {
            Self::Move => 'M',
            Self::Line => 'L',
            Self::QuadraticCurve => 'Q',
            Self::BezierCurve => 'C',
            Self::Arc => 'A',
            Self::ClosePath => 'Z',
        }
    }

    pub fn from_svg_char(ch: char) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.svg_char() == ch)
    }

    /// Number of entries in a command's `args`.
    ///
    /// A leading move with no prior point carries only its end, i.e. 2 args.
    pub fn arg_count(self) -> usize {
        match self {
            Self::Move | Self::Line | Self::ClosePath => 4,
            Self::QuadraticCurve => 6,
            Self::BezierCurve => 8,
            Self::Arc => 9,
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.svg_char())
    }
}

impl FromStr for CommandKind {
    type Err = PathMorphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Self::from_svg_char(ch).ok_or_else(|| {
                PathMorphError::validation(format!("unknown path command '{s}'"))
            }),
            _ => Err(PathMorphError::validation(format!(
                "path command must be a single letter, got '{s}'"
            ))),
        }
    }
}

impl TryFrom<String> for CommandKind {
    type Error = PathMorphError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CommandKind> for String {
    fn from(kind: CommandKind) -> Self {
        kind.to_string()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/command/kind.rs"]
mod tests;
