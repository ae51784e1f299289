//! Path-data command alphabet and per-argument semantics.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CommandKind {
    MoveTo,
    LineTo,
    HorizontalLineTo,
    VerticalLineTo,
    CurveTo,
    SmoothCurveTo,
    QuadraticCurveTo,
    SmoothQuadraticCurveTo,
    Arc,
    ClosePath,
}

/// What a single argument of a command means geometrically.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgRole {
    X,
    Y,
    RadiusX,
    RadiusY,
    Angle,
    Flag,
}

const PAIR_ROLES: [ArgRole; 2] = [ArgRole::X, ArgRole::Y];
const ARC_ROLES: [ArgRole; 7] = [
    ArgRole::RadiusX,
    ArgRole::RadiusY,
    ArgRole::Angle,
    ArgRole::Flag,
    ArgRole::Flag,
    ArgRole::X,
    ArgRole::Y,
];

impl CommandKind {
    /// Maps a command letter (either case) to its kind.
    pub fn from_letter(letter: char) -> Option<Self> {
        Some(match letter.to_ascii_uppercase() {
            'M' => Self::MoveTo,
            'L' => Self::LineTo,
            'H' => Self::HorizontalLineTo,
            'V' => Self::VerticalLineTo,
            'C' => Self::CurveTo,
            'S' => Self::SmoothCurveTo,
            'Q' => Self::QuadraticCurveTo,
            'T' => Self::SmoothQuadraticCurveTo,
            'A' => Self::Arc,
            'Z' => Self::ClosePath,
            _ => return None,
        })
    }

    /// Uppercase (absolute) letter.
    pub fn letter(self) -> char {
        match self {
            Self::MoveTo => 'M',
            Self::LineTo => 'L',
            Self::HorizontalLineTo => 'H',
            Self::VerticalLineTo => 'V',
            Self::CurveTo => 'C',
            Self::SmoothCurveTo => 'S',
            Self::QuadraticCurveTo => 'Q',
            Self::SmoothQuadraticCurveTo => 'T',
            Self::Arc => 'A',
            Self::ClosePath => 'Z',
        }
    }

    /// Number of arguments consumed by one repetition of the command.
    pub fn arity(self) -> usize {
        match self {
            Self::ClosePath => 0,
            Self::HorizontalLineTo | Self::VerticalLineTo => 1,
            Self::MoveTo | Self::LineTo | Self::SmoothQuadraticCurveTo => 2,
            Self::SmoothCurveTo | Self::QuadraticCurveTo => 4,
            Self::CurveTo => 6,
            Self::Arc => 7,
        }
    }

    /// Role of the argument at `index` (counted over the whole argument list).
    ///
    /// Close-path has no arguments and always yields `None`.
    pub fn role(self, index: usize) -> Option<ArgRole> {
        match self {
            Self::ClosePath => None,
            Self::HorizontalLineTo => Some(ArgRole::X),
            Self::VerticalLineTo => Some(ArgRole::Y),
            Self::Arc => Some(ARC_ROLES[index % ARC_ROLES.len()]),
            Self::MoveTo
            | Self::LineTo
            | Self::CurveTo
            | Self::SmoothCurveTo
            | Self::QuadraticCurveTo
            | Self::SmoothQuadraticCurveTo => Some(PAIR_ROLES[index % 2]),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Command {
    pub kind: CommandKind,
    #[serde(default)]
    pub relative: bool,
    #[serde(default)]
    pub args: Vec<f64>,
}

impl Command {
    pub fn new(kind: CommandKind, relative: bool, args: Vec<f64>) -> Self {
        Self {
            kind,
            relative,
            args,
        }
    }

    /// The letter as written in path data: lowercase for relative commands.
    pub fn letter(&self) -> char {
        let letter = self.kind.letter();
        if self.relative {
            letter.to_ascii_lowercase()
        } else {
            letter
        }
    }

    pub fn is_close(&self) -> bool {
        self.kind == CommandKind::ClosePath
    }

    /// Iterates `(role, value)` for every argument.
    pub fn roles(&self) -> impl Iterator<Item = (ArgRole, f64)> + '_ {
        self.args
            .iter()
            .enumerate()
            .filter_map(|(i, &v)| self.kind.role(i).map(|role| (role, v)))
    }

    /// Returns a copy with every argument passed through `f(role, value)`.
    pub(crate) fn map_args(&self, mut f: impl FnMut(ArgRole, f64) -> f64) -> Self {
        let args = self
            .args
            .iter()
            .enumerate()
            .map(|(i, &v)| match self.kind.role(i) {
                Some(role) => f(role, v),
                None => v,
            })
            .collect();
        Self {
            kind: self.kind,
            relative: self.relative,
            args,
        }
    }
}

/// An ordered sequence of commands, one `<path d="...">` value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path {
    commands: Vec<Command>,
}

impl Path {
    pub fn new(commands: Vec<Command>) -> Self {
        Self { commands }
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<Command> {
        self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub(crate) fn map_args(&self, mut f: impl FnMut(ArgRole, f64) -> f64) -> Self {
        Self {
            commands: self.commands.iter().map(|c| c.map_args(&mut f)).collect(),
        }
    }

    /// Fails with [`Error::NonFinite`] naming the first command holding `inf` or `NaN`.
    pub(crate) fn ensure_finite(self) -> Result<Self> {
        match self
            .commands
            .iter()
            .position(|c| c.args.iter().any(|v| !v.is_finite()))
        {
            Some(index) => Err(Error::NonFinite { index }),
            None => Ok(self),
        }
    }
}

impl FromIterator<Command> for Path {
    fn from_iter<I: IntoIterator<Item = Command>>(iter: I) -> Self {
        Self {
            commands: iter.into_iter().collect(),
        }
    }
}
