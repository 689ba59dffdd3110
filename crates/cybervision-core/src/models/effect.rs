//! Effect requests sent to the rendering layer.

use std::fmt;

/// A fire-and-forget visual effect request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Effect {
    /// Page-wide glitch styling.
    Glitch,
    /// Full-screen digital rain overlay.
    MatrixRain,
    /// Full page reload.
    Reload,
}

impl Effect {
    /// Stable signal name understood by the rendering layer.
    pub fn name(self) -> &'static str {
        match self {
            Self::Glitch => "glitch",
            Self::MatrixRain => "matrix-rain",
            Self::Reload => "reload",
        }
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
