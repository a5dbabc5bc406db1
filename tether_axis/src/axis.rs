// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

use crate::XY;

/// One of the two independent layout dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal: `left`, `width`, `right`.
    X,
    /// Vertical: `top`, `height`, `bottom`.
    Y,
}

impl Axis {
    /// Both axes, horizontal first.
    pub const ALL: [Self; 2] = [Self::X, Self::Y];

    /// Returns the perpendicular axis.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::X,
        }
    }

    /// Borrows the component of `pair` that belongs to this axis.
    #[must_use]
    pub fn select<T>(self, pair: &XY<T>) -> &T {
        pair.get(self)
    }

    /// The lowercase token for this axis (`"x"` or `"y"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Axis {
    type Err = InvalidAxis;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "x" => Ok(Self::X),
            "y" => Ok(Self::Y),
            other => Err(InvalidAxis {
                token: other.to_string(),
            }),
        }
    }
}

/// Error returned when an axis token is neither `"x"` nor `"y"`.
///
/// This is always a caller bug; it is surfaced immediately and never retried.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
#[error("axis is '{token}' but it should be either 'x' or 'y'")]
pub struct InvalidAxis {
    /// The rejected token, verbatim.
    pub token: String,
}
