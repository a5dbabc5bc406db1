// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! CSS-style transition rules for animated geometry changes.

use core::fmt;
use core::str::FromStr;

use tether_axis::{Axis, XY};

use crate::error::{FrameError, FrameResult};

/// CSS timing function keywords.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    /// `ease`
    Ease,
    /// `linear`
    Linear,
    /// `ease-in`
    #[default]
    EaseIn,
    /// `ease-out`
    EaseOut,
    /// `ease-in-out`
    EaseInOut,
    /// `step-start`
    StepStart,
    /// `step-end`
    StepEnd,
}

impl Easing {
    /// The CSS keyword.
    #[must_use]
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::Ease => "ease",
            Self::Linear => "linear",
            Self::EaseIn => "ease-in",
            Self::EaseOut => "ease-out",
            Self::EaseInOut => "ease-in-out",
            Self::StepStart => "step-start",
            Self::StepEnd => "step-end",
        }
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css())
    }
}

impl FromStr for Easing {
    type Err = FrameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let easing = match s.trim() {
            "ease" => Self::Ease,
            "linear" => Self::Linear,
            "ease-in" => Self::EaseIn,
            "ease-out" => Self::EaseOut,
            "ease-in-out" => Self::EaseInOut,
            "step-start" => Self::StepStart,
            "step-end" => Self::StepEnd,
            other => {
                return Err(FrameError::config(alloc::format!(
                    "unknown tFunction '{other}'"
                )));
            }
        };
        Ok(easing)
    }
}

/// Transition speed and easing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    speed: f64,
    easing: Easing,
}

impl Transition {
    /// Default speed (`tSpeed`).
    pub const DEFAULT_SPEED: f64 = 2000.0;

    /// Creates a transition.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::InvalidConfiguration`] unless `speed` is finite
    /// and positive.
    pub fn new(speed: f64, easing: Easing) -> FrameResult<Self> {
        if !(speed.is_finite() && speed > 0.0) {
            return Err(FrameError::config(alloc::format!(
                "tSpeed must be finite and > 0, got {speed}"
            )));
        }
        Ok(Self { speed, easing })
    }

    /// The configured speed.
    #[must_use]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// The configured easing.
    #[must_use]
    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Duration in seconds for a change of `delta` pixels.
    #[must_use]
    pub fn duration(&self, delta: f64) -> f64 {
        delta / self.speed
    }

    /// Builds the rule animating a per-axis change of `delta`.
    #[must_use]
    pub fn rule(&self, delta: XY<f64>) -> TransitionRule {
        TransitionRule {
            duration: delta.map(|d| self.duration(d)),
            easing: self.easing,
        }
    }
}

/// A rendered transition rule: per-axis durations plus easing.
///
/// Displays as
/// `width {x}s {easing}, left {x}s {easing}, height {y}s {easing}, top {y}s {easing}`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionRule {
    duration: XY<f64>,
    easing: Easing,
}

impl TransitionRule {
    /// Duration in seconds for properties along `axis`.
    #[must_use]
    pub fn duration(&self, axis: Axis) -> f64 {
        self.duration.at(axis)
    }

    /// The easing shared by every property.
    #[must_use]
    pub fn easing(&self) -> Easing {
        self.easing
    }
}

impl fmt::Display for TransitionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries = [
            ("width", Axis::X),
            ("left", Axis::X),
            ("height", Axis::Y),
            ("top", Axis::Y),
        ];
        for (i, (property, axis)) in entries.into_iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{property} {}s {}", self.duration(axis), self.easing)?;
        }
        Ok(())
    }
}
