// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame configuration.
//!
//! [`FrameConfig`] mirrors the props a host passes when creating a frame.
//! It deserializes from camelCase keys with defaults for everything, so a
//! partial object such as `{"width": 200, "grid": [20, 20]}` is complete.

use tether_axis::{Axis, XY};

use crate::error::{FrameError, FrameResult};
use crate::grid::Grid;
use crate::rect::{DEFAULT_MIN_SIZE, FrameRect};
use crate::transition::{Easing, Transition};

/// Restrict-to-parent setting: one flag for both axes, or one per axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum RestrictToParent {
    /// Same setting on both axes.
    Both(bool),
    /// `[x, y]`.
    PerAxis([bool; 2]),
}

impl RestrictToParent {
    /// Expands into one flag per axis.
    #[must_use]
    pub fn per_axis(self) -> XY<bool> {
        match self {
            Self::Both(flag) => XY::splat(flag),
            Self::PerAxis(flags) => XY::from(flags),
        }
    }
}

impl Default for RestrictToParent {
    fn default() -> Self {
        Self::Both(true)
    }
}

/// Everything needed to create a [`Frame`](crate::Frame).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FrameConfig {
    /// Initial left position.
    pub left: f64,
    /// Initial top position.
    pub top: f64,
    /// Initial width.
    pub width: f64,
    /// Initial height.
    pub height: f64,
    /// Minimum width (> 0).
    pub min_width: f64,
    /// Minimum height (> 0).
    pub min_height: f64,
    /// Minimum left position; unbounded when absent.
    pub min_left: Option<f64>,
    /// Minimum top position; unbounded when absent.
    pub min_top: Option<f64>,
    /// Maximum width (> 0); unbounded when absent.
    pub max_width: Option<f64>,
    /// Maximum height (> 0); unbounded when absent.
    pub max_height: Option<f64>,
    /// Confine the frame to its container's interior.
    pub restrict_to_parent: RestrictToParent,
    /// Grid cell `[x, y]`; snapping is off when absent.
    pub grid: Option<[f64; 2]>,
    /// Snapping buffer fraction in `[0, 1]`.
    pub grid_buf: f64,
    /// Animate geometry changes.
    pub transition: bool,
    /// Transition speed (> 0).
    pub t_speed: f64,
    /// Transition timing function.
    pub t_function: Easing,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            width: 0.0,
            height: 0.0,
            min_width: DEFAULT_MIN_SIZE,
            min_height: DEFAULT_MIN_SIZE,
            min_left: None,
            min_top: None,
            max_width: None,
            max_height: None,
            restrict_to_parent: RestrictToParent::default(),
            grid: None,
            grid_buf: Grid::DEFAULT_BUFFER,
            transition: false,
            t_speed: Transition::DEFAULT_SPEED,
            t_function: Easing::default(),
        }
    }
}

impl FrameConfig {
    /// Checks every field, reporting the first violation.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::InvalidConfiguration`] for negative or non-finite
    /// geometry, non-positive size bounds, a minimum above its maximum, a
    /// malformed grid, `gridBuf` outside `[0, 1]`, or a non-positive `tSpeed`.
    pub fn validate(&self) -> FrameResult<()> {
        for (name, value) in [
            ("left", self.left),
            ("top", self.top),
            ("width", self.width),
            ("height", self.height),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(FrameError::config(alloc::format!(
                    "{name} must be finite and >= 0, got {value}"
                )));
            }
        }

        for axis in Axis::ALL {
            let (min_name, max_name) = match axis {
                Axis::X => ("minWidth", "maxWidth"),
                Axis::Y => ("minHeight", "maxHeight"),
            };
            let min = self.min_size().at(axis);
            let max = self.max_size().at(axis);
            if !(min.is_finite() && min > 0.0) {
                return Err(FrameError::config(alloc::format!(
                    "{min_name} must be finite and > 0, got {min}"
                )));
            }
            if max.is_nan() || max <= 0.0 {
                return Err(FrameError::config(alloc::format!(
                    "{max_name} must be > 0, got {max}"
                )));
            }
            if min > max {
                return Err(FrameError::config(alloc::format!(
                    "{min_name} ({min}) exceeds {max_name} ({max})"
                )));
            }
        }

        for (name, value) in [("minLeft", self.min_left), ("minTop", self.min_top)] {
            if value.is_some_and(f64::is_nan) {
                return Err(FrameError::config(alloc::format!("{name} must be a number")));
            }
        }

        self.build_grid()?;
        self.build_transition()?;
        Ok(())
    }

    /// Minimum sizes per axis.
    #[must_use]
    pub fn min_size(&self) -> XY<f64> {
        XY::new(self.min_width, self.min_height)
    }

    /// Maximum sizes per axis; `INFINITY` when unset.
    #[must_use]
    pub fn max_size(&self) -> XY<f64> {
        XY::new(
            self.max_width.unwrap_or(f64::INFINITY),
            self.max_height.unwrap_or(f64::INFINITY),
        )
    }

    /// Minimum positions per axis; `NEG_INFINITY` when unset.
    #[must_use]
    pub fn min_position(&self) -> XY<f64> {
        XY::new(
            self.min_left.unwrap_or(f64::NEG_INFINITY),
            self.min_top.unwrap_or(f64::NEG_INFINITY),
        )
    }

    /// Builds the initial rect described by this configuration.
    #[must_use]
    pub fn rect(&self) -> FrameRect {
        FrameRect::with_bounds(
            XY::new(self.left, self.top),
            XY::new(self.width, self.height),
            self.min_position(),
            self.min_size(),
            self.max_size(),
        )
    }

    pub(crate) fn build_grid(&self) -> FrameResult<Option<Grid>> {
        match self.grid {
            Some(cell) => Grid::new(XY::from(cell), self.grid_buf).map(Some),
            None if (0.0..=1.0).contains(&self.grid_buf) => Ok(None),
            None => Err(FrameError::config(alloc::format!(
                "gridBuf must be within [0, 1], got {}",
                self.grid_buf
            ))),
        }
    }

    pub(crate) fn build_transition(&self) -> FrameResult<Option<Transition>> {
        let transition = Transition::new(self.t_speed, self.t_function)?;
        Ok(self.transition.then_some(transition))
    }
}
