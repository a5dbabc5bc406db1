// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grid quantization with a hysteresis buffer.
//!
//! Sizes and positions snap to multiples of a per-axis cell. While dragging,
//! [`apply_buffer`] biases the raw value towards the current one before
//! rounding, so a pointer hovering near a grid line does not make the frame
//! flicker between two snapped states.

use tether_axis::{Axis, XY};

use crate::error::{FrameError, FrameResult};
use crate::rect::{FrameRect, Measure, clamp};

/// `floor(value / cell) * cell`.
#[must_use]
pub fn floor_to_grid(value: f64, cell: f64) -> f64 {
    libm::floor(value / cell) * cell
}

/// `round(value / cell) * cell`, with ties rounding towards positive infinity.
#[must_use]
pub fn round_to_grid(value: f64, cell: f64) -> f64 {
    libm::floor(value / cell + 0.5) * cell
}

/// Snaps `new_value` to the grid with hysteresis around `current_value`.
///
/// If the value is growing and `current_value` is already within one cell of
/// `max_value`, `current_value` is returned unchanged: the next grid line
/// would overshoot the maximum. Otherwise `new_value` is pulled towards
/// `current_value` by `cell * buffer_fraction / 2` and rounded to the nearest
/// grid line.
#[must_use]
pub fn apply_buffer(
    new_value: f64,
    current_value: f64,
    max_value: f64,
    cell: f64,
    buffer_fraction: f64,
) -> f64 {
    if new_value > current_value && current_value + cell > max_value {
        return current_value;
    }

    let bias = cell * buffer_fraction / 2.0;
    let biased = if new_value < current_value {
        new_value + bias
    } else {
        new_value - bias
    };
    round_to_grid(biased, cell)
}

/// Per-axis grid cells plus the snapping buffer fraction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Grid {
    cell: XY<f64>,
    buffer_fraction: f64,
}

impl Grid {
    /// Default buffer fraction (`gridBuf`).
    pub const DEFAULT_BUFFER: f64 = 0.5;

    /// Creates a grid.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::InvalidConfiguration`] unless both cells are
    /// finite and positive and `buffer_fraction` lies in `[0, 1]`.
    pub fn new(cell: XY<f64>, buffer_fraction: f64) -> FrameResult<Self> {
        for axis in Axis::ALL {
            let c = cell.at(axis);
            if !(c.is_finite() && c > 0.0) {
                return Err(FrameError::config(alloc::format!(
                    "grid cell on {axis} must be finite and > 0, got {c}"
                )));
            }
        }
        if !(0.0..=1.0).contains(&buffer_fraction) {
            return Err(FrameError::config(alloc::format!(
                "gridBuf must be within [0, 1], got {buffer_fraction}"
            )));
        }
        Ok(Self {
            cell,
            buffer_fraction,
        })
    }

    /// The cell size along `axis`.
    #[must_use]
    pub fn cell(&self, axis: Axis) -> f64 {
        self.cell.at(axis)
    }

    /// Both cell sizes.
    #[must_use]
    pub fn cells(&self) -> XY<f64> {
        self.cell
    }

    /// The configured buffer fraction.
    #[must_use]
    pub fn buffer_fraction(&self) -> f64 {
        self.buffer_fraction
    }

    /// [`floor_to_grid`] with this grid's cell.
    #[must_use]
    pub fn floor(&self, axis: Axis, value: f64) -> f64 {
        floor_to_grid(value, self.cell(axis))
    }

    /// [`apply_buffer`] with this grid's cell and buffer fraction.
    #[must_use]
    pub fn snap(&self, axis: Axis, new_value: f64, current_value: f64, max_value: f64) -> f64 {
        apply_buffer(
            new_value,
            current_value,
            max_value,
            self.cell(axis),
            self.buffer_fraction,
        )
    }

    /// Aligns a freshly configured rect with the grid.
    ///
    /// Per axis: a minimum size smaller than one cell is raised to the cell,
    /// the size is floored to the grid, then clamped into
    /// `[min, floor(max)]` so flooring can never drop it to zero.
    pub fn apply_to(&self, rect: &mut FrameRect) {
        for axis in Axis::ALL {
            let cell = self.cell(axis);
            if rect.min_size(axis) < cell {
                tracing::debug!(
                    target: "tether.frame",
                    %axis,
                    from = rect.min_size(axis),
                    to = cell,
                    "minimum size raised to one grid cell"
                );
                rect.set(axis, Measure::Min, cell);
            }

            let min = rect.min_size(axis);
            let max = self.floor(axis, rect.max_size(axis));
            let size = clamp(self.floor(axis, rect.size(axis)), min, max);
            rect.set_size(axis, size);
        }
    }
}
