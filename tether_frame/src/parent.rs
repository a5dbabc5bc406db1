// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Container bounds: outer box, padding, and the usable interior.

use kurbo::{Point, Rect, Size};
use tether_axis::{Axis, XY};

use crate::ports::ContainerProbe;
use crate::rect::FrameRect;

/// Container padding in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Padding {
    /// Top padding.
    pub top: f64,
    /// Right padding.
    pub right: f64,
    /// Bottom padding.
    pub bottom: f64,
    /// Left padding.
    pub left: f64,
}

impl Padding {
    /// Padding of `value` on every side.
    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Expands a 1–4 value CSS shorthand into the four sides.
    ///
    /// Value `i` of the `[top, right, bottom, left]` order is taken from
    /// `values[i % len]`. With three values this would copy `top` into
    /// `left`, so `left = right` is applied explicitly. Extra values beyond
    /// four are ignored; no values means zero padding.
    #[must_use]
    pub fn from_values(values: &[f64]) -> Self {
        let values = &values[..values.len().min(4)];
        if values.is_empty() {
            return Self::default();
        }
        let side = |i: usize| values[i % values.len()];
        let mut padding = Self {
            top: side(0),
            right: side(1),
            bottom: side(2),
            left: side(3),
        };
        if values.len() == 3 {
            padding.left = padding.right;
        }
        padding
    }

    /// Parses a computed padding string such as `"10px 20px"`.
    ///
    /// Tokens are separated by whitespace or commas and may carry a `px`
    /// suffix. Tokens that are not numbers are skipped.
    #[must_use]
    pub fn parse(css: &str) -> Self {
        let mut values = [0.0; 4];
        let mut len = 0;
        for token in css
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
        {
            let number = token.strip_suffix("px").unwrap_or(token);
            match number.parse::<f64>() {
                Ok(v) if v.is_finite() => {
                    if len < values.len() {
                        values[len] = v;
                        len += 1;
                    }
                }
                _ => {
                    tracing::warn!(
                        target: "tether.frame",
                        token,
                        "ignoring unparseable padding token"
                    );
                }
            }
        }
        Self::from_values(&values[..len])
    }

    /// The padding before the interior along `axis` (`left` or `top`).
    #[must_use]
    pub fn leading(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.left,
            Axis::Y => self.top,
        }
    }

    /// Total padding along `axis` (`left + right` or `top + bottom`).
    #[must_use]
    pub fn total(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.left + self.right,
            Axis::Y => self.top + self.bottom,
        }
    }
}

/// A snapshot of the container's outer box and padding.
///
/// Snapshots are replaced wholesale, never patched one field at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ParentBounds {
    /// Outer box in client coordinates.
    pub outer: Rect,
    /// Computed padding.
    pub padding: Padding,
}

impl ParentBounds {
    /// Creates a snapshot.
    #[must_use]
    pub const fn new(outer: Rect, padding: Padding) -> Self {
        Self { outer, padding }
    }

    /// Reads a snapshot from a live container.
    #[must_use]
    pub fn probe(probe: &impl ContainerProbe) -> Self {
        Self::new(probe.bounding_box(), Padding::parse(probe.padding()))
    }

    /// Client-space origin of the interior (outer origin plus leading padding).
    #[must_use]
    pub fn interior_origin(&self) -> Point {
        Point::new(
            self.outer.x0 + self.padding.leading(Axis::X),
            self.outer.y0 + self.padding.leading(Axis::Y),
        )
    }

    /// Interior size (outer size minus padding), never negative.
    #[must_use]
    pub fn interior_size(&self) -> Size {
        Size::new(
            self.interior_extent(Axis::X),
            self.interior_extent(Axis::Y),
        )
    }

    /// Interior width or height.
    #[must_use]
    pub fn interior_extent(&self, axis: Axis) -> f64 {
        let outer = match axis {
            Axis::X => self.outer.width(),
            Axis::Y => self.outer.height(),
        };
        (outer - self.padding.total(axis)).max(0.0)
    }
}

/// Owns the latest [`ParentBounds`] and applies restrict-to-parent.
///
/// This is the only component that narrows a rect's position bounds after
/// construction.
#[derive(Clone, Debug, PartialEq)]
pub struct ParentTracker {
    bounds: ParentBounds,
    restrict: XY<bool>,
}

impl ParentTracker {
    /// Creates a tracker with an empty snapshot.
    #[must_use]
    pub fn new(restrict: XY<bool>) -> Self {
        Self {
            bounds: ParentBounds::default(),
            restrict,
        }
    }

    /// Re-reads the container and applies the new snapshot to `rect`.
    pub fn refresh(&mut self, probe: &impl ContainerProbe, rect: &mut FrameRect) -> ParentBounds {
        self.apply(ParentBounds::probe(probe), rect)
    }

    /// Replaces the snapshot and, on every restricted axis, confines `rect`
    /// to the interior: `minPosition = 0`, `maxFar = interior extent`.
    pub fn apply(&mut self, bounds: ParentBounds, rect: &mut FrameRect) -> ParentBounds {
        self.bounds = bounds;
        for axis in Axis::ALL {
            if self.restrict.at(axis) {
                rect.set_position_bounds(axis, 0.0, bounds.interior_extent(axis));
            }
        }
        tracing::trace!(
            target: "tether.frame",
            interior_width = bounds.interior_extent(Axis::X),
            interior_height = bounds.interior_extent(Axis::Y),
            "parent bounds refreshed"
        );
        bounds
    }

    /// The latest snapshot.
    #[must_use]
    pub fn bounds(&self) -> &ParentBounds {
        &self.bounds
    }

    /// Client-space origin of the container interior.
    #[must_use]
    pub fn origin(&self) -> Point {
        self.bounds.interior_origin()
    }

    /// Whether `axis` is confined to the parent.
    #[must_use]
    pub fn restricts(&self, axis: Axis) -> bool {
        self.restrict.at(axis)
    }
}
