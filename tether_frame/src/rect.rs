// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Position, size, and bounds of a frame.

use tether_axis::{Axis, XY};

/// Default minimum width and height.
pub const DEFAULT_MIN_SIZE: f64 = 35.0;

/// Which per-axis quantity of a [`FrameRect`] to read or write.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Measure {
    /// `left` / `top`.
    Position,
    /// `width` / `height`.
    Size,
    /// `minWidth` / `minHeight`.
    Min,
    /// `maxWidth` / `maxHeight`.
    ///
    /// Reads return the effective maximum (see [`FrameRect::max_size`]);
    /// writes set the explicit cap.
    Max,
}

/// A plain `left`/`top`/`width`/`height` snapshot, in container-local pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Geometry {
    /// Distance from the container's interior left edge.
    pub left: f64,
    /// Distance from the container's interior top edge.
    pub top: f64,
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

/// The managed rectangle: position, size, and the bounds constraining them.
///
/// Sizes are always kept within `[min, max]`: every size write is clamped,
/// and changing a bound re-clamps the stored size. When the bounds cross
/// (for example because the frame sits close to its far bound), the minimum
/// wins. Positions are stored as given; confinement to the parent is done by
/// the reflow pass.
///
/// The far edges (`right`, `bottom`) are derived, never stored.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameRect {
    position: XY<f64>,
    size: XY<f64>,
    min_position: XY<f64>,
    min_size: XY<f64>,
    max_size: XY<f64>,
    max_far: XY<f64>,
}

impl FrameRect {
    /// Creates a rect with default bounds: unbounded positions, a minimum
    /// size of [`DEFAULT_MIN_SIZE`], and no maximum.
    #[must_use]
    pub fn new(position: XY<f64>, size: XY<f64>) -> Self {
        Self::with_bounds(
            position,
            size,
            XY::splat(f64::NEG_INFINITY),
            XY::splat(DEFAULT_MIN_SIZE),
            XY::splat(f64::INFINITY),
        )
    }

    /// Creates a rect with explicit size bounds and minimum positions.
    ///
    /// The far bounds start unbounded; only the parent tracker narrows them.
    #[must_use]
    pub fn with_bounds(
        position: XY<f64>,
        size: XY<f64>,
        min_position: XY<f64>,
        min_size: XY<f64>,
        max_size: XY<f64>,
    ) -> Self {
        let mut rect = Self {
            position,
            size,
            min_position,
            min_size,
            max_size,
            max_far: XY::splat(f64::INFINITY),
        };
        for axis in Axis::ALL {
            rect.clamp_size(axis);
        }
        rect
    }

    /// Reads one measure along `axis`.
    #[must_use]
    pub fn get(&self, axis: Axis, measure: Measure) -> f64 {
        match measure {
            Measure::Position => self.position(axis),
            Measure::Size => self.size(axis),
            Measure::Min => self.min_size(axis),
            Measure::Max => self.max_size(axis),
        }
    }

    /// Writes one measure along `axis`, keeping the size within its bounds.
    pub fn set(&mut self, axis: Axis, measure: Measure, value: f64) {
        match measure {
            Measure::Position => self.set_position(axis, value),
            Measure::Size => self.set_size(axis, value),
            Measure::Min => {
                self.min_size.set(axis, value);
                self.clamp_size(axis);
            }
            Measure::Max => {
                self.max_size.set(axis, value);
                self.clamp_size(axis);
            }
        }
    }

    /// `left` or `top`.
    #[must_use]
    pub fn position(&self, axis: Axis) -> f64 {
        self.position.at(axis)
    }

    /// Stores a position without clamping it.
    pub fn set_position(&mut self, axis: Axis, value: f64) {
        self.position.set(axis, value);
    }

    /// `width` or `height`.
    #[must_use]
    pub fn size(&self, axis: Axis) -> f64 {
        self.size.at(axis)
    }

    /// Stores a size, clamped into `[min_size, max_size]`.
    pub fn set_size(&mut self, axis: Axis, value: f64) {
        let (min, max) = self.size_bounds(axis);
        self.size.set(axis, clamp(value, min, max));
    }

    /// `right` or `bottom`.
    #[must_use]
    pub fn far(&self, axis: Axis) -> f64 {
        self.position(axis) + self.size(axis)
    }

    /// `minLeft` or `minTop`.
    #[must_use]
    pub fn min_position(&self, axis: Axis) -> f64 {
        self.min_position.at(axis)
    }

    /// `maxRight` or `maxBottom`.
    #[must_use]
    pub fn max_far(&self, axis: Axis) -> f64 {
        self.max_far.at(axis)
    }

    /// `minWidth` or `minHeight`.
    #[must_use]
    pub fn min_size(&self, axis: Axis) -> f64 {
        self.min_size.at(axis)
    }

    /// The explicit `maxWidth` / `maxHeight` cap, ignoring the far bound.
    #[must_use]
    pub fn max_size_cap(&self, axis: Axis) -> f64 {
        self.max_size.at(axis)
    }

    /// The effective maximum size at the current position.
    ///
    /// This is the smaller of the explicit cap and the room left before the
    /// far bound, but never less than the minimum size.
    #[must_use]
    pub fn max_size(&self, axis: Axis) -> f64 {
        self.size_bounds(axis).1
    }

    /// Returns `(min, max)` for the size along `axis`, with `min <= max`.
    #[must_use]
    pub fn size_bounds(&self, axis: Axis) -> (f64, f64) {
        let min = self.min_size(axis);
        let room = self.max_far(axis) - self.position(axis);
        let max = self.max_size_cap(axis).min(room).max(min);
        (min, max)
    }

    /// Convenience for `position(Axis::X)`.
    #[must_use]
    pub fn left(&self) -> f64 {
        self.position.x
    }

    /// Convenience for `position(Axis::Y)`.
    #[must_use]
    pub fn top(&self) -> f64 {
        self.position.y
    }

    /// Convenience for `size(Axis::X)`.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.size.x
    }

    /// Convenience for `size(Axis::Y)`.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.size.y
    }

    /// Convenience for `far(Axis::X)`.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.far(Axis::X)
    }

    /// Convenience for `far(Axis::Y)`.
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.far(Axis::Y)
    }

    /// Snapshot for the paint boundary.
    #[must_use]
    pub fn geometry(&self) -> Geometry {
        Geometry {
            left: self.position.x,
            top: self.position.y,
            width: self.size.x,
            height: self.size.y,
        }
    }

    /// The rect as a Kurbo rectangle in container-local space.
    #[must_use]
    pub fn to_kurbo(&self) -> kurbo::Rect {
        kurbo::Rect::new(self.left(), self.top(), self.right(), self.bottom())
    }

    /// Narrows the position bounds; reserved for the parent tracker.
    pub(crate) fn set_position_bounds(&mut self, axis: Axis, min_position: f64, max_far: f64) {
        self.min_position.set(axis, min_position);
        self.max_far.set(axis, max_far);
    }

    fn clamp_size(&mut self, axis: Axis) {
        self.set_size(axis, self.size(axis));
    }
}

/// Clamps `value` into `[min, max]`, letting `min` win if the bounds cross.
///
/// Unlike [`f64::clamp`], this never panics.
#[must_use]
pub(crate) fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.min(max).max(min)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(left: f64, width: f64) -> FrameRect {
        FrameRect::new(XY::new(left, 0.0), XY::new(width, 100.0))
    }

    #[test]
    fn defaults_match_props() {
        let r = rect(0.0, 100.0);
        assert_eq!(r.min_size(Axis::X), DEFAULT_MIN_SIZE);
        assert_eq!(r.min_position(Axis::X), f64::NEG_INFINITY);
        assert_eq!(r.max_far(Axis::Y), f64::INFINITY);
        assert_eq!(r.max_size(Axis::X), f64::INFINITY);
    }

    #[test]
    fn construction_clamps_initial_size() {
        let r = rect(0.0, 10.0);
        assert_eq!(r.width(), DEFAULT_MIN_SIZE);
    }

    #[test]
    fn set_size_clamps_to_min_and_max() {
        let mut r = rect(0.0, 100.0);
        r.set(Axis::X, Measure::Max, 200.0);

        r.set(Axis::X, Measure::Size, 5.0);
        assert_eq!(r.width(), DEFAULT_MIN_SIZE);

        r.set(Axis::X, Measure::Size, 500.0);
        assert_eq!(r.width(), 200.0);
    }

    #[test]
    fn raising_min_reclamps_size() {
        let mut r = rect(0.0, 50.0);
        r.set(Axis::X, Measure::Min, 80.0);
        assert_eq!(r.width(), 80.0);
        assert_eq!(r.get(Axis::X, Measure::Min), 80.0);
    }

    #[test]
    fn lowering_max_reclamps_size() {
        let mut r = rect(0.0, 150.0);
        r.set(Axis::Y, Measure::Max, 60.0);
        r.set(Axis::X, Measure::Max, 120.0);
        assert_eq!(r.width(), 120.0);
        assert_eq!(r.height(), 60.0);
    }

    #[test]
    fn far_edge_is_derived() {
        let mut r = rect(30.0, 70.0);
        assert_eq!(r.right(), 100.0);
        r.set(Axis::X, Measure::Position, 50.0);
        assert_eq!(r.right(), 120.0);
        assert_eq!(r.bottom(), 100.0);
    }

    #[test]
    fn position_is_not_clamped() {
        let mut r = rect(0.0, 100.0);
        r.set_position_bounds(Axis::X, 0.0, 200.0);
        r.set(Axis::X, Measure::Position, -40.0);
        assert_eq!(r.left(), -40.0);
        r.set(Axis::X, Measure::Position, 500.0);
        assert_eq!(r.left(), 500.0);
    }

    #[test]
    fn effective_max_respects_far_bound() {
        let mut r = rect(50.0, 100.0);
        r.set_position_bounds(Axis::X, 0.0, 200.0);
        assert_eq!(r.max_size(Axis::X), 150.0);

        r.set(Axis::X, Measure::Size, 400.0);
        assert_eq!(r.width(), 150.0);
        assert_eq!(r.right(), 200.0);
    }

    #[test]
    fn min_wins_when_bounds_cross() {
        let mut r = rect(190.0, 40.0);
        r.set_position_bounds(Axis::X, 0.0, 200.0);
        assert_eq!(r.size_bounds(Axis::X), (DEFAULT_MIN_SIZE, DEFAULT_MIN_SIZE));

        r.set(Axis::X, Measure::Size, 100.0);
        assert_eq!(r.width(), DEFAULT_MIN_SIZE);
    }

    #[test]
    fn geometry_and_kurbo_agree() {
        let r = FrameRect::new(XY::new(10.0, 20.0), XY::new(40.0, 50.0));
        let g = r.geometry();
        assert_eq!(
            g,
            Geometry {
                left: 10.0,
                top: 20.0,
                width: 40.0,
                height: 50.0
            }
        );
        assert_eq!(r.to_kurbo(), kurbo::Rect::new(10.0, 20.0, 50.0, 70.0));
    }

    #[test]
    fn clamp_never_panics_on_crossed_bounds() {
        assert_eq!(clamp(5.0, 10.0, 1.0), 10.0);
        assert_eq!(clamp(5.0, 1.0, 10.0), 5.0);
        assert_eq!(clamp(f64::INFINITY, 1.0, 10.0), 10.0);
    }
}
