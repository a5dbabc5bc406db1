// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::Axis;

/// A pair of values, one per [`Axis`].
///
/// `XY` replaces pairs of parallel fields (`left`/`top`, `width`/`height`, ...)
/// so that per-axis logic is written once and indexed by [`Axis`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct XY<T> {
    /// Horizontal component.
    pub x: T,
    /// Vertical component.
    pub y: T,
}

impl<T> XY<T> {
    /// Creates a pair from its components.
    #[must_use]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Creates a pair with the same value on both axes.
    #[must_use]
    pub fn splat(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            x: value.clone(),
            y: value,
        }
    }

    /// Borrows the component for `axis`.
    #[must_use]
    pub fn get(&self, axis: Axis) -> &T {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
        }
    }

    /// Mutably borrows the component for `axis`.
    pub fn get_mut(&mut self, axis: Axis) -> &mut T {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
        }
    }

    /// Replaces the component for `axis`, returning the previous value.
    pub fn set(&mut self, axis: Axis, value: T) -> T {
        core::mem::replace(self.get_mut(axis), value)
    }

    /// Applies `f` to both components.
    #[must_use]
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> XY<U> {
        XY {
            x: f(self.x),
            y: f(self.y),
        }
    }

    /// Applies `f` to both components, passing the axis along.
    #[must_use]
    pub fn map_with_axis<U>(self, mut f: impl FnMut(Axis, T) -> U) -> XY<U> {
        XY {
            x: f(Axis::X, self.x),
            y: f(Axis::Y, self.y),
        }
    }
}

impl<T: Copy> XY<T> {
    /// Returns the component for `axis` by value.
    #[must_use]
    pub fn at(&self, axis: Axis) -> T {
        *self.get(axis)
    }
}

impl XY<bool> {
    /// Returns `true` if either component is set.
    #[must_use]
    pub fn any(&self) -> bool {
        self.x || self.y
    }
}

impl<T> From<(T, T)> for XY<T> {
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

impl<T> From<[T; 2]> for XY<T> {
    fn from([x, y]: [T; 2]) -> Self {
        Self { x, y }
    }
}

impl<T> From<XY<T>> for (T, T) {
    fn from(pair: XY<T>) -> Self {
        (pair.x, pair.y)
    }
}
