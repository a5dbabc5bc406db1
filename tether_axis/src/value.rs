// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value-or-producer arguments for axis dispatch.
//!
//! Per-axis call sites frequently mix constants (a stored offset) with values
//! that must be computed on demand (the parent's interior width). Accepting
//! either at the same call site is intentional: [`AxisValue`] makes the choice
//! explicit in the type instead of inspecting the argument at runtime.

use crate::{Axis, InvalidAxis};

/// Either a ready value or a zero-argument producer of one.
#[derive(Clone, Copy, Debug)]
pub enum AxisValue<T, F = fn() -> T> {
    /// A value used as-is.
    Value(T),
    /// A producer invoked only when this side is selected.
    Producer(F),
}

impl<T> AxisValue<T> {
    /// Wraps a ready value.
    #[must_use]
    pub const fn value(value: T) -> Self {
        Self::Value(value)
    }
}

impl<T, F: FnOnce() -> T> AxisValue<T, F> {
    /// Wraps a producer.
    #[must_use]
    pub const fn producer(f: F) -> Self {
        Self::Producer(f)
    }

    /// Returns the value, invoking the producer if there is one.
    pub fn resolve(self) -> T {
        match self {
            Self::Value(value) => value,
            Self::Producer(f) => f(),
        }
    }
}

/// Resolves the side of `x`/`y` selected by `axis`.
///
/// The unselected side is dropped without being evaluated.
pub fn resolve_axis<T, FX, FY>(axis: Axis, x: AxisValue<T, FX>, y: AxisValue<T, FY>) -> T
where
    FX: FnOnce() -> T,
    FY: FnOnce() -> T,
{
    match axis {
        Axis::X => x.resolve(),
        Axis::Y => y.resolve(),
    }
}

/// Like [`resolve_axis`], but takes the axis as an untyped `"x"`/`"y"` token.
///
/// # Errors
///
/// Returns [`InvalidAxis`] for any other token; neither side is evaluated.
pub fn resolve_axis_token<T, FX, FY>(
    token: &str,
    x: AxisValue<T, FX>,
    y: AxisValue<T, FY>,
) -> Result<T, InvalidAxis>
where
    FX: FnOnce() -> T,
    FY: FnOnce() -> T,
{
    let axis: Axis = token.parse()?;
    Ok(resolve_axis(axis, x, y))
}
