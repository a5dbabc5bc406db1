// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Re-confining a rect after its container changed.
//!
//! When the container shrinks, a frame's far edge can end up past the
//! container's interior. Reflow pulls it back one axis at a time: the size is
//! re-clamped first, then the position, so that the position's range is
//! computed from the current minimum size rather than a stale one.

use tether_axis::{Axis, XY};

use crate::grid::Grid;
use crate::rect::{FrameRect, clamp};

/// Re-confines `rect` along one axis. Returns `true` if anything changed.
///
/// Nothing happens unless the far edge exceeds the rect's far bound. Then:
///
/// 1. `size = clamp(size, min, min(cap, maxFar - max(position, minPosition)))`
/// 2. `position = clamp(position, minPosition, maxFar - min)`
/// 3. with a grid, both values are floored to it without dropping below
///    their minimums
///
/// Every step only moves values down or up to their minimums, so the result
/// fits within `[minPosition, maxFar]` whenever the room allows the minimum
/// size. When it does not (an interior narrower than `min`), the rect stays
/// at its minimum and overflows; recomputing yields the same values, so the
/// call reports no change and a second call is a no-op either way.
pub fn reflow_axis(rect: &mut FrameRect, axis: Axis, grid: Option<&Grid>) -> bool {
    let max_far = rect.max_far(axis);
    if rect.far(axis) <= max_far {
        return false;
    }

    let min_position = rect.min_position(axis);
    let min_size = rect.min_size(axis);
    let position = rect.position(axis);
    let start = position.max(min_position);

    let max_size = rect.max_size_cap(axis).min(max_far - start);
    let mut new_size = clamp(rect.size(axis), min_size, max_size);
    let mut new_position = clamp(position, min_position, max_far - min_size);

    if let Some(grid) = grid {
        new_size = grid.floor(axis, new_size).max(min_size);
        new_position = grid.floor(axis, new_position).max(min_position);
    }

    if new_position == position && new_size == rect.size(axis) {
        return false;
    }

    tracing::trace!(
        target: "tether.frame",
        %axis,
        far = rect.far(axis),
        max_far,
        new_size,
        new_position,
        "reflowing axis"
    );

    rect.set_position(axis, new_position);
    rect.set_size(axis, new_size);
    true
}

/// Re-confines `rect` along both axes; returns which axes changed.
pub fn reflow(rect: &mut FrameRect, grid: Option<&Grid>) -> XY<bool> {
    XY::new(
        reflow_axis(rect, Axis::X, grid),
        reflow_axis(rect, Axis::Y, grid),
    )
}
