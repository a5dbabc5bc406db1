// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grab-offset tracking for a single pointer gesture.
//!
//! ## Usage
//!
//! 1) Start a gesture with [`CursorTracker::begin`], passing the pointer, the
//!    container's interior origin, and the anchor point being dragged.
//! 2) On each move, call [`CursorTracker::current_origin`] to get where the
//!    anchor should be now.
//! 3) End the gesture with [`CursorTracker::end`], which resets the offset.
//!
//! Starting a new gesture while one is active overwrites the offset.

use kurbo::{Point, Vec2};

/// Converts a client-space pointer position into container-local space.
///
/// `parent_origin` is the client-space position of the container's interior
/// (its box origin plus its leading padding).
#[must_use]
pub fn pointer_to_local(client: Point, parent_origin: Point) -> Point {
    (client - parent_origin).to_point()
}

/// Tracks the pointer's displacement from an anchor point during a gesture.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CursorTracker {
    offset: Vec2,
    active: bool,
}

impl CursorTracker {
    /// Creates an idle tracker with a zero offset.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            offset: Vec2::ZERO,
            active: false,
        }
    }

    /// Starts a gesture, recording `local(client) - anchor` as the offset.
    ///
    /// `anchor` is expressed in container-local coordinates. Returns the
    /// recorded offset.
    pub fn begin(&mut self, client: Point, parent_origin: Point, anchor: Point) -> Vec2 {
        if self.active {
            tracing::debug!(
                target: "tether.cursor",
                previous_x = self.offset.x,
                previous_y = self.offset.y,
                "gesture started before the previous one ended; offset overwritten"
            );
        }
        self.offset = pointer_to_local(client, parent_origin) - anchor;
        self.active = true;
        tracing::trace!(
            target: "tether.cursor",
            offset_x = self.offset.x,
            offset_y = self.offset.y,
            "gesture started"
        );
        self.offset
    }

    /// Returns where the anchor sits for a pointer at `client`.
    ///
    /// Outside a gesture the offset is zero, so this is just the local pointer.
    #[must_use]
    pub fn current_origin(&self, client: Point, parent_origin: Point) -> Point {
        pointer_to_local(client, parent_origin) - self.offset
    }

    /// Ends the gesture and resets the offset to zero.
    pub fn end(&mut self) {
        self.offset = Vec2::ZERO;
        self.active = false;
    }

    /// The current grab offset.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Returns `true` between [`begin`](Self::begin) and [`end`](Self::end).
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_tracker_is_idle() {
        let cursor = CursorTracker::new();
        assert!(!cursor.is_active());
        assert_eq!(cursor.offset(), Vec2::ZERO);
        assert_eq!(cursor, CursorTracker::default());
    }

    #[test]
    fn pointer_to_local_subtracts_parent_origin() {
        let local = pointer_to_local(Point::new(150.0, 40.0), Point::new(20.0, 10.0));
        assert_eq!(local, Point::new(130.0, 30.0));
    }

    #[test]
    fn begin_records_offset_from_anchor() {
        let mut cursor = CursorTracker::new();
        let offset = cursor.begin(
            Point::new(150.0, 90.0),
            Point::new(20.0, 10.0),
            Point::new(50.0, 30.0),
        );

        assert_eq!(offset, Vec2::new(80.0, 50.0));
        assert!(cursor.is_active());
    }

    #[test]
    fn current_origin_keeps_grab_point() {
        let parent = Point::new(20.0, 10.0);
        let mut cursor = CursorTracker::new();
        cursor.begin(Point::new(150.0, 90.0), parent, Point::new(50.0, 30.0));

        let origin = cursor.current_origin(Point::new(170.0, 85.0), parent);

        assert_eq!(origin, Point::new(70.0, 25.0));
    }

    #[test]
    fn end_resets_offset() {
        let mut cursor = CursorTracker::new();
        cursor.begin(Point::new(5.0, 5.0), Point::ZERO, Point::new(1.0, 2.0));

        cursor.end();

        assert!(!cursor.is_active());
        assert_eq!(cursor.offset(), Vec2::ZERO);
    }

    #[test]
    fn end_on_fresh_tracker_is_safe() {
        let mut cursor = CursorTracker::new();
        cursor.end();
        assert_eq!(cursor, CursorTracker::new());
    }

    #[test]
    fn idle_origin_is_local_pointer() {
        let cursor = CursorTracker::new();
        let origin = cursor.current_origin(Point::new(30.0, 40.0), Point::new(10.0, 10.0));
        assert_eq!(origin, Point::new(20.0, 30.0));
    }

    #[test]
    fn begin_overwrites_previous_gesture() {
        let mut cursor = CursorTracker::new();
        cursor.begin(Point::new(100.0, 100.0), Point::ZERO, Point::ZERO);

        let offset = cursor.begin(Point::new(60.0, 70.0), Point::ZERO, Point::new(50.0, 50.0));

        assert_eq!(offset, Vec2::new(10.0, 20.0));
        assert_eq!(cursor.offset(), offset);
        assert!(cursor.is_active());
    }

    #[test]
    fn negative_offsets_are_kept() {
        let mut cursor = CursorTracker::new();
        let offset = cursor.begin(Point::new(10.0, 10.0), Point::ZERO, Point::new(40.0, 25.0));
        assert_eq!(offset, Vec2::new(-30.0, -15.0));

        let origin = cursor.current_origin(Point::new(20.0, 20.0), Point::ZERO);
        assert_eq!(origin, Point::new(50.0, 35.0));
    }
}
