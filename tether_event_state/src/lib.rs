// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tether Event State: pointer gesture bookkeeping for frames.
//!
//! A frame being dragged should not jump so that its corner sits under the
//! pointer; it should keep the grab point the user picked. This crate tracks
//! that grab offset across one pointer-down → pointer-move* → pointer-up
//! gesture:
//!
//! - [`pointer_to_local`]: converts a client-space pointer position into the
//!   container's interior coordinate space.
//! - [`cursor::CursorTracker`]: records the offset between the pointer and an
//!   anchor point (the frame's top-left for moves, its bottom-right for
//!   resizes) and maps later pointer positions back to anchor positions.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use tether_event_state::cursor::CursorTracker;
//!
//! let parent_origin = Point::new(20.0, 0.0);
//! let mut cursor = CursorTracker::default();
//!
//! // Grab a frame whose left edge is at 50 with the pointer at client x 150.
//! cursor.begin(Point::new(150.0, 0.0), parent_origin, Point::new(50.0, 0.0));
//! assert_eq!(cursor.offset().x, 80.0);
//!
//! // Pointer moves to client x 170: the frame's left edge follows to 70.
//! let origin = cursor.current_origin(Point::new(170.0, 0.0), parent_origin);
//! assert_eq!(origin.x, 70.0);
//!
//! cursor.end();
//! assert!(!cursor.is_active());
//! ```
//!
//! The tracker is headless: it does not subscribe to events itself. Callers
//! feed it positions from whatever event system they use.
//!
//! This crate is `no_std`.

#![no_std]

pub mod cursor;

pub use cursor::pointer_to_local;
