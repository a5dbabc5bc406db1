// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tether Frame: draggable, resizable frames confined to a parent container.
//!
//! A [`Frame`] owns one rectangle and keeps it inside its container while the
//! user drags or resizes it and while the window around it changes:
//!
//! - [`FrameRect`]: position, size, and the bounds that constrain them. Sizes
//!   are clamped on every write; when bounds cross, the minimum wins.
//! - [`ParentTracker`]: reads the container's box and padding through a
//!   [`ContainerProbe`] and, on restricted axes, narrows the rect's position
//!   bounds to the padded interior.
//! - [`reflow`]: pulls a rect that overflows its container back inside,
//!   shrinking it first and moving it second.
//! - [`Grid`]: optional snapping with a hysteresis buffer, so pointer jitter
//!   near a grid line does not make the frame flicker.
//! - [`Transition`]: optional CSS-style transition rule for animated changes.
//!
//! The host supplies three ports: a [`ContainerProbe`] to read the container,
//! a [`Surface`] to paint geometry, and [`LayoutEvents`] to deliver window
//! resize and scroll notifications.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use tether_frame::{
//!     ContainerProbe, Frame, FrameConfig, Geometry, GestureKind, LayoutEvent, LayoutEvents,
//!     Surface,
//! };
//!
//! struct Container(Rect);
//!
//! impl ContainerProbe for Container {
//!     fn bounding_box(&self) -> Rect {
//!         self.0
//!     }
//!     fn padding(&self) -> &str {
//!         "10px"
//!     }
//! }
//!
//! #[derive(Default)]
//! struct Paint(Option<Geometry>);
//!
//! impl Surface for Paint {
//!     fn write_geometry(&mut self, geometry: Geometry) {
//!         self.0 = Some(geometry);
//!     }
//! }
//!
//! struct Host;
//!
//! impl LayoutEvents for Host {
//!     fn subscribe(&mut self, _: LayoutEvent) {}
//!     fn unsubscribe(&mut self, _: LayoutEvent) {}
//! }
//!
//! let config = FrameConfig {
//!     width: 250.0,
//!     height: 100.0,
//!     ..FrameConfig::default()
//! };
//! let mut frame = Frame::new(&config).unwrap();
//! let mut container = Container(Rect::new(0.0, 0.0, 400.0, 300.0));
//! let mut paint = Paint::default();
//! frame.mount(&container, &mut paint, &mut Host);
//!
//! // Grab the frame 100px right of its left edge and drag 50px to the right.
//! frame.pointer_down(Point::new(110.0, 60.0), GestureKind::Move);
//! frame.pointer_move(Point::new(160.0, 60.0), &mut paint);
//! frame.pointer_up(&mut paint);
//! assert_eq!(frame.geometry().left, 50.0);
//!
//! // The container shrinks to a 200px interior: the frame shrinks to fit.
//! container.0 = Rect::new(0.0, 0.0, 220.0, 300.0);
//! frame.handle_layout_event(LayoutEvent::Resize, &container, &mut paint);
//! assert_eq!(frame.geometry().left, 50.0);
//! assert_eq!(frame.geometry().width, 150.0);
//! assert_eq!(paint.0, Some(frame.geometry()));
//! ```
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events under the `tether.frame` target:
//! `debug` for lifecycle changes (mount, gestures, reflows), `trace` for
//! per-pointer-move detail, and `warn` for padding that could not be parsed.
//! Nothing is emitted unless the host installs a subscriber.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod error;
mod frame;
mod grid;
mod parent;
mod ports;
mod rect;
mod reflow;
mod transition;

pub use config::{FrameConfig, RestrictToParent};
pub use error::{FrameError, FrameResult};
pub use frame::{Frame, GestureKind};
pub use grid::{Grid, apply_buffer, floor_to_grid, round_to_grid};
pub use parent::{Padding, ParentBounds, ParentTracker};
pub use ports::{ContainerProbe, LayoutEvent, LayoutEvents, Surface};
pub use rect::{DEFAULT_MIN_SIZE, FrameRect, Geometry, Measure};
pub use reflow::{reflow, reflow_axis};
pub use transition::{Easing, Transition, TransitionRule};

pub use tether_axis::{Axis, XY};
