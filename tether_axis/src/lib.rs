// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tether Axis: typed dispatch over the horizontal and vertical axes.
//!
//! Geometry code for a rectangle tends to do everything twice: once for
//! `left`/`width` and once for `top`/`height`. This crate gives that
//! duplication a single, exhaustive shape:
//!
//! - [`Axis`]: `X` or `Y`, with a fallible [`FromStr`](core::str::FromStr)
//!   entry point for `"x"`/`"y"` tokens coming from untyped callers.
//! - [`XY`]: a pair of per-axis values addressed by [`Axis`].
//! - [`AxisValue`]: either a ready value or a producer closure, so the same
//!   call site can accept constants and computed values alike.
//!
//! ## Minimal example
//!
//! ```rust
//! use tether_axis::{Axis, AxisValue, XY, resolve_axis};
//!
//! let mut size = XY::new(120.0, 80.0);
//! for axis in Axis::ALL {
//!     *size.get_mut(axis) *= 2.0;
//! }
//! assert_eq!(*Axis::Y.select(&size), 160.0);
//!
//! // Only the selected side is evaluated.
//! let width = resolve_axis(
//!     Axis::X,
//!     AxisValue::producer(|| size.x - 40.0),
//!     AxisValue::value(0.0),
//! );
//! assert_eq!(width, 200.0);
//!
//! let bad: Result<Axis, _> = "z".parse();
//! assert!(bad.is_err());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod axis;
mod pair;
mod value;

pub use axis::{Axis, InvalidAxis};
pub use pair::XY;
pub use value::{AxisValue, resolve_axis, resolve_axis_token};
