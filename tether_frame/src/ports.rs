// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Boundaries between the frame core and its host environment.
//!
//! The core never touches a DOM, a window, or a renderer directly. Hosts
//! implement these traits and route events into [`Frame`](crate::Frame).

use kurbo::Rect;

use crate::rect::Geometry;
use crate::transition::TransitionRule;

/// Read access to the container a frame lives in.
pub trait ContainerProbe {
    /// The container's outer box in client coordinates.
    fn bounding_box(&self) -> Rect;

    /// The container's computed padding, as a CSS-style string (`"10px 20px"`).
    fn padding(&self) -> &str;
}

/// Write access to whatever paints the frame.
pub trait Surface {
    /// Writes `left`/`top`/`width`/`height` in container-local pixels.
    fn write_geometry(&mut self, geometry: Geometry);

    /// Installs the transition rule used to animate geometry changes.
    fn write_transition(&mut self, rule: &TransitionRule) {
        let _ = rule;
    }

    /// Tells the parent container that the frame's state changed.
    fn notify_parent(&mut self, geometry: Geometry) {
        let _ = geometry;
    }
}

/// Container-level layout events a frame reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LayoutEvent {
    /// The window (and possibly the container) was resized.
    Resize,
    /// The window scrolled, moving the container in client space.
    Scroll,
}

impl LayoutEvent {
    /// Both events, in subscription order.
    pub const ALL: [Self; 2] = [Self::Scroll, Self::Resize];
}

/// Subscription port for [`LayoutEvent`]s.
///
/// The host keeps its own listener bookkeeping and forwards matching events
/// to [`Frame::handle_layout_event`](crate::Frame::handle_layout_event).
pub trait LayoutEvents {
    /// Starts delivering `event`.
    fn subscribe(&mut self, event: LayoutEvent);

    /// Stops delivering `event`.
    fn unsubscribe(&mut self, event: LayoutEvent);
}
