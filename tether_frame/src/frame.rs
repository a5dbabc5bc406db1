// Copyright 2025 the Tether Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The frame controller: one rect plus the components that constrain it.

use kurbo::Point;
use tether_axis::{Axis, XY};
use tether_event_state::cursor::CursorTracker;

use crate::config::FrameConfig;
use crate::error::FrameResult;
use crate::grid::Grid;
use crate::parent::{ParentBounds, ParentTracker};
use crate::ports::{ContainerProbe, LayoutEvent, LayoutEvents, Surface};
use crate::rect::{FrameRect, Geometry, clamp};
use crate::reflow::reflow;
use crate::transition::{Transition, TransitionRule};

/// What a pointer gesture does to the frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureKind {
    /// Drag the whole frame; the top-left corner follows the pointer.
    Move,
    /// Drag the far edges on the enabled axes; the bottom-right corner
    /// follows the pointer.
    Resize(XY<bool>),
}

impl GestureKind {
    /// Resize from the bottom-right corner.
    pub const RESIZE_CORNER: Self = Self::Resize(XY { x: true, y: true });
}

/// A draggable, resizable frame confined to its container.
///
/// `Frame` composes a [`FrameRect`] with a [`ParentTracker`], an optional
/// [`Grid`] and [`Transition`], and a [`CursorTracker`]. All mutation goes
/// through `&mut self`, so one frame is never driven by two gestures at once.
#[derive(Clone, Debug)]
pub struct Frame {
    rect: FrameRect,
    parent: ParentTracker,
    grid: Option<Grid>,
    transition: Option<Transition>,
    cursor: CursorTracker,
    gesture: Option<GestureKind>,
}

impl Frame {
    /// Creates an unmounted frame.
    ///
    /// With a grid, the rect is aligned to it right away (see
    /// [`Grid::apply_to`]); [`mount`](Self::mount) aligns it again once the
    /// parent bounds are known.
    ///
    /// # Errors
    ///
    /// Returns [`FrameError::InvalidConfiguration`](crate::FrameError::InvalidConfiguration)
    /// if `config` fails [`FrameConfig::validate`].
    pub fn new(config: &FrameConfig) -> FrameResult<Self> {
        config.validate()?;
        let grid = config.build_grid()?;
        let mut rect = config.rect();
        if let Some(grid) = grid {
            grid.apply_to(&mut rect);
        }
        Ok(Self {
            rect,
            parent: ParentTracker::new(config.restrict_to_parent.per_axis()),
            grid,
            transition: config.build_transition()?,
            cursor: CursorTracker::new(),
            gesture: None,
        })
    }

    /// Attaches the frame to its container.
    ///
    /// Reads the parent bounds, aligns the rect with the grid, confines it,
    /// subscribes to layout events, installs the transition rule if enabled,
    /// and paints.
    pub fn mount(
        &mut self,
        probe: &impl ContainerProbe,
        surface: &mut impl Surface,
        events: &mut impl LayoutEvents,
    ) {
        self.parent.refresh(probe, &mut self.rect);
        if let Some(grid) = self.grid {
            grid.apply_to(&mut self.rect);
        }
        reflow(&mut self.rect, self.grid.as_ref());

        for event in LayoutEvent::ALL {
            events.subscribe(event);
        }
        if let Some(rule) = self.transition_rule() {
            surface.write_transition(&rule);
        }

        let geometry = self.rect.geometry();
        tracing::debug!(
            target: "tether.frame",
            left = geometry.left,
            top = geometry.top,
            width = geometry.width,
            height = geometry.height,
            "frame mounted"
        );
        surface.write_geometry(geometry);
    }

    /// Detaches the frame: ends any gesture and unsubscribes from events.
    pub fn unmount(&mut self, events: &mut impl LayoutEvents) {
        self.gesture = None;
        self.cursor.end();
        for event in LayoutEvent::ALL {
            events.unsubscribe(event);
        }
        tracing::debug!(target: "tether.frame", "frame unmounted");
    }

    /// Reacts to a window resize or scroll.
    ///
    /// Returns `true` if the rect had to be re-confined, in which case the
    /// new geometry was painted and the parent notified.
    pub fn handle_layout_event(
        &mut self,
        event: LayoutEvent,
        probe: &impl ContainerProbe,
        surface: &mut impl Surface,
    ) -> bool {
        tracing::trace!(target: "tether.frame", ?event, "layout event");
        self.reflow_with(ParentBounds::probe(probe), surface)
    }

    /// Re-confines the rect against a given parent snapshot.
    ///
    /// This is what [`handle_layout_event`](Self::handle_layout_event) does
    /// after probing the container; hosts and tests can call it directly with
    /// a synthetic snapshot.
    pub fn reflow_with(&mut self, bounds: ParentBounds, surface: &mut impl Surface) -> bool {
        self.parent.apply(bounds, &mut self.rect);
        let changed = reflow(&mut self.rect, self.grid.as_ref());
        if !changed.any() {
            return false;
        }

        let geometry = self.rect.geometry();
        tracing::debug!(
            target: "tether.frame",
            x = changed.x,
            y = changed.y,
            left = geometry.left,
            top = geometry.top,
            width = geometry.width,
            height = geometry.height,
            "frame reflowed"
        );
        surface.write_geometry(geometry);
        surface.notify_parent(geometry);
        true
    }

    /// Starts a gesture with the pointer at `client`.
    ///
    /// Starting a gesture while another is active replaces it.
    pub fn pointer_down(&mut self, client: Point, kind: GestureKind) {
        let anchor = match kind {
            GestureKind::Move => Point::new(self.rect.left(), self.rect.top()),
            GestureKind::Resize(_) => Point::new(self.rect.right(), self.rect.bottom()),
        };
        self.cursor.begin(client, self.parent.origin(), anchor);
        self.gesture = Some(kind);
        tracing::debug!(target: "tether.frame", ?kind, "gesture started");
    }

    /// Follows the pointer during a gesture.
    ///
    /// Returns `true` if the geometry changed, in which case it was painted.
    /// Outside a gesture this does nothing.
    pub fn pointer_move(&mut self, client: Point, surface: &mut impl Surface) -> bool {
        let Some(kind) = self.gesture else {
            return false;
        };

        let target = self.cursor.current_origin(client, self.parent.origin());
        let target = XY::new(target.x, target.y);
        let before = self.rect.geometry();
        for axis in Axis::ALL {
            match kind {
                GestureKind::Move => self.move_axis(axis, target.at(axis)),
                GestureKind::Resize(axes) if axes.at(axis) => {
                    self.resize_axis(axis, target.at(axis));
                }
                GestureKind::Resize(_) => {}
            }
        }

        let after = self.rect.geometry();
        tracing::trace!(
            target: "tether.frame",
            x = client.x,
            y = client.y,
            left = after.left,
            top = after.top,
            width = after.width,
            height = after.height,
            "pointer moved"
        );
        if after == before {
            return false;
        }
        surface.write_geometry(after);
        true
    }

    /// Ends the current gesture and notifies the parent of the final state.
    pub fn pointer_up(&mut self, surface: &mut impl Surface) {
        if self.gesture.take().is_none() {
            return;
        }
        self.cursor.end();
        let geometry = self.rect.geometry();
        tracing::debug!(
            target: "tether.frame",
            left = geometry.left,
            top = geometry.top,
            width = geometry.width,
            height = geometry.height,
            "gesture ended"
        );
        surface.notify_parent(geometry);
    }

    /// The transition rule for one grid step (or one pixel without a grid),
    /// if transitions are enabled.
    #[must_use]
    pub fn transition_rule(&self) -> Option<TransitionRule> {
        let step = self.grid.map_or(XY::splat(1.0), |grid| grid.cells());
        self.transition.map(|transition| transition.rule(step))
    }

    /// The managed rect.
    #[must_use]
    pub fn rect(&self) -> &FrameRect {
        &self.rect
    }

    /// Mutable access to the managed rect.
    ///
    /// Size writes stay clamped; positions are confined on the next reflow.
    pub fn rect_mut(&mut self) -> &mut FrameRect {
        &mut self.rect
    }

    /// Current geometry.
    #[must_use]
    pub fn geometry(&self) -> Geometry {
        self.rect.geometry()
    }

    /// The grid, if snapping is enabled.
    #[must_use]
    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    /// The latest parent snapshot.
    #[must_use]
    pub fn parent_bounds(&self) -> &ParentBounds {
        self.parent.bounds()
    }

    /// The active gesture, if any.
    #[must_use]
    pub fn gesture(&self) -> Option<GestureKind> {
        self.gesture
    }

    /// Returns `true` between [`pointer_down`](Self::pointer_down) and
    /// [`pointer_up`](Self::pointer_up).
    #[must_use]
    pub fn is_gesture_active(&self) -> bool {
        self.gesture.is_some()
    }

    fn move_axis(&mut self, axis: Axis, target: f64) {
        let current = self.rect.position(axis);
        let max = self.rect.max_far(axis) - self.rect.size(axis);
        let position = match self.grid {
            Some(grid) => grid.snap(axis, target, current, max),
            None => target,
        };
        self.rect
            .set_position(axis, clamp(position, self.rect.min_position(axis), max));
    }

    fn resize_axis(&mut self, axis: Axis, far_target: f64) {
        let current = self.rect.size(axis);
        let size = far_target - self.rect.position(axis);
        let size = match self.grid {
            Some(grid) => grid.snap(axis, size, current, self.rect.max_size(axis)),
            None => size,
        };
        self.rect.set_size(axis, size);
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use kurbo::Rect;

    use super::*;
    use crate::parent::Padding;

    #[derive(Default)]
    struct Recorder {
        painted: Vec<Geometry>,
        notified: Vec<Geometry>,
        rules: Vec<TransitionRule>,
    }

    impl Surface for Recorder {
        fn write_geometry(&mut self, geometry: Geometry) {
            self.painted.push(geometry);
        }

        fn write_transition(&mut self, rule: &TransitionRule) {
            self.rules.push(*rule);
        }

        fn notify_parent(&mut self, geometry: Geometry) {
            self.notified.push(geometry);
        }
    }

    fn bounds(width: f64, height: f64) -> ParentBounds {
        ParentBounds::new(Rect::new(0.0, 0.0, width, height), Padding::default())
    }

    fn frame(config: FrameConfig, parent: ParentBounds) -> Frame {
        let mut frame = Frame::new(&config).unwrap();
        frame.reflow_with(parent, &mut Recorder::default());
        frame
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = FrameConfig {
            height: -1.0,
            ..FrameConfig::default()
        };
        assert!(Frame::new(&config).is_err());
    }

    #[test]
    fn reflow_with_paints_and_notifies_only_on_change() {
        let config = FrameConfig {
            width: 250.0,
            height: 50.0,
            ..FrameConfig::default()
        };
        let mut frame = Frame::new(&config).unwrap();
        let mut surface = Recorder::default();

        assert!(!frame.reflow_with(bounds(400.0, 400.0), &mut surface));
        assert!(surface.painted.is_empty());

        assert!(frame.reflow_with(bounds(200.0, 400.0), &mut surface));
        assert_eq!(frame.geometry().width, 200.0);
        assert_eq!(surface.painted.len(), 1);
        assert_eq!(surface.notified.len(), 1);
    }

    #[test]
    fn undersized_interior_paints_once() {
        let config = FrameConfig {
            width: 100.0,
            height: 50.0,
            ..FrameConfig::default()
        };
        let mut frame = Frame::new(&config).unwrap();
        let mut surface = Recorder::default();

        let changes: Vec<bool> = (0..3)
            .map(|_| frame.reflow_with(bounds(20.0, 400.0), &mut surface))
            .collect();

        assert_eq!(changes, [true, false, false]);
        assert_eq!(frame.geometry().left, 0.0);
        assert_eq!(frame.geometry().width, 35.0);
        assert_eq!(surface.painted.len(), 1);
        assert_eq!(surface.notified.len(), 1);
    }

    #[test]
    fn new_aligns_rect_with_grid() {
        let config = FrameConfig {
            width: 130.0,
            height: 90.0,
            grid: Some([50.0, 20.0]),
            ..FrameConfig::default()
        };
        let mut frame = Frame::new(&config).unwrap();

        assert_eq!(frame.rect().min_size(Axis::X), 50.0);
        assert_eq!(frame.rect().min_size(Axis::Y), 35.0);
        assert_eq!(frame.geometry().width, 100.0);
        assert_eq!(frame.geometry().height, 80.0);

        // Headless reflow against an interior narrower than one cell keeps
        // the raised minimum.
        frame.reflow_with(bounds(30.0, 400.0), &mut Recorder::default());
        assert_eq!(frame.geometry().width, 50.0);
    }

    #[test]
    fn move_is_confined_to_parent() {
        let config = FrameConfig {
            width: 100.0,
            height: 100.0,
            ..FrameConfig::default()
        };
        let mut frame = frame(config, bounds(300.0, 200.0));
        let mut surface = Recorder::default();

        frame.pointer_down(Point::new(50.0, 50.0), GestureKind::Move);
        assert!(frame.pointer_move(Point::new(150.0, 80.0), &mut surface));
        assert_eq!(frame.geometry().left, 100.0);
        assert_eq!(frame.geometry().top, 30.0);

        frame.pointer_move(Point::new(1000.0, -500.0), &mut surface);
        assert_eq!(frame.geometry().left, 200.0);
        assert_eq!(frame.geometry().top, 0.0);
    }

    #[test]
    fn move_without_restriction_is_free() {
        let config = FrameConfig {
            width: 100.0,
            height: 100.0,
            restrict_to_parent: crate::RestrictToParent::Both(false),
            ..FrameConfig::default()
        };
        let mut frame = frame(config, bounds(300.0, 200.0));

        frame.pointer_down(Point::new(50.0, 50.0), GestureKind::Move);
        frame.pointer_move(Point::new(1000.0, -500.0), &mut Recorder::default());

        assert_eq!(frame.geometry().left, 950.0);
        assert_eq!(frame.geometry().top, -550.0);
    }

    #[test]
    fn resize_follows_corner_and_respects_bounds() {
        let config = FrameConfig {
            width: 100.0,
            height: 100.0,
            ..FrameConfig::default()
        };
        let mut frame = frame(config, bounds(300.0, 200.0));
        let mut surface = Recorder::default();

        // Grab 5px inside the bottom-right corner.
        frame.pointer_down(Point::new(95.0, 95.0), GestureKind::RESIZE_CORNER);
        frame.pointer_move(Point::new(145.0, 115.0), &mut surface);
        assert_eq!(frame.geometry().width, 150.0);
        assert_eq!(frame.geometry().height, 120.0);

        frame.pointer_move(Point::new(10.0, 900.0), &mut surface);
        assert_eq!(frame.geometry().width, 35.0);
        assert_eq!(frame.geometry().height, 200.0);
    }

    #[test]
    fn resize_on_one_axis_leaves_the_other() {
        let config = FrameConfig {
            width: 100.0,
            height: 100.0,
            ..FrameConfig::default()
        };
        let mut frame = frame(config, bounds(300.0, 200.0));

        frame.pointer_down(
            Point::new(100.0, 100.0),
            GestureKind::Resize(XY::new(true, false)),
        );
        frame.pointer_move(Point::new(160.0, 180.0), &mut Recorder::default());

        assert_eq!(frame.geometry().width, 160.0);
        assert_eq!(frame.geometry().height, 100.0);
    }

    #[test]
    fn grid_resize_holds_at_the_boundary() {
        let config = FrameConfig {
            width: 200.0,
            height: 100.0,
            grid: Some([20.0, 20.0]),
            grid_buf: 0.5,
            ..FrameConfig::default()
        };
        let mut frame = frame(config, bounds(210.0, 300.0));
        assert_eq!(frame.geometry().width, 200.0);

        frame.pointer_down(Point::new(200.0, 100.0), GestureKind::RESIZE_CORNER);
        let changed = frame.pointer_move(Point::new(215.0, 100.0), &mut Recorder::default());

        assert!(!changed);
        assert_eq!(frame.geometry().width, 200.0);
    }

    #[test]
    fn grid_move_snaps_with_hysteresis() {
        let config = FrameConfig {
            width: 40.0,
            height: 40.0,
            grid: Some([20.0, 20.0]),
            ..FrameConfig::default()
        };
        let mut frame = frame(config, bounds(400.0, 400.0));
        let mut surface = Recorder::default();

        frame.pointer_down(Point::new(0.0, 0.0), GestureKind::Move);
        assert!(!frame.pointer_move(Point::new(14.0, 0.0), &mut surface));
        assert_eq!(frame.geometry().left, 0.0);

        assert!(frame.pointer_move(Point::new(16.0, 0.0), &mut surface));
        assert_eq!(frame.geometry().left, 20.0);
    }

    #[test]
    fn pointer_up_notifies_once() {
        let mut frame = frame(FrameConfig::default(), bounds(300.0, 300.0));
        let mut surface = Recorder::default();

        frame.pointer_up(&mut surface);
        assert!(surface.notified.is_empty());

        frame.pointer_down(Point::new(10.0, 10.0), GestureKind::Move);
        assert!(frame.is_gesture_active());
        frame.pointer_up(&mut surface);
        frame.pointer_up(&mut surface);

        assert!(!frame.is_gesture_active());
        assert_eq!(surface.notified.len(), 1);
    }

    #[test]
    fn move_outside_gesture_is_ignored() {
        let mut frame = frame(FrameConfig::default(), bounds(300.0, 300.0));
        let mut surface = Recorder::default();

        assert!(!frame.pointer_move(Point::new(100.0, 100.0), &mut surface));
        assert!(surface.painted.is_empty());
    }

    #[test]
    fn transition_rule_uses_grid_step() {
        let config = FrameConfig {
            transition: true,
            grid: Some([20.0, 40.0]),
            ..FrameConfig::default()
        };
        let frame = Frame::new(&config).unwrap();
        let rule = frame.transition_rule().unwrap();

        assert_eq!(rule.duration(Axis::X), 0.01);
        assert_eq!(rule.duration(Axis::Y), 0.02);
    }

    #[test]
    fn transition_rule_absent_when_disabled() {
        let frame = Frame::new(&FrameConfig::default()).unwrap();
        assert!(frame.transition_rule().is_none());
    }
}
