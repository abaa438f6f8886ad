//! Coordinates the eight crop handles against the region and surface.

use kurbo::{Point, Rect, Size, Vec2};

use super::handles::{
    HANDLE_SIZE, HandleAnchor, HandleSprite, HandleWidget, HorizontalEdge, VerticalEdge,
};
use super::resize::{
    RegionChange, drag_bottom_edge, drag_left_edge, drag_right_edge, drag_top_edge,
    sanitize_degenerate,
};
use crate::input::{DragPhase, HandleEvent};
use crate::region::CropRegion;

/// One coordinated handle: anchor identity, placement widget, capture
/// phase.
#[derive(Debug)]
struct HandleSlot<W> {
    anchor: HandleAnchor,
    widget: W,
    phase: DragPhase,
}

/// Owns the eight handles around a crop region and maps their drags onto
/// region geometry.
///
/// The coordinator repositions every handle whenever the region changes
/// and gates their visibility on the region having positive area. Pointer
/// events go through one generic drag handler: the anchor's edge mapping
/// picks which of the four edge primitives apply, and every result funnels
/// through [`HandleCoordinator::apply_region_change`].
#[derive(Debug)]
pub struct HandleCoordinator<W: HandleWidget = HandleSprite> {
    region: CropRegion,
    surface: Size,
    handles: [HandleSlot<W>; 8],
}

impl HandleCoordinator<HandleSprite> {
    /// Create a coordinator backed by plain [`HandleSprite`] widgets.
    pub fn new(surface: Size, region: CropRegion) -> Self {
        Self::with_factory(surface, region, |_| HandleSprite::new())
    }
}

impl<W: HandleWidget> HandleCoordinator<W> {
    /// Create the eight handles through `factory`, one per anchor, all
    /// hidden.
    pub fn with_factory(
        surface: Size,
        region: CropRegion,
        mut factory: impl FnMut(HandleAnchor) -> W,
    ) -> Self {
        let handles = HandleAnchor::ALL.map(|anchor| {
            let mut widget = factory(anchor);
            widget.set_visible(false);
            HandleSlot {
                anchor,
                widget,
                phase: DragPhase::Idle,
            }
        });
        let mut coordinator = Self {
            region,
            surface,
            handles,
        };
        coordinator.update_handle_positions();
        coordinator
    }

    /// The current crop region.
    pub fn region(&self) -> &CropRegion {
        &self.region
    }

    /// Mutable access for programmatic region changes. Call
    /// [`HandleCoordinator::update_handle_positions`] afterwards.
    pub fn region_mut(&mut self) -> &mut CropRegion {
        &mut self.region
    }

    /// The bounding surface extent used for clamping.
    pub fn surface_size(&self) -> Size {
        self.surface
    }

    /// Refresh the bounding surface extent.
    pub fn set_surface_size(&mut self, surface: Size) {
        self.surface = surface;
    }

    /// The widget backing the handle at `anchor`.
    pub fn handle(&self, anchor: HandleAnchor) -> &W {
        &self.slot(anchor).widget
    }

    /// Capture phase of the handle at `anchor`.
    pub fn phase(&self, anchor: HandleAnchor) -> DragPhase {
        self.slot(anchor).phase
    }

    fn slot(&self, anchor: HandleAnchor) -> &HandleSlot<W> {
        &self.handles[anchor as usize]
    }

    fn slot_mut(&mut self, anchor: HandleAnchor) -> &mut HandleSlot<W> {
        &mut self.handles[anchor as usize]
    }

    fn surface_is_degenerate(&self) -> bool {
        !(self.surface.width > 0.0 && self.surface.height > 0.0)
    }

    /// Reposition all handles from the current region.
    ///
    /// A no-op while the region has no positive area.
    pub fn update_handle_positions(&mut self) {
        if self.region.is_empty() {
            return;
        }
        for slot in &mut self.handles {
            slot.widget.set_position(slot.anchor.position_on(&self.region));
        }
    }

    /// Show or hide all eight handles.
    ///
    /// Showing requires a region with positive area; otherwise every handle
    /// hides regardless of `visible`. There is no partial visibility state.
    pub fn show_handles(&mut self, visible: bool) {
        let shown = visible && !self.region.is_empty();
        for slot in &mut self.handles {
            slot.widget.set_visible(shown);
        }
    }

    /// Route one pointer event to the handle at `anchor`.
    pub fn handle_event(&mut self, anchor: HandleAnchor, event: HandleEvent) {
        match event {
            HandleEvent::Pressed => self.press(anchor),
            HandleEvent::Dragged(delta) => self.drag(anchor, delta),
            HandleEvent::Released => self.release(anchor),
        }
    }

    fn press(&mut self, anchor: HandleAnchor) {
        let slot = self.slot_mut(anchor);
        slot.phase = DragPhase::Capturing;
        slot.widget.capture_pointer();
        log::debug!("handle {:?} captured pointer", anchor);
    }

    /// Release is unconditional so capture can never stay stuck, even when
    /// the drag geometry in between was discarded.
    fn release(&mut self, anchor: HandleAnchor) {
        let slot = self.slot_mut(anchor);
        slot.phase = DragPhase::Idle;
        slot.widget.release_pointer();
        log::debug!("handle {:?} released pointer", anchor);
    }

    fn drag(&mut self, anchor: HandleAnchor, delta: Vec2) {
        if !delta.x.is_finite() || !delta.y.is_finite() {
            log::warn!("ignoring non-finite drag delta on {:?}", anchor);
            return;
        }

        let position = self.slot(anchor).widget.position();
        let mut change = RegionChange::default();

        match anchor.horizontal_edge() {
            Some(HorizontalEdge::Right) => {
                change.width = Some(drag_right_edge(
                    position.x,
                    delta.x,
                    self.surface,
                    self.region.left(),
                ));
            }
            Some(HorizontalEdge::Left) => {
                let (left, width) = drag_left_edge(position.x, delta.x, self.region.width);
                change.left = Some(left);
                change.width = Some(width);
            }
            None => {}
        }

        match anchor.vertical_edge() {
            Some(VerticalEdge::Bottom) => {
                change.height = Some(drag_bottom_edge(
                    position.y,
                    delta.y,
                    self.surface,
                    self.region.top(),
                ));
            }
            Some(VerticalEdge::Top) => {
                let (top, height) = drag_top_edge(position.y, delta.y, self.region.height);
                change.top = Some(top);
                change.height = Some(height);
            }
            None => {}
        }

        self.apply_region_change(change);
    }

    /// Merge `change` over the current region, write the result through the
    /// region mutator, then reposition every handle. Every drag handler
    /// funnels through here.
    pub fn apply_region_change(&mut self, change: RegionChange) {
        let (mut left, mut top, mut width, mut height) = change.resolve(&self.region);
        if self.surface_is_degenerate() {
            (left, top, width, height) = sanitize_degenerate(left, top, width, height);
            log::debug!("degenerate surface {:?}; region floored at zero", self.surface);
        }
        self.region.update(left, top, width, height);
        self.update_handle_positions();
    }

    /// Anchor of the visible handle whose square contains `point`.
    ///
    /// Corners win over edge midpoints when squares overlap. Hidden handles
    /// are never hit.
    pub fn hit_test(&self, point: Point) -> Option<HandleAnchor> {
        let hit = |slot: &&HandleSlot<W>| {
            slot.widget.visible()
                && Rect::from_origin_size(
                    slot.widget.position(),
                    Size::new(HANDLE_SIZE, HANDLE_SIZE),
                )
                .contains(point)
        };
        self.handles
            .iter()
            .filter(|slot| slot.anchor.is_corner())
            .find(hit)
            .or_else(|| {
                self.handles
                    .iter()
                    .filter(|slot| !slot.anchor.is_corner())
                    .find(hit)
            })
            .map(|slot| slot.anchor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coordinator(
        surface_width: f64,
        surface_height: f64,
        left: f64,
        top: f64,
        width: f64,
        height: f64,
    ) -> HandleCoordinator {
        HandleCoordinator::new(
            Size::new(surface_width, surface_height),
            CropRegion::new(Point::new(left, top), width, height),
        )
    }

    fn assert_positions_match_region(coordinator: &HandleCoordinator) {
        for anchor in HandleAnchor::ALL {
            assert_eq!(
                coordinator.handle(anchor).position(),
                anchor.position_on(coordinator.region()),
                "stale position for {anchor:?}"
            );
        }
    }

    #[test]
    fn test_construction_positions_handles() {
        let c = coordinator(300.0, 200.0, 10.0, 20.0, 100.0, 50.0);
        assert_positions_match_region(&c);
        for anchor in HandleAnchor::ALL {
            assert!(!c.handle(anchor).visible());
        }
    }

    #[test]
    fn test_top_left_drag_scenario() {
        let mut c = coordinator(300.0, 300.0, 50.0, 50.0, 100.0, 100.0);
        assert_eq!(
            c.handle(HandleAnchor::TopLeft).position(),
            Point::new(50.0, 50.0)
        );

        c.handle_event(HandleAnchor::TopLeft, HandleEvent::Dragged(Vec2::new(10.0, 10.0)));

        let region = c.region();
        assert!((region.left() - 65.0).abs() < f64::EPSILON);
        assert!((region.top() - 65.0).abs() < f64::EPSILON);
        assert!((region.width - 90.0).abs() < f64::EPSILON);
        assert!((region.height - 90.0).abs() < f64::EPSILON);
        assert_positions_match_region(&c);
    }

    #[test]
    fn test_right_middle_drag_beyond_surface() {
        let mut c = coordinator(300.0, 200.0, 40.0, 40.0, 250.0, 100.0);
        assert_eq!(
            c.handle(HandleAnchor::RightMiddle).position(),
            Point::new(290.0, 90.0)
        );

        c.handle_event(
            HandleAnchor::RightMiddle,
            HandleEvent::Dragged(Vec2::new(50.0, 0.0)),
        );

        let region = c.region();
        assert!((region.width - 260.0).abs() < f64::EPSILON);
        assert!((region.left() - 40.0).abs() < f64::EPSILON);
        assert!((region.top() - 40.0).abs() < f64::EPSILON);
        assert!((region.height - 100.0).abs() < f64::EPSILON);
        assert_positions_match_region(&c);
    }

    #[test]
    fn test_bottom_right_inward_drag_goes_negative() {
        // The right/bottom clamps cap only the upper bound; a hard inward
        // drag drives the extent negative and the region degenerates.
        let mut c = coordinator(300.0, 200.0, 10.0, 10.0, 100.0, 80.0);
        assert_eq!(
            c.handle(HandleAnchor::BottomRight).position(),
            Point::new(110.0, 90.0)
        );

        c.handle_event(
            HandleAnchor::BottomRight,
            HandleEvent::Dragged(Vec2::new(-200.0, -200.0)),
        );

        let region = c.region();
        assert!((region.width + 100.0).abs() < f64::EPSILON);
        assert!((region.height + 115.0).abs() < f64::EPSILON);
        assert!(region.is_empty());
        // Repositioning is suppressed for a degenerate region.
        assert_eq!(
            c.handle(HandleAnchor::BottomRight).position(),
            Point::new(110.0, 90.0)
        );
    }

    #[test]
    fn test_bottom_drag_clamps_to_surface() {
        let mut c = coordinator(300.0, 200.0, 10.0, 10.0, 100.0, 80.0);
        c.handle_event(
            HandleAnchor::BottomMiddle,
            HandleEvent::Dragged(Vec2::new(0.0, 500.0)),
        );

        // Drag stops at the bottom surface edge: height = 195 - 10 + 5.
        let region = c.region();
        assert!((region.height - 190.0).abs() < f64::EPSILON);
        assert_positions_match_region(&c);
    }

    #[test]
    fn test_top_left_drag_clamps_at_origin() {
        let mut c = coordinator(300.0, 300.0, 50.0, 50.0, 100.0, 100.0);
        c.handle_event(
            HandleAnchor::TopLeft,
            HandleEvent::Dragged(Vec2::new(-500.0, -500.0)),
        );

        let region = c.region();
        assert!(region.left().abs() < f64::EPSILON);
        assert!(region.top().abs() < f64::EPSILON);
        assert!((region.width - 155.0).abs() < f64::EPSILON);
        assert!((region.height - 155.0).abs() < f64::EPSILON);
        assert_positions_match_region(&c);
    }

    #[test]
    fn test_visibility_gating() {
        let mut c = coordinator(300.0, 200.0, 10.0, 10.0, 0.0, 50.0);
        c.show_handles(true);
        for anchor in HandleAnchor::ALL {
            assert!(!c.handle(anchor).visible());
        }

        c.region_mut().update(10.0, 10.0, 50.0, 50.0);
        c.update_handle_positions();
        c.show_handles(true);
        for anchor in HandleAnchor::ALL {
            assert!(c.handle(anchor).visible());
        }

        c.show_handles(false);
        for anchor in HandleAnchor::ALL {
            assert!(!c.handle(anchor).visible());
        }
    }

    #[test]
    fn test_apply_region_change_merges_partially() {
        let mut c = coordinator(300.0, 200.0, 10.0, 20.0, 100.0, 50.0);
        c.apply_region_change(RegionChange {
            width: Some(80.0),
            ..RegionChange::default()
        });

        let region = c.region();
        assert!((region.left() - 10.0).abs() < f64::EPSILON);
        assert!((region.top() - 20.0).abs() < f64::EPSILON);
        assert!((region.width - 80.0).abs() < f64::EPSILON);
        assert!((region.height - 50.0).abs() < f64::EPSILON);
        assert_positions_match_region(&c);
    }

    #[test]
    fn test_degenerate_surface_floors_region_at_zero() {
        // A 0x0 surface with a drag still arriving.
        let mut c = coordinator(0.0, 0.0, 10.0, 10.0, 50.0, 50.0);
        c.handle_event(
            HandleAnchor::BottomMiddle,
            HandleEvent::Dragged(Vec2::new(0.0, 10.0)),
        );

        let region = c.region();
        assert!(region.left().is_finite() && region.left() >= 0.0);
        assert!(region.top().is_finite() && region.top() >= 0.0);
        assert!(region.width.is_finite() && region.width >= 0.0);
        assert!(region.height.is_finite() && region.height >= 0.0);
        assert!(region.height.abs() < f64::EPSILON);
    }

    #[test]
    fn test_non_finite_delta_is_ignored() {
        let mut c = coordinator(300.0, 200.0, 10.0, 20.0, 100.0, 50.0);
        let before = *c.region();

        c.handle_event(
            HandleAnchor::BottomRight,
            HandleEvent::Dragged(Vec2::new(f64::NAN, 10.0)),
        );
        c.handle_event(
            HandleAnchor::BottomRight,
            HandleEvent::Dragged(Vec2::new(10.0, f64::INFINITY)),
        );

        assert_eq!(*c.region(), before);
        assert_positions_match_region(&c);
    }

    #[test]
    fn test_capture_press_release_cycle() {
        let mut c = coordinator(300.0, 200.0, 10.0, 20.0, 100.0, 50.0);
        let anchor = HandleAnchor::TopMiddle;

        assert_eq!(c.phase(anchor), DragPhase::Idle);

        c.handle_event(anchor, HandleEvent::Pressed);
        assert_eq!(c.phase(anchor), DragPhase::Capturing);
        assert!(c.handle(anchor).is_captured());

        c.handle_event(anchor, HandleEvent::Dragged(Vec2::new(0.0, -5.0)));
        assert_eq!(c.phase(anchor), DragPhase::Capturing);

        c.handle_event(anchor, HandleEvent::Released);
        assert_eq!(c.phase(anchor), DragPhase::Idle);
        assert!(!c.handle(anchor).is_captured());
    }

    #[test]
    fn test_release_follows_discarded_drag() {
        let mut c = coordinator(300.0, 200.0, 10.0, 20.0, 100.0, 50.0);
        let anchor = HandleAnchor::RightMiddle;

        c.handle_event(anchor, HandleEvent::Pressed);
        c.handle_event(anchor, HandleEvent::Dragged(Vec2::new(f64::NAN, f64::NAN)));
        c.handle_event(anchor, HandleEvent::Released);

        assert_eq!(c.phase(anchor), DragPhase::Idle);
        assert!(!c.handle(anchor).is_captured());
    }

    #[test]
    fn test_hit_test_resolves_anchors() {
        let mut c = coordinator(300.0, 200.0, 50.0, 50.0, 100.0, 100.0);
        c.show_handles(true);

        assert_eq!(c.hit_test(Point::new(52.0, 52.0)), Some(HandleAnchor::TopLeft));
        assert_eq!(
            c.hit_test(Point::new(101.0, 51.0)),
            Some(HandleAnchor::TopMiddle)
        );
        assert_eq!(c.hit_test(Point::new(200.0, 200.0)), None);
    }

    #[test]
    fn test_hit_test_prefers_corners() {
        // A narrow region overlaps the TopMiddle square with TopLeft's.
        let mut c = coordinator(300.0, 200.0, 50.0, 50.0, 8.0, 40.0);
        c.show_handles(true);

        assert_eq!(c.hit_test(Point::new(55.0, 51.0)), Some(HandleAnchor::TopLeft));
    }

    #[test]
    fn test_hit_test_ignores_hidden_handles() {
        let c = coordinator(300.0, 200.0, 50.0, 50.0, 100.0, 100.0);
        assert_eq!(c.hit_test(Point::new(52.0, 52.0)), None);
    }
}
