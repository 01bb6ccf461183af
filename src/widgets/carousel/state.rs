// SPDX-License-Identifier: MPL-2.0

//! Runtime state of the carousel widget: scroll position, focus lens and
//! snapping.

use super::error::CarouselError;
use super::message::{CarouselMessage, ScrollEvent};
use super::metrics::CarouselMetrics;
use super::model::CarouselModel;
use super::tracker::ScrollTracker;
use std::time::Instant;

/// Whether the first layout pass has reported the widget's bounds yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SetupPhase {
    /// No bounds yet; nothing can be positioned.
    #[default]
    AwaitingLayout,
    /// The initial offset has been applied.
    Ready,
}

/// How a single cell is drawn for the current offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellVisual {
    /// Index of the item in the model.
    pub index: usize,
    /// Uniform scale about the cell's center.
    pub scale: f32,
    /// Drawn above its neighbours.
    pub raised: bool,
}

/// State for the carousel widget.
///
/// This state is owned by the parent component and passed to the widget.
/// Methods that move the strip return the scrollable offset the parent has
/// to apply (see [`snap_to`](super::snap_to)).
#[derive(Debug, Clone, Default)]
pub struct CarouselState {
    model: CarouselModel,
    metrics: Option<CarouselMetrics>,
    /// Offset in content coordinates.
    offset: f32,
    phase: SetupPhase,
    tracker: ScrollTracker,
}

impl CarouselState {
    /// Creates the state for a model. Nothing is laid out until
    /// [`set_bounds`](Self::set_bounds) is called.
    pub fn new(model: CarouselModel) -> Self {
        Self {
            model,
            ..Self::default()
        }
    }

    pub fn model(&self) -> &CarouselModel {
        &self.model
    }

    pub fn metrics(&self) -> Option<&CarouselMetrics> {
        self.metrics.as_ref()
    }

    pub fn phase(&self) -> SetupPhase {
        self.phase
    }

    /// Page shown as current by the page indicator.
    pub fn current_page(&self) -> usize {
        self.model.focused_index()
    }

    pub fn page_count(&self) -> usize {
        self.model.len()
    }

    /// Whether the parent should keep sending [`CarouselMessage::Tick`].
    pub fn is_tracking(&self) -> bool {
        self.tracker.is_tracking()
    }

    /// Applies the bounds allocated to the widget.
    ///
    /// The first call is the end of the first layout pass: the middle item
    /// is focused and centered. Later calls with different bounds recompute
    /// the metrics and re-center the focused item. Returns the scrollable
    /// offset to apply, if any.
    pub fn set_bounds(&mut self, width: f32, height: f32) -> Result<Option<f32>, CarouselError> {
        let metrics = CarouselMetrics::new(width, height)?;

        let first_layout = self.phase == SetupPhase::AwaitingLayout;
        if !first_layout && self.metrics == Some(metrics) {
            return Ok(None);
        }

        self.metrics = Some(metrics);
        self.phase = SetupPhase::Ready;
        self.tracker.reset();

        if self.model.is_empty() {
            return Ok(None);
        }

        let index = if first_layout {
            self.model.len() / 2
        } else {
            self.model.focused_index().min(self.model.len() - 1)
        };

        tracing::debug!(
            index,
            item_size = metrics.item_size(),
            first_layout,
            "centering carousel"
        );

        Ok(self.focus(index))
    }

    /// Reacts to a message emitted by the widget or forwarded by the parent.
    ///
    /// Returns the scrollable offset to apply when the strip has to snap.
    pub fn update(&mut self, message: CarouselMessage) -> Option<f32> {
        match message {
            CarouselMessage::Scrolled { surface_offset } => {
                self.scrolled(surface_offset, Instant::now())
            }

            CarouselMessage::Tick(now) => {
                let release = self.tracker.poll(now)?;
                self.handle(ScrollEvent::DragWillEnd {
                    velocity: release.velocity,
                    proposed_offset: release.proposed_offset,
                })
            }

            CarouselMessage::Step(direction) => {
                self.tracker.reset();
                self.handle(ScrollEvent::DragWillEnd {
                    velocity: direction.velocity(),
                    proposed_offset: self.offset,
                })
            }
        }
    }

    /// Records a position reported by the scrollable at `at`.
    fn scrolled(&mut self, surface_offset: f32, at: Instant) -> Option<f32> {
        let metrics = self.metrics?;
        let offset = metrics.from_surface(surface_offset);
        self.tracker.record(offset, at);
        self.handle(ScrollEvent::PositionChanged { offset })
    }

    /// Reacts to an event of the scroll surface.
    pub fn handle(&mut self, event: ScrollEvent) -> Option<f32> {
        match event {
            ScrollEvent::PositionChanged { offset } => {
                self.offset = offset;
                None
            }
            ScrollEvent::DragWillEnd {
                velocity,
                proposed_offset,
            } => {
                self.end_drag(velocity, proposed_offset)?;
                self.focus(self.model.focused_index())
            }
        }
    }

    /// Picks the item to rest on after a drag and returns the content offset
    /// that centers it.
    ///
    /// A fling moves exactly one item in its direction; a release without
    /// velocity rests on the nearest item. The page indicator follows.
    /// Returns `None` while there is nothing to snap to.
    pub fn end_drag(&mut self, velocity: f32, proposed_offset: f32) -> Option<f32> {
        let metrics = self.metrics?;
        if self.model.is_empty() {
            return None;
        }

        let last = self.model.len() - 1;
        let current = self.model.focused_index().min(last);

        let index = if velocity > 0.0 {
            (current + 1).min(last)
        } else if velocity < 0.0 {
            current.saturating_sub(1)
        } else {
            let nearest = (proposed_offset / metrics.item_size()).round();
            (nearest.max(0.0) as usize).min(last)
        };

        tracing::debug!(velocity, proposed_offset, from = current, to = index, "snapping");

        self.model.set_focused_index(index);
        Some(metrics.centering_offset(index))
    }

    /// Focuses `index`, moves the strip so it is centered and returns the
    /// scrollable offset for that position.
    fn focus(&mut self, index: usize) -> Option<f32> {
        let metrics = self.metrics?;
        let count = self.model.len();

        self.model.set_focused_index(index);

        let surface = metrics.clamped_surface_offset(metrics.centering_offset(index), count);
        self.offset = metrics.from_surface(surface);
        self.tracker.expect_programmatic(self.offset);

        Some(surface)
    }

    /// All cells in draw order: cells in the focus zone come last so they
    /// are painted over their neighbours.
    pub fn cells(&self) -> Vec<CellVisual> {
        let Some(metrics) = self.metrics else {
            return Vec::new();
        };

        let mut cells: Vec<CellVisual> = (0..self.model.len())
            .map(|index| {
                let distance = metrics.distance_from_center(self.offset, index);
                CellVisual {
                    index,
                    scale: metrics.scale_for_distance(distance),
                    raised: metrics.in_focus_zone(distance),
                }
            })
            .collect();

        // Stable, so untouched cells keep their strip order.
        cells.sort_by_key(|cell| cell.raised);
        cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::carousel::message::StepDirection;
    use crate::widgets::carousel::tracker::SETTLE_AFTER;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    const WIDTH: f32 = 300.0;
    // 170 - 40 - 30 = 100
    const HEIGHT: f32 = 170.0;

    fn ready(items: &[&str]) -> CarouselState {
        let mut state = CarouselState::new(CarouselModel::new(items.iter().copied()));
        state.set_bounds(WIDTH, HEIGHT).unwrap();
        state
    }

    fn five() -> CarouselState {
        ready(&["A", "B", "C", "D", "E"])
    }

    fn scale_at(state: &CarouselState, index: usize) -> f32 {
        state
            .cells()
            .into_iter()
            .find(|cell| cell.index == index)
            .map_or(1.0, |cell| cell.scale)
    }

    #[test]
    fn test_new_state_awaits_layout() {
        let state = CarouselState::new(CarouselModel::new(["A", "B"]));

        assert_eq!(state.phase(), SetupPhase::AwaitingLayout);
        assert!(state.metrics().is_none());
        assert!(state.cells().is_empty());
        assert_eq!(scale_at(&state, 0), 1.0);
    }

    #[test]
    fn test_first_layout_centers_middle_item() {
        let mut state = CarouselState::new(CarouselModel::new(["A", "B", "C", "D", "E"]));

        let surface = state.set_bounds(WIDTH, HEIGHT).unwrap();

        assert_eq!(state.phase(), SetupPhase::Ready);
        assert_eq!(state.model().focused_index(), 2);
        assert_eq!(state.current_page(), 2);
        // 2 * 100 - (300 - 100) / 2
        assert_eq!(state.offset, 100.0);
        assert_eq!(surface, Some(150.0));
        assert!((scale_at(&state, 2) - 1.2).abs() < 1e-6);
        assert_eq!(scale_at(&state, 1), 1.0);
        assert_eq!(scale_at(&state, 3), 1.0);
    }

    #[test]
    fn test_middle_index_uses_integer_division() {
        for (count, expected) in [(1, 0), (2, 1), (4, 2), (9, 4)] {
            let items: Vec<String> = (0..count).map(|i| i.to_string()).collect();
            let mut state = CarouselState::new(CarouselModel::new(items));
            state.set_bounds(2_000.0, HEIGHT).unwrap();
            assert_eq!(state.model().focused_index(), expected);
        }
    }

    #[test]
    fn test_insufficient_height_leaves_state_untouched() {
        let mut state = CarouselState::new(CarouselModel::new(["A"]));

        assert!(state.set_bounds(WIDTH, 60.0).is_err());
        assert_eq!(state.phase(), SetupPhase::AwaitingLayout);
    }

    #[test]
    fn test_fling_right_advances_one() {
        let mut state = five();

        assert_eq!(state.end_drag(5.0, 0.0), Some(200.0));
        assert_eq!(state.model().focused_index(), 3);
        assert_eq!(state.current_page(), 3);
    }

    #[test]
    fn test_fling_right_clamps_at_last() {
        let mut state = five();
        state.model.set_focused_index(4);

        assert_eq!(state.end_drag(5.0, 0.0), Some(300.0));
        assert_eq!(state.model().focused_index(), 4);
        state.end_drag(5.0, 0.0);
        assert_eq!(state.model().focused_index(), 4);
    }

    #[test]
    fn test_fling_left_mirrors() {
        let mut state = five();

        state.end_drag(-3.0, 0.0);
        assert_eq!(state.model().focused_index(), 1);
        state.end_drag(-3.0, 0.0);
        assert_eq!(state.model().focused_index(), 0);
        assert_eq!(state.end_drag(-3.0, 0.0), Some(-100.0));
        assert_eq!(state.model().focused_index(), 0);
    }

    #[test]
    fn test_release_without_velocity_rounds_to_nearest() {
        let mut state = five();

        state.end_drag(0.0, 140.0);
        assert_eq!(state.model().focused_index(), 1);
        state.end_drag(0.0, 360.0);
        assert_eq!(state.model().focused_index(), 4);
        state.end_drag(0.0, 250.0);
        assert_eq!(state.model().focused_index(), 3);
    }

    #[test]
    fn test_release_without_velocity_is_clamped() {
        let mut state = five();

        state.end_drag(0.0, -400.0);
        assert_eq!(state.model().focused_index(), 0);
        state.end_drag(0.0, 10_000.0);
        assert_eq!(state.model().focused_index(), 4);
    }

    #[test]
    fn test_empty_model_is_a_no_op() {
        let mut state = ready(&[]);

        assert_eq!(state.phase(), SetupPhase::Ready);
        assert_eq!(state.offset, 0.0);
        assert_eq!(state.end_drag(1.0, 0.0), None);
        assert_eq!(state.update(CarouselMessage::Step(StepDirection::Next)), None);
        assert!(state.cells().is_empty());
        assert_eq!(state.page_count(), 0);
    }

    #[test]
    fn test_position_change_moves_focus_lens() {
        let mut state = five();

        // Cell 3 is now dead center.
        state.handle(ScrollEvent::PositionChanged { offset: 200.0 });
        assert!((scale_at(&state, 3) - 1.2).abs() < 1e-6);
        assert_eq!(scale_at(&state, 2), 1.0);

        // Halfway between cells 2 and 3: both at the threshold.
        state.handle(ScrollEvent::PositionChanged { offset: 150.0 });
        assert_eq!(scale_at(&state, 2), 1.0);
        assert_eq!(scale_at(&state, 3), 1.0);
        // Scrolling alone never changes the focused item.
        assert_eq!(state.model().focused_index(), 2);
    }

    #[test]
    fn test_raised_cells_are_drawn_last() {
        let mut state = five();
        state.handle(ScrollEvent::PositionChanged { offset: 125.0 });

        let cells = state.cells();
        let order: Vec<usize> = cells.iter().map(|cell| cell.index).collect();

        assert_eq!(order, vec![0, 1, 3, 4, 2]);
        assert!(cells[4].raised);
        assert!((cells[4].scale - 1.1).abs() < 1e-6);
        assert!(cells[..4].iter().all(|cell| cell.scale == 1.0 && !cell.raised));
    }

    #[test]
    fn test_step_snaps_and_returns_surface_offset() {
        let mut state = five();

        let surface = state.update(CarouselMessage::Step(StepDirection::Next));

        assert_eq!(state.model().focused_index(), 3);
        assert_eq!(state.offset, 200.0);
        assert_eq!(surface, Some(250.0));
    }

    #[test]
    fn test_scroll_then_settle_snaps() {
        let mut state = five();

        state.update(CarouselMessage::Scrolled {
            surface_offset: 170.0,
        });
        assert_eq!(state.offset, 120.0);
        assert!(state.is_tracking());

        let later = Instant::now() + SETTLE_AFTER + Duration::from_millis(10);
        let surface = state.update(CarouselMessage::Tick(later));

        // A single sample has no velocity: rest on the nearest item.
        assert_eq!(state.model().focused_index(), 1);
        assert_eq!(surface, Some(50.0));
        assert!(!state.is_tracking());
    }

    #[test]
    fn test_swipe_then_settle_advances_one() {
        let mut state = five();
        // 150 is where the first layout put the strip.
        let start = Instant::now();

        for step in 1..=5u16 {
            let at = start + Duration::from_millis(5 * u64::from(step));
            let surface = state.scrolled(150.0 + 10.0 * f32::from(step), at);
            assert_eq!(surface, None);
        }
        assert!(state.is_tracking());
        assert_eq!(state.model().focused_index(), 2);

        // Still moving: no release yet.
        assert_eq!(state.update(CarouselMessage::Tick(start + Duration::from_millis(30))), None);

        let settled = start + Duration::from_millis(25) + SETTLE_AFTER;
        let surface = state.update(CarouselMessage::Tick(settled));

        assert_eq!(state.model().focused_index(), 3);
        assert_eq!(state.current_page(), 3);
        assert_eq!(state.offset, 200.0);
        assert_eq!(surface, Some(250.0));
        assert!(!state.is_tracking());
    }

    #[test]
    fn test_swipe_back_then_settle_goes_back_one() {
        let mut state = five();
        let start = Instant::now();

        state.scrolled(140.0, start);
        state.scrolled(120.0, start + Duration::from_millis(10));

        let surface = state.update(CarouselMessage::Tick(
            start + Duration::from_millis(10) + SETTLE_AFTER,
        ));

        assert_eq!(state.current_page(), 1);
        assert_eq!(surface, Some(50.0));
    }

    #[test]
    fn test_snap_echo_is_not_a_gesture() {
        let mut state = five();
        let surface = state.update(CarouselMessage::Step(StepDirection::Previous));

        state.update(CarouselMessage::Scrolled {
            surface_offset: surface.unwrap(),
        });

        assert!(!state.is_tracking());
        assert_eq!(state.model().focused_index(), 1);
    }

    #[test]
    fn test_resize_recenters_focused_item() {
        let mut state = five();
        state.end_drag(1.0, 0.0);
        assert_eq!(state.model().focused_index(), 3);

        // Same bounds: nothing to do.
        assert_eq!(state.set_bounds(WIDTH, HEIGHT).unwrap(), None);

        // 270 - 70 = 200
        let surface = state.set_bounds(500.0, 270.0).unwrap();
        assert_eq!(state.metrics().map(|m| m.item_size()), Some(200.0));
        assert_eq!(state.model().focused_index(), 3);
        // 3 * 200 - (500 - 200) / 2 = 450, plus the 100 inset
        assert_eq!(surface, Some(550.0));
        assert!((scale_at(&state, 3) - 1.2).abs() < 1e-6);
    }

    #[test]
    fn test_unreachable_center_is_clamped() {
        // Wide widget: the first cell cannot reach the center.
        let mut state = ready(&["A", "B", "C"]);
        state.set_bounds(1_000.0, HEIGHT).unwrap();

        let surface = state.update(CarouselMessage::Step(StepDirection::Previous));

        assert_eq!(state.model().focused_index(), 0);
        assert_eq!(surface, Some(0.0));
        assert_eq!(state.offset, -50.0);
    }
}
