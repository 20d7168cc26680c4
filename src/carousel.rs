//! Image carousel synchronisation.
//!
//! Three surfaces show the same position: the full-size viewer, the thumbnail
//! strip, and the `n/len` counter. `Carousel` owns the index and turns every
//! navigation into a [`ScrollPlan`] whose offsets are a pure function of that
//! index. The viewer's own scroll events are only used to follow the user
//! when they scroll or drag the viewer directly.

use tracing::{debug, trace};

/// Horizontal gap between two thumbnail frames.
pub const THUMBNAIL_GAP_PX: f32 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// Scroll offsets the view should apply after a carousel transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollPlan {
    /// Animated target for the thumbnail strip, if it should move.
    pub thumbnails: Option<f32>,
    /// Immediate offset for the full-size viewer.
    pub viewer: f32,
}

/// Horizontal extent of one slide, relative to the viewer's left edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideRect {
    pub left: f32,
    pub right: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Drag {
    start_x: f32,
    current_x: f32,
}

#[derive(Debug, Clone)]
pub struct Carousel {
    len: usize,
    current_index: usize,
    item_width: f32,
    slide_width: f32,
    /// Laid-out frame widths; measurements below these are clipped reads.
    min_thumbnail_width: f32,
    min_slide_width: f32,
    drag: Option<Drag>,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Carousel {
            len,
            current_index: 0,
            item_width: 0.0,
            slide_width: 0.0,
            min_thumbnail_width: 0.0,
            min_slide_width: 0.0,
            drag: None,
        }
    }

    /// Carousel whose frames are laid out at fixed widths. The widths are
    /// used until a measurement confirms or widens them.
    pub fn with_frame_widths(len: usize, thumbnail_width: f32, slide_width: f32) -> Self {
        let thumbnail_width = Self::frame_width(thumbnail_width);
        let slide_width = Self::frame_width(slide_width);
        Carousel {
            item_width: thumbnail_width + THUMBNAIL_GAP_PX,
            slide_width,
            min_thumbnail_width: thumbnail_width,
            min_slide_width: slide_width,
            ..Carousel::new(len)
        }
    }

    fn frame_width(width: f32) -> f32 {
        if width.is_finite() { width.max(0.0) } else { 0.0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Width of one thumbnail frame including the gap to its neighbour.
    pub fn item_width(&self) -> f32 {
        self.item_width
    }

    pub fn slide_width(&self) -> f32 {
        self.slide_width
    }

    /// Store measured widths of the first thumbnail and the first slide.
    ///
    /// Measurements are visible bounds, so a frame clipped by an enclosing
    /// scrollable reads narrower than it is laid out. Readings below the
    /// frame width are dropped, as are missing ones; the previous width stays.
    pub fn measure(&mut self, thumbnail_width: Option<f32>, slide_width: Option<f32>) {
        match thumbnail_width.filter(|w| w.is_finite()) {
            Some(width) if width >= self.min_thumbnail_width => {
                self.item_width = width.max(0.0) + THUMBNAIL_GAP_PX;
            }
            Some(width) => debug!(width, "Ignoring clipped thumbnail measurement"),
            None => {}
        }
        match slide_width.filter(|w| w.is_finite()) {
            Some(width) if width >= self.min_slide_width => {
                self.slide_width = width.max(0.0);
            }
            Some(width) => debug!(width, "Ignoring clipped slide measurement"),
            None => {}
        }
        debug!(
            item_width = self.item_width,
            slide_width = self.slide_width,
            "Measured carousel"
        );
    }

    /// Step one image back or forward and return where both strips go.
    pub fn navigate(&mut self, direction: Direction) -> Option<ScrollPlan> {
        if self.is_empty() {
            return None;
        }
        let last = self.len - 1;
        self.current_index = match direction {
            Direction::Previous => self.current_index.saturating_sub(1),
            Direction::Next => (self.current_index + 1).min(last),
        };
        debug!(?direction, index = self.current_index, "Carousel navigated");
        Some(ScrollPlan {
            thumbnails: Some(self.item_width * self.current_index as f32),
            viewer: self.viewer_offset(),
        })
    }

    /// Jump straight to `index` (thumbnail click).
    pub fn select(&mut self, index: usize) -> Option<ScrollPlan> {
        if self.is_empty() {
            return None;
        }
        self.current_index = index.min(self.len - 1);
        debug!(index = self.current_index, "Carousel selected");
        Some(ScrollPlan {
            thumbnails: None,
            viewer: self.viewer_offset(),
        })
    }

    pub fn viewer_offset(&self) -> f32 {
        self.slide_width * self.current_index as f32
    }

    /// Slide extents for a viewer scrolled to `scroll_x`.
    pub fn slide_rects(&self, scroll_x: f32) -> Vec<SlideRect> {
        (0..self.len)
            .map(|idx| {
                let left = idx as f32 * self.slide_width - scroll_x;
                SlideRect {
                    left,
                    right: left + self.slide_width,
                }
            })
            .collect()
    }

    /// Follow a viewer scroll event: the first fully visible slide becomes
    /// current. Returns the new index when it changed.
    pub fn detect_visible(
        &mut self,
        scroll_x: f32,
        viewport_width: f32,
        scrollbar_inset: f32,
    ) -> Option<usize> {
        if self.slide_width <= 0.0 || !scroll_x.is_finite() {
            return None;
        }
        let rects = self.slide_rects(scroll_x);
        let visible = first_visible(&rects, viewport_width, scrollbar_inset)?;
        trace!(scroll_x, visible, "Viewer scroll detection");
        if visible == self.current_index {
            return None;
        }
        self.current_index = visible;
        Some(visible)
    }

    pub fn begin_drag(&mut self, x: f32) {
        self.drag = Some(Drag {
            start_x: x,
            current_x: x,
        });
    }

    pub fn drag_to(&mut self, x: f32) {
        if let Some(drag) = self.drag.as_mut() {
            drag.current_x = x;
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Finish a drag. A swipe wider than `threshold` maps to a navigation
    /// direction: swiping left reveals the next image.
    pub fn end_drag(&mut self, threshold: f32) -> Option<Direction> {
        let drag = self.drag.take()?;
        let delta = drag.current_x - drag.start_x;
        if delta.abs() < threshold.max(0.0) || delta == 0.0 {
            return None;
        }
        Some(if delta < 0.0 {
            Direction::Next
        } else {
            Direction::Previous
        })
    }

    pub fn counter_label(&self) -> String {
        if self.is_empty() {
            return "0/0".to_string();
        }
        format!("{}/{}", self.current_index + 1, self.len)
    }
}

/// Index of the first rect lying horizontally inside the viewport.
///
/// A rect qualifies when its left edge is at or right of 0 and its right edge,
/// less the vertical scrollbar inset, does not pass `viewport_width`.
pub fn first_visible(
    rects: &[SlideRect],
    viewport_width: f32,
    scrollbar_inset: f32,
) -> Option<usize> {
    rects
        .iter()
        .position(|rect| rect.left >= 0.0 && rect.right - scrollbar_inset <= viewport_width)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measured(len: usize) -> Carousel {
        let mut carousel = Carousel::new(len);
        carousel.measure(Some(96.0), Some(600.0));
        carousel
    }

    #[test]
    fn measurement_adds_thumbnail_gap() {
        let carousel = measured(3);
        assert_eq!(carousel.item_width(), 100.0);
        assert_eq!(carousel.slide_width(), 600.0);
    }

    #[test]
    fn missing_measurements_degrade_to_zero() {
        let mut carousel = Carousel::new(3);
        carousel.measure(None, None);
        assert_eq!(carousel.item_width(), 0.0);
        assert_eq!(carousel.slide_width(), 0.0);
        let plan = carousel.navigate(Direction::Next).expect("plan");
        assert_eq!(plan.viewer, 0.0);
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn remeasure_keeps_width_when_target_missing() {
        let mut carousel = measured(3);
        carousel.measure(None, Some(800.0));
        assert_eq!(carousel.item_width(), 100.0);
        assert_eq!(carousel.slide_width(), 800.0);
    }

    #[test]
    fn frame_widths_apply_before_measurement() {
        let mut carousel = Carousel::with_frame_widths(3, 96.0, 640.0);
        assert_eq!(carousel.item_width(), 100.0);
        let plan = carousel.navigate(Direction::Next).expect("plan");
        assert_eq!(plan.viewer, 640.0);
    }

    #[test]
    fn clipped_measurement_keeps_frame_width() {
        let mut carousel = Carousel::with_frame_widths(3, 96.0, 640.0);
        carousel.measure(Some(30.0), Some(460.0));
        assert_eq!(carousel.item_width(), 100.0);
        assert_eq!(carousel.slide_width(), 640.0);

        carousel.measure(Some(96.0), Some(40.0));
        assert_eq!(carousel.slide_width(), 640.0);
        carousel.select(2);
        assert_eq!(carousel.viewer_offset(), 1280.0);
    }

    #[test]
    fn wider_measurement_is_accepted() {
        let mut carousel = Carousel::with_frame_widths(2, 96.0, 640.0);
        carousel.measure(Some(110.0), Some(700.0));
        assert_eq!(carousel.item_width(), 114.0);
        assert_eq!(carousel.slide_width(), 700.0);
    }

    #[test]
    fn select_sets_index_and_viewer_offset() {
        for idx in 0..5 {
            let mut carousel = measured(5);
            let plan = carousel.select(idx).expect("plan");
            assert_eq!(carousel.current_index(), idx);
            assert_eq!(plan.viewer, idx as f32 * 600.0);
            assert_eq!(plan.thumbnails, None);
        }
    }

    #[test]
    fn select_out_of_range_is_clamped() {
        let mut carousel = measured(3);
        carousel.select(10);
        assert_eq!(carousel.current_index(), 2);
    }

    #[test]
    fn navigation_steps_by_one_without_detection() {
        let mut carousel = measured(6);
        let mut previous = carousel.current_index();
        for _ in 0..4 {
            let plan = carousel.navigate(Direction::Next).expect("plan");
            assert_eq!(carousel.current_index(), previous + 1);
            assert_eq!(plan.viewer, 600.0 * carousel.current_index() as f32);
            assert_eq!(plan.thumbnails, Some(100.0 * carousel.current_index() as f32));
            previous = carousel.current_index();
        }
        for _ in 0..3 {
            let plan = carousel.navigate(Direction::Previous).expect("plan");
            assert_eq!(carousel.current_index(), previous - 1);
            assert_eq!(plan.viewer, 600.0 * carousel.current_index() as f32);
            previous = carousel.current_index();
        }
    }

    #[test]
    fn navigation_is_clamped_at_both_ends() {
        let mut carousel = measured(2);
        carousel.navigate(Direction::Previous);
        assert_eq!(carousel.current_index(), 0);
        carousel.navigate(Direction::Next);
        carousel.navigate(Direction::Next);
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn empty_carousel_has_no_plans() {
        let mut carousel = Carousel::new(0);
        assert!(carousel.navigate(Direction::Next).is_none());
        assert!(carousel.select(0).is_none());
        assert_eq!(carousel.counter_label(), "0/0");
    }

    #[test]
    fn first_visible_picks_middle_slide() {
        // [a, b, c] where only b lies fully inside a 600px viewport.
        let rects = [
            SlideRect { left: -600.0, right: 0.0 },
            SlideRect { left: 0.0, right: 600.0 },
            SlideRect { left: 600.0, right: 1200.0 },
        ];
        assert_eq!(first_visible(&rects, 600.0, 0.0), Some(1));
    }

    #[test]
    fn first_visible_stops_at_first_match() {
        let rects = [
            SlideRect { left: 0.0, right: 100.0 },
            SlideRect { left: 100.0, right: 200.0 },
        ];
        assert_eq!(first_visible(&rects, 600.0, 0.0), Some(0));
    }

    #[test]
    fn scrollbar_inset_widens_the_visible_area() {
        let rects = [SlideRect { left: 10.0, right: 615.0 }];
        assert_eq!(first_visible(&rects, 600.0, 0.0), None);
        assert_eq!(first_visible(&rects, 600.0, 15.0), Some(0));
    }

    #[test]
    fn viewer_scroll_updates_index() {
        let mut carousel = measured(3);
        assert_eq!(carousel.detect_visible(600.0, 600.0, 0.0), Some(1));
        assert_eq!(carousel.current_index(), 1);
        assert_eq!(carousel.counter_label(), "2/3");
    }

    #[test]
    fn partial_scroll_keeps_index() {
        let mut carousel = measured(3);
        carousel.select(1);
        assert_eq!(carousel.detect_visible(900.0, 600.0, 0.0), None);
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn detection_is_noop_before_measurement() {
        let mut carousel = Carousel::new(3);
        carousel.select(2);
        assert_eq!(carousel.detect_visible(0.0, 600.0, 0.0), None);
        assert_eq!(carousel.current_index(), 2);
    }

    #[test]
    fn swipe_left_moves_to_next() {
        let mut carousel = measured(3);
        carousel.begin_drag(400.0);
        carousel.drag_to(250.0);
        assert!(carousel.is_dragging());
        assert_eq!(carousel.end_drag(50.0), Some(Direction::Next));
        assert!(!carousel.is_dragging());
    }

    #[test]
    fn short_drag_is_ignored() {
        let mut carousel = measured(3);
        carousel.begin_drag(400.0);
        carousel.drag_to(420.0);
        assert_eq!(carousel.end_drag(50.0), None);
        assert_eq!(carousel.end_drag(50.0), None);
    }

    #[test]
    fn swipe_right_moves_to_previous() {
        let mut carousel = measured(3);
        carousel.begin_drag(100.0);
        carousel.drag_to(300.0);
        assert_eq!(carousel.end_drag(50.0), Some(Direction::Previous));
    }
}
