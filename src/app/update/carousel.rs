use super::super::state::{App, ThumbnailTween};
use super::Effect;
use crate::carousel::{Direction, ScrollPlan};
use iced::Point;
use std::time::{Duration, Instant};
use tracing::{debug, trace};

impl App {
    pub(super) fn handle_navigate(&mut self, direction: Direction, effects: &mut Vec<Effect>) {
        if let Some(plan) = self.carousel.navigate(direction) {
            Self::push_plan(plan, effects);
        }
    }

    pub(super) fn handle_thumbnail_clicked(&mut self, index: usize, effects: &mut Vec<Effect>) {
        if let Some(plan) = self.carousel.select(index) {
            Self::push_plan(plan, effects);
        }
    }

    fn push_plan(plan: ScrollPlan, effects: &mut Vec<Effect>) {
        effects.push(Effect::ScrollViewer(plan.viewer));
        if let Some(target) = plan.thumbnails {
            effects.push(Effect::AnimateThumbnails(target));
        }
    }

    pub(super) fn handle_viewer_scrolled(&mut self, offset_x: f32, viewport_width: f32) {
        self.viewport.viewer_offset_x = Self::sanitize(offset_x);
        self.viewport.viewer_width = Self::sanitize(viewport_width);
        if let Some(index) = self.carousel.detect_visible(
            self.viewport.viewer_offset_x,
            self.viewport.viewer_width,
            self.config.scrollbar_inset,
        ) {
            debug!(index, "Viewer scroll moved current image");
        }
    }

    pub(super) fn handle_thumbnails_scrolled(&mut self, offset_x: f32) {
        self.viewport.thumbnails_offset_x = Self::sanitize(offset_x);
    }

    pub(super) fn handle_measured(&mut self, thumbnail_width: Option<f32>, slide_width: Option<f32>) {
        self.carousel.measure(thumbnail_width, slide_width);
    }

    pub(super) fn handle_pointer_moved(&mut self, position: Point) {
        self.viewport.pointer_x = position.x;
        if self.carousel.is_dragging() {
            self.carousel.drag_to(position.x);
        }
    }

    pub(super) fn handle_viewer_pressed(&mut self) {
        self.carousel.begin_drag(self.viewport.pointer_x);
    }

    pub(super) fn handle_viewer_released(&mut self, effects: &mut Vec<Effect>) {
        if let Some(direction) = self.carousel.end_drag(self.config.swipe_threshold) {
            debug!(?direction, "Swipe on viewer");
            self.handle_navigate(direction, effects);
        }
    }

    pub(super) fn start_thumbnail_animation(&mut self, target: f32, now: Instant) {
        if self.thumbnail_tween.is_some_and(|tween| tween.target() == target) {
            return;
        }
        let from = self
            .thumbnail_tween
            .map(|tween| tween.sample(now).0)
            .unwrap_or(self.viewport.thumbnails_offset_x);
        self.thumbnail_tween = Some(ThumbnailTween::new(
            from,
            target,
            now,
            Duration::from_millis(self.config.animation_ms),
        ));
    }

    pub(super) fn handle_tick(&mut self, now: Instant, effects: &mut Vec<Effect>) {
        let Some(tween) = self.thumbnail_tween else {
            return;
        };
        let (offset, finished) = tween.sample(now);
        trace!(offset, finished, "Thumbnail animation frame");
        if finished {
            self.thumbnail_tween = None;
        }
        effects.push(Effect::ScrollThumbnails(offset));
    }

    fn sanitize(value: f32) -> f32 {
        if value.is_finite() { value.max(0.0) } else { 0.0 }
    }
}
