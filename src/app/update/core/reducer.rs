use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::Effect;
use crate::carousel::Direction;

impl App {
    pub(in crate::app) fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        match message {
            Message::PreviousImage => self.handle_navigate(Direction::Previous, &mut effects),
            Message::NextImage => self.handle_navigate(Direction::Next, &mut effects),
            Message::ThumbnailClicked(index) => {
                self.handle_thumbnail_clicked(index, &mut effects);
            }
            Message::ViewerScrolled {
                offset_x,
                viewport_width,
            } => self.handle_viewer_scrolled(offset_x, viewport_width),
            Message::ThumbnailsScrolled { offset_x } => self.handle_thumbnails_scrolled(offset_x),
            Message::Measured {
                thumbnail_width,
                slide_width,
            } => self.handle_measured(thumbnail_width, slide_width),
            Message::ViewerPointerMoved(position) => self.handle_pointer_moved(position),
            Message::ViewerPressed => self.handle_viewer_pressed(),
            Message::ViewerReleased => self.handle_viewer_released(&mut effects),
            Message::ImageLoaded { index, image } => self.handle_image_loaded(index, image),
            Message::ImageFailed { index, error } => self.handle_image_failed(index, error),
            Message::AddToCart => self.handle_add_to_cart(),
            Message::ToggleWishlist => self.handle_toggle_wishlist(),
            Message::CloseCart => self.handle_close_cart(),
            Message::WindowResized { width, height } => {
                tracing::debug!(width, height, "Window resized; re-measuring carousel");
                effects.push(Effect::Measure);
            }
            Message::KeyPressed { key, modifiers } => {
                if let Some(shortcut) = self.shortcut_message_for_key(key, modifiers) {
                    effects.extend(self.reduce(shortcut));
                }
            }
            Message::Tick(now) => self.handle_tick(now, &mut effects),
        }

        effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::test_app;

    #[test]
    fn resize_requests_measurement() {
        let mut app = test_app(&["a.jpg"]);
        let effects = app.reduce(Message::WindowResized {
            width: 800.0,
            height: 600.0,
        });
        assert_eq!(effects, vec![Effect::Measure]);
    }

    #[test]
    fn measurement_message_updates_widths() {
        let mut app = test_app(&["a.jpg", "b.jpg"]);
        app.reduce(Message::Measured {
            thumbnail_width: Some(120.0),
            slide_width: Some(720.0),
        });
        assert_eq!(app.carousel.item_width(), 124.0);
        assert_eq!(app.carousel.slide_width(), 720.0);
    }

    #[test]
    fn clipped_measurement_after_resize_keeps_slide_width() {
        let mut app = test_app(&["a.jpg", "b.jpg", "c.jpg"]);
        app.reduce(Message::WindowResized {
            width: 484.0,
            height: 700.0,
        });
        app.reduce(Message::Measured {
            thumbnail_width: Some(96.0),
            slide_width: Some(460.0),
        });
        assert_eq!(app.carousel.slide_width(), 600.0);
        assert_eq!(
            app.reduce(Message::NextImage),
            vec![Effect::ScrollViewer(600.0), Effect::AnimateThumbnails(100.0)]
        );
    }

    #[test]
    fn empty_product_ignores_navigation() {
        let mut app = test_app(&[]);
        assert!(app.reduce(Message::NextImage).is_empty());
        assert!(app.reduce(Message::ThumbnailClicked(0)).is_empty());
    }
}
