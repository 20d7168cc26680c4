use super::super::state::App;
use crate::assets::LoadedImage;

impl App {
    pub(super) fn handle_image_loaded(&mut self, index: usize, image: LoadedImage) {
        self.gallery.loaded(index, image);
    }

    pub(super) fn handle_image_failed(&mut self, index: usize, error: String) {
        self.gallery.failed(index, &error);
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::messages::Message;
    use super::super::super::state::test_app;

    #[test]
    fn failure_sets_group_error() {
        let mut app = test_app(&["a.jpg", "b.jpg"]);
        assert!(app.gallery.is_loading());
        app.reduce(Message::ImageFailed {
            index: 0,
            error: "HTTP 404".to_string(),
        });
        assert!(!app.gallery.is_loading());
        assert!(app.gallery.has_error());
    }
}
