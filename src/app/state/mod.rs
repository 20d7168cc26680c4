mod constants;
mod motion;

use super::messages::Message;
use super::update::Effect;
use crate::assets::Gallery;
use crate::carousel::Carousel;
use crate::config::AppConfig;
use crate::product::Product;
use crate::store::ShopStore;
use iced::Task;
use tracing::info;

pub(crate) use constants::*;
pub(crate) use motion::{ThumbnailTween, ViewportState};

/// Product page state.
pub struct App {
    pub(super) product: Product,
    pub(super) config: AppConfig,
    pub(super) store: Box<dyn ShopStore>,
    pub(super) carousel: Carousel,
    pub(super) gallery: Gallery,
    pub(super) viewport: ViewportState,
    pub(super) thumbnail_tween: Option<ThumbnailTween>,
}

impl App {
    pub fn bootstrap(
        product: Product,
        config: AppConfig,
        store: Box<dyn ShopStore>,
    ) -> (App, Task<Message>) {
        let image_count = product.image_count();
        info!(
            id = %product.id,
            images = image_count,
            signed_in = store.auth_token().is_some(),
            base_url = %config.base_url,
            "Opening product page"
        );
        let mut app = App {
            carousel: Carousel::with_frame_widths(
                image_count,
                config.thumbnail_width,
                config.slide_width,
            ),
            gallery: Gallery::new(image_count),
            viewport: ViewportState::default(),
            thumbnail_tween: None,
            product,
            config,
            store,
        };
        let effects = vec![Effect::LoadImages, Effect::Measure];
        let task = Task::batch(effects.into_iter().map(|effect| app.run_effect(effect)));
        (app, task)
    }

    pub(super) fn is_in_wishlist(&self) -> bool {
        self.store.is_in_wishlist(&self.product.id)
    }

    pub fn title(&self) -> String {
        format!("{} - {}", self.product.title, self.product.description)
    }
}

#[cfg(test)]
pub(crate) fn test_app(images: &[&str]) -> App {
    use crate::store::LocalStore;

    let product = crate::product::sample_product(images);
    let config = AppConfig {
        slide_width: 600.0,
        ..AppConfig::default()
    };
    let (mut app, _task) = App::bootstrap(product, config, Box::new(LocalStore::default()));
    app.carousel.measure(Some(96.0), Some(600.0));
    app.viewport.viewer_width = 600.0;
    app
}
