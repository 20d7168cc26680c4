mod messages;
mod state;
mod update;
mod view;

pub use state::App;

use crate::config::AppConfig;
use crate::product::Product;
use crate::store::ShopStore;
use crate::theme::Theme;
use iced::{Size, window};

/// Open the product page window.
pub fn run_app(product: Product, config: AppConfig, store: Box<dyn ShopStore>) -> iced::Result {
    let window_settings = window::Settings {
        size: Size::new(config.window_width, config.window_height),
        ..window::Settings::default()
    };
    let theme = Theme::from(config.theme);

    iced::application(App::title, App::update, App::view)
        .window(window_settings)
        .subscription(App::subscription)
        .theme(move |_: &App| iced::Theme::from(theme))
        .run_with(move || App::bootstrap(product, config, store))
}
