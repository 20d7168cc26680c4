use super::super::super::messages::Message;
use super::super::super::state::{
    App, THUMBNAIL_SCROLL_ID, VIEWER_SCROLL_ID, slide_container_id, thumbnail_container_id,
};
use super::super::Effect;
use crate::assets::{fetch_image, image_url};
use iced::Event;
use iced::Task;
use iced::event;
use iced::keyboard;
use iced::widget::container;
use iced::widget::scrollable::{self, AbsoluteOffset};
use iced::window;
use std::time::Instant;
use tracing::{info, warn};

impl App {
    pub(in crate::app) fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::Measure => {
                if self.carousel.is_empty() {
                    return Task::none();
                }
                let slide_id = slide_container_id(0);
                container::visible_bounds(thumbnail_container_id(0)).then(move |thumbnail| {
                    container::visible_bounds(slide_id.clone()).map(move |slide| {
                        Message::Measured {
                            thumbnail_width: thumbnail.map(|bounds| bounds.width),
                            slide_width: slide.map(|bounds| bounds.width),
                        }
                    })
                })
            }
            Effect::LoadImages => self.load_images(),
            Effect::ScrollViewer(x) => {
                self.viewport.viewer_offset_x = x;
                scrollable::scroll_to(VIEWER_SCROLL_ID.clone(), AbsoluteOffset { x, y: 0.0 })
            }
            Effect::AnimateThumbnails(target) => {
                self.start_thumbnail_animation(target, Instant::now());
                Task::none()
            }
            Effect::ScrollThumbnails(x) => {
                scrollable::scroll_to(THUMBNAIL_SCROLL_ID.clone(), AbsoluteOffset { x, y: 0.0 })
            }
        }
    }

    fn load_images(&mut self) -> Task<Message> {
        if self.product.images_path.is_empty() {
            return Task::none();
        }
        let client = match reqwest::Client::builder().build() {
            Ok(client) => client,
            Err(err) => {
                warn!("Failed to build HTTP client: {err}");
                let error = err.to_string();
                for index in 0..self.product.images_path.len() {
                    self.gallery.failed(index, &error);
                }
                return Task::none();
            }
        };
        info!(
            count = self.product.images_path.len(),
            "Dispatching product image downloads"
        );
        let tasks = self
            .product
            .images_path
            .iter()
            .enumerate()
            .map(|(index, path)| {
                let url = image_url(&self.config.base_url, path);
                let client = client.clone();
                Task::perform(
                    async move {
                        match fetch_image(client, url).await {
                            Ok(image) => Message::ImageLoaded { index, image },
                            Err(err) => Message::ImageFailed {
                                index,
                                error: format!("{err:#}"),
                            },
                        }
                    },
                    |message| message,
                )
            })
            .collect::<Vec<_>>();
        Task::batch(tasks)
    }
}

pub(super) fn runtime_event_to_message(
    event: Event,
    status: event::Status,
    _window_id: window::Id,
) -> Option<Message> {
    if status == event::Status::Captured {
        return None;
    }
    match event {
        Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized {
            width: size.width,
            height: size.height,
        }),
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            Some(Message::KeyPressed { key, modifiers })
        }
        _ => None,
    }
}
