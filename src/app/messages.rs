use crate::assets::LoadedImage;
use iced::Point;
use iced::keyboard::{Key, Modifiers};
use std::time::Instant;

/// Messages emitted by the UI.
#[derive(Debug, Clone)]
pub enum Message {
    PreviousImage,
    NextImage,
    ThumbnailClicked(usize),
    ViewerScrolled {
        offset_x: f32,
        viewport_width: f32,
    },
    ThumbnailsScrolled {
        offset_x: f32,
    },
    Measured {
        thumbnail_width: Option<f32>,
        slide_width: Option<f32>,
    },
    ViewerPointerMoved(Point),
    ViewerPressed,
    ViewerReleased,
    ImageLoaded {
        index: usize,
        image: LoadedImage,
    },
    ImageFailed {
        index: usize,
        error: String,
    },
    AddToCart,
    ToggleWishlist,
    CloseCart,
    WindowResized {
        width: f32,
        height: f32,
    },
    KeyPressed {
        key: Key,
        modifiers: Modifiers,
    },
    Tick(Instant),
}
