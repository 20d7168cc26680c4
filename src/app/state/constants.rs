use iced::widget::container::Id as ContainerId;
use iced::widget::scrollable::Id as ScrollId;
use once_cell::sync::Lazy;

pub(crate) static VIEWER_SCROLL_ID: Lazy<ScrollId> = Lazy::new(|| ScrollId::new("viewer-scroll"));
pub(crate) static THUMBNAIL_SCROLL_ID: Lazy<ScrollId> =
    Lazy::new(|| ScrollId::new("thumbnail-scroll"));

pub(crate) const THUMBNAIL_HEIGHT_PX: f32 = 72.0;
pub(crate) const ASIDE_WIDTH_PX: f32 = 340.0;
pub(crate) const CART_PANEL_WIDTH_PX: f32 = 280.0;
pub(crate) const ANIMATION_FRAME_MS: u64 = 16;

pub(crate) const LABEL_IN_STOCK: &str = "Op voorraad";
pub(crate) const LABEL_OUT_OF_STOCK: &str = "Niet op voorraad";
pub(crate) const LABEL_SHIPPING: &str = "Vandaag besteld, morgen in huis";
pub(crate) const LABEL_IMAGE_ERROR: &str = "Error loading image";
pub(crate) const LABEL_LOADING: &str = "Laden...";
pub(crate) const LABEL_PREVIOUS: &str = "Vorige";
pub(crate) const LABEL_NEXT: &str = "Volgende";
pub(crate) const LABEL_ADD_TO_CART: &str = "In Winkelwagen";
pub(crate) const LABEL_WISHLIST: &str = "In wishlist";

/// Per-item layout handle for thumbnail `index`.
pub(crate) fn thumbnail_container_id(index: usize) -> ContainerId {
    ContainerId::new(format!("thumbnail-{index}"))
}

/// Per-item layout handle for slide `index`.
pub(crate) fn slide_container_id(index: usize) -> ContainerId {
    ContainerId::new(format!("slide-{index}"))
}
