//! Asset addressing and product image loading.
//!
//! Image URLs are built from the configured API base URL; nothing here reads
//! the process environment. Downloads are single attempts: a failed image
//! is reported once and stays failed.

use anyhow::{Context, Result};
use iced::widget::image::Handle;
use image::imageops::FilterType;
use tracing::{debug, warn};

const IMAGE_PREFIX: &str = "assets/imgs";
const ASSET_PREFIX: &str = "assets";
const SHOP_PREFIX: &str = "shop";

/// Longest edge of the decoded thumbnail variant.
pub const THUMBNAIL_EDGE_PX: u32 = 256;

fn join(base_url: &str, prefix: &str, tail: &str) -> String {
    format!(
        "{}/{}/{}",
        base_url.trim_end_matches('/'),
        prefix,
        tail.trim_start_matches('/')
    )
}

/// URL of a product image as served by the asset API.
pub fn image_url(base_url: &str, image_path: &str) -> String {
    join(base_url, IMAGE_PREFIX, image_path)
}

/// Image URL advertised in structured data.
pub fn structured_data_image_url(base_url: &str, image_path: &str) -> String {
    join(base_url, ASSET_PREFIX, image_path)
}

pub fn product_url(base_url: &str, slug: &str) -> String {
    join(base_url, SHOP_PREFIX, slug)
}

/// Decoded image, ready for the viewer and the thumbnail strip.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub full: Handle,
    pub thumbnail: Handle,
    pub width: u32,
    pub height: u32,
}

/// Download and decode one image.
pub async fn fetch_image(client: reqwest::Client, url: String) -> Result<LoadedImage> {
    debug!(%url, "Fetching product image");
    let bytes = client
        .get(&url)
        .send()
        .await
        .with_context(|| format!("Request for {url} failed"))?
        .error_for_status()
        .with_context(|| format!("Asset server rejected {url}"))?
        .bytes()
        .await
        .with_context(|| format!("Failed to read body of {url}"))?;
    decode_image(&bytes).with_context(|| format!("Failed to decode {url}"))
}

pub fn decode_image(bytes: &[u8]) -> Result<LoadedImage> {
    let decoded = image::load_from_memory(bytes).context("Unsupported or corrupt image data")?;
    let (width, height) = (decoded.width(), decoded.height());
    let thumb = decoded
        .resize(THUMBNAIL_EDGE_PX, THUMBNAIL_EDGE_PX, FilterType::Triangle)
        .to_rgba8();
    let thumbnail = Handle::from_rgba(thumb.width(), thumb.height(), thumb.into_raw());
    let full = Handle::from_rgba(width, height, decoded.to_rgba8().into_raw());
    Ok(LoadedImage {
        full,
        thumbnail,
        width,
        height,
    })
}

#[derive(Debug, Clone)]
pub enum ImageSlot {
    Pending,
    Loaded(LoadedImage),
    Failed,
}

/// Load state of the product's images.
///
/// Loading and error flags are shared by the whole thumbnail group: the first
/// report of any image ends the loading phase, and any failure marks the
/// group as failed.
#[derive(Debug, Clone)]
pub struct Gallery {
    slots: Vec<ImageSlot>,
    is_loading: bool,
    has_error: bool,
}

impl Gallery {
    pub fn new(len: usize) -> Self {
        Gallery {
            slots: vec![ImageSlot::Pending; len],
            is_loading: len > 0,
            has_error: false,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn has_error(&self) -> bool {
        self.has_error
    }

    pub fn slot(&self, index: usize) -> Option<&ImageSlot> {
        self.slots.get(index)
    }

    pub fn loaded(&mut self, index: usize, image: LoadedImage) {
        let Some(slot) = self.slots.get_mut(index) else {
            warn!(index, "Image load reported for unknown slot");
            return;
        };
        debug!(index, width = image.width, height = image.height, "Image loaded");
        *slot = ImageSlot::Loaded(image);
        self.is_loading = false;
    }

    pub fn failed(&mut self, index: usize, error: &str) {
        let Some(slot) = self.slots.get_mut(index) else {
            warn!(index, "Image failure reported for unknown slot");
            return;
        };
        warn!(index, "Image failed to load: {error}");
        *slot = ImageSlot::Failed;
        self.is_loading = false;
        self.has_error = true;
    }
}
