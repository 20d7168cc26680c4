mod actions;
mod carousel;
mod core;
mod images;

/// Describes work that must be performed outside the pure reducer.
#[derive(Debug, Clone, PartialEq)]
pub(in crate::app) enum Effect {
    /// Read the rendered widths of the first thumbnail and slide.
    Measure,
    /// Download every product image.
    LoadImages,
    /// Jump the full-size viewer to an absolute horizontal offset.
    ScrollViewer(f32),
    /// Start a smooth thumbnail strip animation towards an offset.
    AnimateThumbnails(f32),
    /// Jump the thumbnail strip to an absolute horizontal offset.
    ScrollThumbnails(f32),
}
