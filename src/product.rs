//! Product record handed to the page by the shop backend.
//!
//! The JSON shape mirrors what the backend serves (`_id`, camelCase keys).
//! The page never mutates a product; it only projects it into the reduced
//! [`ItemSummary`] that the cart and wishlist stores keep.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    pub product_info: String,
    #[serde(default)]
    pub images_path: Vec<String>,
    #[serde(default)]
    pub in_stock: bool,
    pub slug: String,
    /// Odometer reading in kilometres, when the listing has one.
    #[serde(default)]
    pub mileage: Option<f64>,
}

/// Reduced projection of a [`Product`] stored in the cart and wishlist.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSummary {
    pub id: String,
    pub title: String,
    pub price: f64,
    /// Path of the first product image, empty when the product has none.
    pub images_path: String,
    pub slug: String,
}

impl Product {
    pub fn item_summary(&self) -> ItemSummary {
        ItemSummary {
            id: self.id.clone(),
            title: self.title.clone(),
            price: self.price,
            images_path: self.images_path.first().cloned().unwrap_or_default(),
            slug: self.slug.clone(),
        }
    }

    pub fn image_count(&self) -> usize {
        self.images_path.len()
    }
}

/// Load a product record from a JSON file on disk.
pub fn load_product(path: &Path) -> Result<Product> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read product file {}", path.display()))?;
    let product: Product = serde_json::from_str(&data)
        .with_context(|| format!("Invalid product JSON in {}", path.display()))?;
    info!(
        id = %product.id,
        slug = %product.slug,
        images = product.images_path.len(),
        in_stock = product.in_stock,
        "Loaded product"
    );
    Ok(product)
}

#[cfg(test)]
pub(crate) fn sample_product(images: &[&str]) -> Product {
    Product {
        id: "64f1c0ffee".to_string(),
        title: "Volvo V60".to_string(),
        description: "T6 Recharge".to_string(),
        price: 1234.0,
        details: "Trekhaak, panoramadak".to_string(),
        product_info: "Eerste eigenaar".to_string(),
        images_path: images.iter().map(|s| s.to_string()).collect(),
        in_stock: true,
        slug: "volvo-v60-t6".to_string(),
        mileage: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn summary_takes_first_image() {
        let product = sample_product(&["front.jpg", "rear.jpg"]);
        let summary = product.item_summary();
        assert_eq!(summary.id, product.id);
        assert_eq!(summary.images_path, "front.jpg");
        assert_eq!(summary.slug, "volvo-v60-t6");
    }

    #[test]
    fn summary_without_images_has_empty_path() {
        let product = sample_product(&[]);
        assert_eq!(product.item_summary().images_path, "");
    }

    #[test]
    fn parses_backend_json_shape() {
        let json = r#"{
            "_id": "abc",
            "title": "Golf",
            "description": "GTI",
            "price": 19999,
            "details": "x",
            "productInfo": "y",
            "imagesPath": ["a.jpg", "b.jpg"],
            "inStock": false,
            "slug": "golf-gti",
            "mileage": 120500
        }"#;
        let product: Product = serde_json::from_str(json).expect("valid product json");
        assert_eq!(product.id, "abc");
        assert_eq!(product.product_info, "y");
        assert_eq!(product.images_path.len(), 2);
        assert!(!product.in_stock);
        assert_eq!(product.mileage, Some(120500.0));
    }

    #[test]
    fn load_product_reports_missing_file() {
        let err = load_product(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read product file"));
    }

    #[test]
    fn load_product_from_disk() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        let product = sample_product(&["a.jpg"]);
        write!(file, "{}", serde_json::to_string(&product).expect("serialize")).expect("write");
        let loaded = load_product(file.path()).expect("load product");
        assert_eq!(loaded, product);
    }
}
