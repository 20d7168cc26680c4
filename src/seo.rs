//! schema.org `Product` structured data for search engines.

use crate::assets::{product_url, structured_data_image_url};
use crate::product::Product;
use anyhow::{Context, Result};
use serde::Serialize;

const PRICE_CURRENCY: &str = "EUR";
const PRICE_VALID_UNTIL: &str = "2030-12-31";
const IN_STOCK: &str = "http://schema.org/InStock";
const OUT_OF_STOCK: &str = "http://schema.org/OutOfStock";

#[derive(Debug, Serialize)]
struct ProductSchema<'a> {
    #[serde(rename = "@context")]
    context: &'static str,
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'a str,
    image: String,
    description: String,
    make: MakeSchema<'a>,
    offers: OfferSchema,
}

#[derive(Debug, Serialize)]
struct MakeSchema<'a> {
    #[serde(rename = "@type")]
    kind: &'static str,
    name: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct OfferSchema {
    #[serde(rename = "@type")]
    kind: &'static str,
    url: String,
    price_currency: &'static str,
    price: String,
    price_valid_until: &'static str,
    availability: &'static str,
}

/// Build the JSON-LD document describing `product`.
///
/// `offers.availability` follows `in_stock`, so sold-out listings advertise
/// `OutOfStock`. The storefront's web page always sent `InStock`; consumers
/// relying on that constant need to be checked before switching over.
pub fn structured_data(product: &Product, base_url: &str) -> Result<String> {
    let image = product
        .images_path
        .first()
        .map(|path| structured_data_image_url(base_url, path))
        .unwrap_or_default();
    let schema = ProductSchema {
        context: "https://schema.org/",
        kind: "Product",
        name: &product.title,
        image,
        description: format!(
            "{}- {} {}.",
            product.title, product.description, product.description
        ),
        make: MakeSchema {
            kind: "make",
            name: &product.title,
        },
        offers: OfferSchema {
            kind: "Offer",
            url: product_url(base_url, &product.slug),
            price_currency: PRICE_CURRENCY,
            price: product.price.to_string(),
            price_valid_until: PRICE_VALID_UNTIL,
            availability: if product.in_stock { IN_STOCK } else { OUT_OF_STOCK },
        },
    };
    serde_json::to_string_pretty(&schema).context("Failed to serialize structured data")
}
