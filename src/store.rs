//! Seam to the shop's client-side state store.
//!
//! Cart and wishlist rules belong to the store, not the page. The page only
//! reads the wishlist sequence and the auth token, and issues the four
//! requests below. [`LocalStore`] is a plain in-memory store that appends
//! and removes without further rules.

use crate::product::ItemSummary;
use tracing::{debug, info};

pub trait ShopStore {
    fn auth_token(&self) -> Option<&str>;
    fn wishlist_items(&self) -> &[ItemSummary];
    fn add_cart_item(&mut self, item: ItemSummary);
    fn open_cart(&mut self);
    fn add_wish_item(&mut self, item: ItemSummary);
    fn remove_wish_item(&mut self, id: &str);

    /// Lines currently in the cart, for the cart panel.
    fn cart_items(&self) -> &[ItemSummary];
    fn is_cart_open(&self) -> bool;
    fn close_cart(&mut self);

    fn is_in_wishlist(&self, id: &str) -> bool {
        self.wishlist_items().iter().any(|item| item.id == id)
    }
}

#[derive(Debug, Default, Clone)]
pub struct LocalStore {
    token: Option<String>,
    cart: Vec<ItemSummary>,
    cart_open: bool,
    wishlist: Vec<ItemSummary>,
}

impl LocalStore {
    pub fn new(token: Option<String>) -> Self {
        LocalStore {
            token,
            ..LocalStore::default()
        }
    }
}

impl ShopStore for LocalStore {
    fn auth_token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    fn wishlist_items(&self) -> &[ItemSummary] {
        &self.wishlist
    }

    fn add_cart_item(&mut self, item: ItemSummary) {
        info!(id = %item.id, "Added item to cart");
        self.cart.push(item);
    }

    fn open_cart(&mut self) {
        debug!(lines = self.cart.len(), "Cart panel opened");
        self.cart_open = true;
    }

    fn add_wish_item(&mut self, item: ItemSummary) {
        info!(id = %item.id, "Added item to wishlist");
        self.wishlist.push(item);
    }

    fn remove_wish_item(&mut self, id: &str) {
        let before = self.wishlist.len();
        self.wishlist.retain(|item| item.id != id);
        info!(%id, removed = before - self.wishlist.len(), "Removed item from wishlist");
    }

    fn cart_items(&self) -> &[ItemSummary] {
        &self.cart
    }

    fn is_cart_open(&self) -> bool {
        self.cart_open
    }

    fn close_cart(&mut self) {
        self.cart_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::sample_product;

    #[test]
    fn membership_follows_add_and_remove() {
        let mut store = LocalStore::default();
        let item = sample_product(&["a.jpg"]).item_summary();
        assert!(!store.is_in_wishlist(&item.id));

        store.add_wish_item(item.clone());
        assert!(store.is_in_wishlist(&item.id));

        store.remove_wish_item(&item.id);
        assert!(!store.is_in_wishlist(&item.id));
    }

    #[test]
    fn cart_opens_after_add() {
        let mut store = LocalStore::new(Some("token".to_string()));
        store.add_cart_item(sample_product(&[]).item_summary());
        store.open_cart();
        assert_eq!(store.cart_items().len(), 1);
        assert!(store.is_cart_open());
        assert_eq!(store.auth_token(), Some("token"));

        store.close_cart();
        assert!(!store.is_cart_open());
    }
}
