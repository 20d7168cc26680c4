use super::super::state::App;
use tracing::info;

impl App {
    pub(super) fn handle_add_to_cart(&mut self) {
        let item = self.product.item_summary();
        self.store.add_cart_item(item);
        self.store.open_cart();
    }

    pub(super) fn handle_toggle_wishlist(&mut self) {
        if self.is_in_wishlist() {
            info!(id = %self.product.id, "Removing product from wishlist");
            self.store.remove_wish_item(&self.product.id);
        } else {
            info!(id = %self.product.id, "Adding product to wishlist");
            self.store.add_wish_item(self.product.item_summary());
        }
    }

    pub(super) fn handle_close_cart(&mut self) {
        self.store.close_cart();
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::messages::Message;
    use super::super::super::state::test_app;

    #[test]
    fn add_to_cart_adds_summary_and_opens_panel() {
        let mut app = test_app(&["front.jpg", "rear.jpg"]);
        let effects = app.reduce(Message::AddToCart);
        assert!(effects.is_empty());
        let cart = app.store.cart_items();
        assert_eq!(cart.len(), 1);
        assert_eq!(cart[0].images_path, "front.jpg");
        assert!(app.store.is_cart_open());

        app.reduce(Message::CloseCart);
        assert!(!app.store.is_cart_open());
    }

    #[test]
    fn wishlist_toggle_flips_membership() {
        let mut app = test_app(&["front.jpg"]);
        assert!(!app.is_in_wishlist());
        app.reduce(Message::ToggleWishlist);
        assert!(app.is_in_wishlist());
        app.reduce(Message::ToggleWishlist);
        assert!(!app.is_in_wishlist());
        assert!(app.store.wishlist_items().is_empty());
    }
}
