use tracing::debug;

use super::actions::{CartAction, CartActionResult, CartSummary};
use crate::actor_framework::Entity;
use crate::domain::{Cart, Selection, SelectionPatch, Session, SessionCreate};

fn summary(cart: &Cart) -> CartSummary {
    CartSummary {
        total: cart.total(),
        item_count: cart.item_count(),
    }
}

impl Entity for Session {
    type Id = String;
    type CreatePayload = SessionCreate;
    type Patch = SelectionPatch;
    type Action = CartAction;
    type ActionResult = CartActionResult;

    fn id(&self) -> &String { &self.id }

    /// Opens a session with an empty cart and no modal.
    fn from_create(id: String, payload: SessionCreate) -> Result<Self, String> {
        let mut session = Session::new(payload.shopper);
        session.id = id;
        Ok(session)
    }

    fn on_update(&mut self, patch: SelectionPatch) -> Result<(), String> {
        self.selection = match patch {
            SelectionPatch::Open(product) => Selection::Product(product),
            SelectionPatch::ShowAlternates { product, options } => Selection::Alternates { product, options },
            SelectionPatch::Close => Selection::None,
        };
        Ok(())
    }

    /// Applies a cart operation. Every operation is total; unknown ids are no-ops.
    fn handle_action(&mut self, action: CartAction) -> Result<CartActionResult, String> {
        let cart = &mut self.cart;
        let result = match action {
            CartAction::Add(product) => {
                cart.add(&product);
                CartActionResult::Add(summary(cart))
            }
            CartAction::SetQuantity { product_id, quantity } => {
                cart.set_quantity(&product_id, quantity);
                CartActionResult::SetQuantity(summary(cart))
            }
            CartAction::Remove(product_id) => {
                cart.remove(&product_id);
                CartActionResult::Remove(summary(cart))
            }
            CartAction::Increment(product_id) => {
                cart.increment(&product_id);
                CartActionResult::Increment(summary(cart))
            }
            CartAction::Decrement(product_id) => {
                cart.decrement(&product_id);
                CartActionResult::Decrement(summary(cart))
            }
            CartAction::Clear => {
                cart.clear();
                CartActionResult::Clear(summary(cart))
            }
            CartAction::Total => CartActionResult::Total(cart.total()),
            CartAction::ItemCount => CartActionResult::ItemCount(cart.item_count()),
            CartAction::Entries => CartActionResult::Entries(cart.entries().to_vec()),
        };
        debug!(session_id = %self.id, item_count = self.cart.item_count(), "Cart action applied");
        Ok(result)
    }
}
