use super::{Cart, Product};

/// Which modal, if any, the shopper has open.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Selection {
    #[default]
    None,
    /// Product detail modal.
    Product(Product),
    /// Alternate-options modal for an unavailable or compared product.
    Alternates {
        product: Product,
        options: Vec<Product>,
    },
}

/// One shopper's interaction state: their cart and the open modal.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub id: String,
    pub shopper: String,
    pub cart: Cart,
    pub selection: Selection,
}

/// Payload for opening a new session.
#[derive(Debug, Clone)]
pub struct SessionCreate {
    pub shopper: String,
}

/// Changes to the modal selection.
#[derive(Debug, Clone)]
pub enum SelectionPatch {
    Open(Product),
    ShowAlternates { product: Product, options: Vec<Product> },
    Close,
}

impl Session {
    /// The `id` is left empty and assigned by the hosting actor.
    pub fn new(shopper: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            shopper: shopper.into(),
            cart: Cart::new(),
            selection: Selection::None,
        }
    }
}
