pub mod product;
pub mod cart;
pub mod session;

pub use product::*;
pub use cart::*;
pub use session::*;
