//! Products and the ways they can be paid for.
//!
//! [`model`] holds the [`Product`] data and [`pricing`] derives its [`PaymentOptions`].

pub mod model;
pub mod pricing;

pub use model::Product;
pub use model::ProductId;
pub use pricing::PaymentOptions;
pub use pricing::payment_options;
pub use pricing::select_next_price;
