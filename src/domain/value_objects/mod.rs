//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod ids;
mod locale;

pub use ids::{ProductId, StoreId};
pub use locale::Locale;
