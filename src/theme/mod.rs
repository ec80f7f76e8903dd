//! Theme system providing colors, typography, and layout dimensions.
//!
//! Three fixed product themes are bundled (`product-a`, `product-b`,
//! `product-c`). The active theme lives in a gpui global; the
//! [`ThemeController`] owns which product theme is active, persists the
//! choice, and applies it to a configurable scope.

mod schema;
pub use schema::*;

mod deserializers;

mod ext;
pub use ext::*;

mod kinds;
pub use kinds::*;

mod scope;
pub use scope::*;

mod controller;
pub use controller::*;
