// Sub-modules organized by entity
pub mod api;
pub mod car;
pub mod driver;
pub mod manufacturer;

pub use api::*;
pub use car::*;
pub use driver::*;
pub use manufacturer::*;
