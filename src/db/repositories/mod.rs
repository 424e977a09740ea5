pub mod cars;
pub mod drivers;
pub mod manufacturers;

pub use cars::CarRepo;
pub use drivers::DriverRepo;
pub use manufacturers::ManufacturerRepo;
