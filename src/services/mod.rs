pub mod accounts_service;
pub mod cars_service;
pub mod context;
pub mod drivers_service;
pub mod index_service;
pub mod manufacturers_service;

pub use accounts_service::AccountsService;
pub use cars_service::CarsService;
pub use drivers_service::DriversService;
pub use index_service::IndexService;
pub use manufacturers_service::ManufacturersService;
