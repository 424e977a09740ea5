pub mod auth;
pub mod request_tracking;

pub use auth::login_required;
pub use request_tracking::{REQUEST_ID_HEADER, RequestId, request_tracking_middleware};
