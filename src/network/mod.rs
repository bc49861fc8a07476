pub mod error_handler;
pub mod request;

pub use error_handler::ErrorHandler;
pub use request::ApiResponse;
