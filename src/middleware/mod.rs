pub mod auth;
pub mod preflight;

pub use auth::AuthSubject;
pub use preflight::preflight_middleware;
