pub mod api;
pub mod registration;

pub use api::{ApiResponse, ErrorDetail};
pub use registration::{InviteAndEmail, RegistrationData, RegistrationForm};
