pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::identity::Identity;
pub use models::identity_patch::IdentityPatch;
pub use models::login_form::{LoginForm, is_valid_email};
pub use models::role::Role;
pub use models::user_status::UserStatus;

#[cfg(test)]
mod tests;
