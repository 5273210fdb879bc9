pub mod identity;
pub mod identity_patch;
pub mod login_form;
pub mod role;
pub mod user_status;
