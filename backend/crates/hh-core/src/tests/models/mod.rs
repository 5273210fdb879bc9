mod identity;
mod login_form;
mod role;
mod user_status;
