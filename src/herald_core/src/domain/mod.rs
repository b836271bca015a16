pub mod email;
pub mod email_message;
pub mod user;
