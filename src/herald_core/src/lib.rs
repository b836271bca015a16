pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    email::{Email, EmailError},
    email_message::EmailMessage,
    user::User,
};

pub use ports::{
    repositories::{UserStore, UserStoreError},
    services::{EmailSender, EmailSenderError},
};
