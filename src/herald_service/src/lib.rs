mod helpers;
mod herald_service;
mod tracing;

pub use helpers::{BuildEmailSenderError, build_email_sender, build_postmark_email_sender};
pub use herald_service::HeraldService;

// Re-export commonly used types
pub use herald_core::{Email, EmailSender, UserStore};
