//! # Herald - notification port for command handlers
//!
//! This is a facade crate that re-exports all public APIs from the herald components.
//! Command handlers depend on the [`EmailSender`] port; the concrete sender is chosen
//! once, at process start, and passed in through the handler's constructor.
//!
//! ## Structure
//!
//! - **Core domain types**: `Email`, `EmailMessage`, `User`
//! - **Ports**: `EmailSender`, `UserStore`
//! - **Commands**: `CommandHandler`, `RegisterUserCommandHandler`
//! - **Adapters**: `PostmarkEmailSender`, `MockEmailSender`, `HashMapUserStore`
//! - **Service**: `HeraldService` - HTTP entry point and standalone server

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use herald_core::*;
}

pub use herald_core::{Email, EmailError, EmailMessage, User};

// ============================================================================
// Ports
// ============================================================================

pub use herald_core::{EmailSender, EmailSenderError, UserStore, UserStoreError};

// ============================================================================
// Commands (Application Layer)
// ============================================================================

/// Application commands and handlers
pub mod commands {
    pub use herald_application::*;
}

pub use herald_application::{
    CommandHandler, CommandResult, RegisterUserCommand, RegisterUserCommandHandler,
    RegisterUserError,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// HTTP route handlers
    pub mod http {
        pub use herald_adapters::http::*;
    }

    /// Persistence implementations
    pub mod persistence {
        pub use herald_adapters::persistence::*;
    }

    /// Email sender implementations
    pub mod email {
        pub use herald_adapters::email::*;
    }

    /// Configuration
    pub mod config {
        pub use herald_adapters::config::*;
    }
}

pub use herald_adapters::{
    email::{MockEmailSender, PostmarkEmailSender},
    persistence::HashMapUserStore,
};

// ============================================================================
// Herald Service (Main Entry Point)
// ============================================================================

pub use herald_service::{
    BuildEmailSenderError, HeraldService, build_email_sender, build_postmark_email_sender,
};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use axum;
pub use http;
pub use tokio;
