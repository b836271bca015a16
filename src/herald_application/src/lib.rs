pub mod command;
pub mod use_cases;

pub use command::{CommandHandler, CommandResult};
pub use use_cases::register_user::{
    RegisterUserCommand, RegisterUserCommandHandler, RegisterUserError, WELCOME_BODY,
    WELCOME_SUBJECT,
};
