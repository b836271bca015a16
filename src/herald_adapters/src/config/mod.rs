pub mod constants;
pub mod settings;

pub use constants::*;
pub use settings::{AppSetting, EmailClientKind, EmailClientSetting, HeraldSetting, PostmarkSetting};
