use std::time::Duration;

use config::{
    Config, ConfigBuilder, ConfigError, Environment, File, FileFormat, builder::DefaultState,
};
use secrecy::Secret;
use serde::Deserialize;

use super::constants::{DEFAULT_SETTINGS_PATH, env, prod};

#[derive(Debug, Clone, Deserialize)]
pub struct HeraldSetting {
    pub app: AppSetting,
    pub email_client: EmailClientSetting,
    pub postmark: PostmarkSetting,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppSetting {
    pub address: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailClientKind {
    Postmark,
    Mock,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmailClientSetting {
    pub kind: EmailClientKind,
    pub base_url: String,
    pub sender: String,
    pub timeout_in_millis: u64,
}

impl EmailClientSetting {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_in_millis)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostmarkSetting {
    pub auth_token: Secret<String>,
}

impl HeraldSetting {
    /// Load settings from the settings file and the environment.
    ///
    /// Sources, lowest priority first: built-in defaults, the JSON file named
    /// by `HERALD_SETTINGS` (default `settings.json`, optional), `HERALD__*`
    /// variables such as `HERALD__EMAIL_CLIENT__SENDER`, and finally
    /// `POSTMARK_AUTH_TOKEN` for the provider credential. A `.env` file is
    /// read first if present.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let path = std::env::var(env::SETTINGS_PATH_ENV_VAR)
            .unwrap_or_else(|_| DEFAULT_SETTINGS_PATH.to_string());

        let settings = Self::from_sources(
            &path,
            Environment::with_prefix(env::SETTINGS_ENV_PREFIX),
            std::env::var(env::POSTMARK_AUTH_TOKEN_ENV_VAR).ok(),
        )?;

        tracing::debug!(%path, "Settings loaded");
        Ok(settings)
    }

    /// Layer the settings file, the `HERALD__*` environment and the auth token
    /// override on top of the defaults.
    fn from_sources(
        path: &str,
        environment: Environment,
        auth_token: Option<String>,
    ) -> Result<Self, ConfigError> {
        Self::defaults()?
            .add_source(File::new(path, FileFormat::Json).required(false))
            .add_source(environment.separator("__").try_parsing(true))
            .set_override_option("postmark.auth_token", auth_token)?
            .build()?
            .try_deserialize()
    }

    /// Build settings from defaults overlaid with a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Self::defaults()?
            .add_source(File::from_str(json, FileFormat::Json))
            .build()?
            .try_deserialize()
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("app.address", prod::APP_ADDRESS)?
            .set_default("email_client.kind", "postmark")?
            .set_default("email_client.base_url", prod::email_client::BASE_URL)?
            .set_default("email_client.sender", prod::email_client::SENDER)?
            .set_default(
                "email_client.timeout_in_millis",
                prod::email_client::TIMEOUT.as_millis() as u64,
            )?
            .set_default("postmark.auth_token", "")
    }
}
