//! Process configuration, resolved once at startup.
//!
//! Every setting comes from the environment (a `.env` file is loaded by `main`
//! before this runs). Variable names are matched case-insensitively, so
//! `SMTP_USER` and `smtp_user` name the same setting. Unset values fall back
//! to the defaults documented on each field.

use figment::value::{Dict, Map, Value};
use figment::{Figment, Metadata, Profile, Provider, providers::Env};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use url::Url;

use crate::error::DeskError;

/// Display name used in the `From` header of notification emails.
pub const SENDER_DISPLAY_NAME: &str = "BIJAYBIZ Website";

const BUSINESS_MAILBOX: &str = "bijaybizsolutions@gmail.com";

const KEYS: &[&str] = &[
    "smtp_user",
    "smtp_pass",
    "receiver_email",
    "mail_relay_url",
    "mail_timeout_ms",
    "database_url",
    "listen_addr",
    "loglevel",
];

/// Settings parsed as typed values. Every other setting is read verbatim.
const TYPED_KEYS: &[&str] = &["mail_timeout_ms"];

/// `Env` that hands string settings through untouched.
///
/// figment's `Env` parses every value, so an all-digit secret would arrive as
/// an integer, `true` as a bool and `"quoted"` without its quotes.
struct VerbatimEnv(Env);

impl Provider for VerbatimEnv {
    fn metadata(&self) -> Metadata {
        self.0.metadata()
    }

    fn data(&self) -> Result<Map<Profile, Dict>, figment::Error> {
        let dict: Dict = self
            .0
            .iter()
            .map(|(key, raw)| {
                let key = key.as_str().to_string();
                let value = if TYPED_KEYS.contains(&key.as_str()) {
                    raw.parse::<Value>().unwrap_or_else(|never| match never {})
                } else {
                    Value::from(raw)
                };
                (key, value)
            })
            .collect();
        Ok(Profile::Default.collect(dict))
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    /// Mail account identity; also the sender address. Default: the business mailbox.
    #[serde(default = "default_mailbox")]
    pub smtp_user: String,
    /// Mail account secret. Default: empty (notifications will be rejected by the relay).
    #[serde(default = "default_secret")]
    pub smtp_pass: Secret<String>,
    /// Where inquiry notifications go. Default: the business mailbox.
    #[serde(default = "default_mailbox")]
    pub receiver_email: String,
    /// Base URL of the transactional-email relay.
    #[serde(default = "default_relay_url")]
    pub mail_relay_url: Url,
    #[serde(default = "default_mail_timeout_ms")]
    pub mail_timeout_ms: u64,
    #[serde(default = "default_database_url")]
    pub database_url: String,
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
    /// Default tracing filter; `RUST_LOG` takes precedence.
    #[serde(default = "default_loglevel")]
    pub loglevel: String,
}

fn default_mailbox() -> String {
    BUSINESS_MAILBOX.to_string()
}

fn default_secret() -> Secret<String> {
    Secret::new(String::new())
}

fn default_relay_url() -> Url {
    Url::parse("https://api.postmarkapp.com").expect("static relay url is valid")
}

fn default_mail_timeout_ms() -> u64 {
    10_000
}

fn default_database_url() -> String {
    "sqlite:database.sqlite".to_string()
}

fn default_listen_addr() -> String {
    "0.0.0.0:3000".to_string()
}

fn default_loglevel() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            smtp_user: default_mailbox(),
            smtp_pass: default_secret(),
            receiver_email: default_mailbox(),
            mail_relay_url: default_relay_url(),
            mail_timeout_ms: default_mail_timeout_ms(),
            database_url: default_database_url(),
            listen_addr: default_listen_addr(),
            loglevel: default_loglevel(),
        }
    }
}

impl Config {
    /// Environment provider restricted to the settings this service knows about.
    pub fn figment() -> Figment {
        Figment::new().merge(VerbatimEnv(Env::raw().only(KEYS)))
    }

    pub fn from_figment(figment: Figment) -> Result<Self, DeskError> {
        Ok(figment.extract()?)
    }

    pub fn from_env() -> Result<Self, DeskError> {
        Self::from_figment(Self::figment())
    }

    /// The account secret with all whitespace removed.
    ///
    /// App passwords are often pasted in their displayed `abcd efgh ...` grouping.
    pub fn mail_secret(&self) -> String {
        self.smtp_pass
            .expose_secret()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect()
    }

    /// `"Display Name" <identity>` mailbox used as the notification sender.
    pub fn sender_mailbox(&self) -> String {
        format!("\"{}\" <{}>", SENDER_DISPLAY_NAME, self.smtp_user)
    }
}
