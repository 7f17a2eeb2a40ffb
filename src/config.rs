// --- File: src/config.rs ---

use std::env;

use crate::twilio::token::TwilioConfig;

/// Process-wide configuration, loaded once at startup and shared read-only
/// with every handler via `web::Data`.
#[derive(Clone)]
pub struct AppConfig {
    pub server_port: u16,
    pub twilio: TwilioConfig,
    /// Identity the browser softphone registers under. `None` when
    /// `CLIENT_NAME` is unset or blank; handlers then fall back to
    /// [`DEFAULT_CLIENT_NAME`].
    pub client_name: Option<String>,
    /// Token validity window in seconds.
    pub token_expiry: i64,
}

/// Fallback identity used by both the token issuer and the voice webhook
/// when no `CLIENT_NAME` is configured. Both endpoints must agree on it,
/// otherwise the webhook dials a client that never registered.
pub const DEFAULT_CLIENT_NAME: &str = "browser";

impl AppConfig {
    /// Loads configuration from environment variables.
    ///
    /// Missing Twilio credentials are deliberately not fatal here: the
    /// `/token` handler reports every absent variable by name per request,
    /// which is only possible if startup tolerates partial configuration.
    pub fn load() -> Result<Self, String> {
        crate::utils::ensure_dotenv_loaded();

        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse::<u16>()
            .map_err(|_| "Invalid SERVER_PORT".to_string())?;

        let token_expiry = env::var("TOKEN_EXPIRY")
            .ok()
            .and_then(|s| s.parse::<i64>().ok())
            .unwrap_or(3600);

        let client_name = env::var("CLIENT_NAME")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Ok(AppConfig {
            server_port,
            twilio: TwilioConfig::load(),
            client_name,
            token_expiry,
        })
    }

    /// The identity both handlers resolve to: configured name or the fixed
    /// fallback.
    pub fn resolved_client_name(&self) -> &str {
        self.client_name.as_deref().unwrap_or(DEFAULT_CLIENT_NAME)
    }

    /// Logs which configuration values are present. Booleans only; secret
    /// values never reach the log.
    pub fn log_presence(&self) {
        log::info!(
            "Env presence: TWILIO_ACCOUNT_SID={} TWILIO_API_KEY_SID={} TWILIO_API_KEY_SECRET={} CLIENT_NAME={}",
            self.twilio.account_sid.is_some(),
            self.twilio.api_key_sid.is_some(),
            self.twilio.api_key_secret.is_some(),
            self.client_name.is_some(),
        );
    }
}
