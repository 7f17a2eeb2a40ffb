use actix_web::{web, HttpResponse, Responder, Result as ActixResult};
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::config::AppConfig;

/// Twilio credentials as found in the environment.
///
/// Fields are optional on purpose: a partially configured server still
/// starts, and the token endpoint reports every missing variable by name
/// instead of failing on the first one.
#[derive(Clone)]
pub struct TwilioConfig {
    pub account_sid: Option<String>,
    pub api_key_sid: Option<String>,
    pub api_key_secret: Option<String>,
}

impl TwilioConfig {
    /// Reads `TWILIO_ACCOUNT_SID`, `TWILIO_API_KEY_SID` and
    /// `TWILIO_API_KEY_SECRET`. Blank values count as missing.
    pub fn load() -> Self {
        crate::utils::ensure_dotenv_loaded();
        let read = |key: &str| {
            std::env::var(key)
                .ok()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };
        Self {
            account_sid: read("TWILIO_ACCOUNT_SID"),
            api_key_sid: read("TWILIO_API_KEY_SID"),
            api_key_secret: read("TWILIO_API_KEY_SECRET"),
        }
    }

    /// Names of every required variable that is absent, in declaration order.
    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.account_sid.is_none() {
            missing.push("TWILIO_ACCOUNT_SID");
        }
        if self.api_key_sid.is_none() {
            missing.push("TWILIO_API_KEY_SID");
        }
        if self.api_key_secret.is_none() {
            missing.push("TWILIO_API_KEY_SECRET");
        }
        missing
    }
}

/// Voice grant payload per Twilio's access-token format. Inbound only; no
/// outgoing application is granted.
#[derive(Debug, Serialize, Deserialize)]
struct VoiceGrant {
    incoming: IncomingGrant,
}

#[derive(Debug, Serialize, Deserialize)]
struct IncomingGrant {
    allow: bool,
}

#[derive(Debug, Serialize, Deserialize)]
struct Grants {
    identity: String,
    voice: VoiceGrant,
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    jti: String,
    iss: String,
    sub: String,
    iat: usize,
    exp: usize,
    grants: Grants,
}

#[derive(Serialize)]
pub struct TokenResponse {
    pub identity: String,
    pub token: String,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

// Disambiguates tokens minted within the same millisecond, so repeated
// requests never yield an identical jti.
static JTI_SEQ: AtomicU64 = AtomicU64::new(0);

fn next_jti(api_key_sid: &str) -> String {
    let seq = JTI_SEQ.fetch_add(1, Ordering::Relaxed);
    format!("{}-{}-{}", api_key_sid, Utc::now().timestamp_millis(), seq)
}

/// `GET /token` — mints a short-lived voice-capable access token for the
/// configured browser client identity.
///
/// Responds 200 with `{"identity", "token"}`, or 500 with a JSON error that
/// enumerates every missing credential by name.
pub async fn token_handler(config: web::Data<AppConfig>) -> ActixResult<impl Responder> {
    let missing = config.twilio.missing();
    if !missing.is_empty() {
        log::error!("Missing env vars for /token: {}", missing.join(", "));
        return Ok(HttpResponse::InternalServerError().json(ErrorResponse {
            error: format!("Missing environment variables: {}", missing.join(", ")),
            details: None,
        }));
    }

    // missing() was empty, so the defaults below are unreachable
    let account_sid = config.twilio.account_sid.clone().unwrap_or_default();
    let api_key_sid = config.twilio.api_key_sid.clone().unwrap_or_default();
    let api_key_secret = config.twilio.api_key_secret.clone().unwrap_or_default();
    let identity = config.resolved_client_name().to_string();

    let now = Utc::now();
    let expiration = now + Duration::seconds(config.token_expiry);

    let claims = Claims {
        jti: next_jti(&api_key_sid),
        iss: api_key_sid,
        sub: account_sid,
        iat: now.timestamp() as usize,
        exp: expiration.timestamp() as usize,
        grants: Grants {
            identity: identity.clone(),
            voice: VoiceGrant {
                incoming: IncomingGrant { allow: true },
            },
        },
    };

    let mut header = Header::new(Algorithm::HS256);
    header.typ = Some("JWT".to_string());
    header.cty = Some("twilio-fpa;v=1".to_string());

    match encode(&header, &claims, &EncodingKey::from_secret(api_key_secret.as_ref())) {
        Ok(token) => Ok(HttpResponse::Ok().json(TokenResponse { identity, token })),
        Err(e) => {
            log::error!("Error creating token for identity {}: {}", identity, e);
            Ok(HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Internal server error".to_string(),
                details: Some(e.to_string()),
            }))
        }
    }
}
