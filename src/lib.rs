//! # tiny_twilio_voice
//!
//! `tiny_twilio_voice` is a small Actix-Web backend for a browser-based
//! softphone built on [Twilio Voice](https://www.twilio.com/voice): it mints
//! short-lived voice access tokens and answers Twilio's inbound-call webhook
//! with TwiML that rings the browser client.
//!
//! ## ✅ Features
//!
//! - 📞 Generate secure Twilio JWT access tokens with an inbound-only voice grant
//! - 📄 Answer `POST /twilio/voice` with a `<Dial><Client>` routing document
//! - 🔐 Rate limiting with `actix-governor`
//! - 🧪 Environment file support (`.env`, `.env.production`, etc.)
//!
//! ## 🔧 Configuration
//!
//! Start the app like this:
//!
//! ```bash
//! cargo run -- .env.production
//! ```
//!
//! ### Required `.env` values
//!
//! - `TWILIO_ACCOUNT_SID`
//! - `TWILIO_API_KEY_SID`
//! - `TWILIO_API_KEY_SECRET`
//!
//! ### Optional
//!
//! - `CLIENT_NAME` (default: `browser`)
//! - `SERVER_PORT=3000`
//! - `TOKEN_EXPIRY=3600` (seconds)
//! - `GOVERNOR_BURST=5`
//! - `GOVERNOR_PER_SECOND=2`
//!
//! A partially configured server still starts; `GET /token` then responds
//! 500 with every missing variable named, so a misconfiguration is fully
//! diagnosable from one response.
//!
//! ## 📚 Modules
//!
//! - [`config`](crate::config) — process-wide configuration
//! - [`twilio`](crate::twilio) — token generation, TwiML, voice webhook
//! - [`utils`](crate::utils) — environment loader

pub mod config;
pub mod twilio;
pub mod utils;
