mod config;
mod twilio;
mod utils;

use actix_files::Files;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::{web, App, HttpServer};
use std::env;

use config::AppConfig;
use twilio::token::token_handler;
use twilio::voice::voice_webhook_handler;

/// The main entry point for the application.
///
/// Loads the environment file (path from the first command-line argument,
/// default `.env`), builds the shared [`AppConfig`], and serves the token
/// endpoint, the voice webhook and the static softphone page.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let env_file = utils::ensure_dotenv_loaded();
    env_logger::init();

    log::info!("Loading environment from {env_file}");

    let app_config = AppConfig::load().map_err(|e| {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;
    app_config.log_presence();

    let server_port = app_config.server_port;

    let governor_burst = env::var("GOVERNOR_BURST")
        .unwrap_or_else(|_| "5".into())
        .parse()
        .unwrap_or(5);
    let governor_per_sec = env::var("GOVERNOR_PER_SECOND")
        .unwrap_or_else(|_| "2".into())
        .parse()
        .unwrap_or(2);

    let governor_conf = GovernorConfigBuilder::default()
        .burst_size(governor_burst)
        .seconds_per_request(governor_per_sec)
        .finish()
        .ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "Invalid governor config")
        })?;

    println!("🚀 Server starting on http://0.0.0.0:{}", server_port);
    println!("🔗 Test: http://127.0.0.1:{}/token", server_port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app_config.clone()))
            // rate limit only the token endpoint: the webhook must never
            // answer with an error status or Twilio fails the call
            .service(
                web::resource("/token")
                    .wrap(Governor::new(&governor_conf))
                    .route(web::get().to(token_handler)),
            )
            .route("/twilio/voice", web::post().to(voice_webhook_handler))
            // registered last so it never shadows the API routes
            .service(Files::new("/", "./public").index_file("index.html"))
    })
    .bind(("0.0.0.0", server_port))?
    .run()
    .await
}
