use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::{web, App};

use tiny_twilio_voice::config::AppConfig;
use tiny_twilio_voice::twilio::token::{token_handler, TwilioConfig};
use tiny_twilio_voice::twilio::voice::voice_webhook_handler;

pub fn test_config(client_name: Option<&str>) -> AppConfig {
    AppConfig {
        server_port: 3000,
        twilio: TwilioConfig {
            account_sid: Some("ACxxx".into()),
            api_key_sid: Some("SKxxx".into()),
            api_key_secret: Some("secret123".into()),
        },
        client_name: client_name.map(Into::into),
        token_expiry: 3600,
    }
}

pub fn test_config_with_twilio(twilio: TwilioConfig) -> AppConfig {
    AppConfig {
        twilio,
        ..test_config(Some("alice"))
    }
}

/// Builds the same route table as `main`, minus the rate limiter and the
/// static file service.
pub async fn setup_test_app(
    config: AppConfig,
) -> impl actix_web::dev::Service<
    actix_http::Request,
    Response = actix_web::dev::ServiceResponse,
    Error = actix_web::Error,
> {
    actix_web::test::init_service(
        App::new()
            .app_data(web::Data::new(config))
            .route("/token", web::get().to(token_handler))
            .route("/twilio/voice", web::post().to(voice_webhook_handler)),
    )
    .await
}

/// Same route table as `main`, with the rate limiter scoped to `/token`
/// exactly as the server wires it. `burst` is the governor burst size;
/// replenishment is slow enough that a test always exhausts the burst.
pub async fn setup_rate_limited_app(
    config: AppConfig,
    burst: u32,
) -> impl actix_web::dev::Service<
    actix_http::Request,
    Response = actix_web::dev::ServiceResponse,
    Error = actix_web::Error,
> {
    let governor_conf = GovernorConfigBuilder::default()
        .burst_size(burst)
        .seconds_per_request(3600)
        .finish()
        .expect("governor config");

    actix_web::test::init_service(
        App::new()
            .app_data(web::Data::new(config))
            .service(
                web::resource("/token")
                    .wrap(Governor::new(&governor_conf))
                    .route(web::get().to(token_handler)),
            )
            .route("/twilio/voice", web::post().to(voice_webhook_handler)),
    )
    .await
}
