use actix_web::{web, HttpResponse, Responder};

use crate::config::AppConfig;
use crate::twilio::twiml::{Client, Dial, VoiceResponse};

/// `POST /twilio/voice` — Twilio's inbound-call webhook. The form-encoded
/// payload carries call metadata we do not branch on, so it is ignored.
///
/// Always answers 200 `text/xml`: a webhook that returns an error status or
/// malformed XML makes Twilio fail the call outright, so any internal
/// problem is logged and answered with an inert empty document instead.
pub async fn voice_webhook_handler(config: web::Data<AppConfig>) -> impl Responder {
    let client_name = config.resolved_client_name();

    let xml = match build_dial_document(client_name) {
        Ok(xml) => xml,
        Err(e) => {
            log::error!("Error building TwiML for /twilio/voice: {}", e);
            VoiceResponse::empty().to_xml()
        }
    };

    HttpResponse::Ok().content_type("text/xml").body(xml)
}

fn build_dial_document(client_name: &str) -> Result<String, String> {
    if client_name.is_empty() {
        // An empty <Client> would make Twilio reject the document.
        return Err("empty client identity".to_string());
    }
    Ok(VoiceResponse::empty()
        .add(&Dial {
            client: Client {
                name: client_name.to_string(),
            },
        })
        .to_xml())
}
