//! Webhook handlers.

#[cfg(test)]
mod tests;

use actix_web::{http::header::ContentType, rt, web, HttpResponse, Result as ActixResult};
use approbot_core::use_cases::slack::HandleSlackEventInterface;
use approbot_slack_interface::types::{SlackEnvelope, SlackEvent};
use shaku::HasComponent;
use tracing::{debug, error, info};

use crate::{metrics::record_approval_summary, normalizer::normalize_body, server::AppContext};

/// Run the event handling outside of the request.
///
/// Slack expects an answer within 3 seconds, approvals can take longer.
#[tracing::instrument(skip(ctx, event))]
pub(crate) async fn process_event(
    ctx: web::Data<AppContext>,
    event_id: String,
    event: SlackEvent,
) {
    let handle_slack_event: &dyn HandleSlackEventInterface = ctx.core_module.resolve_ref();

    match handle_slack_event
        .run(&ctx.as_core_context(), &event_id, event)
        .await
    {
        Ok(summary) => {
            if !summary.is_empty() {
                info!(
                    event_id = %event_id,
                    outcomes = summary.records().len(),
                    success = summary.has_success(),
                    message = "Slack event handled"
                );
            }

            record_approval_summary(&summary);
        }
        Err(e) => {
            error!(
                event_id = %event_id,
                error = %e,
                message = "Error while handling Slack event"
            );
        }
    }
}

#[tracing::instrument(skip_all)]
pub(crate) async fn event_handler(
    body: web::Bytes,
    ctx: web::Data<AppContext>,
) -> ActixResult<HttpResponse> {
    match normalize_body(&body)? {
        SlackEnvelope::UrlVerification { challenge } => Ok(HttpResponse::Ok()
            .content_type(ContentType::plaintext())
            .body(challenge)),
        SlackEnvelope::EventCallback { event_id, event } => {
            rt::spawn(process_event(ctx, event_id, event));
            Ok(HttpResponse::Ok().finish())
        }
        SlackEnvelope::Unsupported => {
            debug!(message = "Ignoring unsupported Slack payload");
            Ok(HttpResponse::Ok().finish())
        }
    }
}

/// Configure webhook handlers.
pub fn configure_webhook_handlers(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("").route(web::post().to(event_handler)));
}
