//! Server middlewares.

#![allow(clippy::type_complexity)]

use std::{pin::Pin, rc::Rc};

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::{header::HeaderMap, Method},
    web::BytesMut,
    Error, HttpMessage,
};
use approbot_config::Config;
use approbot_crypto::SlackSignature;
use futures::{
    future::{ok, Ready},
    stream::StreamExt,
    Future,
};
use tracing::warn;

use crate::{
    constants::{SLACK_SIGNATURE_HEADER, SLACK_TIMESTAMP_HEADER},
    normalizer::is_url_verification,
    ServerError,
};

/// Signature verification configuration.
pub struct VerifySignature {
    enabled: bool,
    secret: Option<String>,
}

impl VerifySignature {
    /// Create a new configuration.
    pub fn new(config: &Config) -> Self {
        let mut enabled = !config.server.disable_webhook_signature;
        let secret = if enabled {
            if config.slack.signing_secret.is_empty() {
                warn!("Environment variable 'BOT_SLACK_SIGNING_SECRET' is invalid or not set. Disabling signature verification.");
                enabled = false;
                None
            } else {
                Some(config.slack.signing_secret.clone())
            }
        } else {
            warn!("Signature verification is disabled. This can be a security concern.");
            None
        };

        Self { enabled, secret }
    }
}

// `S` - type of the next service
// `B` - type of response's body
impl<S, B> Transform<S, ServiceRequest> for VerifySignature
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Error = Error;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;
    type InitError = ();
    type Response = ServiceResponse<B>;
    type Transform = VerifySignatureMiddleware<S>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(VerifySignatureMiddleware {
            enabled: self.enabled,
            secret: self.secret.clone(),
            service: Rc::new(service),
        })
    }
}

/// Signature verification middleware.
pub struct VerifySignatureMiddleware<S> {
    enabled: bool,
    secret: Option<String>,
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for VerifySignatureMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;
    type Response = ServiceResponse<B>;

    actix_web::dev::forward_ready!(service);

    fn call(&self, mut req: ServiceRequest) -> Self::Future {
        let svc = self.service.clone();
        let enabled = self.enabled;
        let secret = self.secret.clone();

        Box::pin(async move {
            if enabled && req.method() == Method::POST {
                if let Some(secret) = secret {
                    let mut body = BytesMut::new();
                    let mut stream = req.take_payload();

                    while let Some(chunk) = stream.next().await {
                        body.extend_from_slice(&chunk?);
                    }

                    // Endpoint verification is answered before any signature check.
                    if !is_url_verification(&body) {
                        verify_request(req.headers(), &body, &secret)?;
                    }

                    // Thanks https://github.com/actix/actix-web/issues/1457#issuecomment-617342438
                    let (_, mut payload) = actix_http::h1::Payload::create(true);
                    payload.unread_data(body.freeze());
                    req.set_payload(payload.into());
                }
            }

            svc.call(req).await
        })
    }
}

fn verify_request(headers: &HeaderMap, body: &[u8], secret: &str) -> Result<(), ServerError> {
    let signature = header_value(headers, SLACK_SIGNATURE_HEADER)?;
    let timestamp = header_value(headers, SLACK_TIMESTAMP_HEADER)?;

    if SlackSignature::new(signature, timestamp).is_valid(body, secret) {
        Ok(())
    } else {
        warn!(timestamp = timestamp, message = "Rejecting webhook with invalid signature");
        Err(ServerError::InvalidWebhookSignature)
    }
}

fn header_value<'a>(headers: &'a HeaderMap, name: &str) -> Result<&'a str, ServerError> {
    headers
        .get(name)
        .ok_or(ServerError::MissingWebhookSignature)?
        .to_str()
        .map_err(|_| ServerError::InvalidWebhookSignature)
}
