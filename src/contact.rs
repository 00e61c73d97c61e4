use std::{fmt, future::Future};

use http::StatusCode;
use serde::Serialize;
use thiserror::Error;

pub const DEFAULT_RELAY_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";
const DEFAULT_SERVICE_ID: &str = "service_9h7xz7p";
const DEFAULT_TEMPLATE_ID: &str = "template_pvdgtys";
const DEFAULT_PUBLIC_KEY: &str = "96l7QYJR-YaBabzTX";

/// Identifiers for the hosted email relay. They ship inside the WASM bundle, so only the
/// relay's public key belongs here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl RelayConfig {
    /// Reads `EMAILJS_*` variables at compile time, falling back to the site's own account.
    pub fn from_build_env() -> Self {
        Self {
            endpoint: option_env!("EMAILJS_ENDPOINT")
                .unwrap_or(DEFAULT_RELAY_ENDPOINT)
                .to_string(),
            service_id: option_env!("EMAILJS_SERVICE_ID")
                .unwrap_or(DEFAULT_SERVICE_ID)
                .to_string(),
            template_id: option_env!("EMAILJS_TEMPLATE_ID")
                .unwrap_or(DEFAULT_TEMPLATE_ID)
                .to_string(),
            public_key: option_env!("EMAILJS_PUBLIC_KEY")
                .unwrap_or(DEFAULT_PUBLIC_KEY)
                .to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        };
        f.write_str(s)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RelayError {
    #[error("couldn't reach the email relay: {0}")]
    Network(String),
    #[error("email relay rejected the message ({0})")]
    Rejected(StatusCode),
    #[error("email relay is only reachable from the browser")]
    Unavailable,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("{0} is required")]
    Missing(Field),
    #[error("email address is not valid")]
    InvalidEmail,
    #[error(transparent)]
    Relay(#[from] RelayError),
}

/// Values the relay template interpolates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub user_name: String,
    pub user_email: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelayRequest {
    pub service_id: String,
    pub template_id: String,
    #[serde(rename = "user_id")]
    pub public_key: String,
    pub template_params: TemplateParams,
}

impl RelayRequest {
    pub fn new(config: &RelayConfig, template_params: TemplateParams) -> Self {
        Self {
            service_id: config.service_id.clone(),
            template_id: config.template_id.clone(),
            public_key: config.public_key.clone(),
            template_params,
        }
    }
}

/// Outbound transport to the email relay.
pub trait EmailRelay {
    fn send(&self, request: &RelayRequest) -> impl Future<Output = Result<(), RelayError>>;
}

/// Current contents of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// What the visitor is told once a submission settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acknowledgment {
    Sent,
    Failed,
    Incomplete,
}

impl Acknowledgment {
    pub fn message(&self) -> &'static str {
        match self {
            Acknowledgment::Sent => "Message sent successfully!",
            Acknowledgment::Failed => "Failed to send message, please try again.",
            Acknowledgment::Incomplete => "Please fill in your name, email, and message.",
        }
    }
}

fn looks_like_email(s: &str) -> bool {
    let mut parts = s.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !s.chars().any(char::is_whitespace)
        }
        _ => false,
    }
}

impl ContactForm {
    pub fn validate(&self) -> Result<TemplateParams, ContactError> {
        let name = self.name.trim();
        let email = self.email.trim();
        if name.is_empty() {
            return Err(ContactError::Missing(Field::Name));
        }
        if email.is_empty() {
            return Err(ContactError::Missing(Field::Email));
        }
        if self.message.trim().is_empty() {
            return Err(ContactError::Missing(Field::Message));
        }
        if !looks_like_email(email) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(TemplateParams {
            user_name: name.to_string(),
            user_email: email.to_string(),
            message: self.message.clone(),
        })
    }

    /// Applies a finished submission: success clears every field, failure keeps them so the
    /// visitor can resubmit.
    pub fn settle(&mut self, outcome: &Result<(), ContactError>) -> Acknowledgment {
        match outcome {
            Ok(()) => {
                *self = Self::default();
                Acknowledgment::Sent
            }
            Err(ContactError::Relay(_)) => Acknowledgment::Failed,
            Err(_) => Acknowledgment::Incomplete,
        }
    }
}

/// Validates the form and makes exactly one relay call. Nothing is sent when validation fails.
pub async fn submit<R: EmailRelay>(
    relay: &R,
    config: &RelayConfig,
    form: &ContactForm,
) -> Result<(), ContactError> {
    let params = form.validate()?;
    let request = RelayRequest::new(config, params);
    log::debug!("sending contact message via {}", config.service_id);
    relay
        .send(&request)
        .await
        .inspect_err(|e| log::error!("contact message failed: {e}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct FakeRelay {
        outcome: Result<(), RelayError>,
        sent: RefCell<Vec<RelayRequest>>,
    }

    impl FakeRelay {
        fn new(outcome: Result<(), RelayError>) -> Self {
            Self {
                outcome,
                sent: RefCell::new(Vec::new()),
            }
        }
    }

    impl EmailRelay for FakeRelay {
        async fn send(&self, request: &RelayRequest) -> Result<(), RelayError> {
            self.sent.borrow_mut().push(request.clone());
            self.outcome.clone()
        }
    }

    fn config() -> RelayConfig {
        RelayConfig {
            endpoint: "https://relay.test/send".to_string(),
            service_id: "svc".to_string(),
            template_id: "tpl".to_string(),
            public_key: "key".to_string(),
        }
    }

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello!\nLet's talk.".to_string(),
        }
    }

    #[tokio::test]
    async fn test_success_sends_once_and_clears() {
        let relay = FakeRelay::new(Ok(()));
        let mut form = filled();

        let outcome = submit(&relay, &config(), &form).await;
        assert_eq!(outcome, Ok(()));

        let sent = relay.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].service_id, "svc");
        assert_eq!(sent[0].template_id, "tpl");
        assert_eq!(sent[0].public_key, "key");
        assert_eq!(sent[0].template_params.user_name, "Ada Lovelace");
        assert_eq!(sent[0].template_params.user_email, "ada@example.com");
        assert_eq!(sent[0].template_params.message, "Hello!\nLet's talk.");

        assert_eq!(form.settle(&outcome), Acknowledgment::Sent);
        assert_eq!(form, ContactForm::default());
    }

    #[tokio::test]
    async fn test_failure_keeps_fields() {
        let relay = FakeRelay::new(Err(RelayError::Rejected(StatusCode::BAD_REQUEST)));
        let mut form = filled();

        let outcome = submit(&relay, &config(), &form).await;
        assert!(matches!(outcome, Err(ContactError::Relay(RelayError::Rejected(_)))));
        assert_eq!(relay.sent.borrow().len(), 1);

        assert_eq!(form.settle(&outcome), Acknowledgment::Failed);
        assert_eq!(form, filled());
    }

    #[tokio::test]
    async fn test_missing_field_never_sends() {
        let relay = FakeRelay::new(Ok(()));
        for (mut form, field) in [
            (ContactForm { name: String::new(), ..filled() }, Field::Name),
            (ContactForm { email: "  ".to_string(), ..filled() }, Field::Email),
            (ContactForm { message: String::new(), ..filled() }, Field::Message),
        ] {
            let outcome = submit(&relay, &config(), &form).await;
            assert_eq!(outcome, Err(ContactError::Missing(field)));
            assert_eq!(form.settle(&outcome), Acknowledgment::Incomplete);
        }
        assert!(relay.sent.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_each_submission_is_one_call() {
        let relay = FakeRelay::new(Err(RelayError::Network("offline".to_string())));
        let form = filled();
        for _ in 0..3 {
            let _ = submit(&relay, &config(), &form).await;
        }
        assert_eq!(relay.sent.borrow().len(), 3);
    }

    #[test]
    fn test_email_validation() {
        for good in ["a@b.co", "first.last+tag@mail.example.org"] {
            let form = ContactForm { email: good.to_string(), ..filled() };
            assert!(form.validate().is_ok(), "{good}");
        }
        for bad in ["plain", "@b.co", "a@", "a@@b.co", "a b@c.d", "a@.com"] {
            let form = ContactForm { email: bad.to_string(), ..filled() };
            assert_eq!(form.validate(), Err(ContactError::InvalidEmail), "{bad}");
        }
    }

    #[test]
    fn test_request_wire_format() {
        let params = filled().validate().expect("form is complete");
        let request = RelayRequest::new(&config(), params);
        let json = serde_json::to_value(&request).expect("request serializes");
        assert_eq!(
            json,
            serde_json::json!({
                "service_id": "svc",
                "template_id": "tpl",
                "user_id": "key",
                "template_params": {
                    "user_name": "Ada Lovelace",
                    "user_email": "ada@example.com",
                    "message": "Hello!\nLet's talk.",
                }
            })
        );
    }

    #[test]
    fn test_build_env_defaults() {
        let config = RelayConfig::from_build_env();
        assert!(config.endpoint.starts_with("https://"));
        assert!(!config.service_id.is_empty());
        assert!(!config.template_id.is_empty());
        assert!(!config.public_key.is_empty());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ContactError::Missing(Field::Email).to_string(), "email is required");
        assert_eq!(
            ContactError::from(RelayError::Rejected(StatusCode::TOO_MANY_REQUESTS)).to_string(),
            "email relay rejected the message (429 Too Many Requests)"
        );
    }
}
