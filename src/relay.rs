use crate::contact::{EmailRelay, RelayConfig, RelayError, RelayRequest};

/// Posts contact messages to the hosted relay's REST endpoint from the browser.
#[derive(Debug, Clone)]
pub struct HttpRelay {
    endpoint: String,
}

impl HttpRelay {
    pub fn new(config: &RelayConfig) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl EmailRelay for HttpRelay {
    #[cfg(feature = "hydrate")]
    async fn send(&self, request: &RelayRequest) -> Result<(), RelayError> {
        use gloo_net::http::Request;
        use http::StatusCode;

        let response = Request::post(&self.endpoint)
            .json(request)
            .map_err(|e| RelayError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| RelayError::Network(e.to_string()))?;

        if response.ok() {
            return Ok(());
        }
        let status = StatusCode::from_u16(response.status()).unwrap_or(StatusCode::BAD_GATEWAY);
        let body = response.text().await.unwrap_or_default();
        log::warn!("relay answered {status}: {body}");
        Err(RelayError::Rejected(status))
    }

    #[cfg(not(feature = "hydrate"))]
    async fn send(&self, _request: &RelayRequest) -> Result<(), RelayError> {
        Err(RelayError::Unavailable)
    }
}
