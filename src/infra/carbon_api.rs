//! Thin asynchronous client for the carbon scoring service.
//!
//! - Posts product data as JSON to `predict-score` and `get-alternatives`.
//! - Every non-2xx answer becomes a [`CarbonApiError::Status`]; nothing is retried or cached.

use std::fmt;

use reqwest::{Client, StatusCode, Url};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::domain::{
    AlternativesRequest, AlternativesResult, ProductInput, ScoreResult, ScoringService,
};
use crate::util::version::user_agent;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// Endpoints exposed by the scoring service.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    PredictScore,
    GetAlternatives,
    Health,
}

impl Endpoint {
    fn path(&self) -> &'static str {
        match self {
            Endpoint::PredictScore => "predict-score",
            Endpoint::GetAlternatives => "get-alternatives",
            // The health check lives at the service root, outside the API prefix.
            Endpoint::Health => "/",
        }
    }

    fn failure_message(&self) -> &'static str {
        match self {
            Endpoint::PredictScore => "Failed to predict carbon score",
            Endpoint::GetAlternatives => "Failed to get alternatives",
            Endpoint::Health => "Service health check failed",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Endpoint::PredictScore => "predict-score",
            Endpoint::GetAlternatives => "get-alternatives",
            Endpoint::Health => "health",
        })
    }
}

#[derive(Debug, Error)]
pub enum CarbonApiError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("{}", status_message(.endpoint, .status, .detail))]
    Status {
        endpoint: Endpoint,
        status: StatusCode,
        detail: Option<String>,
    },
    #[error("{} (unexpected response: {source})", .endpoint.failure_message())]
    Decode {
        endpoint: Endpoint,
        #[source]
        source: serde_json::Error,
    },
}

fn status_message(endpoint: &Endpoint, status: &StatusCode, detail: &Option<String>) -> String {
    let mut message = format!("{} (HTTP {})", endpoint.failure_message(), status.as_u16());
    if let Some(detail) = detail {
        message.push_str(": ");
        message.push_str(detail);
    }
    message
}

/// Where the scoring service lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: Url,
}

impl ApiConfig {
    /// Parses a base URL such as `http://localhost:8000/api`.
    ///
    /// A trailing slash is added so relative endpoint paths keep the prefix.
    pub fn new(base: &str) -> Result<Self, CarbonApiError> {
        let mut base_url = Url::parse(base.trim())?;
        if base_url.cannot_be_a_base() {
            return Err(CarbonApiError::InvalidUrl(url::ParseError::RelativeUrlWithCannotBeABaseBase));
        }
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Ok(Self { base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url(&self, endpoint: Endpoint) -> Result<Url, url::ParseError> {
        self.base_url.join(endpoint.path())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(&format!("{DEFAULT_BASE_URL}/"))
                .unwrap_or_else(|err| panic!("default API URL is invalid: {err}")),
        }
    }
}

/// Answer of the service root endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    pub message: String,
}

/// Error body the service sends with 4xx/5xx answers.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: serde_json::Value,
}

#[derive(Clone)]
pub struct CarbonApiClient {
    http: Client,
    config: ApiConfig,
}

impl CarbonApiClient {
    pub fn new(config: ApiConfig) -> Result<Self, CarbonApiError> {
        let http = Client::builder().user_agent(user_agent()).build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub async fn predict_carbon_score(
        &self,
        input: &ProductInput,
    ) -> Result<ScoreResult, CarbonApiError> {
        self.post(Endpoint::PredictScore, input).await
    }

    pub async fn get_greener_alternatives(
        &self,
        request: &AlternativesRequest,
    ) -> Result<AlternativesResult, CarbonApiError> {
        self.post(Endpoint::GetAlternatives, request).await
    }

    pub async fn check_health(&self) -> Result<HealthStatus, CarbonApiError> {
        let url = self.config.url(Endpoint::Health)?;
        debug!("GET {url}");
        self.fetch(Endpoint::Health, self.http.get(url)).await
    }

    async fn post<B, T>(&self, endpoint: Endpoint, body: &B) -> Result<T, CarbonApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.config.url(endpoint)?;
        info!("POST {url}");
        self.fetch(endpoint, self.http.post(url).json(body)).await
    }

    async fn fetch<T>(
        &self,
        endpoint: Endpoint,
        builder: reqwest::RequestBuilder,
    ) -> Result<T, CarbonApiError>
    where
        T: DeserializeOwned,
    {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.bytes().await?;
        debug!("{endpoint} answered {status} ({} bytes)", body.len());

        if !status.is_success() {
            return Err(CarbonApiError::Status {
                endpoint,
                status,
                detail: error_detail(&body),
            });
        }

        serde_json::from_slice(&body).map_err(|source| CarbonApiError::Decode { endpoint, source })
    }
}

impl ScoringService for CarbonApiClient {
    type Error = CarbonApiError;

    async fn predict_carbon_score(&self, input: &ProductInput) -> Result<ScoreResult, Self::Error> {
        CarbonApiClient::predict_carbon_score(self, input).await
    }

    async fn get_greener_alternatives(
        &self,
        request: &AlternativesRequest,
    ) -> Result<AlternativesResult, Self::Error> {
        CarbonApiClient::get_greener_alternatives(self, request).await
    }
}

/// Pulls `detail` out of an error body; validation errors carry a list there.
fn error_detail(body: &[u8]) -> Option<String> {
    let ErrorBody { detail } = serde_json::from_slice(body).ok()?;
    match detail {
        serde_json::Value::String(text) if !text.trim().is_empty() => Some(text),
        serde_json::Value::Array(items) => {
            let messages = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(|msg| msg.as_str()))
                .collect::<Vec<_>>();
            (!messages.is_empty()).then(|| messages.join("; "))
        }
        _ => None,
    }
}
