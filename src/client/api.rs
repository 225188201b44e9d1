//! Typed HTTP client for the student records API

use std::time::Duration;

use reqwest::{Client, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::http_server::{ErrorResponse, MessageResponse};
use crate::students::{Student, StudentInput};

/// Default base URL of the student endpoints
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:7152/api/students";

/// Transport or protocol failure talking to the service
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Unexpected response status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },
}

/// Result of a call that reached the service
#[derive(Debug, Clone, PartialEq)]
pub enum ClientOutcome<T> {
    Ok(T),
    /// 400 with the server's message
    BadRequest(String),
    /// 404 with the server's message
    NotFound(String),
}

/// Student API client
#[derive(Debug, Clone)]
pub struct StudentClient {
    http: Client,
    base_url: String,
}

impl StudentClient {
    /// Create a client for the given base URL (e.g. `http://host:port/api/students`)
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Url::parse(&base_url).map_err(|e| ClientError::InvalidBaseUrl {
            url: base_url.clone(),
            reason: e.to_string(),
        })?;

        let http = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    pub async fn all(&self) -> Result<ClientOutcome<Vec<Student>>, ClientError> {
        decode(self.http.get(self.url("all")).send().await?).await
    }

    pub async fn passed(&self) -> Result<ClientOutcome<Vec<Student>>, ClientError> {
        decode(self.http.get(self.url("passed")).send().await?).await
    }

    pub async fn average_grade(&self) -> Result<ClientOutcome<f64>, ClientError> {
        decode(self.http.get(self.url("average-grade")).send().await?).await
    }

    pub async fn get(&self, id: i64) -> Result<ClientOutcome<Student>, ClientError> {
        decode(self.http.get(self.url(&id.to_string())).send().await?).await
    }

    pub async fn add(&self, input: &StudentInput) -> Result<ClientOutcome<Student>, ClientError> {
        decode(self.http.post(&self.base_url).json(input).send().await?).await
    }

    /// Delete a student, returning the server's confirmation text
    pub async fn delete(&self, id: i64) -> Result<ClientOutcome<String>, ClientError> {
        let response = self.http.delete(self.url(&id.to_string())).send().await?;
        Ok(match decode::<MessageResponse>(response).await? {
            ClientOutcome::Ok(body) => ClientOutcome::Ok(body.message),
            ClientOutcome::BadRequest(msg) => ClientOutcome::BadRequest(msg),
            ClientOutcome::NotFound(msg) => ClientOutcome::NotFound(msg),
        })
    }

    pub async fn update(
        &self,
        id: i64,
        input: &StudentInput,
    ) -> Result<ClientOutcome<Student>, ClientError> {
        decode(
            self.http
                .put(self.url(&id.to_string()))
                .json(input)
                .send()
                .await?,
        )
        .await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<ClientOutcome<T>, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(ClientOutcome::Ok(response.json::<T>().await?));
    }

    let body = response.text().await?;
    // Fall back to the raw body when the server did not send an ErrorResponse.
    let message = serde_json::from_str::<ErrorResponse>(&body)
        .map(|e| e.error)
        .unwrap_or_else(|_| body.clone());

    match status {
        StatusCode::BAD_REQUEST => Ok(ClientOutcome::BadRequest(message)),
        StatusCode::NOT_FOUND => Ok(ClientOutcome::NotFound(message)),
        other => Err(ClientError::UnexpectedStatus {
            status: other.as_u16(),
            body,
        }),
    }
}
