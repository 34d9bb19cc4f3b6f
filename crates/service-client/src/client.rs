//! HTTP client for the processing service.

use std::time::Duration;

use clipmatch_common::config::ServiceConfig;
use clipmatch_core::PublicUrlMapper;
use clipmatch_model::{decode_process_response, parse_diarization, ProcessResponse, Utterance};
use serde::Serialize;

use crate::error::{ClientError, ClientResult};

#[derive(Serialize)]
struct SubmitRequest<'a> {
    url: &'a str,
}

/// A finished processing job with its diarization already fetched.
#[derive(Debug, Clone)]
pub struct ProcessedJob {
    pub response: ProcessResponse,
    pub utterances: Vec<Utterance>,
}

/// Processing service client.
#[derive(Debug, Clone)]
pub struct ProcessingClient {
    http: reqwest::Client,
    endpoint: String,
    urls: PublicUrlMapper,
}

impl ProcessingClient {
    /// Build a client from service settings.
    pub fn new(config: &ServiceConfig) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|source| ClientError::Request {
                url: config.endpoint.clone(),
                source,
            })?;

        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
            urls: PublicUrlMapper::new(&config.internal_prefix, &config.public_host),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Mapper from service paths to public URLs.
    pub fn url_mapper(&self) -> &PublicUrlMapper {
        &self.urls
    }

    /// Submit a video URL and wait for the job result.
    ///
    /// The service answers only when processing is done, which can take
    /// several minutes.
    pub async fn submit(&self, video_url: &str) -> ClientResult<ProcessResponse> {
        let video_url = video_url.trim();
        if video_url.is_empty() {
            return Err(ClientError::invalid_request("video URL is empty"));
        }

        tracing::info!(
            endpoint = %self.endpoint,
            url_len = video_url.len(),
            "Submitting processing job"
        );
        let request = self
            .http
            .post(&self.endpoint)
            .json(&SubmitRequest { url: video_url });
        let body = self.send(&self.endpoint, request).await?;

        let response = decode_process_response(&body)?;
        tracing::info!(
            extracted = response.extracted.len(),
            folder = ?response.request_folder(),
            "Processing job finished"
        );
        Ok(response)
    }

    /// Fetch and decode the diarization document of a finished job.
    pub async fn fetch_diarization(
        &self,
        response: &ProcessResponse,
    ) -> ClientResult<Vec<Utterance>> {
        let url = self.urls.to_public(&response.diarization_json);
        tracing::info!(url = %url, "Fetching diarization");

        let body = self.send(&url, self.http.get(&url)).await?;
        let utterances = parse_diarization(&body)?;
        tracing::info!(count = utterances.len(), "Fetched utterances");
        Ok(utterances)
    }

    /// Submit a job and fetch its diarization.
    pub async fn run_job(&self, video_url: &str) -> ClientResult<ProcessedJob> {
        let response = self.submit(video_url).await?;
        let utterances = self.fetch_diarization(&response).await?;
        Ok(ProcessedJob {
            response,
            utterances,
        })
    }

    /// Send a request and return the body of a successful response.
    async fn send(&self, url: &str, request: reqwest::RequestBuilder) -> ClientResult<String> {
        let request_error = |source| ClientError::Request {
            url: url.to_string(),
            source,
        };

        let response = request.send().await.map_err(request_error)?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(url, status = status.as_u16(), "Service request failed");
            return Err(ClientError::Status {
                url: url.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        response.text().await.map_err(request_error)
    }
}
