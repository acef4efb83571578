// src/core/service_client.rs
//! HTTP client for the resume analysis API - one pre-configured reqwest client for every page

use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::multipart::{Form, Part};
use reqwest::{RequestBuilder, Response};
use serde_json::Value;
use std::str::FromStr;
use tracing::{debug, error, info, info_span, Instrument};
use uuid::Uuid;

use crate::core::config_manager::ClientConfig;
use crate::types::{
    FeedbackAck, FeedbackForm, JobListing, JobQuery, ReportRequest, ResumeData,
};
use crate::utils::resume_content_type;

const ANALYZE_ENDPOINT: &str = "/resume/analyze";
const REPORT_ENDPOINT: &str = "/resume/report";
const GENERATE_ENDPOINT: &str = "/builder/generate";
const JOBS_SEARCH_ENDPOINT: &str = "/jobs/search";
const FEEDBACK_ENDPOINT: &str = "/feedback/";

const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// Resume file plus the job it should be scored against
#[derive(Debug, Clone)]
pub struct ResumeUpload {
    pub file_name: String,
    pub content: Vec<u8>,
    pub job_description: String,
    pub job_role: String,
}

/// Calls the page flows make against the upstream service
#[allow(async_fn_in_trait)]
pub trait ResumeApi {
    /// `POST /resume/analyze`; the raw body, JSON when it parses, text otherwise
    async fn analyze_resume(&self, upload: &ResumeUpload) -> Result<Value>;

    /// `POST /resume/report`; PDF bytes
    async fn download_report(&self, request: &ReportRequest) -> Result<Vec<u8>>;

    /// `POST /builder/generate`; PDF bytes
    async fn generate_resume(&self, resume: &ResumeData) -> Result<Vec<u8>>;

    /// `GET /jobs/search`
    async fn search_jobs(&self, query: &JobQuery) -> Result<Vec<JobListing>>;

    /// `POST /feedback/`
    async fn submit_feedback(&self, feedback: &FeedbackForm) -> Result<FeedbackAck>;
}

pub struct ServiceClient {
    client: reqwest::Client,
    base_url: String,
}

impl ServiceClient {
    /// Create new service client with configuration
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        for (name, value) in &config.headers {
            let name = HeaderName::from_str(name)
                .with_context(|| format!("Invalid header name: {}", name))?;
            let value = HeaderValue::from_str(value)
                .with_context(|| format!("Invalid value for header {}", name))?;
            headers.insert(name, value);
        }

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(seconds) = config.timeout_seconds {
            builder = builder.timeout(std::time::Duration::from_secs(seconds));
        }
        if let Some(user_agent) = &config.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }

        let client = builder.build().context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.api_base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Send with a fresh request id, failing on non-2xx statuses
    async fn send(&self, request: RequestBuilder, url: &str) -> Result<Response> {
        let request_id = Uuid::new_v4().to_string();
        let span = info_span!("api_request", %url, %request_id);

        Self::dispatch(request.header(REQUEST_ID_HEADER, &request_id), url)
            .instrument(span)
            .await
    }

    async fn dispatch(request: RequestBuilder, url: &str) -> Result<Response> {
        info!("Calling resume service: {}", url);

        let response = request
            .send()
            .await
            .with_context(|| format!("HTTP request to {} failed", url))?;

        let status = response.status();
        debug!("Response status: {}", status);

        if status.is_success() {
            return Ok(response);
        }

        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        error!("Service error response {}: {}", status, error_text);
        anyhow::bail!("Service returned error status {}: {}", status, error_text)
    }

    async fn read_pdf(response: Response) -> Result<Vec<u8>> {
        let bytes = response
            .bytes()
            .await
            .context("Failed to read PDF response body")?;
        Ok(bytes.to_vec())
    }

    /// `GET /feedback/`; every stored feedback entry
    pub async fn list_feedback(&self) -> Result<Vec<Value>> {
        let url = self.url(FEEDBACK_ENDPOINT);
        let response = self.send(self.client.get(&url), &url).await?;

        response
            .json::<Vec<Value>>()
            .await
            .context("Failed to parse feedback list")
    }
}

impl ResumeApi for ServiceClient {
    async fn analyze_resume(&self, upload: &ResumeUpload) -> Result<Value> {
        let url = self.url(ANALYZE_ENDPOINT);
        let content_type = resume_content_type(&upload.file_name)?;

        let form = Form::new()
            .part(
                "file",
                Part::bytes(upload.content.clone())
                    .file_name(upload.file_name.clone())
                    .mime_str(content_type)
                    .context("Failed to create multipart")?,
            )
            .text("job_description", upload.job_description.clone())
            .text("job_role", upload.job_role.clone());

        let response = self.send(self.client.post(&url).multipart(form), &url).await?;

        let response_text = response
            .text()
            .await
            .context("Failed to read response text")?;
        debug!("Raw analysis response: {}", response_text);

        // Non-JSON bodies are handed on as text for the normalizer to try
        Ok(serde_json::from_str::<Value>(&response_text).unwrap_or(Value::String(response_text)))
    }

    async fn download_report(&self, request: &ReportRequest) -> Result<Vec<u8>> {
        let url = self.url(REPORT_ENDPOINT);
        let response = self.send(self.client.post(&url).json(request), &url).await?;
        Self::read_pdf(response).await
    }

    async fn generate_resume(&self, resume: &ResumeData) -> Result<Vec<u8>> {
        let url = self.url(GENERATE_ENDPOINT);
        let response = self.send(self.client.post(&url).json(resume), &url).await?;
        Self::read_pdf(response).await
    }

    async fn search_jobs(&self, query: &JobQuery) -> Result<Vec<JobListing>> {
        let url = self.url(JOBS_SEARCH_ENDPOINT);
        let params = [
            ("title", query.title.as_str()),
            ("location", query.location.as_str()),
            ("experience", query.experience.as_str()),
        ];

        let response = self.send(self.client.get(&url).query(&params), &url).await?;

        response
            .json::<Vec<JobListing>>()
            .await
            .context("Failed to parse job search response")
    }

    async fn submit_feedback(&self, feedback: &FeedbackForm) -> Result<FeedbackAck> {
        let url = self.url(FEEDBACK_ENDPOINT);
        let response = self.send(self.client.post(&url).json(feedback), &url).await?;

        response
            .json::<FeedbackAck>()
            .await
            .context("Failed to parse feedback acknowledgement")
    }
}
