// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Serpex API client implementation.

use std::fmt;
use std::time::Duration;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, instrument, trace, warn};

use crate::api_key::{ApiKey, REDACTED};
use crate::config::{
	normalize_base_url, ClientConfig, EngineParam, SearchPolicy, DEFAULT_BASE_URL, EXTRACT_ENDPOINT,
	SEARCH_ENDPOINT,
};
use crate::error::{ApiErrorDetails, Result, SerpexError};
use crate::params::RequestParams;
use crate::request::{build_extract_request, build_search_request};
use crate::types::{ExtractParams, ExtractResponse, SearchParams, SearchResponse};

/// SDK version for identification.
const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HttpMethod {
	Get,
	Post,
}

/// Builder for constructing a [`SerpexClient`].
#[derive(Default)]
pub struct SerpexClientBuilder {
	api_key: Option<String>,
	base_url: Option<String>,
	config: ClientConfig,
	http_client: Option<Client>,
	user_agent: Option<String>,
	request_timeout: Option<Duration>,
}

impl fmt::Debug for SerpexClientBuilder {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("SerpexClientBuilder")
			.field("api_key", &self.api_key.as_ref().map(|_| REDACTED))
			.field("base_url", &self.base_url)
			.field("config", &self.config)
			.field("http_client", &self.http_client)
			.field("user_agent", &self.user_agent)
			.field("request_timeout", &self.request_timeout)
			.finish()
	}
}

impl SerpexClientBuilder {
	/// Creates a new builder with default settings.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the API key from the Serpex dashboard.
	pub fn api_key(mut self, key: impl Into<String>) -> Self {
		self.api_key = Some(key.into());
		self
	}

	/// Sets the base URL for the API.
	///
	/// Defaults to [`DEFAULT_BASE_URL`]. One trailing slash is stripped.
	pub fn base_url(mut self, url: impl Into<String>) -> Self {
		self.base_url = Some(url.into());
		self
	}

	/// Sets how `search` validates and shapes parameters.
	pub fn policy(mut self, policy: SearchPolicy) -> Self {
		self.config.policy = policy;
		self
	}

	/// Sets whether the engine is sent as `engine` or `engines`.
	pub fn engine_param(mut self, engine_param: EngineParam) -> Self {
		self.config.engine_param = engine_param;
		self
	}

	/// Replaces the whole behavioural configuration.
	pub fn config(mut self, config: ClientConfig) -> Self {
		self.config = config;
		self
	}

	/// Uses a preconfigured HTTP client.
	///
	/// `user_agent` and `request_timeout` are ignored when this is set.
	pub fn http_client(mut self, client: Client) -> Self {
		self.http_client = Some(client);
		self
	}

	/// Overrides the `User-Agent` header.
	pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
		self.user_agent = Some(user_agent.into());
		self
	}

	/// Sets a timeout on the HTTP client the builder creates.
	///
	/// Without one, the transport's own defaults apply.
	pub fn request_timeout(mut self, timeout: Duration) -> Self {
		self.request_timeout = Some(timeout);
		self
	}

	/// Builds the client.
	pub fn build(self) -> Result<SerpexClient> {
		let api_key = ApiKey::new(self.api_key.unwrap_or_default())?;
		let base_url = normalize_base_url(self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL));

		let http_client = match self.http_client {
			Some(client) => client,
			None => {
				let mut builder = match self.user_agent {
					Some(user_agent) => serpex_common_http::builder_with_user_agent(user_agent),
					None => serpex_common_http::builder(),
				};
				if let Some(timeout) = self.request_timeout {
					builder = builder.timeout(timeout);
				}
				builder.build().map_err(SerpexError::Network)?
			}
		};

		info!(
			base_url = %base_url,
			sdk_version = SDK_VERSION,
			policy = ?self.config.policy,
			engine_param = ?self.config.engine_param,
			"Serpex client initialized"
		);

		Ok(SerpexClient {
			http_client,
			api_key,
			base_url,
			config: self.config,
		})
	}
}

/// Client for the Serpex SERP API.
///
/// # Example
///
/// ```ignore
/// use serpex::{SearchParams, SerpexClient, TimeRange};
///
/// let client = SerpexClient::new("sk_your_api_key")?;
///
/// let response = client
///     .search(&SearchParams::new("rust async runtimes").with_time_range(TimeRange::Month))
///     .await?;
///
/// for result in &response.results {
///     println!("{}. {} - {}", result.position, result.title, result.url);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct SerpexClient {
	http_client: Client,
	api_key: ApiKey,
	base_url: String,
	config: ClientConfig,
}

impl SerpexClient {
	/// Creates a client for the production API.
	///
	/// Fails with [`SerpexError::Configuration`] when the key is empty.
	pub fn new(api_key: impl Into<String>) -> Result<Self> {
		Self::builder().api_key(api_key).build()
	}

	/// Creates a client against a custom base URL.
	pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Result<Self> {
		Self::builder().api_key(api_key).base_url(base_url).build()
	}

	/// Creates a new builder for constructing a client.
	pub fn builder() -> SerpexClientBuilder {
		SerpexClientBuilder::new()
	}

	pub fn base_url(&self) -> &str {
		&self.base_url
	}

	pub fn config(&self) -> &ClientConfig {
		&self.config
	}

	/// Replaces the API key used for subsequent requests.
	pub fn set_api_key(&mut self, key: impl Into<String>) -> Result<()> {
		self.api_key = ApiKey::new(key)?;
		debug!("API key updated");
		Ok(())
	}

	/// Replaces the base URL used for subsequent requests.
	pub fn set_base_url(&mut self, url: impl Into<String>) -> Result<()> {
		let url = url.into();
		if url.is_empty() {
			return Err(SerpexError::Configuration(
				"base URL must be a non-empty string".to_string(),
			));
		}
		self.base_url = normalize_base_url(&url);
		debug!(base_url = %self.base_url, "Base URL updated");
		Ok(())
	}

	/// Searches via `GET /api/search`.
	///
	/// Validation failures are returned before any request is sent.
	#[instrument(skip(self, params), fields(policy = ?self.config.policy))]
	pub async fn search(&self, params: &SearchParams) -> Result<SearchResponse> {
		let (query, request) = build_search_request(params, &self.config).map_err(|e| {
			warn!(error = %e, "Rejected search parameters");
			SerpexError::from(e)
		})?;

		debug!(query = %query, param_count = request.len(), "Searching");

		let response: SearchResponse = self
			.execute(SEARCH_ENDPOINT, HttpMethod::Get, &request)
			.await?;

		debug!(
			id = %response.id,
			result_count = response.results.len(),
			credits_used = response.metadata.credits_used,
			"Search completed successfully"
		);

		Ok(response)
	}

	/// Extracts page content via `POST /api/crawl`.
	#[instrument(skip(self, params), fields(url_count = params.urls.len()))]
	pub async fn extract(&self, params: &ExtractParams) -> Result<ExtractResponse> {
		let request = build_extract_request(params).map_err(|e| {
			warn!(error = %e, "Rejected extract parameters");
			SerpexError::from(e)
		})?;

		let response: ExtractResponse = self
			.execute(EXTRACT_ENDPOINT, HttpMethod::Post, &request)
			.await?;

		debug!(
			result_count = response.results.len(),
			"Extraction completed successfully"
		);

		Ok(response)
	}

	fn endpoint_url(&self, endpoint: &str) -> Result<Url> {
		Url::parse(&format!("{}{}", self.base_url, endpoint)).map_err(|e| {
			SerpexError::Configuration(format!("invalid base URL {:?}: {e}", self.base_url))
		})
	}

	/// Sends one authenticated request and decodes the JSON body.
	async fn execute<T: DeserializeOwned>(
		&self,
		endpoint: &str,
		method: HttpMethod,
		params: &RequestParams,
	) -> Result<T> {
		let mut url = self.endpoint_url(endpoint)?;

		if method == HttpMethod::Get {
			let pairs = params.to_query_pairs();
			if !pairs.is_empty() {
				url
					.query_pairs_mut()
					.extend_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())));
			}
		}

		debug!(method = ?method, url = %url, "Sending request to Serpex");
		trace!(params = ?params, "Request parameters");

		let builder = match method {
			HttpMethod::Get => self.http_client.get(url),
			HttpMethod::Post => self.http_client.post(url),
		}
		.header(AUTHORIZATION, self.api_key.bearer())
		.header(CONTENT_TYPE, "application/json");

		let builder = match method {
			HttpMethod::Get => builder,
			HttpMethod::Post => builder.json(params),
		};

		let response = builder.send().await.map_err(|e| {
			error!(error = %e, "Network error during Serpex request");
			SerpexError::Network(e)
		})?;

		let status = response.status();
		debug!(status = %status, "Received response from Serpex");

		if !status.is_success() {
			// An unreadable error body still yields an API error built from the status.
			let body = response.text().await.unwrap_or_else(|e| {
				warn!(error = %e, "Failed to read error response body");
				String::new()
			});
			let err = api_error(status, &body);
			error!(status = status.as_u16(), error = %err, "Serpex API error");
			return Err(err);
		}

		let body = response.text().await.map_err(|e| {
			error!(error = %e, "Failed to read response body");
			SerpexError::Network(e)
		})?;

		trace!(body = %body, "Response body");

		serde_json::from_str(&body).map_err(|e| {
			error!(error = %e, "Failed to parse Serpex response");
			SerpexError::InvalidResponse(format!("JSON parse error: {e}"))
		})
	}
}

/// Maps a failed response to [`SerpexError::Api`].
///
/// JSON object bodies supply the message and detail. Anything else falls back
/// to the HTTP status text.
fn api_error(status: StatusCode, body: &str) -> SerpexError {
	let recovered = serde_json::from_str::<serde_json::Value>(body)
		.ok()
		.and_then(ApiErrorDetails::from_json);

	let (message, details) = match recovered {
		Some(details) => {
			let message = details
				.error
				.clone()
				.filter(|m| !m.is_empty())
				.unwrap_or_else(|| serpex_common_http::FALLBACK_STATUS_TEXT.to_string());
			(message, details)
		}
		None => {
			let text = serpex_common_http::status_text(status);
			(text.clone(), ApiErrorDetails::from_status_text(text))
		}
	};

	SerpexError::Api {
		message,
		status_code: status.as_u16(),
		details: Some(details),
	}
}
