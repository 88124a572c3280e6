// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Error types for the Serpex client.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for Serpex operations.
pub type Result<T> = std::result::Result<T, SerpexError>;

/// Errors that can occur when using the Serpex client.
#[derive(Debug, Error)]
pub enum SerpexError {
	/// Client configuration is invalid (API key, base URL).
	#[error("configuration error: {0}")]
	Configuration(String),

	/// Caller supplied input was rejected before any request was sent.
	#[error("validation error: {0}")]
	Validation(#[from] ValidationError),

	/// The API answered with a non-success status.
	#[error("Serpex API error ({status_code}): {message}")]
	Api {
		/// Error message from the payload, or the HTTP status text.
		message: String,
		/// HTTP status code.
		status_code: u16,
		/// Whatever structured detail could be recovered from the body.
		details: Option<ApiErrorDetails>,
	},

	/// Network-level error during HTTP communication.
	#[error("network error: {0}")]
	Network(#[from] reqwest::Error),

	/// Successful status, but the body did not decode into the expected shape.
	#[error("invalid response from Serpex: {0}")]
	InvalidResponse(String),
}

impl SerpexError {
	/// HTTP status code for [`SerpexError::Api`] errors.
	pub fn status_code(&self) -> Option<u16> {
		match self {
			SerpexError::Api { status_code, .. } => Some(*status_code),
			SerpexError::Network(e) => e.status().map(|s| s.as_u16()),
			_ => None,
		}
	}

	/// Structured error detail for [`SerpexError::Api`] errors.
	pub fn details(&self) -> Option<&ApiErrorDetails> {
		match self {
			SerpexError::Api { details, .. } => details.as_ref(),
			_ => None,
		}
	}

	/// Retry-after hint in seconds, when the API sent one.
	pub fn retry_after(&self) -> Option<u64> {
		self.details().and_then(|d| d.retry_after)
	}

	/// True when the error was raised before any network call.
	pub fn is_validation(&self) -> bool {
		matches!(self, SerpexError::Validation(_))
	}
}

/// Input validation failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
	#[error("query parameter is required")]
	MissingQuery,

	#[error("query must be a non-empty string")]
	EmptyQuery,

	#[error("query too long ({length} UTF-16 code units, max {max})")]
	QueryTooLong { length: usize, max: usize },

	#[error("engine parameter is required (google, bing, duckduckgo, or brave)")]
	MissingEngine,

	#[error("URLs array is required and must contain at least one URL")]
	MissingUrls,

	#[error("maximum {max} URLs allowed per request, got {count}")]
	TooManyUrls { count: usize, max: usize },

	#[error("invalid URLs provided: {}", .0.join(", "))]
	InvalidUrls(Vec<String>),
}

/// Error payload returned by the API on failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorDetails {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub error: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub details: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub invalid_engines: Option<Vec<String>>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub supported_engines: Option<Vec<String>>,
	#[serde(
		default,
		rename = "retryAfter",
		skip_serializing_if = "Option::is_none"
	)]
	pub retry_after: Option<u64>,
	/// Fields this client does not model.
	#[serde(flatten)]
	pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ApiErrorDetails {
	/// Recovers detail from a parsed error body.
	///
	/// Returns `None` when the body is not a JSON object. When known fields
	/// have unexpected types, only a string `error` is lifted out and the rest
	/// of the object is kept in `extra`.
	pub fn from_json(value: serde_json::Value) -> Option<Self> {
		let serde_json::Value::Object(map) = value else {
			return None;
		};
		match serde_json::from_value(serde_json::Value::Object(map.clone())) {
			Ok(details) => Some(details),
			Err(_) => {
				let mut extra = map;
				let error = match extra.remove("error") {
					Some(serde_json::Value::String(message)) => Some(message),
					Some(other) => {
						extra.insert("error".to_string(), other);
						None
					}
					None => None,
				};
				Some(Self {
					error,
					extra,
					..Default::default()
				})
			}
		}
	}

	/// Detail synthesized when the error body was not JSON.
	pub fn from_status_text(status_text: impl Into<String>) -> Self {
		Self {
			error: Some(status_text.into()),
			..Default::default()
		}
	}
}
