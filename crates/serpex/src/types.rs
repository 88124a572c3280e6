// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Types for the Serpex API.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::params::{ParamValue, RequestParams};

/// Upstream search engines known to the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Engine {
	Auto,
	Google,
	Bing,
	#[serde(rename = "duckduckgo")]
	DuckDuckGo,
	Brave,
	Yahoo,
	Yandex,
}

impl Engine {
	pub fn as_str(&self) -> &'static str {
		match self {
			Engine::Auto => "auto",
			Engine::Google => "google",
			Engine::Bing => "bing",
			Engine::DuckDuckGo => "duckduckgo",
			Engine::Brave => "brave",
			Engine::Yahoo => "yahoo",
			Engine::Yandex => "yandex",
		}
	}
}

/// Recency filter for search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeRange {
	All,
	Day,
	Week,
	Month,
	Year,
}

impl TimeRange {
	pub fn as_str(&self) -> &'static str {
		match self {
			TimeRange::All => "all",
			TimeRange::Day => "day",
			TimeRange::Week => "week",
			TimeRange::Month => "month",
			TimeRange::Year => "year",
		}
	}
}

/// Response body format requested from the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
	Json,
	Csv,
	Rss,
}

impl ResponseFormat {
	pub fn as_str(&self) -> &'static str {
		match self {
			ResponseFormat::Json => "json",
			ResponseFormat::Csv => "csv",
			ResponseFormat::Rss => "rss",
		}
	}
}

macro_rules! impl_wire_name {
	($($ty:ty),*) => {
		$(
			impl fmt::Display for $ty {
				fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
					f.write_str(self.as_str())
				}
			}

			impl From<$ty> for String {
				fn from(value: $ty) -> Self {
					value.as_str().to_string()
				}
			}
		)*
	};
}

impl_wire_name!(Engine, TimeRange, ResponseFormat);

/// Parameters for a search request.
///
/// `None` fields are never sent. Which fields are sent at all depends on the
/// client's [`SearchPolicy`](crate::SearchPolicy).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchParams {
	pub q: Option<String>,
	/// Alias for `q`, honoured by [`SearchPolicy::EngineRequired`](crate::SearchPolicy::EngineRequired).
	pub query: Option<String>,
	pub engine: Option<String>,
	pub engines: Option<Vec<String>>,
	pub category: Option<String>,
	pub time_range: Option<String>,
	pub format: Option<String>,
	pub language: Option<String>,
	pub pageno: Option<u32>,
	pub page: Option<u32>,
	pub safesearch: Option<u32>,
	/// Google interface language.
	pub hl: Option<String>,
	/// Google language restrict.
	pub lr: Option<String>,
	/// Google country restrict.
	pub cr: Option<String>,
	/// Bing market.
	pub mkt: Option<String>,
	/// DuckDuckGo region.
	pub region: Option<String>,
	pub spellcheck: Option<bool>,
	pub ui_lang: Option<String>,
	pub country: Option<String>,
	/// Sent as `maxResults`.
	pub max_results: Option<u32>,
	/// Additional parameters forwarded verbatim after the recognized ones.
	pub extra: RequestParams,
}

impl SearchParams {
	/// Creates search parameters for `q`.
	pub fn new(q: impl Into<String>) -> Self {
		Self {
			q: Some(q.into()),
			..Default::default()
		}
	}

	pub fn with_engine(mut self, engine: impl Into<String>) -> Self {
		self.engine = Some(engine.into());
		self
	}

	pub fn with_engines<I, S>(mut self, engines: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.engines = Some(engines.into_iter().map(Into::into).collect());
		self
	}

	pub fn with_category(mut self, category: impl Into<String>) -> Self {
		self.category = Some(category.into());
		self
	}

	pub fn with_time_range(mut self, time_range: impl Into<String>) -> Self {
		self.time_range = Some(time_range.into());
		self
	}

	pub fn with_format(mut self, format: impl Into<String>) -> Self {
		self.format = Some(format.into());
		self
	}

	/// Adds a parameter that has no dedicated field.
	pub fn with_param(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
		self.extra.insert(key, value);
		self
	}

	/// Every set parameter, recognized fields first, then `extra`.
	pub fn to_request_params(&self) -> RequestParams {
		let mut params = RequestParams::new();
		params.insert_opt("q", self.q.clone());
		params.insert_opt("query", self.query.clone());
		params.insert_opt("engine", self.engine.clone());
		params.insert_opt("engines", self.engines.clone());
		params.insert_opt("category", self.category.clone());
		params.insert_opt("time_range", self.time_range.clone());
		params.insert_opt("format", self.format.clone());
		params.insert_opt("language", self.language.clone());
		params.insert_opt("pageno", self.pageno);
		params.insert_opt("page", self.page);
		params.insert_opt("safesearch", self.safesearch);
		params.insert_opt("hl", self.hl.clone());
		params.insert_opt("lr", self.lr.clone());
		params.insert_opt("cr", self.cr.clone());
		params.insert_opt("mkt", self.mkt.clone());
		params.insert_opt("region", self.region.clone());
		params.insert_opt("spellcheck", self.spellcheck);
		params.insert_opt("ui_lang", self.ui_lang.clone());
		params.insert_opt("country", self.country.clone());
		params.insert_opt("maxResults", self.max_results);
		for (key, value) in self.extra.iter() {
			params.insert(key, value.clone());
		}
		params
	}
}

/// Response from a search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
	pub metadata: SearchMetadata,
	pub id: String,
	pub query: String,
	#[serde(default)]
	pub engines: Vec<String>,
	#[serde(default)]
	pub results: Vec<SearchResult>,
	#[serde(default)]
	pub answers: Vec<serde_json::Value>,
	#[serde(default)]
	pub corrections: Vec<String>,
	#[serde(default)]
	pub infoboxes: Vec<serde_json::Value>,
	#[serde(default)]
	pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchMetadata {
	pub number_of_results: u64,
	/// Milliseconds.
	pub response_time: f64,
	pub timestamp: String,
	pub credits_used: u64,
}

/// A single search result item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
	pub title: String,
	pub url: String,
	#[serde(default)]
	pub snippet: String,
	/// 1-based rank within the response.
	pub position: u32,
	#[serde(default)]
	pub engine: String,
	#[serde(default)]
	pub published_date: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub img_src: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub duration: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub score: Option<f64>,
}

/// Parameters for a content extraction request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractParams {
	pub urls: Vec<String>,
}

impl ExtractParams {
	pub fn new<I, S>(urls: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			urls: urls.into_iter().map(Into::into).collect(),
		}
	}
}

/// Response from a content extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractResponse {
	#[serde(default)]
	pub success: Option<bool>,
	#[serde(default)]
	pub results: Vec<ExtractResult>,
	#[serde(default)]
	pub metadata: Option<ExtractMetadata>,
	/// Fields this client does not model.
	#[serde(flatten)]
	pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Extraction outcome for one URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractResult {
	pub url: String,
	#[serde(default)]
	pub success: bool,
	#[serde(default)]
	pub markdown: Option<String>,
	#[serde(default)]
	pub error: Option<String>,
	#[serde(default)]
	pub status_code: Option<u16>,
	/// Milliseconds.
	#[serde(default)]
	pub crawl_time: Option<f64>,
	#[serde(flatten)]
	pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractMetadata {
	#[serde(default)]
	pub total_urls: Option<u32>,
	#[serde(default)]
	pub successful: Option<u32>,
	#[serde(default)]
	pub failed: Option<u32>,
	#[serde(default)]
	pub credits_used: Option<u64>,
	#[serde(default)]
	pub response_time: Option<f64>,
	#[serde(default)]
	pub timestamp: Option<String>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn wire_names_match_api() {
		assert_eq!(Engine::DuckDuckGo.to_string(), "duckduckgo");
		assert_eq!(String::from(Engine::Auto), "auto");
		assert_eq!(TimeRange::Week.as_str(), "week");
		assert_eq!(ResponseFormat::Rss.to_string(), "rss");
		assert_eq!(
			serde_json::to_string(&Engine::DuckDuckGo).unwrap(),
			"\"duckduckgo\""
		);
	}

	#[test]
	fn request_params_follow_field_order_then_extra() {
		let params = SearchParams::new("rust")
			.with_engine(Engine::Google)
			.with_time_range(TimeRange::Day)
			.with_param("safesearch_strict", true);

		let pairs = params.to_request_params().to_query_pairs();
		let keys: Vec<&str> = pairs.iter().map(|(k, _)| k.as_str()).collect();
		assert_eq!(keys, vec!["q", "engine", "time_range", "safesearch_strict"]);
	}

	#[test]
	fn max_results_uses_camel_case_key() {
		let params = SearchParams {
			q: Some("rust".to_string()),
			max_results: Some(20),
			..Default::default()
		};
		let request = params.to_request_params();
		assert_eq!(request.get("maxResults"), Some(&ParamValue::Integer(20)));
	}

	#[test]
	fn search_response_tolerates_missing_auxiliary_arrays() {
		let body = serde_json::json!({
			"metadata": {
				"number_of_results": 1,
				"response_time": 412.5,
				"timestamp": "2025-01-01T00:00:00Z",
				"credits_used": 1
			},
			"id": "res_123",
			"query": "rust",
			"engines": ["google"],
			"results": [{
				"title": "Rust",
				"url": "https://www.rust-lang.org/",
				"snippet": "A language empowering everyone",
				"position": 1,
				"engine": "google",
				"published_date": null
			}]
		});

		let response: SearchResponse = serde_json::from_value(body).unwrap();
		assert_eq!(response.results.len(), 1);
		assert_eq!(response.results[0].position, 1);
		assert!(response.results[0].published_date.is_none());
		assert!(response.answers.is_empty());
		assert!(response.suggestions.is_empty());
	}

	#[test]
	fn extract_response_keeps_unknown_fields() {
		let body = serde_json::json!({
			"success": true,
			"results": [{"url": "https://a.test", "success": true, "markdown": "# A"}],
			"job_id": "job_1"
		});

		let response: ExtractResponse = serde_json::from_value(body).unwrap();
		assert_eq!(response.success, Some(true));
		assert_eq!(response.results[0].markdown.as_deref(), Some("# A"));
		assert!(response.extra.contains_key("job_id"));
	}

	#[test]
	fn extract_params_collects_urls() {
		let params = ExtractParams::new(["https://a.test", "https://b.test"]);
		assert_eq!(params.urls.len(), 2);
	}
}
