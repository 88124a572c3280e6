// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Builds outgoing request parameters according to the client configuration.

use crate::config::{
	ClientConfig, EngineParam, SearchPolicy, DEFAULT_CATEGORY, DEFAULT_ENGINE, DEFAULT_FORMAT,
	DEFAULT_TIME_RANGE,
};
use crate::error::ValidationError;
use crate::params::RequestParams;
use crate::types::{ExtractParams, SearchParams};
use crate::validation::{resolve_query, validate_urls};

/// Engines chosen for a search.
#[derive(Debug, Clone, PartialEq, Eq)]
enum EngineSelection {
	Single(String),
	Many(Vec<String>),
}

impl EngineSelection {
	/// An explicit non-empty `engines` list wins over the scalar `engine`.
	fn from_params(params: &SearchParams) -> Option<Self> {
		if let Some(engines) = params.engines.as_ref().filter(|e| !e.is_empty()) {
			return Some(EngineSelection::Many(engines.clone()));
		}
		params
			.engine
			.as_deref()
			.filter(|e| !e.is_empty())
			.map(|e| EngineSelection::Single(e.to_string()))
	}

	fn apply(self, params: &mut RequestParams, engine_param: EngineParam) {
		match (self, engine_param) {
			(EngineSelection::Single(engine), EngineParam::Scalar) => {
				params.insert("engine", engine);
			}
			(EngineSelection::Single(engine), EngineParam::List) => {
				params.remove("engine");
				params.insert("engines", vec![engine]);
			}
			(EngineSelection::Many(engines), engine_param) => {
				if engine_param == EngineParam::List {
					params.remove("engine");
				}
				params.insert("engines", engines);
			}
		}
	}
}

fn non_empty_or<'a>(value: &'a Option<String>, default: &'a str) -> &'a str {
	value.as_deref().filter(|v| !v.is_empty()).unwrap_or(default)
}

/// Validates `params` and produces the query parameters for a search.
///
/// Returns the resolved query alongside the parameters.
pub fn build_search_request(
	params: &SearchParams,
	config: &ClientConfig,
) -> Result<(String, RequestParams), ValidationError> {
	let query = resolve_query(params, config.policy)?.to_string();

	let request = match config.policy {
		SearchPolicy::Defaulted => {
			let engines = EngineSelection::from_params(params)
				.unwrap_or_else(|| EngineSelection::Single(DEFAULT_ENGINE.to_string()));

			let mut request = RequestParams::new();
			request.insert("q", query.as_str());
			engines.apply(&mut request, config.engine_param);
			request.insert("category", non_empty_or(&params.category, DEFAULT_CATEGORY));
			request.insert(
				"time_range",
				non_empty_or(&params.time_range, DEFAULT_TIME_RANGE),
			);
			request.insert("format", non_empty_or(&params.format, DEFAULT_FORMAT));
			request
		}
		SearchPolicy::EngineRequired => {
			let engines = EngineSelection::from_params(params).ok_or(ValidationError::MissingEngine)?;

			let mut request = params.to_request_params();
			request.insert("q", query.as_str());
			engines.apply(&mut request, config.engine_param);
			request
		}
	};

	Ok((query, request))
}

/// Validates `params` and produces the JSON body for an extraction.
pub fn build_extract_request(params: &ExtractParams) -> Result<RequestParams, ValidationError> {
	validate_urls(&params.urls)?;

	let mut request = RequestParams::new();
	request.insert("urls", params.urls.clone());
	Ok(request)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::types::{Engine, TimeRange};

	fn pairs(request: &RequestParams) -> Vec<(String, String)> {
		request.to_query_pairs()
	}

	fn pair(k: &str, v: &str) -> (String, String) {
		(k.to_string(), v.to_string())
	}

	fn engine_required() -> ClientConfig {
		ClientConfig {
			policy: SearchPolicy::EngineRequired,
			..Default::default()
		}
	}

	#[test]
	fn defaulted_fills_in_defaults() {
		let (query, request) =
			build_search_request(&SearchParams::new("rust"), &ClientConfig::default()).unwrap();

		assert_eq!(query, "rust");
		assert_eq!(
			pairs(&request),
			vec![
				pair("q", "rust"),
				pair("engine", "auto"),
				pair("category", "web"),
				pair("time_range", "all"),
				pair("format", "json"),
			]
		);
	}

	#[test]
	fn defaulted_keeps_supplied_values() {
		let params = SearchParams::new("rust")
			.with_engine(Engine::Brave)
			.with_time_range(TimeRange::Month)
			.with_category("general")
			.with_format("rss");

		let (_, request) = build_search_request(&params, &ClientConfig::default()).unwrap();
		assert_eq!(
			pairs(&request),
			vec![
				pair("q", "rust"),
				pair("engine", "brave"),
				pair("category", "general"),
				pair("time_range", "month"),
				pair("format", "rss"),
			]
		);
	}

	#[test]
	fn defaulted_treats_empty_values_as_unset() {
		let params = SearchParams::new("rust").with_engine("").with_category("");
		let (_, request) = build_search_request(&params, &ClientConfig::default()).unwrap();
		assert_eq!(request.get("engine").and_then(|v| v.as_non_empty_str()), Some("auto"));
		assert_eq!(request.get("category").and_then(|v| v.as_non_empty_str()), Some("web"));
	}

	#[test]
	fn defaulted_drops_unrecognized_parameters() {
		let mut params = SearchParams::new("rust").with_param("custom", "x");
		params.language = Some("en".to_string());
		params.pageno = Some(3);

		let (_, request) = build_search_request(&params, &ClientConfig::default()).unwrap();
		assert!(!request.contains_key("custom"));
		assert!(!request.contains_key("language"));
		assert!(!request.contains_key("pageno"));
	}

	#[test]
	fn engine_required_rejects_missing_engine() {
		let result = build_search_request(&SearchParams::new("rust"), &engine_required());
		assert_eq!(result, Err(ValidationError::MissingEngine));
	}

	#[test]
	fn query_errors_win_over_engine_errors() {
		let result = build_search_request(&SearchParams::new("  "), &engine_required());
		assert_eq!(result, Err(ValidationError::EmptyQuery));
	}

	#[test]
	fn engine_required_passes_everything_through() {
		let mut params = SearchParams::new("rust")
			.with_engine(Engine::Google)
			.with_param("custom", "x");
		params.hl = Some("en".to_string());
		params.spellcheck = Some(true);

		let (_, request) = build_search_request(&params, &engine_required()).unwrap();
		assert_eq!(
			pairs(&request),
			vec![
				pair("q", "rust"),
				pair("engine", "google"),
				pair("hl", "en"),
				pair("spellcheck", "true"),
				pair("custom", "x"),
			]
		);
	}

	#[test]
	fn engine_required_injects_resolved_alias_as_q() {
		let params = SearchParams {
			query: Some("from alias".to_string()),
			engine: Some("bing".to_string()),
			..Default::default()
		};

		let (query, request) = build_search_request(&params, &engine_required()).unwrap();
		assert_eq!(query, "from alias");
		assert_eq!(
			request.get("q").and_then(|v| v.as_non_empty_str()),
			Some("from alias")
		);
	}

	#[test]
	fn list_engine_param_sends_engines() {
		let config = ClientConfig {
			engine_param: EngineParam::List,
			..Default::default()
		};

		let (_, request) =
			build_search_request(&SearchParams::new("rust").with_engine("google"), &config).unwrap();
		assert!(!request.contains_key("engine"));
		assert_eq!(pairs(&request)[1], pair("engines", "google"));
	}

	#[test]
	fn explicit_engine_list_repeats_in_order() {
		let params = SearchParams::new("rust").with_engines(["google", "bing", "brave"]);
		let (_, request) = build_search_request(&params, &engine_required()).unwrap();

		let engines: Vec<String> = pairs(&request)
			.into_iter()
			.filter(|(k, _)| k == "engines")
			.map(|(_, v)| v)
			.collect();
		assert_eq!(engines, vec!["google", "bing", "brave"]);
	}

	#[test]
	fn extract_request_wraps_urls() {
		let request =
			build_extract_request(&ExtractParams::new(["https://a.test", "https://b.test"])).unwrap();
		assert_eq!(
			serde_json::to_value(&request).unwrap(),
			serde_json::json!({"urls": ["https://a.test", "https://b.test"]})
		);
	}

	#[test]
	fn extract_request_rejects_bad_urls() {
		let result = build_extract_request(&ExtractParams::new(["not a url"]));
		assert_eq!(
			result,
			Err(ValidationError::InvalidUrls(vec!["not a url".to_string()]))
		);
	}
}
