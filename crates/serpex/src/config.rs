// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Client configuration: endpoints, limits, and search policy.

use serde::{Deserialize, Serialize};

/// Production API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.serpex.dev";
/// Search endpoint path.
pub const SEARCH_ENDPOINT: &str = "/api/search";
/// Content extraction endpoint path.
pub const EXTRACT_ENDPOINT: &str = "/api/crawl";

/// Maximum query length in characters, measured before trimming.
pub const MAX_QUERY_LENGTH: usize = 500;
/// Maximum number of URLs per extract request.
pub const MAX_EXTRACT_URLS: usize = 10;

pub const DEFAULT_ENGINE: &str = "auto";
pub const DEFAULT_CATEGORY: &str = "web";
pub const DEFAULT_TIME_RANGE: &str = "all";
pub const DEFAULT_FORMAT: &str = "json";

/// How `search` validates input and shapes the outgoing parameters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchPolicy {
	/// Only `q` is read. Sends a curated subset of parameters and fills in
	/// defaults for engine, category, time range and format.
	#[default]
	Defaulted,
	/// `q` or `query` is read (first non-empty wins). Every supplied parameter
	/// is passed through and an engine must be given explicitly.
	EngineRequired,
}

/// Wire name used for the selected engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineParam {
	/// `engine=<name>`
	#[default]
	Scalar,
	/// `engines=<name>`, repeated for each engine.
	List,
}

impl EngineParam {
	pub fn key(&self) -> &'static str {
		match self {
			EngineParam::Scalar => "engine",
			EngineParam::List => "engines",
		}
	}
}

/// Behavioural configuration for the client.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
	pub policy: SearchPolicy,
	pub engine_param: EngineParam,
}

/// Strips exactly one trailing slash from `base_url`.
pub fn normalize_base_url(base_url: &str) -> String {
	base_url.strip_suffix('/').unwrap_or(base_url).to_string()
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn defaults_match_production_behaviour() {
		let config = ClientConfig::default();
		assert_eq!(config.policy, SearchPolicy::Defaulted);
		assert_eq!(config.engine_param, EngineParam::Scalar);
	}

	#[test]
	fn engine_param_keys() {
		assert_eq!(EngineParam::Scalar.key(), "engine");
		assert_eq!(EngineParam::List.key(), "engines");
	}

	#[test]
	fn strips_exactly_one_slash() {
		assert_eq!(normalize_base_url("https://x.test/"), "https://x.test");
		assert_eq!(normalize_base_url("https://x.test//"), "https://x.test/");
		assert_eq!(normalize_base_url("https://x.test"), "https://x.test");
		assert_eq!(normalize_base_url(""), "");
	}

	#[test]
	fn config_deserializes_from_snake_case() {
		let config: ClientConfig =
			serde_json::from_str(r#"{"policy":"engine_required","engine_param":"list"}"#).unwrap();
		assert_eq!(config.policy, SearchPolicy::EngineRequired);
		assert_eq!(config.engine_param, EngineParam::List);
	}

	proptest! {
		/// Property: normalization removes at most one character, and only a slash.
		#[test]
		fn normalization_removes_at_most_one_slash(base in "https://[a-z]{1,10}\\.test/{0,3}") {
			let normalized = normalize_base_url(&base);
			if base.ends_with('/') {
				prop_assert_eq!(normalized.len(), base.len() - 1);
			} else {
				prop_assert_eq!(&normalized, &base);
			}
			prop_assert!(base.starts_with(&normalized));
		}
	}
}
