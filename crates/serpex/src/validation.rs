// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Input validation run before any request is sent.

use reqwest::Url;

use crate::config::{SearchPolicy, MAX_EXTRACT_URLS, MAX_QUERY_LENGTH};
use crate::error::ValidationError;
use crate::types::SearchParams;

fn non_empty(value: &Option<String>) -> Option<&str> {
	value.as_deref().filter(|v| !v.is_empty())
}

/// Picks the query field the policy honours and validates it.
///
/// Checks run in order: presence, non-blank after trimming, then length of
/// the untrimmed value in UTF-16 code units.
pub fn resolve_query(params: &SearchParams, policy: SearchPolicy) -> Result<&str, ValidationError> {
	let query = match policy {
		SearchPolicy::Defaulted => non_empty(&params.q),
		SearchPolicy::EngineRequired => non_empty(&params.q).or_else(|| non_empty(&params.query)),
	}
	.ok_or(ValidationError::MissingQuery)?;

	validate_query(query)?;
	Ok(query)
}

/// Rejects blank or oversized queries.
///
/// Length is measured in UTF-16 code units, so characters outside the Basic
/// Multilingual Plane count twice.
pub fn validate_query(query: &str) -> Result<(), ValidationError> {
	if query.trim().is_empty() {
		return Err(ValidationError::EmptyQuery);
	}

	let length = query.encode_utf16().count();
	if length > MAX_QUERY_LENGTH {
		return Err(ValidationError::QueryTooLong {
			length,
			max: MAX_QUERY_LENGTH,
		});
	}

	Ok(())
}

/// Validates an extract URL list: 1..=10 entries, all absolute URLs.
///
/// Every malformed entry is reported, not just the first.
pub fn validate_urls(urls: &[String]) -> Result<(), ValidationError> {
	if urls.is_empty() {
		return Err(ValidationError::MissingUrls);
	}

	if urls.len() > MAX_EXTRACT_URLS {
		return Err(ValidationError::TooManyUrls {
			count: urls.len(),
			max: MAX_EXTRACT_URLS,
		});
	}

	let invalid: Vec<String> = urls
		.iter()
		.filter(|url| Url::parse(url).is_err())
		.cloned()
		.collect();

	if !invalid.is_empty() {
		return Err(ValidationError::InvalidUrls(invalid));
	}

	Ok(())
}
