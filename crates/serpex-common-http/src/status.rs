// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

use reqwest::StatusCode;

/// Message used when a status code has no canonical reason phrase.
pub const FALLBACK_STATUS_TEXT: &str = "API request failed";

/// Returns the reason phrase for `status`, e.g. "Internal Server Error".
///
/// Non-standard codes have no registered phrase and map to
/// [`FALLBACK_STATUS_TEXT`].
pub fn status_text(status: StatusCode) -> String {
	status
		.canonical_reason()
		.unwrap_or(FALLBACK_STATUS_TEXT)
		.to_string()
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn known_statuses_use_reason_phrase() {
		assert_eq!(status_text(StatusCode::INTERNAL_SERVER_ERROR), "Internal Server Error");
		assert_eq!(status_text(StatusCode::TOO_MANY_REQUESTS), "Too Many Requests");
		assert_eq!(status_text(StatusCode::NOT_FOUND), "Not Found");
	}

	#[test]
	fn unregistered_status_falls_back() {
		let status = StatusCode::from_u16(599).unwrap();
		assert_eq!(status_text(status), FALLBACK_STATUS_TEXT);
	}

	proptest! {
		/// Property: every valid status code yields a non-empty message.
		#[test]
		fn status_text_is_never_empty(code in 100u16..1000) {
			let status = StatusCode::from_u16(code).unwrap();
			prop_assert!(!status_text(status).is_empty());
		}
	}
}
