// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! API key wrapper that keeps the credential out of logs.
//!
//! [`ApiKey`] renders as `[REDACTED]` through `Debug` and `Display`, so it is
//! safe to pass to `tracing` macros. The inner string is zeroized on drop and
//! only reachable through [`ApiKey::expose`].

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{Result, SerpexError};

/// The redaction placeholder used in all output.
pub const REDACTED: &str = "[REDACTED]";

/// A non-empty Serpex API key.
#[derive(Zeroize, ZeroizeOnDrop, Clone, PartialEq, Eq)]
pub struct ApiKey {
	inner: String,
}

impl ApiKey {
	/// Validates and wraps `key`.
	///
	/// Fails with [`SerpexError::Configuration`] when the key is empty.
	pub fn new(key: impl Into<String>) -> Result<Self> {
		let inner = key.into();
		if inner.is_empty() {
			return Err(SerpexError::Configuration(
				"API key is required and must be a non-empty string".to_string(),
			));
		}
		Ok(Self { inner })
	}

	/// Explicitly access the raw key.
	pub fn expose(&self) -> &str {
		&self.inner
	}

	/// Value for the `Authorization` header.
	pub(crate) fn bearer(&self) -> String {
		format!("Bearer {}", self.inner)
	}
}

impl fmt::Debug for ApiKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("ApiKey").field(&REDACTED).finish()
	}
}

impl fmt::Display for ApiKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(REDACTED)
	}
}

impl TryFrom<String> for ApiKey {
	type Error = SerpexError;

	fn try_from(value: String) -> Result<Self> {
		Self::new(value)
	}
}

impl TryFrom<&str> for ApiKey {
	type Error = SerpexError;

	fn try_from(value: &str) -> Result<Self> {
		Self::new(value)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn empty_key_is_rejected() {
		let result = ApiKey::new("");
		assert!(matches!(result, Err(SerpexError::Configuration(_))));
	}

	#[test]
	fn whitespace_key_is_accepted() {
		// Only emptiness is checked; the server decides what a valid key looks like.
		assert!(ApiKey::new(" ").is_ok());
	}

	#[test]
	fn expose_returns_inner_value() {
		let key = ApiKey::new("sk_live_123").unwrap();
		assert_eq!(key.expose(), "sk_live_123");
	}

	#[test]
	fn bearer_formats_authorization_value() {
		let key = ApiKey::new("sk_live_123").unwrap();
		assert_eq!(key.bearer(), "Bearer sk_live_123");
	}

	#[test]
	fn debug_and_display_are_redacted() {
		let key = ApiKey::new("super-secret-api-key").unwrap();
		assert_eq!(format!("{key}"), REDACTED);
		assert_eq!(format!("{key:?}"), "ApiKey(\"[REDACTED]\")");
	}

	#[test]
	fn try_from_validates() {
		assert!(ApiKey::try_from("").is_err());
		assert!(ApiKey::try_from("abc".to_string()).is_ok());
	}

	proptest! {
		/// Property: Debug output never contains the key.
		#[test]
		fn debug_never_contains_key(inner in "[a-zA-Z0-9_-]{3,64}") {
			prop_assume!(!inner.contains("REDACTED"));
			prop_assume!(!inner.contains("ApiKey"));

			let key = ApiKey::new(inner.clone()).unwrap();
			let debug_out = format!("{key:?}");
			let display_out = format!("{key}");
			prop_assert!(!debug_out.contains(&inner));
			prop_assert!(!display_out.contains(&inner));
		}

		/// Property: any non-empty string is accepted and round-trips through expose().
		#[test]
		fn non_empty_keys_roundtrip(inner in ".+") {
			let key = ApiKey::new(inner.clone()).unwrap();
			prop_assert_eq!(key.expose(), inner.as_str());
		}
	}
}
