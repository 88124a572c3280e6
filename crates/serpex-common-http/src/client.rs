// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! HTTP client construction with a consistent User-Agent header.

use reqwest::{Client, ClientBuilder};
use tracing::debug;

const SDK_NAME: &str = "serpex-rust";
const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Creates a new HTTP client with the standard Serpex User-Agent header.
///
/// No request timeout is configured; callers that need one should start
/// from [`builder`] instead.
pub fn new_client() -> Result<Client, reqwest::Error> {
	builder().build()
}

/// Creates a new HTTP client builder with the standard Serpex User-Agent header.
///
/// # Example
/// ```ignore
/// let client = serpex_common_http::builder()
///     .timeout(Duration::from_secs(30))
///     .build()?;
/// ```
pub fn builder() -> ClientBuilder {
	builder_with_user_agent(user_agent())
}

/// Creates a new HTTP client builder with a custom User-Agent header.
pub fn builder_with_user_agent(user_agent: impl Into<String>) -> ClientBuilder {
	let user_agent = user_agent.into();
	debug!(user_agent = %user_agent, "Configuring HTTP client");
	Client::builder().user_agent(user_agent)
}

/// Returns the standard Serpex User-Agent string.
///
/// Format: `serpex-rust/{version} ({platform})`
pub fn user_agent() -> String {
	format!("{SDK_NAME}/{SDK_VERSION} ({})", platform())
}

/// Platform string in `{os}-{arch}` format, e.g. "linux-x86_64".
pub fn platform() -> String {
	format!("{}-{}", std::env::consts::OS, std::env::consts::ARCH)
}
