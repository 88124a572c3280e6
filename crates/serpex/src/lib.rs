// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Serpex SERP API client.
//!
//! This crate provides a typed Rust client for the Serpex search API,
//! encapsulating authentication, parameter validation, HTTP communication
//! and response parsing.
//!
//! Two search policies are supported through [`SearchPolicy`]:
//!
//! - [`SearchPolicy::Defaulted`] sends a curated set of parameters and fills
//!   in defaults (`engine=auto`, `category=web`, `time_range=all`,
//!   `format=json`).
//! - [`SearchPolicy::EngineRequired`] forwards every parameter and requires an
//!   explicit engine.
//!
//! The client never retries. API failures are returned as
//! [`SerpexError::Api`] with the status code and any recovered detail, so
//! callers can act on hints such as [`SerpexError::retry_after`].

pub mod api_key;
pub mod client;
pub mod config;
pub mod error;
pub mod params;
pub mod request;
pub mod types;
pub mod validation;

pub use api_key::ApiKey;
pub use client::{SerpexClient, SerpexClientBuilder};
pub use config::{
	ClientConfig, EngineParam, SearchPolicy, DEFAULT_BASE_URL, MAX_EXTRACT_URLS, MAX_QUERY_LENGTH,
};
pub use error::{ApiErrorDetails, Result, SerpexError, ValidationError};
pub use params::{ParamValue, RequestParams};
pub use types::{
	Engine, ExtractMetadata, ExtractParams, ExtractResponse, ExtractResult, ResponseFormat,
	SearchMetadata, SearchParams, SearchResponse, SearchResult, TimeRange,
};
