// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Shared HTTP utilities for the Serpex SDK.
//!
//! This crate provides:
//! - A pre-configured HTTP client builder with a consistent User-Agent header
//! - Helpers for describing HTTP statuses when a server sends no usable body

mod client;
mod status;

pub use client::{builder, builder_with_user_agent, new_client, platform, user_agent};
pub use status::{status_text, FALLBACK_STATUS_TEXT};
