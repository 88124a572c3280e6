// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Example: run a search and print the results.
//!
//! Run with:
//!   SERPEX_API_KEY=sk_... cargo run --example search -p serpex -- "rust async"

use serpex::{SearchParams, SerpexClient, SerpexError, TimeRange};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("serpex=debug")),
		)
		.init();

	let api_key =
		std::env::var("SERPEX_API_KEY").expect("SERPEX_API_KEY environment variable required");
	let base_url = std::env::var("SERPEX_BASE_URL")
		.unwrap_or_else(|_| serpex::DEFAULT_BASE_URL.to_string());
	let query = std::env::args()
		.nth(1)
		.unwrap_or_else(|| "rust programming language".to_string());

	println!("Searching {base_url} for {query:?}...");

	let client = SerpexClient::with_base_url(api_key, base_url)?;
	let params = SearchParams::new(query).with_time_range(TimeRange::All);

	match client.search(&params).await {
		Ok(response) => {
			println!("  ID: {}", response.id);
			println!("  Engines: {}", response.engines.join(", "));
			println!("  Credits used: {}", response.metadata.credits_used);
			println!("  Response time: {}ms", response.metadata.response_time);
			for result in &response.results {
				println!("{:>3}. {}\n     {}", result.position, result.title, result.url);
			}
		}
		Err(SerpexError::Api {
			message,
			status_code,
			details,
		}) => {
			eprintln!("API error {status_code}: {message}");
			if let Some(details) = details {
				eprintln!("Details: {}", serde_json::to_string_pretty(&details)?);
			}
		}
		Err(e) => return Err(e.into()),
	}

	Ok(())
}
