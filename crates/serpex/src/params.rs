// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Ordered request parameters and their wire encodings.
//!
//! GET requests flatten [`RequestParams`] into query pairs, repeating the key
//! for list values. POST requests serialize the same mapping as a JSON object.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// A single parameter value.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum ParamValue {
	Text(String),
	Integer(i64),
	Bool(bool),
	List(Vec<String>),
}

impl ParamValue {
	/// Query-string values for this parameter, one per repeated key.
	pub fn query_values(&self) -> Vec<String> {
		match self {
			ParamValue::Text(s) => vec![s.clone()],
			ParamValue::Integer(n) => vec![n.to_string()],
			ParamValue::Bool(b) => vec![b.to_string()],
			ParamValue::List(items) => items.clone(),
		}
	}

	/// Returns the text if this is a non-empty [`ParamValue::Text`].
	pub fn as_non_empty_str(&self) -> Option<&str> {
		match self {
			ParamValue::Text(s) if !s.is_empty() => Some(s),
			_ => None,
		}
	}
}

impl From<String> for ParamValue {
	fn from(value: String) -> Self {
		ParamValue::Text(value)
	}
}

impl From<&str> for ParamValue {
	fn from(value: &str) -> Self {
		ParamValue::Text(value.to_string())
	}
}

impl From<i64> for ParamValue {
	fn from(value: i64) -> Self {
		ParamValue::Integer(value)
	}
}

impl From<u32> for ParamValue {
	fn from(value: u32) -> Self {
		ParamValue::Integer(i64::from(value))
	}
}

impl From<bool> for ParamValue {
	fn from(value: bool) -> Self {
		ParamValue::Bool(value)
	}
}

impl From<Vec<String>> for ParamValue {
	fn from(value: Vec<String>) -> Self {
		ParamValue::List(value)
	}
}

impl From<Vec<&str>> for ParamValue {
	fn from(value: Vec<&str>) -> Self {
		ParamValue::List(value.into_iter().map(str::to_string).collect())
	}
}

/// Insertion-ordered parameter mapping.
///
/// Re-inserting an existing key replaces its value in place, so the key keeps
/// its original position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestParams {
	entries: Vec<(String, ParamValue)>,
}

impl RequestParams {
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets `key` to `value`.
	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
		let key = key.into();
		let value = value.into();
		match self.entries.iter_mut().find(|(k, _)| *k == key) {
			Some((_, existing)) => *existing = value,
			None => self.entries.push((key, value)),
		}
	}

	/// Sets `key` when `value` is present; `None` leaves the mapping untouched.
	pub fn insert_opt<V: Into<ParamValue>>(&mut self, key: impl Into<String>, value: Option<V>) {
		if let Some(value) = value {
			self.insert(key, value);
		}
	}

	/// Removes `key`, returning its value.
	pub fn remove(&mut self, key: &str) -> Option<ParamValue> {
		let index = self.entries.iter().position(|(k, _)| k == key)?;
		Some(self.entries.remove(index).1)
	}

	pub fn get(&self, key: &str) -> Option<&ParamValue> {
		self
			.entries
			.iter()
			.find(|(k, _)| k == key)
			.map(|(_, v)| v)
	}

	pub fn contains_key(&self, key: &str) -> bool {
		self.get(key).is_some()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
		self.entries.iter().map(|(k, v)| (k.as_str(), v))
	}

	/// Flattens the mapping into query pairs in insertion order.
	pub fn to_query_pairs(&self) -> Vec<(String, String)> {
		self
			.entries
			.iter()
			.flat_map(|(key, value)| {
				value
					.query_values()
					.into_iter()
					.map(move |v| (key.clone(), v))
			})
			.collect()
	}
}

impl Serialize for RequestParams {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		let mut map = serializer.serialize_map(Some(self.entries.len()))?;
		for (key, value) in &self.entries {
			map.serialize_entry(key, value)?;
		}
		map.end()
	}
}

impl<K, V> FromIterator<(K, V)> for RequestParams
where
	K: Into<String>,
	V: Into<ParamValue>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut params = RequestParams::new();
		for (key, value) in iter {
			params.insert(key, value);
		}
		params
	}
}
