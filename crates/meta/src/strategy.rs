//! Dispatch strategy selection for name-keyed queries.
//!
//! Value-keyed queries always binary search the by-value view; only name
//! lookups choose between a linear scan, a binary search over the by-name
//! view, and a probe into a collision-free hash layout.

use thiserror::Error;

/// Default entry count from which hash dispatch is used.
pub const DEFAULT_HASH_THRESHOLD: usize = 32;
/// Default entry count from which binary search replaces a linear scan.
pub const DEFAULT_BINARY_THRESHOLD: usize = 8;

/// Environment variable overriding the hash threshold for a whole crate.
pub const HASH_THRESHOLD_ENV: &str = "ENUMTAB_HASH_THRESHOLD";
/// Environment variable overriding the binary threshold for a whole crate.
pub const BINARY_THRESHOLD_ENV: &str = "ENUMTAB_BINARY_THRESHOLD";

/// Name lookup algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
	/// Scan entries in declaration order.
	Linear,
	/// Binary search the by-name view.
	Binary,
	/// Probe the hash bucket table.
	Hash,
}

impl std::fmt::Display for Strategy {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Strategy::Linear => write!(f, "linear"),
			Strategy::Binary => write!(f, "binary"),
			Strategy::Hash => write!(f, "hash"),
		}
	}
}

/// Picks the name lookup algorithm for `n` entries.
///
/// A collision rules hashing out regardless of `n`; otherwise the hash
/// threshold is checked before the binary one.
pub const fn select_strategy(
	n: usize,
	has_collision: bool,
	hash_threshold: usize,
	binary_threshold: usize,
) -> Strategy {
	if !has_collision && n >= hash_threshold {
		Strategy::Hash
	} else if n >= binary_threshold {
		Strategy::Binary
	} else {
		Strategy::Linear
	}
}

/// Errors from reading dispatch thresholds.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
	/// A threshold was not a non-negative integer.
	#[error("invalid value {value:?} for {key}: expected a non-negative integer")]
	InvalidThreshold {
		/// Setting name.
		key: &'static str,
		/// Rejected text.
		value: String,
	},
}

/// Thresholds steering [`select_strategy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchConfig {
	/// Entry count from which hash dispatch is used.
	pub hash_threshold: usize,
	/// Entry count from which binary search is used.
	pub binary_threshold: usize,
}

impl Default for DispatchConfig {
	fn default() -> Self {
		Self::DEFAULT
	}
}

impl DispatchConfig {
	/// Built-in thresholds.
	pub const DEFAULT: Self = Self {
		hash_threshold: DEFAULT_HASH_THRESHOLD,
		binary_threshold: DEFAULT_BINARY_THRESHOLD,
	};

	/// Applies overrides found through `lookup` on top of `self`.
	///
	/// `lookup` maps a setting name to its raw text; the derive macro passes
	/// an environment reader, tests pass a closure.
	pub fn with_overrides(
		self,
		lookup: impl Fn(&'static str) -> Option<String>,
	) -> Result<Self, ConfigError> {
		let mut config = self;
		if let Some(raw) = lookup(HASH_THRESHOLD_ENV) {
			config.hash_threshold = parse_threshold(HASH_THRESHOLD_ENV, &raw)?;
		}
		if let Some(raw) = lookup(BINARY_THRESHOLD_ENV) {
			config.binary_threshold = parse_threshold(BINARY_THRESHOLD_ENV, &raw)?;
		}
		Ok(config)
	}

	/// Defaults overridden by the process environment.
	pub fn from_env() -> Result<Self, ConfigError> {
		Self::DEFAULT.with_overrides(|key| std::env::var(key).ok())
	}

	/// Selects the strategy for `n` entries under these thresholds.
	pub const fn select(&self, n: usize, has_collision: bool) -> Strategy {
		select_strategy(n, has_collision, self.hash_threshold, self.binary_threshold)
	}
}

fn parse_threshold(key: &'static str, raw: &str) -> Result<usize, ConfigError> {
	raw.trim().parse().map_err(|_| ConfigError::InvalidThreshold {
		key,
		value: raw.to_owned(),
	})
}
