//! Entry sets assembled at runtime.
//!
//! [`EntrySet`] answers the same queries as a derived [`EnumMeta`] for
//! entries that only exist at runtime: plugin-registered names, decoded
//! schemas, test fixtures. Derived views are computed on first use.
//!
//! [`EnumMeta`]: crate::EnumMeta

use std::sync::OnceLock;

use enumtab_meta::collision::{CollisionReport, analyze_collisions, hash_buckets};
use enumtab_meta::entry::{EnumEntry, MAX_ENTRIES};
use enumtab_meta::order::{by_name_vec, by_value_vec, value_lower_bound};
use enumtab_meta::strategy::{DispatchConfig, Strategy};
use enumtab_meta::unique::unique_by_value_vec;
use thiserror::Error;

use crate::Enumerate;
use crate::dispatch::{find_name_in, find_value_in};
use crate::fingerprint::fingerprint;
use crate::json::entries_json;
use crate::query::Order;

/// Errors from assembling an [`EntrySet`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EntrySetError {
	/// Entry positions are stored as `u16`.
	#[error("entry set holds {len} entries; at most {MAX_ENTRIES} are supported")]
	TooManyEntries {
		/// Rejected entry count.
		len: usize,
	},
}

struct Layout {
	report: CollisionReport,
	strategy: Strategy,
	buckets: Vec<u16>,
}

/// An owned entry set with lazily derived views.
pub struct EntrySet {
	entries: Vec<EnumEntry>,
	config: DispatchConfig,
	by_value: OnceLock<Vec<u16>>,
	by_name: OnceLock<Vec<u16>>,
	unique: OnceLock<Vec<u16>>,
	layout: OnceLock<Layout>,
}

impl EntrySet {
	/// Wraps `entries` under the default thresholds.
	pub fn new(entries: impl Into<Vec<EnumEntry>>) -> Result<Self, EntrySetError> {
		Self::with_config(entries, DispatchConfig::default())
	}

	/// Wraps `entries` under `config`.
	pub fn with_config(
		entries: impl Into<Vec<EnumEntry>>,
		config: DispatchConfig,
	) -> Result<Self, EntrySetError> {
		let entries = entries.into();
		if entries.len() > MAX_ENTRIES {
			return Err(EntrySetError::TooManyEntries { len: entries.len() });
		}
		Ok(Self {
			entries,
			config,
			by_value: OnceLock::new(),
			by_name: OnceLock::new(),
			unique: OnceLock::new(),
			layout: OnceLock::new(),
		})
	}

	/// Copies a derived enum's entries, views and name dispatch.
	///
	/// The strategy and bucket table are the ones the derive chose, so
	/// per-enum threshold overrides carry over.
	pub fn of<E: Enumerate>() -> Self {
		let meta = &E::META;
		let names: Vec<&str> = meta.entries.iter().map(|e| e.name).collect();
		let layout = Layout {
			report: analyze_collisions(&names),
			strategy: meta.dispatch.strategy,
			buckets: meta.dispatch.buckets.to_vec(),
		};
		Self {
			entries: meta.entries.to_vec(),
			config: DispatchConfig::default(),
			by_value: OnceLock::from(meta.by_value.to_vec()),
			by_name: OnceLock::from(meta.by_name.to_vec()),
			unique: OnceLock::from(meta.unique.to_vec()),
			layout: OnceLock::from(layout),
		}
	}

	/// Entries in declaration order.
	pub fn entries(&self) -> &[EnumEntry] {
		&self.entries
	}

	/// Number of entries, aliases included.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns true if there are no entries.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Entry positions sorted by value, declaration order on ties.
	pub fn by_value(&self) -> &[u16] {
		self.by_value.get_or_init(|| by_value_vec(&self.entries))
	}

	/// Entry positions sorted by name.
	pub fn by_name(&self) -> &[u16] {
		self.by_name.get_or_init(|| by_name_vec(&self.entries))
	}

	/// First-declared position of each distinct value, sorted by value.
	pub fn unique(&self) -> &[u16] {
		self.unique.get_or_init(|| unique_by_value_vec(&self.entries))
	}

	/// Number of distinct values.
	pub fn unique_count(&self) -> usize {
		self.unique().len()
	}

	fn layout(&self) -> &Layout {
		self.layout.get_or_init(|| {
			let names: Vec<&str> = self.entries.iter().map(|e| e.name).collect();
			let report = analyze_collisions(&names);
			if let Some((a, b)) = report.first_collision {
				tracing::debug!(
					first = names[a],
					second = names[b],
					resolved = !report.has_collision,
					seed = report.seed,
					"name hash collision"
				);
			}
			let strategy = self.config.select(names.len(), report.has_collision);
			let buckets = match strategy {
				Strategy::Hash => hash_buckets(&names, report.seed, report.bucket_count),
				Strategy::Linear | Strategy::Binary => Vec::new(),
			};
			tracing::debug!(len = names.len(), %strategy, "selected name dispatch");
			Layout {
				report,
				strategy,
				buckets,
			}
		})
	}

	/// Name lookup algorithm in use.
	pub fn strategy(&self) -> Strategy {
		self.layout().strategy
	}

	/// Outcome of the name-hash collision analysis.
	pub fn collision_report(&self) -> CollisionReport {
		self.layout().report
	}

	/// Position of the first-declared entry named `name`.
	pub fn find_name(&self, name: &str) -> Option<usize> {
		let layout = self.layout();
		find_name_in(
			&self.entries,
			self.by_name(),
			layout.strategy,
			layout.report.seed,
			&layout.buckets,
			name,
		)
	}

	/// Position of the first-declared entry carrying `value`.
	pub fn find_value(&self, value: i128) -> Option<usize> {
		find_value_in(&self.entries, self.by_value(), value)
	}

	/// Value of the entry named `name`.
	pub fn value_of(&self, name: &str) -> Option<i128> {
		self.find_name(name).map(|i| self.entries[i].value)
	}

	/// Name of the first-declared entry carrying `value`.
	pub fn name_of(&self, value: i128) -> Option<&'static str> {
		self.find_value(value).map(|i| self.entries[i].name)
	}

	/// Position of `value`'s first-declared entry in `order`.
	pub fn index(&self, value: i128, order: Order) -> Option<usize> {
		let canonical = self.find_value(value)?;
		match order {
			Order::Declaration => Some(canonical),
			Order::ByValue => self.by_value().iter().position(|&i| i as usize == canonical),
			Order::ByName => self.by_name().iter().position(|&i| i as usize == canonical),
		}
	}

	/// Position of `value` among the distinct values, ascending.
	pub fn unique_index(&self, value: i128) -> Option<usize> {
		value_lower_bound(&self.entries, self.unique(), value)
	}

	/// Entry positions in `order`.
	pub fn positions(&self, order: Order) -> Vec<usize> {
		match order {
			Order::Declaration => (0..self.entries.len()).collect(),
			Order::ByValue => self.by_value().iter().map(|&i| i as usize).collect(),
			Order::ByName => self.by_name().iter().map(|&i| i as usize).collect(),
		}
	}

	/// First-declared entry of each distinct value, in declaration order.
	pub fn dedupe(&self) -> Vec<EnumEntry> {
		let mut keep = self.unique().to_vec();
		keep.sort_unstable();
		keep.into_iter().map(|i| self.entries[i as usize]).collect()
	}

	/// JSON object of names to values, in `order`.
	pub fn to_json(&self, order: Order) -> String {
		entries_json(&self.entries, self.positions(order))
	}

	/// Order-independent fingerprint; equals [`enum_hash`](crate::enum_hash)
	/// for the same entries.
	pub fn fingerprint(&self) -> u64 {
		fingerprint(&self.entries)
	}
}

impl std::fmt::Debug for EntrySet {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("EntrySet")
			.field("entries", &self.entries)
			.field("config", &self.config)
			.finish_non_exhaustive()
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use enumtab_meta::strategy::Strategy;
	use proptest::prelude::*;
	use rstest::rstest;

	use super::*;

	fn compass() -> EntrySet {
		EntrySet::new([
			EnumEntry::new("North", 0),
			EnumEntry::new("East", 90),
			EnumEntry::new("South", 180),
			EnumEntry::new("West", 270),
			EnumEntry::new("Up", 0),
		])
		.unwrap()
	}

	#[test]
	fn queries_resolve_aliases_to_first_declared() {
		let set = compass();
		assert_eq!(set.find_name("Up"), Some(4));
		assert_eq!(set.value_of("Up"), Some(0));
		assert_eq!(set.name_of(0), Some("North"));
		assert_eq!(set.name_of(45), None);
		assert_eq!(set.unique_count(), 4);
		assert_eq!(set.unique_index(270), Some(3));
		assert_eq!(set.unique_index(271), None);
	}

	#[test]
	fn indices_follow_each_order() {
		let set = compass();
		assert_eq!(set.index(180, Order::Declaration), Some(2));
		assert_eq!(set.index(180, Order::ByValue), Some(3));
		// East, North, South, Up, West
		assert_eq!(set.index(180, Order::ByName), Some(2));
		assert_eq!(set.index(1, Order::ByName), None);
	}

	#[test]
	fn dedupe_keeps_declaration_order() {
		let names: Vec<_> = compass().dedupe().iter().map(|e| e.name).collect();
		assert_eq!(names, ["North", "East", "South", "West"]);
	}

	#[test]
	fn json_follows_order() {
		assert_eq!(
			compass().to_json(Order::ByValue),
			r#"{"North":0,"Up":0,"East":90,"South":180,"West":270}"#
		);
	}

	#[rstest]
	#[case::small(4, Strategy::Linear)]
	#[case::medium(12, Strategy::Binary)]
	#[case::large(40, Strategy::Hash)]
	fn strategy_tracks_size(#[case] n: usize, #[case] expected: Strategy) {
		let names: Vec<&'static str> = (0..n)
			.map(|i| &*format!("Entry{i}").leak())
			.collect();
		let entries: Vec<_> = names
			.iter()
			.enumerate()
			.map(|(i, &name)| EnumEntry::new(name, i as i128))
			.collect();
		let set = EntrySet::new(entries).unwrap();
		assert_eq!(set.strategy(), expected);
		for (i, name) in names.iter().enumerate() {
			assert_eq!(set.find_name(name), Some(i));
		}
		assert_eq!(set.find_name("Missing"), None);
	}

	#[test]
	fn config_overrides_thresholds() {
		let config = DispatchConfig {
			hash_threshold: 2,
			binary_threshold: 1,
		};
		let set = EntrySet::with_config([EnumEntry::new("A", 1), EnumEntry::new("B", 2)], config).unwrap();
		assert_eq!(set.strategy(), Strategy::Hash);
		assert_eq!(set.find_name("B"), Some(1));
	}

	#[derive(Clone, Copy, crate::Enumerate)]
	#[enumtab(hash_threshold = 2)]
	enum Coin {
		Heads,
		Tails,
	}

	#[test]
	fn derived_sets_keep_their_dispatch() {
		let set = EntrySet::of::<Coin>();
		assert_eq!(set.strategy(), Coin::META.dispatch.strategy);
		assert_eq!(set.strategy(), Strategy::Hash);
		assert_eq!(set.find_name("Tails"), Some(1));
		assert_eq!(set.find_name("Edge"), None);
	}

	#[test]
	fn rejects_oversized_sets() {
		let entries = vec![EnumEntry::new("X", 0); MAX_ENTRIES + 1];
		assert_eq!(
			EntrySet::new(entries).unwrap_err(),
			EntrySetError::TooManyEntries { len: MAX_ENTRIES + 1 }
		);
	}

	proptest! {
		#[test]
		fn strategies_agree(values in proptest::collection::vec(-50i128..50, 0..48)) {
			let names: Vec<&'static str> = (0..values.len())
				.map(|i| &*format!("n{i}").leak())
				.collect();
			let entries: Vec<_> = names.iter().zip(&values).map(|(&n, &v)| EnumEntry::new(n, v)).collect();
			let with = |hash_threshold, binary_threshold| {
				EntrySet::with_config(entries.clone(), DispatchConfig { hash_threshold, binary_threshold }).unwrap()
			};
			let linear = with(usize::MAX, usize::MAX);
			let binary = with(usize::MAX, 0);
			let hashed = with(0, 0);
			for name in &names {
				let expected = linear.find_name(name);
				prop_assert_eq!(binary.find_name(name), expected);
				prop_assert_eq!(hashed.find_name(name), expected);
			}
			for v in -51i128..51 {
				prop_assert_eq!(linear.find_value(v), hashed.find_value(v));
			}
		}
	}
}
