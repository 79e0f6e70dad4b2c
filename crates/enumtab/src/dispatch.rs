//! Enumerator descriptors and the lookups they answer.

use enumtab_meta::entry::{EMPTY_SLOT, EnumEntry, str_eq};
use enumtab_meta::hash::bucket_of;
use enumtab_meta::order::{name_lower_bound, value_lower_bound};
use enumtab_meta::strategy::Strategy;

/// How name lookups are answered for one entry set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameDispatch {
	/// Selected algorithm.
	pub strategy: Strategy,
	/// Hash seed of the collision-free layout. Unused unless hashing.
	pub seed: u64,
	/// Bucket table, one entry position or `EMPTY_SLOT` per bucket. Empty
	/// unless hashing.
	pub buckets: &'static [u16],
}

/// Everything `#[derive(Enumerate)]` records about an enum.
#[derive(Debug, Clone, Copy)]
pub struct EnumMeta {
	/// Enum identifier.
	pub type_name: &'static str,
	/// Entries in declaration order, aliases included.
	pub entries: &'static [EnumEntry],
	/// Entry positions sorted by value, declaration order on ties.
	pub by_value: &'static [u16],
	/// Entry positions sorted by name.
	pub by_name: &'static [u16],
	/// First-declared entry position of each distinct value, sorted by value.
	pub unique: &'static [u16],
	/// Name lookup strategy.
	pub dispatch: NameDispatch,
}

impl EnumMeta {
	/// Position of the first-declared entry named `name`.
	pub const fn find_name(&self, name: &str) -> Option<usize> {
		find_name_in(
			self.entries,
			self.by_name,
			self.dispatch.strategy,
			self.dispatch.seed,
			self.dispatch.buckets,
			name,
		)
	}

	/// Position of the first-declared entry with `value`.
	pub const fn find_value(&self, value: i128) -> Option<usize> {
		find_value_in(self.entries, self.by_value, value)
	}

	/// Position of `value` within the value-sorted unique view.
	pub const fn unique_position(&self, value: i128) -> Option<usize> {
		value_lower_bound(self.entries, self.unique, value)
	}

	/// Number of entries, aliases included.
	pub const fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns true if the enum has no enumerators.
	pub const fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}

/// Name lookup over any entry set, using the given strategy.
///
/// Every strategy returns the first-declared entry when names repeat.
pub(crate) const fn find_name_in(
	entries: &[EnumEntry],
	by_name: &[u16],
	strategy: Strategy,
	seed: u64,
	buckets: &[u16],
	name: &str,
) -> Option<usize> {
	match strategy {
		Strategy::Hash if !buckets.is_empty() => {
			let slot = buckets[bucket_of(seed, name, buckets.len())];
			if slot != EMPTY_SLOT && str_eq(entries[slot as usize].name, name) {
				Some(slot as usize)
			} else {
				None
			}
		}
		Strategy::Binary => match name_lower_bound(entries, by_name, name) {
			Some(pos) => Some(by_name[pos] as usize),
			None => None,
		},
		_ => {
			let mut i = 0;
			while i < entries.len() {
				if str_eq(entries[i].name, name) {
					return Some(i);
				}
				i += 1;
			}
			None
		}
	}
}

/// Value lookup over any entry set. Always a binary search.
pub(crate) const fn find_value_in(entries: &[EnumEntry], by_value: &[u16], value: i128) -> Option<usize> {
	match value_lower_bound(entries, by_value, value) {
		Some(pos) => Some(by_value[pos] as usize),
		None => None,
	}
}

#[cfg(test)]
mod tests {
	use enumtab_meta::collision::{analyze_collisions, hash_buckets};
	use enumtab_meta::order::{by_name_vec, by_value_vec};

	use super::*;

	const ENTRIES: [EnumEntry; 4] = [
		EnumEntry::new("North", 0),
		EnumEntry::new("East", 90),
		EnumEntry::new("South", 180),
		EnumEntry::new("Up", 0),
	];

	#[test]
	fn every_strategy_agrees() {
		let by_name = by_name_vec(&ENTRIES);
		let names = ENTRIES.map(|e| e.name);
		let report = analyze_collisions(&names);
		assert!(!report.has_collision);
		let buckets = hash_buckets(&names, report.seed, report.bucket_count);

		for strategy in [Strategy::Linear, Strategy::Binary, Strategy::Hash] {
			for (i, entry) in ENTRIES.iter().enumerate() {
				let found = find_name_in(&ENTRIES, &by_name, strategy, report.seed, &buckets, entry.name);
				assert_eq!(found, Some(i), "{strategy} lookup of {}", entry.name);
			}
			let miss = find_name_in(&ENTRIES, &by_name, strategy, report.seed, &buckets, "West");
			assert_eq!(miss, None, "{strategy} miss");
			let miss = find_name_in(&ENTRIES, &by_name, strategy, report.seed, &buckets, "north");
			assert_eq!(miss, None, "{strategy} lookup is case-sensitive");
		}
	}

	#[test]
	fn value_lookup_prefers_first_declared() {
		let by_value = by_value_vec(&ENTRIES);
		assert_eq!(find_value_in(&ENTRIES, &by_value, 0), Some(0));
		assert_eq!(find_value_in(&ENTRIES, &by_value, 180), Some(2));
		assert_eq!(find_value_in(&ENTRIES, &by_value, 270), None);
	}

	#[test]
	fn hash_without_buckets_falls_back_to_scan() {
		let by_name = by_name_vec(&ENTRIES);
		assert_eq!(find_name_in(&ENTRIES, &by_name, Strategy::Hash, 0, &[], "South"), Some(2));
	}
}
