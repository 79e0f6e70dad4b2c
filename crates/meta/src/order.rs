//! Ordering views over an entry set.
//!
//! Both views are permutations of entry positions. Sorting is an insertion
//! sort so it can run in `const` evaluation; it is stable, so ties keep
//! declaration order.

use crate::entry::{EnumEntry, str_cmp};

/// Writes the by-value permutation of `entries` into `out`.
///
/// `out` must be exactly as long as `entries`.
pub const fn by_value_into(entries: &[EnumEntry], out: &mut [u16]) {
	assert!(out.len() == entries.len(), "order buffer length mismatch");
	let mut i = 0;
	while i < out.len() {
		out[i] = i as u16;
		i += 1;
	}
	let mut i = 1;
	while i < out.len() {
		let cur = out[i];
		let mut j = i;
		while j > 0 && entries[out[j - 1] as usize].value > entries[cur as usize].value {
			out[j] = out[j - 1];
			j -= 1;
		}
		out[j] = cur;
		i += 1;
	}
}

/// Writes the by-name permutation of `entries` into `out`.
pub const fn by_name_into(entries: &[EnumEntry], out: &mut [u16]) {
	assert!(out.len() == entries.len(), "order buffer length mismatch");
	let mut i = 0;
	while i < out.len() {
		out[i] = i as u16;
		i += 1;
	}
	let mut i = 1;
	while i < out.len() {
		let cur = out[i];
		let mut j = i;
		while j > 0 && str_cmp(entries[out[j - 1] as usize].name, entries[cur as usize].name) > 0 {
			out[j] = out[j - 1];
			j -= 1;
		}
		out[j] = cur;
		i += 1;
	}
}

/// By-value permutation as a fixed-size array.
pub const fn by_value<const N: usize>(entries: &[EnumEntry]) -> [u16; N] {
	let mut out = [0u16; N];
	by_value_into(entries, &mut out);
	out
}

/// By-name permutation as a fixed-size array.
pub const fn by_name<const N: usize>(entries: &[EnumEntry]) -> [u16; N] {
	let mut out = [0u16; N];
	by_name_into(entries, &mut out);
	out
}

/// By-value permutation for entry sets assembled at runtime.
pub fn by_value_vec(entries: &[EnumEntry]) -> Vec<u16> {
	let mut out = vec![0u16; entries.len()];
	by_value_into(entries, &mut out);
	out
}

/// By-name permutation for entry sets assembled at runtime.
pub fn by_name_vec(entries: &[EnumEntry]) -> Vec<u16> {
	let mut out = vec![0u16; entries.len()];
	by_name_into(entries, &mut out);
	out
}

/// Position in `order` of the first entry whose value is `value`.
///
/// `order` must be a by-value permutation of `entries`.
pub const fn value_lower_bound(entries: &[EnumEntry], order: &[u16], value: i128) -> Option<usize> {
	let (mut lo, mut hi) = (0, order.len());
	while lo < hi {
		let mid = lo + (hi - lo) / 2;
		if entries[order[mid] as usize].value < value {
			lo = mid + 1;
		} else {
			hi = mid;
		}
	}
	if lo < order.len() && entries[order[lo] as usize].value == value {
		Some(lo)
	} else {
		None
	}
}

/// Position in `order` of the first entry named `name`.
///
/// `order` must be a by-name permutation of `entries`.
pub const fn name_lower_bound(entries: &[EnumEntry], order: &[u16], name: &str) -> Option<usize> {
	let (mut lo, mut hi) = (0, order.len());
	while lo < hi {
		let mid = lo + (hi - lo) / 2;
		if str_cmp(entries[order[mid] as usize].name, name) < 0 {
			lo = mid + 1;
		} else {
			hi = mid;
		}
	}
	if lo < order.len() && str_cmp(entries[order[lo] as usize].name, name) == 0 {
		Some(lo)
	} else {
		None
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use proptest::prelude::*;

	use super::*;

	const MIXED: [EnumEntry; 5] = [
		EnumEntry::new("Zero", 0),
		EnumEntry::new("Max", u64::MAX as i128),
		EnumEntry::new("Neg", -1),
		EnumEntry::new("Alias", 0),
		EnumEntry::new("Big", i64::MAX as i128),
	];

	#[test]
	fn by_value_orders_signed_and_unsigned_without_wrapping() {
		assert_eq!(by_value::<5>(&MIXED), [2, 0, 3, 4, 1]);
	}

	#[test]
	fn by_name_is_bytewise() {
		assert_eq!(by_name::<5>(&MIXED), [3, 4, 1, 2, 0]);
	}

	#[test]
	fn const_evaluation_matches_runtime() {
		const ORDER: [u16; 5] = by_value::<5>(&MIXED);
		assert_eq!(ORDER.to_vec(), by_value_vec(&MIXED));
	}

	#[test]
	fn lower_bounds_find_first_occurrence() {
		let order = by_value_vec(&MIXED);
		assert_eq!(value_lower_bound(&MIXED, &order, 0), Some(1));
		assert_eq!(order[1], 0);
		assert_eq!(value_lower_bound(&MIXED, &order, 7), None);

		let order = by_name_vec(&MIXED);
		assert_eq!(name_lower_bound(&MIXED, &order, "Max").map(|p| order[p]), Some(1));
		assert_eq!(name_lower_bound(&MIXED, &order, "max"), None);
	}

	fn entries_strategy() -> impl Strategy<Value = Vec<EnumEntry>> {
		let names = ["A", "B", "C", "D", "a", "b", "Aa", "AB"];
		prop::collection::vec((0..names.len(), -4i128..4), 0..24).prop_map(move |raw| {
			raw.into_iter()
				.map(|(n, v)| EnumEntry::new(names[n], v))
				.collect()
		})
	}

	proptest! {
		#[test]
		fn by_value_is_sorted_and_stable(entries in entries_strategy()) {
			let order = by_value_vec(&entries);
			for w in order.windows(2) {
				let (a, b) = (&entries[w[0] as usize], &entries[w[1] as usize]);
				prop_assert!(a.value <= b.value);
				if a.value == b.value {
					prop_assert!(w[0] < w[1]);
				}
			}
		}

		#[test]
		fn by_name_is_sorted_and_stable(entries in entries_strategy()) {
			let order = by_name_vec(&entries);
			for w in order.windows(2) {
				let (a, b) = (&entries[w[0] as usize], &entries[w[1] as usize]);
				prop_assert!(a.name <= b.name);
				if a.name == b.name {
					prop_assert!(w[0] < w[1]);
				}
			}
		}

		#[test]
		fn views_are_permutations(entries in entries_strategy()) {
			let mut seen = by_value_vec(&entries);
			seen.sort_unstable();
			prop_assert_eq!(seen, (0..entries.len() as u16).collect::<Vec<_>>());
			let mut seen = by_name_vec(&entries);
			seen.sort_unstable();
			prop_assert_eq!(seen, (0..entries.len() as u16).collect::<Vec<_>>());
		}
	}
}
