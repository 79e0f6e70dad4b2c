//! Alias de-duplication.
//!
//! An alias is a second name for a value that was already declared. The
//! unique view keeps only the first-declared entry for each value.

use crate::entry::EnumEntry;
use crate::order::by_value_into;

/// Returns true if no earlier entry shares `entries[index].value`.
const fn is_first_occurrence(entries: &[EnumEntry], index: usize) -> bool {
	let mut j = 0;
	while j < index {
		if entries[j].value == entries[index].value {
			return false;
		}
		j += 1;
	}
	true
}

/// Number of distinct values in `entries`.
pub const fn count_unique(entries: &[EnumEntry]) -> usize {
	let mut count = 0;
	let mut i = 0;
	while i < entries.len() {
		if is_first_occurrence(entries, i) {
			count += 1;
		}
		i += 1;
	}
	count
}

/// First-occurrence positions in declaration order.
pub fn dedupe_by_value(entries: &[EnumEntry]) -> Vec<u16> {
	(0..entries.len())
		.filter(|&i| is_first_occurrence(entries, i))
		.map(|i| i as u16)
		.collect()
}

/// Writes first-occurrence positions, sorted by value, into `out`.
///
/// `out` must be [`count_unique`] long; `scratch` must be as long as
/// `entries`.
pub const fn unique_by_value_into(entries: &[EnumEntry], scratch: &mut [u16], out: &mut [u16]) {
	by_value_into(entries, scratch);
	let mut written = 0;
	let mut i = 0;
	while i < scratch.len() {
		// Stable by-value order puts the first-declared entry of a run first.
		if i == 0 || entries[scratch[i] as usize].value != entries[scratch[i - 1] as usize].value {
			assert!(written < out.len(), "unique buffer too short");
			out[written] = scratch[i];
			written += 1;
		}
		i += 1;
	}
	assert!(written == out.len(), "unique buffer length mismatch");
}

/// Value-sorted unique view as a fixed-size array.
///
/// `U` is the unique count and `N` the total entry count.
pub const fn unique_by_value<const U: usize, const N: usize>(entries: &[EnumEntry]) -> [u16; U] {
	let mut scratch = [0u16; N];
	let mut out = [0u16; U];
	unique_by_value_into(entries, &mut scratch, &mut out);
	out
}

/// Value-sorted unique view for entry sets assembled at runtime.
pub fn unique_by_value_vec(entries: &[EnumEntry]) -> Vec<u16> {
	let mut scratch = vec![0u16; entries.len()];
	let mut out = vec![0u16; count_unique(entries)];
	unique_by_value_into(entries, &mut scratch, &mut out);
	out
}
