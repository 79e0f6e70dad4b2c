use enumtab_meta::entry::EnumEntry;
use enumtab_meta::hash::fnv1a;

use crate::Enumerate;

/// Stable fingerprint of an entry multiset.
///
/// Entry hashes are combined with wrapping addition, so declaration order
/// does not matter but every `(name, value)` pair and its multiplicity does.
pub const fn fingerprint(entries: &[EnumEntry]) -> u64 {
	let mut acc = 0u64;
	let mut i = 0;
	while i < entries.len() {
		acc = acc.wrapping_add(entry_hash(&entries[i]));
		i += 1;
	}
	mix(acc ^ mix(entries.len() as u64))
}

/// Fingerprint of `E`'s entry set.
pub const fn enum_hash<E: Enumerate>() -> u64 {
	fingerprint(E::META.entries)
}

const fn entry_hash(entry: &EnumEntry) -> u64 {
	let value = entry.value as u128;
	let folded = (value as u64) ^ ((value >> 64) as u64).rotate_left(32);
	mix(fnv1a(0, entry.name.as_bytes()) ^ mix(folded))
}

/// splitmix64 finalizer.
const fn mix(mut x: u64) -> u64 {
	x = (x ^ (x >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
	x = (x ^ (x >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
	x ^ (x >> 31)
}
