//! Seeded FNV-1a string hash and the bucket sizing policy for name dispatch.

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Buckets allocated per entry, after rounding the entry count up to a power
/// of two.
pub const BUCKET_SPREAD: usize = 16;

/// Number of seeds collision analysis tries before giving up on hashing.
pub const HASH_SEED_ATTEMPTS: u64 = 64;

/// 64-bit FNV-1a over `bytes`, with `seed` folded into the offset basis.
pub const fn fnv1a(seed: u64, bytes: &[u8]) -> u64 {
	let mut hash = FNV_OFFSET ^ seed.wrapping_mul(FNV_PRIME);
	let mut i = 0;
	while i < bytes.len() {
		hash ^= bytes[i] as u64;
		hash = hash.wrapping_mul(FNV_PRIME);
		i += 1;
	}
	hash
}

/// Bucket count used for `entry_count` names. Always a power of two.
pub const fn bucket_count(entry_count: usize) -> usize {
	let base = if entry_count == 0 { 1 } else { entry_count.next_power_of_two() };
	base * BUCKET_SPREAD
}

/// Bucket of `name` under `seed` in a table of `bucket_count` buckets.
///
/// FNV-1a's low bits only depend on the low bits of its input, so the bucket
/// is taken from the top bits after a Fibonacci multiply.
pub const fn bucket_of(seed: u64, name: &str, bucket_count: usize) -> usize {
	debug_assert!(bucket_count.is_power_of_two());
	let bits = bucket_count.trailing_zeros();
	if bits == 0 {
		return 0;
	}
	(fnv1a(seed, name.as_bytes()).wrapping_mul(FIBONACCI) >> (64 - bits)) as usize
}

const FIBONACCI: u64 = 0x9e37_79b9_7f4a_7c15;

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn unseeded_hash_is_plain_fnv1a() {
		assert_eq!(fnv1a(0, b""), FNV_OFFSET);
		assert_eq!(fnv1a(0, b"a"), 0xaf63_dc4c_8601_ec8c);
	}

	#[test]
	fn seeds_change_the_hash() {
		assert_ne!(fnv1a(0, b"Red"), fnv1a(1, b"Red"));
	}

	#[test]
	fn bucket_count_is_power_of_two() {
		assert_eq!(bucket_count(0), BUCKET_SPREAD);
		assert_eq!(bucket_count(3), 4 * BUCKET_SPREAD);
		assert_eq!(bucket_count(64), 64 * BUCKET_SPREAD);
		for n in 0..300 {
			assert!(bucket_count(n).is_power_of_two());
		}
	}
}
