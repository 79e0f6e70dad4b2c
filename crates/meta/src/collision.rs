//! Name-hash collision analysis.
//!
//! Hash dispatch stores one entry position per bucket and answers a query by
//! comparing the probed entry's name. Two distinct names in one bucket would
//! make one of them unreachable, so a layout is only usable when it is
//! collision-free. Identical names (possible only in synthetic entry sets)
//! share a bucket harmlessly: the first declared one wins, matching a linear
//! scan.

use crate::entry::EMPTY_SLOT;
use crate::hash::{HASH_SEED_ATTEMPTS, bucket_count, bucket_of};

/// Outcome of collision analysis for one entry set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionReport {
	/// True if no seed produced a collision-free layout.
	pub has_collision: bool,
	/// Seed of the collision-free layout, or the last seed tried.
	pub seed: u64,
	/// Bucket count the layout was checked against.
	pub bucket_count: usize,
	/// Entry positions of the first colliding pair under seed `0`.
	pub first_collision: Option<(usize, usize)>,
}

/// First pair of distinct names sharing a bucket, as entry positions.
///
/// Only names matter, so this runs in the derive macro before any
/// discriminant is known.
pub fn first_name_hash_collision(
	names: &[&str],
	seed: u64,
	bucket_count: usize,
) -> Option<(usize, usize)> {
	let mut owners = vec![None::<usize>; bucket_count];
	for (i, &name) in names.iter().enumerate() {
		let bucket = bucket_of(seed, name, bucket_count);
		match owners[bucket] {
			Some(owner) if names[owner] != name => return Some((owner, i)),
			Some(_) => {}
			None => owners[bucket] = Some(i),
		}
	}
	None
}

/// Returns true if two distinct names share a bucket.
pub fn has_name_hash_collision(names: &[&str], seed: u64, bucket_count: usize) -> bool {
	first_name_hash_collision(names, seed, bucket_count).is_some()
}

/// Searches seeds for a collision-free layout over the policy bucket count.
pub fn analyze_collisions(names: &[&str]) -> CollisionReport {
	let buckets = bucket_count(names.len());
	let first_collision = first_name_hash_collision(names, 0, buckets);
	if first_collision.is_none() {
		return CollisionReport {
			has_collision: false,
			seed: 0,
			bucket_count: buckets,
			first_collision,
		};
	}
	for seed in 1..HASH_SEED_ATTEMPTS {
		if !has_name_hash_collision(names, seed, buckets) {
			return CollisionReport {
				has_collision: false,
				seed,
				bucket_count: buckets,
				first_collision,
			};
		}
	}
	CollisionReport {
		has_collision: true,
		seed: HASH_SEED_ATTEMPTS - 1,
		bucket_count: buckets,
		first_collision,
	}
}

/// Builds the bucket table for a collision-free layout.
///
/// Each bucket holds the position of the first entry hashing to it, or
/// [`EMPTY_SLOT`].
pub fn hash_buckets(names: &[&str], seed: u64, bucket_count: usize) -> Vec<u16> {
	let mut buckets = vec![EMPTY_SLOT; bucket_count];
	for (i, &name) in names.iter().enumerate() {
		let bucket = bucket_of(seed, name, bucket_count);
		if buckets[bucket] == EMPTY_SLOT {
			buckets[bucket] = i as u16;
		}
	}
	buckets
}
