//! Enum-keyed lookup tables.
//!
//! A [`LookupTable`] maps enumerators to payloads (function pointers,
//! references, field accessors) through a value-sorted slice with unique
//! keys. Tables come from two places:
//!
//! - `#[enum_table(...)]`, which emits [`Candidate`]s and runs
//!   [`build_slots`] in `const` evaluation, so duplicate keys and missing
//!   enumerators stop the build
//! - [`TableBuilder`], which applies the same rules at runtime and reports
//!   violations as [`TableError`]

mod builder;
mod error;

use std::borrow::Cow;
use std::marker::PhantomData;

pub use builder::{MemberKey, TableBuilder};
pub use error::TableError;

use crate::Enumerate;
use crate::query::{CastKey, Underlying};

/// One table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSlot<P> {
	/// Key discriminant.
	pub value: i128,
	/// Entry position of the key enumerator.
	pub variant: u16,
	/// Payload; `None` only in unfilled scratch slots.
	pub payload: Option<P>,
}

impl<P> TableSlot<P> {
	/// Unfilled slot.
	pub const EMPTY: Self = Self {
		value: 0,
		variant: u16::MAX,
		payload: None,
	};
}

/// A member offered to a table, with the enumerator name it claims.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<P> {
	/// Member identifier, for diagnostics.
	pub member: &'static str,
	/// Enumerator name derived from the member, if any.
	pub key: Option<&'static str>,
	/// Value stored under the key.
	pub payload: P,
}

impl<P> Candidate<P> {
	/// Creates a candidate.
	pub const fn new(member: &'static str, key: Option<&'static str>, payload: P) -> Self {
		Self {
			member,
			key,
			payload,
		}
	}
}

/// Number of candidates whose key names an enumerator of `E`.
pub const fn resolved_count<E: Enumerate, P: Copy>(candidates: &[Candidate<P>]) -> usize {
	let mut count = 0;
	let mut i = 0;
	while i < candidates.len() {
		if let Some(key) = candidates[i].key
			&& E::META.find_name(key).is_some()
		{
			count += 1;
		}
		i += 1;
	}
	count
}

/// Resolves, sorts and validates candidates into `N` slots.
///
/// Candidates whose key names no enumerator are dropped. Panics (a compile
/// error when evaluated in a `static`) if two candidates resolve to the same
/// value, if `N` is not the resolved count, or if `exhaustive` is set and
/// some distinct value of `E` is left unmapped.
pub const fn build_slots<E: Enumerate, P: Copy, const N: usize>(
	candidates: &[Candidate<P>],
	exhaustive: bool,
) -> [TableSlot<P>; N] {
	let mut slots = [TableSlot::<P>::EMPTY; N];
	let mut filled = 0;
	let mut i = 0;
	while i < candidates.len() {
		let candidate = candidates[i];
		if let Some(key) = candidate.key
			&& let Some(pos) = E::META.find_name(key)
		{
			assert!(filled < N, "enum table slot count is smaller than the resolved member count");
			slots[filled] = TableSlot {
				value: E::META.entries[pos].value,
				variant: pos as u16,
				payload: Some(candidate.payload),
			};
			filled += 1;
		}
		i += 1;
	}
	assert!(filled == N, "enum table slot count is larger than the resolved member count");

	let mut i = 1;
	while i < N {
		let cur = slots[i];
		let mut j = i;
		while j > 0 && slots[j - 1].value > cur.value {
			slots[j] = slots[j - 1];
			j -= 1;
		}
		slots[j] = cur;
		i += 1;
	}

	let mut i = 1;
	while i < N {
		if slots[i].value == slots[i - 1].value {
			panic!("enum table has two members mapped to the same enumerator");
		}
		i += 1;
	}

	if exhaustive && N != E::META.unique.len() {
		panic!("exhaustive enum table leaves enumerators unmapped");
	}
	slots
}

/// Immutable enum-keyed table.
pub struct LookupTable<E, P: Copy + 'static> {
	slots: Cow<'static, [TableSlot<P>]>,
	_enum: PhantomData<fn() -> E>,
}

impl<E, P: Copy + 'static> LookupTable<E, P> {
	/// Wraps slots produced by [`build_slots`].
	///
	/// The slots must be sorted by value with unique values.
	pub const fn from_static(slots: &'static [TableSlot<P>]) -> Self {
		Self {
			slots: Cow::Borrowed(slots),
			_enum: PhantomData,
		}
	}

	pub(crate) fn from_vec(slots: Vec<TableSlot<P>>) -> Self {
		Self {
			slots: Cow::Owned(slots),
			_enum: PhantomData,
		}
	}

	/// Number of mapped enumerators.
	pub fn len(&self) -> usize {
		self.slots.len()
	}

	/// Returns true if nothing is mapped.
	pub fn is_empty(&self) -> bool {
		self.slots.is_empty()
	}

	fn slot(&self, value: i128) -> Option<&TableSlot<P>> {
		self.slots
			.binary_search_by(|slot| slot.value.cmp(&value))
			.ok()
			.map(|i| &self.slots[i])
	}

	/// Payload stored under the discriminant `raw`.
	pub fn get_value(&self, raw: impl Underlying) -> Option<P> {
		self.slot(raw.widen()?)?.payload
	}
}

impl<E: Enumerate, P: Copy + 'static> LookupTable<E, P> {
	/// Payload stored under `key`.
	pub fn get(&self, key: E) -> Option<P> {
		self.slot(key.to_underlying())?.payload
	}

	/// Payload stored under the enumerator named or valued `key`.
	pub fn get_by(&self, key: impl CastKey) -> Option<P> {
		let pos = key.locate(&E::META)?;
		self.slot(E::META.entries[pos].value)?.payload
	}

	/// Payload stored under the enumerator or alias named `name`.
	pub fn get_by_name(&self, name: &str) -> Option<P> {
		self.get_by(name)
	}

	/// Returns true if `key` is mapped.
	pub fn contains(&self, key: E) -> bool {
		self.slot(key.to_underlying()).is_some()
	}

	/// `(enumerator, payload)` pairs in ascending value order.
	pub fn iter(&self) -> impl Iterator<Item = (E, P)> + '_ {
		self.slots.iter().filter_map(|slot| {
			slot.payload
				.map(|payload| (E::VARIANTS[slot.variant as usize], payload))
		})
	}

	/// Mapped enumerators in ascending value order.
	pub fn keys(&self) -> impl ExactSizeIterator<Item = E> + '_ {
		self.slots
			.iter()
			.map(|slot| E::VARIANTS[slot.variant as usize])
	}
}

impl<E: Enumerate, P: Copy + 'static> std::fmt::Debug for LookupTable<E, P> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list()
			.entries(self.slots.iter().map(|slot| E::META.entries[slot.variant as usize].name))
			.finish()
	}
}
