//! Name and value queries over [`Enumerate`] types.
//!
//! No query fails: a miss is `None` or the caller's fallback.

use serde::{Deserialize, Serialize};

use crate::Enumerate;
use crate::dispatch::EnumMeta;

/// Ordering selector for index and iteration queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Order {
	/// Declaration order, aliases in place.
	#[default]
	Declaration,
	/// Ascending value, declaration order on ties.
	ByValue,
	/// Ascending byte-wise name.
	ByName,
}

impl EnumMeta {
	/// Entry positions in `order`.
	pub fn positions(&self, order: Order) -> impl ExactSizeIterator<Item = usize> + use<> {
		let view: Option<&'static [u16]> = match order {
			Order::Declaration => None,
			Order::ByValue => Some(self.by_value),
			Order::ByName => Some(self.by_name),
		};
		let len = self.entries.len();
		(0..len).map(move |i| view.map_or(i, |v| v[i] as usize))
	}
}

/// An integer that may name an enumerator's discriminant.
///
/// Widening to `i128` keeps signed and unsigned inputs apart: `-1i8` never
/// matches a `255` discriminant.
pub trait Underlying: Copy {
	/// Widened value, or `None` if it cannot be any discriminant.
	fn widen(self) -> Option<i128>;
}

macro_rules! impl_underlying {
	($($ty:ty),*) => {
		$(
			impl Underlying for $ty {
				#[inline]
				fn widen(self) -> Option<i128> {
					i128::try_from(self).ok()
				}
			}
		)*
	};
}

impl_underlying!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// A key [`enum_cast`] and [`enum_contains`] accept: a name or an integer.
pub trait CastKey {
	/// Entry position for this key in `meta`.
	fn locate(&self, meta: &EnumMeta) -> Option<usize>;
}

impl CastKey for &str {
	fn locate(&self, meta: &EnumMeta) -> Option<usize> {
		meta.find_name(self)
	}
}

impl CastKey for String {
	fn locate(&self, meta: &EnumMeta) -> Option<usize> {
		meta.find_name(self)
	}
}

impl CastKey for &String {
	fn locate(&self, meta: &EnumMeta) -> Option<usize> {
		meta.find_name(self)
	}
}

macro_rules! impl_cast_key_for_int {
	($($ty:ty),*) => {
		$(
			impl CastKey for $ty {
				fn locate(&self, meta: &EnumMeta) -> Option<usize> {
					meta.find_value(self.widen()?)
				}
			}
		)*
	};
}

impl_cast_key_for_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Name of `value`'s first-declared enumerator.
pub fn enum_name<E: Enumerate>(value: E) -> &'static str {
	E::META
		.find_value(value.to_underlying())
		.map_or("", |i| E::META.entries[i].name)
}

/// Name of the enumerator whose discriminant is `raw`, else `fallback`.
pub fn enum_name_or<E: Enumerate>(raw: impl Underlying, fallback: &'static str) -> &'static str {
	raw.widen()
		.and_then(|v| E::META.find_value(v))
		.map_or(fallback, |i| E::META.entries[i].name)
}

/// Enumerator named by `key` (a name) or carrying it (an integer).
///
/// Names resolve aliases; integers resolve to the first-declared enumerator
/// with that discriminant.
pub fn enum_cast<E: Enumerate>(key: impl CastKey) -> Option<E> {
	key.locate(&E::META).map(|i| E::VARIANTS[i])
}

/// Returns true if [`enum_cast`] would succeed.
pub fn enum_contains<E: Enumerate>(key: impl CastKey) -> bool {
	key.locate(&E::META).is_some()
}

/// Returns true if `value`'s discriminant belongs to a declared enumerator.
pub fn enum_contains_value<E: Enumerate>(value: E) -> bool {
	E::META.find_value(value.to_underlying()).is_some()
}

/// Number of declared enumerators, aliases included.
pub const fn enum_count<E: Enumerate>() -> usize {
	E::META.entries.len()
}

/// Number of distinct discriminants.
pub const fn enum_unique_count<E: Enumerate>() -> usize {
	E::META.unique.len()
}

/// Position of `value` in `order`.
///
/// The entry located is the first-declared one carrying `value`.
pub fn enum_index<E: Enumerate>(value: E, order: Order) -> Option<usize> {
	let meta = &E::META;
	let canonical = meta.find_value(value.to_underlying())?;
	match order {
		Order::Declaration => Some(canonical),
		Order::ByValue => meta.by_value.iter().position(|&i| i as usize == canonical),
		Order::ByName => meta.by_name.iter().position(|&i| i as usize == canonical),
	}
}

/// Position of `value` among the distinct discriminants, ascending.
pub fn enum_unique_index<E: Enumerate>(value: E) -> Option<usize> {
	E::META.unique_position(value.to_underlying())
}

/// `(enumerator, name)` pairs in `order`, aliases included.
pub fn enum_entries<E: Enumerate>(
	order: Order,
) -> impl ExactSizeIterator<Item = (E, &'static str)> + use<E> {
	E::META
		.positions(order)
		.map(|i| (E::VARIANTS[i], E::META.entries[i].name))
}

/// Names in `order`, aliases included.
pub fn enum_names<E: Enumerate>(
	order: Order,
) -> impl ExactSizeIterator<Item = &'static str> + use<E> {
	E::META.positions(order).map(|i| E::META.entries[i].name)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn widening_keeps_sign() {
		assert_eq!((-1i8).widen(), Some(-1));
		assert_eq!(255u8.widen(), Some(255));
		assert_eq!(u128::MAX.widen(), None);
	}

	#[test]
	fn order_reads_from_config_text() {
		let order: Order = serde_json::from_str(r#""by_name""#).unwrap();
		assert_eq!(order, Order::ByName);
		assert_eq!(serde_json::to_string(&Order::ByValue).unwrap(), r#""by_value""#);
	}
}
