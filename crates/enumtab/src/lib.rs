//! Compile-time enumerator tables.
//!
//! `#[derive(Enumerate)]` records an enum's enumerators, in declaration order
//! and with any declared aliases, as associated constants. Everything derived
//! from them (orderings, the alias-free view, the name dispatch strategy and
//! its hash layout) is computed while the crate compiles and lives in the
//! binary as plain data.
//!
//! `#[enum_table(...)]` builds a [`LookupTable`] from the members of an `impl`
//! block, a struct or an inline module whose names embed enumerator names.
//! Ambiguous and incomplete tables are compile errors.
//!
//! ```
//! use enumtab::{Enumerate, Order, enum_cast, enum_name, enum_table};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Enumerate)]
//! enum Color {
//! 	Red,
//! 	Green,
//! 	Blue,
//! }
//!
//! struct Painter;
//!
//! #[enum_table(PAINT: Color, prefix = "paint_", rule = "pascal_case", exhaustive)]
//! impl Painter {
//! 	fn paint_red() -> u32 { 0xff0000 }
//! 	fn paint_green() -> u32 { 0x00ff00 }
//! 	fn paint_blue() -> u32 { 0x0000ff }
//! }
//!
//! assert_eq!(enum_name(Color::Green), "Green");
//! assert_eq!(enum_cast::<Color>("Blue"), Some(Color::Blue));
//! assert_eq!(enum_cast::<Color>(0u8), Some(Color::Red));
//! assert_eq!(PAINT.get(Color::Green).map(|f| f()), Some(0x00ff00));
//! assert_eq!(enumtab::enum_json::<Color>(Order::ByName), r#"{"Blue":2,"Green":1,"Red":0}"#);
//! ```
//!
//! # Construction errors
//!
//! Two members reaching one enumerator, even through an alias, stop the
//! build:
//!
//! ```compile_fail
//! use enumtab::{Enumerate, enum_table};
//!
//! #[derive(Clone, Copy, Enumerate)]
//! enum Level {
//! 	#[enumtab(alias = "Min")]
//! 	Low,
//! 	High,
//! }
//!
//! struct Limits;
//!
//! #[enum_table(LIMITS: Level, prefix = "limit_")]
//! #[allow(non_snake_case)]
//! impl Limits {
//! 	fn limit_Low() -> u8 { 0 }
//! 	fn limit_Min() -> u8 { 1 }
//! }
//! # fn main() {}
//! ```
//!
//! So does an `exhaustive` table with an unmapped enumerator:
//!
//! ```compile_fail
//! use enumtab::{Enumerate, enum_table};
//!
//! #[derive(Clone, Copy, Enumerate)]
//! enum Level {
//! 	Low,
//! 	High,
//! }
//!
//! struct Limits;
//!
//! #[enum_table(LIMITS: Level, prefix = "limit_", rule = "pascal_case", exhaustive)]
//! impl Limits {
//! 	fn limit_low() -> u8 { 0 }
//! }
//! # fn main() {}
//! ```
//!
//! Enumerator names must be unique, aliases included:
//!
//! ```compile_fail
//! #[derive(Clone, Copy, enumtab::Enumerate)]
//! enum Level {
//! 	Low,
//! 	#[enumtab(alias = "Low")]
//! 	High,
//! }
//! # fn main() {}
//! ```
//!
//! And only fieldless enums can be enumerated:
//!
//! ```compile_fail
//! #[derive(Clone, Copy, enumtab::Enumerate)]
//! struct Level(u8);
//! # fn main() {}
//! ```
//!
//! Nor can generic enums or `#[repr(u128)]` enums, whose discriminants may
//! not fit the `i128` entry values:
//!
//! ```compile_fail
//! #[derive(Clone, Copy, enumtab::Enumerate)]
//! enum Level<T> {
//! 	Low,
//! 	High,
//! 	#[allow(dead_code)]
//! 	Marker(std::marker::PhantomData<T>),
//! }
//! # fn main() {}
//! ```
//!
//! ```compile_fail
//! #[derive(Clone, Copy, enumtab::Enumerate)]
//! #[repr(u128)]
//! enum Level {
//! 	Low,
//! 	High,
//! }
//! # fn main() {}
//! ```
//!
//! Table options are checked when the attribute expands. An unknown naming
//! rule:
//!
//! ```compile_fail
//! use enumtab::{Enumerate, enum_table};
//!
//! #[derive(Clone, Copy, Enumerate)]
//! enum Level {
//! 	Low,
//! }
//!
//! struct Limits;
//!
//! #[enum_table(LIMITS: Level, prefix = "limit_", rule = "title_case")]
//! impl Limits {
//! 	fn limit_low() -> u8 { 0 }
//! }
//! # fn main() {}
//! ```
//!
//! A `matcher` combined with `prefix`:
//!
//! ```compile_fail
//! use enumtab::{Enumerate, enum_table};
//!
//! #[derive(Clone, Copy, Enumerate)]
//! enum Level {
//! 	Low,
//! }
//!
//! const fn level_name(member: &'static str) -> Option<&'static str> {
//! 	Some(member)
//! }
//!
//! struct Limits;
//!
//! #[enum_table(LIMITS: Level, prefix = "limit_", matcher = level_name)]
//! impl Limits {
//! 	fn limit_Low() -> u8 { 0 }
//! }
//! # fn main() {}
//! ```
//!
//! An unknown option:
//!
//! ```compile_fail
//! use enumtab::{Enumerate, enum_table};
//!
//! #[derive(Clone, Copy, Enumerate)]
//! enum Level {
//! 	Low,
//! }
//!
//! struct Limits;
//!
//! #[enum_table(LIMITS: Level, prefix = "limit_", sorted)]
//! impl Limits {
//! 	fn limit_Low() -> u8 { 0 }
//! }
//! # fn main() {}
//! ```

extern crate self as enumtab;

mod dispatch;
mod entry_set;
mod fingerprint;
mod json;
mod query;
pub mod table;

pub use dispatch::{EnumMeta, NameDispatch};
pub use entry_set::{EntrySet, EntrySetError};
pub use enumtab_macros::{Enumerate, enum_table};
pub use enumtab_meta as meta;
pub use enumtab_meta::{
	CollisionReport, DispatchConfig, EnumEntry, MemberKinds, NamePattern, NamingRule, Strategy,
	select_strategy,
};
pub use fingerprint::{enum_hash, fingerprint};
pub use json::{enum_json, entries_json};
pub use query::{
	CastKey, Order, Underlying, enum_cast, enum_contains, enum_contains_value, enum_count, enum_entries,
	enum_index, enum_name, enum_name_or, enum_names, enum_unique_count, enum_unique_index,
};
pub use table::{LookupTable, TableBuilder, TableError};

/// A fieldless enum whose enumerators are known at compile time.
///
/// Implemented by `#[derive(Enumerate)]`; the associated constants are the
/// single source of truth every query reads.
pub trait Enumerate: Copy + 'static {
	/// Entry set and derived views.
	const META: EnumMeta;

	/// The enum value of each entry, parallel to `META.entries`.
	///
	/// An alias entry holds the variant it aliases.
	const VARIANTS: &'static [Self];

	/// Discriminant widened to `i128`.
	fn to_underlying(self) -> i128;
}

#[doc(hidden)]
pub mod __private {
	pub use enumtab_meta::entry::EnumEntry;
	pub use enumtab_meta::order::{by_name, by_value};
	pub use enumtab_meta::strategy::Strategy;
	pub use enumtab_meta::unique::{count_unique, unique_by_value};

	pub use crate::dispatch::{EnumMeta, NameDispatch};
	pub use crate::table::{Candidate, LookupTable, TableSlot, build_slots, resolved_count};
}
