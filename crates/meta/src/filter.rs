//! Member class filter for table construction.
//!
//! A member has one storage class (`STATIC` or `INSTANCE`) and one kind
//! (`FUNCTION` or `VARIABLE`). A filter admits a member when both its class
//! and its kind are selected; an axis with no selected flag admits
//! everything on that axis.

use bitflags::bitflags;
use thiserror::Error;

bitflags! {
	/// Storage class and kind flags.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
	pub struct MemberKinds: u8 {
		/// Associated functions, associated consts, module items.
		const STATIC = 1 << 0;
		/// Methods with a receiver, struct fields.
		const INSTANCE = 1 << 1;
		/// Functions and methods.
		const FUNCTION = 1 << 2;
		/// Consts, statics and fields.
		const VARIABLE = 1 << 3;
	}
}

/// Errors from parsing a filter expression.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
	/// The expression named no flags.
	#[error("member filter is empty")]
	Empty,
	/// An unrecognised flag name.
	#[error("unknown member flag {0:?}; expected static, instance, function or variable")]
	UnknownFlag(String),
}

impl MemberKinds {
	const STORAGE: Self = Self::STATIC.union(Self::INSTANCE);
	const KIND: Self = Self::FUNCTION.union(Self::VARIABLE);

	/// A static function.
	pub const STATIC_FUNCTION: Self = Self::STATIC.union(Self::FUNCTION);
	/// A static variable.
	pub const STATIC_VARIABLE: Self = Self::STATIC.union(Self::VARIABLE);
	/// An instance function.
	pub const INSTANCE_FUNCTION: Self = Self::INSTANCE.union(Self::FUNCTION);
	/// An instance variable.
	pub const INSTANCE_VARIABLE: Self = Self::INSTANCE.union(Self::VARIABLE);

	/// Returns true if a member of class `member` passes this filter.
	///
	/// `member` should carry exactly one storage and one kind flag.
	pub fn admits(self, member: Self) -> bool {
		let storage = match self & Self::STORAGE {
			s if s.is_empty() => Self::STORAGE,
			s => s,
		};
		let kind = match self & Self::KIND {
			k if k.is_empty() => Self::KIND,
			k => k,
		};
		storage.intersects(member & Self::STORAGE) && kind.intersects(member & Self::KIND)
	}

	/// Parses `"static | function"` style expressions.
	///
	/// Flags may be separated by `|` or `,`; `all` selects everything and
	/// `non_static` is accepted for `instance`.
	pub fn parse(expr: &str) -> Result<Self, FilterError> {
		let mut flags = Self::empty();
		let mut seen = false;
		for word in expr.split(['|', ',']).map(str::trim).filter(|w| !w.is_empty()) {
			seen = true;
			flags |= match word {
				"static" => Self::STATIC,
				"instance" | "non_static" => Self::INSTANCE,
				"function" => Self::FUNCTION,
				"variable" => Self::VARIABLE,
				"all" => Self::all(),
				other => return Err(FilterError::UnknownFlag(other.to_owned())),
			};
		}
		if !seen {
			return Err(FilterError::Empty);
		}
		Ok(flags)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_axis_admits_everything_on_it() {
		let functions = MemberKinds::FUNCTION;
		assert!(functions.admits(MemberKinds::STATIC_FUNCTION));
		assert!(functions.admits(MemberKinds::INSTANCE_FUNCTION));
		assert!(!functions.admits(MemberKinds::STATIC_VARIABLE));

		let statics = MemberKinds::STATIC;
		assert!(statics.admits(MemberKinds::STATIC_VARIABLE));
		assert!(!statics.admits(MemberKinds::INSTANCE_FUNCTION));
	}

	#[test]
	fn combined_filter_requires_both_axes() {
		let filter = MemberKinds::parse("static | function").unwrap();
		assert!(filter.admits(MemberKinds::STATIC_FUNCTION));
		assert!(!filter.admits(MemberKinds::INSTANCE_FUNCTION));
		assert!(!filter.admits(MemberKinds::STATIC_VARIABLE));
	}

	#[test]
	fn parse_accepts_aliases_and_rejects_garbage() {
		assert_eq!(MemberKinds::parse("non_static, variable"), Ok(MemberKinds::INSTANCE_VARIABLE));
		assert_eq!(MemberKinds::parse("all"), Ok(MemberKinds::all()));
		assert_eq!(MemberKinds::parse(" | "), Err(FilterError::Empty));
		assert_eq!(
			MemberKinds::parse("static | nested"),
			Err(FilterError::UnknownFlag("nested".to_owned()))
		);
	}
}
