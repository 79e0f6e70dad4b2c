use thiserror::Error;

/// Table construction failures.
///
/// `#[enum_table]` reports the same conditions as compile errors; this type
/// carries them out of [`TableBuilder::build`](super::TableBuilder::build).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
	/// Two members resolved to the same enumerator.
	#[error("{table}: members {first:?} and {second:?} both map to enumerator {key}")]
	DuplicateKey {
		/// Table label.
		table: &'static str,
		/// Name of the first-declared enumerator with the shared value.
		key: &'static str,
		/// Member registered first.
		first: String,
		/// Member registered second.
		second: String,
	},
	/// An exhaustive table left enumerators unmapped.
	#[error("{table}: {mapped} of {expected} enumerators mapped; missing {missing:?}")]
	NotExhaustive {
		/// Table label.
		table: &'static str,
		/// Distinct enumerators mapped.
		mapped: usize,
		/// Distinct enumerators declared.
		expected: usize,
		/// Names of the unmapped enumerators.
		missing: Vec<&'static str>,
	},
}
