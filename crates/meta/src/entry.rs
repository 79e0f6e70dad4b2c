use serde::Serialize;

/// Largest number of entries an entry set may hold.
///
/// Views store entry positions as `u16`; [`EMPTY_SLOT`] is reserved.
pub const MAX_ENTRIES: usize = (u16::MAX - 1) as usize;

/// Marker for an unoccupied hash bucket or table slot.
pub const EMPTY_SLOT: u16 = u16::MAX;

/// One enumerator: its identifier and its discriminant.
///
/// Discriminants are widened to `i128` so enums of every primitive repr share
/// one ordering and one comparison, with no sign-extension surprises between
/// signed and unsigned reprs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct EnumEntry {
	/// Enumerator identifier as declared (or as declared by an alias).
	pub name: &'static str,
	/// Discriminant widened to `i128`.
	pub value: i128,
}

impl EnumEntry {
	/// Creates an entry.
	pub const fn new(name: &'static str, value: i128) -> Self {
		Self { name, value }
	}
}

impl std::fmt::Display for EnumEntry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}={}", self.name, self.value)
	}
}

/// Byte-wise equality usable in `const` evaluation.
pub const fn str_eq(a: &str, b: &str) -> bool {
	let (a, b) = (a.as_bytes(), b.as_bytes());
	if a.len() != b.len() {
		return false;
	}
	let mut i = 0;
	while i < a.len() {
		if a[i] != b[i] {
			return false;
		}
		i += 1;
	}
	true
}

/// Byte-wise lexicographic comparison usable in `const` evaluation.
///
/// Returns `-1`, `0` or `1`.
pub const fn str_cmp(a: &str, b: &str) -> i8 {
	let (a, b) = (a.as_bytes(), b.as_bytes());
	let len = if a.len() < b.len() { a.len() } else { b.len() };
	let mut i = 0;
	while i < len {
		if a[i] < b[i] {
			return -1;
		}
		if a[i] > b[i] {
			return 1;
		}
		i += 1;
	}
	if a.len() < b.len() {
		-1
	} else if a.len() > b.len() {
		1
	} else {
		0
	}
}
