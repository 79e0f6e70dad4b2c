use enumtab_meta::entry::EnumEntry;
use serde_json::{Map, Number, Value};

use crate::Enumerate;
use crate::query::Order;

/// JSON object mapping each name of `E` to its value, in `order`.
pub fn enum_json<E: Enumerate>(order: Order) -> String {
	entries_json(E::META.entries, E::META.positions(order))
}

/// JSON object mapping entry names to values, visiting `positions` in turn.
///
/// A repeated name keeps its first value. Values outside the `i64`/`u64`
/// range are written as strings.
pub fn entries_json(entries: &[EnumEntry], positions: impl IntoIterator<Item = usize>) -> String {
	let mut map = Map::new();
	for i in positions {
		let entry = &entries[i];
		if map.contains_key(entry.name) {
			continue;
		}
		map.insert(entry.name.to_owned(), json_value(entry.value));
	}
	Value::Object(map).to_string()
}

fn json_value(value: i128) -> Value {
	if let Ok(v) = i64::try_from(value) {
		Value::Number(Number::from(v))
	} else if let Ok(v) = u64::try_from(value) {
		Value::Number(Number::from(v))
	} else {
		Value::String(value.to_string())
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn follows_requested_positions() {
		let entries = [EnumEntry::new("B", 2), EnumEntry::new("A", -1)];
		assert_eq!(entries_json(&entries, [0, 1]), r#"{"B":2,"A":-1}"#);
		assert_eq!(entries_json(&entries, [1, 0]), r#"{"A":-1,"B":2}"#);
	}

	#[test]
	fn escapes_and_widens() {
		let entries = [
			EnumEntry::new("quote\"d", u64::MAX as i128),
			EnumEntry::new("huge", i128::MAX),
			EnumEntry::new("quote\"d", 0),
		];
		assert_eq!(
			entries_json(&entries, 0..3),
			format!(r#"{{"quote\"d":{},"huge":"{}"}}"#, u64::MAX, i128::MAX)
		);
	}
}
