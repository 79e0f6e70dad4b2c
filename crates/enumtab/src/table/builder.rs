//! Runtime table construction.
//!
//! Mirrors what `#[enum_table]` does at compile time for member sets that
//! are only known at runtime, such as handlers registered by plugins.

use std::marker::PhantomData;

use enumtab_meta::filter::MemberKinds;
use enumtab_meta::pattern::NamePattern;

use super::{LookupTable, TableError, TableSlot};
use crate::Enumerate;

/// How a member's enumerator name is chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberKey {
	/// Derive it with the builder's pattern or matcher.
	Derived,
	/// Use this enumerator name.
	Explicit(String),
	/// Never map the member.
	Skip,
}

struct Member<P> {
	name: String,
	class: MemberKinds,
	key: MemberKey,
	payload: P,
}

type Matcher = Box<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Builds a [`LookupTable`] from named members at runtime.
pub struct TableBuilder<E, P> {
	label: &'static str,
	pattern: NamePattern,
	matcher: Option<Matcher>,
	filter: MemberKinds,
	exhaustive: bool,
	members: Vec<Member<P>>,
	_enum: PhantomData<fn() -> E>,
}

impl<E: Enumerate, P: Copy + 'static> TableBuilder<E, P> {
	/// Creates a builder with an empty pattern, no filter and no
	/// exhaustiveness requirement.
	pub fn new(label: &'static str) -> Self {
		Self {
			label,
			pattern: NamePattern::default(),
			matcher: None,
			filter: MemberKinds::all(),
			exhaustive: false,
			members: Vec::new(),
			_enum: PhantomData,
		}
	}

	/// Derives keys by stripping a prefix and suffix and converting case.
	pub fn pattern(mut self, pattern: NamePattern) -> Self {
		self.pattern = pattern;
		self
	}

	/// Derives keys with a custom predicate instead of the pattern.
	pub fn matcher(mut self, matcher: impl Fn(&str) -> Option<String> + Send + Sync + 'static) -> Self {
		self.matcher = Some(Box::new(matcher));
		self
	}

	/// Only considers members whose class passes `filter`.
	pub fn filter(mut self, filter: MemberKinds) -> Self {
		self.filter = filter;
		self
	}

	/// Requires every distinct enumerator to be mapped.
	pub fn exhaustive(mut self, exhaustive: bool) -> Self {
		self.exhaustive = exhaustive;
		self
	}

	/// Offers a member whose key is derived from `name`.
	pub fn member(self, name: impl Into<String>, class: MemberKinds, payload: P) -> Self {
		self.member_with_key(name, class, MemberKey::Derived, payload)
	}

	/// Offers a member with an explicit key choice.
	pub fn member_with_key(
		mut self,
		name: impl Into<String>,
		class: MemberKinds,
		key: MemberKey,
		payload: P,
	) -> Self {
		self.members.push(Member {
			name: name.into(),
			class,
			key,
			payload,
		});
		self
	}

	fn derive_key(&self, member: &Member<P>) -> Option<String> {
		match &member.key {
			MemberKey::Skip => None,
			MemberKey::Explicit(key) => Some(key.clone()),
			MemberKey::Derived => match &self.matcher {
				Some(matcher) => matcher(&member.name),
				None => self.pattern.derive_key(&member.name),
			},
		}
	}

	/// Resolves members against `E` and validates the result.
	pub fn build(self) -> Result<LookupTable<E, P>, TableError> {
		let meta = &E::META;
		let mut rows: Vec<(TableSlot<P>, &str)> = Vec::new();

		for member in &self.members {
			if !self.filter.admits(member.class) {
				tracing::trace!(table = self.label, member = %member.name, "member filtered out");
				continue;
			}
			let Some(key) = self.derive_key(member) else {
				tracing::trace!(table = self.label, member = %member.name, "member does not match");
				continue;
			};
			let Some(pos) = meta.find_name(&key) else {
				tracing::trace!(table = self.label, member = %member.name, %key, "key names no enumerator");
				continue;
			};
			rows.push((
				TableSlot {
					value: meta.entries[pos].value,
					variant: pos as u16,
					payload: Some(member.payload),
				},
				&member.name,
			));
		}

		rows.sort_by_key(|(slot, _)| slot.value);

		if let Some(pair) = rows.windows(2).find(|w| w[0].0.value == w[1].0.value) {
			let shared = pair[0].0.value;
			let canonical = meta.find_value(shared).unwrap_or(pair[0].0.variant as usize);
			let err = TableError::DuplicateKey {
				table: self.label,
				key: meta.entries[canonical].name,
				first: pair[0].1.to_owned(),
				second: pair[1].1.to_owned(),
			};
			tracing::warn!(error = %err, "lookup table rejected");
			return Err(err);
		}

		let expected = meta.unique.len();
		if self.exhaustive && rows.len() != expected {
			let missing = meta
				.unique
				.iter()
				.map(|&i| &meta.entries[i as usize])
				.filter(|entry| rows.binary_search_by_key(&entry.value, |(slot, _)| slot.value).is_err())
				.map(|entry| entry.name)
				.collect();
			let err = TableError::NotExhaustive {
				table: self.label,
				mapped: rows.len(),
				expected,
				missing,
			};
			tracing::warn!(error = %err, "lookup table rejected");
			return Err(err);
		}

		tracing::debug!(table = self.label, enumeration = meta.type_name, len = rows.len(), "built lookup table");
		Ok(LookupTable::from_vec(rows.into_iter().map(|(slot, _)| slot).collect()))
	}
}
