//! Member-name patterns that turn identifiers into enumerator names.

use crate::naming::NamingRule;

/// `prefix + KEY + suffix` matcher over member identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NamePattern {
	/// Required leading text.
	pub prefix: String,
	/// Required trailing text.
	pub suffix: String,
	/// Conversion applied to the extracted key.
	pub rule: NamingRule,
}

impl NamePattern {
	/// Creates a pattern with no case conversion.
	pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
		Self {
			prefix: prefix.into(),
			suffix: suffix.into(),
			rule: NamingRule::Verbatim,
		}
	}

	/// Sets the case conversion.
	pub fn with_rule(mut self, rule: NamingRule) -> Self {
		self.rule = rule;
		self
	}

	/// Extracts and converts the key embedded in `member`.
	///
	/// Returns `None` if `member` lacks the prefix or suffix, or if nothing
	/// is left between them.
	pub fn derive_key(&self, member: &str) -> Option<String> {
		let rest = member.strip_prefix(self.prefix.as_str())?;
		let key = rest.strip_suffix(self.suffix.as_str())?;
		if key.is_empty() {
			return None;
		}
		Some(self.rule.apply(key))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn prefix_and_suffix_are_stripped() {
		let pattern = NamePattern::new("get_", "_color");
		assert_eq!(pattern.derive_key("get_red_color").as_deref(), Some("red"));
		assert_eq!(pattern.derive_key("set_red_color"), None);
		assert_eq!(pattern.derive_key("get_red"), None);
		assert_eq!(pattern.derive_key("get__color"), None);
	}

	#[test]
	fn overlapping_prefix_and_suffix_do_not_match() {
		assert_eq!(NamePattern::new("ab", "ba").derive_key("aba"), None);
	}

	#[test]
	fn rule_is_applied_after_extraction() {
		let pattern = NamePattern::new("on_", "").with_rule(NamingRule::PascalCase);
		assert_eq!(pattern.derive_key("on_key_press").as_deref(), Some("KeyPress"));
	}
}
