//! Identifier case conversion applied to keys derived from member names.

use std::str::FromStr;

use heck::{ToKebabCase, ToLowerCamelCase, ToShoutySnakeCase, ToSnakeCase, ToUpperCamelCase};
use thiserror::Error;

/// Case conversion applied to a derived key before it is matched against
/// enumerator names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NamingRule {
	/// Use the key as derived.
	#[default]
	Verbatim,
	/// `snake_case`
	SnakeCase,
	/// `PascalCase`
	PascalCase,
	/// `camelCase`
	CamelCase,
	/// `SCREAMING_SNAKE_CASE`
	ScreamingSnakeCase,
	/// `kebab-case`
	KebabCase,
}

/// A naming rule spelling that is not recognised.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error(
	"unknown naming rule {0:?}; expected one of none, snake_case, pascal_case, camel_case, screaming_snake_case, kebab_case"
)]
pub struct UnknownNamingRule(pub String);

impl NamingRule {
	/// Converts `key` under this rule.
	pub fn apply(self, key: &str) -> String {
		match self {
			NamingRule::Verbatim => key.to_owned(),
			NamingRule::SnakeCase => key.to_snake_case(),
			NamingRule::PascalCase => key.to_upper_camel_case(),
			NamingRule::CamelCase => key.to_lower_camel_case(),
			NamingRule::ScreamingSnakeCase => key.to_shouty_snake_case(),
			NamingRule::KebabCase => key.to_kebab_case(),
		}
	}
}

impl FromStr for NamingRule {
	type Err = UnknownNamingRule;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"none" | "verbatim" => Ok(NamingRule::Verbatim),
			"snake_case" => Ok(NamingRule::SnakeCase),
			"pascal_case" | "upper_camel_case" => Ok(NamingRule::PascalCase),
			"camel_case" | "lower_camel_case" => Ok(NamingRule::CamelCase),
			"screaming_snake_case" => Ok(NamingRule::ScreamingSnakeCase),
			"kebab_case" => Ok(NamingRule::KebabCase),
			other => Err(UnknownNamingRule(other.to_owned())),
		}
	}
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	#[rstest]
	#[case(NamingRule::Verbatim, "red_light", "red_light")]
	#[case(NamingRule::PascalCase, "red_light", "RedLight")]
	#[case(NamingRule::CamelCase, "red_light", "redLight")]
	#[case(NamingRule::SnakeCase, "RedLight", "red_light")]
	#[case(NamingRule::ScreamingSnakeCase, "redLight", "RED_LIGHT")]
	#[case(NamingRule::KebabCase, "RedLight", "red-light")]
	fn converts(#[case] rule: NamingRule, #[case] input: &str, #[case] expected: &str) {
		assert_eq!(rule.apply(input), expected);
	}

	#[test]
	fn parses_spellings() {
		assert_eq!("pascal_case".parse::<NamingRule>(), Ok(NamingRule::PascalCase));
		assert_eq!("none".parse::<NamingRule>(), Ok(NamingRule::Verbatim));
		assert_eq!(
			"Title".parse::<NamingRule>(),
			Err(UnknownNamingRule("Title".to_owned()))
		);
	}
}
