//! `#[enum_table(...)]` argument parsing.

use std::collections::HashSet;

use enumtab_meta::{MemberKinds, NamePattern, NamingRule};
use syn::parse::{Parse, ParseStream};
use syn::{Ident, LitStr, Path, Token, Type, Visibility};

/// Parsed `VIS NAME: Enum, options...`.
pub struct TableArgs {
	pub vis: Visibility,
	pub name: Ident,
	pub enum_ty: Type,
	pub pattern: NamePattern,
	pub matcher: Option<Path>,
	pub filter: MemberKinds,
	pub payload: Option<Type>,
	pub exhaustive: bool,
}

impl Parse for TableArgs {
	fn parse(input: ParseStream) -> syn::Result<Self> {
		let vis: Visibility = input.parse()?;
		let name: Ident = input.parse()?;
		input.parse::<Token![:]>()?;
		let enum_ty: Type = input.parse()?;

		let mut pattern = NamePattern::default();
		let mut pattern_option: Option<Ident> = None;
		let mut matcher = None;
		let mut filter = MemberKinds::all();
		let mut payload = None;
		let mut exhaustive = false;
		let mut seen = HashSet::new();

		while !input.is_empty() {
			input.parse::<Token![,]>()?;
			if input.is_empty() {
				break;
			}
			let option: Ident = input.parse()?;
			let option_name = option.to_string();
			if !seen.insert(option_name.clone()) {
				return Err(syn::Error::new(option.span(), format!("duplicate option `{option_name}`")));
			}

			match option_name.as_str() {
				"prefix" | "suffix" | "rule" => {
					input.parse::<Token![=]>()?;
					let lit: LitStr = input.parse()?;
					match option_name.as_str() {
						"prefix" => pattern.prefix = lit.value(),
						"suffix" => pattern.suffix = lit.value(),
						_ => {
							pattern.rule = lit
								.value()
								.parse::<NamingRule>()
								.map_err(|err| syn::Error::new(lit.span(), err))?;
						}
					}
					pattern_option.get_or_insert(option);
				}
				"members" => {
					input.parse::<Token![=]>()?;
					let lit: LitStr = input.parse()?;
					filter = MemberKinds::parse(&lit.value())
						.map_err(|err| syn::Error::new(lit.span(), err))?;
				}
				"matcher" => {
					input.parse::<Token![=]>()?;
					matcher = Some(input.parse::<Path>()?);
				}
				"payload" => {
					input.parse::<Token![=]>()?;
					payload = Some(input.parse::<Type>()?);
				}
				"exhaustive" => exhaustive = true,
				_ => {
					return Err(syn::Error::new(
						option.span(),
						"unknown option; expected prefix, suffix, rule, members, matcher, payload or exhaustive",
					));
				}
			}
		}

		if matcher.is_some()
			&& let Some(option) = pattern_option
		{
			return Err(syn::Error::new(
				option.span(),
				"`matcher` replaces `prefix`, `suffix` and `rule`; use one or the other",
			));
		}

		Ok(Self {
			vis,
			name,
			enum_ty,
			pattern,
			matcher,
			filter,
			payload,
			exhaustive,
		})
	}
}
