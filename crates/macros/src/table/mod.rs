//! `#[enum_table(...)]` implementation.
//!
//! The macro keeps the annotated item, strips member attributes and emits a
//! `static` built by `const` evaluation:
//!
//! ```ignore
//! static NAME: LookupTable<Enum, Payload> = {
//!     const CANDIDATES: [Candidate<Payload>; K] = [...];
//!     const LEN: usize = resolved_count::<Enum, Payload>(&CANDIDATES);
//!     static SLOTS: [TableSlot<Payload>; LEN] = build_slots::<Enum, Payload, LEN>(&CANDIDATES, exhaustive);
//!     LookupTable::from_static(&SLOTS)
//! };
//! ```
//!
//! Module members are only nameable from inside the module, so for an inline
//! module the candidates (and a payload type alias) are emitted into it and
//! referenced from outside.

mod args;
mod members;

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::ext::IdentExt;
use syn::{Ident, Item, parse_macro_input, parse_quote};

use self::args::TableArgs;
use self::members::{KeyChoice, Member, Payload};

/// Entry point for the `#[enum_table(...)]` attribute.
pub fn enum_table(attr: TokenStream, item: TokenStream) -> TokenStream {
	let args = parse_macro_input!(attr as TableArgs);
	let item = parse_macro_input!(item as Item);
	expand(args, item)
		.unwrap_or_else(syn::Error::into_compile_error)
		.into()
}

/// Where the candidate list is emitted.
enum Site {
	/// Next to the table, in the item's own scope.
	Local,
	/// Inside the annotated inline module.
	Module(Ident),
}

/// How a selected member's key is produced.
enum Key {
	Fixed(String),
	Matcher,
}

struct Selected {
	name: String,
	key: Key,
	payload: Payload,
}

fn expand(args: TableArgs, mut item: Item) -> syn::Result<TokenStream2> {
	let (members, site) = match &mut item {
		Item::Impl(item_impl) => (members::from_impl(item_impl)?, Site::Local),
		Item::Struct(item_struct) => (members::from_struct(item_struct)?, Site::Local),
		Item::Mod(item_mod) => (
			members::from_mod(item_mod)?,
			Site::Module(item_mod.ident.clone()),
		),
		other => {
			return Err(syn::Error::new_spanned(
				other,
				"enum_table applies to an impl block, a struct or an inline module",
			));
		}
	};

	let selected = select(&args, members)?;

	let payload_ty = match (&args.payload, selected.first()) {
		(Some(explicit), _) => explicit.clone(),
		(None, Some(first)) => first.payload.ty.clone(),
		(None, None) => {
			return Err(syn::Error::new_spanned(
				&args.name,
				"no member matches this table; add `payload = Type` to declare it empty",
			));
		}
	};

	let table_name = args.name.unraw().to_string();
	let payload_alias = format_ident!("__EnumtabPayload{}", table_name);
	let candidates_ident = format_ident!("__ENUMTAB_CANDIDATES_{}", table_name);
	let matcher_fn = format_ident!("__enumtab_matcher_{}", table_name.to_lowercase());

	let k = selected.len();
	let member_names = selected.iter().map(|s| s.name.as_str());
	let payload_exprs = selected.iter().map(|s| &s.payload.expr);
	let accessors = selected.iter().filter_map(|s| s.payload.accessor.as_ref());

	let TableArgs {
		vis,
		name,
		enum_ty,
		matcher,
		exhaustive,
		..
	} = &args;

	let tokens = match site {
		Site::Local => {
			let keys = selected.iter().map(|s| key_expr(&s.key, &s.name, quote!(#matcher)));
			quote! {
				#item

				#vis static #name: ::enumtab::LookupTable<#enum_ty, #payload_ty> = {
					#(#accessors)*

					const CANDIDATES: [::enumtab::__private::Candidate<#payload_ty>; #k] = [
						#(::enumtab::__private::Candidate::new(#member_names, #keys, #payload_exprs)),*
					];
					const LEN: usize =
						::enumtab::__private::resolved_count::<#enum_ty, #payload_ty>(&CANDIDATES);
					static SLOTS: [::enumtab::__private::TableSlot<#payload_ty>; LEN] =
						::enumtab::__private::build_slots::<#enum_ty, #payload_ty, LEN>(&CANDIDATES, #exhaustive);

					::enumtab::__private::LookupTable::from_static(&SLOTS)
				};
			}
		}
		Site::Module(mod_ident) => {
			// An explicit payload type resolves in the outer scope, a derived
			// one inside the module; the alias lives where the type resolves.
			let alias = quote! {
				#[doc(hidden)]
				#[allow(non_camel_case_types)]
			};
			let (inner_ty, outer_ty, outer_alias, inner_alias) = if args.payload.is_some() {
				(
					quote!(super::#payload_alias),
					quote!(#payload_ty),
					Some(quote! { #alias type #payload_alias = #payload_ty; }),
					None,
				)
			} else {
				(
					quote!(#payload_ty),
					quote!(#mod_ident::#payload_alias),
					None,
					Some(quote! { #alias pub(super) type #payload_alias = #payload_ty; }),
				)
			};
			let matcher_wrapper = matcher.as_ref().map(|matcher| {
				quote! {
					#[doc(hidden)]
					const fn #matcher_fn(member: &'static str) -> ::core::option::Option<&'static str> {
						#matcher(member)
					}
				}
			});
			let keys = selected
				.iter()
				.map(|s| key_expr(&s.key, &s.name, quote!(super::#matcher_fn)));

			if let Item::Mod(item_mod) = &mut item
				&& let Some((_, items)) = &mut item_mod.content
			{
				if let Some(inner_alias) = inner_alias {
					items.push(parse_quote!(#inner_alias));
				}
				items.push(parse_quote! {
					#[doc(hidden)]
					pub(super) const #candidates_ident: [::enumtab::__private::Candidate<#inner_ty>; #k] = [
						#(::enumtab::__private::Candidate::new(#member_names, #keys, #payload_exprs)),*
					];
				});
			}

			quote! {
				#outer_alias
				#matcher_wrapper
				#item

				#vis static #name: ::enumtab::LookupTable<#enum_ty, #outer_ty> = {
					const LEN: usize = ::enumtab::__private::resolved_count::<#enum_ty, #outer_ty>(
						&#mod_ident::#candidates_ident,
					);
					static SLOTS: [::enumtab::__private::TableSlot<#outer_ty>; LEN] =
						::enumtab::__private::build_slots::<#enum_ty, #outer_ty, LEN>(
							&#mod_ident::#candidates_ident,
							#exhaustive,
						);

					::enumtab::__private::LookupTable::from_static(&SLOTS)
				};
			}
		}
	};
	Ok(tokens)
}

/// Applies the member filter and key derivation.
///
/// Enumerator names are not visible here, so duplicate keys are left to
/// `build_slots`, which only compares keys that resolve.
fn select(args: &TableArgs, members: Vec<Member>) -> syn::Result<Vec<Selected>> {
	let mut selected = Vec::new();

	for member in members {
		if !args.filter.admits(member.class) {
			continue;
		}
		let name = member.ident.unraw().to_string();
		let key = match member.key {
			KeyChoice::Skip => continue,
			KeyChoice::Explicit(lit) => Key::Fixed(lit.value()),
			KeyChoice::Derived if args.matcher.is_some() => Key::Matcher,
			KeyChoice::Derived => match args.pattern.derive_key(&name) {
				Some(key) => Key::Fixed(key),
				None => continue,
			},
		};

		selected.push(Selected {
			name,
			key,
			payload: member.payload?,
		});
	}
	Ok(selected)
}

fn key_expr(key: &Key, member: &str, matcher: TokenStream2) -> TokenStream2 {
	match key {
		Key::Fixed(key) => quote! { ::core::option::Option::Some(#key) },
		Key::Matcher => quote! { #matcher(#member) },
	}
}
