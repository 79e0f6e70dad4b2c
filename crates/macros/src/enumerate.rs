//! `#[derive(Enumerate)]` implementation.
//!
//! Names are all the macro can see, so it extracts entries, rejects repeated
//! names and settles the name dispatch (strategy, seed, bucket table) here.
//! Everything that depends on discriminant values is emitted as `const fn`
//! calls and finished by the compiler.

use std::collections::HashSet;

use enumtab_meta::collision::hash_buckets;
use enumtab_meta::{DispatchConfig, MAX_ENTRIES, Strategy, analyze_collisions};
use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2, TokenTree};
use quote::quote;
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields, Ident, LitInt, LitStr, parse_macro_input};

/// Entry point for the `#[derive(Enumerate)]` macro.
pub fn derive_enumerate(input: TokenStream) -> TokenStream {
	let input = parse_macro_input!(input as DeriveInput);
	expand(&input)
		.unwrap_or_else(syn::Error::into_compile_error)
		.into()
}

/// One name of a variant: its identifier or one of its aliases.
struct Entry {
	name: String,
	variant: Ident,
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
	let enum_name = &input.ident;

	let Data::Enum(data) = &input.data else {
		return Err(syn::Error::new_spanned(input, "Enumerate can only be derived for enums"));
	};
	if !input.generics.params.is_empty() {
		return Err(syn::Error::new_spanned(
			&input.generics,
			"Enumerate cannot be derived for generic enums",
		));
	}
	check_repr(input)?;
	let config = dispatch_config(input)?;

	let mut entries = Vec::new();
	let mut seen = HashSet::new();
	for variant in &data.variants {
		if !matches!(variant.fields, Fields::Unit) {
			return Err(syn::Error::new_spanned(
				&variant.fields,
				"Enumerate requires fieldless variants",
			));
		}

		let mut names = vec![(variant.ident.unraw().to_string(), variant.ident.span())];
		for attr in variant.attrs.iter().filter(|a| a.path().is_ident("enumtab")) {
			attr.parse_nested_meta(|meta| {
				if meta.path.is_ident("alias") {
					let alias: LitStr = meta.value()?.parse()?;
					names.push((alias.value(), alias.span()));
					Ok(())
				} else {
					Err(meta.error("unknown variant attribute; expected `alias`"))
				}
			})?;
		}

		for (name, span) in names {
			if name.is_empty() {
				return Err(syn::Error::new(span, "enumerator names cannot be empty"));
			}
			if !seen.insert(name.clone()) {
				return Err(syn::Error::new(
					span,
					format!("enumerator name `{name}` is declared twice"),
				));
			}
			entries.push(Entry {
				name,
				variant: variant.ident.clone(),
			});
		}
	}

	if entries.len() > MAX_ENTRIES {
		return Err(syn::Error::new_spanned(
			enum_name,
			format!("Enumerate supports at most {MAX_ENTRIES} entries, found {}", entries.len()),
		));
	}

	let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
	let report = analyze_collisions(&names);
	let strategy = config.select(names.len(), report.has_collision);
	let (seed, buckets) = match strategy {
		Strategy::Hash => (report.seed, hash_buckets(&names, report.seed, report.bucket_count)),
		Strategy::Linear | Strategy::Binary => (0, Vec::new()),
	};
	let strategy = match strategy {
		Strategy::Linear => quote!(Linear),
		Strategy::Binary => quote!(Binary),
		Strategy::Hash => quote!(Hash),
	};

	let n = entries.len();
	let type_name = enum_name.unraw().to_string();
	let entry_exprs = entries.iter().map(|entry| {
		let name = &entry.name;
		let variant = &entry.variant;
		quote! { ::enumtab::__private::EnumEntry::new(#name, #enum_name::#variant as i128) }
	});
	let variants = entries.iter().map(|entry| &entry.variant);
	let to_underlying = if data.variants.is_empty() {
		quote! { match self {} }
	} else {
		quote! { self as i128 }
	};

	Ok(quote! {
		const _: () = {
			const ENTRIES: [::enumtab::__private::EnumEntry; #n] = [#(#entry_exprs),*];
			const UNIQUE: usize = ::enumtab::__private::count_unique(&ENTRIES);

			#[automatically_derived]
			impl ::enumtab::Enumerate for #enum_name {
				const META: ::enumtab::EnumMeta = ::enumtab::EnumMeta {
					type_name: #type_name,
					entries: &ENTRIES,
					by_value: &::enumtab::__private::by_value::<#n>(&ENTRIES),
					by_name: &::enumtab::__private::by_name::<#n>(&ENTRIES),
					unique: &::enumtab::__private::unique_by_value::<UNIQUE, #n>(&ENTRIES),
					dispatch: ::enumtab::__private::NameDispatch {
						strategy: ::enumtab::__private::Strategy::#strategy,
						seed: #seed,
						buckets: &[#(#buckets),*],
					},
				};

				const VARIANTS: &'static [Self] = &[#(Self::#variants),*];

				#[inline]
				fn to_underlying(self) -> i128 {
					#to_underlying
				}
			}
		};
	})
}

/// Rejects representations whose discriminants do not fit in `i128`.
fn check_repr(input: &DeriveInput) -> syn::Result<()> {
	for attr in input.attrs.iter().filter(|a| a.path().is_ident("repr")) {
		attr.parse_nested_meta(|meta| {
			if meta.path.is_ident("u128") {
				return Err(meta.error("Enumerate does not support `repr(u128)`; use `repr(i128)` or narrower"));
			}
			// align(N), packed(N)
			if !meta.input.is_empty() && !meta.input.peek(syn::Token![,]) {
				meta.input.parse::<TokenTree>()?;
			}
			Ok(())
		})?;
	}
	Ok(())
}

/// Environment thresholds, then `#[enumtab(...)]` on the enum.
fn dispatch_config(input: &DeriveInput) -> syn::Result<DispatchConfig> {
	let mut config =
		DispatchConfig::from_env().map_err(|err| syn::Error::new(Span::call_site(), err))?;

	for attr in input.attrs.iter().filter(|a| a.path().is_ident("enumtab")) {
		attr.parse_nested_meta(|meta| {
			if meta.path.is_ident("hash_threshold") {
				let lit: LitInt = meta.value()?.parse()?;
				config.hash_threshold = lit.base10_parse()?;
				Ok(())
			} else if meta.path.is_ident("binary_threshold") {
				let lit: LitInt = meta.value()?.parse()?;
				config.binary_threshold = lit.base10_parse()?;
				Ok(())
			} else {
				Err(meta.error(
					"unknown enum attribute; expected `hash_threshold` or `binary_threshold`",
				))
			}
		})?;
	}
	Ok(config)
}
