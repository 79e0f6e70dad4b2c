//! Member collection for `#[enum_table]`.
//!
//! Each supported item kind yields [`Member`]s carrying the payload
//! expression and type the table stores for it. Payloads are built lazily so
//! members that never match (generic helpers, async functions) do not fail
//! the expansion.

use enumtab_meta::MemberKinds;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::{format_ident, quote};
use syn::ext::IdentExt;
use syn::visit_mut::{self, VisitMut};
use syn::{
	Attribute, FnArg, Fields, GenericParam, ImplItem, Item, ItemImpl, ItemMod, ItemStruct, Lifetime,
	LitStr, Signature, Type, TypeReference, parse_quote,
};

/// How a member's key is chosen.
pub enum KeyChoice {
	Derived,
	Explicit(LitStr),
	Skip,
}

/// Value stored for a member and its type.
pub struct Payload {
	pub expr: TokenStream2,
	pub ty: Type,
	/// Item the payload expression refers to, emitted next to the table.
	pub accessor: Option<TokenStream2>,
}

/// A member of the annotated item.
pub struct Member {
	pub ident: syn::Ident,
	pub class: MemberKinds,
	pub key: KeyChoice,
	pub payload: syn::Result<Payload>,
}

/// Reads and strips `#[enumtab(key = "...")]` and `#[enumtab(skip)]`.
pub fn take_key_attr(attrs: &mut Vec<Attribute>) -> syn::Result<KeyChoice> {
	let mut choice = KeyChoice::Derived;
	let mut kept = Vec::with_capacity(attrs.len());
	for attr in attrs.drain(..) {
		if !attr.path().is_ident("enumtab") {
			kept.push(attr);
			continue;
		}
		attr.parse_nested_meta(|meta| {
			if meta.path.is_ident("key") {
				choice = KeyChoice::Explicit(meta.value()?.parse()?);
				Ok(())
			} else if meta.path.is_ident("skip") {
				choice = KeyChoice::Skip;
				Ok(())
			} else {
				Err(meta.error("unknown member attribute; expected `key` or `skip`"))
			}
		})?;
	}
	*attrs = kept;
	Ok(choice)
}

/// Associated functions, methods and associated consts of an inherent impl.
pub fn from_impl(item: &mut ItemImpl) -> syn::Result<Vec<Member>> {
	if let Some((_, path, _)) = &item.trait_ {
		return Err(syn::Error::new_spanned(
			path,
			"enum_table applies to inherent impl blocks, not trait impls",
		));
	}
	if !item.generics.params.is_empty() {
		return Err(syn::Error::new_spanned(
			&item.generics,
			"enum_table cannot be applied to generic impl blocks",
		));
	}

	let self_ty = (*item.self_ty).clone();
	let mut members = Vec::new();
	for impl_item in &mut item.items {
		match impl_item {
			ImplItem::Fn(f) => {
				let key = take_key_attr(&mut f.attrs)?;
				let class = if f.sig.receiver().is_some() {
					MemberKinds::INSTANCE_FUNCTION
				} else {
					MemberKinds::STATIC_FUNCTION
				};
				let ident = f.sig.ident.clone();
				let payload = fn_pointer_type(&f.sig, Some(&self_ty)).map(|ty| Payload {
					expr: quote! { <#self_ty>::#ident as #ty },
					ty,
					accessor: None,
				});
				members.push(Member {
					ident: f.sig.ident.clone(),
					class,
					key,
					payload,
				});
			}
			ImplItem::Const(c) => {
				let key = take_key_attr(&mut c.attrs)?;
				let ident = c.ident.clone();
				let mut ty = c.ty.clone();
				ReplaceSelf { self_ty: &self_ty }.visit_type_mut(&mut ty);
				members.push(Member {
					ident: c.ident.clone(),
					class: MemberKinds::STATIC_VARIABLE,
					key,
					payload: Ok(Payload {
						expr: quote! { &<#self_ty>::#ident },
						ty: parse_quote!(&'static #ty),
						accessor: None,
					}),
				});
			}
			_ => {}
		}
	}
	Ok(members)
}

/// Named fields of a struct, each read through a generated accessor.
pub fn from_struct(item: &mut ItemStruct) -> syn::Result<Vec<Member>> {
	if !item.generics.params.is_empty() {
		return Err(syn::Error::new_spanned(
			&item.generics,
			"enum_table cannot be applied to generic structs",
		));
	}

	let struct_ident = item.ident.clone();
	let fields = match &mut item.fields {
		Fields::Named(fields) => &mut fields.named,
		Fields::Unit => return Ok(Vec::new()),
		Fields::Unnamed(fields) => {
			return Err(syn::Error::new_spanned(
				fields,
				"enum_table needs named fields to derive keys from",
			));
		}
	};

	let mut members = Vec::new();
	for field in fields {
		let key = take_key_attr(&mut field.attrs)?;
		let Some(ident) = field.ident.clone() else {
			continue;
		};
		let field_ty = &field.ty;
		let accessor = format_ident!("__enumtab_get_{}", ident.unraw());
		let ty: Type = parse_quote!(fn(&#struct_ident) -> &#field_ty);
		members.push(Member {
			ident: ident.clone(),
			class: MemberKinds::INSTANCE_VARIABLE,
			key,
			payload: Ok(Payload {
				expr: quote! { #accessor as #ty },
				ty,
				accessor: Some(quote! {
					fn #accessor(this: &#struct_ident) -> &#field_ty {
						&this.#ident
					}
				}),
			}),
		});
	}
	Ok(members)
}

/// Functions, consts and immutable statics of an inline module.
pub fn from_mod(item: &mut ItemMod) -> syn::Result<Vec<Member>> {
	let Some((_, items)) = &mut item.content else {
		return Err(syn::Error::new_spanned(
			&item.ident,
			"enum_table needs an inline module (`mod name { ... }`)",
		));
	};

	let mut members = Vec::new();
	for item in items {
		match item {
			Item::Fn(f) => {
				let key = take_key_attr(&mut f.attrs)?;
				let ident = f.sig.ident.clone();
				let payload = fn_pointer_type(&f.sig, None).map(|ty| Payload {
					expr: quote! { #ident as #ty },
					ty,
					accessor: None,
				});
				members.push(Member {
					ident: f.sig.ident.clone(),
					class: MemberKinds::STATIC_FUNCTION,
					key,
					payload,
				});
			}
			Item::Const(c) => {
				let key = take_key_attr(&mut c.attrs)?;
				members.push(reference_member(&c.ident, &c.ty, key));
			}
			Item::Static(s) if matches!(s.mutability, syn::StaticMutability::None) => {
				let key = take_key_attr(&mut s.attrs)?;
				members.push(reference_member(&s.ident, &s.ty, key));
			}
			_ => {}
		}
	}
	Ok(members)
}

fn reference_member(ident: &syn::Ident, ty: &Type, key: KeyChoice) -> Member {
	Member {
		ident: ident.clone(),
		class: MemberKinds::STATIC_VARIABLE,
		key,
		payload: Ok(Payload {
			expr: quote! { &#ident },
			ty: parse_quote!(&'static #ty),
			accessor: None,
		}),
	}
}

/// Function pointer type matching `sig`, with `Self` replaced by `self_ty`.
///
/// Elided output lifetimes of `&self` methods are tied to the receiver as
/// method elision does; the pointer type names that lifetime explicitly.
fn fn_pointer_type(sig: &Signature, self_ty: Option<&Type>) -> syn::Result<Type> {
	if let Some(asyncness) = &sig.asyncness {
		return Err(syn::Error::new_spanned(
			asyncness,
			"async functions cannot be stored in a lookup table",
		));
	}
	if let Some(variadic) = &sig.variadic {
		return Err(syn::Error::new_spanned(
			variadic,
			"variadic functions cannot be stored in a lookup table",
		));
	}

	let mut lifetimes = Vec::new();
	for param in &sig.generics.params {
		match param {
			GenericParam::Lifetime(param) => lifetimes.push(param.lifetime.clone()),
			other => {
				return Err(syn::Error::new_spanned(
					other,
					"generic functions cannot be stored in a lookup table",
				));
			}
		}
	}

	let mut output = sig.output.clone();
	let mut inputs = Vec::with_capacity(sig.inputs.len());
	for arg in &sig.inputs {
		let ty = match arg {
			FnArg::Receiver(receiver) => {
				let mut ty = (*receiver.ty).clone();
				if let Type::Reference(reference) = &mut ty {
					let receiver_lifetime = reference
						.lifetime
						.get_or_insert_with(|| {
							let named = Lifetime::new("'__enumtab_self", Span::call_site());
							lifetimes.push(named.clone());
							named
						})
						.clone();
					ElideTo(receiver_lifetime).visit_return_type_mut(&mut output);
				}
				ty
			}
			FnArg::Typed(arg) => {
				if let Type::ImplTrait(impl_trait) = &*arg.ty {
					return Err(syn::Error::new_spanned(
						impl_trait,
						"functions taking `impl Trait` cannot be stored in a lookup table",
					));
				}
				(*arg.ty).clone()
			}
		};
		inputs.push(ty);
	}

	let unsafety = &sig.unsafety;
	let abi = &sig.abi;
	let mut ty: Type = if lifetimes.is_empty() {
		parse_quote!(#unsafety #abi fn(#(#inputs),*) #output)
	} else {
		parse_quote!(for<#(#lifetimes),*> #unsafety #abi fn(#(#inputs),*) #output)
	};
	if let Some(self_ty) = self_ty {
		ReplaceSelf { self_ty }.visit_type_mut(&mut ty);
	}
	Ok(ty)
}

/// Rewrites `Self` and `Self::Assoc` in types.
struct ReplaceSelf<'a> {
	self_ty: &'a Type,
}

impl VisitMut for ReplaceSelf<'_> {
	fn visit_type_mut(&mut self, ty: &mut Type) {
		let replacement = match ty {
			Type::Path(path)
				if path.qself.is_none()
					&& path.path.leading_colon.is_none()
					&& path.path.segments.first().is_some_and(|s| s.ident == "Self") =>
			{
				let self_ty = self.self_ty;
				let rest = path.path.segments.iter().skip(1);
				Some(if path.path.segments.len() == 1 {
					self_ty.clone()
				} else {
					parse_quote!(<#self_ty> #(:: #rest)*)
				})
			}
			_ => None,
		};
		match replacement {
			Some(replacement) => *ty = replacement,
			None => visit_mut::visit_type_mut(self, ty),
		}
	}
}

/// Names elided and `'_` reference lifetimes.
struct ElideTo(Lifetime);

impl VisitMut for ElideTo {
	fn visit_type_reference_mut(&mut self, reference: &mut TypeReference) {
		if reference.lifetime.is_none() {
			reference.lifetime = Some(self.0.clone());
		}
		visit_mut::visit_type_reference_mut(self, reference);
	}

	fn visit_lifetime_mut(&mut self, lifetime: &mut Lifetime) {
		if lifetime.ident == "_" {
			*lifetime = self.0.clone();
		}
	}

	// Nested fn pointers have their own elision scope.
	fn visit_type_bare_fn_mut(&mut self, _: &mut syn::TypeBareFn) {}
}
