//! `#[derive(Enumeration)]` expansion.

use proc_macro::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{Attribute, Data, DeriveInput, Fields, Ident, LitStr, parse_macro_input};

/// Integer types accepted as enumeration storage.
const SUPPORTED_REPRS: [&str; 8] = ["i8", "u8", "i16", "u16", "i32", "u32", "i64", "u64"];

pub fn derive_enumeration(input: TokenStream) -> TokenStream {
	let input = parse_macro_input!(input as DeriveInput);
	match expand(&input) {
		Ok(tokens) => tokens.into(),
		Err(e) => e.to_compile_error().into(),
	}
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
	let enum_name = &input.ident;

	let Data::Enum(data) = &input.data else {
		return Err(syn::Error::new_spanned(input, "Enumeration can only be derived for enums"));
	};

	if !input.generics.params.is_empty() {
		return Err(syn::Error::new_spanned(&input.generics, "Enumeration cannot be derived for generic enums"));
	}

	let repr = storage_repr(input)?;
	let is_flags = container_flags(&input.attrs)?;

	let mut members = Vec::with_capacity(data.variants.len());
	for variant in &data.variants {
		if !matches!(variant.fields, Fields::Unit) {
			return Err(syn::Error::new_spanned(variant, "Enumeration variants cannot carry fields"));
		}

		let ident = &variant.ident;
		let name = LitStr::new(&ident.unraw().to_string(), ident.span());
		let member = match variant_label(&variant.attrs)? {
			Some(label) => quote! { ::fastenum::Member::new(#name, Self::#ident).with_label(#label) },
			None => quote! { ::fastenum::Member::new(#name, Self::#ident) },
		};
		members.push(member);
	}

	Ok(quote! {
		impl ::fastenum::Enumeration for #enum_name {
			type Repr = #repr;

			fn discover() -> ::fastenum::Discovery<Self> {
				::fastenum::Discovery::new(::std::vec![#(#members),*]).flags(#is_flags)
			}

			#[inline]
			fn to_repr(self) -> #repr {
				self as #repr
			}

			fn metadata() -> &'static ::fastenum::Metadata<Self> {
				static CACHE: ::std::sync::OnceLock<::fastenum::Metadata<#enum_name>> = ::std::sync::OnceLock::new();
				CACHE.get_or_init(::fastenum::Metadata::build)
			}
		}
	})
}

/// Finds the integer type named in `#[repr(..)]`.
fn storage_repr(input: &DeriveInput) -> syn::Result<Ident> {
	let mut found: Option<Ident> = None;

	for attr in input.attrs.iter().filter(|a| a.path().is_ident("repr")) {
		attr.parse_nested_meta(|meta| {
			let Some(ident) = meta.path.get_ident() else {
				return Ok(());
			};
			let name = ident.to_string();
			if SUPPORTED_REPRS.contains(&name.as_str()) {
				found = Some(ident.clone());
			} else if is_integer_repr(&name) {
				return Err(meta.error(format!(
					"unsupported storage representation `{name}`; use one of {}",
					SUPPORTED_REPRS.join(", ")
				)));
			} else if meta.input.peek(syn::token::Paren) {
				// align(N), packed(N)
				let args;
				syn::parenthesized!(args in meta.input);
				args.parse::<proc_macro2::TokenStream>()?;
			}
			Ok(())
		})?;
	}

	found.ok_or_else(|| {
		syn::Error::new_spanned(
			&input.ident,
			format!(
				"Enumeration requires #[repr(..)] with one of {}",
				SUPPORTED_REPRS.join(", ")
			),
		)
	})
}

fn is_integer_repr(name: &str) -> bool {
	matches!(name, "isize" | "usize" | "i128" | "u128")
}

/// Parses `#[fastenum(flags)]` on the enum itself.
fn container_flags(attrs: &[Attribute]) -> syn::Result<bool> {
	let mut flags = false;
	for attr in attrs.iter().filter(|a| a.path().is_ident("fastenum")) {
		attr.parse_nested_meta(|meta| {
			if meta.path.is_ident("flags") {
				flags = true;
				Ok(())
			} else {
				Err(meta.error("unknown fastenum attribute; expected `flags`"))
			}
		})?;
	}
	Ok(flags)
}

/// Parses `#[fastenum(label = "...")]` on a variant.
fn variant_label(attrs: &[Attribute]) -> syn::Result<Option<LitStr>> {
	let mut label = None;
	for attr in attrs.iter().filter(|a| a.path().is_ident("fastenum")) {
		attr.parse_nested_meta(|meta| {
			if meta.path.is_ident("label") {
				label = Some(meta.value()?.parse::<LitStr>()?);
				Ok(())
			} else {
				Err(meta.error("unknown fastenum variant attribute; expected `label`"))
			}
		})?;
	}
	Ok(label)
}
