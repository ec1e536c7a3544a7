//! Procedural macros used by `jsonkit_core`.
//!
//! - [`macro@context`] wraps the `anyhow::Result` of a function with a context message.
//! - [`WriteJson`](derive.WriteJson.html) implements `jsonkit_core::json::WriteJson` for
//!   structs and data-less enums.

mod args;
mod write_json;

use crate::args::Args;
use proc_macro::TokenStream;
use proc_macro2::{Ident, Span};
use quote::{ToTokens, quote};
use syn::parse_macro_input;

/// Derives `WriteJson`.
///
/// - structs with named fields are written as objects, in field order
/// - newtype structs write their single field
/// - other tuple structs are written as arrays, unit structs as `null`
/// - enums without data are written as the variant name
///
/// Fields and variants accept `#[json(rename = "...")]`; fields accept `#[json(skip)]`.
#[proc_macro_derive(WriteJson, attributes(json))]
pub fn derive_write_json(input: TokenStream) -> TokenStream {
	let input = parse_macro_input!(input as syn::DeriveInput);
	write_json::expand(input)
		.unwrap_or_else(syn::Error::into_compile_error)
		.into()
}

/// Adds a context message to the error returned by the annotated function.
///
/// ```ignore
/// #[context("while parsing an array at depth {}", depth)]
/// fn parse_array(iter: &mut ByteIterator, depth: usize) -> Result<JsonArray> { ... }
/// ```
#[proc_macro_attribute]
pub fn context(args: TokenStream, input: TokenStream) -> TokenStream {
	let Args(move_token, format_args) = parse_macro_input!(args);
	let mut input = parse_macro_input!(input as syn::ItemFn);

	if input.sig.asyncness.is_some() {
		return syn::Error::new_spanned(input.sig.asyncness, "#[context] does not support async functions")
			.to_compile_error()
			.into();
	}
	if let syn::ReturnType::Default = input.sig.output {
		return syn::Error::new_spanned(input.sig.ident, "#[context] requires a function returning Result")
			.to_compile_error()
			.into();
	}

	let body = &input.block;
	let return_type = &input.sig.output;
	let err = Ident::new("err", Span::mixed_site());
	let force_fn_once = Ident::new("force_fn_once", Span::mixed_site());

	let new_body = quote! {
		// Moving a non-`Copy` value into the closure makes it `FnOnce`, so the body may move captured values.
		let #force_fn_once = ::core::iter::empty::<()>();
		(#move_token || #return_type {
			::core::mem::drop(#force_fn_once);
			#body
		})().map_err(|#err| #err.context(format!(#format_args)).into())
	};
	input.block.stmts = vec![syn::Stmt::Expr(syn::Expr::Verbatim(new_body), None)];

	input.into_token_stream().into()
}
