use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Fields, Index, LitStr, parse_quote, spanned::Spanned};

/// Field and variant options taken from `#[json(...)]`.
#[derive(Default)]
struct JsonAttrs {
	rename: Option<String>,
	skip: bool,
}

fn json_attrs(attrs: &[Attribute]) -> syn::Result<JsonAttrs> {
	let mut out = JsonAttrs::default();
	for attr in attrs {
		if !attr.path().is_ident("json") {
			continue;
		}
		attr.parse_nested_meta(|meta| {
			if meta.path.is_ident("rename") {
				out.rename = Some(meta.value()?.parse::<LitStr>()?.value());
				Ok(())
			} else if meta.path.is_ident("skip") {
				out.skip = true;
				Ok(())
			} else {
				Err(meta.error("unsupported json attribute, expected `rename = \"...\"` or `skip`"))
			}
		})?;
	}
	Ok(out)
}

pub fn expand(mut input: DeriveInput) -> syn::Result<TokenStream> {
	let body = match &input.data {
		Data::Struct(data) => struct_body(&data.fields)?,
		Data::Enum(data) => {
			let mut arms = Vec::new();
			for variant in &data.variants {
				if !matches!(variant.fields, Fields::Unit) {
					return Err(syn::Error::new(
						variant.span(),
						"WriteJson can only be derived for enums whose variants carry no data",
					));
				}
				let attrs = json_attrs(&variant.attrs)?;
				let ident = &variant.ident;
				let name = LitStr::new(&attrs.rename.unwrap_or_else(|| ident.to_string()), Span::call_site());
				arms.push(quote! { Self::#ident => writer.write_str(#name), });
			}
			if arms.is_empty() {
				quote! { match *self {} }
			} else {
				quote! { match self { #(#arms)* } }
			}
		}
		Data::Union(data) => {
			return Err(syn::Error::new(
				data.union_token.span(),
				"WriteJson cannot be derived for unions",
			));
		}
	};

	let type_params: Vec<_> = input.generics.type_params().map(|p| p.ident.clone()).collect();
	let where_clause = input.generics.make_where_clause();
	for param in type_params {
		where_clause
			.predicates
			.push(parse_quote! { #param: ::jsonkit_core::json::WriteJson });
	}

	let name = &input.ident;
	let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

	Ok(quote! {
		impl #impl_generics ::jsonkit_core::json::WriteJson for #name #ty_generics #where_clause {
			fn write_json(
				&self,
				writer: &mut ::jsonkit_core::json::JsonWriter<'_>,
			) -> ::jsonkit_core::anyhow::Result<()> {
				#body
			}
		}
	})
}

fn struct_body(fields: &Fields) -> syn::Result<TokenStream> {
	Ok(match fields {
		Fields::Named(named) => {
			let mut entries = Vec::new();
			for field in &named.named {
				let attrs = json_attrs(&field.attrs)?;
				if attrs.skip {
					continue;
				}
				let Some(ident) = field.ident.as_ref() else {
					continue;
				};
				let key = LitStr::new(&attrs.rename.unwrap_or_else(|| ident.to_string()), Span::call_site());
				entries.push(quote! { (#key, &self.#ident as &dyn ::jsonkit_core::json::WriteJson) });
			}
			if entries.is_empty() {
				quote! {
					writer.write_object(::core::iter::empty::<(&str, &dyn ::jsonkit_core::json::WriteJson)>())
				}
			} else {
				quote! { writer.write_object([#(#entries),*]) }
			}
		}
		Fields::Unnamed(unnamed) if unnamed.unnamed.len() == 1 => {
			quote! { ::jsonkit_core::json::WriteJson::write_json(&self.0, writer) }
		}
		Fields::Unnamed(unnamed) if unnamed.unnamed.is_empty() => {
			quote! { writer.write_array(::core::iter::empty::<&dyn ::jsonkit_core::json::WriteJson>()) }
		}
		Fields::Unnamed(unnamed) => {
			let items = (0..unnamed.unnamed.len()).map(|i| {
				let index = Index::from(i);
				quote! { &self.#index as &dyn ::jsonkit_core::json::WriteJson }
			});
			quote! { writer.write_array([#(#items),*]) }
		}
		Fields::Unit => quote! { writer.write_null() },
	})
}

#[cfg(test)]
mod tests {
	use super::expand;
	use pretty_assertions::assert_eq;
	use syn::parse_quote;

	fn pretty(input: syn::DeriveInput) -> String {
		let tokens = expand(input).unwrap();
		prettyplease::unparse(&syn::parse2(tokens).unwrap())
	}

	#[test]
	fn named_struct_becomes_object() {
		let out = pretty(parse_quote! {
			struct Point {
				x: f64,
				#[json(rename = "y-axis")]
				y: f64,
				#[json(skip)]
				cache: Vec<u8>,
			}
		});
		assert!(out.contains("\"x\""), "{out}");
		assert!(out.contains("&self.x as &dyn ::jsonkit_core::json::WriteJson"), "{out}");
		assert!(out.contains("\"y-axis\""), "{out}");
		assert!(out.contains("&self.y as &dyn ::jsonkit_core::json::WriteJson"), "{out}");
		assert!(!out.contains("cache"), "{out}");
	}

	#[test]
	fn newtype_delegates() {
		let out = pretty(parse_quote! { struct Meters(f64); });
		assert!(out.contains("::jsonkit_core::json::WriteJson::write_json(&self.0, writer)"), "{out}");
	}

	#[test]
	fn unit_enum_becomes_string() {
		let out = pretty(parse_quote! {
			enum Mode {
				Fast,
				#[json(rename = "slow")]
				Slow,
			}
		});
		assert!(out.contains("Self::Fast => writer.write_str(\"Fast\")"), "{out}");
		assert!(out.contains("Self::Slow => writer.write_str(\"slow\")"), "{out}");
	}

	#[test]
	fn struct_without_written_fields_uses_empty_iterator() {
		let out = pretty(parse_quote! { struct Hidden { #[json(skip)] secret: String } });
		assert!(out.contains("::core::iter::empty"), "{out}");
		assert!(!out.contains("secret"), "{out}");
	}

	#[test]
	fn generic_params_get_bounds() {
		let out = pretty(parse_quote! { struct Wrapper<T> { inner: T } });
		assert!(out.contains("T: ::jsonkit_core::json::WriteJson"), "{out}");
	}

	#[test]
	fn data_carrying_enum_is_rejected() {
		let err = expand(parse_quote! { enum Shape { Circle(f64) } }).unwrap_err();
		assert_eq!(
			err.to_string(),
			"WriteJson can only be derived for enums whose variants carry no data"
		);
	}

	#[test]
	fn unknown_attribute_is_rejected() {
		let err = expand(parse_quote! { struct A { #[json(flatten)] b: u8 } }).unwrap_err();
		assert!(err.to_string().starts_with("unsupported json attribute"));
	}
}
