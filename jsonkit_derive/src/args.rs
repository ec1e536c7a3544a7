use proc_macro2::TokenStream as TokenStream2;
use syn::Token;
use syn::parse::{self, Parse, ParseStream};

/// Arguments of `#[context(...)]`: an optional leading `move,` followed by `format!` arguments.
#[derive(Debug)]
pub struct Args(pub Option<Token![move]>, pub TokenStream2);

impl Parse for Args {
	fn parse(input: ParseStream<'_>) -> parse::Result<Self> {
		let move_token = if input.peek(Token![move]) {
			let token = input.parse()?;
			input.parse::<Token![,]>()?;
			Some(token)
		} else {
			None
		};
		Ok(Self(move_token, input.parse()?))
	}
}

#[cfg(test)]
mod tests {
	use super::Args;
	use syn::parse_str;

	#[test]
	fn message_only() {
		let args: Args = parse_str("\"while parsing an array\"").unwrap();
		assert!(args.0.is_none());
		assert_eq!(args.1.to_string(), "\"while parsing an array\"");
	}

	#[test]
	fn message_with_arguments() {
		let args: Args = parse_str("\"while resolving segment {}\", index").unwrap();
		assert!(args.0.is_none());
		assert_eq!(args.1.to_string(), "\"while resolving segment {}\" , index");
	}

	#[test]
	fn leading_move() {
		let args: Args = parse_str("move, \"line {}\", n").unwrap();
		assert!(args.0.is_some());
		assert_eq!(args.1.to_string(), "\"line {}\" , n");
	}

	#[test]
	fn move_requires_comma() {
		let err = parse_str::<Args>("move \"x\"").unwrap_err();
		assert!(err.to_string().contains(','), "unexpected error: {err}");
	}
}
