//! Expansion for the `link!` macro.

// External crates
use proc_macro2::TokenStream;
use quote::quote;
use syn::LitStr;

// Internal modules
use crate::support::diag;

/// Schemes a browser will open.
const LINKABLE_SCHEMES: &[&str] = &["http", "https"];

/// Validate the literal as a linkable web URL and expand to a call
/// that rebuilds it at run time.
pub fn expand(input: TokenStream) -> syn::Result<TokenStream> {
    let literal: LitStr = syn::parse2(input)?;
    let text = literal.value();

    let parsed = ::url::Url::parse(&text).map_err(|error| {
        diag::error_spanned(&literal, format!("`{text}` is not a valid URL: {error}"))
    })?;

    if !LINKABLE_SCHEMES.contains(&parsed.scheme()) {
        return Err(diag::error_spanned(
            &literal,
            format!(
                "`{text}` is not linkable: expected an http or https URL, found scheme `{}`",
                parsed.scheme()
            ),
        ));
    }

    Ok(quote! {
        ::kitbag::__support::prevalidated_url(#literal)
    })
}
