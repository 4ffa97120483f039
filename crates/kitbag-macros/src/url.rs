//! Expansion for the `url!` macro.

// External crates
use proc_macro2::TokenStream;
use quote::quote;
use syn::LitStr;

// Internal modules
use crate::support::diag;

/// Validate the literal as an absolute URL and expand to a call that
/// rebuilds it at run time.
pub fn expand(input: TokenStream) -> syn::Result<TokenStream> {
    let literal: LitStr = syn::parse2(input)?;
    let text = literal.value();

    if let Err(error) = ::url::Url::parse(&text) {
        return Err(diag::error_spanned(
            &literal,
            format!("`{text}` is not a valid URL: {error}"),
        ));
    }

    Ok(quote! {
        ::kitbag::__support::prevalidated_url(#literal)
    })
}
