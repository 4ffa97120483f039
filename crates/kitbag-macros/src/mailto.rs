//! Expansion for the `mailto!` macro.

// Standard library
use std::sync::LazyLock;

// External crates
use proc_macro2::TokenStream;
use quote::quote;
use regex::Regex;
use syn::LitStr;

// Internal modules
use crate::support::diag;

/// HTML5 email shape: printable local part, dotted hostname labels.
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .unwrap()
});

/// Validate the literal as an email address and expand to a call that
/// rebuilds the `mailto:` URL at run time.
pub fn expand(input: TokenStream) -> syn::Result<TokenStream> {
    let literal: LitStr = syn::parse2(input)?;
    let address = literal.value();

    if !EMAIL.is_match(&address) {
        return Err(diag::error_spanned(
            &literal,
            format!("`{address}` is not a valid email address"),
        ));
    }

    let target = LitStr::new(&format!("mailto:{address}"), literal.span());
    Ok(quote! {
        ::kitbag::__support::prevalidated_url(#target)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_prefixes_the_scheme() {
        let expanded = expand(quote! { "team@example.com" }).unwrap();
        let rendered = expanded.to_string();
        assert!(rendered.contains("prevalidated_url"));
        assert!(rendered.contains("mailto:team@example.com"));
    }

    #[test]
    fn test_expand_accepts_plus_tagging() {
        assert!(expand(quote! { "team+billing@example.co.uk" }).is_ok());
    }

    #[test]
    fn test_expand_rejects_malformed_addresses() {
        for bad in ["plain-string", "user@", "@example.com", "two words@example.com"] {
            let literal = LitStr::new(bad, proc_macro2::Span::call_site());
            let error = expand(quote! { #literal }).unwrap_err();
            assert!(
                error.to_string().contains("is not a valid email address"),
                "input: {bad:?}"
            );
        }
    }

    #[test]
    fn test_expand_rejects_non_literal_input() {
        assert!(expand(quote! { team@example.com }).is_err());
    }
}
