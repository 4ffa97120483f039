//! Expansion for the `date!` macro.

// External crates
use chrono::{Datelike, NaiveDate};
use proc_macro2::TokenStream;
use quote::quote;
use syn::LitStr;

// Internal modules
use crate::support::diag;

/// Accepted date layouts, tried in order. Year-first layouts come
/// before month-first ones so four-digit-year input never parses as a
/// month.
const FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m-%d-%Y", "%m/%d/%Y"];

/// Validate the literal as a calendar date and expand to a call that
/// rebuilds it component-wise at run time.
pub fn expand(input: TokenStream) -> syn::Result<TokenStream> {
    let literal: LitStr = syn::parse2(input)?;
    let text = literal.value();

    let Some(date) = FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(&text, format).ok())
    else {
        return Err(diag::error_spanned(
            &literal,
            format!(
                "`{text}` is not a date in a supported layout (expected one of: {})",
                FORMATS.join(", ")
            ),
        ));
    };

    let year = date.year();
    let month = date.month();
    let day = date.day();
    Ok(quote! {
        ::kitbag::__support::prevalidated_date(#year, #month, #day)
    })
}
