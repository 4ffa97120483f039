use proc_macro::TokenStream;

/// Render a `syn::Error` as the tokens for a compiler diagnostic.
///
/// Every macro funnels its failures through here so reporting stays
/// uniform.
pub fn to_compile_error(error: syn::Error) -> TokenStream {
    error.to_compile_error().into()
}

/// Build a `syn::Error` whose diagnostic points at `tokens`.
pub fn error_spanned<T: quote::ToTokens>(tokens: &T, message: impl Into<String>) -> syn::Error {
    syn::Error::new_spanned(tokens, message.into())
}
