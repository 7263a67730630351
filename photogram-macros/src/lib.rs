use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod parsed;

use parsed::ParsedDraft;

/// Derive `photogram::Draft` for a struct with named fields.
///
/// Fields are unchecked unless they opt in. Rules apply to `String` fields only:
///
/// ```text
/// #[derive(Draft)]
/// pub struct UserFixture {
///     #[draft(required)]
///     pub name: String,
///     #[draft(required, email)]
///     pub email: String,
///     #[draft(max_len = 160)]
///     pub bio: String,
/// }
/// ```
#[proc_macro_derive(Draft, attributes(draft))]
pub fn derive_draft(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match ParsedDraft::from_input(&input) {
        Ok(parsed) => parsed.emit().into(),
        Err(err) => err.to_compile_error().into(),
    }
}
