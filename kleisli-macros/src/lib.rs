use proc_macro::TokenStream;

use crate::equalizer::derive_equalizer;

mod equalizer;

/// Implement `PartialEq`, `Eq` and `Hash` over a named set of fields.
///
/// On structs, `#[equalizer(a, b)]` restricts comparison and hashing to the
/// listed fields. Without the attribute every field takes part. On enums the
/// variant and all of its fields are compared.
#[proc_macro_derive(Equalizer, attributes(equalizer))]
pub fn equalizer(item: TokenStream) -> TokenStream {
    derive_equalizer(item.into())
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
