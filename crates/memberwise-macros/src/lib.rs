//! Macros for memberwise member collection.

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod members;

/// Derives `Members` for a named-field struct.
///
/// Every named field becomes a member descriptor. `Option<T>` fields are
/// flattened into nullable accessors, `Vec<..>` fields are flagged as
/// sequences. Field behavior is tuned with `#[member(...)]`:
///
/// - `#[member(skip)]` leaves the field out entirely
/// - `#[member(tag = "name")]` adds a marker tag (repeatable)
/// - `#[member(sequence)]` forces the sequence flag on a custom container
/// - `#[member(default = expr)]` supplies the value assumed when the
///   accessor yields absent
#[proc_macro_derive(Members, attributes(member))]
pub fn derive_members(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    members::expand_derive(input)
        .unwrap_or_else(|err| err.to_compile_error())
        .into()
}
