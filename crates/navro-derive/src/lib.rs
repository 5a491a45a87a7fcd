//! Derive macro supplying type descriptors to `navro`.
//!
//! `#[derive(Reflect)]` implements `navro::Reflect` for a named-field or unit
//! struct, describing it as a record whose fields are listed in declaration
//! order.
//!
//! # Container Attributes
//!
//! - `#[avro(name = "...")]` - Record name. Defaults to the struct identifier;
//!   generic structs append their type arguments, as in `Wrapper_i64`.
//!
//! # Field Attributes
//!
//! - `#[avro(tag = "name,opts")]` - Serialization tag under the `avro` key
//! - `#[avro(tags(json = "...", ...))]` - Tags under other keys
//! - `#[avro(skip)]` - Hide the field from introspection
//! - `#[serde(rename = "...")]` - Recorded as a tag under the `serde` key
//! - `#[serde(skip)]` - Same as `#[avro(skip)]`
//!
//! # Example
//!
//! ```ignore
//! #[derive(Reflect)]
//! struct Pointer {
//!     #[avro(tag = "in,omitempty")]
//!     input: Option<i64>,
//! }
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

mod attrs;
mod reflect;
mod runtime_path;

#[proc_macro_derive(Reflect, attributes(avro, serde))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as syn::DeriveInput);

    let expanded =
        runtime_path::navro_path().and_then(|navro| reflect::expand(&input, &navro));
    match expanded {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
