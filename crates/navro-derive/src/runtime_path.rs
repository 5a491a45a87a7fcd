//! Locating the `navro` crate from generated code.

use proc_macro_crate::{FoundCrate, crate_name};
use proc_macro2::Span;
use syn::Ident;

/// Absolute path generated impls use to reach `navro`.
///
/// A dependency renamed in Cargo.toml is followed. Within navro's own
/// doctests and integration tests the package finds itself, and the
/// `extern crate self as navro` alias keeps `::navro` valid there too.
pub(crate) fn navro_path() -> syn::Result<syn::Path> {
    let found = crate_name("navro").map_err(|err| {
        syn::Error::new(
            Span::call_site(),
            format!("`#[derive(Reflect)]` expects `navro` among the dependencies: {err}"),
        )
    })?;

    let ident = match found {
        FoundCrate::Itself => Ident::new("navro", Span::call_site()),
        FoundCrate::Name(name) => Ident::new(&name.replace('-', "_"), Span::call_site()),
    };
    Ok(syn::parse_quote!(::#ident))
}
