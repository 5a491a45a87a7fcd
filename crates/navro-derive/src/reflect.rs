//! `Reflect` impl generation.

use darling::FromDeriveInput;
use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{DeriveInput, Ident, LitStr, Path};

use crate::attrs::{ReflectAttrs, ReflectFieldAttrs};

pub(crate) fn expand(input: &DeriveInput, navro: &Path) -> syn::Result<TokenStream> {
    let attrs = ReflectAttrs::from_derive_input(input)
        .map_err(|e| syn::Error::new_spanned(input, e.to_string()))?;

    let ident = &attrs.ident;

    let field_descs = attrs
        .fields()
        .map(|field| field_descriptor(field, navro))
        .collect::<syn::Result<Vec<_>>>()?;

    let mut generics = attrs.generics.clone();
    let type_params: Vec<_> = generics
        .type_params()
        .map(|param| param.ident.clone())
        .collect();
    let record_name = record_name(&attrs, &type_params, navro);
    if !type_params.is_empty() {
        let where_clause = generics.make_where_clause();
        for param in &type_params {
            where_clause
                .predicates
                .push(syn::parse_quote!(#param: #navro::Reflect));
        }
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics #navro::Reflect for #ident #ty_generics #where_clause {
            fn type_descriptor() -> #navro::TypeDescriptor {
                #navro::TypeDescriptor::record::<Self>(
                    #record_name,
                    ::std::vec![
                        #(#field_descs),*
                    ],
                )
            }
        }
    })
}

/// An explicit `#[avro(name)]` is used as written. Otherwise generic structs
/// append their type arguments so each instantiation gets its own record.
fn record_name(attrs: &ReflectAttrs, type_params: &[Ident], navro: &Path) -> TokenStream {
    let base = LitStr::new(&attrs.record_name(), Span::call_site());
    if attrs.name.is_some() || type_params.is_empty() {
        return quote! { #base };
    }
    quote! {
        #navro::generic_record_name(
            #base,
            &[#(<#type_params as #navro::Reflect>::type_descriptor as #navro::DescriptorFn),*],
        )
    }
}

fn field_descriptor(field: &ReflectFieldAttrs, navro: &Path) -> syn::Result<TokenStream> {
    let name = LitStr::new(&field.name()?, Span::call_site());

    if field.is_hidden()? {
        return Ok(quote! { #navro::FieldDescriptor::hidden(#name) });
    }

    let ty = &field.ty;
    let mut expr = quote! {
        #navro::FieldDescriptor::new(#name, <#ty as #navro::Reflect>::type_descriptor)
    };
    for (key, value) in field.tags()? {
        let key = LitStr::new(&key, Span::call_site());
        let value = LitStr::new(&value, Span::call_site());
        expr = quote! { #expr.with_tag(#key, #value) };
    }
    Ok(expr)
}
