//! Attribute parsing for `#[derive(Reflect)]` using darling.
//!
//! Container and field options live under `#[avro(...)]`. Field-level
//! `#[serde(...)]` attributes are forwarded so a serde `rename` can act as a
//! tag and a serde `skip` hides the field.

use std::collections::HashMap;

use darling::{FromDeriveInput, FromField};
use syn::ext::IdentExt;
use syn::{Attribute, Ident, LitStr, Type};

/// Tag key for `#[avro(tag = "...")]`.
pub const AVRO_TAG_KEY: &str = "avro";
/// Tag key a serde `rename` is recorded under.
pub const SERDE_TAG_KEY: &str = "serde";

/// Container-level attributes.
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(avro), supports(struct_named, struct_unit))]
pub struct ReflectAttrs {
    pub ident: Ident,
    pub generics: syn::Generics,
    pub data: darling::ast::Data<(), ReflectFieldAttrs>,

    /// Record name override (defaults to the struct identifier).
    #[darling(default)]
    pub name: Option<String>,
}

/// Field-level attributes.
#[derive(Debug, Clone, FromField)]
#[darling(attributes(avro), forward_attrs(serde))]
pub struct ReflectFieldAttrs {
    pub ident: Option<Ident>,
    pub ty: Type,
    /// Forwarded `#[serde(...)]` attributes.
    pub attrs: Vec<Attribute>,

    /// Serialization tag under the `avro` key, e.g. `"in,omitempty"`.
    #[darling(default)]
    pub tag: Option<String>,

    /// Tags under other keys: `tags(json = "...", bson = "...")`.
    #[darling(default)]
    pub tags: HashMap<String, String>,

    /// Hide the field from introspection.
    #[darling(default)]
    pub skip: bool,
}

/// What the forwarded serde attributes contribute.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SerdeFieldAttrs {
    pub rename: Option<String>,
    pub skip: bool,
}

impl ReflectAttrs {
    pub fn record_name(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| self.ident.unraw().to_string())
    }

    pub fn fields(&self) -> impl Iterator<Item = &ReflectFieldAttrs> {
        match &self.data {
            darling::ast::Data::Struct(fields) => fields.iter(),
            _ => unreachable!("ReflectAttrs only supports structs"),
        }
    }
}

impl ReflectFieldAttrs {
    /// The declared identifier, without any `r#` prefix.
    pub fn name(&self) -> syn::Result<String> {
        self.ident
            .as_ref()
            .map(|ident| ident.unraw().to_string())
            .ok_or_else(|| syn::Error::new_spanned(&self.ty, "Reflect requires named fields"))
    }

    pub fn serde(&self) -> syn::Result<SerdeFieldAttrs> {
        parse_serde_attrs(&self.attrs)
    }

    pub fn is_hidden(&self) -> syn::Result<bool> {
        Ok(self.skip || self.serde()?.skip)
    }

    /// Tags as `(key, value)` pairs, sorted by key, with the `avro` tag last
    /// so it wins over an `avro` entry in `tags(...)`.
    pub fn tags(&self) -> syn::Result<Vec<(String, String)>> {
        let mut tags: Vec<(String, String)> = self
            .tags
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        tags.sort();

        if let Some(rename) = self.serde()?.rename {
            tags.push((SERDE_TAG_KEY.to_string(), rename));
        }
        if let Some(tag) = &self.tag {
            tags.push((AVRO_TAG_KEY.to_string(), tag.clone()));
        }
        Ok(tags)
    }
}

fn parse_serde_attrs(attrs: &[Attribute]) -> syn::Result<SerdeFieldAttrs> {
    let mut out = SerdeFieldAttrs::default();
    for attr in attrs {
        if !attr.path().is_ident("serde") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                if meta.input.peek(syn::Token![=]) {
                    let lit: LitStr = meta.value()?.parse()?;
                    out.rename = Some(lit.value());
                } else {
                    meta.parse_nested_meta(|nested| {
                        if nested.path.is_ident("serialize") {
                            let lit: LitStr = nested.value()?.parse()?;
                            out.rename = Some(lit.value());
                        } else {
                            skip_meta_value(&nested)?;
                        }
                        Ok(())
                    })?;
                }
            } else if meta.path.is_ident("skip") || meta.path.is_ident("skip_serializing") {
                out.skip = true;
            } else {
                skip_meta_value(&meta)?;
            }
            Ok(())
        })?;
    }
    Ok(out)
}

/// Consume whatever follows a serde key we do not interpret.
fn skip_meta_value(meta: &syn::meta::ParseNestedMeta<'_>) -> syn::Result<()> {
    if meta.input.peek(syn::Token![=]) {
        let _: syn::Expr = meta.value()?.parse()?;
    } else if meta.input.peek(syn::token::Paren) {
        meta.parse_nested_meta(|nested| skip_meta_value(&nested))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use darling::FromDeriveInput;
    use syn::parse_quote;

    #[test]
    fn test_basic_parsing() {
        let input: syn::DeriveInput = parse_quote! {
            #[avro(name = "PointerRecord")]
            pub struct Pointer {
                #[avro(tag = "in,omitempty")]
                pub input: Option<i64>,
                pub other: String,
            }
        };

        let attrs = ReflectAttrs::from_derive_input(&input).unwrap();
        assert_eq!(attrs.record_name(), "PointerRecord");

        let fields: Vec<_> = attrs.fields().collect();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].name().unwrap(), "input");
        assert_eq!(
            fields[0].tags().unwrap(),
            vec![("avro".to_string(), "in,omitempty".to_string())]
        );
        assert!(fields[1].tags().unwrap().is_empty());
    }

    #[test]
    fn test_record_name_defaults_to_ident() {
        let input: syn::DeriveInput = parse_quote! {
            struct r#Type {
                value: i32,
            }
        };

        let attrs = ReflectAttrs::from_derive_input(&input).unwrap();
        assert_eq!(attrs.record_name(), "Type");
    }

    #[test]
    fn test_extra_tag_keys_are_sorted() {
        let input: syn::DeriveInput = parse_quote! {
            struct Tagged {
                #[avro(tags(json = "j", bson = "b"), tag = "a")]
                value: i32,
            }
        };

        let attrs = ReflectAttrs::from_derive_input(&input).unwrap();
        let field = attrs.fields().next().unwrap();
        assert_eq!(
            field.tags().unwrap(),
            vec![
                ("bson".to_string(), "b".to_string()),
                ("json".to_string(), "j".to_string()),
                ("avro".to_string(), "a".to_string()),
            ]
        );
    }

    #[test]
    fn test_serde_rename_and_skip() {
        let input: syn::DeriveInput = parse_quote! {
            struct WithSerde {
                #[serde(default, rename = "renamed", skip_serializing_if = "Option::is_none")]
                value: Option<i32>,
                #[serde(skip)]
                cache: Vec<u8>,
                #[serde(rename(serialize = "out", deserialize = "in"))]
                both: bool,
            }
        };

        let attrs = ReflectAttrs::from_derive_input(&input).unwrap();
        let fields: Vec<_> = attrs.fields().collect();

        assert_eq!(
            fields[0].tags().unwrap(),
            vec![("serde".to_string(), "renamed".to_string())]
        );
        assert!(!fields[0].is_hidden().unwrap());
        assert!(fields[1].is_hidden().unwrap());
        assert_eq!(
            fields[2].tags().unwrap(),
            vec![("serde".to_string(), "out".to_string())]
        );
    }

    #[test]
    fn test_avro_skip() {
        let input: syn::DeriveInput = parse_quote! {
            struct Hidden {
                #[avro(skip)]
                handle: fn(),
            }
        };

        let attrs = ReflectAttrs::from_derive_input(&input).unwrap();
        assert!(attrs.fields().next().unwrap().is_hidden().unwrap());
    }

    #[test]
    fn test_rejects_enums() {
        let input: syn::DeriveInput = parse_quote! {
            enum Shape {
                Circle,
            }
        };

        assert!(ReflectAttrs::from_derive_input(&input).is_err());
    }

    #[test]
    fn test_rejects_tuple_structs() {
        let input: syn::DeriveInput = parse_quote! {
            struct Pair(i32, i32);
        };

        assert!(ReflectAttrs::from_derive_input(&input).is_err());
    }

    #[test]
    fn test_rejects_unknown_keys() {
        let input: syn::DeriveInput = parse_quote! {
            struct Unknown {
                #[avro(alias = "x")]
                value: i32,
            }
        };

        assert!(ReflectAttrs::from_derive_input(&input).is_err());
    }
}
