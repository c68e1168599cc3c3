//! Implementation of the `#[derive(Record)]` macro.
//!
//! Generates a `Record` implementation and field-name constants usable as
//! column keys.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{spanned::Spanned, Data, DeriveInput, Error, Fields, Ident, Result};

use super::attrs::{parse_field_attrs, FieldKind};

/// Main implementation of the Record derive macro.
pub fn record_derive_impl(input: DeriveInput) -> Result<TokenStream> {
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(Error::new(
                    input.span(),
                    "Record can only be derived for structs with named fields",
                ))
            }
        },
        _ => {
            return Err(Error::new(
                input.span(),
                "Record can only be derived for structs",
            ))
        }
    };

    let mut field_matches: Vec<TokenStream> = Vec::new();
    let mut field_constants: Vec<TokenStream> = Vec::new();

    for field in fields.iter() {
        let field_name = field
            .ident
            .as_ref()
            .ok_or_else(|| Error::new(field.span(), "expected named field"))?;

        let attrs = parse_field_attrs(&field.attrs)?;
        if attrs.skip {
            continue;
        }
        // Unannotated fields are not exposed.
        let kind = match attrs.kind {
            Some(kind) => kind,
            None => continue,
        };

        let key = attrs.rename.unwrap_or_else(|| field_name.to_string());
        let const_name = format_ident!("{}", to_screaming_snake_case(&key));

        field_constants.push(quote! {
            /// Record key of this field.
            pub const #const_name: &'static str = #key;
        });

        let value_expr = if attrs.optional {
            optional_value(field_name, kind)
        } else {
            required_value(field_name, kind)
        };

        field_matches.push(quote! {
            #key => #value_expr,
        });
    }

    let expanded = quote! {
        impl #impl_generics #struct_name #ty_generics #where_clause {
            #(#field_constants)*
        }

        impl #impl_generics ::tabview::seeker::Record for #struct_name #ty_generics #where_clause {
            fn field(&self, key: &str) -> ::tabview::seeker::Value<'_> {
                match key {
                    #(#field_matches)*
                    _ => ::tabview::seeker::Value::None,
                }
            }
        }
    };

    Ok(expanded)
}

fn required_value(field_name: &Ident, kind: FieldKind) -> TokenStream {
    match kind {
        FieldKind::String => {
            quote! { ::tabview::seeker::Value::String(&self.#field_name) }
        }
        FieldKind::Number => {
            quote! {
                ::tabview::seeker::Value::Number(::tabview::seeker::Number::from(self.#field_name))
            }
        }
        FieldKind::Timestamp => {
            quote! {
                ::tabview::seeker::Value::Timestamp(
                    ::tabview::seeker::RecordTimestamp::record_timestamp(&self.#field_name)
                )
            }
        }
        FieldKind::Bool => {
            quote! { ::tabview::seeker::Value::Bool(self.#field_name) }
        }
    }
}

fn optional_value(field_name: &Ident, kind: FieldKind) -> TokenStream {
    let some = match kind {
        FieldKind::String => quote! { ::tabview::seeker::Value::String(v) },
        FieldKind::Number => {
            quote! { ::tabview::seeker::Value::Number(::tabview::seeker::Number::from(*v)) }
        }
        FieldKind::Timestamp => quote! {
            ::tabview::seeker::Value::Timestamp(
                ::tabview::seeker::RecordTimestamp::record_timestamp(v)
            )
        },
        FieldKind::Bool => quote! { ::tabview::seeker::Value::Bool(*v) },
    };
    quote! {
        match &self.#field_name {
            ::core::option::Option::Some(v) => #some,
            ::core::option::Option::None => ::tabview::seeker::Value::None,
        }
    }
}

/// Convert a string to SCREAMING_SNAKE_CASE.
fn to_screaming_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    let mut prev_was_lower = false;

    for c in s.chars() {
        if c.is_uppercase() {
            if prev_was_lower {
                result.push('_');
            }
            result.push(c);
            prev_was_lower = false;
        } else if c == '_' || c == '-' || c == '.' {
            result.push('_');
            prev_was_lower = false;
        } else {
            result.push(c.to_ascii_uppercase());
            prev_was_lower = c.is_alphanumeric();
        }
    }

    result
}
