//! Attribute parsing for the Record derive macro.
//!
//! Parses the `#[field(...)]` attributes placed on struct fields.

use proc_macro2::Span;
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    spanned::Spanned,
    Attribute, Error, Ident, Lit, Meta, Result, Token,
};

/// The kind of value a field exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// `#[field(String)]`, for `String` or `&str` fields.
    String,
    /// `#[field(Number)]`, for any primitive numeric field.
    Number,
    /// `#[field(Timestamp)]`, requires `RecordTimestamp` on the field type.
    Timestamp,
    /// `#[field(Bool)]`.
    Bool,
}

impl FieldKind {
    fn parse_name(name: &str, span: Span) -> Result<Self> {
        match name {
            "String" | "string" | "str" => Ok(FieldKind::String),
            "Number" | "number" => Ok(FieldKind::Number),
            "Timestamp" | "timestamp" => Ok(FieldKind::Timestamp),
            "Bool" | "boolean" => Ok(FieldKind::Bool),
            other => Err(Error::new(
                span,
                format!(
                    "unknown field kind: '{}'. Expected one of: String, Number, Timestamp, Bool",
                    other
                ),
            )),
        }
    }
}

/// Field-level attributes from `#[field(...)]`.
#[derive(Debug, Clone)]
pub struct FieldAttr {
    pub kind: Option<FieldKind>,
    /// Exclude the field.
    pub skip: bool,
    /// The field is an `Option<_>`; `None` maps to a missing value.
    pub optional: bool,
    /// Record key to expose the field under (default: the field name).
    pub rename: Option<String>,
}

impl Default for FieldAttr {
    fn default() -> Self {
        FieldAttr {
            kind: None,
            skip: false,
            optional: false,
            rename: None,
        }
    }
}

impl Parse for FieldAttr {
    fn parse(input: ParseStream) -> Result<Self> {
        let mut attr = FieldAttr::default();

        let content: Punctuated<Meta, Token![,]> = Punctuated::parse_terminated(input)?;

        for meta in content {
            match &meta {
                Meta::Path(p) => {
                    if p.is_ident("skip") {
                        attr.skip = true;
                    } else if p.is_ident("optional") {
                        attr.optional = true;
                    } else if let Some(ident) = p.get_ident() {
                        attr.kind = Some(kind_from_ident(ident)?);
                    } else {
                        return Err(Error::new(
                            p.span(),
                            "expected field kind: String, Number, Timestamp, Bool, optional or skip",
                        ));
                    }
                }

                Meta::NameValue(nv) => {
                    let text = match &nv.value {
                        syn::Expr::Lit(syn::ExprLit {
                            lit: Lit::Str(s), ..
                        }) => s,
                        _ => {
                            return Err(Error::new(
                                nv.value.span(),
                                "expected a string literal",
                            ))
                        }
                    };
                    if nv.path.is_ident("rename") {
                        attr.rename = Some(text.value());
                    } else if nv.path.is_ident("kind") {
                        attr.kind = Some(FieldKind::parse_name(&text.value(), text.span())?);
                    } else {
                        return Err(Error::new(
                            nv.path.span(),
                            "unknown attribute. Expected: rename or kind",
                        ));
                    }
                }

                _ => {
                    return Err(Error::new(
                        meta.span(),
                        "unknown field attribute. Expected: String, Number, Timestamp, Bool, optional, skip, rename = \"...\", or kind = \"...\"",
                    ));
                }
            }
        }

        Ok(attr)
    }
}

fn kind_from_ident(ident: &Ident) -> Result<FieldKind> {
    FieldKind::parse_name(&ident.to_string(), ident.span())
}

/// Extract `#[field(...)]` attributes from a field's attributes.
pub fn parse_field_attrs(attrs: &[Attribute]) -> Result<FieldAttr> {
    for attr in attrs {
        if attr.path().is_ident("field") {
            return attr.parse_args::<FieldAttr>();
        }
    }
    Ok(FieldAttr::default())
}
