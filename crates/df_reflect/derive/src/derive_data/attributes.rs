use syn::{Attribute, LitStr};

use crate::REFLECT_ATTRIBUTE_NAME;

/// Type level `#[reflect(...)]` options.
#[derive(Default)]
pub(crate) struct TypeAttributes {
    /// `#[reflect(type_path = "...")]`
    pub(crate) type_path: Option<LitStr>,
}

impl TypeAttributes {
    pub(crate) fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut res = Self::default();
        for attr in attrs {
            if !attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("type_path") {
                    if res.type_path.is_some() {
                        return Err(meta.error("duplicate `type_path`"));
                    }
                    let lit: LitStr = meta.value()?.parse()?;
                    validate_type_path(&lit)?;
                    res.type_path = Some(lit);
                    Ok(())
                } else {
                    Err(meta.error("unsupported type attribute, expected `type_path = \"...\"`"))
                }
            })?;
        }
        Ok(res)
    }
}

fn validate_type_path(lit: &LitStr) -> syn::Result<()> {
    let value = lit.value();
    if value.is_empty() || value.starts_with("::") || value.ends_with("::") {
        return Err(syn::Error::new(
            lit.span(),
            "`type_path` must be a non-empty path without leading or trailing `::`",
        ));
    }
    Ok(())
}

/// Field level `#[reflect(...)]` options.
#[derive(Default)]
pub(crate) struct FieldAttributes {
    /// `#[reflect(readonly)]`
    pub(crate) readonly: bool,
}

impl FieldAttributes {
    pub(crate) fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut res = Self::default();
        for attr in attrs {
            if !attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("readonly") {
                    res.readonly = true;
                    Ok(())
                } else {
                    Err(meta.error("unsupported field attribute, expected `readonly`"))
                }
            })?;
        }
        Ok(res)
    }
}
