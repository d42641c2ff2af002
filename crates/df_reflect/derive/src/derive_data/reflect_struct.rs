use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{Data, DeriveInput, Fields, Ident, Type, Visibility};

use crate::derive_data::{FieldAttributes, TypeAttributes};

/// The names a record reports through `TypePath`.
pub(crate) enum TypePathParts {
    /// Derived from `module_path!()` at the expansion site.
    Default { ident: Ident },
    /// Given by `#[reflect(type_path = "...")]`.
    Custom {
        path: String,
        name: String,
        module: Option<String>,
    },
}

impl TypePathParts {
    fn new(ident: &Ident, attrs: &TypeAttributes) -> Self {
        match &attrs.type_path {
            None => Self::Default {
                ident: ident.clone(),
            },
            Some(lit) => {
                let path = lit.value();
                let (module, name) = match path.rsplit_once("::") {
                    Some((module, name)) => (Some(module.to_owned()), name.to_owned()),
                    None => (None, path.clone()),
                };
                Self::Custom { path, name, module }
            }
        }
    }

    pub(crate) fn type_path(&self) -> TokenStream {
        match self {
            Self::Default { ident } => {
                let name = ident.unraw().to_string();
                quote! { ::core::concat!(::core::module_path!(), "::", #name) }
            }
            Self::Custom { path, .. } => quote! { #path },
        }
    }

    pub(crate) fn type_name(&self) -> TokenStream {
        match self {
            Self::Default { ident } => {
                let name = ident.unraw().to_string();
                quote! { #name }
            }
            Self::Custom { name, .. } => quote! { #name },
        }
    }

    pub(crate) fn module_path(&self) -> Option<TokenStream> {
        match self {
            Self::Default { .. } => Some(quote! { ::core::module_path!() }),
            Self::Custom { module, .. } => module.as_ref().map(|m| quote! { #m }),
        }
    }
}

/// A named field of the record.
pub(crate) struct StructField {
    pub(crate) ident: Ident,
    pub(crate) ty: Type,
    pub(crate) is_public: bool,
    pub(crate) attrs: FieldAttributes,
}

impl StructField {
    /// The reflected name, `r#` stripped from raw identifiers.
    pub(crate) fn name(&self) -> String {
        self.ident.unraw().to_string()
    }
}

/// Everything the generated impls need about one record.
pub(crate) struct ReflectStruct {
    pub(crate) ident: Ident,
    pub(crate) type_path: TypePathParts,
    pub(crate) fields: Vec<StructField>,
    pub(crate) df_reflect_path: syn::Path,
}

impl ReflectStruct {
    pub(crate) fn from_ast(ast: &DeriveInput) -> syn::Result<Self> {
        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "`#[derive(Reflect)]` does not support generic types",
            ));
        }

        let data = match &ast.data {
            Data::Struct(data) => data,
            Data::Enum(data) => {
                return Err(syn::Error::new(
                    data.enum_token.span,
                    "`#[derive(Reflect)]` only supports structs with named fields",
                ));
            }
            Data::Union(data) => {
                return Err(syn::Error::new(
                    data.union_token.span,
                    "`#[derive(Reflect)]` only supports structs with named fields",
                ));
            }
        };

        let fields = match &data.fields {
            Fields::Named(named) => named
                .named
                .iter()
                .map(|field| {
                    Ok(StructField {
                        // Named fields always carry an ident.
                        ident: field.ident.clone().ok_or_else(|| {
                            syn::Error::new_spanned(field, "expected a named field")
                        })?,
                        ty: field.ty.clone(),
                        is_public: matches!(field.vis, Visibility::Public(_)),
                        attrs: FieldAttributes::parse_attrs(&field.attrs)?,
                    })
                })
                .collect::<syn::Result<Vec<_>>>()?,
            Fields::Unit => Vec::new(),
            Fields::Unnamed(unnamed) => {
                return Err(syn::Error::new_spanned(
                    unnamed,
                    "`#[derive(Reflect)]` does not support tuple structs",
                ));
            }
        };

        let type_attrs = TypeAttributes::parse_attrs(&ast.attrs)?;

        Ok(Self {
            ident: ast.ident.clone(),
            type_path: TypePathParts::new(&ast.ident, &type_attrs),
            fields,
            df_reflect_path: crate::path::df_reflect(),
        })
    }
}
