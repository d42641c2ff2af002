use proc_macro2::{Literal, TokenStream};
use quote::quote;

use crate::derive_data::ReflectStruct;

/// Generate implementation codes for `Struct`.
pub(crate) fn impl_trait_struct(info: &ReflectStruct) -> TokenStream {
    let reflect_ = crate::path::reflect_(&info.df_reflect_path);
    let ops_ = crate::path::ops_(&info.df_reflect_path);
    let macro_utils_ = crate::path::macro_utils_(&info.df_reflect_path);
    let ident = &info.ident;

    let field_idents: Vec<_> = info.fields.iter().map(|field| &field.ident).collect();
    let field_names: Vec<_> = info.fields.iter().map(|field| field.name()).collect();
    let field_indices: Vec<_> = (0..info.fields.len()).map(Literal::usize_unsuffixed).collect();
    let field_len = info.fields.len();

    quote! {
        impl #ops_::Struct for #ident {
            fn field(&self, name: &str) -> #macro_utils_::Option<&dyn #reflect_> {
                match name {
                    #( #field_names => #macro_utils_::Some(#reflect_::as_reflect(&self.#field_idents)), )*
                    _ => #macro_utils_::None,
                }
            }

            fn field_mut(&mut self, name: &str) -> #macro_utils_::Option<&mut dyn #reflect_> {
                match name {
                    #( #field_names => #macro_utils_::Some(#reflect_::as_reflect_mut(&mut self.#field_idents)), )*
                    _ => #macro_utils_::None,
                }
            }

            fn field_at(&self, index: usize) -> #macro_utils_::Option<&dyn #reflect_> {
                match index {
                    #( #field_indices => #macro_utils_::Some(#reflect_::as_reflect(&self.#field_idents)), )*
                    _ => #macro_utils_::None,
                }
            }

            fn field_at_mut(&mut self, index: usize) -> #macro_utils_::Option<&mut dyn #reflect_> {
                match index {
                    #( #field_indices => #macro_utils_::Some(#reflect_::as_reflect_mut(&mut self.#field_idents)), )*
                    _ => #macro_utils_::None,
                }
            }

            fn name_at(&self, index: usize) -> #macro_utils_::Option<&str> {
                match index {
                    #( #field_indices => #macro_utils_::Some(#field_names), )*
                    _ => #macro_utils_::None,
                }
            }

            #[inline]
            fn field_len(&self) -> usize {
                #field_len
            }

            #[inline]
            fn iter_fields(&self) -> #ops_::StructFieldIter<'_> {
                #ops_::StructFieldIter::new(self)
            }
        }
    }
}
