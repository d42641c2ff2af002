use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectStruct;

/// Generate implementation codes for `TypePath`.
pub(crate) fn impl_trait_type_path(info: &ReflectStruct) -> TokenStream {
    let info_ = crate::path::info_(&info.df_reflect_path);
    let macro_utils_ = crate::path::macro_utils_(&info.df_reflect_path);
    let ident = &info.ident;

    let type_path = info.type_path.type_path();
    let type_name = info.type_path.type_name();
    let module_path = match info.type_path.module_path() {
        Some(tokens) => quote! { #macro_utils_::Some(#tokens) },
        None => quote! { #macro_utils_::None },
    };

    quote! {
        impl #info_::TypePath for #ident {
            #[inline]
            fn type_path() -> &'static str {
                #type_path
            }

            #[inline]
            fn type_name() -> &'static str {
                #type_name
            }

            #[inline]
            fn type_ident() -> &'static str {
                #type_name
            }

            #[inline]
            fn module_path() -> #macro_utils_::Option<&'static str> {
                #module_path
            }
        }
    }
}
