use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectStruct;

/// Generate implementation codes for `Typed`.
///
/// The `StructInfo` lists the fields in declaration order, each with the
/// visibility and mutability read from the declaration.
pub(crate) fn impl_trait_typed(info: &ReflectStruct) -> TokenStream {
    let info_ = crate::path::info_(&info.df_reflect_path);
    let impls_ = crate::path::impls_(&info.df_reflect_path);
    let ident = &info.ident;

    let fields = info.fields.iter().map(|field| {
        let name = field.name();
        let ty = &field.ty;
        let is_public = field.is_public;
        let is_mutable = !field.attrs.readonly;
        quote! {
            #info_::NamedField::new::<#ty>(#name)
                .with_public(#is_public)
                .with_mutable(#is_mutable)
        }
    });

    quote! {
        impl #info_::Typed for #ident {
            fn type_info() -> &'static #info_::TypeInfo {
                static CELL: #impls_::NonGenericTypeInfoCell = #impls_::NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| {
                    #info_::TypeInfo::Struct(#info_::StructInfo::new::<Self>(&[
                        #(#fields,)*
                    ]))
                })
            }
        }
    }
}
