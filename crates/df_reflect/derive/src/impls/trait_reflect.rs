use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectStruct;

/// Generate implementation codes for `Reflect`.
pub(crate) fn impl_trait_reflect(info: &ReflectStruct) -> TokenStream {
    let reflect_ = crate::path::reflect_(&info.df_reflect_path);
    let info_ = crate::path::info_(&info.df_reflect_path);
    let ops_ = crate::path::ops_(&info.df_reflect_path);
    let impls_ = crate::path::impls_(&info.df_reflect_path);
    let macro_utils_ = crate::path::macro_utils_(&info.df_reflect_path);
    let ident = &info.ident;

    let field_idents = info.fields.iter().map(|field| &field.ident);

    quote! {
        impl #reflect_ for #ident {
            fn set(
                &mut self,
                value: #macro_utils_::Box<dyn #reflect_>,
            ) -> #macro_utils_::Result<(), #macro_utils_::Box<dyn #reflect_>> {
                *self = value.take::<Self>()?;
                #macro_utils_::Ok(())
            }

            fn set_zero(&mut self) {
                #( #reflect_::set_zero(&mut self.#field_idents); )*
            }

            #[inline]
            fn reflect_kind(&self) -> #info_::ReflectKind {
                #info_::ReflectKind::Struct
            }

            #[inline]
            fn reflect_ref(&self) -> #ops_::ReflectRef<'_> {
                #ops_::ReflectRef::Struct(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> #ops_::ReflectMut<'_> {
                #ops_::ReflectMut::Struct(self)
            }

            #[inline]
            fn reflect_owned(self: #macro_utils_::Box<Self>) -> #ops_::ReflectOwned {
                #ops_::ReflectOwned::Struct(self)
            }

            #[inline]
            fn reflect_debug(&self, f: &mut #macro_utils_::Formatter<'_>) -> #macro_utils_::FmtResult {
                #impls_::struct_debug(self, f)
            }
        }
    }
}
