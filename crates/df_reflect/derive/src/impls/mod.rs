//! Code generation for the derived traits.

mod trait_reflect;
mod trait_struct;
mod trait_type_path;
mod trait_typed;

use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectStruct;

/// Implement `TypePath`, `Typed`, `Reflect` and `Struct` for a record.
pub(crate) fn impl_struct(info: &ReflectStruct) -> TokenStream {
    let type_path_tokens = trait_type_path::impl_trait_type_path(info);
    let typed_tokens = trait_typed::impl_trait_typed(info);
    let reflect_tokens = trait_reflect::impl_trait_reflect(info);
    let struct_tokens = trait_struct::impl_trait_struct(info);

    quote! {
        const _: () = {
            #type_path_tokens

            #typed_tokens

            #reflect_tokens

            #struct_tokens
        };
    }
}
