use proc_macro2::TokenStream;
use quote::quote;
use syn::{parse_quote, Data, DeriveInput, Fields, Member, Path, Type};
use zip_clone::ZipClone as _;

use crate::error::abort;
use crate::protocol::Protocol;

pub fn krate() -> Path {
    parse_quote!(::pairlike)
}

/// Implement `protocol` for a struct, one element per field in declaration order.
pub fn derive_tuple(protocol: &Protocol, input: DeriveInput) -> syn::Result<TokenStream> {
    let DeriveInput {
        ident,
        generics,
        data,
        ..
    } = input;
    let fields = match data {
        Data::Struct(data) => data.fields,
        Data::Enum(data) => abort!(data.enum_token, "tuple protocols cannot be derived for enums"),
        Data::Union(data) => {
            abort!(data.union_token, "tuple protocols cannot be derived for unions")
        }
    };
    let members: Vec<(Member, Type)> = match fields {
        Fields::Named(fields) => fields
            .named
            .into_iter()
            .filter_map(|field| field.ident.map(|ident| (Member::Named(ident), field.ty)))
            .collect(),
        Fields::Unnamed(fields) => fields
            .unnamed
            .into_iter()
            .enumerate()
            .map(|(index, field)| (Member::Unnamed(index.into()), field.ty))
            .collect(),
        Fields::Unit => Vec::new(),
    };

    let (_, ty_generics, _) = generics.split_for_impl();
    let self_ty: Type = parse_quote!(#ident #ty_generics);
    let mut output = protocol.impl_tuple_size(&generics, &self_ty, members.len());
    output.extend(protocol.impl_self_cast(&generics, &self_ty));
    for ((index, (member, element)), self_ty) in members.iter().enumerate().zip_clone(self_ty) {
        output.extend(protocol.impl_get(
            &generics,
            self_ty,
            index,
            element,
            quote!(self.#member),
        ));
    }
    Ok(output)
}
