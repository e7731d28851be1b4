use proc_macro2::{Literal, TokenStream};
use quote::quote;
use syn::{parse_quote, Generics, Path, Type};

/// Paths of the items making up one accessor protocol.
pub struct Protocol {
    get: Path,
    tuple_size: Path,
    arity: Path,
    raw_reference_cast: Path,
    casts_to_self: bool,
}

impl Protocol {
    /// `tuple::Get` and `tuple::TupleSize`.
    pub fn standard(krate: &Path) -> Self {
        Protocol {
            get: parse_quote!(#krate::tuple::Get),
            tuple_size: parse_quote!(#krate::tuple::TupleSize),
            arity: parse_quote!(#krate::Arity),
            raw_reference_cast: parse_quote!(#krate::RawReferenceCast),
            casts_to_self: false,
        }
    }

    /// `device::Get` and `device::TupleSize`. Device types always normalize to
    /// themselves, so this protocol also emits an identity `RawReferenceCast`.
    pub fn device(krate: &Path) -> Self {
        Protocol {
            get: parse_quote!(#krate::device::Get),
            tuple_size: parse_quote!(#krate::device::TupleSize),
            arity: parse_quote!(#krate::Arity),
            raw_reference_cast: parse_quote!(#krate::RawReferenceCast),
            casts_to_self: true,
        }
    }

    /// Implement `Get<index>` where `place` is the element expression in terms
    /// of `self`, e.g. `self.0` or `self[0]`.
    pub fn impl_get(
        &self,
        generics: &Generics,
        self_ty: Type,
        index: usize,
        element: &Type,
        place: TokenStream,
    ) -> TokenStream {
        let get = &self.get;
        let index = Literal::usize_unsuffixed(index);
        let (impl_generics, _, where_clause) = generics.split_for_impl();
        quote! {
            impl #impl_generics #get<#index> for #self_ty #where_clause {
                type Output = #element;

                #[inline]
                fn get(&self) -> &Self::Output {
                    &#place
                }

                #[inline]
                fn get_mut(&mut self) -> &mut Self::Output {
                    &mut #place
                }
            }
        }
    }

    pub fn impl_tuple_size(&self, generics: &Generics, self_ty: &Type, len: usize) -> TokenStream {
        let tuple_size = &self.tuple_size;
        let arity = &self.arity;
        let len = Literal::usize_unsuffixed(len);
        let (impl_generics, _, where_clause) = generics.split_for_impl();
        quote! {
            impl #impl_generics #tuple_size for #self_ty #where_clause {
                type Arity = #arity<#len>;
            }
        }
    }

    /// Identity normalization, emitted only for protocols whose types are
    /// never proxies. Use [`Protocol::impl_identity_cast`] to force it.
    pub fn impl_self_cast(&self, generics: &Generics, self_ty: &Type) -> TokenStream {
        if self.casts_to_self {
            self.impl_identity_cast(generics, self_ty)
        } else {
            TokenStream::new()
        }
    }

    pub fn impl_identity_cast(&self, generics: &Generics, self_ty: &Type) -> TokenStream {
        let raw_reference_cast = &self.raw_reference_cast;
        let (impl_generics, _, where_clause) = generics.split_for_impl();
        quote! {
            impl #impl_generics #raw_reference_cast for #self_ty #where_clause {
                type Raw = Self;

                #[inline]
                fn raw_reference_cast(&self) -> &Self::Raw {
                    self
                }
            }
        }
    }
}
