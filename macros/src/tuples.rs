use proc_macro2::{Ident, Literal, TokenStream};
use quote::{format_ident, quote};
use syn::{parse_quote, Generics, Index, Path, Type};
use zip_clone::ZipClone as _;

use crate::constant::parse_arity_range;
use crate::protocol::Protocol;

fn element_idents(prefix: &str, len: usize) -> Vec<Ident> {
    (0..len).map(|i| format_ident!("{}{}", prefix, i)).collect()
}

fn generics_for(idents: &[Ident]) -> Generics {
    if idents.is_empty() {
        Generics::default()
    } else {
        parse_quote!(<#(#idents),*>)
    }
}

// (T0, T1) and [T; 2] for each arity
pub fn std_tuples(args: TokenStream) -> syn::Result<TokenStream> {
    let krate: Path = parse_quote!(crate);
    let protocol = Protocol::standard(&krate);
    let mut output = TokenStream::new();
    for len in parse_arity_range(args)? {
        let idents = element_idents("T", len);
        let generics = generics_for(&idents);
        let tuple: Type = parse_quote!((#(#idents,)*));
        output.extend(protocol.impl_tuple_size(&generics, &tuple, len));
        output.extend(protocol.impl_identity_cast(&generics, &tuple));
        for ((index, ident), tuple) in idents.iter().enumerate().zip_clone(tuple) {
            let element: Type = parse_quote!(#ident);
            let member = Index::from(index);
            output.extend(protocol.impl_get(
                &generics,
                tuple,
                index,
                &element,
                quote!(self.#member),
            ));
        }

        let generics: Generics = parse_quote!(<T>);
        let element: Type = parse_quote!(T);
        let literal = Literal::usize_unsuffixed(len);
        let array: Type = parse_quote!([T; #literal]);
        output.extend(protocol.impl_tuple_size(&generics, &array, len));
        for (index, array) in (0..len).zip_clone(array) {
            let literal = Literal::usize_unsuffixed(index);
            output.extend(protocol.impl_get(
                &generics,
                array,
                index,
                &element,
                quote!(self[#literal]),
            ));
        }
    }
    Ok(output)
}

// struct TupleN<T0, ..>(pub T0, ..) for each arity
pub fn device_tuples(args: TokenStream) -> syn::Result<TokenStream> {
    let krate: Path = parse_quote!(crate);
    let protocol = Protocol::device(&krate);
    let mut output = TokenStream::new();
    for len in parse_arity_range(args)? {
        let name = format_ident!("Tuple{}", len);
        let idents = element_idents("T", len);
        let values = element_idents("t", len);
        let generics = generics_for(&idents);
        let (impl_generics, ty_generics, _) = generics.split_for_impl();
        let self_ty: Type = parse_quote!(#name #ty_generics);
        let doc = match len {
            1 => "A device tuple holding 1 element.".to_string(),
            len => format!("A device tuple holding {} elements.", len),
        };
        output.extend(quote! {
            #[doc = #doc]
            #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
            pub struct #name #generics(#(pub #idents),*);

            impl #impl_generics #name #ty_generics {
                /// Convert into the native tuple with the same elements.
                #[inline]
                pub fn into_tuple(self) -> (#(#idents,)*) {
                    let #name(#(#values),*) = self;
                    (#(#values,)*)
                }
            }

            impl #impl_generics From<(#(#idents,)*)> for #self_ty {
                #[inline]
                fn from((#(#values,)*): (#(#idents,)*)) -> Self {
                    #name(#(#values),*)
                }
            }
        });
        output.extend(protocol.impl_tuple_size(&generics, &self_ty, len));
        output.extend(protocol.impl_self_cast(&generics, &self_ty));
        for ((index, ident), self_ty) in idents.iter().enumerate().zip_clone(self_ty) {
            let element: Type = parse_quote!(#ident);
            let member = Index::from(index);
            output.extend(protocol.impl_get(
                &generics,
                self_ty,
                index,
                &element,
                quote!(self.#member),
            ));
        }
    }
    Ok(output)
}
