macro_rules! abort {
    ($spanned:expr, $message:expr) => {
        return Err(syn::Error::new(
            syn::spanned::Spanned::span(&$spanned),
            $message,
        ))
    };
}

pub(crate) use abort;
