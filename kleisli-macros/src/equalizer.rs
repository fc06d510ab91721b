use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{
    parse_quote, punctuated::Punctuated, spanned::Spanned, Attribute, Data, DataEnum,
    DeriveInput, Fields, Generics, Ident, Index, Member, TypeParamBound,
};

pub fn derive_equalizer(item: TokenStream) -> syn::Result<TokenStream> {
    let ast = syn::parse2::<DeriveInput>(item)?;
    let ident = &ast.ident;

    let (eq_body, hash_body) = match &ast.data {
        Data::Struct(s) => {
            let members = equalized_members(&ast.attrs, &s.fields)?;
            let eq = quote! {
                true #(&& self.#members == other.#members)*
            };
            let hash = quote! {
                #(::core::hash::Hash::hash(&self.#members, state);)*
            };
            (eq, hash)
        }
        Data::Enum(e) => {
            if let Some(attr) = find_attr(&ast.attrs) {
                return Err(syn::Error::new(
                    attr.span(),
                    "`equalizer` field lists are only supported on structs",
                ));
            }
            enum_bodies(e)
        }
        Data::Union(u) => {
            return Err(syn::Error::new(
                u.union_token.span(),
                "unions cannot derive `Equalizer`",
            ))
        }
    };

    let partial_eq_generics = bounded(&ast.generics, parse_quote!(::core::cmp::PartialEq));
    let (impl_generics, ty_generics, where_clause) = partial_eq_generics.split_for_impl();
    let partial_eq_impl = quote! {
        impl #impl_generics ::core::cmp::PartialEq for #ident #ty_generics #where_clause {
            #[allow(unused_variables)]
            fn eq(&self, other: &Self) -> bool {
                #eq_body
            }
        }
    };

    let eq_generics = bounded(&ast.generics, parse_quote!(::core::cmp::Eq));
    let (impl_generics, ty_generics, where_clause) = eq_generics.split_for_impl();
    let eq_impl = quote! {
        impl #impl_generics ::core::cmp::Eq for #ident #ty_generics #where_clause {}
    };

    let hash_generics = bounded(&ast.generics, parse_quote!(::core::hash::Hash));
    let (impl_generics, ty_generics, where_clause) = hash_generics.split_for_impl();
    let hash_impl = quote! {
        impl #impl_generics ::core::hash::Hash for #ident #ty_generics #where_clause {
            #[allow(unused_variables)]
            fn hash<__H: ::core::hash::Hasher>(&self, state: &mut __H) {
                #hash_body
            }
        }
    };

    Ok(quote! {
        #partial_eq_impl
        #eq_impl
        #hash_impl
    })
}

fn find_attr(attrs: &[Attribute]) -> Option<&Attribute> {
    attrs.iter().find(|attr| attr.path().is_ident("equalizer"))
}

/// Add `bound` to every type parameter.
fn bounded(generics: &Generics, bound: TypeParamBound) -> Generics {
    let mut generics = generics.clone();
    for param in generics.type_params_mut() {
        param.bounds.push(bound.clone());
    }
    generics
}

/// The struct members taking part in equality, in declaration order of the
/// attribute (or of the struct when no attribute is given).
fn equalized_members(attrs: &[Attribute], fields: &Fields) -> syn::Result<Vec<Member>> {
    let attr = match find_attr(attrs) {
        Some(attr) => attr,
        None => {
            return Ok(fields
                .iter()
                .enumerate()
                .map(|(i, field)| match &field.ident {
                    Some(ident) => Member::Named(ident.clone()),
                    None => Member::Unnamed(Index::from(i)),
                })
                .collect())
        }
    };

    let named = match fields {
        Fields::Named(named) => named,
        _ => {
            return Err(syn::Error::new(
                attr.span(),
                "`equalizer` field lists require named fields",
            ))
        }
    };

    let idents = attr.parse_args_with(Punctuated::<Ident, syn::Token![,]>::parse_terminated)?;
    idents
        .into_iter()
        .map(|ident| {
            if named.named.iter().any(|field| field.ident.as_ref() == Some(&ident)) {
                Ok(Member::Named(ident))
            } else {
                Err(syn::Error::new(
                    ident.span(),
                    format!("no field named `{}`", ident),
                ))
            }
        })
        .collect()
}

fn enum_bodies(data: &DataEnum) -> (TokenStream, TokenStream) {
    let mut eq_arms = Vec::new();
    let mut hash_arms = Vec::new();

    for variant in data.variants.iter() {
        let name = &variant.ident;
        match &variant.fields {
            Fields::Named(fields) => {
                let idents = fields
                    .named
                    .iter()
                    .map(|field| field.ident.clone().unwrap())
                    .collect::<Vec<_>>();
                let lhs = idents
                    .iter()
                    .map(|ident| format_ident!("lhs_{}", ident))
                    .collect::<Vec<_>>();
                let rhs = idents
                    .iter()
                    .map(|ident| format_ident!("rhs_{}", ident))
                    .collect::<Vec<_>>();
                eq_arms.push(quote! {
                    (Self::#name { #(#idents: #lhs),* }, Self::#name { #(#idents: #rhs),* }) => {
                        true #(&& #lhs == #rhs)*
                    }
                });
                hash_arms.push(quote! {
                    Self::#name { #(#idents: #lhs),* } => {
                        #(::core::hash::Hash::hash(#lhs, state);)*
                    }
                });
            }
            Fields::Unnamed(fields) => {
                let lhs = (0..fields.unnamed.len())
                    .map(|i| format_ident!("lhs_{}", i))
                    .collect::<Vec<_>>();
                let rhs = (0..fields.unnamed.len())
                    .map(|i| format_ident!("rhs_{}", i))
                    .collect::<Vec<_>>();
                eq_arms.push(quote! {
                    (Self::#name(#(#lhs),*), Self::#name(#(#rhs),*)) => {
                        true #(&& #lhs == #rhs)*
                    }
                });
                hash_arms.push(quote! {
                    Self::#name(#(#lhs),*) => {
                        #(::core::hash::Hash::hash(#lhs, state);)*
                    }
                });
            }
            Fields::Unit => {
                eq_arms.push(quote! {
                    (Self::#name, Self::#name) => true
                });
                hash_arms.push(quote! {
                    Self::#name => {}
                });
            }
        }
    }

    let eq = quote! {
        match (self, other) {
            #(#eq_arms,)*
            #[allow(unreachable_patterns)]
            _ => false,
        }
    };
    let hash = quote! {
        ::core::hash::Hash::hash(&::core::mem::discriminant(self), state);
        match self {
            #(#hash_arms)*
        }
    };

    (eq, hash)
}
