use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};
use syn::spanned::Spanned;
use syn::{parse_macro_input, Data, DeriveInput, Fields, Index};

#[proc_macro_derive(Payload)]
pub fn derive_payload(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    // Parse the input tokens into a syntax tree
    let input = parse_macro_input!(input as DeriveInput);

    let expanded = match expand(&input) {
        Ok(expanded) => expanded,
        Err(e) => e.to_compile_error(),
    };

    // Hand the output tokens back to the compiler.
    proc_macro::TokenStream::from(expanded)
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    // An enum value is always a single payload value.
    if let Data::Enum(_) = input.data {
        return Ok(quote! {
            impl #impl_generics ::outcomes::Payload for #name #ty_generics #where_clause {}
        });
    }

    let fields = struct_fields(&input.data, input)?;
    let arity = fields.len();
    let conversions = conversions(name, &input.generics, fields)?;

    Ok(quote! {
        impl #impl_generics ::outcomes::Payload for #name #ty_generics #where_clause {
            fn arity(&self) -> usize {
                #arity
            }
        }

        #conversions
    })
}

fn struct_fields<'a>(data: &'a Data, input: &DeriveInput) -> syn::Result<&'a Fields> {
    match *data {
        Data::Struct(ref data) => Ok(&data.fields),
        Data::Enum(_) | Data::Union(_) => Err(syn::Error::new_spanned(
            &input.ident,
            "Payload can only be derived for structs and enums",
        )),
    }
}

/// Generates `From` impls between the struct and the tuple of its field types.
///
/// A single field converts from the field type directly. The reverse
/// conversion is skipped for a single generic field, which coherence rejects.
fn conversions(
    name: &syn::Ident,
    generics: &syn::Generics,
    fields: &Fields,
) -> syn::Result<TokenStream> {
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let types: Vec<_> = fields.iter().map(|f| &f.ty).collect();
    let vars: Vec<_> = (0..types.len())
        .map(|i| quote::format_ident!("field{}", i))
        .collect();

    let construct = match fields {
        Fields::Named(ref named) => {
            let idents = named.named.iter().map(|f| &f.ident);
            quote!(#name { #(#idents: #vars),* })
        }
        Fields::Unnamed(_) => quote!(#name ( #(#vars),* )),
        Fields::Unit => quote!(#name),
    };

    let destruct = match fields {
        Fields::Named(ref named) => {
            let idents = named.named.iter().map(|f| &f.ident);
            quote!(#(#idents: #vars),*)
        }
        Fields::Unnamed(ref unnamed) => {
            let indices = (0..unnamed.unnamed.len()).map(Index::from);
            quote!(#(#indices: #vars),*)
        }
        Fields::Unit => quote!(),
    };

    let expanded = match types.len() {
        1 => {
            let field = fields.iter().next().ok_or_else(|| {
                syn::Error::new_spanned(name, "expected a single field")
            })?;
            let ty = &field.ty;
            let var = &vars[0];

            let reverse = if field_is_type_param(ty, generics) {
                quote!()
            } else {
                quote_spanned! {field.span()=>
                    impl #impl_generics ::std::convert::From<#name #ty_generics> for #ty #where_clause {
                        fn from(payload: #name #ty_generics) -> Self {
                            let #name { #destruct } = payload;
                            #var
                        }
                    }
                }
            };

            quote! {
                impl #impl_generics ::std::convert::From<#ty> for #name #ty_generics #where_clause {
                    fn from(#var: #ty) -> Self {
                        #construct
                    }
                }

                #reverse
            }
        }
        _ => quote! {
            impl #impl_generics ::std::convert::From<( #(#types,)* )> for #name #ty_generics #where_clause {
                fn from(( #(#vars,)* ): ( #(#types,)* )) -> Self {
                    #construct
                }
            }

            impl #impl_generics ::std::convert::From<#name #ty_generics> for ( #(#types,)* ) #where_clause {
                #[allow(unused_variables)]
                fn from(payload: #name #ty_generics) -> Self {
                    let #name { #destruct } = payload;
                    ( #(#vars,)* )
                }
            }
        },
    };

    Ok(expanded)
}

fn field_is_type_param(ty: &syn::Type, generics: &syn::Generics) -> bool {
    match ty {
        syn::Type::Path(path) if path.qself.is_none() => generics
            .type_params()
            .any(|param| path.path.is_ident(&param.ident)),
        _ => false,
    }
}
