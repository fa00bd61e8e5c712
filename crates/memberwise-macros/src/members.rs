//! #[derive(Members)] implementation

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Error, Expr, Field, Fields, GenericArgument, LitStr, PathArguments, Type};

struct MemberConfig {
    skip: bool,
    sequence: bool,
    tags: Vec<String>,
    default: Option<Expr>,
}

pub fn expand_derive(input: DeriveInput) -> Result<TokenStream, Error> {
    let name = &input.ident;
    let generics = &input.generics;
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(Error::new_spanned(
                    &input,
                    "#[derive(Members)] requires named fields",
                ))
            }
        },
        _ => {
            return Err(Error::new_spanned(
                &input,
                "#[derive(Members)] only works on structs",
            ))
        }
    };

    let mut descriptors = Vec::new();
    for field in fields {
        let config = parse_member_config(field)?;
        if config.skip {
            continue;
        }
        descriptors.push(descriptor_expr(field, &config));
    }

    let name_str = name.to_string();

    let expanded = quote! {
        impl #impl_generics ::memberwise::Members for #name #ty_generics #where_clause {
            fn type_name() -> &'static str {
                #name_str
            }

            fn members() -> ::std::vec::Vec<::memberwise::MemberDescriptor> {
                ::std::vec![
                    #(#descriptors),*
                ]
            }
        }
    };

    Ok(expanded)
}

fn parse_member_config(field: &Field) -> Result<MemberConfig, Error> {
    let mut config = MemberConfig {
        skip: false,
        sequence: false,
        tags: Vec::new(),
        default: None,
    };
    for attr in &field.attrs {
        if !attr.path().is_ident("member") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                config.skip = true;
                Ok(())
            } else if meta.path.is_ident("sequence") {
                config.sequence = true;
                Ok(())
            } else if meta.path.is_ident("tag") {
                let tag: LitStr = meta.value()?.parse()?;
                config.tags.push(tag.value());
                Ok(())
            } else if meta.path.is_ident("default") {
                let default: Expr = meta.value()?.parse()?;
                config.default = Some(default);
                Ok(())
            } else {
                Err(meta.error("unsupported #[member] attribute"))
            }
        })?;
    }
    Ok(config)
}

fn descriptor_expr(field: &Field, config: &MemberConfig) -> TokenStream {
    let ident = field.ident.as_ref().expect("named field");
    let name_str = ident.to_string();

    // Option<T> fields flatten into nullable accessors over T.
    let (base, value_ty) = match inner_of(&field.ty, "Option") {
        Some(inner) => (
            quote! {
                ::memberwise::MemberDescriptor::optional::<Self, #inner, _>(
                    #name_str,
                    |owner: &Self| owner.#ident.as_ref(),
                )
            },
            inner,
        ),
        None => {
            let ty = &field.ty;
            (
                quote! {
                    ::memberwise::MemberDescriptor::required::<Self, #ty, _>(
                        #name_str,
                        |owner: &Self| &owner.#ident,
                    )
                },
                ty,
            )
        }
    };

    let mut descriptor = base;
    if config.sequence || inner_of(value_ty, "Vec").is_some() {
        descriptor = quote! { #descriptor.sequence() };
    }
    if !config.tags.is_empty() {
        let tags = &config.tags;
        descriptor = quote! { #descriptor.with_tags(&[#(#tags),*]) };
    }
    if let Some(default) = &config.default {
        descriptor = quote! { #descriptor.with_default(#default) };
    }
    descriptor
}

/// Returns the first type argument when `ty` is a path ending in `wrapper`.
fn inner_of<'a>(ty: &'a Type, wrapper: &str) -> Option<&'a Type> {
    let Type::Path(path) = ty else {
        return None;
    };
    let segment = path.path.segments.last()?;
    if segment.ident != wrapper {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    args.args.iter().find_map(|arg| match arg {
        GenericArgument::Type(inner) => Some(inner),
        _ => None,
    })
}
