use proc_macro2::{Literal, Span, TokenStream};
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::{Error, Fields, Ident, ItemEnum, Token, Type, Variant, parse_quote};

/// Arguments of `#[variant_set(...)]`.
struct SetArgs {
    interface: Type,
    args: Type,
    error: Type,
}

impl Parse for SetArgs {
    fn parse(input: ParseStream<'_>) -> syn::Result<Self> {
        let mut interface = None;
        let mut args = None;
        let mut error = None;

        while !input.is_empty() {
            let key: Ident = input.parse()?;
            input.parse::<Token![=]>()?;
            let value: Type = input.parse()?;

            let target = match key.to_string().as_str() {
                "interface" => &mut interface,
                "args" => &mut args,
                "error" => &mut error,
                _ => {
                    return Err(Error::new_spanned(
                        &key,
                        "Unknown variant_set argument. Use: interface, args, or error",
                    ));
                },
            };
            if target.is_some() {
                return Err(Error::new_spanned(&key, format!("Duplicate `{key} = ...` argument")));
            }
            *target = Some(value);

            if input.is_empty() {
                break;
            }
            input.parse::<Token![,]>()?;
        }

        let interface = interface.ok_or_else(|| {
            Error::new(Span::call_site(), "variant_set requires `interface = <Type>`")
        })?;

        Ok(Self {
            interface,
            args: args.unwrap_or_else(|| parse_quote!(())),
            error: error.unwrap_or_else(|| parse_quote!(::vfab::FabricError)),
        })
    }
}

/// One declared member of the set, in declaration order.
struct Member<'a> {
    ident: &'a Ident,
    ty: &'a Type,
}

/// Expands the `#[variant_set]` attribute macro.
#[must_use]
pub fn expand_variant_set(args: TokenStream, input: ItemEnum) -> TokenStream {
    let args = match syn::parse2::<SetArgs>(args) {
        Ok(args) => args,
        Err(err) => return err.to_compile_error(),
    };

    match collect_members(&input) {
        Ok(members) => generate(&args, &input, &members),
        Err(err) => err.to_compile_error(),
    }
}

fn collect_members(input: &ItemEnum) -> syn::Result<Vec<Member<'_>>> {
    if !input.generics.params.is_empty() || input.generics.where_clause.is_some() {
        return Err(Error::new_spanned(
            &input.generics,
            "variant_set does not support generic enums",
        ));
    }

    if input.variants.is_empty() {
        return Err(Error::new_spanned(
            &input.ident,
            "variant_set requires at least one variant; an empty set has nothing to construct",
        ));
    }

    input.variants.iter().map(member).collect()
}

fn member(variant: &Variant) -> syn::Result<Member<'_>> {
    if let Some((_, discriminant)) = &variant.discriminant {
        return Err(Error::new_spanned(
            discriminant,
            "variant_set positions follow declaration order; remove the explicit discriminant",
        ));
    }

    if variant.attrs.iter().any(|attr| attr.path().is_ident("cfg")) {
        return Err(Error::new_spanned(
            &variant.ident,
            "variant_set positions must not depend on `#[cfg]`",
        ));
    }

    let Fields::Unnamed(fields) = &variant.fields else {
        return Err(Error::new_spanned(
            variant,
            "variant_set variants must wrap exactly one type, e.g. `Circle(Circle)`",
        ));
    };
    let mut types = fields.unnamed.iter();
    let (Some(field), None) = (types.next(), types.next()) else {
        return Err(Error::new_spanned(
            variant,
            "variant_set variants must wrap exactly one type, e.g. `Circle(Circle)`",
        ));
    };

    Ok(Member { ident: &variant.ident, ty: &field.ty })
}

fn generate(args: &SetArgs, input: &ItemEnum, members: &[Member<'_>]) -> TokenStream {
    let name = &input.ident;
    let SetArgs { interface, args: args_ty, error } = args;

    let positions: Vec<Literal> =
        (0..members.len()).map(Literal::usize_unsuffixed).collect();
    let idents: Vec<&Ident> = members.iter().map(|m| m.ident).collect();
    let types: Vec<&Type> = members.iter().map(|m| m.ty).collect();
    let names: Vec<String> = idents.iter().map(ToString::to_string).collect();

    quote! {
        #input

        #[automatically_derived]
        impl ::vfab::VariantSet for #name {
            type Interface = #interface;
            type Args = #args_ty;
            type Error = #error;

            const NAMES: &'static [&'static str] = &[#(#names),*];

            const CONSTRUCTORS: &'static [::vfab::Constructor<Self>] = &[
                #(<Self as ::vfab::VariantAt<#positions>>::construct_at),*
            ];

            #[inline]
            fn as_interface(&self) -> &Self::Interface {
                match self {
                    #(Self::#idents(variant) => {
                        let view: &Self::Interface = variant;
                        view
                    })*
                }
            }

            #[inline]
            fn as_interface_mut(&mut self) -> &mut Self::Interface {
                match self {
                    #(Self::#idents(variant) => {
                        let view: &mut Self::Interface = variant;
                        view
                    })*
                }
            }
        }

        #(
            #[automatically_derived]
            impl ::vfab::VariantAt<#positions> for #name {
                type Variant = #types;

                #[inline]
                fn wrap(variant: Self::Variant) -> Self {
                    Self::#idents(variant)
                }
            }
        )*
    }
}
