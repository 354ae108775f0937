//! Proc-macros for airy.
//!
//! Currently provided:
//! - `#[derive(WithBuilders)]`: generates `with_<field>(...)` builder-style methods
//!   for each named field in a struct.
//!
//! ### Example
//! ```ignore
//! use airy_macros::WithBuilders;
//!
//! #[derive(Clone, Debug, WithBuilders)]
//! pub struct IconStyle {
//!     pub size: f32,
//!     pub spacing: f32,
//! }
//!
//! let s = IconStyle { size: 16.0, spacing: 5.0 }
//!     .with_size(20.0)
//!     .with_spacing(8.0);
//! ```

use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{parse_macro_input, spanned::Spanned, Data, DeriveInput, Fields};

/// Derive that generates `with_<field>` builder methods for structs with named fields.
///
/// Generated methods take `self` by value (builder style) and return `Self`,
/// leaving every other field untouched.
#[proc_macro_derive(WithBuilders)]
pub fn derive_with_builders(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let ident = &input.ident;

    let Data::Struct(data_struct) = &input.data else {
        return Err(syn::Error::new(
            input.span(),
            "#[derive(WithBuilders)] only supports structs",
        ));
    };

    let Fields::Named(fields_named) = &data_struct.fields else {
        return Err(syn::Error::new(
            data_struct.fields.span(),
            "#[derive(WithBuilders)] only supports structs with named fields",
        ));
    };

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let mut methods = Vec::with_capacity(fields_named.named.len());
    for field in &fields_named.named {
        let Some(field_ident) = field.ident.as_ref() else {
            continue;
        };

        let field_ty = &field.ty;
        let method_ident = format_ident!("with_{}", field_ident);
        let doc = format!("Set `{}`, keeping every other field.", field_ident);

        methods.push(quote! {
            #[doc = #doc]
            #[inline]
            #[must_use]
            pub fn #method_ident(mut self, value: #field_ty) -> Self {
                self.#field_ident = value;
                self
            }
        });
    }

    Ok(quote! {
        impl #impl_generics #ident #ty_generics #where_clause {
            #(#methods)*
        }
    })
}
