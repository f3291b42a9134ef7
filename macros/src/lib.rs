use convert_case::{Case, Casing};
use proc_macro::TokenStream;
use quote::quote;
use syn::parse::Parser;

/// Turn a struct with three `Component` fields into a color model.
///
/// The generated code adds the common derives, a `const fn new`, conversions
/// to and from `Components`, an `is_finite` check, a `Display` impl in CSS
/// function notation and the `Model` implementation carrying the model name.
#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if input.fields.len() != 3 {
        return quote! {
            compile_error!("Models must have exactly 3 fields, one for each component of the color.")
        }
        .into();
    }

    if !matches!(input.fields, syn::Fields::Named(_)) {
        return quote! {
            compile_error!("Model fields must be named.")
        }
        .into();
    }

    if !input.generics.params.is_empty() {
        return quote! {
            compile_error!("Models are bound to a single color space and can not be generic.")
        }
        .into();
    }

    let field_names = input
        .fields
        .iter()
        .map(|f| f.ident.clone())
        .collect::<Vec<_>>();
    debug_assert!(field_names.len() == 3);

    let field1 = &field_names[0];
    let field2 = &field_names[1];
    let field3 = &field_names[2];

    // All three components are part of the public surface.
    input.fields.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Public(Default::default());
    });

    let attr = syn::Attribute::parse_outer
        .parse2(quote! {
            #[derive(Clone, Copy, Debug, PartialEq)]
        })
        .unwrap();
    input.attrs.extend(attr);

    let struct_name = input.ident.clone();
    let model_name = struct_name.to_string().to_case(Case::Kebab);

    let new_impl = quote! {
        impl #struct_name {
            /// Create a new color in this model.
            pub const fn new(
                #field1: crate::color::Component,
                #field2: crate::color::Component,
                #field3: crate::color::Component,
            ) -> Self {
                Self {
                    #field1,
                    #field2,
                    #field3,
                }
            }

            /// Convert this model into generic components.
            pub fn to_components(&self) -> crate::color::Components {
                crate::color::Components(self.#field1, self.#field2, self.#field3)
            }

            /// Returns true if none of the components are NaN or infinite.
            pub fn is_finite(&self) -> bool {
                self.#field1.is_finite() && self.#field2.is_finite() && self.#field3.is_finite()
            }
        }

        impl From<crate::color::Components> for #struct_name {
            fn from(value: crate::color::Components) -> Self {
                Self::new(value.0, value.1, value.2)
            }
        }

        impl From<#struct_name> for crate::color::Components {
            fn from(value: #struct_name) -> Self {
                value.to_components()
            }
        }

        impl crate::models::Model for #struct_name {
            const NAME: &'static str = #model_name;
        }

        impl std::fmt::Display for #struct_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match f.precision() {
                    Some(p) => write!(
                        f,
                        "{}({:.*}, {:.*}, {:.*})",
                        <Self as crate::models::Model>::NAME, p, self.#field1, p, self.#field2, p, self.#field3
                    ),
                    None => write!(
                        f,
                        "{}({}, {}, {})",
                        <Self as crate::models::Model>::NAME, self.#field1, self.#field2, self.#field3
                    ),
                }
            }
        }
    };

    quote! {
        #input
        #new_impl
    }
    .into()
}
