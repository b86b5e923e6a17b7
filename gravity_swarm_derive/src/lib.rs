/// Derive macro generating an implementation of the trait `Body`.
///
/// The struct needs a `position` field and a `radius` field. If it also has a `radius_cubed`
/// field, it is returned as the mass proxy instead of cubing the radius on every call.
#[proc_macro_derive(Body)]
pub fn body_derive(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let ast = syn::parse(input);

    impl_body(ast)
        .unwrap_or_else(|e| syn::Error::to_compile_error(&e))
        .into()
}

fn impl_body(input: syn::Result<syn::DeriveInput>) -> syn::Result<proc_macro2::TokenStream> {
    let input = input?;

    let struct_data = match &input.data {
        syn::Data::Struct(struct_data) => Ok(struct_data),
        syn::Data::Enum(enum_data) => Err(syn::Error::new_spanned(
            enum_data.enum_token,
            "the `Body` trait can only be derived for struct types",
        )),
        syn::Data::Union(union_data) => Err(syn::Error::new_spanned(
            union_data.union_token,
            "the `Body` trait can only be derived for struct types",
        )),
    }?;

    let position_ty = get_type_of(struct_data, "position")?;
    let radius_ty = get_type_of(struct_data, "radius")?;

    let mass_proxy_method = get_field(struct_data, "radius_cubed").map(|field| {
        let ty = &field.ty;
        quote::quote! {
            #[inline]
            fn mass_proxy(&self) -> #ty {
                self.radius_cubed
            }
        }
    });

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote::quote! {
        impl #impl_generics Body for #name #ty_generics #where_clause {
            #[inline]
            fn position(&self) -> #position_ty {
                self.position
            }

            #[inline]
            fn radius(&self) -> #radius_ty {
                self.radius
            }

            #mass_proxy_method
        }
    })
}

fn get_field<'a>(struct_data: &'a syn::DataStruct, field_name: &str) -> Option<&'a syn::Field> {
    struct_data
        .fields
        .iter()
        .find(|field| field.ident.as_ref().is_some_and(|ident| ident == field_name))
}

fn get_type_of(struct_data: &syn::DataStruct, field_name: &str) -> syn::Result<syn::Type> {
    get_field(struct_data, field_name)
        .map(|field| field.ty.clone())
        .ok_or_else(|| {
            syn::Error::new_spanned(&struct_data.fields, format!("no `{field_name}` field"))
        })
}
