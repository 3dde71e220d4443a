use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DeriveInput, Type, parse_macro_input};

use crate::support::{attrs, diag, utils};

pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand(input) {
        Ok(ts) => ts.into(),
        Err(e) => diag::to_compile_error(e),
    }
}

/// Declared type of a field as the runtime sees it.
enum FieldKind {
    /// Has an `AsFieldValue` impl; the tokens name the `TypeTag` variant.
    Known(TokenStream2),
    /// No mapping; only the type name travels.
    Opaque(String),
}

impl FieldKind {
    fn infer(ty: &Type) -> Self {
        let Some(name) = utils::type_name(ty) else {
            return FieldKind::Opaque(quote!(#ty).to_string().replace(' ', ""));
        };

        let variant = match name.as_str() {
            "String" | "str" => quote!(String),
            "i8" | "i16" | "i32" | "i64" | "isize" => quote!(Int),
            "u8" | "u16" | "u32" | "u64" | "usize" => quote!(Uint),
            "f32" | "f64" => quote!(Float),
            "bool" => quote!(Bool),
            _ => return FieldKind::Opaque(name),
        };
        FieldKind::Known(variant)
    }

    fn type_tag(&self) -> TokenStream2 {
        match self {
            FieldKind::Known(variant) => quote!(::tagval_validator::foundation::TypeTag::#variant),
            FieldKind::Opaque(name) => quote!(::tagval_validator::foundation::TypeTag::Other(#name)),
        }
    }

    fn value(&self, field: &syn::Ident) -> TokenStream2 {
        match self {
            FieldKind::Known(_) => quote! {
                ::tagval_validator::foundation::AsFieldValue::as_field_value(&self.#field)
            },
            FieldKind::Opaque(name) => quote! {
                ::tagval_validator::foundation::FieldValue::Opaque(#name)
            },
        }
    }
}

fn expand(input: DeriveInput) -> syn::Result<TokenStream2> {
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let record_attrs = attrs::parse_attrs(&input.attrs, "record")?;
    record_attrs.check_keys("record", &["name"])?;
    let record_name = record_attrs
        .get_string("name")?
        .unwrap_or_else(|| struct_name.to_string());

    let fields = utils::require_named_fields(&input)?;
    let mut specs = Vec::with_capacity(fields.named.len());
    let mut arms = Vec::with_capacity(fields.named.len());

    for (index, field) in fields.named.iter().enumerate() {
        let Some(ident) = field.ident.as_ref() else {
            return Err(diag::error_spanned(field, "Record requires named fields"));
        };

        let validate_attrs = attrs::parse_attrs(&field.attrs, "validate")?;
        validate_attrs.check_keys("validate", &["rule", "skip"])?;
        let rule = match (validate_attrs.get_string("rule")?, validate_attrs.has_flag("skip")) {
            (Some(_), true) => {
                return Err(diag::error_spanned(
                    field,
                    "`rule` and `skip` cannot be combined",
                ));
            }
            (Some(rule), false) => rule,
            (None, true) => "-".to_string(),
            (None, false) => String::new(),
        };

        let name = ident.to_string();
        let name = name.strip_prefix("r#").unwrap_or(&name);
        let kind = FieldKind::infer(&field.ty);
        let type_tag = kind.type_tag();
        let value = kind.value(ident);
        let rust_type = utils::type_source(&field.ty);

        specs.push(quote! {
            ::tagval_validator::record::FieldSpec::new(#name, #type_tag, #rule)
                .with_rust_type(#rust_type)
        });
        arms.push(quote! {
            #index => ::core::option::Option::Some(#value),
        });
    }

    Ok(quote! {
        impl #impl_generics ::tagval_validator::record::Record for #struct_name #ty_generics #where_clause {
            const NAME: &'static str = #record_name;
            const FIELDS: &'static [::tagval_validator::record::FieldSpec] = &[#(#specs),*];

            fn field_value(
                &self,
                index: usize,
            ) -> ::core::option::Option<::tagval_validator::foundation::FieldValue<'_>> {
                match index {
                    #(#arms)*
                    _ => ::core::option::Option::None,
                }
            }
        }
    })
}
