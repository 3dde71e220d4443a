use quote::ToTokens;
use syn::spanned::Spanned;
use syn::{Data, DeriveInput, Fields, Type};

/// Returns the named fields of a struct, or an error for anything else.
pub fn require_named_fields(input: &DeriveInput) -> syn::Result<&syn::FieldsNamed> {
    let fields = match &input.data {
        Data::Struct(s) => &s.fields,
        _ => {
            return Err(syn::Error::new(
                input.ident.span(),
                "Record can only be derived for structs",
            ));
        }
    };

    match fields {
        Fields::Named(named) => Ok(named),
        Fields::Unnamed(_) => Err(syn::Error::new(
            fields.span(),
            "Record requires a struct with named fields (e.g. `struct X { ... }`)",
        )),
        Fields::Unit => Err(syn::Error::new(
            input.ident.span(),
            "Record requires a struct with at least one named field",
        )),
    }
}

/// Last path segment of a type, looking through references, parentheses and
/// groups. `None` for slices, tuples, arrays and other non-path types.
pub fn type_name(ty: &Type) -> Option<String> {
    match ty {
        Type::Reference(r) => type_name(&r.elem),
        Type::Paren(p) => type_name(&p.elem),
        Type::Group(g) => type_name(&g.elem),
        Type::Path(p) if p.qself.is_none() => {
            p.path.segments.last().map(|segment| segment.ident.to_string())
        }
        _ => None,
    }
}

/// Source spelling of a type with token spacing removed, except between two
/// identifier characters (`& 'a str` becomes `&'a str`).
pub fn type_source(ty: &Type) -> String {
    let raw = ty.to_token_stream().to_string();
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        if c == ' ' {
            let joins_words = out.chars().next_back().is_some_and(is_ident_char)
                && chars.peek().copied().is_some_and(is_ident_char);
            if joins_words {
                out.push(' ');
            }
        } else {
            out.push(c);
        }
    }
    out
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
