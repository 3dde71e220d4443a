//! Declared field types and borrowed runtime values.
//!
//! [`TypeTag`] is the key the registry resolves validators by; [`FieldValue`]
//! is what a validator actually receives. Both are closed sets, so the
//! dispatcher never needs runtime type inspection.

use std::fmt;

use serde::{Serialize, Serializer};

// ============================================================================
// TYPE TAG
// ============================================================================

/// The declared type of a record field.
///
/// Types without a dedicated variant keep their source name in
/// [`TypeTag::Other`] so they still show up in descriptors and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// `String`, `str`, `&str`.
    String,
    /// Signed integers.
    Int,
    /// Unsigned integers.
    Uint,
    /// `f32`, `f64`.
    Float,
    /// `bool`.
    Bool,
    /// Any other type, by name.
    Other(&'static str),
}

impl TypeTag {
    /// Canonical type name: `"string"`, `"int"`, `"uint"`, `"float"`, `"bool"`,
    /// or the raw name for [`TypeTag::Other`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            TypeTag::String => "string",
            TypeTag::Int => "int",
            TypeTag::Uint => "uint",
            TypeTag::Float => "float",
            TypeTag::Bool => "bool",
            TypeTag::Other(name) => name,
        }
    }

    /// Maps a canonical type name back to its tag. Unknown names become
    /// [`TypeTag::Other`].
    #[must_use]
    pub fn from_name(name: &'static str) -> Self {
        match name {
            "string" => TypeTag::String,
            "int" => TypeTag::Int,
            "uint" => TypeTag::Uint,
            "float" => TypeTag::Float,
            "bool" => TypeTag::Bool,
            other => TypeTag::Other(other),
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for TypeTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

// ============================================================================
// FIELD VALUE
// ============================================================================

/// A borrowed view of one field's runtime value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    /// String data.
    Str(&'a str),
    /// Signed integer, widened to `i64`.
    Int(i64),
    /// Unsigned integer, widened to `u64`.
    Uint(u64),
    /// Floating point, widened to `f64`.
    Float(f64),
    /// Boolean.
    Bool(bool),
    /// A value whose type has no mapping; carries the type name only.
    Opaque(&'static str),
}

impl<'a> FieldValue<'a> {
    /// The tag matching this value's runtime type.
    #[must_use]
    pub const fn type_tag(&self) -> TypeTag {
        match self {
            FieldValue::Str(_) => TypeTag::String,
            FieldValue::Int(_) => TypeTag::Int,
            FieldValue::Uint(_) => TypeTag::Uint,
            FieldValue::Float(_) => TypeTag::Float,
            FieldValue::Bool(_) => TypeTag::Bool,
            FieldValue::Opaque(name) => TypeTag::Other(*name),
        }
    }

    /// Returns the string data, if this is a string value.
    #[must_use]
    pub const fn as_str(&self) -> Option<&'a str> {
        match self {
            FieldValue::Str(s) => Some(*s),
            _ => None,
        }
    }
}

// ============================================================================
// AS FIELD VALUE
// ============================================================================

/// Field types that can hand a [`FieldValue`] to the dispatcher.
///
/// `#[derive(Record)]` calls this for every field whose type it recognises.
pub trait AsFieldValue {
    /// The tag declared for fields of this type.
    const TYPE_TAG: TypeTag;

    /// Borrows the value.
    fn as_field_value(&self) -> FieldValue<'_>;
}

impl AsFieldValue for str {
    const TYPE_TAG: TypeTag = TypeTag::String;

    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Str(self)
    }
}

impl AsFieldValue for String {
    const TYPE_TAG: TypeTag = TypeTag::String;

    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Str(self.as_str())
    }
}

impl<T: AsFieldValue + ?Sized> AsFieldValue for &T {
    const TYPE_TAG: TypeTag = T::TYPE_TAG;

    fn as_field_value(&self) -> FieldValue<'_> {
        (**self).as_field_value()
    }
}

impl AsFieldValue for bool {
    const TYPE_TAG: TypeTag = TypeTag::Bool;

    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Bool(*self)
    }
}

macro_rules! impl_as_field_value {
    ($variant:ident => $wide:ty: $($ty:ty),+) => {
        $(
            impl AsFieldValue for $ty {
                const TYPE_TAG: TypeTag = TypeTag::$variant;

                #[allow(trivial_numeric_casts, clippy::cast_lossless)]
                fn as_field_value(&self) -> FieldValue<'_> {
                    FieldValue::$variant(*self as $wide)
                }
            }
        )+
    };
}

impl_as_field_value!(Int => i64: i8, i16, i32, i64, isize);
impl_as_field_value!(Uint => u64: u8, u16, u32, u64, usize);
impl_as_field_value!(Float => f64: f32, f64);
