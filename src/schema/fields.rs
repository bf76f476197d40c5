//! Field visitor for configuration structs.
//!
//! Stands in for runtime reflection: `config_section!` implements
//! [`ConfigSection`] for a struct by listing its fields, and each field
//! type reports through [`AsField`] whether it is a nested section, a present
//! value or an absent one.

use std::{borrow::Cow, collections::BTreeMap};

use serde::Serialize;
use serde_json::Value;
use tracing::warn;

/// A configuration struct whose fields can be walked.
pub trait ConfigSection {
    /// Name of the schema definition describing this type.
    fn definition_key(&self) -> Cow<'static, str>;

    /// Fields in declaration order, named by their Rust identifiers.
    fn fields(&self) -> Vec<Field<'_>>;
}

/// One field of a [`ConfigSection`].
pub struct Field<'a> {
    /// Rust field name.
    pub name: &'static str,
    /// Serialized name set with `#[serde(rename)]`, if any.
    pub property: Option<&'static str>,
    /// Current value of the field.
    pub value: FieldValue<'a>,
}

impl<'a> Field<'a> {
    /// Pairs a field name with its value.
    pub fn new(name: &'static str, value: FieldValue<'a>) -> Self {
        Self {
            name,
            property: None,
            value,
        }
    }

    /// Sets the serialized name, overriding the naming rule for this field.
    pub fn renamed(mut self, property: &'static str) -> Self {
        self.property = Some(property);
        self
    }
}

/// What a field holds, as far as the defaults walker is concerned.
pub enum FieldValue<'a> {
    /// A nested configuration struct.
    Section(&'a dyn ConfigSection),
    /// A value that counts as set, zero values included.
    Present(Value),
    /// An unset optional value.
    Absent,
}

impl FieldValue<'_> {
    /// Serializes `value` into a present field value.
    ///
    /// A value that cannot be represented as JSON is reported as absent.
    pub fn present<T: Serialize + ?Sized>(value: &T) -> Self {
        match serde_json::to_value(value) {
            Ok(value) => FieldValue::Present(value),
            Err(err) => {
                warn!("Cannot represent field value as JSON: {err}");
                FieldValue::Absent
            }
        }
    }
}

/// Classifies a field's value.
pub trait AsField {
    /// Returns the walker's view of this value.
    fn as_field(&self) -> FieldValue<'_>;
}

/// Implements [`AsField`] for types that are always present when set,
/// such as scalars and unit enums.
#[macro_export]
macro_rules! scalar_field {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::schema::AsField for $ty {
                fn as_field(&self) -> $crate::schema::FieldValue<'_> {
                    $crate::schema::FieldValue::present(self)
                }
            }
        )+
    };
}

/// Implements [`ConfigSection`] and [`AsField`] for a configuration struct.
///
/// The definition key is the type's `schemars` schema name, which is the key
/// it is stored under in the schema's `$defs`. A field carrying
/// `#[serde(rename = "...")]` must repeat that name as `field => "name"`;
/// other fields are named by the reflector's naming rule.
///
/// # Example
/// ```ignore
/// config_section!(GuiConfig {
///     scroll_height,
///     theme,
///     nerd_fonts_version => "nerdFonts",
/// });
/// ```
#[macro_export]
macro_rules! config_section {
    ($ty:ty { $($field:ident $(=> $property:literal)?),* $(,)? }) => {
        impl $crate::schema::ConfigSection for $ty {
            fn definition_key(&self) -> ::std::borrow::Cow<'static, str> {
                <$ty as ::schemars::JsonSchema>::schema_name()
            }

            fn fields(&self) -> Vec<$crate::schema::Field<'_>> {
                vec![
                    $(
                        $crate::schema::Field::new(
                            stringify!($field),
                            $crate::schema::AsField::as_field(&self.$field),
                        )$(.renamed($property))?,
                    )*
                ]
            }
        }

        impl $crate::schema::AsField for $ty {
            fn as_field(&self) -> $crate::schema::FieldValue<'_> {
                $crate::schema::FieldValue::Section(self)
            }
        }
    };
}

scalar_field!(
    bool, char, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64, String
);

impl<T: Serialize> AsField for Option<T> {
    fn as_field(&self) -> FieldValue<'_> {
        match self {
            Some(value) => FieldValue::present(value),
            None => FieldValue::Absent,
        }
    }
}

impl<T: Serialize> AsField for Vec<T> {
    fn as_field(&self) -> FieldValue<'_> {
        FieldValue::present(self)
    }
}

impl<T: Serialize> AsField for BTreeMap<String, T> {
    fn as_field(&self) -> FieldValue<'_> {
        FieldValue::present(self)
    }
}
