//! Column description
//!
//! A [`Field`] is one column of an [`Entity`](crate::Entity). All flags are
//! independent: `auto_increment` and `sequence` may both be set, and each
//! dialect decides which one it honours.

use std::borrow::Cow;

use crate::LogicalType;

#[cfg(feature = "serde")]
use crate::serde_helpers::{cow_option_from_string, default_true};

/// Column name used when a field carries neither `columnName` nor `name`
pub const UNKNOWN_COLUMN: &str = "unknown";

/// One column of an entity.
///
/// # Examples
///
/// ```
/// use ddlgen_types::Field;
///
/// let id = Field::new("id", "Long").primary_key().auto_increment().not_null();
/// assert_eq!(id.column_name(), "id");
/// assert!(!id.nullable);
///
/// let nameless = Field::default();
/// assert_eq!(nameless.column_name(), "unknown");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Field {
    /// Property name
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "cow_option_from_string")
    )]
    pub name: Option<Cow<'static, str>>,

    /// Explicit column name, overrides `name`
    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            deserialize_with = "cow_option_from_string",
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub column_name: Option<Cow<'static, str>>,

    /// Logical type tag (see [`LogicalType::parse`])
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "cow_option_from_string")
    )]
    pub type_name: Option<Cow<'static, str>>,

    /// String length, `0` means dialect default
    #[cfg_attr(feature = "serde", serde(default))]
    pub length: u32,

    /// Decimal precision, `0` means dialect default
    #[cfg_attr(feature = "serde", serde(default))]
    pub precision: u32,

    /// Decimal scale
    #[cfg_attr(feature = "serde", serde(default))]
    pub scale: u32,

    /// Force unbounded text storage
    #[cfg_attr(feature = "serde", serde(default, rename = "isText", alias = "text"))]
    pub text: bool,

    #[cfg_attr(
        feature = "serde",
        serde(default = "default_true", rename = "isNullable", alias = "nullable")
    )]
    pub nullable: bool,

    #[cfg_attr(
        feature = "serde",
        serde(default, rename = "isPrimaryKey", alias = "primaryKey")
    )]
    pub primary_key: bool,

    #[cfg_attr(
        feature = "serde",
        serde(default, rename = "isAutoIncrement", alias = "autoIncrement")
    )]
    pub auto_increment: bool,

    /// Backed by a named sequence
    #[cfg_attr(feature = "serde", serde(default, rename = "isSequence", alias = "sequence"))]
    pub sequence: bool,

    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            deserialize_with = "cow_option_from_string",
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub sequence_name: Option<Cow<'static, str>>,

    /// Raw default expression, spliced verbatim
    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            deserialize_with = "cow_option_from_string",
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub default_value: Option<Cow<'static, str>>,

    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            deserialize_with = "cow_option_from_string",
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub comment: Option<Cow<'static, str>>,
}

impl Default for Field {
    fn default() -> Self {
        Self {
            name: None,
            column_name: None,
            type_name: None,
            length: 0,
            precision: 0,
            scale: 0,
            text: false,
            nullable: true,
            primary_key: false,
            auto_increment: false,
            sequence: false,
            sequence_name: None,
            default_value: None,
            comment: None,
        }
    }
}

impl Field {
    /// Create a nullable field with a name and a logical type tag
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>, type_name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: Some(name.into()),
            type_name: Some(type_name.into()),
            ..Self::default()
        }
    }

    // =========================================================================
    // Builders
    // =========================================================================

    /// Override the column name
    #[must_use]
    pub fn column(self, column_name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            column_name: Some(column_name.into()),
            ..self
        }
    }

    #[must_use]
    pub fn length(self, length: u32) -> Self {
        Self { length, ..self }
    }

    /// Set decimal precision and scale
    #[must_use]
    pub fn precision(self, precision: u32, scale: u32) -> Self {
        Self {
            precision,
            scale,
            ..self
        }
    }

    /// Force long-text storage
    #[must_use]
    pub fn text(self) -> Self {
        Self { text: true, ..self }
    }

    #[must_use]
    pub fn not_null(self) -> Self {
        Self {
            nullable: false,
            ..self
        }
    }

    /// Mark as primary key. Nullability is left untouched.
    #[must_use]
    pub fn primary_key(self) -> Self {
        Self {
            primary_key: true,
            ..self
        }
    }

    #[must_use]
    pub fn auto_increment(self) -> Self {
        Self {
            auto_increment: true,
            ..self
        }
    }

    /// Back the column with a sequence named `<column>_seq`
    #[must_use]
    pub fn sequence(self) -> Self {
        Self {
            sequence: true,
            ..self
        }
    }

    /// Back the column with an explicitly named sequence
    #[must_use]
    pub fn sequence_named(self, sequence_name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            sequence: true,
            sequence_name: Some(sequence_name.into()),
            ..self
        }
    }

    #[must_use]
    pub fn default_value(self, value: impl Into<Cow<'static, str>>) -> Self {
        Self {
            default_value: Some(value.into()),
            ..self
        }
    }

    #[must_use]
    pub fn comment(self, comment: impl Into<Cow<'static, str>>) -> Self {
        Self {
            comment: Some(comment.into()),
            ..self
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Physical column name: `column_name`, else `name`, else `"unknown"`
    #[must_use]
    pub fn column_name(&self) -> &str {
        self.column_name
            .as_deref()
            .or(self.name.as_deref())
            .unwrap_or(UNKNOWN_COLUMN)
    }

    /// Whether the column name came from the field rather than the fallback
    #[must_use]
    pub fn has_explicit_name(&self) -> bool {
        self.column_name.is_some() || self.name.is_some()
    }

    /// Recognised logical type, `None` for a missing or unknown tag
    #[must_use]
    pub fn logical_type(&self) -> Option<LogicalType> {
        self.type_name.as_deref().and_then(LogicalType::parse)
    }

    /// Sequence name, defaulting to `<column>_seq`
    #[must_use]
    pub fn sequence_name_or_default(&self) -> Cow<'_, str> {
        match &self.sequence_name {
            Some(name) => Cow::Borrowed(name.as_ref()),
            None => Cow::Owned(format!("{}_seq", self.column_name())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_name_fallback() {
        let field = Field::new("email", "String");
        assert_eq!(field.column_name(), "email");

        let field = Field::new("emailAddress", "String").column("email_address");
        assert_eq!(field.column_name(), "email_address");

        let field = Field {
            column_name: Some("only_column".into()),
            ..Field::default()
        };
        assert_eq!(field.column_name(), "only_column");
        assert!(field.has_explicit_name());

        let field = Field::default();
        assert_eq!(field.column_name(), UNKNOWN_COLUMN);
        assert!(!field.has_explicit_name());
    }

    #[test]
    fn test_builders_keep_owned_names() {
        let name = String::from("total");
        let field = Field::new(name, String::from("BigDecimal"))
            .column(String::from("order_total"))
            .length(40)
            .precision(12, 4)
            .text()
            .not_null()
            .primary_key()
            .auto_increment()
            .sequence()
            .comment(String::from("Gross"));

        assert_eq!(field.column_name(), "order_total");
        assert_eq!(field.name.as_deref(), Some("total"));
        assert_eq!(field.type_name.as_deref(), Some("BigDecimal"));
        assert_eq!((field.length, field.precision, field.scale), (40, 12, 4));
        assert!(field.text && field.primary_key && field.auto_increment && field.sequence);
        assert!(!field.nullable);
        assert_eq!(field.comment.as_deref(), Some("Gross"));
    }

    #[test]
    fn test_sequence_name_default() {
        let field = Field::new("id", "Long").sequence();
        assert_eq!(field.sequence_name_or_default(), "id_seq");

        let field = Field::new("id", "Long").column("user_id").sequence();
        assert_eq!(field.sequence_name_or_default(), "user_id_seq");

        let field = Field::new("id", "Long").sequence_named("users_id_seq");
        assert!(field.sequence);
        assert_eq!(field.sequence_name_or_default(), "users_id_seq");
    }

    #[test]
    fn test_builder_flags() {
        let field = Field::new("price", "BigDecimal")
            .precision(10, 2)
            .not_null()
            .default_value("0")
            .comment("Unit price");

        assert_eq!(field.precision, 10);
        assert_eq!(field.scale, 2);
        assert!(!field.nullable);
        assert!(!field.primary_key);
        assert_eq!(field.default_value.as_deref(), Some("0"));
        assert_eq!(field.comment.as_deref(), Some("Unit price"));
        assert_eq!(field.logical_type(), Some(LogicalType::BigDecimal));
    }

    #[test]
    fn test_primary_key_keeps_nullability() {
        let field = Field::new("id", "Long").primary_key();
        assert!(field.primary_key);
        assert!(field.nullable);
    }

    #[test]
    fn test_unknown_type_tag() {
        assert_eq!(Field::new("x", "Money").logical_type(), None);
        assert_eq!(Field::default().logical_type(), None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "name": "id",
            "columnName": "user_id",
            "typeName": "Long",
            "isPrimaryKey": true,
            "isAutoIncrement": true,
            "isNullable": false,
            "sequenceName": "users_seq"
        }"#;

        let field: Field = serde_json::from_str(json).unwrap();
        assert_eq!(field.column_name(), "user_id");
        assert!(field.primary_key);
        assert!(field.auto_increment);
        assert!(!field.nullable);
        assert!(!field.sequence);
        assert_eq!(field.sequence_name.as_deref(), Some("users_seq"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_defaults() {
        let field: Field = serde_json::from_str(r#"{ "name": "note" }"#).unwrap();
        assert!(field.nullable);
        assert!(!field.text);
        assert_eq!(field.length, 0);
        assert_eq!(field.type_name, None);
    }
}
