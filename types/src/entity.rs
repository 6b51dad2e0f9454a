//! Table description

use std::borrow::Cow;

use heck::ToSnakeCase;

use crate::{Field, ForeignKey};

/// One schema table.
///
/// Field order is preserved in generated column lists.
///
/// # Examples
///
/// ```
/// use ddlgen_types::{Entity, Field, ForeignKey};
///
/// let orders = Entity::new("OrderItem")
///     .comment("Line items")
///     .field(Field::new("id", "Long").primary_key().auto_increment())
///     .field(Field::new("orderId", "Long").column("order_id"))
///     .foreign_key(ForeignKey::new("fk_item_order", "order_id", "orders", "id"));
///
/// assert_eq!(orders.table_name, "order_item");
/// assert!(orders.has_auto_increment());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", try_from = "EntityRepr"))]
pub struct Entity {
    /// Logical name, the source of the derived table name
    pub name: Cow<'static, str>,

    /// Resolved physical table name
    pub table_name: Cow<'static, str>,

    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub comment: Option<Cow<'static, str>>,

    pub fields: Vec<Field>,

    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Vec::is_empty"))]
    pub foreign_keys: Vec<ForeignKey>,
}

impl Entity {
    /// Create an entity whose table name is the snake_case form of `name`
    #[must_use]
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        let name = name.into();
        let table_name = Cow::Owned(name.to_snake_case());
        Self {
            name,
            table_name,
            comment: None,
            fields: Vec::new(),
            foreign_keys: Vec::new(),
        }
    }

    /// Override the derived table name
    #[must_use]
    pub fn table_name(self, table_name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            table_name: table_name.into(),
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

    /// Append a field
    #[must_use]
    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Append several fields
    #[must_use]
    pub fn fields(mut self, fields: impl IntoIterator<Item = Field>) -> Self {
        self.fields.extend(fields);
        self
    }

    #[must_use]
    pub fn foreign_key(mut self, foreign_key: ForeignKey) -> Self {
        self.foreign_keys.push(foreign_key);
        self
    }

    /// Whether any field is auto-incrementing
    #[must_use]
    pub fn has_auto_increment(&self) -> bool {
        self.fields.iter().any(|f| f.auto_increment)
    }

    /// Whether the table or any of its fields carries a comment
    #[must_use]
    pub fn has_comments(&self) -> bool {
        self.comment.is_some() || self.fields.iter().any(|f| f.comment.is_some())
    }

    /// Look up a field by its physical column name
    #[must_use]
    pub fn find_field(&self, column_name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.column_name() == column_name)
    }
}

/// Deserialization shape: either `name` or `tableName` may be left out, but
/// not both. A missing `tableName` is derived from `name`; a missing `name`
/// takes the table name.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct EntityRepr {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    table_name: Option<String>,
    #[serde(default)]
    comment: Option<String>,
    #[serde(default)]
    fields: Vec<Field>,
    #[serde(default)]
    foreign_keys: Vec<ForeignKey>,
}

#[cfg(feature = "serde")]
impl TryFrom<EntityRepr> for Entity {
    type Error = &'static str;

    fn try_from(repr: EntityRepr) -> Result<Self, Self::Error> {
        let mut entity = match (repr.name, repr.table_name) {
            (Some(name), None) => Entity::new(name),
            (Some(name), Some(table_name)) => Entity::new(name).table_name(table_name),
            (None, Some(table_name)) => Entity::new(table_name.clone()).table_name(table_name),
            (None, None) => return Err("entity needs a `name` or a `tableName`"),
        };
        entity.comment = repr.comment.map(Cow::Owned);
        entity.fields = repr.fields;
        entity.foreign_keys = repr.foreign_keys;
        Ok(entity)
    }
}
