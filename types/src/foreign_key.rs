use std::borrow::Cow;

#[cfg(feature = "serde")]
use crate::serde_helpers::cow_from_string;

/// Single-column foreign key. No cascade or action metadata is modelled.
///
/// ```
/// use ddlgen_types::ForeignKey;
///
/// let fk = ForeignKey::new("fk_orders_user", "user_id", "users", "id");
/// assert_eq!(fk.referenced_table_name, "users");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct ForeignKey {
    /// Constraint name
    #[cfg_attr(feature = "serde", serde(deserialize_with = "cow_from_string"))]
    pub name: Cow<'static, str>,

    /// Referencing column on the owning table
    #[cfg_attr(feature = "serde", serde(deserialize_with = "cow_from_string"))]
    pub column_name: Cow<'static, str>,

    #[cfg_attr(feature = "serde", serde(deserialize_with = "cow_from_string"))]
    pub referenced_table_name: Cow<'static, str>,

    #[cfg_attr(feature = "serde", serde(deserialize_with = "cow_from_string"))]
    pub referenced_column_name: Cow<'static, str>,
}

impl ForeignKey {
    #[must_use]
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        column_name: impl Into<Cow<'static, str>>,
        referenced_table_name: impl Into<Cow<'static, str>>,
        referenced_column_name: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            name: name.into(),
            column_name: column_name.into(),
            referenced_table_name: referenced_table_name.into(),
            referenced_column_name: referenced_column_name.into(),
        }
    }
}
