//! Serde helpers for `Cow<'static, str>` deserialization
//!
//! The schema model stores identifiers as `Cow<'static, str>` so builders can
//! borrow string literals, while documents read from JSON or TOML become
//! `Cow::Owned`.

use std::borrow::Cow;

use serde::{Deserialize, Deserializer};

/// Deserialize a String into `Cow<'static, str>`
pub fn cow_from_string<'de, D>(deserializer: D) -> Result<Cow<'static, str>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Ok(Cow::Owned(s))
}

/// Deserialize an `Option<String>` into `Option<Cow<'static, str>>`
pub fn cow_option_from_string<'de, D>(
    deserializer: D,
) -> Result<Option<Cow<'static, str>>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.map(Cow::Owned))
}

/// `serde(default = ...)` for flags that are on unless stated otherwise
pub const fn default_true() -> bool {
    true
}
