//! Engine-agnostic logical type vocabulary
//!
//! Fields carry a free-form type tag. Each dialect maps the recognised tags to
//! its own physical column type and falls back to a textual type for anything
//! else, so parsing never fails hard: unknown tags are simply `None`.

/// Logical data type of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalType {
    // =========================================================================
    // Numeric
    // =========================================================================
    Integer,
    Long,
    Short,
    Byte,
    Float,
    Double,
    BigDecimal,
    BigInteger,

    // =========================================================================
    // Text
    // =========================================================================
    String,
    Char,

    Boolean,

    // =========================================================================
    // Date / time
    // =========================================================================
    /// Legacy date-time value (`java.util.Date` style)
    Date,
    SqlDate,
    SqlTime,
    SqlTimestamp,
    LocalDate,
    LocalTime,
    LocalDateTime,
    ZonedDateTime,
    OffsetDateTime,
    Instant,
    Duration,

    // =========================================================================
    // Other
    // =========================================================================
    /// Raw bytes
    Bytes,
    Uuid,
    Json,
    IntegerArray,
    LongArray,
    StringArray,
}

impl LogicalType {
    /// Every logical type, in declaration order
    pub const ALL: [LogicalType; 28] = [
        LogicalType::Integer,
        LogicalType::Long,
        LogicalType::Short,
        LogicalType::Byte,
        LogicalType::Float,
        LogicalType::Double,
        LogicalType::BigDecimal,
        LogicalType::BigInteger,
        LogicalType::String,
        LogicalType::Char,
        LogicalType::Boolean,
        LogicalType::Date,
        LogicalType::SqlDate,
        LogicalType::SqlTime,
        LogicalType::SqlTimestamp,
        LogicalType::LocalDate,
        LogicalType::LocalTime,
        LogicalType::LocalDateTime,
        LogicalType::ZonedDateTime,
        LogicalType::OffsetDateTime,
        LogicalType::Instant,
        LogicalType::Duration,
        LogicalType::Bytes,
        LogicalType::Uuid,
        LogicalType::Json,
        LogicalType::IntegerArray,
        LogicalType::LongArray,
        LogicalType::StringArray,
    ];

    /// Resolve a type tag. Tags are case-sensitive.
    ///
    /// ```
    /// use ddlgen_types::LogicalType;
    ///
    /// assert_eq!(LogicalType::parse("Long"), Some(LogicalType::Long));
    /// assert_eq!(LogicalType::parse("[B"), Some(LogicalType::Bytes));
    /// assert_eq!(LogicalType::parse("Array<String>"), Some(LogicalType::StringArray));
    /// assert_eq!(LogicalType::parse("long"), None);
    /// ```
    #[must_use]
    pub fn parse(tag: &str) -> Option<Self> {
        let ty = match tag {
            "Integer" => Self::Integer,
            "Long" => Self::Long,
            "Short" => Self::Short,
            "Byte" => Self::Byte,
            "Float" => Self::Float,
            "Double" => Self::Double,
            "BigDecimal" => Self::BigDecimal,
            "BigInteger" => Self::BigInteger,
            "String" => Self::String,
            "Character" | "Char" => Self::Char,
            "Boolean" => Self::Boolean,
            "Date" => Self::Date,
            "sqlDate" => Self::SqlDate,
            "sqlTime" => Self::SqlTime,
            "sqlTimestamp" => Self::SqlTimestamp,
            "LocalDate" => Self::LocalDate,
            "LocalTime" => Self::LocalTime,
            "LocalDateTime" => Self::LocalDateTime,
            "ZonedDateTime" => Self::ZonedDateTime,
            "OffsetDateTime" => Self::OffsetDateTime,
            "Instant" => Self::Instant,
            "Duration" => Self::Duration,
            "byte[]" | "[B" => Self::Bytes,
            "UUID" => Self::Uuid,
            "JsonNode" => Self::Json,
            "Integer[]" | "[Ljava.lang.Integer;" | "IntArray" => Self::IntegerArray,
            "Long[]" | "[Ljava.lang.Long;" | "LongArray" => Self::LongArray,
            "String[]" | "[Ljava.lang.String;" | "Array<String>" => Self::StringArray,
            _ => return None,
        };
        Some(ty)
    }

    /// Canonical tag, the first spelling accepted by [`LogicalType::parse`]
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Integer => "Integer",
            Self::Long => "Long",
            Self::Short => "Short",
            Self::Byte => "Byte",
            Self::Float => "Float",
            Self::Double => "Double",
            Self::BigDecimal => "BigDecimal",
            Self::BigInteger => "BigInteger",
            Self::String => "String",
            Self::Char => "Character",
            Self::Boolean => "Boolean",
            Self::Date => "Date",
            Self::SqlDate => "sqlDate",
            Self::SqlTime => "sqlTime",
            Self::SqlTimestamp => "sqlTimestamp",
            Self::LocalDate => "LocalDate",
            Self::LocalTime => "LocalTime",
            Self::LocalDateTime => "LocalDateTime",
            Self::ZonedDateTime => "ZonedDateTime",
            Self::OffsetDateTime => "OffsetDateTime",
            Self::Instant => "Instant",
            Self::Duration => "Duration",
            Self::Bytes => "byte[]",
            Self::Uuid => "UUID",
            Self::Json => "JsonNode",
            Self::IntegerArray => "Integer[]",
            Self::LongArray => "Long[]",
            Self::StringArray => "String[]",
        }
    }

    /// Whether this is one of the array tags
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(
            self,
            Self::IntegerArray | Self::LongArray | Self::StringArray
        )
    }
}

impl core::fmt::Display for LogicalType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        assert_eq!(LogicalType::parse("Char"), Some(LogicalType::Char));
        assert_eq!(LogicalType::parse("Character"), Some(LogicalType::Char));
        assert_eq!(LogicalType::parse("byte[]"), Some(LogicalType::Bytes));
        assert_eq!(
            LogicalType::parse("[Ljava.lang.Integer;"),
            Some(LogicalType::IntegerArray)
        );
        assert_eq!(LogicalType::parse("IntArray"), Some(LogicalType::IntegerArray));
        assert_eq!(LogicalType::parse("LongArray"), Some(LogicalType::LongArray));
        assert_eq!(
            LogicalType::parse("[Ljava.lang.String;"),
            Some(LogicalType::StringArray)
        );
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(LogicalType::parse("Money"), None);
        assert_eq!(LogicalType::parse(""), None);
        assert_eq!(LogicalType::parse("uuid"), None);
    }

    #[test]
    fn test_tag_round_trip() {
        for ty in LogicalType::ALL {
            assert_eq!(LogicalType::parse(ty.tag()), Some(ty), "{ty:?}");
        }
    }

    #[test]
    fn test_is_array() {
        assert!(LogicalType::StringArray.is_array());
        assert!(!LogicalType::String.is_array());
    }
}
