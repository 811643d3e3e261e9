use chrono::Month;

/// Text the driver uses for positive infinity
pub const INFINITY_TEXT: &str = "infinity";
/// Text the driver uses for negative infinity
pub const NEGATIVE_INFINITY_TEXT: &str = "-infinity";

/// Year carried by every non-finite date
pub const PLACEHOLDER_YEAR: i32 = 1;
/// Month carried by every non-finite date
pub const PLACEHOLDER_MONTH: Month = Month::January;
/// Day carried by every non-finite date
pub const PLACEHOLDER_DAY: u32 = 1;

/// Runtime type tokens reported by [`crate::DriverValue::type_name`]
pub mod type_names {
    pub const NULL: &str = "null";
    pub const INT: &str = "i64";
    pub const FLOAT: &str = "f64";
    pub const BOOL: &str = "bool";
    pub const BYTES: &str = "bytes";
    pub const TEXT: &str = "text";
    pub const TIMESTAMP: &str = "timestamp";
}
