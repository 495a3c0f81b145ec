use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One purchase transaction line from the raw sales export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    /// Unique order identifier; raw exports may repeat it
    pub order_id: u64,
    /// Customer identifier; may be absent in dirty exports
    #[serde(with = "flexible_id")]
    pub customer_id: Option<i64>,
    /// Product identifier
    pub product_id: u64,
    /// Date the order was placed
    pub order_date: NaiveDate,
    /// Number of units ordered
    pub quantity: u32,
    /// Unit price
    pub price: f64,
}

/// Coerce a customer id field to an integer.
///
/// Spreadsheet exports sometimes format integer ids as floats ("3.0"), so
/// both representations are accepted. Anything else is a parse error.
pub fn parse_customer_id(text: &str) -> Result<i64, String> {
    if let Ok(id) = text.parse::<i64>() {
        return Ok(id);
    }
    match text.parse::<f64>() {
        Ok(value) if value.fract() == 0.0 => Ok(value as i64),
        _ => Err(format!("invalid customer id: {:?}", text)),
    }
}

/// Serde adapter for the optional, loosely-typed customer id column
pub(crate) mod flexible_id {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<i64>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(id) => serializer.serialize_i64(*id),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<i64>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(text) => super::parse_customer_id(text)
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}
