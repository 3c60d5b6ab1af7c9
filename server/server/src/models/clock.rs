use chrono::{Local, NaiveDate, NaiveDateTime, Timelike};

pub const SECOND_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const MINUTE_FORMAT: &str = "%Y-%m-%d %H:%M";

pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

pub fn today() -> NaiveDate {
    now().date()
}

/// Drops seconds and sub-second precision, used for check times.
pub fn truncate_to_minute(time: NaiveDateTime) -> NaiveDateTime {
    time.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(time)
}

/// `YYYY-MM-DD HH:MM:SS`, nullable.
pub mod optional_seconds {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::SECOND_FORMAT;

    pub fn serialize<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(time) => serializer.serialize_str(&time.format(SECOND_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|s| NaiveDateTime::parse_from_str(&s, SECOND_FORMAT))
            .transpose()
            .map_err(serde::de::Error::custom)
    }
}

/// `YYYY-MM-DD HH:MM`.
pub mod minutes {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::MINUTE_FORMAT;

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(MINUTE_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&s, MINUTE_FORMAT).map_err(serde::de::Error::custom)
    }
}
