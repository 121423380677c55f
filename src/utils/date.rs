use chrono::NaiveDate;
use crate::core::library::{LibraryError, LibraryResult};

pub const DATE_FMT: &str = "%Y-%m-%d";

// Parses yyyy-MM-dd with two-digit month and day, e.g. 1965-08-01.
pub fn parse_date(text: &str) -> LibraryResult<NaiveDate> {
    let well_formed = text.len() == 10 && text.bytes().enumerate().all(|(i, b)| {
        if i == 4 || i == 7 { b == b'-' } else { b.is_ascii_digit() }
    });
    if !well_formed {
        return Err(LibraryError::validation(
            format!("Text '{}' could not be parsed as a yyyy-MM-dd date", text).as_str(), None));
    }
    NaiveDate::parse_from_str(text, DATE_FMT).map_err(|err| LibraryError::validation(
        format!("Text '{}' could not be parsed: {}", text, err).as_str(), None))
}

pub fn format_date(date: &NaiveDate) -> String {
    format!("{}", date.format(DATE_FMT))
}

pub mod serializer {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde::de::Error;
    use crate::utils::date::{format_date, parse_date};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        format_date(date).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let str_date: String = Deserialize::deserialize(deserializer)?;
        parse_date(&str_date).map_err(D::Error::custom)
    }
}
