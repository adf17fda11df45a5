// Copyright 2026 The libpq-rs Authors
// SPDX-License-Identifier: MIT

//! Text-format conversion between Rust values and PostgreSQL types.

use chrono::DateTime;
use chrono::NaiveDateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::pq_defines::Oid;
use crate::pq_defines::PqError;
use crate::pq_defines::PqResult;

// Microseconds, the resolution of a PostgreSQL timestamp.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";
// %.f also accepts a missing fractional part.
const TIMESTAMP_PARSE_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// A value that can be bound to a query parameter.
pub trait Param {
    fn oid(&self) -> Oid;

    /// Text representation sent to the server, `None` for SQL NULL.
    fn to_text(&self) -> Option<String>;
}

/// A value that can be read back from a text-format result column.
pub trait FromText: Sized {
    const OID: Oid;

    fn from_text(text: &str) -> PqResult<Self>;
}

fn conversion_failed(text: &str, oid: Oid) -> PqError {
    PqError::ConversionFailed {
        value: text.to_string(),
        oid,
    }
}

macro_rules! numeric_param {
    ($ty:ty, $oid:expr) => {
        impl Param for $ty {
            fn oid(&self) -> Oid {
                $oid
            }

            fn to_text(&self) -> Option<String> {
                Some(self.to_string())
            }
        }

        impl FromText for $ty {
            const OID: Oid = $oid;

            fn from_text(text: &str) -> PqResult<Self> {
                text.parse::<$ty>()
                    .map_err(|_| conversion_failed(text, $oid))
            }
        }
    };
}

numeric_param!(i16, Oid::Int2);
numeric_param!(i32, Oid::Int4);
numeric_param!(i64, Oid::Int8);
numeric_param!(f32, Oid::Float4);
numeric_param!(f64, Oid::Float8);

impl Param for String {
    fn oid(&self) -> Oid {
        Oid::Varchar
    }

    fn to_text(&self) -> Option<String> {
        Some(self.clone())
    }
}

impl FromText for String {
    const OID: Oid = Oid::Varchar;

    fn from_text(text: &str) -> PqResult<Self> {
        Ok(text.to_string())
    }
}

impl Param for &str {
    fn oid(&self) -> Oid {
        Oid::Varchar
    }

    fn to_text(&self) -> Option<String> {
        Some(self.to_string())
    }
}

impl Param for bool {
    fn oid(&self) -> Oid {
        Oid::Bool
    }

    fn to_text(&self) -> Option<String> {
        Some(if *self { "t" } else { "f" }.to_string())
    }
}

impl FromText for bool {
    const OID: Oid = Oid::Bool;

    fn from_text(text: &str) -> PqResult<Self> {
        match text {
            "t" => Ok(true),
            "f" => Ok(false),
            _ => Err(conversion_failed(text, Oid::Bool)),
        }
    }
}

impl Param for NaiveDateTime {
    fn oid(&self) -> Oid {
        Oid::Timestamp
    }

    fn to_text(&self) -> Option<String> {
        Some(self.format(TIMESTAMP_FORMAT).to_string())
    }
}

impl FromText for NaiveDateTime {
    const OID: Oid = Oid::Timestamp;

    fn from_text(text: &str) -> PqResult<Self> {
        NaiveDateTime::parse_from_str(text, TIMESTAMP_PARSE_FORMAT)
            .map_err(|_| conversion_failed(text, Oid::Timestamp))
    }
}

/// Sent and read as a `timestamp` (without time zone) holding UTC wall-clock time.
impl Param for DateTime<Utc> {
    fn oid(&self) -> Oid {
        Oid::Timestamp
    }

    fn to_text(&self) -> Option<String> {
        self.naive_utc().to_text()
    }
}

impl FromText for DateTime<Utc> {
    const OID: Oid = Oid::Timestamp;

    fn from_text(text: &str) -> PqResult<Self> {
        NaiveDateTime::from_text(text).map(|naive| naive.and_utc())
    }
}

impl Param for Uuid {
    fn oid(&self) -> Oid {
        Oid::Uuid
    }

    fn to_text(&self) -> Option<String> {
        Some(self.hyphenated().to_string())
    }
}

impl FromText for Uuid {
    const OID: Oid = Oid::Uuid;

    fn from_text(text: &str) -> PqResult<Self> {
        Uuid::parse_str(text).map_err(|_| conversion_failed(text, Oid::Uuid))
    }
}

impl<T: Param + FromText> Param for Option<T> {
    fn oid(&self) -> Oid {
        T::OID
    }

    fn to_text(&self) -> Option<String> {
        self.as_ref().and_then(|value| value.to_text())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn test_bool() {
        assert_eq!(true.to_text().as_deref(), Some("t"));
        assert_eq!(false.to_text().as_deref(), Some("f"));
        assert!(bool::from_text("t").unwrap());
        assert!(!bool::from_text("f").unwrap());

        match bool::from_text("true") {
            Err(PqError::ConversionFailed { value, oid }) => {
                assert_eq!(value, "true");
                assert_eq!(oid, Oid::Bool);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_integers() {
        assert_eq!(42i32.oid(), Oid::Int4);
        assert_eq!((-7i32).to_text().as_deref(), Some("-7"));
        assert_eq!(i32::from_text("2147483647").unwrap(), i32::MAX);
        assert!(i32::from_text("2147483648").is_err());
        assert!(i16::from_text("abc").is_err());
        assert_eq!(i64::from_text("-9000000000").unwrap(), -9_000_000_000);
        assert_eq!(<i64 as FromText>::OID, Oid::Int8);
    }

    #[test]
    fn test_floats() {
        assert_eq!(f64::from_text("1.5").unwrap(), 1.5);
        assert!(f64::from_text("NaN").unwrap().is_nan());
        assert_eq!(0.25f32.oid(), Oid::Float4);
    }

    #[test]
    fn test_strings() {
        assert_eq!("chriseidhof".oid(), Oid::Varchar);
        assert_eq!(String::from("x").to_text().as_deref(), Some("x"));
        assert_eq!(String::from_text("").unwrap(), "");
    }

    #[test]
    fn test_timestamp_format() {
        let ts = NaiveDate::from_ymd_opt(2019, 7, 2)
            .unwrap()
            .and_hms_milli_opt(13, 4, 5, 67)
            .unwrap();
        assert_eq!(ts.to_text().as_deref(), Some("2019-07-02 13:04:05.067000"));
        assert_eq!(ts.and_utc().oid(), Oid::Timestamp);
    }

    #[test]
    fn test_timestamp_keeps_microseconds() {
        let ts = NaiveDate::from_ymd_opt(2019, 7, 2)
            .unwrap()
            .and_hms_micro_opt(13, 4, 5, 123456)
            .unwrap();
        let text = ts.to_text().unwrap();
        assert_eq!(text, "2019-07-02 13:04:05.123456");
        assert_eq!(NaiveDateTime::from_text(&text).unwrap(), ts);

        let utc = ts.and_utc();
        assert_eq!(DateTime::<Utc>::from_text(&utc.to_text().unwrap()).unwrap(), utc);
    }

    #[test]
    fn test_timestamp_parse() {
        let whole = NaiveDateTime::from_text("2019-07-02 13:04:05").unwrap();
        assert_eq!(whole.to_string(), "2019-07-02 13:04:05");

        let micros = NaiveDateTime::from_text("2019-07-02 13:04:05.123456").unwrap();
        assert_eq!(micros.and_utc().timestamp_subsec_micros(), 123456);

        let utc = DateTime::<Utc>::from_text("2019-07-02 13:04:05.5").unwrap();
        assert_eq!(utc.timestamp_subsec_millis(), 500);

        assert!(NaiveDateTime::from_text("yesterday").is_err());
    }

    #[test]
    fn test_uuid() {
        let text = "a0eebc99-9c0b-4ef8-bb6d-6bb9bd380a11";
        let uuid = Uuid::from_text(text).unwrap();
        assert_eq!(uuid.to_text().as_deref(), Some(text));
        assert_eq!(
            Uuid::from_text("A0EEBC99-9C0B-4EF8-BB6D-6BB9BD380A11").unwrap(),
            uuid
        );
        assert!(Uuid::from_text("not-a-uuid").is_err());
    }

    #[test]
    fn test_option_sends_null() {
        let missing: Option<i32> = None;
        assert_eq!(missing.oid(), Oid::Int4);
        assert_eq!(missing.to_text(), None);
        assert_eq!(Some(5i32).to_text().as_deref(), Some("5"));
    }
}
