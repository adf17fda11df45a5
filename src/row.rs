// Copyright 2026 The libpq-rs Authors
// SPDX-License-Identifier: MIT

use std::fmt;

use serde::Serialize;
use serde_json::Map;
use serde_json::Number;
use serde_json::Value;

use crate::pq_defines::Oid;
use crate::pq_defines::PqResult;
use crate::result::Tuples;
use crate::type_conversion::FromText;

/// Everything known about one field of a row.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ColumnInfo<'a> {
    /// `None` for types this crate has no conversion for; see `raw_oid`.
    pub oid: Option<Oid>,
    pub raw_oid: u32,
    pub name: &'a str,
    /// `None` for SQL NULL.
    pub value: Option<&'a str>,
}

/// A single row borrowed from a [`Tuples`].
#[derive(Clone, Copy, Debug)]
pub struct Row<'a> {
    index: usize,
    tuples: &'a Tuples,
}

impl<'a> Row<'a> {
    pub(crate) fn new(index: usize, tuples: &'a Tuples) -> Row<'a> {
        Row { index, tuples }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn tuples(&self) -> &'a Tuples {
        self.tuples
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.tuples.num_fields()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn value(&self, column: usize) -> PqResult<&'a str> {
        self.tuples.value(self.index, column)
    }

    pub fn is_null(&self, column: usize) -> PqResult<bool> {
        self.tuples.is_null(self.index, column)
    }

    pub fn info(&self, column: usize) -> PqResult<ColumnInfo<'a>> {
        let raw_oid = self.tuples.raw_oid(column)?;
        let value = if self.is_null(column)? {
            None
        } else {
            Some(self.value(column)?)
        };

        Ok(ColumnInfo {
            oid: Oid::from_raw(raw_oid).ok(),
            raw_oid,
            name: self.tuples.name(column)?,
            value,
        })
    }

    /// Reads the column called `name`. Returns `None` if there is no such column or the field
    /// is NULL.
    pub fn get<T: FromText>(&self, name: &str) -> PqResult<Option<T>> {
        let column = match self.tuples.column_index(name) {
            Some(column) => column,
            None => return Ok(None),
        };
        if self.is_null(column)? {
            return Ok(None);
        }

        T::from_text(self.value(column)?).map(Some)
    }

    pub fn values(&self) -> impl Iterator<Item = PqResult<&'a str>> + 'a {
        let row = *self;
        (0..row.len()).map(move |column| row.value(column))
    }

    /// Converts the row to a JSON object keyed by column name.
    ///
    /// Booleans and numbers become JSON scalars; every other type stays a string.
    pub fn to_json(&self) -> PqResult<Value> {
        let mut object = Map::new();
        for column in 0..self.len() {
            let info = self.info(column)?;
            object.insert(info.name.to_string(), json_value(&info));
        }
        Ok(Value::Object(object))
    }
}

fn json_value(info: &ColumnInfo<'_>) -> Value {
    let text = match info.value {
        Some(text) => text,
        None => return Value::Null,
    };

    let converted = match info.oid {
        Some(Oid::Bool) => bool::from_text(text).ok().map(Value::Bool),
        Some(Oid::Int2 | Oid::Int4 | Oid::Int8) => {
            i64::from_text(text).ok().map(|n| Value::Number(n.into()))
        }
        Some(Oid::Float4 | Oid::Float8) => f64::from_text(text)
            .ok()
            .and_then(Number::from_f64)
            .map(Value::Number),
        _ => None,
    };

    converted.unwrap_or_else(|| Value::String(text.to_string()))
}

impl fmt::Display for Row<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for column in 0..self.len() {
            if column > 0 {
                f.write_str(", ")?;
            }
            match self.info(column) {
                Ok(info) => {
                    let oid = match info.oid {
                        Some(oid) => oid.to_string(),
                        None => info.raw_oid.to_string(),
                    };
                    match info.value {
                        Some(value) => write!(f, "({:?}, {}, {:?})", info.name, oid, value)?,
                        None => write!(f, "({:?}, {}, NULL)", info.name, oid)?,
                    }
                }
                Err(e) => write!(f, "(<{}>)", e)?,
            }
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use chrono::NaiveDateTime;
    use serde_json::json;

    use super::*;
    use crate::pq_defines::PqError;

    fn account() -> Tuples {
        Tuples::build(
            &[
                ("id", 20),
                ("login", 1043),
                ("admin", 16),
                ("score", 701),
                ("created", 1114),
                ("doc", 3802),
            ],
            &[
                vec![
                    Some("7"),
                    Some("chriseidhof"),
                    Some("t"),
                    Some("1.5"),
                    Some("2019-07-02 13:04:05.123"),
                    Some("{\"a\": 1}"),
                ],
                vec![Some("8"), None, Some("f"), None, None, None],
            ],
        )
    }

    #[test]
    fn test_info() {
        let tuples = account();
        let row = tuples.get(0).unwrap();
        assert_eq!(row.index(), 0);
        assert_eq!(row.len(), 6);
        assert_eq!(
            row.info(1).unwrap(),
            ColumnInfo {
                oid: Some(Oid::Varchar),
                raw_oid: 1043,
                name: "login",
                value: Some("chriseidhof"),
            }
        );

        let doc = row.info(5).unwrap();
        assert_eq!(doc.oid, None);
        assert_eq!(doc.raw_oid, 3802);

        let null = tuples.get(1).unwrap().info(1).unwrap();
        assert_eq!(null.value, None);
        assert!(matches!(
            row.info(6),
            Err(PqError::ColumnOutOfRange { column: 6, columns: 6 })
        ));
    }

    #[test]
    fn test_get_typed() {
        let tuples = account();
        let row = tuples.get(0).unwrap();
        assert_eq!(row.get::<i64>("id").unwrap(), Some(7));
        assert_eq!(row.get::<bool>("admin").unwrap(), Some(true));
        assert_eq!(row.get::<f64>("score").unwrap(), Some(1.5));
        let created = NaiveDate::from_ymd_opt(2019, 7, 2)
            .unwrap()
            .and_hms_milli_opt(13, 4, 5, 123)
            .unwrap();
        assert_eq!(row.get::<NaiveDateTime>("created").unwrap(), Some(created));
        assert_eq!(row.get::<i32>("missing").unwrap(), None);
        assert!(matches!(
            row.get::<bool>("login"),
            Err(PqError::ConversionFailed { oid: Oid::Bool, .. })
        ));

        let second = tuples.get(1).unwrap();
        assert_eq!(second.get::<String>("login").unwrap(), None);
        assert!(second.is_null(1).unwrap());
        assert!(!second.is_null(0).unwrap());
    }

    #[test]
    fn test_values() {
        let tuples = account();
        let values: Vec<&str> = tuples
            .get(1)
            .unwrap()
            .values()
            .collect::<PqResult<_>>()
            .unwrap();
        assert_eq!(values, vec!["8", "", "f", "", "", ""]);
    }

    #[test]
    fn test_to_json() {
        let tuples = account();
        assert_eq!(
            tuples.get(0).unwrap().to_json().unwrap(),
            json!({
                "id": 7,
                "login": "chriseidhof",
                "admin": true,
                "score": 1.5,
                "created": "2019-07-02 13:04:05.123",
                "doc": "{\"a\": 1}"
            })
        );
        assert_eq!(
            tuples.get(1).unwrap().to_json().unwrap(),
            json!({
                "id": 8,
                "login": null,
                "admin": false,
                "score": null,
                "created": null,
                "doc": null
            })
        );
    }

    #[test]
    fn test_to_json_keeps_unparseable_numbers_as_text() {
        let tuples = Tuples::build(&[("ratio", 701)], &[vec![Some("NaN")]]);
        assert_eq!(
            tuples.get(0).unwrap().to_json().unwrap(),
            json!({ "ratio": "NaN" })
        );
    }

    #[test]
    fn test_display() {
        let tuples = Tuples::build(
            &[("id", 23), ("doc", 3802), ("note", 25)],
            &[vec![Some("1"), Some("{}"), None]],
        );
        assert_eq!(
            tuples.get(0).unwrap().to_string(),
            r#"[("id", int4, "1"), ("doc", 3802, "{}"), ("note", text, NULL)]"#
        );
    }
}
