// Copyright 2026 The libpq-rs Authors
// SPDX-License-Identifier: MIT

//! A small, safe layer over the PostgreSQL client library.
//!
//! ```no_run
//! use libpq::Connection;
//!
//! let conn = Connection::connect("host=localhost dbname=postgres").unwrap();
//! let result = conn.execute("select $1::int4 + 1 as answer", &[&41i32]).unwrap();
//! let tuples = result.tuples().unwrap();
//! let answer: Option<i32> = tuples.get(0).unwrap().get("answer").unwrap();
//! assert_eq!(answer, Some(42));
//! ```

mod config;
mod connection;
mod pq_defines;
mod result;
mod row;
mod type_conversion;

pub use clibpq;

pub use config::ConnectionConfig;
pub use connection::Connection;
pub use pq_defines::*;
pub use result::QueryResult;
pub use result::Rows;
pub use result::Tuples;
pub use row::ColumnInfo;
pub use row::Row;
pub use type_conversion::FromText;
pub use type_conversion::Param;
