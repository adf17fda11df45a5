// Copyright 2026 The libpq-rs Authors
// SPDX-License-Identifier: MIT

use std::ffi::CStr;
use std::ffi::NulError;
use std::fmt;
use std::str::Utf8Error;

use remain::sorted;
use serde::Serialize;
use thiserror::Error;

/// Largest parameter count the frontend/backend protocol can carry.
pub const MAX_QUERY_PARAMS: usize = 65535;

#[sorted]
#[derive(Error, Debug)]
pub enum PqError {
    #[error("column {column} out of range, result has {columns} columns")]
    ColumnOutOfRange { column: usize, columns: usize },
    #[error("connection is closed")]
    ConnectionClosed,
    #[error("connection failed: {0}")]
    ConnectionFailed(String),
    #[error("cannot convert {value:?} to {oid}")]
    ConversionFailed { value: String, oid: Oid },
    #[error("invalid connection config: {0}")]
    InvalidConfig(String),
    #[error("string contains an interior nul byte: {0}")]
    InvalidString(NulError),
    #[error("{status}: {message}")]
    QueryFailed {
        status: ExecStatus,
        message: String,
    },
    #[error("row {row} out of range, result has {rows} rows")]
    RowOutOfRange { row: usize, rows: usize },
    #[error("{0} parameters exceed the protocol limit of 65535")]
    TooManyParameters(usize),
    #[error("unknown type oid {0}")]
    UnknownOid(u32),
    #[error("value is not valid UTF-8: {0}")]
    Utf8(Utf8Error),
}

impl From<NulError> for PqError {
    fn from(e: NulError) -> PqError {
        PqError::InvalidString(e)
    }
}

impl From<Utf8Error> for PqError {
    fn from(e: Utf8Error) -> PqError {
        PqError::Utf8(e)
    }
}

pub type PqResult<T> = std::result::Result<T, PqError>;

/// Built-in type OIDs understood by the conversions in this crate.
///
/// Values are from `pg_type.dat`.
#[repr(u32)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Oid {
    Bool = 16,
    Int8 = 20,
    Int2 = 21,
    Int4 = 23,
    Text = 25,
    Float4 = 700,
    Float8 = 701,
    Varchar = 1043,
    Timestamp = 1114,
    Uuid = 2950,
}

impl Oid {
    pub fn from_raw(raw: u32) -> PqResult<Oid> {
        let oid = match raw {
            16 => Oid::Bool,
            20 => Oid::Int8,
            21 => Oid::Int2,
            23 => Oid::Int4,
            25 => Oid::Text,
            700 => Oid::Float4,
            701 => Oid::Float8,
            1043 => Oid::Varchar,
            1114 => Oid::Timestamp,
            2950 => Oid::Uuid,
            _ => return Err(PqError::UnknownOid(raw)),
        };

        Ok(oid)
    }

    pub fn raw(self) -> u32 {
        self as u32
    }

    pub fn name(self) -> &'static str {
        match self {
            Oid::Bool => "bool",
            Oid::Int8 => "int8",
            Oid::Int2 => "int2",
            Oid::Int4 => "int4",
            Oid::Text => "text",
            Oid::Float4 => "float4",
            Oid::Float8 => "float8",
            Oid::Varchar => "varchar",
            Oid::Timestamp => "timestamp",
            Oid::Uuid => "uuid",
        }
    }
}

impl fmt::Display for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of a command, mirroring `ExecStatusType`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ExecStatus(pub clibpq::ExecStatusType);

impl ExecStatus {
    pub fn is_ok(self) -> bool {
        matches!(self.0, clibpq::PGRES_COMMAND_OK | clibpq::PGRES_TUPLES_OK)
    }
}

impl fmt::Display for ExecStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // SAFETY: PQresStatus returns a pointer to a static string for any input, including
        // out-of-range values.
        let name = unsafe { CStr::from_ptr(clibpq::PQresStatus(self.0)) };
        write!(f, "{}", name.to_string_lossy())
    }
}

/// State of a connection, mirroring `ConnStatusType`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ConnectionStatus {
    Ok,
    Bad,
    /// One of the intermediate states of a non-blocking connect.
    InProgress(clibpq::ConnStatusType),
}

impl From<clibpq::ConnStatusType> for ConnectionStatus {
    fn from(status: clibpq::ConnStatusType) -> ConnectionStatus {
        match status {
            clibpq::CONNECTION_OK => ConnectionStatus::Ok,
            clibpq::CONNECTION_BAD => ConnectionStatus::Bad,
            other => ConnectionStatus::InProgress(other),
        }
    }
}
