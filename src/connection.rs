// Copyright 2026 The libpq-rs Authors
// SPDX-License-Identifier: MIT

use std::ffi::CStr;
use std::ffi::CString;
use std::ptr;
use std::ptr::NonNull;

use libc::c_char;
use libc::c_int;
use log::debug;
use log::error;
use log::warn;

use crate::config::ConnectionConfig;
use crate::pq_defines::ConnectionStatus;
use crate::pq_defines::ExecStatus;
use crate::pq_defines::PqError;
use crate::pq_defines::PqResult;
use crate::pq_defines::MAX_QUERY_PARAMS;
use crate::result::QueryResult;
use crate::result::Tuples;
use crate::type_conversion::Param;

/// A blocking connection to a PostgreSQL server.
pub struct Connection {
    conn: Option<NonNull<clibpq::PGconn>>,
}

// SAFETY: libpq allows a connection to move between threads as long as it is not used from two
// threads at once, which `&mut`/`!Sync` guarantees.
unsafe impl Send for Connection {}

/// Copies a libpq-owned message, trimming the trailing newline libpq appends.
fn message_from_ptr(ptr: *const c_char) -> String {
    if ptr.is_null() {
        return String::new();
    }
    // SAFETY: libpq returns NUL-terminated strings that live at least as long as their owner.
    let message = unsafe { CStr::from_ptr(ptr) };
    message.to_string_lossy().trim_end().to_string()
}

impl Connection {
    /// Opens a connection described by a conninfo string or a `postgresql://` URI.
    pub fn connect(conninfo: &str) -> PqResult<Connection> {
        let conninfo = CString::new(conninfo)?;

        // SAFETY: conninfo is a valid C string for the duration of the call.
        let conn = unsafe { clibpq::PQconnectdb(conninfo.as_ptr()) };
        let conn = NonNull::new(conn)
            .ok_or_else(|| PqError::ConnectionFailed("out of memory".to_string()))?;

        // SAFETY: conn was just returned by PQconnectdb and is non-null.
        let status = unsafe { clibpq::PQstatus(conn.as_ptr()) };
        if status != clibpq::CONNECTION_OK {
            // SAFETY: the error message is read before the connection is finished.
            let message = message_from_ptr(unsafe { clibpq::PQerrorMessage(conn.as_ptr()) });
            // SAFETY: a failed connection still has to be freed, and is not used afterwards.
            unsafe { clibpq::PQfinish(conn.as_ptr()) };
            error!("connection failed: {}", message);
            return Err(PqError::ConnectionFailed(message));
        }

        let connection = Connection { conn: Some(conn) };
        debug!(
            "connected, server version {}",
            connection.server_version().unwrap_or_default()
        );
        Ok(connection)
    }

    pub fn from_config(config: &ConnectionConfig) -> PqResult<Connection> {
        Connection::connect(&config.to_conninfo()?)
    }

    fn raw(&self) -> PqResult<*mut clibpq::PGconn> {
        self.conn
            .map(NonNull::as_ptr)
            .ok_or(PqError::ConnectionClosed)
    }

    pub fn is_closed(&self) -> bool {
        self.conn.is_none()
    }

    pub fn status(&self) -> PqResult<ConnectionStatus> {
        let conn = self.raw()?;
        // SAFETY: conn is open.
        Ok(unsafe { clibpq::PQstatus(conn) }.into())
    }

    /// Most recent error message reported on this connection.
    pub fn error_message(&self) -> PqResult<String> {
        let conn = self.raw()?;
        // SAFETY: conn is open.
        Ok(message_from_ptr(unsafe { clibpq::PQerrorMessage(conn) }))
    }

    /// Server version as an integer, e.g. 160002 for 16.2.
    pub fn server_version(&self) -> PqResult<i32> {
        let conn = self.raw()?;
        // SAFETY: conn is open.
        Ok(unsafe { clibpq::PQserverVersion(conn) })
    }

    /// Quotes `identifier` for use as a table or column name in SQL text.
    pub fn escape_identifier(&self, identifier: &str) -> PqResult<String> {
        let conn = self.raw()?;
        let identifier = CString::new(identifier)?;

        // SAFETY: conn is open and identifier is valid for `len` bytes.
        let escaped = unsafe {
            clibpq::PQescapeIdentifier(
                conn,
                identifier.as_ptr(),
                identifier.as_bytes().len(),
            )
        };
        if escaped.is_null() {
            return Err(PqError::QueryFailed {
                status: ExecStatus(clibpq::PGRES_FATAL_ERROR),
                message: self.error_message()?,
            });
        }

        let result = message_from_ptr(escaped);
        // SAFETY: escaped was allocated by libpq and is freed exactly once.
        unsafe { clibpq::PQfreemem(escaped.cast()) };
        Ok(result)
    }

    /// Runs `sql` with text-format `params` bound to `$1`, `$2`, ...
    pub fn execute(&self, sql: &str, params: &[&dyn Param]) -> PqResult<QueryResult> {
        let conn = self.raw()?;
        if params.len() > MAX_QUERY_PARAMS {
            return Err(PqError::TooManyParameters(params.len()));
        }

        let sql = CString::new(sql)?;
        let types: Vec<clibpq::Oid> = params.iter().map(|p| p.oid().raw()).collect();
        let values = params
            .iter()
            .map(|p| p.to_text().map(CString::new).transpose())
            .collect::<Result<Vec<Option<CString>>, _>>()?;
        let pointers: Vec<*const c_char> = values
            .iter()
            .map(|v| v.as_ref().map_or(ptr::null(), |s| s.as_ptr()))
            .collect();

        debug!("execute {:?} with {} params", sql, params.len());

        // SAFETY: every pointer refers to memory owned by `sql`, `types` or `values`, all of
        // which outlive the call. Lengths and formats may be null for text parameters.
        let result = unsafe {
            clibpq::PQexecParams(
                conn,
                sql.as_ptr(),
                params.len() as c_int,
                types.as_ptr(),
                pointers.as_ptr(),
                ptr::null(),
                ptr::null(),
                0,
            )
        };

        let result = match NonNull::new(result) {
            Some(result) => result,
            None => {
                let message = self.error_message()?;
                error!("execute failed: {}", message);
                return Err(PqError::QueryFailed {
                    status: ExecStatus(clibpq::PGRES_FATAL_ERROR),
                    message,
                });
            }
        };

        // SAFETY: result is a valid, owned PGresult.
        let status = unsafe { clibpq::PQresultStatus(result.as_ptr()) };
        match status {
            clibpq::PGRES_COMMAND_OK => {
                // SAFETY: the result carries no rows and is not referenced again.
                unsafe { clibpq::PQclear(result.as_ptr()) };
                Ok(QueryResult::Ok)
            }
            clibpq::PGRES_TUPLES_OK => Ok(QueryResult::Tuples(Tuples::new(result))),
            _ => {
                // SAFETY: the message is copied out before the result is cleared, and the result
                // is not referenced after PQclear.
                let message =
                    message_from_ptr(unsafe { clibpq::PQresultErrorMessage(result.as_ptr()) });
                unsafe { clibpq::PQclear(result.as_ptr()) };
                let message = if message.is_empty() {
                    self.error_message()?
                } else {
                    message
                };
                warn!("query failed with {}: {}", ExecStatus(status), message);
                Err(PqError::QueryFailed {
                    status: ExecStatus(status),
                    message,
                })
            }
        }
    }

    /// Closes the connection. Calling this more than once has no effect.
    pub fn close(&mut self) {
        if let Some(conn) = self.conn.take() {
            debug!("closing connection");
            // SAFETY: conn is owned and finished exactly once.
            unsafe { clibpq::PQfinish(conn.as_ptr()) };
        }
    }
}

impl Drop for Connection {
    fn drop(&mut self) {
        self.close();
    }
}
