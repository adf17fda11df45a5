// Copyright 2026 The libpq-rs Authors
// SPDX-License-Identifier: MIT

use std::ffi::CStr;
use std::ffi::CString;
use std::fmt;
use std::ptr::NonNull;

use libc::c_int;

use crate::pq_defines::Oid;
use crate::pq_defines::PqError;
use crate::pq_defines::PqResult;
use crate::row::Row;

/// The outcome of [`Connection::execute`](crate::Connection::execute).
#[derive(Debug)]
pub enum QueryResult {
    /// The command returned rows.
    Tuples(Tuples),
    /// The command completed without returning rows.
    Ok,
}

impl QueryResult {
    pub fn tuples(&self) -> Option<&Tuples> {
        match self {
            QueryResult::Tuples(tuples) => Some(tuples),
            QueryResult::Ok => None,
        }
    }

    pub fn into_tuples(self) -> Option<Tuples> {
        match self {
            QueryResult::Tuples(tuples) => Some(tuples),
            QueryResult::Ok => None,
        }
    }
}

/// Rows returned by a query. Owns the underlying `PGresult`.
#[derive(Debug)]
pub struct Tuples {
    result: NonNull<clibpq::PGresult>,
}

// SAFETY: a PGresult is never modified after libpq hands it out, and libpq does not tie it to
// the thread or connection that produced it.
unsafe impl Send for Tuples {}
unsafe impl Sync for Tuples {}

impl Tuples {
    /// Takes ownership of `result`, which must have status `PGRES_TUPLES_OK`.
    pub(crate) fn new(result: NonNull<clibpq::PGresult>) -> Tuples {
        Tuples { result }
    }

    fn as_ptr(&self) -> *const clibpq::PGresult {
        self.result.as_ptr()
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        // SAFETY: the result pointer is valid until drop.
        unsafe { clibpq::PQntuples(self.as_ptr()) as usize }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of columns.
    pub fn num_fields(&self) -> usize {
        // SAFETY: the result pointer is valid until drop.
        unsafe { clibpq::PQnfields(self.as_ptr()) as usize }
    }

    fn check_column(&self, column: usize) -> PqResult<c_int> {
        let columns = self.num_fields();
        if column >= columns {
            return Err(PqError::ColumnOutOfRange { column, columns });
        }
        Ok(column as c_int)
    }

    fn check_row(&self, row: usize) -> PqResult<c_int> {
        let rows = self.len();
        if row >= rows {
            return Err(PqError::RowOutOfRange { row, rows });
        }
        Ok(row as c_int)
    }

    /// Type OID of `column` as reported by the server.
    pub fn raw_oid(&self, column: usize) -> PqResult<u32> {
        let column = self.check_column(column)?;
        // SAFETY: column is in range.
        Ok(unsafe { clibpq::PQftype(self.as_ptr(), column) })
    }

    pub fn oid(&self, column: usize) -> PqResult<Oid> {
        Oid::from_raw(self.raw_oid(column)?)
    }

    pub fn name(&self, column: usize) -> PqResult<&str> {
        let column = self.check_column(column)?;
        // SAFETY: column is in range, so PQfname returns a string owned by the result.
        let name = unsafe { CStr::from_ptr(clibpq::PQfname(self.as_ptr(), column)) };
        Ok(name.to_str()?)
    }

    /// Text value of a field. NULL fields read as the empty string; see [`Tuples::is_null`].
    pub fn value(&self, row: usize, column: usize) -> PqResult<&str> {
        let row = self.check_row(row)?;
        let column = self.check_column(column)?;
        // SAFETY: both indexes are in range; the value lives as long as the result.
        let value = unsafe { CStr::from_ptr(clibpq::PQgetvalue(self.as_ptr(), row, column)) };
        Ok(value.to_str()?)
    }

    pub fn is_null(&self, row: usize, column: usize) -> PqResult<bool> {
        let row = self.check_row(row)?;
        let column = self.check_column(column)?;
        // SAFETY: both indexes are in range.
        Ok(unsafe { clibpq::PQgetisnull(self.as_ptr(), row, column) } == 1)
    }

    /// Looks a column up by name, following the server's identifier case rules.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        let name = CString::new(name).ok()?;
        // SAFETY: name is a valid C string for the duration of the call.
        let index = unsafe { clibpq::PQfnumber(self.as_ptr(), name.as_ptr()) };
        usize::try_from(index).ok()
    }

    pub fn column_names(&self) -> PqResult<Vec<&str>> {
        (0..self.num_fields()).map(|c| self.name(c)).collect()
    }

    pub fn get(&self, row: usize) -> Option<Row<'_>> {
        (row < self.len()).then(|| Row::new(row, self))
    }

    pub fn iter(&self) -> Rows<'_> {
        Rows {
            tuples: self,
            next: 0,
            end: self.len(),
        }
    }
}

#[cfg(test)]
impl Tuples {
    /// Builds a text-format result without a server. `None` values are stored as NULL.
    pub(crate) fn build(columns: &[(&str, u32)], rows: &[Vec<Option<&str>>]) -> Tuples {
        let names: Vec<CString> = columns
            .iter()
            .map(|(name, _)| CString::new(*name).unwrap())
            .collect();
        let mut attrs: Vec<clibpq::PGresAttDesc> = columns
            .iter()
            .zip(&names)
            .map(|((_, oid), name)| clibpq::PGresAttDesc {
                name: name.as_ptr() as *mut _,
                typid: *oid,
                typlen: -1,
                atttypmod: -1,
                ..Default::default()
            })
            .collect();

        // SAFETY: a null connection is allowed; the attribute names and values are copied into
        // the result before this function returns.
        unsafe {
            let result =
                clibpq::PQmakeEmptyPGresult(std::ptr::null_mut(), clibpq::PGRES_TUPLES_OK);
            let result = NonNull::new(result).expect("PQmakeEmptyPGresult failed");
            let tuples = Tuples::new(result);
            let set = clibpq::PQsetResultAttrs(
                result.as_ptr(),
                attrs.len() as c_int,
                attrs.as_mut_ptr(),
            );
            assert_eq!(set, 1);
            for (row, values) in rows.iter().enumerate() {
                for (column, value) in values.iter().enumerate() {
                    let stored = match value {
                        Some(value) => {
                            let mut bytes = value.as_bytes().to_vec();
                            clibpq::PQsetvalue(
                                result.as_ptr(),
                                row as c_int,
                                column as c_int,
                                bytes.as_mut_ptr().cast(),
                                bytes.len() as c_int,
                            )
                        }
                        None => clibpq::PQsetvalue(
                            result.as_ptr(),
                            row as c_int,
                            column as c_int,
                            std::ptr::null_mut(),
                            -1,
                        ),
                    };
                    assert_eq!(stored, 1);
                }
            }
            tuples
        }
    }
}

impl Drop for Tuples {
    fn drop(&mut self) {
        // SAFETY: the result is owned and cleared exactly once.
        unsafe { clibpq::PQclear(self.result.as_ptr()) }
    }
}

impl<'a> IntoIterator for &'a Tuples {
    type Item = Row<'a>;
    type IntoIter = Rows<'a>;

    fn into_iter(self) -> Rows<'a> {
        self.iter()
    }
}

impl fmt::Display for Tuples {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.num_fields() == 1 {
            return match self.get(0) {
                Some(row) => write!(f, "{}", row),
                None => f.write_str("[]"),
            };
        }

        f.write_str("[")?;
        for (i, row) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", row)?;
        }
        f.write_str("]")
    }
}

pub struct Rows<'a> {
    tuples: &'a Tuples,
    next: usize,
    end: usize,
}

impl<'a> Iterator for Rows<'a> {
    type Item = Row<'a>;

    fn next(&mut self) -> Option<Row<'a>> {
        if self.next >= self.end {
            return None;
        }
        let row = Row::new(self.next, self.tuples);
        self.next += 1;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Rows<'_> {}
