// Copyright 2026 The libpq-rs Authors
// SPDX-License-Identifier: MIT

//! Raw bindings to the PostgreSQL client library.
//!
//! The symbols re-exported here are exactly those of `libpq-fe.h` and `postgres_ext.h`; see
//! [`locate`] for how the build finds them.

mod bindings;
pub mod locate;

pub use bindings::*;

/// Include directory the build resolved for the libpq headers, if one was needed.
///
/// `None` when the compiler's default search path was used.
pub const INCLUDE_DIR: Option<&str> = option_env!("CLIBPQ_INCLUDE_DIR");

/// The header the bindings are generated from.
pub const SHIM_HEADER: &str = include_str!("include/shim.h");

#[cfg(test)]
mod tests {
    use std::ffi::CStr;

    use super::*;

    #[test]
    fn test_shim_has_include_guard() {
        let directives: Vec<&str> = SHIM_HEADER
            .lines()
            .map(str::trim)
            .filter(|line| line.starts_with('#'))
            .collect();

        assert_eq!(directives.first(), Some(&"#ifndef CLIBPQ_SHIM_H"));
        assert_eq!(directives.get(1), Some(&"#define CLIBPQ_SHIM_H"));
        assert_eq!(directives.last(), Some(&"#endif"));

        // Both headers live inside the guard.
        for header in locate::HEADERS {
            let include = format!("#include <{header}>");
            let position = directives.iter().position(|d| *d == include).unwrap();
            assert!(position > 1 && position < directives.len() - 1);
        }
    }

    #[test]
    fn test_constants_match_c_values() {
        assert_eq!(CONNECTION_OK, 0);
        assert_eq!(CONNECTION_BAD, 1);
        assert_eq!(PGRES_EMPTY_QUERY, 0);
        assert_eq!(PGRES_COMMAND_OK, 1);
        assert_eq!(PGRES_TUPLES_OK, 2);
        assert_eq!(PGRES_FATAL_ERROR, 7);
        assert_eq!(PG_DIAG_SQLSTATE, b'C');
        assert_eq!(PG_DIAG_MESSAGE_PRIMARY, b'M');
    }

    #[test]
    fn test_library_is_linked() {
        let version = unsafe { PQlibVersion() };
        assert!(version >= 90000, "unexpected libpq version {version}");

        let status = unsafe { CStr::from_ptr(PQresStatus(PGRES_TUPLES_OK)) };
        assert_eq!(status.to_str().unwrap(), "PGRES_TUPLES_OK");
    }

    #[test]
    fn test_copy_and_large_object_symbols() {
        let copy: [usize; 3] = [
            PQputCopyData as usize,
            PQputCopyEnd as usize,
            PQgetCopyData as usize,
        ];
        let large_objects: [usize; 5] = [
            lo_create as usize,
            lo_import as usize,
            lo_export as usize,
            lo_lseek64 as usize,
            lo_truncate as usize,
        ];
        for address in copy.iter().chain(large_objects.iter()) {
            assert_ne!(*address, 0);
        }
    }

    #[test]
    fn test_build_result_offline() {
        let mut name = *b"answer\0";
        let mut attrs = [PGresAttDesc {
            name: name.as_mut_ptr().cast(),
            typid: 23,
            typlen: 4,
            atttypmod: -1,
            ..Default::default()
        }];
        let mut value = *b"42";

        unsafe {
            let res = PQmakeEmptyPGresult(std::ptr::null_mut(), PGRES_TUPLES_OK);
            assert!(!res.is_null());
            assert_eq!(PQsetResultAttrs(res, 1, attrs.as_mut_ptr()), 1);
            assert_eq!(PQsetvalue(res, 0, 0, value.as_mut_ptr().cast(), 2), 1);
            // A length of -1 stores NULL.
            assert_eq!(PQsetvalue(res, 1, 0, std::ptr::null_mut(), -1), 1);

            let copy = PQcopyResult(res, PG_COPYRES_ATTRS as i32);
            assert!(!copy.is_null());
            assert_eq!(PQnfields(copy), 1);
            assert_eq!(PQntuples(copy), 0);
            PQclear(copy);

            assert_eq!(PQntuples(res), 2);
            assert_eq!(PQftype(res, 0), 23);
            assert_eq!(CStr::from_ptr(PQfname(res, 0)).to_str().unwrap(), "answer");
            assert_eq!(CStr::from_ptr(PQgetvalue(res, 0, 0)).to_str().unwrap(), "42");
            assert_eq!(PQgetisnull(res, 1, 0), 1);
            PQclear(res);
        }
    }
}
