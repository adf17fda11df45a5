// Copyright 2026 The libpq-rs Authors
// SPDX-License-Identifier: MIT

//! Resolution of the libpq header and library locations.
//!
//! This module is compiled twice: once into the library and once into `build.rs` via
//! `#[path]`. It must only depend on `std`.

use std::path::Path;
use std::path::PathBuf;

/// The two public headers of the client library, in inclusion order.
pub const HEADERS: [&str; 2] = ["libpq-fe.h", "postgres_ext.h"];

/// Homebrew installs libpq keg-only, so it never lands on the default search path. Apple
/// Silicon prefix first, then the Intel one.
pub const HOMEBREW_PREFIXES: [&str; 2] = ["/opt/homebrew/opt/libpq", "/usr/local/opt/libpq"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HeaderLocation {
    /// Directories given explicitly through `PQ_INCLUDE_DIR` / `PQ_LIB_DIR`.
    Override {
        include_dir: Option<PathBuf>,
        lib_dir: Option<PathBuf>,
    },
    /// Directories reported by `pkg-config --cflags --libs libpq`.
    PkgConfig {
        include_paths: Vec<PathBuf>,
        link_paths: Vec<PathBuf>,
    },
    /// Keg-only Homebrew install, headers under `<prefix>/include`.
    Homebrew { prefix: PathBuf },
    /// Compiler and linker default search paths.
    System,
}

impl HeaderLocation {
    pub fn include_dirs(&self) -> Vec<PathBuf> {
        match self {
            HeaderLocation::Override { include_dir, .. } => include_dir.iter().cloned().collect(),
            HeaderLocation::PkgConfig { include_paths, .. } => include_paths.clone(),
            HeaderLocation::Homebrew { prefix } => vec![prefix.join("include")],
            HeaderLocation::System => Vec::new(),
        }
    }

    pub fn lib_dirs(&self) -> Vec<PathBuf> {
        match self {
            HeaderLocation::Override { lib_dir, .. } => lib_dir.iter().cloned().collect(),
            HeaderLocation::PkgConfig { link_paths, .. } => link_paths.clone(),
            HeaderLocation::Homebrew { prefix } => vec![prefix.join("lib")],
            HeaderLocation::System => Vec::new(),
        }
    }

    /// Returns where each header in [`HEADERS`] is expected to be found.
    ///
    /// When no include directory is known the bare header names are returned; the compiler
    /// resolves them against its default search path.
    pub fn header_paths(&self) -> Vec<PathBuf> {
        let dirs = self.include_dirs();
        HEADERS
            .iter()
            .map(|header| match dirs.first() {
                Some(dir) => dir.join(header),
                None => PathBuf::from(header),
            })
            .collect()
    }

    /// Lists headers that cannot be found at the resolved location.
    ///
    /// Only locations with an explicit include directory can be checked ahead of time. For
    /// `System` (or an override without an include directory) this is always empty.
    pub fn missing_headers(&self, exists: impl Fn(&Path) -> bool) -> Vec<PathBuf> {
        let dirs = self.include_dirs();
        if dirs.is_empty() {
            return Vec::new();
        }

        HEADERS
            .iter()
            .filter(|header| !dirs.iter().any(|dir| exists(&dir.join(header))))
            .map(|header| dirs[0].join(header))
            .collect()
    }
}

/// Builds an override location from the raw environment values. Empty strings count as unset.
pub fn from_overrides(
    include_dir: Option<String>,
    lib_dir: Option<String>,
) -> Option<HeaderLocation> {
    let include_dir = include_dir.filter(|s| !s.is_empty()).map(PathBuf::from);
    let lib_dir = lib_dir.filter(|s| !s.is_empty()).map(PathBuf::from);

    if include_dir.is_none() && lib_dir.is_none() {
        return None;
    }

    Some(HeaderLocation::Override {
        include_dir,
        lib_dir,
    })
}

/// The fallback used when neither overrides nor pkg-config produced a location.
///
/// On macOS this is the first Homebrew keg whose `libpq-fe.h` exists, or the Apple Silicon
/// prefix when none does. Everywhere else the default search paths are used.
pub fn platform_default(target_os: &str, exists: impl Fn(&Path) -> bool) -> HeaderLocation {
    if target_os != "macos" {
        return HeaderLocation::System;
    }

    let prefix = HOMEBREW_PREFIXES
        .iter()
        .map(PathBuf::from)
        .find(|prefix| exists(&prefix.join("include").join(HEADERS[0])))
        .unwrap_or_else(|| PathBuf::from(HOMEBREW_PREFIXES[0]));

    HeaderLocation::Homebrew { prefix }
}

/// Picks the location the build uses: explicit overrides, then `probe` (pkg-config), then
/// [`platform_default`]. `probe` only runs when there are no overrides.
pub fn resolve(
    overrides: Option<HeaderLocation>,
    probe: impl FnOnce() -> Option<HeaderLocation>,
    target_os: &str,
    exists: impl Fn(&Path) -> bool,
) -> HeaderLocation {
    overrides
        .or_else(probe)
        .unwrap_or_else(|| platform_default(target_os, exists))
}

/// Name passed to `rustc-link-lib`. The MSVC import library keeps its `lib` prefix.
pub fn link_name(target_os: &str, target_env: &str) -> &'static str {
    if target_os == "windows" && target_env == "msvc" {
        "libpq"
    } else {
        "pq"
    }
}
