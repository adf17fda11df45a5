// Copyright 2026 The libpq-rs Authors
// SPDX-License-Identifier: MIT

use std::env;
use std::path::Path;
#[cfg(feature = "bindgen")]
use std::path::PathBuf;

#[path = "locate.rs"]
#[allow(dead_code)]
mod locate;

use locate::HeaderLocation;

fn env_tracked(s: &str) -> Option<String> {
    println!("cargo:rerun-if-env-changed={s}");
    env::var(s).ok()
}

fn target_env_tracked(s: &str) -> Option<String> {
    let target = env::var("TARGET").unwrap();
    env_tracked(&format!("{s}_{target}")).or_else(|| env_tracked(s))
}

fn probe_pkg_config(statik: bool) -> Option<HeaderLocation> {
    match pkg_config::Config::new()
        .statik(statik)
        .cargo_metadata(true)
        .probe("libpq")
    {
        Ok(library) => Some(HeaderLocation::PkgConfig {
            include_paths: library.include_paths,
            link_paths: library.link_paths,
        }),
        Err(e) => {
            println!("cargo:warning=pkg-config could not find libpq, falling back: {e}");
            None
        }
    }
}

fn emit_link_directives(location: &HeaderLocation, link_name: &str, statik: bool) {
    for dir in location.lib_dirs() {
        println!("cargo:rustc-link-search=native={}", dir.display());
    }

    let kind = if statik { "static" } else { "dylib" };
    println!("cargo:rustc-link-lib={kind}={link_name}");
}

#[cfg(feature = "bindgen")]
fn generate_bindings(location: &HeaderLocation, manifest_dir: &Path, out_dir: &Path) {
    let shim = manifest_dir.join("include").join("shim.h");

    bindgen::Builder::default()
        .header(shim.display().to_string())
        .clang_args(
            location
                .include_dirs()
                .iter()
                .map(|dir| format!("-I{}", dir.display())),
        )
        .allowlist_function("PQ.*|pg_.*|lo_.*")
        .allowlist_type("PG.*|PQ.*|pg.*|Conn.*|Exec.*|Postgres.*|Oid")
        .allowlist_var("PG_.*|PQ.*|LIBPQ_.*|InvalidOid|OID_MAX")
        .derive_default(true)
        .derive_debug(true)
        .prepend_enum_name(false)
        .generate_comments(false)
        .layout_tests(false)
        .generate()
        .expect("Unable to generate libpq bindings")
        .write_to_file(out_dir.join("libpq_bindings.rs"))
        .expect("Unable to write libpq bindings");

    println!("cargo:rustc-cfg=use_bindgen");
}

fn main() {
    let target_os = env::var("CARGO_CFG_TARGET_OS").unwrap();
    let target_env = env::var("CARGO_CFG_TARGET_ENV").unwrap_or_default();

    println!("cargo::rustc-check-cfg=cfg(use_bindgen)");
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=locate.rs");
    println!("cargo:rerun-if-changed=include/shim.h");

    let statik = target_env_tracked("PQ_LIB_STATIC").is_some();
    let link_name = locate::link_name(&target_os, &target_env);

    let location = locate::resolve(
        locate::from_overrides(
            target_env_tracked("PQ_INCLUDE_DIR"),
            target_env_tracked("PQ_LIB_DIR"),
        ),
        || probe_pkg_config(statik),
        &target_os,
        Path::exists,
    );
    // pkg-config emits its own link directives on success.
    if !matches!(location, HeaderLocation::PkgConfig { .. }) {
        emit_link_directives(&location, link_name, statik);
    }

    let missing = location.missing_headers(Path::exists);
    if !missing.is_empty() {
        let paths: Vec<String> = missing.iter().map(|p| p.display().to_string()).collect();
        panic!(
            "libpq headers not found: {} (set PQ_INCLUDE_DIR or install libpq)",
            paths.join(", ")
        );
    }

    // Forwarded to dependents as DEP_PQ_INCLUDE.
    if let Some(dir) = location.include_dirs().first() {
        println!("cargo:include={}", dir.display());
        println!("cargo:rustc-env=CLIBPQ_INCLUDE_DIR={}", dir.display());
    }

    #[cfg(feature = "bindgen")]
    {
        let manifest_dir = PathBuf::from(
            env::var_os("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR should always be set"),
        );
        let out_dir =
            PathBuf::from(env::var_os("OUT_DIR").expect("OUT_DIR should always be set"));
        generate_bindings(&location, &manifest_dir, &out_dir);
    }
}
