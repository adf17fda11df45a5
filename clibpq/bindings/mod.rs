// Copyright 2026 The libpq-rs Authors
// SPDX-License-Identifier: MIT
#![allow(clippy::all)]
#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(dead_code)]

cfg_if::cfg_if! {
    if #[cfg(use_bindgen)] {
        include!(concat!(env!("OUT_DIR"), "/libpq_bindings.rs"));
    } else {
        mod libpq_bindings;
        pub use libpq_bindings::*;
    }
}
