// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Browser runtime.
//!
//! Only built with the `wasm` feature. The native side has no runtime of its
//! own: the CLI drives the controller through [`crate::headless`].

#[cfg(feature = "wasm")]
mod console;

#[cfg(feature = "wasm")]
pub mod wasm;
