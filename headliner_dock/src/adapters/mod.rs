// Copyright 2026 the Headliner Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapters to integrate with other Headliner crates.
//!
//! Enabled via feature flags to keep the core small and `no_std` by default.

#[cfg(feature = "surface_tree_adapter")]
pub mod surface_tree;
