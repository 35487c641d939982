// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how items get their weights and their order.
//!
//! Category boosts decide the weight; the weight decides the bucket; a title
//! match only matters inside a bucket.

mod core;
pub mod ranking;

pub use self::core::*;
