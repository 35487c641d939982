// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Category boosts: where item weights come from.
//!
//! A weight is a lookup, not a computation. The boost table maps category
//! labels to multipliers and falls back to `DEFAULT_WEIGHT` for anything it
//! doesn't know. The site ships with a single entry (the featured category),
//! so every item ends up with one of exactly two weights.
//!
//! # Constants
//!
//! | Name                | Value   | Meaning                                   |
//! |---------------------|---------|-------------------------------------------|
//! | `FEATURED_CATEGORY` | `qumat` | Quantum computing content, ranked first   |
//! | `DEFAULT_BOOST`     | 2.0     | Weight of featured items                  |
//! | `DEFAULT_WEIGHT`    | 1.0     | Weight of everything else                 |

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Category that receives the boost unless configured otherwise.
pub const FEATURED_CATEGORY: &str = "qumat";

/// Boost applied to the featured category.
pub const DEFAULT_BOOST: f64 = 2.0;

/// Weight of every category missing from the boost table.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Lookup table of per-category boost factors.
///
/// Category labels are compared exactly (no case folding): the labels come
/// from front matter the site controls, not from user input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoostTable {
    boosts: HashMap<String, f64>,
}

impl BoostTable {
    /// Table with a single boosted category.
    pub fn featured(category: impl Into<String>, boost: f64) -> Self {
        let mut boosts = HashMap::with_capacity(1);
        boosts.insert(category.into(), boost);
        Self { boosts }
    }

    /// Weight for an item in `category`.
    pub fn weight_for(&self, category: &str) -> f64 {
        self.boosts.get(category).copied().unwrap_or(DEFAULT_WEIGHT)
    }

    /// Whether `category` carries an explicit boost.
    pub fn is_boosted(&self, category: &str) -> bool {
        self.boosts.contains_key(category)
    }

    /// The boosted categories, sorted for stable display.
    pub fn categories(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.boosts.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for BoostTable {
    fn default() -> Self {
        Self::featured(FEATURED_CATEGORY, DEFAULT_BOOST)
    }
}

/// Check that a boost can be used for ranking.
///
/// Zero, negative, and non-finite boosts would either bury the featured
/// category or poison the ordering.
pub fn is_valid_boost(boost: f64) -> bool {
    boost.is_finite() && boost > 0.0
}
