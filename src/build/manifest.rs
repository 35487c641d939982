use serde::Deserialize;

use crate::error::{BuildError, Result};
use crate::scoring::{is_valid_boost, BoostTable, DEFAULT_BOOST, FEATURED_CATEGORY};

#[derive(Deserialize, Clone, Debug)]
pub struct InputManifest {
    pub version: u32,
    pub documents: Vec<String>,
    #[serde(default)]
    pub ranking: Option<RankingConfig>,
}

/// Which category gets boosted, and by how much.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct RankingConfig {
    pub featured_category: String,
    pub boost: f64,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            featured_category: FEATURED_CATEGORY.to_string(),
            boost: DEFAULT_BOOST,
        }
    }
}

impl RankingConfig {
    pub fn boost_table(&self) -> BoostTable {
        BoostTable::featured(self.featured_category.clone(), self.boost)
    }
}

/// Command-line overrides. `None` means "use the manifest".
#[derive(Clone, Debug, Default)]
pub struct RankingOverrides {
    pub featured_category: Option<String>,
    pub boost: Option<f64>,
}

impl RankingOverrides {
    /// Layer overrides over the manifest's ranking over the defaults.
    pub fn resolve(&self, manifest: &InputManifest) -> Result<RankingConfig> {
        let base = manifest.ranking.clone().unwrap_or_default();
        let config = RankingConfig {
            featured_category: self
                .featured_category
                .clone()
                .unwrap_or(base.featured_category),
            boost: self.boost.unwrap_or(base.boost),
        };
        if config.featured_category.is_empty() {
            return Err(BuildError::EmptyFeaturedCategory);
        }
        if !is_valid_boost(config.boost) {
            return Err(BuildError::InvalidBoost(config.boost));
        }
        Ok(config)
    }
}
