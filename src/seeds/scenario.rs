//! Seeding scenario trait.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::builder::SeedsBuilder;
use super::dumps::{load_seeds_result, save_seeds_result};
use super::plan::SeedsPlan;
use super::result::SeedsResult;
use crate::error::ClientError;

/// A named seeding plan whose result is saved under the scenario name.
#[async_trait]
pub trait SeedsScenario: Send + Sync {
    fn plan(&self) -> SeedsPlan;

    /// Name the result is saved under.
    fn scenario(&self) -> &'static str;

    fn save(&self, result: &SeedsResult, dumps_dir: &Path) -> Result<PathBuf, ClientError> {
        save_seeds_result(result, self.scenario(), dumps_dir)
    }

    fn load(&self, dumps_dir: &Path) -> Result<SeedsResult, ClientError> {
        load_seeds_result(self.scenario(), dumps_dir)
    }

    /// Generate the plan's data with `builder` and save it.
    async fn build(
        &self,
        builder: &SeedsBuilder,
        dumps_dir: &Path,
    ) -> Result<SeedsResult, ClientError> {
        tracing::info!(scenario = self.scenario(), "Building seeds");

        let result = builder.build(&self.plan()).await?;
        self.save(&result, dumps_dir)?;
        Ok(result)
    }
}
