use log::info;
use rand::{SeedableRng, rngs::StdRng};

use crate::{artifact, config::ProvisionConfig, dataset, error::Result, model::LinearModel};

/// How the provisioned model came to be.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// No artifact existed; a model was trained on synthetic data and persisted.
    Created,
    /// An existing artifact was loaded unchanged.
    Loaded,
}

/// A model ready for inference, together with where it came from.
#[derive(Debug, Clone)]
pub struct Provisioned {
    pub model: LinearModel,
    pub origin: Origin,
}

/// Makes sure a model artifact exists before anything asks for a prediction.
///
/// The existence check and the write are not guarded by a lock: two processes
/// starting against the same missing path will both train and the last write
/// wins.
pub struct Provisioner {
    config: ProvisionConfig,
}

impl Provisioner {
    pub fn new(config: ProvisionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProvisionConfig {
        &self.config
    }

    /// Loads the artifact at the configured path, or trains and persists one
    /// if it doesn't exist yet.
    ///
    /// # Errors
    /// Returns an error if the artifact is unreadable or malformed, or if
    /// training or persisting a new one fails.
    pub fn provision(&self) -> Result<Provisioned> {
        let path = self.config.path();

        if path.exists() {
            let model = artifact::load(path)?;
            info!("loaded model artifact from {}", path.display());
            return Ok(Provisioned {
                model,
                origin: Origin::Loaded,
            });
        }

        let mut rng = match self.config.seed() {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let rows = self.config.rows();
        let ds = dataset::generate(&mut rng, rows)?;
        let model = LinearModel::fit(&ds)?;
        artifact::save(path, &model)?;
        info!(
            "no artifact at {}, trained a new model on {rows} synthetic rows",
            path.display()
        );

        Ok(Provisioned {
            model,
            origin: Origin::Created,
        })
    }
}
