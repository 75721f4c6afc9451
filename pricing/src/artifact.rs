use std::{fs, path::Path};

use crate::{
    error::{PricingErr, Result},
    model::LinearModel,
};

/// Default location of the model artifact, relative to the working directory.
pub const DEFAULT_MODEL_PATH: &str = "house_price_model.json";

/// Writes `model` to `path` as JSON, replacing any existing file.
///
/// # Errors
/// Returns an error if the model can't be serialized or the file written.
pub fn save(path: &Path, model: &LinearModel) -> Result<()> {
    let json = serde_json::to_string_pretty(model).map_err(|source| PricingErr::Artifact {
        path: path.to_path_buf(),
        source,
    })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, json)?;
    Ok(())
}

/// Reads a model previously written by [`save`].
///
/// # Errors
/// Returns [`PricingErr::Io`] if the file can't be read and
/// [`PricingErr::Artifact`] if its contents aren't a valid model.
pub fn load(path: &Path) -> Result<LinearModel> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|source| PricingErr::Artifact {
        path: path.to_path_buf(),
        source,
    })
}
