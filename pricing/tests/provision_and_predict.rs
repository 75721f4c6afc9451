use std::{fs, num::NonZeroUsize, path::Path};

use house_pricing::{
    Feature, FeatureRecord, FormState, Origin, Predictor, ProvisionConfig, Provisioner,
    form::Focus,
};
use tempfile::tempdir;

const SEED: u64 = 2024;

fn reference_record() -> FeatureRecord {
    FeatureRecord {
        bedrooms: 3,
        bathrooms: 2.0,
        sqft_living: 1500,
        sqft_lot: 5000,
        floors: 1.0,
        waterfront: false,
        view: 0,
        grade: 7,
        yr_built: 2000,
    }
}

fn provision(path: &Path) -> house_pricing::Provisioned {
    let cfg = ProvisionConfig::new(path, NonZeroUsize::new(100).unwrap(), Some(SEED));
    Provisioner::new(cfg).provision().unwrap()
}

#[test]
fn seeded_model_predicts_reproducibly_across_runs() {
    let a = tempdir().unwrap();
    let b = tempdir().unwrap();

    let first = provision(&a.path().join("model.json"));
    let second = provision(&b.path().join("model.json"));
    assert_eq!(first.origin, Origin::Created);
    assert_eq!(second.origin, Origin::Created);

    let p1 = first.model.predict(&reference_record()).unwrap();
    let p2 = second.model.predict(&reference_record()).unwrap();
    assert_eq!(p1, p2);

    // A fresh process would load the artifact rather than retrain.
    let reloaded = provision(&a.path().join("model.json"));
    assert_eq!(reloaded.origin, Origin::Loaded);
    assert_eq!(reloaded.model.predict(&reference_record()).unwrap(), p1);
}

#[test]
fn provisioning_twice_leaves_artifact_bytes_alone() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("house_price_model.json");

    provision(&path);
    let before = fs::read(&path).unwrap();
    let modified = fs::metadata(&path).unwrap().modified().unwrap();

    let loaded = provision(&path);
    assert_eq!(loaded.origin, Origin::Loaded);
    assert_eq!(fs::read(&path).unwrap(), before);
    assert_eq!(fs::metadata(&path).unwrap().modified().unwrap(), modified);
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn default_form_submits_one_idempotent_estimate() {
    let dir = tempdir().unwrap();
    let provisioned = provision(&dir.path().join("model.json"));
    let predictor = Predictor::new(provisioned.model);

    let mut form = FormState::new();
    assert!(form.estimate().is_none());

    let first = form.submit(&predictor).unwrap().clone();
    assert!(first.formatted.starts_with("Rp "));
    assert_eq!(form.estimate(), Some(&first));

    let second = form.submit(&predictor).unwrap().clone();
    assert_eq!(second, first);
}

#[test]
fn changing_an_input_clears_the_estimate() {
    let dir = tempdir().unwrap();
    let provisioned = provision(&dir.path().join("model.json"));
    let predictor = Predictor::new(provisioned.model);

    let mut form = FormState::new();
    form.submit(&predictor).unwrap();
    assert!(form.estimate().is_some());

    while form.focus() != Focus::Field(Feature::Grade) {
        form.focus_next();
    }
    form.increment();
    assert!(form.estimate().is_none());

    // Pressing the button again brings a new estimate back.
    form.submit(&predictor).unwrap();
    assert!(form.estimate().is_some());
}

#[test]
fn form_record_matches_model_input_order() {
    let form = FormState::new();
    assert_eq!(form.record(), reference_record());
}
