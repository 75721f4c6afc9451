use anyhow::Result;
use house_pricing::{Origin, Predictor, ProvisionConfig, Provisioner};
use log::info;

mod app;
mod ui;

fn main() -> Result<()> {
    env_logger::init();

    let config = ProvisionConfig::from_env()?;
    let provisioned = Provisioner::new(config).provision()?;
    if provisioned.origin == Origin::Created {
        info!("model artifact created; coefficients are fitted on synthetic prices");
    }

    app::run::run(Predictor::new(provisioned.model))
}
