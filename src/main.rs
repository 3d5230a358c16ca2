use std::path::Path;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use bandpower_golden::config::Config;
use bandpower_golden::error::GoldenError;
use bandpower_golden::golden::GoldenVectorSet;

fn main() -> Result<(), GoldenError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let ini = Path::new("golden.ini");
    let config = if ini.exists() {
        info!("loading configuration from {}", ini.display());
        Config::from_ini(ini)?
    } else {
        Config::default()
    };

    let mut rng = StdRng::seed_from_u64(config.seed);
    let set = GoldenVectorSet::generate(&config, &mut rng)?;
    info!(
        "generated {} taps, {} samples, band power {:.6}",
        set.coeffs.len(),
        set.samples.len(),
        set.power
    );

    set.write_to(Path::new("."))?;
    info!("wrote coeffs.txt, samples.txt, golden.txt");

    Ok(())
}
