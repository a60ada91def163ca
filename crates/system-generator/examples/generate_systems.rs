//! Generate a batch of star systems as CSV, one row per planet
//!
//! Usage: cargo run -p system-generator --example generate_systems

use system_generator::generate_sampled_system;

fn main() {
    env_logger::init();

    let n_systems = 100;

    // CSV header
    println!(
        "seed,catalog_name,spectral,star_mass,planet_idx,sma_au,ecc,mass_earth,gas_giant,period_yr,eq_temp_k,zone"
    );

    for seed in 0..n_systems {
        let system = match generate_sampled_system(seed) {
            Ok(system) => system,
            Err(err) => {
                eprintln!("seed {}: {}", seed, err);
                continue;
            }
        };

        for (planet_idx, planet) in system.planets.iter().enumerate() {
            println!(
                "{},{},{},{:.3},{},{:.4},{:.4},{:.4},{},{:.3},{:.0},{:?}",
                system.metadata.seed,
                system.metadata.catalog_name,
                system.star.spectral_designation(),
                system.star.mass,
                planet_idx,
                planet.axis,
                planet.ecc,
                planet.mass_earth,
                planet.is_gas_giant,
                planet.orbital_period_years,
                planet.equilibrium_temp,
                planet.zone,
            );
        }
    }

    eprintln!("Generated {} systems", n_systems);
}
