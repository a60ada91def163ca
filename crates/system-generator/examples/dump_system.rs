//! Dump a single star system as JSON
//!
//! Usage: cargo run -p system-generator --example dump_system [seed]

use stellar::solar_analog;
use system_generator::generate_star_system;

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(1_662_642_772_940);

    let sun = solar_analog();
    match generate_star_system(&sun, Some(seed)) {
        Ok(system) => match serde_json::to_string_pretty(&system) {
            Ok(json) => println!("{}", json),
            Err(err) => eprintln!("serialization failed: {}", err),
        },
        Err(err) => eprintln!("seed {}: {}", seed, err),
    }
}
