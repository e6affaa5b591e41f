// Saved-settings resolution demo for helium-config
//
// Takes the host's saved dictionary as an optional JSON argument and prints
// the resolved watch settings. Run with RUST_LOG=debug to see the per-key
// decisions.
//
// Run with: cargo run --example resolve_settings
//       or: cargo run --example resolve_settings -- '{"MinuteOnOut": 1}'

use helium_config::{page, resolve, toggles};
use serde_json::{json, Map, Value};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let saved: Map<String, Value> = match std::env::args().nth(1) {
        Some(arg) => serde_json::from_str(&arg)?,
        None => {
            // No argument: pretend the user flipped every toggle and saved
            toggles(page::fields())
                .iter()
                .map(|toggle| (toggle.message_key.to_string(), json!(!toggle.default_value)))
                .collect()
        }
    };

    println!("📥 Saved dictionary:");
    println!("{}\n", serde_json::to_string_pretty(&saved)?);

    let settings = resolve(&saved)?;
    println!("⌚ Resolved settings:");
    println!("{}", serde_json::to_string_pretty(&settings)?);

    Ok(())
}
