// Page emission demo for helium-config
//
// Prints the configuration page as the JSON the settings host consumes,
// plus a short summary of its toggles.
//
// Run with: cargo run --example emit_page

use helium_config::{page, toggles, validate};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("⌚ Helium Configuration Page\n");

    let fields = page::fields();
    validate(fields)?;
    println!(
        "✅ Page is structurally valid ({} top-level fields)\n",
        fields.len()
    );

    println!("📋 Toggles:");
    for toggle in toggles(fields) {
        println!(
            "  {} = {} ({})",
            toggle.message_key, toggle.default_value, toggle.label
        );
    }

    println!("\n📦 Wire JSON:");
    println!("{}", page::to_json_pretty()?);

    Ok(())
}
