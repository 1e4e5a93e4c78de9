use shared_types::generate_api_types;
use std::fs;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let output_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("faq-api/web/api-types.d.ts"));

    let definitions = generate_api_types()?;
    let output = format!(
        "// Generated by `cargo run -p shared-types --bin generate_api_types`\n\n{}\n",
        definitions
    );

    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&output_path, output)?;
    println!("Generated TypeScript types in {}", output_path.display());

    Ok(())
}
