use crate::{ApiResponse, FaqInput, FaqRecord, ServerStatus};
use ts_rs::{ExportError, TS};

type Exporter = fn() -> Result<String, ExportError>;

/// Wire types consumed by the browser UI, in the order they are emitted.
const EXPORTERS: &[(&str, Exporter)] = &[
    ("FaqRecord", FaqRecord::export_to_string),
    ("FaqInput", FaqInput::export_to_string),
    ("ApiResponse", ApiResponse::<FaqRecord>::export_to_string),
    ("ServerStatus", ServerStatus::export_to_string),
];

pub fn api_type_names() -> impl Iterator<Item = &'static str> {
    EXPORTERS.iter().map(|(name, _)| *name)
}

/// Renders every wire type into one `.d.ts` body.
pub fn generate_api_types() -> Result<String, Box<dyn std::error::Error>> {
    let names: Vec<&str> = api_type_names().collect();
    generate_typescript_definitions(&names)
}

/// Renders the named wire types, separated by blank lines.
pub fn generate_typescript_definitions(
    type_names: &[&str],
) -> Result<String, Box<dyn std::error::Error>> {
    if type_names.is_empty() {
        return Err("No type names provided".into());
    }

    let mut blocks = Vec::with_capacity(type_names.len());
    for name in type_names {
        let (_, export) = EXPORTERS
            .iter()
            .find(|(known, _)| known == name)
            .ok_or_else(|| {
                let known: Vec<&str> = api_type_names().collect();
                format!("Unknown type: '{name}'. Available types: {}", known.join(", "))
            })?;

        let block = strip_preamble(&export()?);
        if !block.is_empty() {
            blocks.push(block);
        }
    }

    Ok(blocks.join("\n\n"))
}

/// Drops the per-file banner and imports ts-rs emits; all types land in one file.
pub fn strip_preamble(exported: &str) -> String {
    exported
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| {
            let trimmed = line.trim_start();
            !trimmed.starts_with("import type") && !trimmed.starts_with("// This file was generated")
        })
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}
