use anyhow::{Context, Result};
use efm_core::SymbolTable;
use serde::{Deserialize, Serialize};
use std::fs;
use tracing::info;

#[derive(Serialize, Deserialize)]
pub struct TableEntry {
    pub value: u8,
    pub code: String,
    pub bits: String,
}

/// Render the ECMA-130 translation table as JSON-friendly entries
pub fn entries() -> Vec<TableEntry> {
    let table = SymbolTable::ecma130();
    (0..=255u8)
        .map(|value| {
            let code = table.code_for(value);
            TableEntry {
                value,
                code: format!("{:#06x}", code),
                bits: format!("{:014b}", code),
            }
        })
        .collect()
}

pub fn execute(output: Option<&str>) -> Result<()> {
    let entries = entries();

    if let Some(output_path) = output {
        let json = serde_json::to_string_pretty(&entries)
            .with_context(|| "Failed to serialize translation table")?;

        fs::write(output_path, json)
            .with_context(|| format!("Failed to write output file: {}", output_path))?;

        info!("Translation table written to: {}", output_path);
    } else {
        for entry in &entries {
            println!("{:>3}  {}  {}", entry.value, entry.code, entry.bits);
        }
    }

    Ok(())
}
