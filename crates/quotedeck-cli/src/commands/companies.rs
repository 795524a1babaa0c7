use serde::Serialize;

use quotedeck_core::{CompanyCatalog, CompanyEntry};

use crate::error::CliError;

use super::CommandResult;

#[derive(Debug, Serialize)]
struct CompaniesData {
    companies: Vec<CompanyEntry>,
}

pub fn run() -> Result<CommandResult, CliError> {
    let catalog = CompanyCatalog::builtin();

    let table = render_entries(catalog.entries());
    let data = serde_json::to_value(CompaniesData {
        companies: catalog.entries().to_vec(),
    })?;

    Ok(CommandResult::new(data).with_table(table))
}

fn render_entries(entries: &[CompanyEntry]) -> Vec<String> {
    let width = entries
        .iter()
        .map(|entry| entry.name.len())
        .max()
        .unwrap_or(0);

    entries
        .iter()
        .map(|entry| {
            let name = entry.name.as_str();
            format!("{name:<width$}  {}", entry.symbol)
        })
        .collect()
}
