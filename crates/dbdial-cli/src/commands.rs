//! Command implementations
//!
//! Each command writes its result to the given writer so the output can be
//! checked without a terminal.

use anyhow::{Context, Result, bail};
use dbdial_core::{ConnectionRecord, decode_config};
use dbdial_drivers::{default_registry, statement_builder};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::OutputFormat;

#[derive(Debug, Serialize)]
struct DsnEntry<'a> {
    name: &'a str,
    driver_name: &'static str,
    dsn: String,
}

#[derive(Debug, Serialize)]
struct CheckEntry<'a> {
    name: &'a str,
    driver: &'a str,
    timezone: String,
    max_open_conn: i32,
    max_idle_conn: i32,
    max_lifetime_ms: i64,
}

/// Load and verify a configuration file
pub fn load_records(path: &Path) -> Result<Vec<ConnectionRecord>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open configuration {}", path.display()))?;
    let records = decode_config(file)
        .with_context(|| format!("Invalid configuration {}", path.display()))?;
    tracing::info!(path = %path.display(), count = records.len(), "configuration loaded");
    Ok(records)
}

/// Print the driver name and DSN of every record, or only of `name`
pub fn dsn(
    out: &mut impl Write,
    config: &Path,
    name: Option<&str>,
    show_password: bool,
    format: OutputFormat,
) -> Result<()> {
    let records = load_records(config)?;
    let selected: Vec<_> = records
        .iter()
        .filter(|r| name.is_none_or(|n| r.name == n))
        .collect();

    if let Some(name) = name
        && selected.is_empty()
    {
        bail!("No database named [{}] in {}", name, config.display());
    }

    for record in selected {
        let driver = default_registry().get(&record.driver)?;
        let dsn = driver.connection_string(record);
        let entry = DsnEntry {
            name: &record.name,
            driver_name: driver.driver_name(),
            dsn: if show_password {
                dsn.to_string()
            } else {
                dsn.redacted()
            },
        };

        match format {
            OutputFormat::Human => {
                writeln!(out, "{}\t{}\t{}", entry.name, entry.driver_name, entry.dsn)?
            }
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(&entry)?)?,
        }
    }
    Ok(())
}

/// Rewrite a query template into the dialect-native form
pub fn rewrite(out: &mut impl Write, driver: &str, query: &str, format: OutputFormat) -> Result<()> {
    let builder = statement_builder(driver)?;
    let prepared = builder.prepare(query);

    match format {
        OutputFormat::Human => writeln!(out, "{}", prepared)?,
        OutputFormat::Json => writeln!(
            out,
            "{}",
            serde_json::json!({ "driver": driver, "query": prepared })
        )?,
    }
    Ok(())
}

/// Validate a configuration file and print each record's resolved zone
pub fn check(out: &mut impl Write, config: &Path, format: OutputFormat) -> Result<()> {
    let records = load_records(config)?;

    for record in &records {
        let entry = CheckEntry {
            name: &record.name,
            driver: &record.driver,
            timezone: record.location()?.to_string(),
            max_open_conn: record.max_open,
            max_idle_conn: record.max_idle,
            max_lifetime_ms: record.max_lifetime_ms,
        };

        match format {
            OutputFormat::Human => writeln!(
                out,
                "{}\t{}\t{}\topen={} idle={} lifetime={}ms",
                entry.name,
                entry.driver,
                entry.timezone,
                entry.max_open_conn,
                entry.max_idle_conn,
                entry.max_lifetime_ms
            )?,
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(&entry)?)?,
        }
    }

    if format == OutputFormat::Human {
        writeln!(out, "{} database settings OK", records.len())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests;
