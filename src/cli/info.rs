use std::io::Write;

use colored::Colorize;

use crate::cli::{load_asset, wprint, wprintln};
use crate::superbinary::metadata::Metadata;
use crate::superbinary::table::AssetTable;
use crate::util::hex::{format_bytes, format_hex32, format_offset, format_tag};
use crate::UarpError;

/// Options for the info subcommand.
pub struct InfoOptions {
    pub file: String,
    pub verbose: bool,
    pub json: bool,
}

/// JSON-serializable metadata record.
#[derive(serde::Serialize)]
struct MetadataJson {
    code: u32,
    label: String,
    value: u32,
}

/// JSON-serializable payload row.
#[derive(serde::Serialize)]
struct RowJson {
    index: usize,
    tag: String,
    label: String,
    version: String,
    declared_size: u32,
    payload_offset: u32,
    payload_size: usize,
    metadata: Vec<MetadataJson>,
}

/// JSON-serializable asset table.
#[derive(serde::Serialize)]
struct TableJson {
    file: String,
    format: u32,
    size: u32,
    binary_size: u32,
    version: String,
    metadata: Vec<MetadataJson>,
    rows: Vec<RowJson>,
}

/// Decode a SuperBinary asset and display its structure.
///
/// Reads the whole file into memory, decodes the asset table, and prints the
/// header fields, the global metadata records, and one entry per payload row
/// showing its resolved type label, payload size, and version, with the
/// row's own metadata records indented beneath it.
///
/// With `--verbose`, metadata lines additionally show the raw 32-bit code in
/// hex, and each row shows its 4-character tag, declared entry size, payload
/// offset, and the first bytes of the payload.
///
/// With `--json`, the decoded table is emitted as a single JSON document
/// carrying both raw codes/tags and resolved labels.
pub fn execute(opts: &InfoOptions, writer: &mut dyn Write) -> Result<(), UarpError> {
    let asset = load_asset(&opts.file)?;
    let table = AssetTable::parse(&asset)?;

    if opts.json {
        return execute_json(opts, &table, writer);
    }

    wprintln!(writer, "Asset: {} ({} bytes)", opts.file, asset.len())?;
    wprintln!(writer, "{}", "-".repeat(50))?;
    wprintln!(writer, "{}", "HEADER".bold())?;
    wprintln!(writer, "Format Version: {}", table.format)?;
    wprintln!(writer, "Declared Size: {}", table.size)?;
    wprintln!(writer, "Binary Size: {}", table.binary_size)?;
    wprintln!(writer, "Version: {}", table.version)?;

    wprintln!(writer)?;
    let label = if table.metadata.len() == 1 {
        "record"
    } else {
        "records"
    };
    wprintln!(
        writer,
        "{} ({} {})",
        "GLOBAL METADATA".bold(),
        table.metadata.len(),
        label
    )?;
    print_metadata(writer, &table.metadata, "  ", opts.verbose)?;

    wprintln!(writer)?;
    wprintln!(writer, "{} ({})", "ROWS".bold(), table.rows.len())?;
    for (index, row) in table.rows.iter().enumerate() {
        wprintln!(
            writer,
            "  [{}] type: {}, size: {}, version: {}",
            index,
            row.payload_type,
            row.payload.len(),
            row.version
        )?;

        if opts.verbose {
            wprintln!(
                writer,
                "      tag: {}, declared size: {}, offset: {}",
                format_tag(&row.payload_type.tag()),
                row.declared_size,
                format_offset(u64::from(row.payload_offset))
            )?;
            if !row.payload.is_empty() {
                let head = &row.payload[..row.payload.len().min(16)];
                wprintln!(writer, "      head: {}", format_bytes(head))?;
            }
        }

        print_metadata(writer, &row.metadata, "      ", opts.verbose)?;
    }

    Ok(())
}

/// Execute info in JSON output mode.
fn execute_json(
    opts: &InfoOptions,
    table: &AssetTable,
    writer: &mut dyn Write,
) -> Result<(), UarpError> {
    let rows = table
        .rows
        .iter()
        .enumerate()
        .map(|(index, row)| RowJson {
            index,
            tag: format_tag(&row.payload_type.tag()),
            label: row.payload_type.label().to_string(),
            version: row.version.to_string(),
            declared_size: row.declared_size,
            payload_offset: row.payload_offset,
            payload_size: row.payload.len(),
            metadata: metadata_json(&row.metadata),
        })
        .collect();

    let table_json = TableJson {
        file: opts.file.clone(),
        format: table.format,
        size: table.size,
        binary_size: table.binary_size,
        version: table.version.to_string(),
        metadata: metadata_json(&table.metadata),
        rows,
    };

    let json = serde_json::to_string_pretty(&table_json)
        .map_err(|e| UarpError::Io(format!("JSON serialization error: {}", e)))?;
    wprintln!(writer, "{}", json)?;
    Ok(())
}

fn metadata_json(records: &[Metadata]) -> Vec<MetadataJson> {
    records
        .iter()
        .map(|record| MetadataJson {
            code: record.kind.code(),
            label: record.kind.label().to_string(),
            value: record.value,
        })
        .collect()
}

/// Print metadata records one per line under the current section.
fn print_metadata(
    writer: &mut dyn Write,
    records: &[Metadata],
    indent: &str,
    verbose: bool,
) -> Result<(), UarpError> {
    for record in records {
        wprint!(
            writer,
            "{}type: {}, value: {}",
            indent,
            record.kind,
            record.value
        )?;
        if verbose {
            wprint!(writer, " (code {})", format_hex32(record.kind.code()))?;
        }
        wprintln!(writer)?;
    }
    Ok(())
}
