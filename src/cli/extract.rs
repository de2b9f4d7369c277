use std::io::Write;
use std::path::Path;

use crate::cli::{load_asset, wprintln};
use crate::superbinary::table::AssetTable;
use crate::UarpError;

/// Options for the extract subcommand.
pub struct ExtractOptions {
    pub file: String,
    pub dir: String,
    pub row: Option<usize>,
}

/// Extract payload bytes from a SuperBinary asset into files.
///
/// Decodes the asset table and writes each payload to `<dir>/<index>.bin`,
/// creating the directory if needed. With `--row`, only that row's payload
/// is written. Payload bytes are written exactly as they appear in the
/// asset; no decompression or signature handling is attempted.
pub fn execute(opts: &ExtractOptions, writer: &mut dyn Write) -> Result<(), UarpError> {
    let asset = load_asset(&opts.file)?;
    let table = AssetTable::parse(&asset)?;

    if let Some(index) = opts.row {
        if index >= table.rows.len() {
            return Err(UarpError::Argument(format!(
                "Row {} is out of range: asset has {} row(s)",
                index,
                table.rows.len()
            )));
        }
    }

    std::fs::create_dir_all(&opts.dir)
        .map_err(|e| UarpError::Io(format!("Cannot create {}: {}", opts.dir, e)))?;

    let mut written = 0usize;
    for (index, row) in table.rows.iter().enumerate() {
        if let Some(only) = opts.row {
            if index != only {
                continue;
            }
        }

        let path = Path::new(&opts.dir).join(format!("{}.bin", index));
        std::fs::write(&path, row.payload)
            .map_err(|e| UarpError::Io(format!("Cannot write {}: {}", path.display(), e)))?;

        wprintln!(
            writer,
            "Wrote row {} ({}, {} bytes) to {}",
            index,
            row.payload_type,
            row.payload.len(),
            path.display()
        )?;
        written += 1;
    }

    let label = if written == 1 { "payload" } else { "payloads" };
    wprintln!(writer, "Extracted {} {} to {}", written, label, opts.dir)?;

    Ok(())
}
