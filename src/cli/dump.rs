use std::fs::File;
use std::io::{Read, Seek, SeekFrom, Write};

use crate::cli::{load_asset, wprintln};
use crate::superbinary::table::AssetTable;
use crate::util::hex::hex_dump;
use crate::UarpError;

pub struct DumpOptions {
    pub file: String,
    pub row: Option<usize>,
    pub offset: Option<u64>,
    pub length: Option<usize>,
    pub raw: bool,
}

pub fn execute(opts: &DumpOptions, writer: &mut dyn Write) -> Result<(), UarpError> {
    if let Some(abs_offset) = opts.offset {
        // Absolute offset mode: dump raw bytes from file position
        return dump_at_offset(&opts.file, abs_offset, opts.length.unwrap_or(256), opts.raw, writer);
    }

    // Row mode: dump a payload (row 0 by default)
    let asset = load_asset(&opts.file)?;
    let table = AssetTable::parse(&asset)?;

    let index = opts.row.unwrap_or(0);
    let row = table.rows.get(index).ok_or_else(|| {
        UarpError::Argument(format!(
            "Row {} is out of range: asset has {} row(s)",
            index,
            table.rows.len()
        ))
    })?;

    let length = opts.length.unwrap_or(row.payload.len());
    let dump_len = length.min(row.payload.len());

    // Offsets in the dump are asset-absolute, matching the row directory.
    let base_offset = u64::from(row.payload_offset);

    if opts.raw {
        writer
            .write_all(&row.payload[..dump_len])
            .map_err(|e| UarpError::Io(format!("Cannot write to stdout: {}", e)))?;
    } else {
        wprintln!(
            writer,
            "Hex dump of {} row {} ({}, {} bytes):",
            opts.file,
            index,
            row.payload_type,
            dump_len
        )?;
        wprintln!(writer)?;
        wprintln!(writer, "{}", hex_dump(&row.payload[..dump_len], base_offset))?;
    }

    Ok(())
}

fn dump_at_offset(
    file: &str,
    offset: u64,
    length: usize,
    raw: bool,
    writer: &mut dyn Write,
) -> Result<(), UarpError> {
    let mut f =
        File::open(file).map_err(|e| UarpError::Io(format!("Cannot open {}: {}", file, e)))?;

    let file_size = f
        .metadata()
        .map_err(|e| UarpError::Io(format!("Cannot stat {}: {}", file, e)))?
        .len();

    if offset >= file_size {
        return Err(UarpError::Argument(format!(
            "Offset {} is beyond file size {}",
            offset, file_size
        )));
    }

    let available = (file_size - offset) as usize;
    let read_len = length.min(available);

    f.seek(SeekFrom::Start(offset))
        .map_err(|e| UarpError::Io(format!("Cannot seek to offset {}: {}", offset, e)))?;

    let mut buf = vec![0u8; read_len];
    f.read_exact(&mut buf).map_err(|e| {
        UarpError::Io(format!(
            "Cannot read {} bytes at offset {}: {}",
            read_len, offset, e
        ))
    })?;

    if raw {
        writer
            .write_all(&buf)
            .map_err(|e| UarpError::Io(format!("Cannot write to stdout: {}", e)))?;
    } else {
        wprintln!(
            writer,
            "Hex dump of {} at offset {} ({} bytes):",
            file, offset, read_len
        )?;
        wprintln!(writer)?;
        wprintln!(writer, "{}", hex_dump(&buf, offset))?;
    }

    Ok(())
}
