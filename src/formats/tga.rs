use std::io::{self, Read, Seek, SeekFrom};

use crate::util::{read_u16, Endian};

const FOOTER_SIGNATURE: &[u8; 18] = b"TRUEVISION-XFILE.\0";

pub fn size<R: Read + Seek>(reader: &mut R) -> io::Result<(u32, u32)> {
    reader.seek(SeekFrom::Start(12))?;
    let width = read_u16(reader, Endian::Little)? as u32;
    let height = read_u16(reader, Endian::Little)? as u32;
    Ok((width, height))
}

/// TGA has no leading magic; the only reliable signal is an optional
/// 18-byte footer naming the format, which newer writers append.
pub fn probe_footer<R: Read + Seek>(reader: &mut R) -> io::Result<bool> {
    let end = reader.seek(SeekFrom::End(0))?;
    let footer_start = match end.checked_sub(FOOTER_SIGNATURE.len() as u64) {
        Some(offset) => offset,
        None => return Ok(false),
    };
    reader.seek(SeekFrom::Start(footer_start))?;
    let mut footer = [0u8; 18];
    reader.read_exact(&mut footer)?;
    Ok(&footer == FOOTER_SIGNATURE)
}
