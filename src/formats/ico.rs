use std::io::{self, Read, Seek, SeekFrom};

use crate::util::{read_u16, read_u8, Endian};

/// Only the first directory entry is reported; ICO files may contain
/// several images at different resolutions, and this crate has no way to
/// express "pick one" beyond the spec's documented first-entry policy.
pub fn size<R: Read + Seek>(reader: &mut R) -> io::Result<(u32, u32)> {
    reader.seek(SeekFrom::Start(4))?;
    let entry_count = read_u16(reader, Endian::Little)?;
    if entry_count == 0 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "ICO directory has no entries",
        ));
    }

    let width = read_u8(reader)?;
    let height = read_u8(reader)?;

    let width = if width == 0 { 256 } else { width as u32 };
    let height = if height == 0 { 256 } else { height as u32 };

    Ok((width, height))
}

pub fn matches(header: &[u8]) -> bool {
    header.starts_with(&[0x00, 0x00, 0x01, 0x00])
}
