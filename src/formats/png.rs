use std::io::{self, Read, Seek, SeekFrom};

use crate::util::{read_u32, Endian};

pub fn size<R: Read + Seek>(reader: &mut R) -> io::Result<(u32, u32)> {
    // The signature (8 bytes) is immediately followed by the IHDR chunk's
    // length (4) and type (4), putting its data at offset 16.
    reader.seek(SeekFrom::Start(16))?;
    let width = read_u32(reader, Endian::Big)?;
    let height = read_u32(reader, Endian::Big)?;
    Ok((width, height))
}

pub fn matches(header: &[u8]) -> bool {
    header.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A])
}
