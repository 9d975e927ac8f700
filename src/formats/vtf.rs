use std::io::{self, Read, Seek, SeekFrom};

use crate::util::{read_u16, Endian};

pub fn size<R: Read + Seek>(reader: &mut R) -> io::Result<(u32, u32)> {
    reader.seek(SeekFrom::Start(16))?;
    let width = read_u16(reader, Endian::Little)? as u32;
    let height = read_u16(reader, Endian::Little)? as u32;
    Ok((width, height))
}

pub fn matches(header: &[u8]) -> bool {
    header.starts_with(b"VTF\0")
}
