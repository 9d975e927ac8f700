use std::io::{self, Read, Seek, SeekFrom};

use crate::util::{read_u32, Endian};

pub fn size<R: Read + Seek>(reader: &mut R) -> io::Result<(u32, u32)> {
    reader.seek(SeekFrom::Start(14))?;
    let width = read_u32(reader, Endian::Big)?;
    let height = read_u32(reader, Endian::Big)?;
    Ok((width, height))
}

pub fn matches(header: &[u8]) -> bool {
    header.starts_with(b"gimp xcf ")
}
