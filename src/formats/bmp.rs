use std::io::{self, Read, Seek, SeekFrom};

use crate::formats::dib;

pub fn size<R: Read + Seek>(reader: &mut R) -> io::Result<(u32, u32)> {
    reader.seek(SeekFrom::Start(14))?;
    dib::size(reader)
}

pub fn matches(header: &[u8]) -> bool {
    header.starts_with(b"BM")
}
