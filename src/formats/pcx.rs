use std::io::{self, Read, Seek, SeekFrom};

use crate::util::{read_u16, Endian};

pub fn size<R: Read + Seek>(reader: &mut R) -> io::Result<(u32, u32)> {
    reader.seek(SeekFrom::Start(4))?;
    let xmin = read_u16(reader, Endian::Little)?;
    let ymin = read_u16(reader, Endian::Little)?;
    let xmax = read_u16(reader, Endian::Little)?;
    let ymax = read_u16(reader, Endian::Little)?;

    let width = (xmax as u32)
        .checked_sub(xmin as u32)
        .and_then(|w| w.checked_add(1))
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "invalid PCX window"))?;
    let height = (ymax as u32)
        .checked_sub(ymin as u32)
        .and_then(|h| h.checked_add(1))
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "invalid PCX window"))?;

    Ok((width, height))
}

pub fn matches(header: &[u8]) -> bool {
    header.len() >= 3
        && header[0] == 0x0A
        && header[1] <= 5
        && matches!(header[2], 0 | 2 | 3 | 4 | 5)
}
