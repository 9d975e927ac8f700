use std::io::{self, Read, Seek};

use crate::util::{read_i32, read_u16, read_u32, Endian};

/// Header sizes DIB-family bitmap headers may declare, from the original
/// OS/2 `BITMAPCOREHEADER` through the various Windows successors.
const KNOWN_HEADER_SIZES: [u32; 7] = [12, 40, 52, 56, 64, 108, 124];

/// Reads a DIB header from the reader's current position. Used both for
/// bare `.dib` streams (called at offset 0) and for `.bmp` files, which
/// have a 14-byte `BM` file header before this structure starts.
pub fn size<R: Read + Seek>(reader: &mut R) -> io::Result<(u32, u32)> {
    let header_size = read_u32(reader, Endian::Little)?;
    match header_size {
        12 => {
            let width = read_u16(reader, Endian::Little)? as u32;
            let height = read_u16(reader, Endian::Little)? as u32;
            Ok((width, height))
        }
        n if KNOWN_HEADER_SIZES.contains(&n) && n >= 40 => {
            let width = read_i32(reader, Endian::Little)?;
            let height = read_i32(reader, Endian::Little)?;
            if width < 0 {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    "DIB header reported a negative width",
                ));
            }
            // A negative height means the rows are stored top-down; the
            // reported dimension is always the unsigned magnitude.
            Ok((width as u32, height.unsigned_abs()))
        }
        _ => Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "unrecognized DIB header size",
        )),
    }
}

pub fn matches(header: &[u8]) -> bool {
    if header.len() < 4 {
        return false;
    }
    let header_size = u32::from_le_bytes([header[0], header[1], header[2], header[3]]);
    KNOWN_HEADER_SIZES.contains(&header_size)
}
