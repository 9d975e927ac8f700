use std::io::{self, Read, Seek, SeekFrom};

use crate::util::{read_u16, read_u32, read_u64, Endian, MAX_ELEMENTS};

#[derive(Debug, PartialEq, Eq)]
enum Kind {
    Tiff,
    BigTiff,
}

pub fn size<R: Read + Seek>(reader: &mut R) -> io::Result<(u32, u32)> {
    reader.seek(SeekFrom::Start(0))?;

    let mut endian_marker = [0u8; 2];
    reader.read_exact(&mut endian_marker)?;
    let endian = match &endian_marker {
        b"II" => Endian::Little,
        b"MM" => Endian::Big,
        _ => return Err(io::Error::new(io::ErrorKind::InvalidData, "invalid TIFF byte order mark")),
    };

    let version = read_u16(reader, endian)?;
    let kind = match version {
        42 => Kind::Tiff,
        // BigTIFF: http://bigtiff.org/ adds a constant offset-bytesize (8)
        // and a reserved field (0) right after the version marker.
        43 => Kind::BigTiff,
        _ => return Err(io::Error::new(io::ErrorKind::InvalidData, "unrecognized TIFF version")),
    };

    if kind == Kind::BigTiff {
        let offset_bytesize = read_u16(reader, endian)?;
        if offset_bytesize != 8 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "unrecognized BigTIFF offset size",
            ));
        }
        let reserved = read_u16(reader, endian)?;
        if reserved != 0 {
            return Err(io::Error::new(io::ErrorKind::InvalidData, "invalid BigTIFF header"));
        }
    }

    let ifd_offset = if kind == Kind::Tiff {
        read_u32(reader, endian)? as u64
    } else {
        read_u64(reader, endian)?
    };
    if ifd_offset == 0 {
        return Err(io::Error::new(io::ErrorKind::InvalidData, "IFD offset cannot be zero"));
    }

    reader.seek(SeekFrom::Start(ifd_offset))?;
    let entry_count = if kind == Kind::Tiff {
        read_u16(reader, endian)? as u64
    } else {
        read_u64(reader, endian)?
    };
    if entry_count as usize > MAX_ELEMENTS {
        return Err(io::Error::new(io::ErrorKind::InvalidData, "too many IFD entries"));
    }

    let mut width = None;
    let mut height = None;

    for _ in 0..entry_count {
        let tag = read_u16(reader, endian)?;
        let field_type = read_u16(reader, endian)?;
        let _count = if kind == Kind::Tiff {
            read_u32(reader, endian)? as u64
        } else {
            read_u64(reader, endian)?
        };

        // The value/offset slot is 4 bytes (standard TIFF) or 8 (BigTIFF);
        // only SHORT/LONG-sized values are meaningful here, so read that
        // much and skip the rest of the slot.
        let slot_len: u64 = if kind == Kind::Tiff { 4 } else { 8 };
        let value = match field_type {
            3 => Some(read_u16(reader, endian)? as u32), // SHORT
            4 => Some(read_u32(reader, endian)?),         // LONG
            _ => None,
        };
        let consumed: u64 = match field_type {
            3 => 2,
            4 => 4,
            _ => 0,
        };
        reader.seek(SeekFrom::Current((slot_len - consumed) as i64))?;

        if tag == 0x0100 {
            width = value.or(width);
        } else if tag == 0x0101 {
            height = value.or(height);
        }

        if let (Some(width), Some(height)) = (width, height) {
            return Ok((width, height));
        }
    }

    Err(io::Error::new(
        io::ErrorKind::InvalidData,
        "ImageWidth/ImageLength tags not found in IFD",
    ))
}

pub fn matches(header: &[u8]) -> bool {
    if header.len() < 4 {
        return false;
    }
    (header.starts_with(b"II") && (header[2] == 0x2A || header[2] == 0x2B) && header[3] == 0)
        || (header.starts_with(b"MM\x00") && (header[3] == 0x2A || header[3] == 0x2B))
}
