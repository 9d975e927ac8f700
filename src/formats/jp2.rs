use std::io::{self, Read, Seek, SeekFrom};

use crate::util::{read_box_header, read_u32, Endian, MAX_ELEMENTS};

const SIGNATURE_BOX: &[u8; 12] = &[
    0x00, 0x00, 0x00, 0x0C, 0x6A, 0x50, 0x20, 0x20, 0x0D, 0x0A, 0x87, 0x0A,
];
const CODESTREAM_MAGIC: &[u8; 4] = &[0xFF, 0x4F, 0xFF, 0x51];

pub fn size<R: Read + Seek>(reader: &mut R) -> io::Result<(u32, u32)> {
    reader.seek(SeekFrom::Start(0))?;
    let mut prefix = [0u8; 12];
    reader.read_exact(&mut prefix)?;

    if &prefix == SIGNATURE_BOX {
        return size_from_jp2_boxes(reader);
    }
    if &prefix[..4] == &CODESTREAM_MAGIC[..4] {
        reader.seek(SeekFrom::Start(2))?; // past SOC, at the SIZ marker
        return size_from_codestream(reader);
    }

    Err(io::Error::new(
        io::ErrorKind::InvalidData,
        "not a JP2 signature box or raw JPEG 2000 codestream",
    ))
}

fn size_from_jp2_boxes<R: Read + Seek>(reader: &mut R) -> io::Result<(u32, u32)> {
    let jp2h_end = find_box(reader, b"jp2h", None)?;
    let ihdr_end = find_box(reader, b"ihdr", Some(jp2h_end))?;
    let _ = ihdr_end;
    let height = read_u32(reader, Endian::Big)?;
    let width = read_u32(reader, Endian::Big)?;
    Ok((width, height))
}

fn find_box<R: Read + Seek>(reader: &mut R, target: &[u8; 4], bound: Option<u64>) -> io::Result<u64> {
    let mut visited = 0usize;
    loop {
        if let Some(bound) = bound {
            if reader.stream_position()? + 8 > bound {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    "box not found before its parent ended",
                ));
            }
        }
        if visited >= MAX_ELEMENTS {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "too many boxes while searching JP2 structure",
            ));
        }
        visited += 1;
        let child = read_box_header(reader)?;
        let child_end = reader.stream_position()? + child.content_len;
        if &child.kind == target {
            return Ok(child_end);
        }
        reader.seek(SeekFrom::Start(child_end))?;
    }
}

fn size_from_codestream<R: Read + Seek>(reader: &mut R) -> io::Result<(u32, u32)> {
    let mut marker = [0u8; 2];
    reader.read_exact(&mut marker)?;
    if marker != [0xFF, 0x51] {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "expected SIZ marker after SOC",
        ));
    }
    read_u32(reader, Endian::Big)?; // length (u16) + Rsiz (u16), read as one u32
    let x_size = read_u32(reader, Endian::Big)?;
    let y_size = read_u32(reader, Endian::Big)?;
    let x_offset = read_u32(reader, Endian::Big)?;
    let y_offset = read_u32(reader, Endian::Big)?;

    let width = x_size
        .checked_sub(x_offset)
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "invalid SIZ offsets"))?;
    let height = y_size
        .checked_sub(y_offset)
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "invalid SIZ offsets"))?;

    Ok((width, height))
}

pub fn matches(header: &[u8]) -> bool {
    header.starts_with(SIGNATURE_BOX) || header.starts_with(CODESTREAM_MAGIC)
}
