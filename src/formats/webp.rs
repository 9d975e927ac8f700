use std::io::{self, Read, Seek, SeekFrom};

use crate::util::{read_u16, read_u24, read_u32, read_u8, Endian};

pub fn size<R: Read + Seek>(reader: &mut R) -> io::Result<(u32, u32)> {
    reader.seek(SeekFrom::Start(12))?;
    let mut fourcc = [0u8; 4];
    reader.read_exact(&mut fourcc)?;

    match &fourcc {
        b"VP8 " => {
            // Chunk data starts right after this FourCC; the frame tag and
            // start code occupy the first 10 bytes of it.
            reader.seek(SeekFrom::Current(10))?;
            let width = read_u16(reader, Endian::Little)? & 0x3FFF;
            let height = read_u16(reader, Endian::Little)? & 0x3FFF;
            Ok((width as u32, height as u32))
        }
        b"VP8L" => {
            let signature = read_u8(reader)?;
            if signature != 0x2F {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    "invalid VP8L signature byte",
                ));
            }
            let bits = read_u32(reader, Endian::Little)?;
            let width = (bits & 0x3FFF) + 1;
            let height = ((bits >> 14) & 0x3FFF) + 1;
            Ok((width, height))
        }
        b"VP8X" => {
            read_u8(reader)?; // flags
            reader.seek(SeekFrom::Current(3))?; // reserved
            let width = read_u24(reader, Endian::Little)? + 1;
            let height = read_u24(reader, Endian::Little)? + 1;
            Ok((width, height))
        }
        _ => Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "unrecognized WebP chunk FourCC",
        )),
    }
}

pub fn matches(header: &[u8]) -> bool {
    header.len() >= 12 && &header[0..4] == b"RIFF" && &header[8..12] == b"WEBP"
}
