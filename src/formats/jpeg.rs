use std::io::{self, Read, Seek, SeekFrom};

use crate::util::{read_u16, read_u8, Endian};

pub fn size<R: Read + Seek>(reader: &mut R) -> io::Result<(u32, u32)> {
    reader.seek(SeekFrom::Start(2))?; // past the FF D8 SOI marker

    loop {
        // Scan forward to the next marker: a 0xFF byte followed by a
        // non-0xFF, non-zero byte (0xFF bytes in between are fill bytes).
        let mut byte = read_u8(reader)?;
        while byte != 0xFF {
            byte = read_u8(reader)?;
        }
        let mut marker = read_u8(reader)?;
        while marker == 0xFF {
            marker = read_u8(reader)?;
        }

        let is_sof = (0xC0..=0xCF).contains(&marker)
            && marker != 0xC4 // DHT
            && marker != 0xC8 // reserved
            && marker != 0xCC; // DAC

        if is_sof {
            read_u16(reader, Endian::Big)?; // segment length
            read_u8(reader)?; // sample precision
            let height = read_u16(reader, Endian::Big)? as u32;
            let width = read_u16(reader, Endian::Big)? as u32;
            return Ok((width, height));
        }

        let no_payload = matches!(marker, 0xD0..=0xD7 | 0xD8 | 0xD9 | 0x01);
        if no_payload {
            continue;
        }

        let segment_length = read_u16(reader, Endian::Big)?;
        if segment_length < 2 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "JPEG segment length too short",
            ));
        }
        reader.seek(SeekFrom::Current((segment_length - 2) as i64))?;
    }
}

pub fn matches(header: &[u8]) -> bool {
    header.starts_with(&[0xFF, 0xD8, 0xFF])
}
