use std::io::{self, Read, Seek, SeekFrom};

use crate::util::{read_i32, read_null_terminated_string, read_u32, Endian, MAX_ELEMENTS};

pub fn size<R: Read + Seek>(reader: &mut R) -> io::Result<(u32, u32)> {
    reader.seek(SeekFrom::Start(8))?;

    let mut visited = 0usize;
    loop {
        if visited >= MAX_ELEMENTS {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "too many attributes while scanning EXR header",
            ));
        }
        visited += 1;

        let attr_name = read_null_terminated_string(reader)?;
        if attr_name.is_empty() {
            break;
        }
        let attr_type = read_null_terminated_string(reader)?;
        let attr_size = read_u32(reader, Endian::Little)?;

        if attr_name == "dataWindow" && attr_type == "box2i" {
            let x_min = read_i32(reader, Endian::Little)?;
            let y_min = read_i32(reader, Endian::Little)?;
            let x_max = read_i32(reader, Endian::Little)?;
            let y_max = read_i32(reader, Endian::Little)?;

            let width = x_max
                .checked_sub(x_min)
                .and_then(|w| w.checked_add(1))
                .filter(|&w| w > 0)
                .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "invalid dataWindow"))?;
            let height = y_max
                .checked_sub(y_min)
                .and_then(|h| h.checked_add(1))
                .filter(|&h| h > 0)
                .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "invalid dataWindow"))?;

            return Ok((width as u32, height as u32));
        }

        reader.seek(SeekFrom::Current(attr_size as i64))?;
    }

    Err(io::Error::new(
        io::ErrorKind::InvalidData,
        "dataWindow attribute not found",
    ))
}

pub fn matches(header: &[u8]) -> bool {
    header.starts_with(&[0x76, 0x2f, 0x31, 0x01])
}
