use std::io::{self, Read, Seek, SeekFrom};

/// Upper bound on how many header bytes any single parse call may read.
///
/// See SPEC_FULL.md §5 ("Bounded work"). Applied by wrapping every reader the
/// dispatcher hands to a detector or parser in a [`BoundedReader`].
pub const MAX_HEADER_BYTES: u64 = 64 * 1024;

/// Upper bound on how many boxes/markers/IFD entries a single parser may visit.
pub const MAX_ELEMENTS: usize = 1024;

/// Upper bound on ISO-BMFF box nesting depth a parser will descend into.
pub const MAX_BOX_DEPTH: u32 = 16;

/// Used to pick which byte order a primitive decoder reads with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endian {
    Little,
    Big,
}

/// Wraps any `Read + Seek` source and enforces [`MAX_HEADER_BYTES`] across the
/// lifetime of one detect-then-parse call. Seeking is left unrestricted: it's
/// `read` that does the actual work a pathological input could abuse.
pub struct BoundedReader<R> {
    inner: R,
    read_so_far: u64,
}

impl<R> BoundedReader<R> {
    pub fn new(inner: R) -> Self {
        BoundedReader {
            inner,
            read_so_far: 0,
        }
    }
}

impl<R: Read> Read for BoundedReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.read_so_far >= MAX_HEADER_BYTES {
            return Err(io::Error::new(
                io::ErrorKind::Other,
                "exceeded the maximum number of header bytes a parser may read",
            ));
        }
        let n = self.inner.read(buf)?;
        self.read_so_far += n as u64;
        Ok(n)
    }
}

impl<R: Seek> Seek for BoundedReader<R> {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.inner.seek(pos)
    }
}

pub fn read_u8<R: Read>(reader: &mut R) -> io::Result<u8> {
    let mut buf = [0; 1];
    reader.read_exact(&mut buf)?;
    Ok(buf[0])
}

pub fn read_i32<R: Read>(reader: &mut R, endian: Endian) -> io::Result<i32> {
    let mut buf = [0; 4];
    reader.read_exact(&mut buf)?;
    Ok(match endian {
        Endian::Little => i32::from_le_bytes(buf),
        Endian::Big => i32::from_be_bytes(buf),
    })
}

pub fn read_u16<R: Read>(reader: &mut R, endian: Endian) -> io::Result<u16> {
    let mut buf = [0; 2];
    reader.read_exact(&mut buf)?;
    Ok(match endian {
        Endian::Little => u16::from_le_bytes(buf),
        Endian::Big => u16::from_be_bytes(buf),
    })
}

pub fn read_u24<R: Read>(reader: &mut R, endian: Endian) -> io::Result<u32> {
    let mut buf = [0; 3];
    reader.read_exact(&mut buf)?;
    Ok(match endian {
        Endian::Little => (buf[2] as u32) << 16 | (buf[1] as u32) << 8 | buf[0] as u32,
        Endian::Big => (buf[0] as u32) << 16 | (buf[1] as u32) << 8 | buf[2] as u32,
    })
}

pub fn read_u32<R: Read>(reader: &mut R, endian: Endian) -> io::Result<u32> {
    let mut buf = [0; 4];
    reader.read_exact(&mut buf)?;
    Ok(match endian {
        Endian::Little => u32::from_le_bytes(buf),
        Endian::Big => u32::from_be_bytes(buf),
    })
}

pub fn read_u64<R: Read>(reader: &mut R, endian: Endian) -> io::Result<u64> {
    let mut buf = [0; 8];
    reader.read_exact(&mut buf)?;
    Ok(match endian {
        Endian::Little => u64::from_le_bytes(buf),
        Endian::Big => u64::from_be_bytes(buf),
    })
}

/// Reads bytes up to (and discarding) a trailing `0x00`.
pub fn read_null_terminated_string<R: Read>(reader: &mut R) -> io::Result<String> {
    let mut bytes = Vec::new();
    loop {
        let byte = read_u8(reader)?;
        if byte == 0 {
            break;
        }
        bytes.push(byte);
        if bytes.len() > MAX_ELEMENTS {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "null-terminated string ran past the element limit",
            ));
        }
    }
    String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// A generic ISO-BMFF / JP2 style box header: 4-byte type preceded by a 32-bit
/// big-endian length, with the two escape cases both formats use: a length of
/// `1` means a 64-bit extended length follows the type, and a length of `0`
/// means "this box runs to the end of the stream".
pub struct BoxHeader {
    pub kind: [u8; 4],
    /// Length of the box's content, not counting the header itself.
    pub content_len: u64,
}

pub fn read_box_header<R: Read + Seek>(reader: &mut R) -> io::Result<BoxHeader> {
    let start = reader.stream_position()?;
    let size32 = read_u32(reader, Endian::Big)?;
    let mut kind = [0u8; 4];
    reader.read_exact(&mut kind)?;

    let (total_len, header_len) = if size32 == 1 {
        let size64 = read_u64(reader, Endian::Big)?;
        (size64, 16u64)
    } else if size32 == 0 {
        let end = reader.seek(SeekFrom::End(0))?;
        reader.seek(SeekFrom::Start(start + 8))?;
        (end - start, 8u64)
    } else {
        (size32 as u64, 8u64)
    };

    if total_len < header_len {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "box length is smaller than its own header",
        ));
    }

    Ok(BoxHeader {
        kind,
        content_len: total_len - header_len,
    })
}
