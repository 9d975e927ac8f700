//! ISO-BMFF box walking shared by AVIF, HEIC, and HEIF: a `ftyp` brand
//! classifies which of the three the stream is, then `meta/iprp/ipco/ispe`
//! is located the same way regardless of brand to recover dimensions.

use crate::util::{read_box_header, read_u32, Endian, MAX_ELEMENTS};
use std::io::{self, Read, Seek, SeekFrom};

/// Which of the three ISO-BMFF-derived formats a `ftyp` brand identifies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Brand {
    #[cfg(feature = "avif")]
    Avif,
    #[cfg(feature = "heic")]
    Heic,
    #[cfg(feature = "heif")]
    Heif,
}

fn brand_of(fourcc: &[u8; 4]) -> Option<Brand> {
    #[cfg(feature = "avif")]
    if matches!(fourcc, b"avif" | b"avis") {
        return Some(Brand::Avif);
    }
    #[cfg(feature = "heic")]
    if matches!(fourcc, b"heic" | b"heix" | b"heim" | b"heis") {
        return Some(Brand::Heic);
    }
    #[cfg(feature = "heif")]
    if matches!(fourcc, b"mif1" | b"msf1" | b"heif") {
        return Some(Brand::Heif);
    }
    #[allow(unreachable_code)]
    None
}

/// Reads the `ftyp` box at the start of the stream and classifies its major
/// brand, falling back to scanning the compatible-brands list that follows
/// it to the end of the box.
pub fn classify<R: Read + Seek>(reader: &mut R) -> io::Result<Option<Brand>> {
    reader.seek(SeekFrom::Start(0))?;
    let ftyp = read_box_header(reader)?;
    if &ftyp.kind != b"ftyp" {
        return Ok(None);
    }
    let content_end = reader.stream_position()? + ftyp.content_len;

    let mut major = [0u8; 4];
    reader.read_exact(&mut major)?;
    reader.seek(SeekFrom::Current(4))?; // minor_version

    if let Some(brand) = brand_of(&major) {
        return Ok(Some(brand));
    }

    let mut checked = 0;
    while reader.stream_position()? + 4 <= content_end {
        if checked >= MAX_ELEMENTS {
            break;
        }
        let mut compatible = [0u8; 4];
        reader.read_exact(&mut compatible)?;
        checked += 1;
        if let Some(brand) = brand_of(&compatible) {
            return Ok(Some(brand));
        }
    }

    Ok(None)
}

/// Walks the box tree to `meta > iprp > ipco`, then returns the largest
/// `ispe` (ImageSpatialExtentsProperty) box found by area, applying `irot`
/// rotation if present. This is the simple "largest ispe" policy noted as a
/// known limitation in DESIGN.md rather than full `pitm`/`ipma` resolution
/// of the primary item.
pub fn size<R: Read + Seek>(reader: &mut R) -> io::Result<(u32, u32)> {
    reader.seek(SeekFrom::Start(0))?;
    let meta_end = seek_into_box(reader, b"meta", None)?;
    read_u32(reader, Endian::Big)?; // full box version/flags
    let iprp_end = seek_into_box(reader, b"iprp", Some(meta_end))?;
    let ipco_end = seek_into_box(reader, b"ipco", Some(iprp_end))?;

    let mut max_width = 0u32;
    let mut max_height = 0u32;
    let mut found_ispe = false;
    let mut rotation = 0u8;
    let mut visited = 0usize;

    while reader.stream_position()? + 8 <= ipco_end {
        if visited >= MAX_ELEMENTS {
            break;
        }
        visited += 1;

        let child = read_box_header(reader)?;
        let child_end = reader.stream_position()? + child.content_len;

        if &child.kind == b"ispe" {
            found_ispe = true;
            read_u32(reader, Endian::Big)?; // version/flags
            let width = read_u32(reader, Endian::Big)?;
            let height = read_u32(reader, Endian::Big)?;
            if (width as u64) * (height as u64) > (max_width as u64) * (max_height as u64) {
                max_width = width;
                max_height = height;
            }
        } else if &child.kind == b"irot" {
            rotation = crate::util::read_u8(reader)?;
        }

        reader.seek(SeekFrom::Start(child_end))?;
    }

    if !found_ispe {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "no ispe property found in ipco",
        ));
    }

    // irot values 1 and 3 are 90 and 270 degrees; swap the reported axes.
    if rotation == 1 || rotation == 3 {
        std::mem::swap(&mut max_width, &mut max_height);
    }

    Ok((max_width, max_height))
}

/// Walks sibling boxes from the current position looking for `target`,
/// stopping at `bound` (the end of the enclosing box) if one is given, and
/// returns the absolute end offset of `target`'s content, positioned at its
/// start. Used for boxes we only ever need to step *into* once, never
/// recursively, so box count rather than nesting depth is what's bounded.
fn seek_into_box<R: Read + Seek>(
    reader: &mut R,
    target: &[u8; 4],
    bound: Option<u64>,
) -> io::Result<u64> {
    let mut visited = 0usize;
    loop {
        if let Some(bound) = bound {
            if reader.stream_position()? + 8 > bound {
                return Err(io::Error::new(
                    io::ErrorKind::InvalidData,
                    "child box not found before parent box ended",
                ));
            }
        }
        if visited >= MAX_ELEMENTS {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "too many boxes while searching for a child box",
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
