#[cfg(feature = "bmp")]
pub mod bmp;
#[cfg(feature = "dds")]
pub mod dds;
#[cfg(feature = "dib")]
pub mod dib;
#[cfg(feature = "exr")]
pub mod exr;
#[cfg(feature = "gif")]
pub mod gif;
#[cfg(feature = "ico")]
pub mod ico;
#[cfg(feature = "jp2")]
pub mod jp2;
#[cfg(feature = "jpeg")]
pub mod jpeg;
#[cfg(feature = "pcx")]
pub mod pcx;
#[cfg(feature = "png")]
pub mod png;
#[cfg(feature = "psd")]
pub mod psd;
#[cfg(feature = "qoi")]
pub mod qoi;
#[cfg(feature = "tga")]
pub mod tga;
#[cfg(feature = "tiff")]
pub mod tiff;
#[cfg(feature = "vtf")]
pub mod vtf;
#[cfg(feature = "webp")]
pub mod webp;
#[cfg(feature = "xcf")]
pub mod xcf;

use crate::{container, ImageError, ImageResult, ImageType};
use std::io::{Read, Seek};

/// Classifies a stream into one of the supported [`ImageType`]s by its
/// leading bytes, in the fixed priority order the formats' signatures
/// require (overlapping prefixes like ISO-BMFF/TIFF/JPEG 2000 are resolved
/// by trying the strongest, most specific tests first).
pub fn detect<R: Read + Seek>(reader: &mut R) -> ImageResult<ImageType> {
    let mut header = [0u8; 32];
    let mut filled = 0usize;
    while filled < header.len() {
        match reader.read(&mut header[filled..])? {
            0 => break,
            n => filled += n,
        }
    }
    let header = &header[..filled];

    #[cfg(feature = "png")]
    if png::matches(header) {
        return Ok(ImageType::Png);
    }

    #[cfg(feature = "qoi")]
    if qoi::matches(header) {
        return Ok(ImageType::Qoi);
    }

    #[cfg(feature = "gif")]
    if gif::matches(header) {
        return Ok(ImageType::Gif);
    }

    #[cfg(feature = "bmp")]
    if bmp::matches(header) {
        return Ok(ImageType::Bmp);
    }

    #[cfg(feature = "psd")]
    if psd::matches(header) {
        return Ok(ImageType::Psd);
    }

    #[cfg(feature = "xcf")]
    if xcf::matches(header) {
        return Ok(ImageType::Xcf);
    }

    #[cfg(feature = "exr")]
    if exr::matches(header) {
        return Ok(ImageType::Exr);
    }

    #[cfg(feature = "vtf")]
    if vtf::matches(header) {
        return Ok(ImageType::Vtf);
    }

    #[cfg(feature = "dds")]
    if dds::matches(header) {
        return Ok(ImageType::Dds);
    }

    #[cfg(feature = "bmff")]
    if header.len() >= 8 && &header[4..8] == b"ftyp" {
        if let Some(brand) = container::bmff::classify(reader)? {
            match brand {
                #[cfg(feature = "avif")]
                container::bmff::Brand::Avif => return Ok(ImageType::Avif),
                #[cfg(feature = "heic")]
                container::bmff::Brand::Heic => return Ok(ImageType::Heic),
                #[cfg(feature = "heif")]
                container::bmff::Brand::Heif => return Ok(ImageType::Heif),
                #[allow(unreachable_patterns)]
                _ => return Err(ImageError::UnsupportedFormat),
            }
        }
        return Err(ImageError::UnsupportedFormat);
    }

    #[cfg(feature = "webp")]
    if webp::matches(header) {
        return Ok(ImageType::Webp);
    }

    #[cfg(feature = "jpeg")]
    if jpeg::matches(header) {
        return Ok(ImageType::Jpeg);
    }

    #[cfg(feature = "jp2")]
    if jp2::matches(header) {
        return Ok(ImageType::Jp2);
    }

    #[cfg(feature = "tiff")]
    if tiff::matches(header) {
        return Ok(ImageType::Tiff);
    }

    #[cfg(feature = "pcx")]
    if pcx::matches(header) {
        return Ok(ImageType::Pcx);
    }

    #[cfg(feature = "ico")]
    if ico::matches(header) {
        return Ok(ImageType::Ico);
    }

    // TGA has no leading magic at all; probe the optional trailing footer.
    // Keep it last, since it has the highest probability of a false positive.
    #[cfg(feature = "tga")]
    if tga::probe_footer(reader).unwrap_or(false) {
        return Ok(ImageType::Tga);
    }

    // DIB is a prefixless raw bitmap header, tried only as a last resort.
    #[cfg(feature = "dib")]
    if dib::matches(header) {
        return Ok(ImageType::Dib);
    }

    Err(ImageError::UnsupportedFormat)
}
