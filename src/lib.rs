//! Quick probing of image dimensions without loading or decoding the image.
//!
//! This crate reads just enough of an image's header/box/tag structure to
//! recover its pixel width and height, without pulling in a full image
//! decoder. It supports 20 container formats, detected from a small prefix
//! of the file and parsed format-by-format.
//!
//! # Example
//!
//! ```no_run
//! use imagesize::get_image_size_from_path;
//!
//! match get_image_size_from_path("test/test.webp") {
//!     Ok(info) => println!("{}x{} {:?}", info.width, info.height, info.format),
//!     Err(why) => println!("Error getting size: {:?}", why),
//! }
//! ```

mod container;
mod error;
mod formats;
mod util;

use std::fs::File;
use std::io::{self, Cursor, Read, Seek, SeekFrom};
use std::path::Path;

pub use error::{ImageError, ImageResult};

/// Types of image containers this crate can identify and extract dimensions from.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImageType {
    /// AV1 Image File Format
    #[cfg(feature = "avif")]
    Avif,
    /// Standard Bitmap
    #[cfg(feature = "bmp")]
    Bmp,
    /// DirectDraw Surface
    #[cfg(feature = "dds")]
    Dds,
    /// Device-Independent Bitmap (a bare BITMAPINFOHEADER-style header with no `BM` magic)
    #[cfg(feature = "dib")]
    Dib,
    /// OpenEXR
    #[cfg(feature = "exr")]
    Exr,
    /// Standard GIF
    #[cfg(feature = "gif")]
    Gif,
    /// High Efficiency Image Container (HEVC-family ISO-BMFF brands)
    #[cfg(feature = "heic")]
    Heic,
    /// High Efficiency Image File format (generic `mif1`/`msf1`/`heif` ISO-BMFF brands)
    #[cfg(feature = "heif")]
    Heif,
    /// Icon file
    #[cfg(feature = "ico")]
    Ico,
    /// JPEG 2000, either the JP2 file wrapper or a raw codestream
    #[cfg(feature = "jp2")]
    Jp2,
    /// Standard JPEG
    #[cfg(feature = "jpeg")]
    Jpeg,
    /// ZSoft Paintbrush
    #[cfg(feature = "pcx")]
    Pcx,
    /// Standard PNG
    #[cfg(feature = "png")]
    Png,
    /// Photoshop Document
    #[cfg(feature = "psd")]
    Psd,
    /// Quite OK Image Format
    /// <https://qoiformat.org/>
    #[cfg(feature = "qoi")]
    Qoi,
    /// Truevision Graphics Adapter
    #[cfg(feature = "tga")]
    Tga,
    /// Standard TIFF
    #[cfg(feature = "tiff")]
    Tiff,
    /// Valve Texture Format
    #[cfg(feature = "vtf")]
    Vtf,
    /// Standard WebP
    #[cfg(feature = "webp")]
    Webp,
    /// GIMP's native XCF format
    #[cfg(feature = "xcf")]
    Xcf,
}

impl ImageType {
    /// Calls the matching per-format parser for this image type.
    fn parse<R: Read + Seek>(&self, reader: &mut R) -> io::Result<(u32, u32)> {
        match self {
            #[cfg(feature = "avif")]
            ImageType::Avif => container::bmff::size(reader),
            #[cfg(feature = "bmp")]
            ImageType::Bmp => formats::bmp::size(reader),
            #[cfg(feature = "dds")]
            ImageType::Dds => formats::dds::size(reader),
            #[cfg(feature = "dib")]
            ImageType::Dib => formats::dib::size(reader),
            #[cfg(feature = "exr")]
            ImageType::Exr => formats::exr::size(reader),
            #[cfg(feature = "gif")]
            ImageType::Gif => formats::gif::size(reader),
            #[cfg(feature = "heic")]
            ImageType::Heic => container::bmff::size(reader),
            #[cfg(feature = "heif")]
            ImageType::Heif => container::bmff::size(reader),
            #[cfg(feature = "ico")]
            ImageType::Ico => formats::ico::size(reader),
            #[cfg(feature = "jp2")]
            ImageType::Jp2 => formats::jp2::size(reader),
            #[cfg(feature = "jpeg")]
            ImageType::Jpeg => formats::jpeg::size(reader),
            #[cfg(feature = "pcx")]
            ImageType::Pcx => formats::pcx::size(reader),
            #[cfg(feature = "png")]
            ImageType::Png => formats::png::size(reader),
            #[cfg(feature = "psd")]
            ImageType::Psd => formats::psd::size(reader),
            #[cfg(feature = "qoi")]
            ImageType::Qoi => formats::qoi::size(reader),
            #[cfg(feature = "tga")]
            ImageType::Tga => formats::tga::size(reader),
            #[cfg(feature = "tiff")]
            ImageType::Tiff => formats::tiff::size(reader),
            #[cfg(feature = "vtf")]
            ImageType::Vtf => formats::vtf::size(reader),
            #[cfg(feature = "webp")]
            ImageType::Webp => formats::webp::size(reader),
            #[cfg(feature = "xcf")]
            ImageType::Xcf => formats::xcf::size(reader),
        }
    }
}

/// Width, height, and detected container format of an image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ImageInfo {
    /// Width of the image in pixels.
    pub width: u32,
    /// Height of the image in pixels.
    pub height: u32,
    /// The container format the image was identified as.
    pub format: ImageType,
}

/// A trait object over any reader that can both `Read` and `Seek`, used to
/// let [`ImageSource::Reader`] hold an already-open handle of any concrete type.
trait ReadSeek: Read + Seek {}
impl<T: Read + Seek> ReadSeek for T {}

/// The three kinds of source [`get_image_size`] accepts, matching the
/// façade's path/buffer/reader entry points one-for-one.
pub enum ImageSource<'a> {
    /// A filesystem path, opened read-only.
    Path(&'a Path),
    /// An in-memory buffer.
    Buffer(&'a [u8]),
    /// An already-open seekable reader.
    Reader(Box<dyn ReadSeek + 'a>),
}

impl<'a> ImageSource<'a> {
    /// Wraps an already-open seekable reader as a source.
    pub fn reader<R: Read + Seek + 'a>(reader: R) -> Self {
        ImageSource::Reader(Box::new(reader))
    }
}

impl<'a> From<&'a Path> for ImageSource<'a> {
    fn from(path: &'a Path) -> Self {
        ImageSource::Path(path)
    }
}

impl<'a> From<&'a str> for ImageSource<'a> {
    fn from(path: &'a str) -> Self {
        ImageSource::Path(Path::new(path))
    }
}

impl<'a> From<&'a [u8]> for ImageSource<'a> {
    fn from(data: &'a [u8]) -> Self {
        ImageSource::Buffer(data)
    }
}

impl<'a> From<&'a Vec<u8>> for ImageSource<'a> {
    fn from(data: &'a Vec<u8>) -> Self {
        ImageSource::Buffer(data.as_slice())
    }
}

/// Get the image size from a path, buffer, or already-open seekable reader.
///
/// This is the single polymorphic entry point described for this crate;
/// [`get_image_size_from_path`], [`get_image_size_from_buffer`], and
/// [`get_image_size_from_reader`] are the same three adapters reachable
/// directly, for callers that already know which kind of source they have.
#[tracing::instrument(skip(source))]
pub fn get_image_size<'a>(source: impl Into<ImageSource<'a>>) -> ImageResult<ImageInfo> {
    match source.into() {
        ImageSource::Path(path) => get_image_size_from_path(path),
        ImageSource::Buffer(data) => get_image_size_from_buffer(data),
        ImageSource::Reader(reader) => get_image_size_from_reader(reader),
    }
}

/// Get the image size from a local file.
///
/// Opens the file read-only and reads only as much of it as the detected
/// format's parser needs.
///
/// # Errors
///
/// Returns an [`ImageError`] if the path can't be opened, the header isn't
/// recognized as a supported format, or the format's parser can't find
/// valid dimensions.
#[tracing::instrument]
pub fn get_image_size_from_path<P: AsRef<Path> + std::fmt::Debug>(
    path: P,
) -> ImageResult<ImageInfo> {
    let file = File::open(path)?;
    get_image_size_from_reader(file)
}

/// Get the image size from an in-memory buffer.
///
/// # Errors
///
/// Returns an [`ImageError`] if the header isn't recognized as a supported
/// format, or the format's parser can't find valid dimensions.
///
/// # Examples
///
/// ```
/// use imagesize::get_image_size_from_buffer;
///
/// // PNG header with size 123x321
/// let data = [
///     0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A,
///     0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44, 0x52,
///     0x00, 0x00, 0x00, 0x7B, 0x00, 0x00, 0x01, 0x41,
///     0x08, 0x06, 0x00, 0x00, 0x00, 0x9A, 0x38, 0xC4,
/// ];
///
/// let info = get_image_size_from_buffer(&data).unwrap();
/// assert_eq!(info.width, 123);
/// assert_eq!(info.height, 321);
/// ```
#[tracing::instrument(skip(data))]
pub fn get_image_size_from_buffer(data: &[u8]) -> ImageResult<ImageInfo> {
    get_image_size_from_reader(Cursor::new(data))
}

/// Get the image size from an already-open seekable reader.
///
/// # Errors
///
/// Returns an [`ImageError`] if the header isn't recognized as a supported
/// format, or the format's parser can't find valid dimensions.
#[tracing::instrument(skip(reader))]
pub fn get_image_size_from_reader<R: Read + Seek>(reader: R) -> ImageResult<ImageInfo> {
    let mut bounded = util::BoundedReader::new(reader);
    dispatch(&mut bounded)
}

/// Detect → parse → validate, the one path every façade function funnels through.
fn dispatch<R: Read + Seek>(reader: &mut R) -> ImageResult<ImageInfo> {
    reader.seek(SeekFrom::Start(0))?;
    let format = formats::detect(reader)?;
    tracing::debug!(?format, "identified image format");

    reader.seek(SeekFrom::Start(0))?;
    let (width, height) = format
        .parse(reader)
        .map_err(|source| ImageError::Io(source).with_format(format))?;

    if width == 0 || height == 0 {
        return Err(ImageError::ParserError {
            format,
            source: io::Error::new(io::ErrorKind::InvalidData, "image reported a zero dimension"),
        });
    }

    tracing::debug!(width, height, ?format, "parsed image dimensions");
    Ok(ImageInfo {
        width,
        height,
        format,
    })
}
