use std::io::Cursor;

use imagesize::{get_image_size_from_buffer, get_image_size_from_reader, ImageError};

#[test]
fn unrecognized_bytes_are_unsupported_format() {
    let data = [0xDE, 0xAD, 0xBE, 0xEF, 0x00, 0x01, 0x02, 0x03];
    let err = get_image_size_from_buffer(&data).unwrap_err();
    assert!(matches!(err, ImageError::UnsupportedFormat));
}

#[test]
fn empty_input_is_unsupported_format() {
    let err = get_image_size_from_buffer(&[]).unwrap_err();
    assert!(matches!(err, ImageError::UnsupportedFormat));
}

#[test]
fn truncated_png_is_a_parser_error_not_a_silent_answer() {
    // full signature, but the IHDR length/type/width/height never arrive.
    let data = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
    let err = get_image_size_from_buffer(&data).unwrap_err();
    assert!(matches!(err, ImageError::ParserError { .. }));
}

#[test]
fn buffer_and_reader_adapters_agree() {
    let data = [
        0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
        0x52, 0x00, 0x00, 0x00, 0x02, 0x00, 0x00, 0x00, 0x03, 0x08, 0x02, 0x00, 0x00, 0x00,
    ];
    let from_buffer = get_image_size_from_buffer(&data).unwrap();
    let from_reader = get_image_size_from_reader(Cursor::new(&data[..])).unwrap();
    assert_eq!(from_buffer, from_reader);
}
