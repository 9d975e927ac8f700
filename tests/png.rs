use imagesize::{get_image_size_from_buffer, ImageType};

#[test]
fn png_2x3() {
    let data = [
        0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
        0x52, 0x00, 0x00, 0x00, 0x02, 0x00, 0x00, 0x00, 0x03, 0x08, 0x02, 0x00, 0x00, 0x00,
    ];
    let info = get_image_size_from_buffer(&data).unwrap();
    assert_eq!(info.width, 2);
    assert_eq!(info.height, 3);
    assert_eq!(info.format, ImageType::Png);
}

#[test]
fn png_truncated_errors() {
    let data = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00];
    assert!(get_image_size_from_buffer(&data).is_err());
}
