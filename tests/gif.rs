use imagesize::{get_image_size_from_buffer, ImageType};

#[test]
fn gif89a_16x8() {
    let data = [
        0x47, 0x49, 0x46, 0x38, 0x39, 0x61, 0x10, 0x00, 0x08, 0x00, 0x00, 0x00,
    ];
    let info = get_image_size_from_buffer(&data).unwrap();
    assert_eq!(info.width, 16);
    assert_eq!(info.height, 8);
    assert_eq!(info.format, ImageType::Gif);
}

#[test]
fn gif87a_is_also_recognized() {
    let mut data = b"GIF87a".to_vec();
    data.extend_from_slice(&4u16.to_le_bytes());
    data.extend_from_slice(&4u16.to_le_bytes());
    let info = get_image_size_from_buffer(&data).unwrap();
    assert_eq!(info.format, ImageType::Gif);
}
