use imagesize::{get_image_size_from_buffer, ImageType};

#[test]
fn bare_dib_header() {
    let mut data = Vec::new();
    data.extend_from_slice(&40u32.to_le_bytes());
    data.extend_from_slice(&8i32.to_le_bytes());
    data.extend_from_slice(&8i32.to_le_bytes());
    let info = get_image_size_from_buffer(&data).unwrap();
    assert_eq!(info.width, 8);
    assert_eq!(info.height, 8);
    assert_eq!(info.format, ImageType::Dib);
}

#[test]
fn unknown_header_size_is_rejected() {
    let mut data = Vec::new();
    data.extend_from_slice(&999u32.to_le_bytes());
    data.extend_from_slice(&[0u8; 16]);
    assert!(get_image_size_from_buffer(&data).is_err());
}
