use imagesize::{get_image_size_from_buffer, ImageType};

#[test]
fn ico_first_entry_dimensions() {
    let mut data = vec![0x00, 0x00, 0x01, 0x00];
    data.extend_from_slice(&2u16.to_le_bytes()); // entry count
    data.push(32); // width
    data.push(16); // height
    let info = get_image_size_from_buffer(&data).unwrap();
    assert_eq!(info.width, 32);
    assert_eq!(info.height, 16);
    assert_eq!(info.format, ImageType::Ico);
}

#[test]
fn ico_zero_byte_means_256() {
    let mut data = vec![0x00, 0x00, 0x01, 0x00];
    data.extend_from_slice(&1u16.to_le_bytes());
    data.push(0); // width byte 0 -> 256
    data.push(0); // height byte 0 -> 256
    let info = get_image_size_from_buffer(&data).unwrap();
    assert_eq!(info.width, 256);
    assert_eq!(info.height, 256);
}
