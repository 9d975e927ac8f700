use imagesize::{get_image_size_from_buffer, ImageType};

#[test]
fn vtf_dimensions() {
    let mut data = b"VTF\0".to_vec();
    data.extend_from_slice(&[0u8; 12]); // version + header size
    data.extend_from_slice(&256u16.to_le_bytes());
    data.extend_from_slice(&512u16.to_le_bytes());
    let info = get_image_size_from_buffer(&data).unwrap();
    assert_eq!(info.width, 256);
    assert_eq!(info.height, 512);
    assert_eq!(info.format, ImageType::Vtf);
}
