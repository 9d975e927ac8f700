use imagesize::{get_image_size_from_buffer, ImageType};

#[test]
fn psd_height_before_width() {
    let mut data = b"8BPS".to_vec();
    data.extend_from_slice(&[0u8; 10]); // version, reserved, channel count
    data.extend_from_slice(&300u32.to_be_bytes()); // height
    data.extend_from_slice(&200u32.to_be_bytes()); // width
    let info = get_image_size_from_buffer(&data).unwrap();
    assert_eq!(info.width, 200);
    assert_eq!(info.height, 300);
    assert_eq!(info.format, ImageType::Psd);
}
