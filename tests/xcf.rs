use imagesize::{get_image_size_from_buffer, ImageType};

#[test]
fn xcf_width_then_height() {
    let mut data = b"gimp xcf ".to_vec();
    data.extend_from_slice(&[b'v', b'0', b'1', b'1', 0]); // version tag + NUL
    data.extend_from_slice(&640u32.to_be_bytes());
    data.extend_from_slice(&480u32.to_be_bytes());
    let info = get_image_size_from_buffer(&data).unwrap();
    assert_eq!(info.width, 640);
    assert_eq!(info.height, 480);
    assert_eq!(info.format, ImageType::Xcf);
}
