use imagesize::{get_image_size_from_buffer, ImageType};

fn exr_with_data_window(x_min: i32, y_min: i32, x_max: i32, y_max: i32) -> Vec<u8> {
    let mut data = vec![0x76, 0x2f, 0x31, 0x01];
    data.extend_from_slice(&[0u8; 4]); // version field

    // an unrelated attribute first, to exercise the skip-and-continue path
    data.extend_from_slice(b"channels\0");
    data.extend_from_slice(b"chlist\0");
    data.extend_from_slice(&0u32.to_le_bytes());

    data.extend_from_slice(b"dataWindow\0");
    data.extend_from_slice(b"box2i\0");
    data.extend_from_slice(&16u32.to_le_bytes());
    data.extend_from_slice(&x_min.to_le_bytes());
    data.extend_from_slice(&y_min.to_le_bytes());
    data.extend_from_slice(&x_max.to_le_bytes());
    data.extend_from_slice(&y_max.to_le_bytes());

    data.push(0); // end of header marker
    data
}

#[test]
fn exr_data_window_dimensions() {
    let data = exr_with_data_window(0, 0, 1919, 1079);
    let info = get_image_size_from_buffer(&data).unwrap();
    assert_eq!(info.width, 1920);
    assert_eq!(info.height, 1080);
    assert_eq!(info.format, ImageType::Exr);
}

#[test]
fn exr_missing_data_window_errors() {
    let mut data = vec![0x76, 0x2f, 0x31, 0x01];
    data.extend_from_slice(&[0u8; 4]);
    data.push(0); // no attributes at all
    assert!(get_image_size_from_buffer(&data).is_err());
}
