use imagesize::{get_image_size_from_buffer, ImageType};

#[test]
fn webp_vp8x_1920x1080() {
    let mut data = b"RIFF".to_vec();
    data.extend_from_slice(&0u32.to_le_bytes()); // RIFF chunk size, unused
    data.extend_from_slice(b"WEBP");
    data.extend_from_slice(b"VP8X");
    data.extend_from_slice(&10u32.to_le_bytes()); // chunk size
    data.push(0); // flags
    data.extend_from_slice(&[0u8; 3]); // reserved
    data.extend_from_slice(&[0x7F, 0x07, 0x00]); // width - 1 = 1919, LE u24
    data.extend_from_slice(&[0x37, 0x04, 0x00]); // height - 1 = 1079, LE u24

    let info = get_image_size_from_buffer(&data).unwrap();
    assert_eq!(info.width, 1920);
    assert_eq!(info.height, 1080);
    assert_eq!(info.format, ImageType::Webp);
}

#[test]
fn webp_vp8l_lossless() {
    let mut data = b"RIFF".to_vec();
    data.extend_from_slice(&0u32.to_le_bytes());
    data.extend_from_slice(b"WEBP");
    data.extend_from_slice(b"VP8L");
    data.extend_from_slice(&0u32.to_le_bytes());
    data.push(0x2F);
    // width = (bits & 0x3FFF) + 1, height = ((bits >> 14) & 0x3FFF) + 1
    let width_minus1: u32 = 63; // -> width 64
    let height_minus1: u32 = 31; // -> height 32
    let bits = width_minus1 | (height_minus1 << 14);
    data.extend_from_slice(&bits.to_le_bytes());

    let info = get_image_size_from_buffer(&data).unwrap();
    assert_eq!(info.width, 64);
    assert_eq!(info.height, 32);
}
