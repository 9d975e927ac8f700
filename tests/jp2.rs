use imagesize::{get_image_size_from_buffer, ImageType};

fn box_header(kind: &[u8; 4], content: &[u8]) -> Vec<u8> {
    let mut b = Vec::new();
    b.extend_from_slice(&((8 + content.len()) as u32).to_be_bytes());
    b.extend_from_slice(kind);
    b.extend_from_slice(content);
    b
}

#[test]
fn jp2_signature_box_wrapper() {
    let mut ihdr_content = Vec::new();
    ihdr_content.extend_from_slice(&480u32.to_be_bytes()); // height
    ihdr_content.extend_from_slice(&640u32.to_be_bytes()); // width
    ihdr_content.extend_from_slice(&[0u8; 6]); // bpc, compression, colorspace...

    let ihdr = box_header(b"ihdr", &ihdr_content);
    let jp2h = box_header(b"jp2h", &ihdr);

    let mut data = vec![
        0x00, 0x00, 0x00, 0x0C, 0x6A, 0x50, 0x20, 0x20, 0x0D, 0x0A, 0x87, 0x0A,
    ];
    data.extend_from_slice(&jp2h);

    let info = get_image_size_from_buffer(&data).unwrap();
    assert_eq!(info.width, 640);
    assert_eq!(info.height, 480);
    assert_eq!(info.format, ImageType::Jp2);
}

#[test]
fn jp2_raw_codestream() {
    let mut data = vec![0xFF, 0x4F, 0xFF, 0x51]; // SOC + SIZ marker
    data.extend_from_slice(&41u16.to_be_bytes()); // Lsiz
    data.extend_from_slice(&0u16.to_be_bytes()); // Rsiz
    data.extend_from_slice(&1920u32.to_be_bytes()); // Xsiz
    data.extend_from_slice(&1080u32.to_be_bytes()); // Ysiz
    data.extend_from_slice(&0u32.to_be_bytes()); // XOsiz
    data.extend_from_slice(&0u32.to_be_bytes()); // YOsiz

    let info = get_image_size_from_buffer(&data).unwrap();
    assert_eq!(info.width, 1920);
    assert_eq!(info.height, 1080);
    assert_eq!(info.format, ImageType::Jp2);
}
