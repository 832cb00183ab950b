use super::*;

use std::io::Cursor;

fn solid_png(width: u32, height: u32, px: [u8; 4]) -> Vec<u8> {
    let data = px.repeat((width * height) as usize);
    let img = image::RgbaImage::from_raw(width, height, data).unwrap();
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn combine_encoded_flattens_and_reencodes() {
    let base = solid_png(2, 2, [255, 0, 0, 255]);
    let top = solid_png(2, 2, [0, 0, 255, 255]);

    let out = combine_encoded(&[base, top], &BlendThreading::default()).unwrap();
    let decoded = decode_rgba(&out).unwrap();
    assert_eq!(decoded.data, [0, 0, 255, 255].repeat(4));
}

#[test]
fn combine_encoded_propagates_decode_errors() {
    let err = combine_encoded(&[b"junk".as_slice()], &BlendThreading::default()).unwrap_err();
    assert!(matches!(err, crate::FlatlayError::Other(_)));
}

#[test]
fn combine_encoded_rejects_mixed_sizes() {
    let base = solid_png(4, 4, [1, 2, 3, 255]);
    let other = solid_png(8, 4, [4, 5, 6, 255]);
    let err = combine_encoded(&[base, other], &BlendThreading::default()).unwrap_err();
    assert!(matches!(
        err,
        crate::FlatlayError::DimensionMismatch { index: 1, .. }
    ));
}
