use std::io::{Cursor, Write};

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// Placeholder contents for `.bsp` map descriptors.
pub static BSP_DATA: &[u8] = b"IBSP\x2e\x00\x00\x00";

/// Bytes that no image decoder accepts as a TGA.
pub static CORRUPT_TGA: &[u8] = b"\x00\x00\x0a garbage";

/// Encode an RGBA checkerboard of the given size as a TGA image.
pub fn tga_image(width: u32, height: u32) -> Vec<u8> {
    let pixels = RgbaImage::from_fn(width, height, |x, y| {
        if (x / 4 + y / 4) % 2 == 0 {
            Rgba([255, 255, 255, 255])
        } else {
            Rgba([30, 30, 90, 0])
        }
    });

    let mut bytes = Vec::new();
    DynamicImage::ImageRgba8(pixels)
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Tga)
        .unwrap();
    bytes
}

/// Build a zip archive in memory from `(entry name, contents)` pairs.
pub fn pk3_archive(entries: &[(&str, &[u8])]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    for (name, contents) in entries {
        writer
            .start_file(*name, SimpleFileOptions::default())
            .unwrap();
        writer.write_all(contents).unwrap();
    }
    writer.finish().unwrap().into_inner()
}
