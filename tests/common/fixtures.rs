//! Test fixtures: synthetic images and their PNG encodings.

use block_resize::RasterImage;
use blockscale::services::encode_png;

pub const RED: [u8; 3] = [255, 0, 0];
pub const BLUE: [u8; 3] = [0, 0, 255];

/// Rows alternate `even` / `odd`, starting with `even` on row 0
pub fn striped_rows(width: u32, height: u32, even: &[u8], odd: &[u8]) -> RasterImage {
    let mut image = RasterImage::new(width, height, even.len() as u8, 1);
    for y in 0..height {
        let colour = if y % 2 == 0 { even } else { odd };
        for x in 0..width {
            image.set_pixel(x, y, colour);
        }
    }
    image
}

/// RGBA image whose pixel bytes encode their own coordinates
pub fn coordinate_image(width: u32, height: u32) -> RasterImage {
    let mut image = RasterImage::new(width, height, 4, 1);
    for y in 0..height {
        for x in 0..width {
            image.set_pixel(x, y, &[x as u8, y as u8, (x ^ y) as u8, 255]);
        }
    }
    image
}

/// Encode a fixture as PNG bytes
pub fn png_bytes(image: &RasterImage) -> Vec<u8> {
    encode_png(image).expect("fixture should encode")
}

/// Write a fixture PNG into `dir` and return its path
pub fn write_png(dir: &std::path::Path, name: &str, image: &RasterImage) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, png_bytes(image)).expect("fixture should be written");
    path
}
