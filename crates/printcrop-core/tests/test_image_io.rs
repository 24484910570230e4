use image::{Rgb, RgbImage};
use tempfile::TempDir;

use printcrop_core::crop_rect::PixelCropRect;
use printcrop_core::image_io::{load_image, resize_for_display, save_cropped};

/// Write a small PNG with a distinct color per pixel.
fn write_test_png(dir: &TempDir, name: &str, w: u32, h: u32) -> std::path::PathBuf {
    let mut img = RgbImage::new(w, h);
    for y in 0..h {
        for x in 0..w {
            img.put_pixel(x, y, Rgb([x as u8 * 10, y as u8 * 10, 0]));
        }
    }
    let path = dir.path().join(name);
    img.save(&path).unwrap();
    path
}

#[test]
fn test_load_image_dimensions() {
    let dir = TempDir::new().unwrap();
    let path = write_test_png(&dir, "src.png", 6, 4);

    let source = load_image(&path).unwrap();
    assert_eq!(source.width(), 6);
    assert_eq!(source.height(), 4);
}

#[test]
fn test_load_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    assert!(load_image(&dir.path().join("nope.jpg")).is_err());
}

#[test]
fn test_resize_for_display() {
    let dir = TempDir::new().unwrap();
    let path = write_test_png(&dir, "src.png", 8, 6);
    let source = load_image(&path).unwrap();

    let preview = resize_for_display(&source, 4, 3);
    assert_eq!(preview.width(), 4);
    assert_eq!(preview.height(), 3);
}

#[test]
fn test_save_cropped_png_preserves_pixels() {
    let dir = TempDir::new().unwrap();
    let path = write_test_png(&dir, "src.png", 6, 4);
    let source = load_image(&path).unwrap();

    let rect = PixelCropRect {
        x: 1,
        y: 1,
        width: 2,
        height: 2,
    };
    let out = dir.path().join("out.png");
    save_cropped(&source, &rect, &out).unwrap();

    let cropped = load_image(&out).unwrap();
    assert_eq!(cropped.width(), 2);
    assert_eq!(cropped.height(), 2);
    // Top-left of the crop was source pixel (1, 1).
    let rgb = cropped.image.to_rgb8();
    assert_eq!(rgb.get_pixel(0, 0), &Rgb([10, 10, 0]));
    assert_eq!(rgb.get_pixel(1, 1), &Rgb([20, 20, 0]));
}

#[test]
fn test_save_cropped_jpeg_quality_path() {
    let dir = TempDir::new().unwrap();
    let path = write_test_png(&dir, "src.png", 20, 10);
    let source = load_image(&path).unwrap();

    let rect = PixelCropRect {
        x: 2,
        y: 2,
        width: 15,
        height: 6,
    };
    let out = dir.path().join("out.JPG");
    save_cropped(&source, &rect, &out).unwrap();

    // Lossy round trip: only dimensions are exact.
    let cropped = load_image(&out).unwrap();
    assert_eq!(cropped.width(), 15);
    assert_eq!(cropped.height(), 6);
}

#[test]
fn test_save_to_unwritable_path_fails() {
    let dir = TempDir::new().unwrap();
    let path = write_test_png(&dir, "src.png", 4, 4);
    let source = load_image(&path).unwrap();

    let rect = PixelCropRect {
        x: 0,
        y: 0,
        width: 2,
        height: 2,
    };
    let out = dir.path().join("missing-subdir").join("out.jpg");
    assert!(save_cropped(&source, &rect, &out).is_err());
}
