/// Long-side over short-side ratio of a 10x15 cm print.
pub const TARGET_RATIO: f32 = 1.5;

/// Display pixels the crop rectangle moves per arrow-key press.
pub const NUDGE_STEP: f32 = 5.0;

/// JPEG encode quality for saved crops.
pub const JPEG_QUALITY: u8 = 95;

/// File extensions accepted by the folder scan (matched case-insensitively).
pub const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg"];

/// Subdirectory created inside the source folder for cropped output.
pub const OUTPUT_DIR_NAME: &str = "edited";
