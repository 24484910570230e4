pub mod consts;
pub mod crop_rect;
pub mod error;
pub mod fit;
pub mod image_io;
pub mod session;
