mod image_import;
pub use image_import::*;

mod png_export;
pub use png_export::*;
