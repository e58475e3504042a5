//! Input handling: validation, probing, decoding, and collection.

mod decoder;
mod probe;
mod scanner;

pub use decoder::{decode, AlphaMode};
pub use probe::{is_supported, probe, ImageInfo, SUPPORTED_EXTENSIONS};
pub use scanner::collect_inputs;
