pub mod codec;
pub mod image_ref;
