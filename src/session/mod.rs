pub mod drag;
pub mod editor;
