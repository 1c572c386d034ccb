//! Pure coordinate math shared by the scene builder and the editor session.

pub mod background;
pub mod normalized;
pub mod scale;
