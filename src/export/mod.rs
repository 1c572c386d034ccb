pub mod flow;
pub mod target;
