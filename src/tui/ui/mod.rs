mod form;
mod list;
mod render;

pub use render::render;
