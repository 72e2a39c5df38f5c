pub mod render;

pub use render::{format_line, render_tree, RenderOptions, TreeRenderer};
