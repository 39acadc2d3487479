//! Template engine seam and the MiniJinja implementation behind it.

pub mod filters;
mod interface;
mod minijinja;

pub use interface::TemplateRenderer;
pub use minijinja::MiniJinjaRenderer;
