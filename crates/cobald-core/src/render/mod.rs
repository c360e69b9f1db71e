pub mod sentence_render;

pub use sentence_render::{render_sentence, RenderOptions};
