pub mod render;

pub use render::{feedback, render_final_summary, render_view, Labels};
