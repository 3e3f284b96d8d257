mod build;
mod anchor;

pub use build::{handle_build_command, render_toc};
pub use anchor::{handle_anchor_command, anchors_for};
