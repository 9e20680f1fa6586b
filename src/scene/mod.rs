//! Scene graph - an explicit, immutable list of draw commands derived from a
//! diagram and a canvas config. Encoders consume it; nothing mutates it.

mod builder;
mod projection;
mod types;

pub use builder::{build_scene, ArrowHead};
pub use projection::Projection;
pub use types::*;
