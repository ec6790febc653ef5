//! Speech balloons, `.cow` art and ANSI decorations.

pub mod art;
pub mod assets;
pub mod cli;
pub mod cowsay;
pub mod decoration;
pub mod error;
pub mod render;
pub mod width;

pub use error::CowError;
pub use render::{render, Cow};
