pub mod backdrop;
pub mod camera;
pub mod carousel;
pub mod color;
pub mod constants;
pub mod content;
pub mod error;
pub mod geometry;
pub mod particles;
pub mod pointer;
pub mod scene;
pub mod schedule;
pub mod solids;

pub use backdrop::*;
pub use carousel::*;
pub use constants::*;
pub use error::*;
pub use pointer::*;
pub use scene::*;
pub use schedule::*;
