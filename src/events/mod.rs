pub mod backdrop;
pub mod carousel;

pub use backdrop::wire_backdrop_handlers;
pub use carousel::{wire_carousel_handlers, CarouselWiring};
