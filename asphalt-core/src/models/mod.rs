mod dimension;
mod field;
mod menu;
mod price_range;

pub use dimension::{Dimension, DimensionError};
pub use field::Field;
pub use menu::{MenuEffect, MenuEvent, MenuState};
pub use price_range::PriceRange;
