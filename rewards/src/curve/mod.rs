pub mod accumulator;
pub mod calculator;
pub mod day_index;
pub mod interpolator;
pub mod today;

pub use accumulator::*;
pub use calculator::*;
pub use day_index::*;
pub use interpolator::*;
pub use today::*;
