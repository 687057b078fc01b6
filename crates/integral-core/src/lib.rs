pub mod error;
pub mod validate;

pub mod build;
pub mod config;
pub mod digest;
pub mod grid;
pub mod query;
pub mod synth;
pub mod table;
pub mod verify;

pub use crate::build::build_parallel_with;
pub use crate::build::naive::build_naive;
pub use crate::build::parallel::build_parallel;
pub use crate::build::sequential::build_sequential;
pub use crate::config::{BuildConfig, ParallelStrategy};
pub use crate::error::{Result, SatError};
pub use crate::grid::Grid;
pub use crate::query::{rect_sum, Rect};
pub use crate::table::SummedAreaTable;
