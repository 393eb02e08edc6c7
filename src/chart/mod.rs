pub mod multiplier;
pub mod table;
pub mod types;

pub use multiplier::{ChartError, Multiplier};
pub use table::TypeChart;
pub use types::{TypeId, TYPE_COUNT};
