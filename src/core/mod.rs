pub mod exchange;
pub mod filter;
pub mod seed;
pub mod store;
pub mod zone2;

pub use filter::RaceFilter;
pub use store::RaceStore;
pub use zone2::Zone2Logic;
