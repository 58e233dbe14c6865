pub mod beacon;
pub mod config;
pub mod population;
pub mod results;
pub mod utils;
