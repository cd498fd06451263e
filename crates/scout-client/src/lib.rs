pub mod hasdata;

pub use hasdata::HasDataClient;
