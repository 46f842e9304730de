pub mod trucks;

pub use trucks::TruckFinder;
