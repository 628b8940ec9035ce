pub mod driver;
pub mod generator;
pub mod printer;

pub use driver::Simulation;
pub use generator::PassengerGenerator;
