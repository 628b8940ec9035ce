pub mod clock;
pub mod controller;
pub mod request_store;
pub mod scheduler;
pub mod scheduler_tests;
pub mod status;

pub use clock::SystemClock;
pub use controller::Elevator;
pub use status::StatusReport;
