pub mod controller;
pub mod driver;

pub use controller::*;
pub use driver::*;
