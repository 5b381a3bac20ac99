pub mod employee;
pub mod holiday;
pub mod macros;
pub mod organization;
pub mod vacation;

pub use employee::*;
pub use holiday::*;
pub use organization::*;
pub use vacation::*;
