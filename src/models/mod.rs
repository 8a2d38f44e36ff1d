pub mod quote;
pub mod response;

pub use quote::*;
pub use response::*;
