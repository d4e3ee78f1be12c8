pub mod breakdown;
pub mod mock;
pub mod result;

pub use breakdown::*;
pub use mock::*;
pub use result::*;
