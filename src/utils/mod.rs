pub mod mime;
pub mod shutdown;

pub use mime::*;
pub use shutdown::*;
