pub mod data;
pub mod error;
pub mod io;
pub mod vertex;

pub use data::*;
pub use error::*;
pub use io::*;
pub use vertex::*;
