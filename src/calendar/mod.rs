mod cell;
mod layout;

pub use cell::*;
pub use layout::*;
