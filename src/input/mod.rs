mod detail;
mod schedule_file;
mod settings;

pub use detail::*;
pub use schedule_file::*;
pub use settings::*;
