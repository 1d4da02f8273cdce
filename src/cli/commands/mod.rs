//! Command implementations

mod init;
mod list;
mod run;

pub use init::init;
pub use list::list;
pub use run::run;
