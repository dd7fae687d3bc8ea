mod args;
mod install;
mod params;
mod resolved_command;

pub use args::{Args, Command, parse_args};
pub use install::{InstallReport, install_with, run_install};
pub use params::InstallParams;
pub use resolved_command::resolve_command;
