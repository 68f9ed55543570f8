pub mod args;
pub mod classpath;
pub mod cmds;
pub mod config;
pub mod consts;
pub mod error;
pub mod host;
pub mod jvm;
pub mod locate;
pub mod platform;
pub mod spawn;
pub mod trace;

pub use args::{HostValue, LaunchSpec};
pub use error::{LaunchError, Result};
pub use host::{JavaSupport, LaunchMode};
