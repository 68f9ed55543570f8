use crate::error::*;
use crate::spawn::ProcessStrategy;
use libloading::Library;
use std::path::PathBuf;
use std::process::Command;

pub mod registry;

#[cfg(target_os = "macos")]
mod macos;
#[cfg(all(unix, not(target_os = "macos")))]
mod unix;
#[cfg(windows)]
mod windows;

#[cfg(target_os = "macos")]
pub use macos::MacOs as Native;
#[cfg(all(unix, not(target_os = "macos")))]
pub use unix::Unix as Native;
#[cfg(windows)]
pub use windows::Windows as Native;

pub trait Platform
{
    const JAVA_EXE: &'static str;
    const JAVA_SERVER_DL: &'static str;
    const JAVA_CLIENT_DL: &'static str;
    const JLI_DL: &'static str;
    const CLASSPATH_SEPARATOR: &'static str;
    const DEFAULT_STRATEGY: ProcessStrategy;

    /// Best guess at a local JVM installation.
    ///
    /// `Ok(None)` when nothing was found; an error only when the lookup
    /// mechanism could not be started at all.
    fn find_java_home() -> Result<Option<PathBuf>>;

    fn load_library(path: &str) -> Result<Library>;

    fn preload_helper(_path: &str) -> Result<Option<Library>>
    {
        Ok(None)
    }

    fn command(argv: &[&str]) -> Option<Command>;
}

#[cfg(unix)]
pub(crate) fn dlopen_global(path: &str) -> Result<Library>
{
    use libloading::os::unix::{Library as UnixLibrary, RTLD_GLOBAL, RTLD_NOW};

    let lib = unsafe { UnixLibrary::open(Some(path), RTLD_NOW | RTLD_GLOBAL) }
        .map_err(|source| LaunchError::LibraryLoad { path: path.to_string(), source })?;
    Ok(Library::from(lib))
}

#[cfg(unix)]
pub(crate) fn argv_command(argv: &[&str]) -> Option<Command>
{
    let (program, rest) = argv.split_first()?;
    let mut command = Command::new(program);
    command.args(rest);
    Some(command)
}

pub fn first_line(output: &[u8]) -> Option<String>
{
    let text = String::from_utf8_lossy(output);
    let line = text.lines().next()?.trim_end();
    if line.is_empty()
    {
        None
    }
    else
    {
        Some(line.to_string())
    }
}
