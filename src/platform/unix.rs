use super::*;
use std::fs;
use tracing::debug;

const LAUNCHER: &str = "/usr/bin/java";

#[cfg(target_arch = "x86_64")]
mod dl
{
    pub const SERVER: &str = "/lib/amd64/server/libjvm.so";
    pub const CLIENT: &str = "/lib/amd64/client/libjvm.so";
}
#[cfg(target_arch = "aarch64")]
mod dl
{
    pub const SERVER: &str = "/lib/aarch64/server/libjvm.so";
    pub const CLIENT: &str = "/lib/aarch64/client/libjvm.so";
}
#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
mod dl
{
    pub const SERVER: &str = "/lib/i386/server/libjvm.so";
    pub const CLIENT: &str = "/lib/i386/client/libjvm.so";
}

pub struct Unix;

impl Platform for Unix
{
    const JAVA_EXE: &'static str = "java";
    const JAVA_SERVER_DL: &'static str = dl::SERVER;
    const JAVA_CLIENT_DL: &'static str = dl::CLIENT;
    const JLI_DL: &'static str = "";
    const CLASSPATH_SEPARATOR: &'static str = ":";
    const DEFAULT_STRATEGY: ProcessStrategy = ProcessStrategy::Replace;

    fn find_java_home() -> Result<Option<PathBuf>>
    {
        match fs::read_link(LAUNCHER)
        {
            Ok(target) => Ok(Some(target)),
            Err(e) =>
            {
                debug!("cannot read link {LAUNCHER}: {e}");
                Ok(None)
            }
        }
    }

    fn load_library(path: &str) -> Result<Library>
    {
        dlopen_global(path)
    }

    fn command(argv: &[&str]) -> Option<Command>
    {
        argv_command(argv)
    }
}
