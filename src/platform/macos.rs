use super::*;
use tracing::debug;

const JAVA_HOME_TOOL: &str = "/usr/libexec/java_home";

pub struct MacOs;

impl Platform for MacOs
{
    const JAVA_EXE: &'static str = "java";
    const JAVA_SERVER_DL: &'static str = "/lib/server/libjvm.dylib";
    const JAVA_CLIENT_DL: &'static str = "/lib/client/libjvm.dylib";
    const JLI_DL: &'static str = "/lib/jli/libjli.dylib";
    const CLASSPATH_SEPARATOR: &'static str = ":";
    const DEFAULT_STRATEGY: ProcessStrategy = ProcessStrategy::Replace;

    fn find_java_home() -> Result<Option<PathBuf>>
    {
        let output = Command::new(JAVA_HOME_TOOL)
            .output()
            .map_err(|source| LaunchError::Discovery { tool: JAVA_HOME_TOOL.to_string(), source })?;
        if !output.status.success()
        {
            debug!("{JAVA_HOME_TOOL} exited with {}", output.status);
        }
        Ok(first_line(&output.stdout).map(PathBuf::from))
    }

    fn load_library(path: &str) -> Result<Library>
    {
        dlopen_global(path)
    }

    /// libjli must be resident first, otherwise loading libjvm resolves to
    /// the system-wide Java instead of the requested one.
    fn preload_helper(path: &str) -> Result<Option<Library>>
    {
        if path.is_empty()
        {
            return Ok(None);
        }
        dlopen_global(path).map(Some)
    }

    fn command(argv: &[&str]) -> Option<Command>
    {
        argv_command(argv)
    }
}
