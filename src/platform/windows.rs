use super::*;
use std::os::windows::process::CommandExt;

const JDK_KEY: &str = r"HKLM\Software\JavaSoft\Java Development Kit";
const JRE_KEY: &str = r"HKLM\Software\JavaSoft\Java Runtime Environment";

pub struct Windows;

impl Platform for Windows
{
    const JAVA_EXE: &'static str = "java.exe";
    const JAVA_SERVER_DL: &'static str = r"\bin\server\jvm.dll";
    const JAVA_CLIENT_DL: &'static str = r"\bin\client\jvm.dll";
    const JLI_DL: &'static str = "";
    const CLASSPATH_SEPARATOR: &'static str = ";";
    const DEFAULT_STRATEGY: ProcessStrategy = ProcessStrategy::SpawnAndWait;

    fn find_java_home() -> Result<Option<PathBuf>>
    {
        for key in [JDK_KEY, JRE_KEY]
        {
            if let Some(home) = java_home_from_registry(key)?
            {
                return Ok(Some(PathBuf::from(home)));
            }
        }
        Ok(None)
    }

    fn load_library(path: &str) -> Result<Library>
    {
        unsafe { Library::new(path) }
            .map_err(|source| LaunchError::LibraryLoad { path: path.to_string(), source })
    }

    fn command(argv: &[&str]) -> Option<Command>
    {
        let (program, rest) = argv.split_first()?;
        let mut command = Command::new(program);
        if !rest.is_empty()
        {
            command.raw_arg(rest.join(" "));
        }
        Some(command)
    }
}

fn java_home_from_registry(key: &str) -> Result<Option<String>>
{
    let Some(version) = registry::query_value(key, "CurrentVersion")?
    else
    {
        return Ok(None);
    };
    registry::query_value(&format!(r"{key}\{version}"), "JavaHome")
}
