use crate::args::*;
use crate::classpath::*;
use crate::config::*;
use crate::consts::*;
use crate::host::*;
use crate::jvm::*;
use crate::locate::*;
use crate::spawn::*;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchPlan
{
    pub java_exe:     String,
    pub jvm_library:  String,
    pub jli_library:  String,
    pub main_class:   String,
    pub java_opts:    Vec<String>,
    pub program_args: Vec<String>,
}

impl LaunchPlan
{
    pub fn spec(&self) -> LaunchSpec<'_>
    {
        LaunchSpec
        {
            java_exe:     &self.java_exe,
            jvm_library:  &self.jvm_library,
            jli_library:  &self.jli_library,
            main_class:   Some(self.main_class.as_str()).filter(|c| !c.is_empty()),
            java_opts:    self.java_opts.iter().map(String::as_str).collect(),
            program_args: self.program_args.iter().map(String::as_str).collect(),
        }
    }
}

#[inline(always)]
pub fn  init(config: &Config) -> Result<(), Box<dyn std::error::Error>>
{
    if fs::metadata(CONF_FILE).is_ok()
    {
        eprintln!("{ORANGE}[INIT]{RESET} {CONF_FILE} already exists");
        return Ok(());
    }
    let mut config = config.clone();
    if config.java_home.is_none()
    {
        config.java_home = locate_java_home()?.map(|p| p.to_string_lossy().to_string());
    }
    config.write()?;
    eprintln!("{GREEN}[INIT]{RESET} Wrote {CONF_FILE}");
    Ok(())
}

fn resolve_home(config: &Config) -> Result<Option<PathBuf>, Box<dyn std::error::Error>>
{
    match &config.java_home
    {
        Some(home) => Ok(Some(PathBuf::from(home))),
        None => Ok(locate_java_home()?),
    }
}

pub fn  locate(config: &Config) -> Result<(), Box<dyn std::error::Error>>
{
    match resolve_home(config)?
    {
        Some(home) =>
        {
            println!("{}", home.display());
            match find_libjvm(&home, config.vm)
            {
                Ok(lib) => eprintln!("{GREEN}[LOCATE]{RESET} libjvm: {}", lib.display()),
                Err(e) => eprintln!("{ORANGE}[LOCATE]{RESET} {e}"),
            }
            Ok(())
        }
        None => Err(format!("{RED}[LOCATE]{RESET} No JVM found").into()),
    }
}

pub fn  consts()
{
    for (name, value) in JavaSupport::constants()
    {
        println!("{name} = {value:?}");
    }
}

pub fn  plan(target: &str, user_args: &[String], config: &Config, mode: LaunchMode) -> Result<LaunchPlan, Box<dyn std::error::Error>>
{
    let home = match (mode, &config.java_exe, &config.jvm_library)
    {
        (LaunchMode::OutOfProcess, Some(_), _) => None,
        (LaunchMode::InProcess, _, Some(_)) if config.jli_library.is_some() || JLI_DL.is_empty() => None,
        _ => resolve_home(config)?,
    };
    let java_exe = match (&config.java_exe, &home)
    {
        (Some(exe), _) => exe.clone(),
        (None, Some(home)) => java_exe_in(home).to_string_lossy().to_string(),
        (None, None) => JAVA_EXE.to_string(),
    };
    let jvm_library = match (&config.jvm_library, &home, mode)
    {
        (Some(lib), _, _) => lib.clone(),
        (None, _, LaunchMode::OutOfProcess) => String::new(),
        (None, Some(home), LaunchMode::InProcess) => find_libjvm(home, config.vm)?.to_string_lossy().to_string(),
        (None, None, LaunchMode::InProcess) =>
        {
            return Err(format!("{RED}[LAUNCH]{RESET} No JVM home found, set java_home or JAVA_HOME").into());
        }
    };
    let jli_library = match (&config.jli_library, &home)
    {
        (Some(lib), _) => lib.clone(),
        (None, Some(home)) => jli_library_in(home),
        (None, None) => String::new(),
    };

    let mut java_opts: Vec<String> = classpath_option(&config.classpath).into_iter().collect();
    java_opts.extend(config.args.jvm.iter().flatten().cloned());
    let main_class = if is_jar(Path::new(target))
    {
        if mode == LaunchMode::InProcess
        {
            return Err(format!("{RED}[LAUNCH]{RESET} Cannot run {target} in process, give its main class").into());
        }
        java_opts.push("-jar".to_string());
        java_opts.push(target.to_string());
        String::new()
    }
    else
    {
        target.to_string()
    };
    let program_args = config.args.program.iter().flatten().chain(user_args).cloned().collect();

    Ok(LaunchPlan { java_exe, jvm_library, jli_library, main_class, java_opts, program_args })
}

pub fn  run(target: Option<&String>, user_args: &[String], config: &Config, mode: LaunchMode) -> Result<(), Box<dyn std::error::Error>>
{
    let target = match target.or(config.entry_point.as_ref())
    {
        Some(t) => t,
        None => return Err(format!("{RED}[RUNNER]{RESET} No entry point").into()),
    };
    let plan = plan(target, user_args, config, mode)?;
    let spec = plan.spec();
    match mode
    {
        LaunchMode::InProcess => eprintln!("{ORANGE}[RUNNER]{RESET} {target} in process via {}", spec.jvm_library),
        LaunchMode::OutOfProcess => eprintln!("{ORANGE}[RUNNER]{RESET} {}", command_line(&build_argv(&spec))),
    }
    let ok = match mode
    {
        LaunchMode::InProcess => launch_in_proc(&spec)?,
        LaunchMode::OutOfProcess => launch_out_of_proc(&spec, config.strategy),
    };
    if !ok
    {
        return Err(format!("{RED}[RUNNER]{RESET} {target} did not finish successfully").into());
    }
    eprintln!("{GREEN}[RUNNER OK]{RESET}");
    Ok(())
}

pub fn  help()
{
    println!("{GREEN}jlaunch - start a JVM as a process or inside this one{RESET}");
    println!();
    println!("{ORANGE}Usage:{RESET}");
    println!("  jlaunch <command> [args]");
    println!();
    println!("{ORANGE}Available Commands:{RESET}");
    println!("  init                           Writes {CONF_FILE} with the discovered JVM home");
    println!("  locate                         Prints the JVM home and its libjvm");
    println!("  consts                         Prints the platform defaults");
    println!("  run [MainClass|app.jar] [-- args]    Launches using the configured mode");
    println!("  exec [MainClass] [-- args]     Launches in this process through JNI");
    println!("  system [MainClass|app.jar] [-- args] Launches java as its own process");
    println!("  --help                         Displays this help message");
    println!();
    println!("{ORANGE}Quirks & Notes:{RESET}");
    println!("  - Only one JVM can be created per process and it is never destroyed.");
    println!("  - -client and -server are launcher flags and are rejected by exec.");
    println!("  - On Unix, system replaces this process unless strategy = \"spawn_and_wait\".");
    println!("  - On Windows the command line is not quoted; avoid spaces in arguments.");
    println!("  - JAVA_HOME wins over the platform lookup; java_home in {CONF_FILE} wins over both.");
    println!("  - Set {} to override log_level.", crate::trace::LOG_ENV);
    println!();
    println!("{ORANGE}Example:{RESET}");
    println!("  jlaunch init");
    println!("  jlaunch exec com.example.app.Main -- --port 8080");
    println!("  jlaunch system releases/app-0.0.1.jar");
    println!();
}

#[cfg(test)]
mod tests
{
    use super::*;

    fn config() -> Config
    {
        Config
        {
            java_home:   Some("/nonexistent/jdk".to_string()),
            classpath:   vec!["bin".to_string()],
            args:        ArgCnf
            {
                jvm:     Some(vec!["-Xmx64m".to_string()]),
                program: Some(vec!["--verbose".to_string()]),
            },
            ..Config::default()
        }
    }

    #[test]
    fn out_of_process_plan()
    {
        let plan = plan("com.example.Main", &["x".to_string()], &config(), LaunchMode::OutOfProcess).unwrap();
        assert_eq!(PathBuf::from(&plan.java_exe), Path::new("/nonexistent/jdk").join("bin").join(JAVA_EXE));
        assert_eq!(plan.jvm_library, "");
        assert_eq!(plan.main_class, "com.example.Main");
        assert_eq!(plan.java_opts, vec!["-Djava.class.path=bin", "-Xmx64m"]);
        assert_eq!(plan.program_args, vec!["--verbose", "x"]);
        let spec = plan.spec();
        assert_eq!(build_argv(&spec).len(), 1 + 2 + 1 + 2);
    }

    #[test]
    fn jar_targets_use_dash_jar()
    {
        let plan = plan("app.jar", &[], &config(), LaunchMode::OutOfProcess).unwrap();
        assert_eq!(plan.main_class, "");
        assert_eq!(plan.spec().main_class, None);
        assert_eq!(&plan.java_opts[plan.java_opts.len() - 2..], ["-jar", "app.jar"]);
        assert!(super::plan("app.jar", &[], &config(), LaunchMode::InProcess).is_err());
    }

    #[test]
    fn in_process_needs_libjvm()
    {
        let err = plan("Main", &[], &config(), LaunchMode::InProcess).unwrap_err();
        assert!(err.to_string().contains("not found"));
        let mut conf = config();
        conf.jvm_library = Some("/nonexistent/jdk/lib/server/libjvm.so".to_string());
        let plan = plan("Main", &[], &conf, LaunchMode::InProcess).unwrap();
        assert_eq!(plan.jvm_library, "/nonexistent/jdk/lib/server/libjvm.so");
    }

    #[test]
    fn run_without_entry_point()
    {
        let err = run(None, &[], &config(), LaunchMode::OutOfProcess).unwrap_err();
        assert!(err.to_string().contains("No entry point"));
    }

    #[cfg(unix)]
    #[test]
    fn run_reports_failure()
    {
        let conf = Config
        {
            java_exe:  Some("/bin/sh".to_string()),
            classpath: Vec::new(),
            strategy:  ProcessStrategy::SpawnAndWait,
            ..Config::default()
        };
        assert!(run(Some(&"-c".to_string()), &["exit 0".to_string()], &conf, LaunchMode::OutOfProcess).is_ok());
        assert!(run(Some(&"-c".to_string()), &["exit 2".to_string()], &conf, LaunchMode::OutOfProcess).is_err());
    }
}
