use crate::args::*;
use crate::platform::{Native, Platform};
use serde::{Deserialize, Serialize};
use std::io::{stderr, stdout, Write};
use tracing::{debug, warn};

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProcessStrategy
{
    Replace,
    SpawnAndWait,
}

impl Default for ProcessStrategy
{
    fn default() -> Self
    {
        Native::DEFAULT_STRATEGY
    }
}

pub fn  build_argv<'a>(spec: &LaunchSpec<'a>) -> Vec<&'a str>
{
    let mut argv = Vec::with_capacity(spec.java_opts.len() + spec.program_args.len() + 2);
    argv.push(spec.java_exe);
    argv.extend(&spec.java_opts);
    if let Some(main_class) = spec.main_class
    {
        argv.push(main_class);
    }
    argv.extend(&spec.program_args);
    argv
}

/// The Windows command line: arguments joined by single spaces, no quoting.
/// Arguments containing spaces get split by the child.
pub fn  command_line(argv: &[&str]) -> String
{
    argv.join(" ")
}

#[inline(always)]
fn flush_std()
{
    let _ = stdout().flush();
    let _ = stderr().flush();
}

pub fn  launch_out_of_proc(spec: &LaunchSpec, strategy: ProcessStrategy) -> bool
{
    let argv = build_argv(spec);
    debug!("launching out of process ({strategy:?}): {}", command_line(&argv));
    flush_std();
    match strategy
    {
        ProcessStrategy::SpawnAndWait => spawn_and_wait(&argv),
        ProcessStrategy::Replace => replace_process(&argv),
    }
}

/// Runs the child with inherited stdio and waits for it. On Windows the
/// child is not started suspended for the filesystem virtualisation fix;
/// it runs with the caller's token as is.
pub fn  spawn_and_wait(argv: &[&str]) -> bool
{
    let Some(mut command) = Native::command(argv)
    else
    {
        return false;
    };
    match command.status()
    {
        Ok(status) if status.success() => true,
        Ok(status) =>
        {
            debug!("`{}` exited with {status}", argv[0]);
            false
        }
        Err(err) =>
        {
            warn!("failed to execute `{}`: {err}", argv[0]);
            false
        }
    }
}

/// Execs `argv` with `SIGCHLD` at its default disposition.
///
/// On success this never returns. When exec fails the signal state it
/// touched (`SIGCHLD`, `SIGPIPE` and the thread mask) is put back and the
/// result is `false`: there is no child whose exit status could be
/// inspected, so this path can never report `true`.
#[cfg(unix)]
pub fn  replace_process(argv: &[&str]) -> bool
{
    use nix::sys::signal::{signal, SigHandler, SigSet, Signal};
    use std::os::unix::process::CommandExt;

    let Some(mut command) = Native::command(argv)
    else
    {
        return false;
    };
    let mask = SigSet::thread_get_mask();
    let pipe = unsafe { signal(Signal::SIGPIPE, SigHandler::SigIgn) };
    let child = unsafe { signal(Signal::SIGCHLD, SigHandler::SigDfl) };
    let err = command.exec();
    if let Ok(handler) = child
    {
        let _ = unsafe { signal(Signal::SIGCHLD, handler) };
    }
    if let Ok(handler) = pipe
    {
        let _ = unsafe { signal(Signal::SIGPIPE, handler) };
    }
    if let Ok(mask) = mask
    {
        let _ = mask.thread_set_mask();
    }
    warn!("failed to exec `{}`: {err}", argv[0]);
    false
}

/// Windows cannot replace a process image; the child is waited on instead.
#[cfg(not(unix))]
pub fn  replace_process(argv: &[&str]) -> bool
{
    spawn_and_wait(argv)
}

#[cfg(test)]
mod tests
{
    use super::*;

    fn spec<'a>(exe: &'a str, opts: Vec<&'a str>, main: Option<&'a str>, args: Vec<&'a str>) -> LaunchSpec<'a>
    {
        LaunchSpec
        {
            java_exe:     exe,
            jvm_library:  "",
            jli_library:  "",
            main_class:   main,
            java_opts:    opts,
            program_args: args,
        }
    }

    #[test]
    fn argv_layout()
    {
        let s = spec("java", vec!["-Xmx1g", "-ea"], Some("com.example.Main"), vec!["x", "y"]);
        assert_eq!(build_argv(&s), vec!["java", "-Xmx1g", "-ea", "com.example.Main", "x", "y"]);
        let s = spec("java", vec!["-jar", "app.jar"], None, vec![]);
        assert_eq!(build_argv(&s), vec!["java", "-jar", "app.jar"]);
    }

    #[test]
    fn command_line_does_not_quote()
    {
        assert_eq!(command_line(&["java.exe", "-cp", "C:\\My Libs", "Main"]), "java.exe -cp C:\\My Libs Main");
    }

    #[test]
    fn missing_executable_is_false()
    {
        let s = spec("/nonexistent/bin/java", vec![], Some("Main"), vec![]);
        assert!(!launch_out_of_proc(&s, ProcessStrategy::SpawnAndWait));
    }

    #[cfg(unix)]
    #[test]
    fn exit_status_decides()
    {
        let ok = spec("/bin/sh", vec![], Some("-c"), vec!["exit 0"]);
        assert!(launch_out_of_proc(&ok, ProcessStrategy::SpawnAndWait));
        let bad = spec("/bin/sh", vec![], Some("-c"), vec!["exit 3"]);
        assert!(!launch_out_of_proc(&bad, ProcessStrategy::SpawnAndWait));
    }

    #[cfg(unix)]
    #[test]
    fn failed_exec_returns_false_and_restores_signal_state()
    {
        use nix::sys::signal::{signal, SigHandler, SigSet, Signal};

        extern "C" fn on_child(_: nix::libc::c_int) {}

        let mut blocked = SigSet::empty();
        blocked.add(Signal::SIGUSR2);
        blocked.thread_block().unwrap();
        let before_pipe = unsafe { signal(Signal::SIGPIPE, SigHandler::SigIgn) }.unwrap();
        let before_child = unsafe { signal(Signal::SIGCHLD, SigHandler::Handler(on_child)) }.unwrap();

        let s = spec("/nonexistent/bin/java", vec![], Some("Main"), vec![]);
        assert!(!launch_out_of_proc(&s, ProcessStrategy::Replace));

        let after_child = unsafe { signal(Signal::SIGCHLD, before_child) }.unwrap();
        let after_pipe = unsafe { signal(Signal::SIGPIPE, before_pipe) }.unwrap();
        let mask = SigSet::thread_get_mask().unwrap();
        blocked.thread_unblock().unwrap();
        assert!(matches!(after_child, SigHandler::Handler(_)));
        assert_eq!(after_pipe, SigHandler::SigIgn);
        assert!(mask.contains(Signal::SIGUSR2));
    }
}
