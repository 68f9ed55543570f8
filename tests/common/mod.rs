#![allow(dead_code)]

use jlaunch::config::VmKind;
use jlaunch::locate::*;
use jlaunch::LaunchSpec;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

const ECHO: &str = r#"
public class Echo
{
    public static void main(String[] args) throws Exception
    {
        java.nio.file.Path out = java.nio.file.Paths.get(System.getProperty("echo.out"));
        java.nio.file.Files.write(out, String.join("|", args).getBytes("UTF-8"));
    }
}
"#;

const BOOM: &str = r#"
package demo;

public class Boom
{
    public static void main(String[] args)
    {
        throw new IllegalStateException("boom");
    }
}
"#;

pub struct Jdk
{
    pub libjvm:    String,
    pub jli:       String,
    pub classpath: String,
    pub dir:       TempDir,
}

impl Jdk
{
    pub fn spec<'a>(&'a self, main: &'a str, opts: &[&'a str], args: &[&'a str]) -> LaunchSpec<'a>
    {
        let mut java_opts = vec![self.classpath.as_str()];
        java_opts.extend(opts);
        LaunchSpec
        {
            java_exe:     "java",
            jvm_library:  &self.libjvm,
            jli_library:  &self.jli,
            main_class:   Some(main),
            java_opts,
            program_args: args.to_vec(),
        }
    }

    pub fn out_file(&self) -> PathBuf
    {
        self.dir.path().join("echo.out")
    }
}

fn skip(why: String) -> Option<Jdk>
{
    eprintln!("skipping in-process test: {why}");
    None
}

/// A discoverable JDK with `Echo` and `demo.Boom` compiled into a temp dir.
pub fn jdk() -> Option<Jdk>
{
    let home = match locate_java_home()
    {
        Ok(Some(home)) => home,
        Ok(None) => return skip("no JVM home".to_string()),
        Err(e) => return skip(e.to_string()),
    };
    let libjvm = match find_libjvm(&home, VmKind::Server)
    {
        Ok(lib) => lib,
        Err(e) => return skip(e.to_string()),
    };
    let javac = home.join("bin").join(if cfg!(windows) { "javac.exe" } else { "javac" });
    if !javac.is_file()
    {
        return skip(format!("no {}", javac.display()));
    }

    let dir = tempfile::tempdir().unwrap();
    let echo = dir.path().join("Echo.java");
    let boom = dir.path().join("Boom.java");
    fs::write(&echo, ECHO).unwrap();
    fs::write(&boom, BOOM).unwrap();
    let status = Command::new(&javac)
        .arg("-d")
        .arg(dir.path())
        .arg(&echo)
        .arg(&boom)
        .status();
    match status
    {
        Ok(s) if s.success() => {}
        other => return skip(format!("javac failed: {other:?}")),
    }

    Some(Jdk
    {
        libjvm:    libjvm.to_string_lossy().to_string(),
        jli:       jli_library_in(&home),
        classpath: format!("-Djava.class.path={}", dir.path().display()),
        dir,
    })
}
