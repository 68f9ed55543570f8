use crate::config::VmKind;
use crate::consts::*;
use crate::error::*;
use crate::platform::{Native, Platform};
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

const LINK_DIR: &str = "/usr/bin";

/// What the platform lookup reports, unmodified: the registry `JavaHome` on
/// Windows, `java_home` output on macOS, the `/usr/bin/java` link target
/// elsewhere.
pub fn  find_native_java() -> Result<Option<PathBuf>>
{
    Native::find_java_home()
}

pub fn  locate_java_home() -> Result<Option<PathBuf>>
{
    if let Some(home) = env::var_os("JAVA_HOME").filter(|h| !h.is_empty())
    {
        debug!("using JAVA_HOME={}", Path::new(&home).display());
        return Ok(Some(PathBuf::from(home)));
    }
    Ok(find_native_java()?.map(|p| home_from_launcher(&anchor(&p, Path::new(LINK_DIR)))))
}

pub fn  anchor(target: &Path, link_dir: &Path) -> PathBuf
{
    if target.is_relative()
    {
        link_dir.join(target)
    }
    else
    {
        target.to_path_buf()
    }
}

pub fn  home_from_launcher(path: &Path) -> PathBuf
{
    let resolved = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
    let is_launcher = resolved
        .file_name()
        .is_some_and(|name| name == JAVA_EXE || name == "java");
    let bin = resolved.parent().filter(|p| p.file_name().is_some_and(|n| n == "bin"));
    match (is_launcher, bin.and_then(Path::parent))
    {
        (true, Some(home)) => home.to_path_buf(),
        _ => resolved,
    }
}

#[inline(always)]
fn join_const(home: &Path, rel: &str) -> PathBuf
{
    PathBuf::from(format!("{}{}", home.display(), rel))
}

pub fn  java_exe_in(home: &Path) -> PathBuf
{
    home.join("bin").join(JAVA_EXE)
}

pub fn  jli_library_in(home: &Path) -> String
{
    if JLI_DL.is_empty()
    {
        String::new()
    }
    else
    {
        join_const(home, JLI_DL).to_string_lossy().to_string()
    }
}

pub fn  libjvm_candidates(home: &Path, vm: VmKind) -> Vec<PathBuf>
{
    let rel = match vm
    {
        VmKind::Server => JAVA_SERVER_DL,
        VmKind::Client => JAVA_CLIENT_DL,
    };
    let file = Path::new(rel).file_name().map(PathBuf::from).unwrap_or_default();
    let kind = vm.dir_name();
    let mut out = vec![
        join_const(home, rel),
        home.join("lib").join(kind).join(&file),
        home.join("jre").join("lib").join(kind).join(&file),
    ];
    if cfg!(windows)
    {
        out.push(home.join("jre").join("bin").join(kind).join(&file));
    }
    out.dedup();
    out
}

pub fn  find_libjvm(home: &Path, vm: VmKind) -> Result<PathBuf>
{
    libjvm_candidates(home, vm)
        .into_iter()
        .find(|p| p.is_file())
        .ok_or_else(|| LaunchError::NotFound(format!("{} VM library under {}", vm.dir_name(), home.display())))
}
