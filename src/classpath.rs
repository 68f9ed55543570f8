use crate::consts::CLASSPATH_SEPARATOR;
use std::fs;
use std::path::Path;

#[inline(always)]
pub fn  class_to_path(s: &str) -> String
{
    s.replace('.', "/")
}

pub fn  expand_classpath(paths: &[String]) -> String
{
    let mut entries = Vec::new();
    for path in paths
    {
        if let Some(dir) = path.strip_suffix("/*")
        {
            let mut jars: Vec<String> = match fs::read_dir(dir)
            {
                Ok(read_dir) => read_dir
                    .flatten()
                    .map(|entry| entry.path())
                    .filter(|p| is_jar(p))
                    .map(|p| p.to_string_lossy().to_string())
                    .collect(),
                Err(_) => Vec::new(),
            };
            jars.sort();
            entries.extend(jars);
        }
        else
        {
            entries.push(path.clone());
        }
    }
    entries.join(CLASSPATH_SEPARATOR)
}

#[inline(always)]
pub fn  classpath_option(paths: &[String]) -> Option<String>
{
    let classpath = expand_classpath(paths);
    if classpath.is_empty()
    {
        None
    }
    else
    {
        Some(format!("-Djava.class.path={classpath}"))
    }
}

#[inline(always)]
pub fn  is_jar(p: &Path) -> bool
{
    p.extension().is_some_and(|ext| ext == "jar")
}
