use crate::host::LaunchMode;
use crate::spawn::ProcessStrategy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONF_FILE: &str = "jlaunch.toml";

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum VmKind
{
    #[default]
    Server,
    Client,
}

impl VmKind
{
    pub fn dir_name(self) -> &'static str
    {
        match self
        {
            VmKind::Server => "server",
            VmKind::Client => "client",
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ArgCnf
{
    pub jvm:     Option<Vec<String>>,
    pub program: Option<Vec<String>>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config
{
    pub java_home:          Option<String>,
    pub java_exe:           Option<String>,
    pub jvm_library:        Option<String>,
    pub jli_library:        Option<String>,
    pub vm:                 VmKind,
    pub entry_point:        Option<String>,
    pub mode:               LaunchMode,
    pub strategy:           ProcessStrategy,
    pub classpath:          Vec<String>,
    pub log_level:          String,
    pub args:               ArgCnf,
}

impl Default for Config {
    fn default() -> Self
    {
        Config
        {
            java_home:          None,
            java_exe:           None,
            jvm_library:        None,
            jli_library:        None,
            vm:                 VmKind::Server,
            entry_point:        None,
            mode:               LaunchMode::OutOfProcess,
            strategy:           ProcessStrategy::default(),
            classpath:          vec!["bin".to_string(), "lib/*".to_string()],
            log_level:          "warn".to_string(),
            args:               ArgCnf::default(),
        }
    }
}

impl Config
{
    #[inline(always)]
    pub fn load() -> Result<Self, Box<dyn std::error::Error>>
    {
        Self::load_from(CONF_FILE)
    }

    #[inline(always)]
    pub fn write(&self) -> Result<(), Box<dyn std::error::Error>>
    {
        self.write_to(CONF_FILE)
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, Box<dyn std::error::Error>>
    {
        let content: String = fs::read_to_string(path)?;
        let conf: Config = toml::from_str(&content)?;
        Ok(conf)
    }

    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<(), Box<dyn std::error::Error>>
    {
        fs::write(path, toml::to_string(&self)?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn defaults_round_trip_through_toml()
    {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONF_FILE);
        let conf = Config::default();
        conf.write_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), conf);
    }

    #[test]
    fn partial_file_fills_in_defaults()
    {
        let conf: Config = toml::from_str(r#"
            entry_point = "com.example.Main"
            mode = "in_process"
            vm = "client"

            [args]
            jvm = ["-Xmx256m"]
        "#).unwrap();
        assert_eq!(conf.entry_point.as_deref(), Some("com.example.Main"));
        assert_eq!(conf.mode, LaunchMode::InProcess);
        assert_eq!(conf.vm, VmKind::Client);
        assert_eq!(conf.args.jvm, Some(vec!["-Xmx256m".to_string()]));
        assert_eq!(conf.args.program, None);
        assert_eq!(conf.strategy, ProcessStrategy::default());
        assert_eq!(conf.log_level, "warn");
    }

    #[test]
    fn strategy_names()
    {
        let conf: Config = toml::from_str("strategy = \"spawn_and_wait\"").unwrap();
        assert_eq!(conf.strategy, ProcessStrategy::SpawnAndWait);
        assert!(toml::from_str::<Config>("strategy = \"fork\"").is_err());
    }

    #[test]
    fn missing_file_is_an_error()
    {
        assert!(Config::load_from("/nonexistent/jlaunch.toml").is_err());
    }
}
