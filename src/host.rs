use crate::args::*;
use crate::consts::*;
use crate::error::*;
use crate::jvm::launch_in_proc;
use crate::locate::find_native_java;
use crate::spawn::{launch_out_of_proc, ProcessStrategy};
use serde::{Deserialize, Serialize};
use std::io::{stderr, stdout, Write};
use tracing::debug;

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum LaunchMode
{
    InProcess,
    #[default]
    OutOfProcess,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct JavaSupport
{
    pub strategy: ProcessStrategy,
}

impl JavaSupport
{
    pub fn with_strategy(strategy: ProcessStrategy) -> Self
    {
        Self { strategy }
    }

    pub fn constants() -> [(&'static str, &'static str); 4]
    {
        [
            ("JAVA_EXE", JAVA_EXE),
            ("JAVA_SERVER_DL", JAVA_SERVER_DL),
            ("JAVA_CLIENT_DL", JAVA_CLIENT_DL),
            ("JLI_DL", JLI_DL),
        ]
    }

    pub fn find_native_java(&self) -> Result<HostValue>
    {
        let home = find_native_java()?
            .map(|p| p.to_string_lossy().to_string())
            .unwrap_or_default();
        Ok(HostValue::Str(home))
    }

    pub fn exec_java(&self, argv: &[HostValue]) -> Result<bool>
    {
        self.launch(LaunchMode::InProcess, argv)
    }

    pub fn system_java(&self, argv: &[HostValue]) -> Result<bool>
    {
        self.launch(LaunchMode::OutOfProcess, argv)
    }

    pub fn launch(&self, mode: LaunchMode, argv: &[HostValue]) -> Result<bool>
    {
        let _ = stdout().flush();
        let _ = stderr().flush();
        let spec = LaunchSpec::parse(argv)?;
        debug!(
            "{mode:?} launch of {:?}: {} java option(s), {} program argument(s)",
            spec.main_class, spec.java_opts.len(), spec.program_args.len()
        );
        match mode
        {
            LaunchMode::InProcess => launch_in_proc(&spec),
            LaunchMode::OutOfProcess => Ok(launch_out_of_proc(&spec, self.strategy)),
        }
    }
}
