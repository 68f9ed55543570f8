use crate::error::*;
use std::ffi::CString;

pub const MIN_ARGS: usize = 6;
const FIXED_ARGS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostValue
{
    Str(String),
    Int(i64),
}

impl HostValue
{
    pub fn as_str(&self) -> Option<&str>
    {
        match self
        {
            HostValue::Str(s) => Some(s),
            HostValue::Int(_) => None,
        }
    }

    pub fn as_int(&self) -> Option<i64>
    {
        match self
        {
            HostValue::Int(i) => Some(*i),
            HostValue::Str(_) => None,
        }
    }
}

impl From<&str> for HostValue
{
    fn from(s: &str) -> Self
    {
        HostValue::Str(s.to_string())
    }
}

impl From<String> for HostValue
{
    fn from(s: String) -> Self
    {
        HostValue::Str(s)
    }
}

impl From<i64> for HostValue
{
    fn from(i: i64) -> Self
    {
        HostValue::Int(i)
    }
}

pub fn marshal(argv: &[HostValue], offset: usize, count: usize) -> Result<Vec<&str>>
{
    let end = offset.checked_add(count).filter(|end| *end <= argv.len()).ok_or_else(||
    {
        LaunchError::Argument(format!(
            "{count} values requested at offset {offset}, only {} given", argv.len()))
    })?;
    argv[offset..end]
        .iter()
        .enumerate()
        .map(|(i, v)| v.as_str().ok_or_else(||
            LaunchError::Argument(format!("argument {} is not a string", offset + i))))
        .collect()
}

pub fn to_c_strings(strs: &[&str]) -> Result<Vec<CString>>
{
    strs.iter()
        .enumerate()
        .map(|(index, s)| CString::new(*s).map_err(|e|
            LaunchError::StringConstruction { index, reason: e.to_string() }))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchSpec<'a>
{
    pub java_exe:     &'a str,
    pub jvm_library:  &'a str,
    pub jli_library:  &'a str,
    pub main_class:   Option<&'a str>,
    pub java_opts:    Vec<&'a str>,
    pub program_args: Vec<&'a str>,
}

impl<'a> LaunchSpec<'a>
{
    pub fn parse(argv: &'a [HostValue]) -> Result<Self>
    {
        if argv.len() < MIN_ARGS
        {
            return Err(LaunchError::ArgumentCount { given: argv.len(), min: MIN_ARGS });
        }
        let fixed = marshal(argv, 0, 4)?;
        let java_optsc = argv[4].as_int().ok_or_else(||
        {
            LaunchError::Argument("java option count must be an integer".to_string())
        })?;
        let java_optsc = usize::try_from(java_optsc).map_err(|_|
        {
            LaunchError::Argument(format!("negative java option count {java_optsc}"))
        })?;
        let java_opts = marshal(argv, FIXED_ARGS, java_optsc)?;
        let prgm_opts_start = FIXED_ARGS + java_optsc;
        let program_args = marshal(argv, prgm_opts_start, argv.len() - prgm_opts_start)?;
        Ok(Self
        {
            java_exe:     fixed[0],
            jvm_library:  fixed[1],
            jli_library:  fixed[2],
            main_class:   Some(fixed[3]).filter(|c| !c.is_empty()),
            java_opts,
            program_args,
        })
    }
}
