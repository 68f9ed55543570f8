#![cfg_attr(not(windows), allow(dead_code))]

use crate::error::*;
use std::process::Command;
use tracing::debug;

const REG_TOOL: &str = "reg";

pub fn query_value(key: &str, name: &str) -> Result<Option<String>>
{
    query_with(REG_TOOL, key, name)
}

fn query_with(tool: &str, key: &str, name: &str) -> Result<Option<String>>
{
    let output = Command::new(tool)
        .args(["query", key, "/v", name])
        .output()
        .map_err(|source| LaunchError::Discovery { tool: tool.to_string(), source })?;
    if !output.status.success()
    {
        debug!("reg query {key} /v {name} failed: {}", output.status);
        return Ok(None);
    }
    Ok(parse_value(&String::from_utf8_lossy(&output.stdout), name))
}

pub fn parse_value(output: &str, name: &str) -> Option<String>
{
    output.lines().find_map(|line|
    {
        let rest = line.trim().strip_prefix(name)?;
        if !rest.starts_with(char::is_whitespace)
        {
            return None;
        }
        let value = rest.trim_start().strip_prefix("REG_SZ")?.trim();
        if value.is_empty() { None } else { Some(value.to_string()) }
    })
}
