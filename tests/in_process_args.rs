mod common;

use jlaunch::jvm::*;
use jlaunch::LaunchError;
use std::fs;

#[test]
fn program_args_reach_main_in_order()
{
    let Some(jdk) = common::jdk() else { return };
    let out = jdk.out_file();
    let out_opt = format!("-Decho.out={}", out.display());
    let spec = jdk.spec("Echo", &[&out_opt, "-Xmx64m"], &["a b", "héllo", ""]);

    assert!(launch_in_proc(&spec).unwrap());
    assert_eq!(fs::read_to_string(&out).unwrap(), "a b|héllo|");

    assert!(vm_created());
    assert!(matches!(launch_in_proc(&spec), Err(LaunchError::VmAlreadyCreated)));
}
