use crate::platform::{Native, Platform};

pub const JAVA_EXE: &str = <Native as Platform>::JAVA_EXE;
pub const JAVA_SERVER_DL: &str = <Native as Platform>::JAVA_SERVER_DL;
pub const JAVA_CLIENT_DL: &str = <Native as Platform>::JAVA_CLIENT_DL;
pub const JLI_DL: &str = <Native as Platform>::JLI_DL;
pub const CLASSPATH_SEPARATOR: &str = <Native as Platform>::CLASSPATH_SEPARATOR;

pub const ORANGE: &str = "\x1b[33m";
pub const GREEN: &str = "\x1b[32m";
pub const RED: &str = "\x1b[31m";
pub const RESET: &str = "\x1b[0m";
