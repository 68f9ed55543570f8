use thiserror::Error;

pub type Result<T> = std::result::Result<T, LaunchError>;

#[derive(Debug, Error)]
pub enum LaunchError
{
    #[error("wrong number of arguments (given {given}, expected at least {min})")]
    ArgumentCount { given: usize, min: usize },

    #[error("invalid argument: {0}")]
    Argument(String),

    #[error("failed to run `{tool}`: {source}")]
    Discovery
    {
        tool:   String,
        #[source]
        source: std::io::Error,
    },

    #[error("{0} not found")]
    NotFound(String),

    #[error("failed to load `{path}`: {source}")]
    LibraryLoad
    {
        path:   String,
        #[source]
        source: libloading::Error,
    },

    #[error("entry point `{symbol}` not found: {source}")]
    EntryPointNotFound
    {
        symbol: &'static str,
        #[source]
        source: libloading::Error,
    },

    #[error("JVM creation failed (code {0})")]
    VmCreation(i32),

    #[error("a JVM has already been created in this process")]
    VmAlreadyCreated,

    #[error("{0} is not a valid option")]
    LauncherOnlyOption(String),

    #[error("{0}")]
    ClassNotFound(String),

    #[error("Cannot get main method.")]
    MethodNotFound,

    #[error("NewStringUTF() failed for argument {index}: {reason}")]
    StringConstruction { index: usize, reason: String },

    #[error(transparent)]
    Jni(#[from] jni::errors::Error),
}
