use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The element the application should be mounted into does not exist in the document.
    #[error("mount target '{0}' does not exist in the document")]
    MountTargetMissing(String),

    #[error("unsupported mount selector '{0}'")]
    InvalidSelector(String),

    #[error("a component named '{0}' is already registered")]
    DuplicateComponent(&'static str),

    #[error("'{0}' is not a valid component name")]
    InvalidComponentName(&'static str),

    /// The application can only be started once per page.
    #[error("the application was already started")]
    AlreadyStarted,

    #[error("no document available")]
    NoDocument,

    #[error("DOM operation failed: {0}")]
    Dom(String),

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}
