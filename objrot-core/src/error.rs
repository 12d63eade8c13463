use std::path::PathBuf;

pub type ObjResult<T> = Result<T, ObjError>;

#[derive(Debug, thiserror::Error)]
pub enum ObjError {
    #[error("failed to access {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: malformed `{directive}` directive: {kind}")]
    Parse {
        line: usize,
        directive: String,
        kind: ParseErrorKind,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("expected {expected} components, found {found}")]
    MissingComponents { expected: usize, found: usize },
    #[error("`{0}` is not a number")]
    InvalidFloat(String),
    #[error("`{0}` is not an integer")]
    InvalidInteger(String),
}
