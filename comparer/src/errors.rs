use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ComparerError {
    #[error("no such file: {}", .0.display())]
    MissingFile(PathBuf),
    #[error("invalid color `{0}`, expected #RRGGBB or #RRGGBBAA")]
    InvalidColor(String),
    #[error("{0}")]
    Io(#[from] std::io::Error),
}
