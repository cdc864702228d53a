use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Missing {}", .0.display())]
    MissingInput(PathBuf),

    #[error("Error: {0}")]
    Io(#[from] std::io::Error),
}
