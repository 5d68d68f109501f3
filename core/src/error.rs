use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board size must be between 1 and 26")]
    InvalidSize,
}

pub type Result<T> = core::result::Result<T, GameError>;
