use thiserror::Error;

use lemonpos_core::DomainError;
use lemonpos_infra::{CheckoutError, ConfigError, PersistenceError};

use crate::command::ParseError;

/// Anything a command can fail with. Printed inline by the shell.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Checkout(#[from] CheckoutError),
    #[error(transparent)]
    Persistence(#[from] PersistenceError),
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
