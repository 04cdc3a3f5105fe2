//! Unified error model
use thiserror::Error;

#[derive(Error, Debug)]
pub enum KitError {
    #[error("RENDER/{0}")]
    Render(String),

    #[error("TEMPLATE/{0}")]
    Template(String),

    #[error("REMOTE/{0}")]
    Remote(String),

    #[error("STORE/{0}")]
    Store(String),

    #[error("GATE/{0}")]
    Gate(String),

    #[error("SLOT/{0}")]
    Slot(String),
}
