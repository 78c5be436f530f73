//! Error types for mod selection and user input.

use thiserror::Error;

/// Errors raised while resolving and filtering mods.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModError {
    /// A group name that is not in the server catalog
    #[error("Unknown Server Group: {0}")]
    UnknownServerGroup(String),

    /// A mod name that matches neither a catalog mod nor a client mod
    #[error("Unknown Mod: {0}")]
    UnknownMod(String),

    /// Two mods share a CLI name. Only a broken catalog or config can cause this,
    /// so the name resolver panics with it instead of returning it.
    #[error("Invalid config state: multiple mods share the same CLI name: {0}")]
    DuplicateCliName(String),
}

/// Errors raised while reading interactive input.
#[derive(Error, Debug)]
pub enum InputError {
    /// The answer was rejected; the prompt asks again
    #[error("{0}")]
    Validation(String),

    #[error("input closed before an answer was given")]
    Eof,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl InputError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
