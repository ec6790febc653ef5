use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CowError {
    #[error("cow {name:?} not found in {location}")]
    TemplateNotFound {
        name: String,
        location: String,
        #[source]
        source: Option<io::Error>,
    },

    #[error("invalid cow file {name:?}: no art found")]
    EmptyArt { name: String },

    #[error("no cows available in {location}")]
    NoTemplatesAvailable { location: String },

    #[error("failed to read directory {path:?}")]
    ListTemplates {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
