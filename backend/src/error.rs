use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HostError {
    #[error("Failed to stage static files in {dir}: {source}")]
    Staging {
        dir: String,
        #[source]
        source: io::Error,
    },
}
