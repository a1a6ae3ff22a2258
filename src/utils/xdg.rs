use std::io::Error as IoError;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use snafu::prelude::*;
use xdg::{BaseDirectories, BaseDirectoriesError};

/// XDG base directories, optionally narrowed to an application subdirectory.
pub struct Xdg {
    base: BaseDirectories,
}

impl Xdg {
    /// Use the subdirectory `prefix` of every base directory. An empty prefix
    /// uses the base directories themselves.
    ///
    /// # Errors
    ///
    /// This function will return an error if `$HOME` can not be determined.
    pub fn new<P: AsRef<Path>>(prefix: P) -> Result<Self, XdgError> {
        let base = BaseDirectories::with_prefix(prefix).context(InitSnafu)?;
        Ok(Self { base })
    }

    /// Path of a configuration file, with its parent directories created.
    ///
    /// # Errors
    ///
    /// This function will return an error if the directories can't be created.
    pub fn config_file<P: AsRef<Path>>(&self, file: P) -> Result<PathBuf, XdgError> {
        self.base.place_config_file(file).context(ConfigSnafu)
    }

    /// Path of a file in `$XDG_RUNTIME_DIR`.
    ///
    /// # Errors
    ///
    /// This function will return an error if `$XDG_RUNTIME_DIR` is unset or
    /// unusable.
    pub fn runtime_file<P: AsRef<Path>>(&self, file: P) -> Result<PathBuf, XdgError> {
        self.base.get_runtime_file(file).context(RuntimeSnafu)
    }
}

/// An error for XDG-related operations.
#[derive(Debug, Snafu, Clone)]
#[non_exhaustive]
pub enum XdgError {
    #[snafu(display("Could not get XDG settings"))]
    Init {
        #[snafu(source(from(BaseDirectoriesError, Arc::new)))]
        source: Arc<BaseDirectoriesError>,
    },
    #[snafu(display("Could not create the XDG configuration directory"))]
    Config {
        #[snafu(source(from(IoError, Arc::new)))]
        source: Arc<IoError>,
    },
    #[snafu(display("XDG runtime directory is not available"))]
    Runtime {
        #[snafu(source(from(IoError, Arc::new)))]
        source: Arc<IoError>,
    },
}
