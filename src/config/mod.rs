mod content;
mod reader;

use std::path::{Path, PathBuf};

pub use content::{
    Configuration, DurationContent, MessageContent, NotificationContent, RuntimeContent,
};
pub use reader::{ReadContentError, DEFAULT_CONTENT};

use snafu::prelude::*;
use toml::de::Error as DeError;

use crate::utils::xdg::{Xdg, XdgError};

use reader::ContentReader;

/// Name of the socket file in the XDG runtime directory.
pub const SOCKET_NAME: &str = "pomodoro.sock";

/// Socket path used when no XDG runtime directory is available.
pub const FALLBACK_SOCKET_PATH: &str = "/tmp/pomodoro.sock";

/// Name of the configuration file in the XDG configuration directory.
pub const CONFIG_NAME: &str = "config.toml";

/// An error type for loading the TOML configuration.
#[derive(Debug, Snafu, Clone)]
#[non_exhaustive]
pub enum LoadConfigurationError {
    #[snafu(display("Could not locate the configuration file"))]
    XdgConfig { source: XdgError },
    #[snafu(display("Could not read the configuration file"))]
    Read { source: ReadContentError },
    #[snafu(display("Configuration is not valid TOML for this program"))]
    Parse { source: DeError },
}

/// Parse the configuration at `path`. With `create_new`, a missing file is
/// first written from [`DEFAULT_CONTENT`].
///
/// # Errors
///
/// This function will return an error if the file can't be read or its
/// content is invalid.
pub fn load<P: AsRef<Path>>(
    path: P,
    create_new: bool,
) -> Result<Configuration, LoadConfigurationError> {
    let content = ContentReader::new(path.as_ref(), create_new)
        .read()
        .context(ReadSnafu)?;
    toml::from_str(&content).context(ParseSnafu)
}

/// Parse a file the user pointed at. A missing file is an error.
///
/// # Errors
///
/// See [`load`].
pub fn load_with_path<P: AsRef<Path>>(path: P) -> Result<Configuration, LoadConfigurationError> {
    load(path, false)
}

/// Parse `$XDG_CONFIG_HOME/<app_name>/config.toml`, creating it on first use.
///
/// # Errors
///
/// See [`load`]. Also fails when the XDG directory can't be created.
pub fn load_with_xdg(app_name: &str) -> Result<Configuration, LoadConfigurationError> {
    let path = Xdg::new(app_name)
        .and_then(|xdg| xdg.config_file(CONFIG_NAME))
        .context(XdgConfigSnafu)?;
    load(path, true)
}

/// Pick the socket path: an explicit path wins, then the configured one,
/// then the XDG runtime directory, then [`FALLBACK_SOCKET_PATH`].
pub fn socket_path(explicit: Option<&Path>, configuration: &Configuration) -> PathBuf {
    if let Some(path) = explicit.or(configuration.runtime.socket.as_deref()) {
        return path.to_path_buf();
    }

    Xdg::new("")
        .and_then(|xdg| xdg.runtime_file(SOCKET_NAME))
        .unwrap_or_else(|_| PathBuf::from(FALLBACK_SOCKET_PATH))
}
