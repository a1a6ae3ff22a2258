use std::fs::{self, File};
use std::io::{Error as IoError, ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use snafu::prelude::*;

pub const DEFAULT_CONTENT: &str = r#"
# Generated on first start of pomodoro. Every section is optional and falls
# back to the values shown here.

# The `duration` section specifies the length of each period in seconds.
[duration]
work = 1500
rest = 300

# The `notification.<period>` section specifies the desktop notification shown
# when the timer enters that period. `body` is optional.
[notification.work]
summary = "Pomodoro: Work Time!"
body = "Time to focus! Start your work session."

[notification.rest]
summary = "Pomodoro: Break Time!"
body = "Take a break and relax."

# The `runtime` section specifies the path to the UNIX socket. Leave it
# commented out to use `$XDG_RUNTIME_DIR/pomodoro.sock`.
# [runtime]
# socket = "/path/to/unix/socket"
"#;

/// A reader which reads the configuration content and, if asked to, writes
/// [`DEFAULT_CONTENT`] to a missing file first.
pub struct ContentReader {
    path: PathBuf,
    create_new: bool,
}

impl ContentReader {
    /// Creates a new [`ContentReader`].
    pub fn new<P: AsRef<Path>>(path: P, create_new: bool) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            create_new,
        }
    }

    /// Read the whole file.
    ///
    /// # Errors
    ///
    /// This function will return an error if the file is missing and may not
    /// be created, or any file system operation fails.
    pub fn read(self) -> Result<String, ReadContentError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(content),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                ensure!(self.create_new, NotFoundSnafu { path: self.path });
                Self::create_default(&self.path)?;
                Ok(DEFAULT_CONTENT.to_owned())
            }
            Err(err) => Err(err).context(FileSystemSnafu {
                when: "read the configuration file",
            }),
        }
    }

    /// Write the default configuration to a new file.
    ///
    /// # Errors
    ///
    /// This function will return an error if the file already exists or the
    /// write fails.
    fn create_default(path: &Path) -> Result<(), ReadContentError> {
        let mut file = File::options()
            .write(true)
            .create_new(true)
            .open(path)
            .context(FileSystemSnafu {
                when: "create the configuration file",
            })?;

        file.write_all(DEFAULT_CONTENT.as_bytes())
            .context(FileSystemSnafu {
                when: "write the default configuration",
            })
    }
}

/// An error type for reading the configuration file.
#[derive(Debug, Snafu, Clone)]
#[non_exhaustive]
pub enum ReadContentError {
    #[snafu(display("Configuration file {} does not exist", path.display()))]
    NotFound { path: PathBuf },
    #[snafu(display("Could not {when}"))]
    FileSystem {
        when: String,
        #[snafu(source(from(IoError, Arc::new)))]
        source: Arc<IoError>,
    },
}
