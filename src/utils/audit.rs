use std::path::{Path, PathBuf};

use tokio::{
    fs::{File, OpenOptions},
    io::{self, AsyncWriteExt},
};

/// The program name recorded in the audit log
pub static PROGRAM: &str = "score";

/// Append-only audit trail for a run. Records the command that was invoked and a marker
/// when the run finishes; never read back. The file is only open while a line is written.
pub struct RunLog {
    path: PathBuf,
}

impl RunLog {
    /// Check the log can be appended to, creating it if needed
    pub async fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();

        append_file(&path).await?;

        Ok(Self { path })
    }

    /// The path being written to
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a single line
    pub async fn record(&mut self, message: &str) -> io::Result<()> {
        let mut file = append_file(&self.path).await?;

        file.write_all(format!("{}\n", message).as_bytes()).await?;

        file.flush().await
    }

    /// Record the invoked command line
    pub async fn command<S: AsRef<str>>(&mut self, args: &[S]) -> io::Result<()> {
        let mut line = format!("$ {}", PROGRAM);
        for arg in args {
            line.push(' ');
            line.push_str(arg.as_ref());
        }

        self.record(&line).await
    }

    /// Record the end of a successful run
    pub async fn exit(&mut self) -> io::Result<()> {
        self.record("$ exit").await
    }
}

async fn append_file(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path).await
}
