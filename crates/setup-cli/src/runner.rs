//! Runner glue: workflow outputs, search path and annotations.
//!
//! Modern runners hand out files through `GITHUB_OUTPUT` and `GITHUB_PATH`.
//! When those are absent the legacy workflow commands are printed instead.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use setup_core::Reporter;
use tracing::trace;

#[derive(Debug, Clone, Default)]
pub struct Runner {
    output_file: Option<PathBuf>,
    path_file: Option<PathBuf>,
}

impl Runner {
    pub fn new(output_file: Option<PathBuf>, path_file: Option<PathBuf>) -> Self {
        Self {
            output_file,
            path_file,
        }
    }

    /// Pick up the command files of the current runner, if any.
    pub fn from_env() -> Self {
        let file = |key| {
            std::env::var_os(key)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
        };
        Self::new(file("GITHUB_OUTPUT"), file("GITHUB_PATH"))
    }

    /// Set a step output.
    pub fn set_output(&self, name: &str, value: &str) -> io::Result<()> {
        match &self.output_file {
            Some(file) => append_line(file, &format!("{name}={value}")),
            None => {
                println!("::set-output name={name}::{}", escape_data(value));
                Ok(())
            }
        }
    }

    /// Prepend `dir` to the search path of later steps.
    pub fn add_path(&self, dir: &Path) -> io::Result<()> {
        match &self.path_file {
            Some(file) => append_line(file, &dir.display().to_string()),
            None => {
                println!("::add-path::{}", dir.display());
                Ok(())
            }
        }
    }

    /// Annotate the step as failed.
    pub fn set_failed(&self, msg: &str) {
        println!("::error::{}", escape_data(msg));
    }
}

impl Reporter for Runner {
    fn info(&self, msg: &str) {
        println!("{msg}");
    }

    fn warning(&self, msg: &str) {
        println!("::warning::{}", escape_data(msg));
    }

    fn downloading(&self, asset: &str, current: u64, total: Option<u64>) {
        trace!(asset, current, total, "Download progress");
    }

    fn extracting(&self, asset: &str) {
        println!("Extracting {asset}");
    }

    fn success(&self, msg: &str) {
        println!("{msg}");
    }
}

fn append_line(file: &Path, line: &str) -> io::Result<()> {
    let mut f = OpenOptions::new().create(true).append(true).open(file)?;
    writeln!(f, "{line}")
}

/// Escape a workflow command payload so it stays on one line.
pub fn escape_data(s: &str) -> String {
    s.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
