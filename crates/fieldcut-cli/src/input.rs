use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

/// Where a stream of lines comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    File(PathBuf),
}

impl Source {
    /// `-` means stdin
    pub fn from_path(path: &Path) -> Self {
        if path.as_os_str() == "-" {
            Source::Stdin
        } else {
            Source::File(path.to_path_buf())
        }
    }

    /// Sources for the given paths; stdin when there are none
    pub fn from_paths(paths: &[PathBuf]) -> Vec<Self> {
        if paths.is_empty() {
            return vec![Source::Stdin];
        }
        paths.iter().map(|p| Self::from_path(p)).collect()
    }

    pub fn name(&self) -> String {
        match self {
            Source::Stdin => "<stdin>".to_string(),
            Source::File(path) => path.display().to_string(),
        }
    }

    pub fn open(&self) -> Result<BufReader<Input>> {
        let input = match self {
            Source::Stdin => Input::Stdin(io::stdin()),
            Source::File(path) => Input::File(
                File::open(path).with_context(|| format!("Failed to open {}", path.display()))?,
            ),
        };
        Ok(BufReader::new(input))
    }
}

#[derive(Debug)]
pub enum Input {
    Stdin(io::Stdin),
    File(File),
}

impl Read for Input {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Input::Stdin(stdin) => stdin.read(buf),
            Input::File(file) => file.read(buf),
        }
    }
}
