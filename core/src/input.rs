use std::{
    borrow::Cow,
    path::{Path, PathBuf},
};

use crate::diagnostics::{ArcSource, FileName, Source};

/// A file given on the command line, where `-` denotes standard input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input(PathBuf);
impl From<std::ffi::OsString> for Input {
    fn from(s: std::ffi::OsString) -> Self {
        Self(PathBuf::from(s))
    }
}
impl From<&std::ffi::OsStr> for Input {
    fn from(s: &std::ffi::OsStr) -> Self {
        Self(PathBuf::from(s))
    }
}
impl From<&Path> for Input {
    fn from(path: &Path) -> Self {
        Self(path.to_path_buf())
    }
}
impl From<PathBuf> for Input {
    fn from(path: PathBuf) -> Self {
        Self(path)
    }
}
impl Input {
    pub fn is_stdin(&self) -> bool {
        self.0.as_os_str() == "-"
    }

    pub fn path(&self) -> &Path {
        self.0.as_ref()
    }

    pub fn filename(&self) -> FileName {
        FileName::from(self.0.as_path())
    }

    pub fn into_arc_source(&self) -> std::io::Result<ArcSource> {
        self.into_source().map(ArcSource::new)
    }

    /// Read the whole input into memory
    pub fn into_source(&self) -> std::io::Result<Source<'static>> {
        let name = self.filename();
        let code: Cow<'static, str> = self.read_to_string().map(Cow::Owned)?;
        log::trace!(target: "input", "read {} bytes from '{name}'", code.len());
        Ok(Source { name, code })
    }

    pub fn open(&self) -> std::io::Result<impl std::io::Read> {
        use either::Either;
        use std::fs::File;

        Ok(if self.is_stdin() {
            Either::Left(std::io::stdin().lock())
        } else {
            Either::Right(std::io::BufReader::new(File::open(&self.0)?))
        })
    }

    pub fn read_to_string(&self) -> std::io::Result<String> {
        use std::io::Read;

        let mut reader = self.open()?;
        let mut content = String::with_capacity(1024);
        reader.read_to_string(&mut content)?;
        Ok(content)
    }
}
