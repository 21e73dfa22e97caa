use anyhow::{Context, Result};
use clio::{ClioPath, Output};
use fn_error_context::context;
use std::{ops::Deref, path::Path};

/// A user supplied path, kept as given so it shows up unchanged in the run summary
#[derive(Clone, Debug)]
pub(crate) struct ConfigPath(pub(crate) ClioPath);

impl std::fmt::Display for ConfigPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.to_string_lossy().fmt(f)
    }
}

impl Deref for ConfigPath {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        self.0.path()
    }
}

impl From<ClioPath> for ConfigPath {
    fn from(clio_path: ClioPath) -> Self {
        Self(clio_path)
    }
}

impl ConfigPath {
    #[context("parsing path {}", path)]
    pub(crate) fn new(path: &str) -> Result<Self> {
        Ok(Self(ClioPath::new(path)?))
    }

    /// Opens the path for writing, `-` meaning stdout
    pub(crate) fn create(&self) -> Result<Output> {
        self.0.clone().create().context(format!("opening {} for writing", self))
    }
}

impl serde::Serialize for ConfigPath {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.0.to_string_lossy().as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn create_writes_to_the_path() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let file = dir.path().join("summary.yaml");

        let path = ConfigPath::new(file.to_str().context("non utf-8 temp path")?)?;
        assert_eq!(path.to_string(), file.to_string_lossy());
        assert_eq!(serde_json::to_value(&path)?, serde_json::json!(file.to_string_lossy()));

        let mut output = path.create()?;
        output.write_all(b"ok")?;
        output.finish()?;
        assert_eq!(std::fs::read_to_string(&file)?, "ok");
        Ok(())
    }
}
