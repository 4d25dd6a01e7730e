//! Package descriptors as reported by `go list -json`.

use std::path::PathBuf;

use serde::{Deserialize, Deserializer};

use crate::placeholder::{PlaceholderNaming, placeholder_source};

/// One discovered Go package.
///
/// Only the fields needed for placeholder reconciliation are decoded; every other key in the
/// listing record is ignored. A missing key decodes to its empty value, so one sparse record never
/// ends the listing early.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct Package {
    /// Directory containing the package sources.
    pub dir: PathBuf,
    /// Declared package name (the identifier after `package`).
    pub name: String,
    /// Test files already present in the package. `go list` omits the key when there are none.
    #[serde(deserialize_with = "null_as_empty")]
    pub test_go_files: Vec<String>,
}

impl Package {
    pub fn new(dir: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            name: name.into(),
            test_go_files: Vec::new(),
        }
    }

    pub fn with_test_files<I, S>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.test_go_files = files.into_iter().map(Into::into).collect();
        self
    }

    /// Whether the package has no test files and therefore gets a placeholder.
    pub fn needs_placeholder(&self) -> bool {
        self.test_go_files.is_empty()
    }

    /// Full path of the placeholder file for this package under the given naming scheme.
    pub fn placeholder_path(&self, naming: PlaceholderNaming) -> PathBuf {
        self.dir.join(naming.file_name(&self.name))
    }

    /// Source text written into this package's placeholder.
    pub fn placeholder_source(&self) -> String {
        placeholder_source(&self.name)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
