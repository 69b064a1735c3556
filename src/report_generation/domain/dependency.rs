use crate::shared::Result;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Maximum length for dependency names (security limit)
const MAX_DEPENDENCY_NAME_LENGTH: usize = 512;

/// Version control location of a dependency's sources
///
/// Owned by the dependency resolver, which uses it to turn a license file
/// path into a browsable URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRepository {
    root: PathBuf,
    revision: Option<String>,
    remotes: BTreeMap<String, String>,
}

impl SourceRepository {
    pub fn new(root: PathBuf, revision: Option<String>, remotes: BTreeMap<String, String>) -> Self {
        Self {
            root,
            revision,
            remotes,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn revision(&self) -> Option<&str> {
        self.revision.as_deref()
    }

    /// Looks up a remote URL by remote name (e.g. "origin")
    pub fn remote(&self, name: &str) -> Option<&str> {
        self.remotes.get(name).map(String::as_str)
    }
}

/// One resolved package in the transitive dependency set
///
/// The report assembler only reads [`Dependency::name`] and
/// [`Dependency::license_path`]; the remaining fields belong to the resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    name: String,
    license_path: Option<PathBuf>,
    source: Option<SourceRepository>,
}

impl Dependency {
    /// Creates a dependency, validating its name
    ///
    /// An empty license path is normalised to "no license file".
    pub fn new(
        name: String,
        license_path: Option<PathBuf>,
        source: Option<SourceRepository>,
    ) -> Result<Self> {
        if name.trim().is_empty() {
            anyhow::bail!("Dependency name cannot be empty");
        }

        if name.len() > MAX_DEPENDENCY_NAME_LENGTH {
            anyhow::bail!(
                "Dependency name is too long ({} bytes). Maximum allowed: {} bytes",
                name.len(),
                MAX_DEPENDENCY_NAME_LENGTH
            );
        }

        if name.chars().any(char::is_control) {
            anyhow::bail!("Dependency name contains control characters: {:?}", name);
        }

        let license_path = license_path.filter(|p| !p.as_os_str().is_empty());

        Ok(Self {
            name,
            license_path,
            source,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn license_path(&self) -> Option<&Path> {
        self.license_path.as_deref()
    }

    pub fn source(&self) -> Option<&SourceRepository> {
        self.source.as_ref()
    }
}
