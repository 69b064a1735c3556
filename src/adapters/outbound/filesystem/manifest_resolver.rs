use crate::application::dto::RunContext;
use crate::ports::outbound::{Classifier, DependencyResolver};
use crate::report_generation::domain::{Dependency, SourceRepository};
use crate::report_generation::services::IgnoreFilter;
use crate::shared::error::{ResolutionError, UrlError};
use crate::shared::security::{read_regular_file, MAX_MANIFEST_SIZE};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};
use std::path::{Component, Path, PathBuf};
use tracing::{debug, warn};

/// Default manifest file name, looked up in the working directory
pub const DEFAULT_MANIFEST: &str = "license-manifest.json";

/// Git remotes consulted for license URLs when none are configured
pub const DEFAULT_GIT_REMOTES: &[&str] = &["origin", "upstream"];

/// File names probed, in order, when a package declares no license file
const LICENSE_FILE_CANDIDATES: &[&str] = &[
    "LICENSE",
    "LICENSE.md",
    "LICENSE.txt",
    "LICENCE",
    "COPYING",
    "UNLICENSE",
];

#[derive(Debug, Deserialize)]
struct Manifest {
    packages: Vec<ManifestPackage>,
}

#[derive(Debug, Deserialize)]
struct ManifestPackage {
    name: String,
    #[serde(default)]
    dir: Option<PathBuf>,
    #[serde(default)]
    license_path: Option<PathBuf>,
    #[serde(default)]
    dependencies: Vec<String>,
    #[serde(default)]
    repository: Option<ManifestRepository>,
}

#[derive(Debug, Deserialize)]
struct ManifestRepository {
    root: PathBuf,
    #[serde(default)]
    revision: Option<String>,
    #[serde(default)]
    remotes: BTreeMap<String, String>,
}

/// ManifestResolver adapter reading pre-resolved packages from a JSON manifest
///
/// The manifest lists every package with its direct dependencies, where its
/// sources live and, optionally, which file holds its license. Relative paths
/// in the manifest are taken relative to the manifest's own directory.
#[derive(Debug, Clone)]
pub struct ManifestResolver {
    manifest_path: PathBuf,
    git_remotes: Vec<String>,
}

impl ManifestResolver {
    /// Creates a resolver for `manifest_path`
    ///
    /// `git_remotes` are tried in order when building license URLs.
    pub fn new(manifest_path: PathBuf, git_remotes: Vec<String>) -> Self {
        Self {
            manifest_path,
            git_remotes,
        }
    }

    pub fn manifest_path(&self) -> &Path {
        &self.manifest_path
    }

    fn load_manifest(&self) -> Result<HashMap<String, ManifestPackage>, ResolutionError> {
        let content = read_regular_file(&self.manifest_path, "dependency manifest", MAX_MANIFEST_SIZE)
            .map_err(|e| ResolutionError::ManifestRead {
                path: self.manifest_path.clone(),
                details: e.to_string(),
            })?;

        let manifest: Manifest =
            serde_json::from_str(&content).map_err(|e| ResolutionError::ManifestParse {
                path: self.manifest_path.clone(),
                details: e.to_string(),
            })?;

        let mut packages = HashMap::with_capacity(manifest.packages.len());
        for package in manifest.packages {
            if packages.contains_key(&package.name) {
                return Err(ResolutionError::InvalidPackage {
                    details: format!("package {} is listed more than once", package.name),
                });
            }
            packages.insert(package.name.clone(), package);
        }
        Ok(packages)
    }

    fn manifest_dir(&self) -> &Path {
        self.manifest_path.parent().unwrap_or_else(|| Path::new(""))
    }

    fn resolve_against(&self, base: &Path, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            base.join(path)
        }
    }

    fn to_dependency(
        &self,
        package: &ManifestPackage,
        classifier: &dyn Classifier,
    ) -> Result<Dependency, ResolutionError> {
        let manifest_dir = self.manifest_dir();

        let source = package.repository.as_ref().map(|repo| {
            SourceRepository::new(
                self.resolve_against(manifest_dir, &repo.root),
                repo.revision.clone(),
                repo.remotes.clone(),
            )
        });

        let license_path = match &package.license_path {
            Some(path) => {
                let base = source.as_ref().map_or(manifest_dir, |s| s.root());
                Some(self.resolve_against(base, path))
            }
            None => package
                .dir
                .as_ref()
                .and_then(|dir| find_license_file(&self.resolve_against(manifest_dir, dir), classifier)),
        };

        Dependency::new(package.name.clone(), license_path, source).map_err(|e| {
            ResolutionError::InvalidPackage {
                details: e.to_string(),
            }
        })
    }
}

impl DependencyResolver for ManifestResolver {
    fn libraries(
        &self,
        ctx: &RunContext,
        classifier: &dyn Classifier,
        ignore_patterns: &[String],
        package_specs: &[String],
    ) -> Result<Vec<Dependency>, ResolutionError> {
        if ctx.is_cancelled() {
            return Err(ResolutionError::Cancelled);
        }

        let ignore = IgnoreFilter::new(ignore_patterns).map_err(|e| {
            ResolutionError::InvalidIgnorePattern {
                details: e.to_string(),
            }
        })?;
        let packages = self.load_manifest()?;

        for spec in package_specs {
            if !packages.contains_key(spec) {
                return Err(ResolutionError::PackageNotFound { spec: spec.clone() });
            }
        }

        let mut visited: HashSet<&str> = HashSet::new();
        let mut queue: VecDeque<&str> = VecDeque::new();
        for spec in package_specs {
            if visited.insert(spec.as_str()) {
                queue.push_back(spec.as_str());
            }
        }

        let mut dependencies = Vec::new();
        while let Some(name) = queue.pop_front() {
            if ctx.is_cancelled() {
                return Err(ResolutionError::Cancelled);
            }

            if ignore.is_ignored(name) {
                debug!("Ignoring {}", name);
                continue;
            }

            let package = packages
                .get(name)
                .ok_or_else(|| ResolutionError::PackageNotFound {
                    spec: name.to_string(),
                })?;

            for dependency in &package.dependencies {
                let Some((key, _)) = packages.get_key_value(dependency) else {
                    return Err(ResolutionError::UnknownDependency {
                        package: package.name.clone(),
                        dependency: dependency.clone(),
                    });
                };
                if visited.insert(key.as_str()) {
                    queue.push_back(key.as_str());
                }
            }

            dependencies.push(self.to_dependency(package, classifier)?);
        }

        for pattern in ignore.unmatched_patterns() {
            warn!("Ignore pattern '{}' did not match any package", pattern);
        }

        dependencies.sort_by(|a, b| a.name().cmp(b.name()));
        debug!(
            "Resolved {} dependencies from {}",
            dependencies.len(),
            self.manifest_path.display()
        );
        Ok(dependencies)
    }

    fn file_url(
        &self,
        ctx: &RunContext,
        dependency: &Dependency,
        path: &Path,
    ) -> Result<String, UrlError> {
        if ctx.is_cancelled() {
            return Err(UrlError::Cancelled);
        }

        let source = dependency.source().ok_or_else(|| UrlError::NoRepository {
            package: dependency.name().to_string(),
        })?;

        let remote = self
            .git_remotes
            .iter()
            .find_map(|name| source.remote(name))
            .ok_or_else(|| UrlError::NoMatchingRemote {
                package: dependency.name().to_string(),
                remotes: self.git_remotes.join(", "),
            })?;

        let base = normalize_remote(remote)?;
        let segments = repository_relative_segments(path, source.root())?;
        let revision = source.revision().unwrap_or("HEAD");

        Ok(format!("{}/blob/{}/{}", base, revision, segments.join("/")))
    }
}

/// Picks the license file for a package directory
///
/// Prefers the first candidate the classifier can identify, then the first
/// candidate that exists at all.
fn find_license_file(dir: &Path, classifier: &dyn Classifier) -> Option<PathBuf> {
    let existing: Vec<PathBuf> = LICENSE_FILE_CANDIDATES
        .iter()
        .map(|name| dir.join(name))
        .filter(|path| path.is_file())
        .collect();

    let identified = existing
        .iter()
        .position(|path| classifier.identify(path).is_ok())
        .unwrap_or(0);

    existing.into_iter().nth(identified)
}

/// Converts a git remote into the `https://host/owner/repo` form
fn normalize_remote(remote: &str) -> Result<String, UrlError> {
    let unsupported = || UrlError::UnsupportedRemote {
        remote: remote.to_string(),
    };

    let trimmed = remote.trim().trim_end_matches('/');
    let trimmed = trimmed.strip_suffix(".git").unwrap_or(trimmed);

    let (host, repo_path) = if let Some(rest) = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
        .or_else(|| trimmed.strip_prefix("ssh://"))
    {
        let (authority, repo_path) = rest.split_once('/').ok_or_else(unsupported)?;
        let host = authority.rsplit_once('@').map_or(authority, |(_, h)| h);
        let host = host.split_once(':').map_or(host, |(h, _)| h);
        (host, repo_path)
    } else if !trimmed.contains("://") {
        // scp-like syntax: user@host:owner/repo
        let (user_host, repo_path) = trimmed.split_once(':').ok_or_else(unsupported)?;
        let (_, host) = user_host.split_once('@').ok_or_else(unsupported)?;
        (host, repo_path)
    } else {
        return Err(unsupported());
    };

    let repo_path = repo_path.trim_matches('/');
    if host.is_empty() || repo_path.is_empty() {
        return Err(unsupported());
    }
    Ok(format!("https://{}/{}", host, repo_path))
}

/// Splits `path` into percent-encoded segments relative to `root`
fn repository_relative_segments(path: &Path, root: &Path) -> Result<Vec<String>, UrlError> {
    let outside = || UrlError::OutsideRepository {
        path: path.to_path_buf(),
        root: root.to_path_buf(),
    };

    // Relative paths outside a relative root are taken as repository-relative
    let relative = match path.strip_prefix(root) {
        Ok(relative) => relative,
        Err(_) if path.is_relative() => path,
        Err(_) => return Err(outside()),
    };

    let mut segments = Vec::new();
    for component in relative.components() {
        match component {
            Component::Normal(segment) => {
                segments.push(urlencoding::encode(&segment.to_string_lossy()).into_owned());
            }
            Component::CurDir => {}
            _ => return Err(outside()),
        }
    }

    if segments.is_empty() {
        return Err(outside());
    }
    Ok(segments)
}
