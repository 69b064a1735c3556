use license_report::prelude::*;
use std::result::Result;
use license_report::shared::error::{ResolutionError, UrlError};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Mock DependencyResolver returning a fixed dependency list
#[derive(Default)]
pub struct MockResolver {
    pub dependencies: Vec<Dependency>,
    /// License URL per dependency name; missing names fail with `NoRepository`
    pub urls: HashMap<String, String>,
    pub should_fail: bool,
    pub library_calls: Arc<AtomicUsize>,
    pub url_calls: Arc<AtomicUsize>,
}

impl MockResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dependency(mut self, name: &str, license_path: Option<&str>) -> Self {
        let dependency = Dependency::new(name.to_string(), license_path.map(PathBuf::from), None)
            .expect("valid dependency name");
        self.dependencies.push(dependency);
        self
    }

    pub fn with_url(mut self, name: &str, url: &str) -> Self {
        self.urls.insert(name.to_string(), url.to_string());
        self
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn library_call_count(&self) -> usize {
        self.library_calls.load(Ordering::SeqCst)
    }

    pub fn url_call_count(&self) -> usize {
        self.url_calls.load(Ordering::SeqCst)
    }
}

impl DependencyResolver for MockResolver {
    fn libraries(
        &self,
        ctx: &RunContext,
        _classifier: &dyn Classifier,
        _ignore_patterns: &[String],
        package_specs: &[String],
    ) -> Result<Vec<Dependency>, ResolutionError> {
        self.library_calls.fetch_add(1, Ordering::SeqCst);

        if ctx.is_cancelled() {
            return Err(ResolutionError::Cancelled);
        }
        if self.should_fail {
            return Err(ResolutionError::PackageNotFound {
                spec: package_specs.join(" "),
            });
        }
        Ok(self.dependencies.clone())
    }

    fn file_url(
        &self,
        _ctx: &RunContext,
        dependency: &Dependency,
        _path: &Path,
    ) -> Result<String, UrlError> {
        self.url_calls.fetch_add(1, Ordering::SeqCst);

        self.urls
            .get(dependency.name())
            .cloned()
            .ok_or_else(|| UrlError::NoRepository {
                package: dependency.name().to_string(),
            })
    }
}
