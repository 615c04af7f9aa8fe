//! Where stats snapshots come from.
//!
//! Sources are synchronous and do no retries; any failure is reported as a
//! [`DataSourceError`] and becomes a 500 at the request layer.

use regex::Regex;
use serde::{Deserialize, Serialize};
use statcard_core::{DataSourceError, DataSourceErrorCode, StatsSnapshot};
use statcard_render::CardKind;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

pub trait StatsSource {
    fn fetch(&self, kind: CardKind) -> Result<StatsSnapshot, DataSourceError>;
}

/// Serves the same snapshot for every card kind.
#[derive(Debug, Clone, Default)]
pub struct StaticSource(pub StatsSnapshot);

impl StatsSource for StaticSource {
    fn fetch(&self, _kind: CardKind) -> Result<StatsSnapshot, DataSourceError> {
        Ok(self.0.clone())
    }
}

fn read_source(path: &Path) -> Result<String, DataSourceError> {
    std::fs::read_to_string(path).map_err(|err| match err.kind() {
        std::io::ErrorKind::NotFound => DataSourceError::new(
            DataSourceErrorCode::SourceNotFound,
            format!("stats source not found: {}", path.display()),
        ),
        _ => DataSourceError::new(
            DataSourceErrorCode::Database,
            format!("could not read {}: {err}", path.display()),
        ),
    })
}

/// A flat JSON object of metrics on disk, e.g. `{"totalViews": 12345, "totalReads": 10}`.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl StatsSource for JsonFileSource {
    fn fetch(&self, _kind: CardKind) -> Result<StatsSnapshot, DataSourceError> {
        let text = read_source(&self.path)?;
        StatsSnapshot::from_json(&text)
            .map_err(|err| DataSourceError::new(DataSourceErrorCode::InvalidData, err.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoRef {
    pub owner: String,
    pub repo: String,
}

impl RepoRef {
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }
}

/// Repositories whose traffic is aggregated into the traffic card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReposManifest {
    #[serde(default)]
    pub repos: Vec<RepoRef>,
}

impl ReposManifest {
    pub const DEFAULT_PATH: &'static str = "repos.yaml";
    pub const PATH_ENV: &'static str = "REPOS_YAML_PATH";

    pub fn from_yaml(text: &str) -> Result<Self, DataSourceError> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text).map_err(|err| {
            DataSourceError::new(
                DataSourceErrorCode::InvalidData,
                format!("invalid repository manifest: {err}"),
            )
        })
    }

    /// Loads the manifest at `path`. A missing or unreadable manifest is an empty one.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "repository manifest not found, using empty list");
            return Self::default();
        }
        match read_source(path).and_then(|text| Self::from_yaml(&text)) {
            Ok(manifest) => manifest,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "could not load repository manifest, using empty list");
                Self::default()
            }
        }
    }

    /// Loads from `$REPOS_YAML_PATH`, falling back to `repos.yaml` in the working directory.
    pub fn load_from_env() -> Self {
        let path = std::env::var_os(Self::PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(Self::DEFAULT_PATH));
        Self::load(&path)
    }

    pub fn repo_names(&self) -> Vec<String> {
        self.repos.iter().map(RepoRef::full_name).collect()
    }
}

fn repo_name_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._-]+/[a-zA-Z0-9._-]+$").expect("repository name pattern")
    })
}

/// Accepts only `owner/repo` names made of ASCII letters, digits, `.`, `_` and `-`.
pub fn validate_repo_names<S: AsRef<str>>(names: &[S]) -> Result<(), DataSourceError> {
    let re = repo_name_pattern();
    if names.iter().all(|name| re.is_match(name.as_ref())) {
        Ok(())
    } else {
        Err(DataSourceError::new(
            DataSourceErrorCode::InvalidData,
            "Invalid repository names provided",
        ))
    }
}

#[derive(Debug, Clone, Deserialize)]
struct TrafficRow {
    repo_name: String,
    #[serde(default)]
    total_views: i64,
    #[serde(default)]
    total_clones: i64,
}

/// Per-repository traffic rows (a JSON array of `{repo_name, total_views, total_clones}`)
/// summed over the repositories listed in a [`ReposManifest`].
#[derive(Debug, Clone)]
pub struct TrafficLogSource {
    log_path: PathBuf,
    manifest: ReposManifest,
}

impl TrafficLogSource {
    pub fn new(log_path: impl Into<PathBuf>, manifest: ReposManifest) -> Self {
        Self {
            log_path: log_path.into(),
            manifest,
        }
    }

    fn snapshot(views: i64, clones: i64, repos: i64) -> StatsSnapshot {
        StatsSnapshot::new()
            .with("totalViews", views)
            .with("totalClones", clones)
            .with("reposTracked", repos)
    }
}

impl StatsSource for TrafficLogSource {
    fn fetch(&self, kind: CardKind) -> Result<StatsSnapshot, DataSourceError> {
        if kind != CardKind::Traffic {
            return Err(DataSourceError::new(
                DataSourceErrorCode::SourceNotFound,
                format!("traffic log has no {} metrics", kind.name()),
            ));
        }

        let names = self.manifest.repo_names();
        if names.is_empty() {
            tracing::debug!("no repositories configured");
            return Ok(Self::snapshot(0, 0, 0));
        }
        validate_repo_names(names.as_slice())?;

        let text = read_source(&self.log_path)?;
        let rows: Vec<TrafficRow> = serde_json::from_str(&text).map_err(|err| {
            DataSourceError::new(
                DataSourceErrorCode::InvalidData,
                format!("invalid traffic log: {err}"),
            )
        })?;

        let wanted = names.iter().map(String::as_str).collect::<BTreeSet<_>>();
        let mut tracked = BTreeSet::new();
        let (mut views, mut clones) = (0i64, 0i64);
        for row in rows.iter().filter(|r| wanted.contains(r.repo_name.as_str())) {
            views = views.saturating_add(row.total_views);
            clones = clones.saturating_add(row.total_clones);
            tracked.insert(row.repo_name.as_str());
        }
        tracing::debug!(repos = tracked.len(), "aggregated traffic log");
        Ok(Self::snapshot(views, clones, tracked.len() as i64))
    }
}
