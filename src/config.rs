// src/config.rs
use crate::args::Args;
use crate::error::{AppError, Result};
use linecount_engine::{Config, ConfigBuilder, EngineError, MatchMode, Resource};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Run manifest handed over by the host build pipeline.
///
/// ```yaml
/// source_directory: src/main/java
/// resources:
///   - directory: src/main/resources
/// postfixes: [java, xml]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub source_directory: Option<PathBuf>,
    #[serde(default)]
    pub resources: Vec<Resource>,
    #[serde(default, alias = "postfixes")]
    pub extensions: Option<Vec<String>>,
    #[serde(default)]
    pub count_source: Option<bool>,
    #[serde(default)]
    pub match_mode: Option<MatchMode>,
    #[serde(default)]
    pub follow_links: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ManifestFormat {
    Yaml,
    Json,
}

impl ManifestFormat {
    fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

impl Manifest {
    /// Read a manifest; relative paths inside it resolve against its directory.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, has an unknown extension,
    /// or does not parse.
    pub fn load(path: &Path) -> Result<Self> {
        let format =
            ManifestFormat::from_path(path).ok_or_else(|| AppError::ManifestFormat(path.into()))?;
        let text = std::fs::read_to_string(path).map_err(|source| AppError::ManifestRead {
            path: path.to_path_buf(),
            source,
        })?;
        let manifest = Self::parse(&text, format).map_err(|message| AppError::ManifestParse {
            path: path.to_path_buf(),
            message,
        })?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Ok(manifest.resolve_against(base))
    }

    fn parse(text: &str, format: ManifestFormat) -> std::result::Result<Self, String> {
        match format {
            ManifestFormat::Yaml => serde_yaml::from_str(text).map_err(|e| e.to_string()),
            ManifestFormat::Json => serde_json::from_str(text).map_err(|e| e.to_string()),
        }
    }

    fn resolve_against(mut self, base: &Path) -> Self {
        self.source_directory = self.source_directory.map(|p| base.join(p));
        for resource in &mut self.resources {
            resource.directory = base.join(&resource.directory);
        }
        self
    }
}

/// Merge CLI arguments over the manifest (if any) into an engine `Config`.
///
/// Scalar CLI values override the manifest; `--resource` entries are appended.
///
/// # Errors
/// Returns an error if the manifest cannot be loaded or the merged settings
/// are incomplete (no source directory) or invalid.
pub fn build_config(args: &Args) -> Result<Config> {
    let manifest = args
        .manifest
        .as_deref()
        .map(Manifest::load)
        .transpose()?
        .unwrap_or_default();

    let mut builder = ConfigBuilder::default();

    if let Some(source) = args.source.clone().or(manifest.source_directory) {
        builder.source_directory(source);
    }

    let mut resources = manifest.resources;
    resources.extend(args.resources.iter().cloned().map(Resource::from));
    builder.resources(resources);

    let extensions = if args.extensions.is_empty() {
        manifest.extensions
    } else {
        Some(args.extensions.clone())
    };
    if let Some(extensions) = extensions {
        builder.extensions(extensions);
    }

    let count_source = if args.no_source {
        Some(false)
    } else {
        manifest.count_source
    };
    if let Some(count_source) = count_source {
        builder.count_source(count_source);
    }

    if let Some(mode) = args.match_mode.map(MatchMode::from).or(manifest.match_mode) {
        builder.match_mode(mode);
    }

    let follow_links = if args.no_follow {
        Some(false)
    } else {
        manifest.follow_links
    };
    if let Some(follow_links) = follow_links {
        builder.follow_links(follow_links);
    }

    builder
        .build()
        .map_err(|e| AppError::Engine(EngineError::from(e)))
}
