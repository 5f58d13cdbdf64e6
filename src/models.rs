use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// One of the five boilerplate artifacts every feature folder receives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    Component,
    Query,
    Hook,
    Types,
    Page,
}

impl ArtifactKind {
    /// All kinds, in the order their files are written
    pub const ALL: [ArtifactKind; 5] = [
        ArtifactKind::Component,
        ArtifactKind::Query,
        ArtifactKind::Hook,
        ArtifactKind::Types,
        ArtifactKind::Page,
    ];

    /// Subdirectory of the feature folder holding this artifact
    pub fn directory(&self) -> &'static str {
        match self {
            ArtifactKind::Component => "components",
            ArtifactKind::Query => "query",
            ArtifactKind::Hook => "hook",
            ArtifactKind::Types => "types",
            ArtifactKind::Page => "pages",
        }
    }

    pub fn suffix(&self) -> &'static str {
        match self {
            ArtifactKind::Component => "Component",
            ArtifactKind::Query => "Query",
            ArtifactKind::Hook => "Hook",
            ArtifactKind::Types => "Types",
            ArtifactKind::Page => "Page",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ArtifactKind::Component | ArtifactKind::Page => "tsx",
            ArtifactKind::Query | ArtifactKind::Hook | ArtifactKind::Types => "ts",
        }
    }

    /// File name for a PascalCase feature name, e.g. `BillingComponent.tsx`
    pub fn file_name(&self, pascal_name: &str) -> String {
        format!("{}{}.{}", pascal_name, self.suffix(), self.extension())
    }

    /// Full path of this artifact below a feature folder
    pub fn path_in(&self, feature_path: &Path, pascal_name: &str) -> PathBuf {
        feature_path
            .join(self.directory())
            .join(self.file_name(pascal_name))
    }
}

/// What to do when a generated file already exists on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WritePolicy {
    #[default]
    Overwrite,
    Skip,
    Error,
}

impl std::str::FromStr for WritePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "overwrite" => Ok(WritePolicy::Overwrite),
            "skip" => Ok(WritePolicy::Skip),
            "error" => Ok(WritePolicy::Error),
            other => Err(format!("Unknown conflict policy: {}", other)),
        }
    }
}

/// A single observable step of a scaffolding run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldEvent {
    FeatureExists { name: String },
    CreatedFeatureFolder(PathBuf),
    CreatedDirectory(PathBuf),
    CreatedFile(PathBuf),
    SkippedFile(PathBuf),
    NestedFeatureExists { name: String, parent: String },
}

impl fmt::Display for ScaffoldEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScaffoldEvent::FeatureExists { name } => {
                write!(f, "Feature \"{}\" already exists.", name)
            }
            ScaffoldEvent::CreatedFeatureFolder(path) => {
                write!(f, "Created feature folder: {}", path.display())
            }
            ScaffoldEvent::CreatedDirectory(path) => {
                write!(f, "Created directory: {}", path.display())
            }
            ScaffoldEvent::CreatedFile(path) => write!(f, "Created file: {}", path.display()),
            ScaffoldEvent::SkippedFile(path) => {
                write!(f, "Skipped existing file: {}", path.display())
            }
            ScaffoldEvent::NestedFeatureExists { name, parent } => {
                write!(f, "Feature \"{}\" already exists inside \"{}\".", name, parent)
            }
        }
    }
}

/// Result of one `create-feature` invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldOutcome {
    /// A brand new top-level feature folder
    Created { path: PathBuf, files: Vec<PathBuf> },
    /// The feature existed, so a sub-feature was generated inside it
    NestedCreated {
        parent: PathBuf,
        path: PathBuf,
        files: Vec<PathBuf>,
    },
    /// Both the feature and the requested sub-feature already existed
    NestedExists { parent: PathBuf, path: PathBuf },
}

impl ScaffoldOutcome {
    pub fn path(&self) -> &Path {
        match self {
            ScaffoldOutcome::Created { path, .. }
            | ScaffoldOutcome::NestedCreated { path, .. }
            | ScaffoldOutcome::NestedExists { path, .. } => path,
        }
    }

    pub fn files(&self) -> &[PathBuf] {
        match self {
            ScaffoldOutcome::Created { files, .. }
            | ScaffoldOutcome::NestedCreated { files, .. } => files,
            ScaffoldOutcome::NestedExists { .. } => &[],
        }
    }
}
