use crate::error::{Result, ScaffoldError};
use crate::fs::FileSystem;
use crate::models::{ArtifactKind, ScaffoldEvent, ScaffoldOutcome, WritePolicy};
use crate::naming::to_pascal_case;
use crate::prompt::{NameProvider, SUB_FEATURE_PROMPT};
use crate::templates;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Knobs for a scaffolding run
#[derive(Debug, Clone)]
pub struct ScaffoldOptions {
    /// Directory holding every feature folder, e.g. `<root>/src/features`
    pub features_root: PathBuf,
    /// Create the five subdirectories under a new sub-feature before writing into it.
    /// When false the first write of a sub-feature fails on its missing parent.
    pub nested_subdirectories: bool,
    pub write_policy: WritePolicy,
}

impl ScaffoldOptions {
    pub fn new(features_root: impl Into<PathBuf>) -> Self {
        Self {
            features_root: features_root.into(),
            nested_subdirectories: true,
            write_policy: WritePolicy::Overwrite,
        }
    }
}

/// Generates feature folders through a filesystem and a name provider
pub struct Scaffolder<F, P> {
    fs: F,
    names: P,
    options: ScaffoldOptions,
    events: Vec<ScaffoldEvent>,
    console: bool,
}

impl<F: FileSystem, P: NameProvider> Scaffolder<F, P> {
    pub fn new(fs: F, names: P, options: ScaffoldOptions) -> Self {
        Self {
            fs,
            names,
            options,
            events: Vec::new(),
            console: false,
        }
    }

    /// Print each notice to stdout as it happens
    pub fn with_console_output(mut self, enabled: bool) -> Self {
        self.console = enabled;
        self
    }

    pub fn fs(&self) -> &F {
        &self.fs
    }

    pub fn names(&self) -> &P {
        &self.names
    }

    /// Every notice emitted so far, in order
    pub fn events(&self) -> &[ScaffoldEvent] {
        &self.events
    }

    pub fn feature_path(&self, feature_name: &str) -> PathBuf {
        self.options.features_root.join(feature_name)
    }

    /// Create `<features_root>/<name>` with its subdirectories and files.
    ///
    /// An existing folder is left alone and the run moves on to
    /// [`Scaffolder::add_nested_feature`].
    #[instrument(skip(self))]
    pub fn create_feature_folder(&mut self, feature_name: &str) -> Result<ScaffoldOutcome> {
        if feature_name.trim().is_empty() {
            return Err(ScaffoldError::EmptyName);
        }

        let feature_path = self.feature_path(feature_name);

        if self.fs.exists(&feature_path) {
            self.emit(ScaffoldEvent::FeatureExists {
                name: feature_name.to_string(),
            });
            return self.add_nested_feature(feature_name);
        }

        self.create_dir(&feature_path)?;
        self.emit(ScaffoldEvent::CreatedFeatureFolder(feature_path.clone()));

        self.create_subdirectories(&feature_path)?;
        let files = self.create_basic_files(&feature_path, feature_name)?;

        info!("Feature {} created at {}", feature_name, feature_path.display());
        Ok(ScaffoldOutcome::Created {
            path: feature_path,
            files,
        })
    }

    /// Ask for a sub-feature name and generate it one level inside `feature_name`
    #[instrument(skip(self))]
    pub fn add_nested_feature(&mut self, feature_name: &str) -> Result<ScaffoldOutcome> {
        let answer = self.names.next_name(SUB_FEATURE_PROMPT)?;
        let new_name = answer.trim();
        if new_name.is_empty() {
            return Err(ScaffoldError::EmptyName);
        }

        let parent = self.feature_path(feature_name);
        let nested_path = parent.join(new_name);

        if self.fs.exists(&nested_path) {
            self.emit(ScaffoldEvent::NestedFeatureExists {
                name: new_name.to_string(),
                parent: feature_name.to_string(),
            });
            return Ok(ScaffoldOutcome::NestedExists {
                parent,
                path: nested_path,
            });
        }

        self.create_dir(&nested_path)?;
        self.emit(ScaffoldEvent::CreatedFeatureFolder(nested_path.clone()));

        if self.options.nested_subdirectories {
            self.create_subdirectories(&nested_path)?;
        } else {
            debug!("Skipping subdirectories for {}", nested_path.display());
        }

        let files = self.create_basic_files(&nested_path, new_name)?;

        info!("Sub-feature {} created inside {}", new_name, feature_name);
        Ok(ScaffoldOutcome::NestedCreated {
            parent,
            path: nested_path,
            files,
        })
    }

    /// Write the five boilerplate files for `feature_name` under `feature_path`.
    ///
    /// Returns the paths actually written; skipped files are not included.
    pub fn create_basic_files(
        &mut self,
        feature_path: &Path,
        feature_name: &str,
    ) -> Result<Vec<PathBuf>> {
        let pascal_name = to_pascal_case(feature_name);
        let mut written = Vec::new();

        for file in templates::render_feature(feature_path, &pascal_name) {
            if self.fs.exists(&file.path) {
                match self.options.write_policy {
                    WritePolicy::Overwrite => {}
                    WritePolicy::Skip => {
                        self.emit(ScaffoldEvent::SkippedFile(file.path));
                        continue;
                    }
                    WritePolicy::Error => return Err(ScaffoldError::FileExists(file.path)),
                }
            }

            self.fs
                .write(&file.path, &file.content)
                .map_err(|source| ScaffoldError::WriteFile {
                    path: file.path.clone(),
                    source,
                })?;
            self.emit(ScaffoldEvent::CreatedFile(file.path.clone()));
            written.push(file.path);
        }

        Ok(written)
    }

    fn create_subdirectories(&mut self, feature_path: &Path) -> Result<()> {
        for kind in ArtifactKind::ALL {
            let dir = feature_path.join(kind.directory());
            self.create_dir(&dir)?;
            self.emit(ScaffoldEvent::CreatedDirectory(dir));
        }
        Ok(())
    }

    fn create_dir(&self, path: &Path) -> Result<()> {
        self.fs
            .create_dir_all(path)
            .map_err(|source| ScaffoldError::CreateDir {
                path: path.to_path_buf(),
                source,
            })
    }

    fn emit(&mut self, event: ScaffoldEvent) {
        debug!("{}", event);
        if self.console {
            println!("{}", event);
        }
        self.events.push(event);
    }
}
