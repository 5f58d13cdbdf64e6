pub mod config;
pub mod error;
pub mod fs;
pub mod logging;
pub mod models;
pub mod naming;
pub mod prompt;
pub mod scaffold;
pub mod templates;

pub use error::{Result, ScaffoldError};
pub use fs::{FileSystem, MemoryFs, RealFs};
pub use models::{ArtifactKind, ScaffoldEvent, ScaffoldOutcome, WritePolicy};
pub use naming::to_pascal_case;
pub use prompt::{NameProvider, ScriptedNames, TerminalPrompt};
pub use scaffold::{ScaffoldOptions, Scaffolder};
