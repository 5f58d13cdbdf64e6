pub mod react;

use crate::models::ArtifactKind;
use std::path::{Path, PathBuf};

/// A rendered boilerplate file, ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub kind: ArtifactKind,
    pub path: PathBuf,
    pub content: String,
}

pub fn replace_placeholders(template: &str, pascal_name: &str) -> String {
    template.replace("{{NAME}}", pascal_name)
}

/// Render the body of one artifact for a PascalCase feature name
pub fn render(kind: ArtifactKind, pascal_name: &str) -> String {
    let template = match kind {
        ArtifactKind::Component => react::COMPONENT,
        ArtifactKind::Query => react::QUERY,
        ArtifactKind::Hook => react::HOOK,
        ArtifactKind::Types => react::TYPES,
        ArtifactKind::Page => react::PAGE,
    };
    replace_placeholders(template, pascal_name)
}

/// Render all five artifacts of a feature folder, in write order
pub fn render_feature(feature_path: &Path, pascal_name: &str) -> Vec<RenderedFile> {
    ArtifactKind::ALL
        .iter()
        .map(|&kind| RenderedFile {
            kind,
            path: kind.path_in(feature_path, pascal_name),
            content: render(kind, pascal_name),
        })
        .collect()
}
