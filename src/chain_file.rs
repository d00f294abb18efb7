//! TOML chain definition files
//!
//! A chain file declares the stages of a processing chain and how they link
//! together:
//!
//! ```toml
//! entry = "input"          # optional; defaults to the first declared stage
//!
//! [[stage]]
//! name = "input"
//! next = "reverb"
//!
//! [[stage]]
//! name = "reverb"
//! ```

use std::collections::HashMap;
use std::path::Path;

use miette::{IntoDiagnostic, NamedSource, Result, SourceSpan};
use serde::Deserialize;

use crate::chain::{StageArena, StageId};
use crate::error::FeedbackFinderError;

#[derive(Debug, Clone, Deserialize)]
pub struct ChainFile {
    /// Name of the entry stage. When omitted, the first declared stage is
    /// the entry; an empty file has no entry at all.
    pub entry: Option<String>,
    #[serde(default, rename = "stage")]
    pub stages: Vec<StageDecl>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StageDecl {
    pub name: String,
    pub next: Option<String>,
}

impl ChainFile {
    pub fn parse_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| FeedbackFinderError::FileReadError {
                path: path.to_path_buf(),
                source: e,
            })
            .into_diagnostic()?;

        Self::parse_str(&path.display().to_string(), &content)
    }

    pub fn parse_str(file: &str, content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| {
                // Try to extract span information from the error
                let span = e
                    .span()
                    .map(|span| SourceSpan::new(span.start.into(), span.end - span.start));

                FeedbackFinderError::ChainFileParseError(Box::new(
                    crate::error::ChainFileParseError {
                        file: file.to_string(),
                        source_code: NamedSource::new(file.to_string(), content.to_string()),
                        span,
                        source: e,
                    },
                ))
            })
            .into_diagnostic()
    }

    /// Resolve stage names into an arena and an entry id.
    ///
    /// Fails on duplicate stage names, a `next` naming an undeclared stage,
    /// or an `entry` naming an undeclared stage. An empty file is valid and
    /// yields an empty arena with no entry.
    pub fn into_arena(self) -> Result<(StageArena, Option<StageId>), FeedbackFinderError> {
        let mut arena = StageArena::new();
        let mut ids: HashMap<&str, StageId> = HashMap::new();

        for decl in &self.stages {
            if ids.contains_key(decl.name.as_str()) {
                return Err(FeedbackFinderError::DuplicateStage {
                    name: decl.name.clone(),
                });
            }
            let id = arena.add_stage(&decl.name);
            ids.insert(decl.name.as_str(), id);
        }

        for decl in &self.stages {
            if let Some(next) = &decl.next {
                let to = *ids.get(next.as_str()).ok_or_else(|| {
                    FeedbackFinderError::UnknownSuccessor {
                        from: decl.name.clone(),
                        to: next.clone(),
                    }
                })?;
                let from = ids[decl.name.as_str()];
                arena.link(from, Some(to));
            }
        }

        let entry = match &self.entry {
            Some(name) => Some(*ids.get(name.as_str()).ok_or_else(|| {
                FeedbackFinderError::UnknownEntry { name: name.clone() }
            })?),
            None => arena.first(),
        };

        Ok((arena, entry))
    }
}
