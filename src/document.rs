use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

use crate::command::bez::to_bez_path;
use crate::command::path_command::{PathCommand, Segment};
use crate::command::path_data::{path_data, path_data_with};
use crate::foundation::core::{Affine, BezPath, BezierOptions, FormatOptions};
use crate::foundation::error::{PathMorphError, PathMorphResult};

/// An ordered list of commands as exchanged in JSON.
///
/// ```json
/// {"commands": [{"kind": "M", "args": [0, 0]}, {"kind": "L", "args": [0, 0, 4, 4]}]}
/// ```
///
/// Every command is checked on load, so a document that parses is made of valid commands.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PathDocument {
    pub commands: Vec<PathCommand>,
}

impl PathDocument {
    pub fn new(commands: Vec<PathCommand>) -> Self {
        Self { commands }
    }

    /// Parse a document from a JSON reader.
    pub fn from_reader<R: Read>(r: R) -> PathMorphResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| PathMorphError::validation(format!("parse path document JSON: {e}")))
    }

    pub fn from_json_str(s: &str) -> PathMorphResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| PathMorphError::validation(format!("parse path document JSON: {e}")))
    }

    /// Parse a document from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> PathMorphResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            PathMorphError::validation(format!("open path document '{}': {e}", path.display()))
        })?;
        let doc = Self::from_reader(BufReader::new(f))?;
        tracing::debug!(
            path = %path.display(),
            commands = doc.commands.len(),
            "loaded path document"
        );
        Ok(doc)
    }

    pub fn to_writer_pretty<W: Write>(&self, w: W) -> PathMorphResult<()> {
        serde_json::to_writer_pretty(w, self)
            .map_err(|e| PathMorphError::serde(format!("write path document JSON: {e}")))
    }

    pub fn to_json_string_pretty(&self) -> PathMorphResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PathMorphError::serde(format!("write path document JSON: {e}")))
    }

    /// The SVG `d` attribute for this document.
    pub fn path_data(&self) -> String {
        path_data(&self.commands)
    }

    pub fn path_data_with(&self, opts: &FormatOptions) -> String {
        path_data_with(&self.commands, opts)
    }

    #[tracing::instrument(skip(self, matrices), fields(commands = self.commands.len()))]
    pub fn transform(&self, matrices: &[Affine]) -> Self {
        Self::new(self.commands.iter().map(|c| c.transform(matrices)).collect())
    }

    /// The same path traced from its last point back to its first.
    ///
    /// Command order is reversed and every command is reversed. The old final end point
    /// becomes a leading move, replacing any leading move the path had. Closing segments turn
    /// into explicit lines, since a `Z` would close toward the wrong subpath start.
    #[tracing::instrument(skip(self), fields(commands = self.commands.len()))]
    pub fn reverse(&self) -> Self {
        let Some(last) = self.commands.last() else {
            return Self::default();
        };

        let (lead_split, body) = match self.commands.split_first() {
            Some((first, rest)) if first.start().is_none() => (first.is_split(), rest),
            _ => (false, self.commands.as_slice()),
        };

        let mut commands = Vec::with_capacity(body.len() + 1);
        commands.push(PathCommand::new_move(None, last.end()).with_split(lead_split));
        for cmd in body.iter().rev() {
            let reversed = match *cmd.segment() {
                Segment::ClosePath { start, end } => PathCommand::from_segment(
                    Segment::Line {
                        start: end,
                        end: start,
                    },
                    cmd.is_split(),
                ),
                _ => cmd.reverse(),
            };
            commands.push(reversed);
        }
        Self::new(commands)
    }

    pub fn to_bez_path(&self, opts: &BezierOptions) -> BezPath {
        to_bez_path(&self.commands, opts)
    }
}

#[cfg(test)]
#[path = "../tests/unit/document.rs"]
mod tests;
