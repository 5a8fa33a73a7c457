//! Rebuilding an SVG `d` attribute from commands.

use crate::command::path_command::PathCommand;
use crate::foundation::core::FormatOptions;

/// Join the cached serialized forms with single spaces.
pub fn path_data(commands: &[PathCommand]) -> String {
    commands
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Like [`path_data`], at the precision given by `opts`.
pub fn path_data_with(commands: &[PathCommand], opts: &FormatOptions) -> String {
    commands
        .iter()
        .map(|c| c.to_svg_string(opts))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
#[path = "../../tests/unit/command/path_data.rs"]
mod tests;
