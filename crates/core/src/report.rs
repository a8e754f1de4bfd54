//! Human readable summary of a rewrite.

use std::fmt::{Display, Formatter};

use crate::command::Components;
use crate::rewrite::Rewrite;

/// What a report line describes. Front ends colour lines by kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Command,
    Coordinate,
    ModifiedCoordinate,
    Unchanged,
    Changed,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub kind: ReportKind,
    pub text: String,
}

impl ReportLine {
    fn new(kind: ReportKind, text: String) -> Self {
        Self { kind, text }
    }
}

impl Display for ReportLine {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(&self.text)
    }
}

fn format_components(components: &Components) -> String {
    let part = |value: Option<f64>| match value {
        Some(value) => format!("{value:.6}f"),
        None => "-".to_string(),
    };

    format!(
        "[{}, {}, {}]",
        part(components.x),
        part(components.y),
        part(components.z)
    )
}

impl Rewrite {
    /// Report lines in display order: the input and what was found in it,
    /// the output and what changed, then one line per warning.
    #[must_use]
    pub fn report(&self) -> Vec<ReportLine> {
        use ReportKind::*;

        let original = &self.original;
        let updated = &self.updated;
        let mut lines = vec![ReportLine::new(
            Command,
            format!("Input Command: {}", self.input),
        )];

        if let Some(position) = &original.position {
            lines.push(ReportLine::new(
                Coordinate,
                format!("Original Coordinates: {position}"),
            ));
        }
        if let Some(target) = &original.target {
            lines.push(ReportLine::new(Coordinate, format!("Original Target: {target}")));
        }
        if let Some(tag) = &original.tag {
            lines.push(ReportLine::new(Unchanged, format!("Original Tag: {tag}")));
        }
        if let Some(block) = &original.block {
            lines.push(ReportLine::new(Unchanged, format!("Original Block: {block}")));
        }
        if let Some(translation) = &original.translation {
            lines.push(ReportLine::new(
                Unchanged,
                format!("Original Translation: {}", format_components(translation)),
            ));
        }
        if let Some(scale) = &original.scale {
            lines.push(ReportLine::new(
                Unchanged,
                format!("Original Scale: {}", format_components(scale)),
            ));
        }

        lines.push(ReportLine::new(
            Command,
            format!("Modified Command: {}", self.text),
        ));

        if let Some(position) = &updated.position {
            lines.push(ReportLine::new(
                ModifiedCoordinate,
                format!("New Coordinates: {position}"),
            ));
        }
        if let Some(target) = updated.target.filter(|target| Some(*target) != original.target) {
            lines.push(ReportLine::new(ModifiedCoordinate, format!("New Target: {target}")));
        }
        if let Some(tag) = updated.tag.as_ref().filter(|tag| original.tag.as_ref() != Some(*tag)) {
            lines.push(ReportLine::new(Changed, format!("New Tag: {tag}")));
        }
        if let Some(block) = updated
            .block
            .as_ref()
            .filter(|block| original.block.as_ref() != Some(*block))
        {
            lines.push(ReportLine::new(Changed, format!("New Block: {block}")));
        }
        if let Some(translation) = updated.translation.filter(|t| Some(*t) != original.translation) {
            lines.push(ReportLine::new(
                Changed,
                format!("New Translation: {}", format_components(&translation)),
            ));
        }
        if let Some(scale) = updated.scale.filter(|s| Some(*s) != original.scale) {
            lines.push(ReportLine::new(
                Changed,
                format!("New Scale: {}", format_components(&scale)),
            ));
        }

        for warning in &self.warnings {
            lines.push(ReportLine::new(Warning, format!("Warning: {warning}")));
        }

        lines
    }
}
