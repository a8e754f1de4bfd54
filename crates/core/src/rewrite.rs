//! Substitution and reconstruction.
//!
//! A rewrite classifies the command, collects one splice per field it
//! changes and applies them all at the end, so bytes outside a changed span
//! are never touched. Malformed end crystal summons are the exception: they
//! are rebuilt as a complete, well-formed command.
//!
//! Bad user input never fails a rewrite. The stage it belongs to is skipped
//! and a [`Warning`] is recorded instead.

use std::cmp::Reverse;
use std::fmt::{Display, Formatter};
use std::ops::Range;

use log::{debug, warn};

use crate::command::{
    format_decimal, format_float_vector, CommandShape, Components, FieldSet, Normalized, Triple,
    BEAM_THICKNESS, COMMAND_PREFIX,
};
use crate::error::{Error, Result};
use crate::extract::Token;
use crate::generate::{escape_block, render_end_crystal, END_CRYSTAL_TAG};
use crate::request::{
    parse_decimal, parse_integer, AxisInput, Mode, ModificationRequest, RecoveryPolicy,
    RewriteInput,
};
use crate::shape::{
    classify, BlockDisplayMatch, Classified, EndCrystalMatch, KillMatch, MalformedSummonMatch,
    SetBlockMatch,
};

/// A recovered problem. The affected stage was skipped or fell back to a
/// default; the rest of the rewrite went ahead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    InvalidNumber { field: String, value: String },
    MissingValue { field: String },
    /// The command has no place to write the requested field.
    MissingSite { field: &'static str },
    CenteringFallback,
    /// Setblock coordinates such as `~ ~1 ~` cannot be moved.
    NonNumericPosition,
    Skipped(String),
}

impl Display for Warning {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Warning::InvalidNumber { field, value } => write!(
                formatter,
                "Invalid {field} value \"{value}\", skipping modification"
            ),
            Warning::MissingValue { field } => {
                write!(formatter, "No {field} value given, skipping modification")
            }
            Warning::MissingSite { field } => {
                write!(formatter, "Command has no {field} to modify")
            }
            Warning::CenteringFallback => formatter
                .write_str("Invalid centering values, using defaults (0.0, 0.0, 0.0)"),
            Warning::NonNumericPosition => formatter
                .write_str("Coordinates are not plain integers, skipping coordinate modification"),
            Warning::Skipped(reason) => write!(formatter, "Skipping modification: {reason}"),
        }
    }
}

impl From<Error> for Warning {
    fn from(error: Error) -> Self {
        match error {
            Error::InvalidNumber { field, value } => Warning::InvalidNumber { field, value },
            Error::MissingValue(field) => Warning::MissingValue { field },
            other => Warning::Skipped(other.to_string()),
        }
    }
}

/// Outcome of one rewrite pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Rewrite {
    pub shape: CommandShape,
    pub input: String,
    /// The rewritten command. Equal to `input` when nothing changed.
    pub text: String,
    pub original: FieldSet,
    pub updated: FieldSet,
    pub warnings: Vec<Warning>,
}

impl Rewrite {
    #[must_use]
    pub fn changed(&self) -> bool {
        self.text != self.input
    }
}

#[derive(Debug, Default)]
struct Edits(Vec<(Range<usize>, String)>);

impl Edits {
    fn replace(&mut self, span: Range<usize>, replacement: String) {
        self.0.push((span, replacement));
    }

    fn append(&mut self, text: &str, addition: String) {
        self.replace(text.len()..text.len(), addition);
    }

    fn apply(mut self, text: &str) -> String {
        self.0.sort_by_key(|(span, _)| Reverse(span.start));

        let mut output = text.to_string();
        for (span, replacement) in self.0 {
            output.replace_range(span, &replacement);
        }

        output
    }
}

type Parser<T> = fn(&str, &str) -> Result<T>;

fn parse_axes<T>(
    prefix: &str,
    input: &AxisInput,
    parse: Parser<T>,
) -> std::result::Result<Triple<Option<T>>, Warning> {
    let supplied = input.supplied();
    let mut values = Vec::with_capacity(3);

    for (axis, value) in ["x", "y", "z"].into_iter().zip(supplied.into_array()) {
        let parsed = match value {
            Some(value) => Some(parse(&format!("{prefix}{axis}"), value)?),
            None => None,
        };
        values.push(parsed);
    }

    let mut values = values.into_iter();
    Ok(Triple::new(
        values.next().flatten(),
        values.next().flatten(),
        values.next().flatten(),
    ))
}

fn resolve_decimal(mode: Mode, original: f64, value: f64) -> f64 {
    match mode {
        Mode::Set => value,
        Mode::Offset => original + value,
    }
}

fn resolve_integer(mode: Mode, original: i64, value: i64) -> i64 {
    match mode {
        Mode::Set => value,
        Mode::Offset => original.saturating_add(value),
    }
}

fn resolve_triple(mode: Mode, base: Triple<i64>, values: Triple<Option<i64>>) -> Triple<i64> {
    base.zip(values).map(|(original, value)| match value {
        Some(value) => resolve_integer(mode, original, value),
        None => original,
    })
}

struct Rewriter<'a> {
    request: &'a ModificationRequest,
    edits: Edits,
    warnings: Vec<Warning>,
}

impl<'a> Rewriter<'a> {
    fn new(request: &'a ModificationRequest) -> Self {
        Self {
            request,
            edits: Edits::default(),
            warnings: Vec::new(),
        }
    }

    fn warn(&mut self, warning: Warning) {
        warn!("{}", warning);
        self.warnings.push(warning);
    }

    fn axes<T>(
        &mut self,
        prefix: &str,
        input: &AxisInput,
        parse: Parser<T>,
    ) -> Option<Triple<Option<T>>> {
        match parse_axes(prefix, input, parse) {
            Ok(values) => Some(values),
            Err(warning) => {
                self.warn(warning);
                None
            }
        }
    }

    /// Centering offsets, zero unless both position and centering are on.
    fn centering(&mut self) -> Triple<f64> {
        let request = self.request;
        let zero = Triple::new(0.0, 0.0, 0.0);
        if !request.modify_centering {
            return zero;
        }

        match parse_axes("center_", &request.centering, parse_decimal) {
            Ok(values) => values.map(|value| value.unwrap_or(0.0)),
            Err(_) => {
                self.warn(Warning::CenteringFallback);
                zero
            }
        }
    }

    fn decimal_position(&mut self, site: &Triple<Token<f64>>) {
        let request = self.request;
        let Some(values) = self.axes("", &request.position, parse_decimal) else {
            return;
        };
        let center = self.centering();

        let slots = site.as_ref().zip(values).zip(center).into_array();
        for ((token, value), center) in slots {
            if let Some(value) = value {
                let resolved = resolve_decimal(request.mode, token.value, value) + center;
                self.edits.replace(token.span.clone(), format_decimal(resolved));
            }
        }
    }

    fn integer_site(&mut self, prefix: &str, input: &AxisInput, site: &Triple<Token<i64>>) {
        let mode = self.request.mode;
        let Some(values) = self.axes(prefix, input, parse_integer) else {
            return;
        };

        for (token, value) in site.as_ref().zip(values).into_array() {
            if let Some(value) = value {
                let resolved = resolve_integer(mode, token.value, value);
                self.edits.replace(token.span.clone(), resolved.to_string());
            }
        }
    }

    fn integer_position(&mut self, site: &Triple<Token<i64>>) {
        let request = self.request;
        if request.modify_position {
            self.integer_site("", &request.position, site);
        }
    }

    fn rename(&mut self, site: Option<&Token<String>>) {
        let Some(tag) = self.request.new_tag() else {
            return;
        };

        match site {
            Some(site) => self.edits.replace(site.span.clone(), tag.to_string()),
            None => self.warn(Warning::MissingSite { field: "tag" }),
        }
    }

    fn translation(&mut self, site: Option<&Token<Components>>) {
        let request = self.request;
        let Some(site) = site else {
            self.warn(Warning::MissingSite { field: "translation" });
            return;
        };
        let Some(values) = self.axes("trans_", &request.translation, parse_decimal) else {
            return;
        };
        let (Some(x), Some(y), Some(z)) = (values.x, values.y, values.z) else {
            self.warn(Warning::MissingValue {
                field: "translation".to_string(),
            });
            return;
        };

        self.edits.replace(
            site.span.clone(),
            format_float_vector("translation", Triple::new(x, y, z)),
        );
    }

    fn scale(&mut self, site: Option<&Token<Components>>) {
        let request = self.request;
        let Some(site) = site else {
            self.warn(Warning::MissingSite { field: "scale" });
            return;
        };

        match parse_decimal("length", request.scale_length.as_deref().unwrap_or_default()) {
            Ok(length) => self.edits.replace(
                site.span.clone(),
                format_float_vector("scale", Triple::new(BEAM_THICKNESS, BEAM_THICKNESS, length)),
            ),
            Err(error) => self.warn(error.into()),
        }
    }

    fn block_display(&mut self, found: &BlockDisplayMatch) {
        let request = self.request;

        if request.modify_position {
            match &found.position {
                Some(position) => self.decimal_position(position),
                None => self.warn(Warning::NonNumericPosition),
            }
        }

        self.rename(found.tag.as_ref());

        if let Some(block) = request.new_block() {
            match &found.block {
                Some(site) => self.edits.replace(site.span.clone(), escape_block(&block)),
                None => self.warn(Warning::MissingSite { field: "block" }),
            }
        }

        if request.modify_translation {
            self.translation(found.translation.as_ref());
        }
        if request.modify_scale {
            self.scale(found.scale.as_ref());
        }
    }

    fn end_crystal(&mut self, found: &EndCrystalMatch) {
        let request = self.request;

        self.integer_position(&found.origin);
        if request.modify_target {
            self.integer_site("target_", &request.target, &found.target);
        }
        self.rename(found.tag.as_ref());
    }

    fn setblock(&mut self, text: &str, found: &SetBlockMatch) {
        let request = self.request;

        if request.modify_position {
            match found.position {
                Some(position) => {
                    let site = position
                        .zip(found.coordinate_spans.clone())
                        .map(|(value, span)| Token::new(value, span));
                    self.integer_site("", &request.position, &site);
                }
                None => self.warn(Warning::NonNumericPosition),
            }
        }

        if let Some(block) = request.new_block() {
            match &found.block {
                Some(site) => self.edits.replace(site.span.clone(), block),
                None => self.edits.append(text, format!(" {block}")),
            }
        }
    }

    fn kill(&mut self, found: &KillMatch) {
        self.integer_position(&found.position);
        self.rename(found.tag.as_ref());
    }

    /// Rebuilds a malformed summon as a complete end crystal command.
    fn malformed_summon(&mut self, found: &MalformedSummonMatch) -> Result<String> {
        let request = self.request;

        let mut origin = found.origin;
        if request.modify_position {
            if let Some(values) = self.axes("", &request.position, parse_integer) {
                origin = resolve_triple(request.mode, found.origin, values);
            }
        }

        let base = found.target.unwrap_or(found.origin);
        let keep_origin = found.target.is_none()
            && request.recovery == RecoveryPolicy::Origin
            && request.mode == Mode::Offset;
        let mut target = base;
        if request.modify_target && !keep_origin {
            if let Some(values) = self.axes("target_", &request.target, parse_integer) {
                target = resolve_triple(request.mode, base, values);
            }
        }

        let tag = request
            .new_tag()
            .map(str::to_string)
            .or_else(|| found.tag.clone())
            .unwrap_or_else(|| END_CRYSTAL_TAG.to_string());

        let rebuilt = render_end_crystal(origin, target, &tag)?;
        debug!("Rebuilt malformed summon as `{}`", rebuilt);
        Ok(format!("{COMMAND_PREFIX}{rebuilt}"))
    }

    /// Runs every stage that applies to `classified`. `None` leaves the
    /// command alone.
    fn run(&mut self, text: &str, classified: &Classified) -> Result<Option<String>> {
        match classified {
            Classified::BlockDisplay(found) => self.block_display(found),
            Classified::EndCrystal(found) => self.end_crystal(found),
            Classified::MalformedSummon(found) => return self.malformed_summon(found).map(Some),
            Classified::SetBlock(found) => self.setblock(text, found),
            Classified::Kill(found) => self.kill(found),
            Classified::TagSelector(found) => self.rename(Some(&found.tag)),
            Classified::Unrecognized => return Ok(None),
        }

        Ok(Some(std::mem::take(&mut self.edits).apply(text)))
    }
}

/// Applies `input.request` to `input.text`.
///
/// Unrecognized commands, and commands no stage changed, come back exactly
/// as given. Otherwise the output keeps the input's choice of leading `/`.
///
/// # Errors
///
/// Only fails when a command template cannot be rendered. Bad field values
/// are reported through [`Rewrite::warnings`].
pub fn rewrite(input: &RewriteInput) -> Result<Rewrite> {
    let normalized = Normalized::new(&input.text);
    let classified = classify(&normalized.text);
    let original = classified.fields();
    debug!("Original fields: {:?}", original);

    let mut rewriter = Rewriter::new(&input.request);
    let text = match rewriter.run(&normalized.text, &classified)? {
        Some(rewritten) if rewritten != normalized.text => normalized.restore(rewritten),
        _ => input.text.clone(),
    };

    let updated = if text == input.text {
        original.clone()
    } else {
        classify(&Normalized::new(&text).text).fields()
    };
    debug!("Updated fields: {:?}", updated);

    Ok(Rewrite {
        shape: classified.shape(),
        input: input.text.clone(),
        text,
        original,
        updated,
        warnings: rewriter.warnings,
    })
}
