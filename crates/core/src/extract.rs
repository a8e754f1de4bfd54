//! Field extraction patterns.
//!
//! Each function looks for one field and returns the parsed value together
//! with the byte span it was read from, so the rewriter can splice a new
//! value into exactly that span. A field that is missing or does not parse
//! is reported as `None`.

use std::ops::Range;
use std::str::FromStr;

use lazy_static::lazy_static;
use log::warn;
use regex::{Captures, Regex};

use crate::command::{Components, Triple};

lazy_static! {
    static ref BLOCK_DISPLAY_POSITION: Regex = Regex::new(
        r"^/summon minecraft:block_display\s+(-?\d+(?:\.\d*)?)\s+(-?\d+(?:\.\d*)?)\s+(-?\d+(?:\.\d*)?)"
    )
    .unwrap();
    static ref BLOCK_STATE_NAME: Regex =
        Regex::new(r#"block_state:\s*\{\s*"?Name"?\s*:\s*"((?:[^"\\]|\\.)*)""#).unwrap();
    static ref TAGS_ARRAY: Regex = Regex::new(r#"Tags:\s*\[\s*"([^"]*)""#).unwrap();
    static ref SELECTOR_TAG: Regex = Regex::new(r"\btag=([^,\s\]]+)").unwrap();
    static ref TRANSLATION: Regex = Regex::new(r"\btranslation:\s*\[([^\]]*)\]").unwrap();
    static ref SCALE: Regex = Regex::new(r"\bscale:\s*\[([^\]]*)\]").unwrap();
    static ref FLOAT_COMPONENT: Regex = Regex::new(r"^(-?\d+(?:\.\d*)?|-?\.\d+)[fFdD]?$").unwrap();
    static ref END_CRYSTAL_HEAD: Regex = Regex::new(
        r"summon (?:minecraft:)?end_crystal\s+(-?\d+)\s+(-?\d+)\s+(-?\d+)(?:[\s{]|$)"
    )
    .unwrap();
    static ref BEAM_TARGET: Regex = Regex::new(r"BeamTarget:\s*\{([^}]*)\}").unwrap();
    static ref NBT_INTEGER: Regex = Regex::new(r"([A-Za-z_]+)\s*:\s*(-?\d+)").unwrap();
    static ref KILL_SELECTOR: Regex = Regex::new(r"kill @e\[([^\]]*)\]").unwrap();
    static ref SELECTOR_INTEGER: Regex = Regex::new(r"([A-Za-z_]+)\s*=\s*(-?\d+)").unwrap();
    static ref SUMMON_KEYWORD: Regex = Regex::new(r"(?:^/?|\s)summon\s").unwrap();
    static ref INTEGER: Regex = Regex::new(r"-?\d+").unwrap();
    static ref WORD: Regex = Regex::new(r"\S+").unwrap();
}

/// A value read from command text and the bytes it occupies.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<T> {
    pub value: T,
    pub span: Range<usize>,
}

impl<T> Token<T> {
    pub fn new(value: T, span: Range<usize>) -> Self {
        Self { value, span }
    }
}

fn capture_token<T: FromStr>(captures: &Captures<'_>, index: usize) -> Option<Token<T>> {
    let group = captures.get(index)?;
    let value = group.as_str().parse::<T>().ok()?;
    Some(Token::new(value, group.range()))
}

fn capture_string(captures: &Captures<'_>, index: usize) -> Option<Token<String>> {
    let group = captures.get(index)?;
    Some(Token::new(group.as_str().to_string(), group.range()))
}

/// Parses an integer literal, clamping values beyond `i64` to its bounds.
fn saturating_integer(literal: &str) -> Option<i64> {
    if let Ok(value) = literal.parse::<i64>() {
        return Some(value);
    }

    let (digits, bound) = match literal.strip_prefix('-') {
        Some(digits) => (digits, i64::MIN),
        None => (literal, i64::MAX),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    warn!("Integer `{}` is out of range, using {}", literal, bound);
    Some(bound)
}

fn capture_integer(captures: &Captures<'_>, index: usize) -> Option<Token<i64>> {
    let group = captures.get(index)?;
    Some(Token::new(saturating_integer(group.as_str())?, group.range()))
}

/// Whether `summon` appears as a command word rather than inside a name.
pub fn has_summon_keyword(text: &str) -> bool {
    SUMMON_KEYWORD.is_match(text)
}

/// Position triple directly after `/summon minecraft:block_display`.
pub fn block_display_position(text: &str) -> Option<Triple<Token<f64>>> {
    let captures = BLOCK_DISPLAY_POSITION.captures(text)?;
    Some(Triple::new(
        capture_token(&captures, 1)?,
        capture_token(&captures, 2)?,
        capture_token(&captures, 3)?,
    ))
}

/// Value of `block_state:{Name:"…"}`, escapes left as written.
pub fn block_state_name(text: &str) -> Option<Token<String>> {
    let captures = BLOCK_STATE_NAME.captures(text)?;
    capture_string(&captures, 1)
}

/// First entry of a `Tags:["…"]` array.
pub fn tags_array(text: &str) -> Option<Token<String>> {
    let captures = TAGS_ARRAY.captures(text)?;
    capture_string(&captures, 1)
}

/// First `tag=` selector argument at or after `from`.
pub fn selector_tag(text: &str, from: usize) -> Option<Token<String>> {
    let captures = SELECTOR_TAG.captures_at(text, from)?;
    capture_string(&captures, 1)
}

fn float_vector(pattern: &Regex, text: &str) -> Option<Token<Components>> {
    let captures = pattern.captures(text)?;
    let whole = captures.get(0)?;
    let body = captures.get(1)?.as_str();

    let mut components: [Option<f64>; 3] = [None; 3];
    for (slot, part) in components.iter_mut().zip(body.split(',')) {
        *slot = FLOAT_COMPONENT
            .captures(part.trim())
            .and_then(|c| c.get(1))
            .and_then(|m| m.as_str().parse::<f64>().ok());
    }

    let [x, y, z] = components;
    Some(Token::new(Triple::new(x, y, z), whole.range()))
}

/// The whole `translation:[…]` site and its components.
pub fn translation(text: &str) -> Option<Token<Components>> {
    float_vector(&TRANSLATION, text)
}

/// The whole `scale:[…]` site and its components.
pub fn scale(text: &str) -> Option<Token<Components>> {
    float_vector(&SCALE, text)
}

/// Origin of a `summon end_crystal X Y Z` and the offset where it ends.
pub fn end_crystal_origin(text: &str) -> Option<(Triple<Token<i64>>, usize)> {
    let captures = END_CRYSTAL_HEAD.captures(text)?;
    let z = capture_integer(&captures, 3)?;
    let end = z.span.end;
    Some((
        Triple::new(capture_integer(&captures, 1)?, capture_integer(&captures, 2)?, z),
        end,
    ))
}

fn keyed_integers(
    pattern: &Regex,
    body: &str,
    offset: usize,
    keys: [&str; 3],
) -> Option<Triple<Token<i64>>> {
    let mut found: [Option<Token<i64>>; 3] = [None, None, None];

    for captures in pattern.captures_iter(body) {
        let (Some(key), Some(value)) = (captures.get(1), captures.get(2)) else {
            continue;
        };

        let key_start_ok = body[..key.start()]
            .chars()
            .next_back()
            .map_or(true, |c| c == ',' || c == '{' || c == '[' || c.is_whitespace());
        let value_end_ok = body[value.end()..]
            .chars()
            .next()
            .map_or(true, |c| c == ',' || c == '}' || c == ']' || c.is_whitespace());
        if !key_start_ok || !value_end_ok {
            continue;
        }

        let Some(index) = keys.iter().position(|k| *k == key.as_str()) else {
            continue;
        };
        if found[index].is_some() {
            continue;
        }
        if let Some(parsed) = saturating_integer(value.as_str()) {
            found[index] = Some(Token::new(parsed, value.start() + offset..value.end() + offset));
        }
    }

    let [x, y, z] = found;
    Some(Triple::new(x?, y?, z?))
}

/// `X:`, `Y:`, `Z:` of the first `BeamTarget:{…}` at or after `from`,
/// looked up independently of their order.
pub fn beam_target(text: &str, from: usize) -> Option<Triple<Token<i64>>> {
    let captures = BEAM_TARGET.captures_at(text, from)?;
    let body = captures.get(1)?;
    keyed_integers(&NBT_INTEGER, body.as_str(), body.start(), ["X", "Y", "Z"])
}

/// Selector body of `kill @e[…]` with its `x=`, `y=`, `z=` arguments.
pub fn kill_selector(text: &str) -> Option<(Triple<Token<i64>>, Range<usize>)> {
    let captures = KILL_SELECTOR.captures(text)?;
    let body = captures.get(1)?;
    let position = keyed_integers(&SELECTOR_INTEGER, body.as_str(), body.start(), ["x", "y", "z"])?;
    Some((position, body.range()))
}

/// Standalone integers: delimited by whitespace, commas or brackets, never
/// part of a decimal, identifier or `key:value` pair.
pub fn bare_integers(text: &str) -> Vec<Token<i64>> {
    INTEGER
        .find_iter(text)
        .filter(|m| {
            let before = text[..m.start()].chars().next_back();
            let after = text[m.end()..].chars().next();
            let before_ok = before
                .map_or(true, |c| c.is_whitespace() || matches!(c, ',' | '[' | '{' | '('));
            let after_ok =
                after.map_or(true, |c| c.is_whitespace() || matches!(c, ',' | ']' | '}' | ')'));
            before_ok && after_ok
        })
        .filter_map(|m| {
            saturating_integer(m.as_str()).map(|value| Token::new(value, m.range()))
        })
        .collect()
}

/// Whitespace separated words with their spans.
pub fn words(text: &str) -> Vec<Token<&str>> {
    WORD.find_iter(text)
        .map(|m| Token::new(m.as_str(), m.range()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLOCK_DISPLAY: &str = r#"/summon minecraft:block_display 1.000000 2.500000 -3.000000 {block_state:{Name:"minecraft:stone"},transformation:{translation:[0.5f,0.0f,0.0f],scale:[0.1f,0.1f,-150.0f]},Tags:["beam1"]}"#;

    #[test]
    fn test_summon_keyword_is_a_whole_word() {
        assert!(has_summon_keyword("/summon end_crystal 1 2 3"));
        assert!(has_summon_keyword("/execute at @p run summon end_crystal ~ ~ ~"));
        assert!(!has_summon_keyword("/tp @e[tag=summoned_beam,limit=1] 10 64 10"));
    }

    #[test]
    fn test_out_of_range_integers_saturate() {
        let (position, _) = kill_selector("/kill @e[x=99999999999999999999,y=-99999999999999999999,z=3]").unwrap();
        assert_eq!(position.x.value, i64::MAX);
        assert_eq!(position.y.value, i64::MIN);
        assert_eq!(position.z.value, 3);

        let integers = bare_integers("/summon end_crystal 99999999999999999999 64 0");
        assert_eq!(integers[0].value, i64::MAX);
    }

    #[test]
    fn test_block_display_position() {
        let position = block_display_position(BLOCK_DISPLAY).unwrap();
        assert_eq!(position.x.value, 1.0);
        assert_eq!(position.y.value, 2.5);
        assert_eq!(position.z.value, -3.0);
        assert_eq!(&BLOCK_DISPLAY[position.z.span.clone()], "-3.000000");
    }

    #[test]
    fn test_block_state_name_plain_and_quoted_key() {
        let name = block_state_name(BLOCK_DISPLAY).unwrap();
        assert_eq!(name.value, "minecraft:stone");
        assert_eq!(&BLOCK_DISPLAY[name.span], "minecraft:stone");

        let quoted = block_state_name(r#"{block_state:{"Name":"minecraft:glass"}}"#).unwrap();
        assert_eq!(quoted.value, "minecraft:glass");
    }

    #[test]
    fn test_tags_array_first_entry() {
        let tag = tags_array(r#"{Tags:["beam1","other"]}"#).unwrap();
        assert_eq!(tag.value, "beam1");
        assert!(tags_array("{}").is_none());
    }

    #[test]
    fn test_selector_tag() {
        let text = "/execute as @e[type=marker,tag=beam1] at @s run tp @s ~ ~ ~";
        let tag = selector_tag(text, 0).unwrap();
        assert_eq!(tag.value, "beam1");
        assert_eq!(&text[tag.span], "beam1");
    }

    #[test]
    fn test_translation_and_scale_components() {
        let translation = translation(BLOCK_DISPLAY).unwrap();
        assert_eq!(translation.value, Triple::new(Some(0.5), Some(0.0), Some(0.0)));
        assert!(BLOCK_DISPLAY[translation.span].starts_with("translation:["));

        let scale = scale(BLOCK_DISPLAY).unwrap();
        assert_eq!(scale.value.z, Some(-150.0));
    }

    #[test]
    fn test_partial_vector_components_are_none() {
        let partial = translation("translation:[0.5f,,]").unwrap();
        assert_eq!(partial.value, Triple::new(Some(0.5), None, None));

        let empty = scale("scale:[]").unwrap();
        assert_eq!(empty.value, Triple::new(None, None, None));
    }

    #[test]
    fn test_end_crystal_origin_and_beam_target_any_order() {
        let text = r#"summon end_crystal 1 2 3 {BeamTarget:{Z:30,X:10,Y:20}}"#;
        let (origin, end) = end_crystal_origin(text).unwrap();
        assert_eq!(origin.map(|t| t.value).into_array(), [1, 2, 3]);

        let target = beam_target(text, end).unwrap();
        assert_eq!(target.as_ref().map(|t| t.value).into_array(), [10, 20, 30]);
        assert_eq!(&text[target.z.span.clone()], "30");
    }

    #[test]
    fn test_end_crystal_origin_rejects_decimals() {
        assert!(end_crystal_origin("summon end_crystal 1 2 3.5 {}").is_none());
    }

    #[test]
    fn test_beam_target_requires_all_axes() {
        assert!(beam_target("BeamTarget:{X:1,Y:2}", 0).is_none());
    }

    #[test]
    fn test_kill_selector() {
        let text = "kill @e[type=armor_stand,z=7,x=5,y=6]";
        let (position, body) = kill_selector(text).unwrap();
        assert_eq!(position.map(|t| t.value).into_array(), [5, 6, 7]);
        assert_eq!(&text[body], "type=armor_stand,z=7,x=5,y=6");
    }

    #[test]
    fn test_kill_selector_ignores_distance() {
        let text = "kill @e[type=end_crystal,distance=..2,x=1,y=2,z=3]";
        let (position, _) = kill_selector(text).unwrap();
        assert_eq!(position.map(|t| t.value).into_array(), [1, 2, 3]);
    }

    #[test]
    fn test_bare_integers() {
        let text = "summon foo 1.5 10 -20 {X:4} 30 a7";
        let values: Vec<i64> = bare_integers(text).into_iter().map(|t| t.value).collect();
        assert_eq!(values, vec![10, -20, 30]);
    }

    #[test]
    fn test_words_spans() {
        let text = "/setblock  1 2";
        let found = words(text);
        assert_eq!(found.len(), 3);
        assert_eq!(found[1].value, "1");
        assert_eq!(found[1].span, 11..12);
    }
}
