//! Command shape classification.
//!
//! Every supported grammar has its own parser returning `Some(match)` with
//! the spans the rewriter needs, or `None`. [`classify`] tries them in a
//! fixed order and the first hit wins.

use std::ops::Range;

use log::debug;

use crate::command::{Components, Coordinates, CommandShape, FieldSet, Formation, Triple};
use crate::extract::{self, Token};

const BLOCK_DISPLAY_KEYWORD: &str = "/summon minecraft:block_display";
const SETBLOCK_KEYWORD: &str = "/setblock";

#[derive(Debug, Clone, PartialEq)]
pub struct BlockDisplayMatch {
    pub position: Option<Triple<Token<f64>>>,
    pub block: Option<Token<String>>,
    pub tag: Option<Token<String>>,
    pub translation: Option<Token<Components>>,
    pub scale: Option<Token<Components>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EndCrystalMatch {
    pub origin: Triple<Token<i64>>,
    pub target: Triple<Token<i64>>,
    pub tag: Option<Token<String>>,
}

/// A `summon` that only yields bare integers; rebuilt from scratch.
#[derive(Debug, Clone, PartialEq)]
pub struct MalformedSummonMatch {
    pub origin: Triple<i64>,
    pub target: Option<Triple<i64>>,
    pub tag: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SetBlockMatch {
    /// The three coordinate words, whatever they contain.
    pub coordinate_spans: Triple<Range<usize>>,
    /// Present only when all three coordinates are plain integers.
    pub position: Option<Triple<i64>>,
    pub block: Option<Token<String>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct KillMatch {
    pub position: Triple<Token<i64>>,
    pub tag: Option<Token<String>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TagSelectorMatch {
    pub tag: Token<String>,
}

/// Result of classifying a normalized command.
#[derive(Debug, Clone, PartialEq)]
pub enum Classified {
    BlockDisplay(BlockDisplayMatch),
    EndCrystal(EndCrystalMatch),
    MalformedSummon(MalformedSummonMatch),
    SetBlock(SetBlockMatch),
    Kill(KillMatch),
    TagSelector(TagSelectorMatch),
    Unrecognized,
}

fn values<T: Clone>(triple: &Triple<Token<T>>) -> Triple<T> {
    triple.as_ref().map(|token| token.value.clone())
}

fn value_of<T: Clone>(token: &Option<Token<T>>) -> Option<T> {
    token.as_ref().map(|token| token.value.clone())
}

impl Classified {
    #[must_use]
    pub fn shape(&self) -> CommandShape {
        match self {
            Classified::BlockDisplay(_) => CommandShape::SummonBlockDisplay,
            Classified::EndCrystal(_) => CommandShape::SummonEndCrystal(Formation::WellFormed),
            Classified::MalformedSummon(_) => CommandShape::SummonEndCrystal(Formation::Malformed),
            Classified::SetBlock(_) => CommandShape::SetBlock,
            Classified::Kill(_) => CommandShape::KillSelector,
            Classified::TagSelector(_) => CommandShape::ExecuteOrTeleport,
            Classified::Unrecognized => CommandShape::Unrecognized,
        }
    }

    /// The facts this shape carries, without spans.
    #[must_use]
    pub fn fields(&self) -> FieldSet {
        match self {
            Classified::BlockDisplay(found) => FieldSet {
                position: found
                    .position
                    .as_ref()
                    .map(|position| Coordinates::Decimal(values(position))),
                block: value_of(&found.block),
                tag: value_of(&found.tag),
                translation: value_of(&found.translation),
                scale: value_of(&found.scale),
                ..FieldSet::default()
            },
            Classified::EndCrystal(found) => FieldSet {
                position: Some(Coordinates::Integer(values(&found.origin))),
                target: Some(values(&found.target)),
                tag: value_of(&found.tag),
                ..FieldSet::default()
            },
            Classified::MalformedSummon(found) => FieldSet {
                position: Some(Coordinates::Integer(found.origin)),
                target: found.target,
                tag: found.tag.clone(),
                ..FieldSet::default()
            },
            Classified::SetBlock(found) => FieldSet {
                position: found.position.map(Coordinates::Integer),
                block: value_of(&found.block),
                ..FieldSet::default()
            },
            Classified::Kill(found) => FieldSet {
                position: Some(Coordinates::Integer(values(&found.position))),
                tag: value_of(&found.tag),
                ..FieldSet::default()
            },
            Classified::TagSelector(found) => FieldSet {
                tag: Some(found.tag.value.clone()),
                ..FieldSet::default()
            },
            Classified::Unrecognized => FieldSet::default(),
        }
    }
}

fn first_word(text: &str) -> &str {
    text.split_whitespace().next().unwrap_or("")
}

pub fn parse_block_display(text: &str) -> Option<BlockDisplayMatch> {
    if !text.starts_with(BLOCK_DISPLAY_KEYWORD) || !text.contains("block_state") {
        return None;
    }

    Some(BlockDisplayMatch {
        position: extract::block_display_position(text),
        block: extract::block_state_name(text),
        tag: extract::tags_array(text),
        translation: extract::translation(text),
        scale: extract::scale(text),
    })
}

pub fn parse_end_crystal(text: &str) -> Option<EndCrystalMatch> {
    let (origin, end) = extract::end_crystal_origin(text)?;
    let target = extract::beam_target(text, end)?;

    Some(EndCrystalMatch {
        origin,
        target,
        tag: extract::tags_array(text),
    })
}

pub fn parse_malformed_summon(text: &str) -> Option<MalformedSummonMatch> {
    if !extract::has_summon_keyword(text) {
        return None;
    }

    let integers = extract::bare_integers(text);
    let [x, y, z] = match integers.as_slice() {
        [x, y, z, ..] => [x.value, y.value, z.value],
        _ => return None,
    };

    Some(MalformedSummonMatch {
        origin: Triple::new(x, y, z),
        target: extract::beam_target(text, 0).map(|target| values(&target)),
        tag: extract::tags_array(text).map(|tag| tag.value),
    })
}

pub fn parse_setblock(text: &str) -> Option<SetBlockMatch> {
    let words = extract::words(text);
    if words.len() < 4 || words[0].value != SETBLOCK_KEYWORD {
        return None;
    }

    let coordinates = Triple::new(&words[1], &words[2], &words[3]);
    let position = match (
        coordinates.x.value.parse::<i64>(),
        coordinates.y.value.parse::<i64>(),
        coordinates.z.value.parse::<i64>(),
    ) {
        (Ok(x), Ok(y), Ok(z)) => Some(Triple::new(x, y, z)),
        _ => None,
    };

    Some(SetBlockMatch {
        coordinate_spans: coordinates.map(|word| word.span.clone()),
        position,
        block: words
            .get(4)
            .map(|word| Token::new(word.value.to_string(), word.span.clone())),
    })
}

pub fn parse_kill(text: &str) -> Option<KillMatch> {
    let (position, selector) = extract::kill_selector(text)?;
    let tag = extract::selector_tag(text, selector.start).filter(|tag| tag.span.end <= selector.end);

    Some(KillMatch { position, tag })
}

pub fn parse_tag_selector(text: &str) -> Option<TagSelectorMatch> {
    if !matches!(first_word(text), "/execute" | "/tp") {
        return None;
    }

    extract::selector_tag(text, 0).map(|tag| TagSelectorMatch { tag })
}

/// Classifies normalized command text (leading `/` already present).
pub fn classify(text: &str) -> Classified {
    let classified = if let Some(found) = parse_block_display(text) {
        Classified::BlockDisplay(found)
    } else if let Some(found) = parse_end_crystal(text) {
        Classified::EndCrystal(found)
    } else if let Some(found) = parse_malformed_summon(text) {
        Classified::MalformedSummon(found)
    } else if let Some(found) = parse_setblock(text) {
        Classified::SetBlock(found)
    } else if let Some(found) = parse_kill(text) {
        Classified::Kill(found)
    } else if let Some(found) = parse_tag_selector(text) {
        Classified::TagSelector(found)
    } else {
        Classified::Unrecognized
    };

    debug!("Classified `{}` as {}", text, classified.shape());
    classified
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_display_requires_block_state() {
        let text = r#"/summon minecraft:block_display 1.0 2.0 3.0 {block_state:{Name:"minecraft:stone"},Tags:["beam1"]}"#;
        assert_eq!(classify(text).shape(), CommandShape::SummonBlockDisplay);

        let without_state = r#"/summon minecraft:block_display 1.0 2.0 3.0 {Tags:["beam1"]}"#;
        assert_ne!(classify(without_state).shape(), CommandShape::SummonBlockDisplay);
    }

    #[test]
    fn test_block_display_fields() {
        let text = r#"/summon minecraft:block_display 1.000000 2.000000 3.000000 {block_state:{Name:"minecraft:stone"},Tags:["beam1"]}"#;
        let fields = classify(text).fields();
        assert_eq!(
            fields.position,
            Some(Coordinates::Decimal(Triple::new(1.0, 2.0, 3.0)))
        );
        assert_eq!(fields.block.as_deref(), Some("minecraft:stone"));
        assert_eq!(fields.tag.as_deref(), Some("beam1"));
        assert!(fields.translation.is_none());
        assert!(fields.target.is_none());
    }

    #[test]
    fn test_well_formed_end_crystal() {
        for text in [
            r#"/summon end_crystal 0 64 0 {ShowBottom:0b,Invulnerable:1b,Tags:["laser"],BeamTarget:{X:10,Y:5,Z:10}}"#,
            r#"/summon minecraft:end_crystal 0 64 0 {BeamTarget:{Y:5,Z:10,X:10}}"#,
        ] {
            let classified = classify(text);
            assert_eq!(
                classified.shape(),
                CommandShape::SummonEndCrystal(Formation::WellFormed)
            );
            assert_eq!(classified.fields().target, Some(Triple::new(10, 5, 10)));
        }
    }

    #[test]
    fn test_summon_inside_a_tag_is_not_a_summon() {
        let classified = classify("/tp @e[tag=summoned_beam,limit=1] 10 64 10");
        assert_eq!(classified.shape(), CommandShape::ExecuteOrTeleport);
        assert_eq!(classified.fields().tag.as_deref(), Some("summoned_beam"));
    }

    #[test]
    fn test_malformed_summon() {
        let classified = classify("/summon 4 5 6");
        assert_eq!(
            classified.shape(),
            CommandShape::SummonEndCrystal(Formation::Malformed)
        );
        let fields = classified.fields();
        assert_eq!(fields.position, Some(Coordinates::Integer(Triple::new(4, 5, 6))));
        assert!(fields.target.is_none());
    }

    #[test]
    fn test_malformed_summon_with_beam_target() {
        let classified = classify("/summon end_crystal 1 2 {BeamTarget:{X:7,Y:8,Z:9}} 3");
        assert_eq!(
            classified.shape(),
            CommandShape::SummonEndCrystal(Formation::Malformed)
        );
        assert_eq!(classified.fields().target, Some(Triple::new(7, 8, 9)));
    }

    #[test]
    fn test_summon_without_integers_is_unrecognized() {
        assert_eq!(classify("/summon zombie ~ ~ ~").shape(), CommandShape::Unrecognized);
    }

    #[test]
    fn test_setblock() {
        let classified = classify("/setblock 10 20 30 minecraft:stone");
        assert_eq!(classified.shape(), CommandShape::SetBlock);
        let fields = classified.fields();
        assert_eq!(
            fields.position,
            Some(Coordinates::Integer(Triple::new(10, 20, 30)))
        );
        assert_eq!(fields.block.as_deref(), Some("minecraft:stone"));
    }

    #[test]
    fn test_setblock_relative_coordinates_have_no_position() {
        let classified = classify("/setblock ~ ~1 ~ minecraft:stone");
        assert_eq!(classified.shape(), CommandShape::SetBlock);
        assert!(classified.fields().position.is_none());
    }

    #[test]
    fn test_setblock_needs_four_words() {
        assert_eq!(classify("/setblock 1 2").shape(), CommandShape::Unrecognized);
    }

    #[test]
    fn test_kill_selector() {
        let classified = classify("/kill @e[type=end_crystal,tag=laser,distance=..2,x=1,y=2,z=3]");
        assert_eq!(classified.shape(), CommandShape::KillSelector);
        let fields = classified.fields();
        assert_eq!(fields.tag.as_deref(), Some("laser"));
        assert_eq!(fields.position, Some(Coordinates::Integer(Triple::new(1, 2, 3))));
    }

    #[test]
    fn test_execute_and_tp_tags() {
        let execute = classify("/execute as @e[tag=beam1] at @s run tp @s ~ ~ ~ ~1 ~0");
        assert_eq!(execute.shape(), CommandShape::ExecuteOrTeleport);
        assert_eq!(execute.fields().tag.as_deref(), Some("beam1"));

        let tp = classify("/tp @e[tag=beam2,limit=1] 1 2 3");
        assert_eq!(tp.shape(), CommandShape::ExecuteOrTeleport);

        assert_eq!(classify("/tp @s 1 2 3").shape(), CommandShape::Unrecognized);
    }

    #[test]
    fn test_unrecognized() {
        assert_eq!(classify("/say hello").shape(), CommandShape::Unrecognized);
        assert!(classify("/say hello").fields().is_empty());
    }
}
