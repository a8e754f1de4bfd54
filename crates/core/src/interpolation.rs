use std::collections::{HashMap, HashSet};

use leon::Template;

use crate::error::Result;

/// Values substituted into one command template.
pub type Context = HashMap<String, String>;

pub fn build_context<const N: usize>(pairs: [(&str, String); N]) -> Context {
    pairs
        .into_iter()
        .map(|(key, value)| (key.to_string(), value))
        .collect()
}

/// Find all tokens of a command template.
pub fn get_tokens(template: &Template) -> HashSet<String> {
    template.keys().map(|key| (*key).to_string()).collect()
}

/// Renders `source` with `context`. NBT braces are written `\{` and `\}` in
/// the template source.
pub fn interpolate_command(source: &str, context: &Context) -> Result<String> {
    let template = Template::parse(source)?;
    Ok(template.render(&context)?)
}
