//! The `{% picture %}` template directive.
//!
//! ```text
//! {% picture "images/hero.png" "640,320x240;1024" breakpoints="768" lazy=True %}
//! {% picture photo "640,320x240" "detail,thumb" classes=page.image_classes %}
//! ```
//!
//! Arguments are quoted literals, `True`/`False`/`None`, numbers, or dotted
//! lookups into a JSON context.

use serde_json::Value;

use crate::constants::{TAG_NAME, TAG_USAGE};
use crate::error::PictureError;
use crate::picture::{build_picture, PictureOptions};
use crate::render::render_picture;
use crate::rendition::{ImageSource, Photo};
use crate::settings::Settings;

lazy_static::lazy_static! {
    // Whitespace separated tokens, keeping quoted runs (including `key="a b"`) together
    static ref TOKEN: regex::Regex = regex::Regex::new(
        r#"(?x)
        (?:
            [^\s'"]*
            (?:
                (?:"(?:[^"\\]|\\.)*" | '(?:[^'\\]|\\.)*')
                [^\s'"]*
            )+
        ) | \S+"#
    )
    .unwrap();

    static ref BLOCK: regex::Regex = regex::Regex::new(r"\{%\s*(.*?)\s*%\}").unwrap();
}

/// Library name accepted by `{% load %}`
const LIBRARY_NAME: &str = "responsive_image_tags";

/// A directive argument, resolved against the context at render time
#[derive(Debug, Clone, PartialEq)]
pub enum Variable {
    Literal(Value),
    Lookup(String),
}

impl std::str::FromStr for Variable {
    type Err = PictureError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        if let Some(literal) = unquote(token) {
            return Ok(Variable::Literal(Value::String(literal)));
        }
        let literal = match token {
            "True" => Value::Bool(true),
            "False" => Value::Bool(false),
            "None" => Value::Null,
            _ => match serde_json::from_str::<serde_json::Number>(token) {
                Ok(number) => Value::Number(number),
                Err(_) => {
                    if token.starts_with(['"', '\'']) {
                        return Err(PictureError::TemplateSyntax(format!(
                            "unterminated string {}",
                            token
                        )));
                    }
                    return Ok(Variable::Lookup(token.to_owned()));
                }
            },
        };
        Ok(Variable::Literal(literal))
    }
}

impl Variable {
    pub fn resolve(&self, context: &Value) -> Result<Value, PictureError> {
        match self {
            Variable::Literal(value) => Ok(value.clone()),
            Variable::Lookup(path) => path
                .split('.')
                .try_fold(context, |value, key| match value {
                    Value::Object(map) => map.get(key),
                    Value::Array(items) => key.parse::<usize>().ok().and_then(|i| items.get(i)),
                    _ => None,
                })
                .cloned()
                .ok_or_else(|| PictureError::UndefinedVariable(path.clone())),
        }
    }
}

/// Strip matching quotes and undo backslash escapes
fn unquote(token: &str) -> Option<String> {
    let quote = token.chars().next().filter(|c| *c == '"' || *c == '\'')?;
    if token.len() < 2 || !token.ends_with(quote) {
        return None;
    }
    let inner = &token[1..token.len() - 1];
    Some(
        inner
            .replace(&format!("\\{}", quote), &quote.to_string())
            .replace("\\\\", "\\"),
    )
}

/// A parsed `{% picture %}` directive
#[derive(Debug, Clone, PartialEq)]
pub struct PictureNode {
    pub source: Variable,
    pub sizes: Variable,
    pub size_names: Option<Variable>,
    pub breakpoints: Option<Variable>,
    pub lazy: Option<Variable>,
    pub classes: Option<Variable>,
}

fn set_once(
    slot: &mut Option<Variable>,
    name: &str,
    value: Variable,
) -> Result<(), PictureError> {
    if slot.replace(value).is_some() {
        return Err(PictureError::TemplateSyntax(format!(
            "argument {} given more than once",
            name
        )));
    }
    Ok(())
}

/// Parse the contents of a directive, e.g. `picture "a.png" "640,320x240" lazy=True`
pub fn parse_directive(contents: &str) -> Result<PictureNode, PictureError> {
    let tokens: Vec<&str> = TOKEN.find_iter(contents).map(|m| m.as_str()).collect();
    if tokens.first() != Some(&TAG_NAME) {
        return Err(PictureError::TemplateSyntax(format!(
            "not a {} tag: {}",
            TAG_NAME, contents
        )));
    }
    if tokens.len() < 2 {
        return Err(PictureError::TemplateSyntax(TAG_USAGE.to_owned()));
    }

    let mut positional: Vec<Variable> = Vec::new();
    let mut size_names = None;
    let mut breakpoints = None;
    let mut lazy = None;
    let mut classes = None;

    for token in &tokens[1..] {
        let keyword = if token.starts_with(['"', '\'']) {
            None
        } else {
            token.split_once('=')
        };
        match keyword {
            Some((key, value)) => {
                let value = value.parse::<Variable>()?;
                match key {
                    "size_names" => set_once(&mut size_names, key, value)?,
                    "breakpoints" => set_once(&mut breakpoints, key, value)?,
                    "lazy" => set_once(&mut lazy, key, value)?,
                    "classes" => set_once(&mut classes, key, value)?,
                    _ => {
                        return Err(PictureError::TemplateSyntax(format!(
                            "unknown argument {}",
                            key
                        )))
                    }
                }
            }
            None => positional.push(token.parse::<Variable>()?),
        }
    }

    let mut positional = positional.into_iter();
    let (source, sizes) = match (positional.next(), positional.next()) {
        (Some(source), Some(sizes)) => (source, sizes),
        _ => return Err(PictureError::TemplateSyntax(TAG_USAGE.to_owned())),
    };
    if let Some(names) = positional.next() {
        set_once(&mut size_names, "size_names", names)?;
    }
    if positional.next().is_some() {
        return Err(PictureError::TemplateSyntax(format!(
            "too many positional arguments\n{}",
            TAG_USAGE
        )));
    }

    Ok(PictureNode {
        source,
        sizes,
        size_names,
        breakpoints,
        lazy,
        classes,
    })
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(false, |n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Strings and numbers as text, `None` for null
fn text_argument(name: &str, value: Value) -> Result<Option<String>, PictureError> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        other => Err(PictureError::InvalidArgument {
            name: name.to_owned(),
            reason: format!("expected a string, got {}", type_name(&other)),
        }),
    }
}

impl PictureNode {
    fn resolve_text(
        variable: &Option<Variable>,
        name: &str,
        context: &Value,
    ) -> Result<Option<String>, PictureError> {
        match variable {
            Some(variable) => text_argument(name, variable.resolve(context)?),
            None => Ok(None),
        }
    }

    pub fn render(&self, context: &Value, settings: &Settings) -> Result<String, PictureError> {
        let source = self.source.resolve(context)?;
        let sizes = text_argument("sizes", self.sizes.resolve(context)?)?.ok_or_else(|| {
            PictureError::InvalidArgument {
                name: "sizes".to_owned(),
                reason: "expected a string, got null".to_owned(),
            }
        })?;

        let options = PictureOptions {
            size_names: Self::resolve_text(&self.size_names, "size_names", context)?,
            breakpoints: Self::resolve_text(&self.breakpoints, "breakpoints", context)?,
            lazy: match &self.lazy {
                Some(lazy) => is_truthy(&lazy.resolve(context)?),
                None => false,
            },
            classes: Self::resolve_text(&self.classes, "classes", context)?,
        };

        let picture = match source {
            Value::String(path) => {
                build_picture(ImageSource::StaticPath(&path), &sizes, &options, settings)?
            }
            Value::Object(_) => {
                let photo: Photo = serde_json::from_value(source).map_err(|e| {
                    PictureError::InvalidSource(format!("object is not a photo: {}", e))
                })?;
                build_picture(ImageSource::Rendition(&photo), &sizes, &options, settings)?
            }
            other => return Err(PictureError::InvalidSource(type_name(&other).to_owned())),
        };
        Ok(render_picture(&picture))
    }
}

/// Render every `{% picture %}` directive in `template`.
///
/// `{% load responsive_image_tags %}` is removed, every other block is left
/// for whatever renders the template next. The first failing directive
/// aborts the whole render.
pub fn render_template(
    template: &str,
    context: &Value,
    settings: &Settings,
) -> Result<String, PictureError> {
    let mut output = String::with_capacity(template.len());
    let mut last = 0;
    let mut rendered = 0;

    for captures in BLOCK.captures_iter(template) {
        let block = captures.get(0).map_or(0..0, |m| m.range());
        let contents = &captures[1];
        let mut words = contents.split_whitespace();
        let replacement = match (words.next(), words.next()) {
            (Some(TAG_NAME), _) => {
                rendered += 1;
                Some(parse_directive(contents)?.render(context, settings)?)
            }
            (Some("load"), Some(LIBRARY_NAME)) => Some(String::new()),
            _ => None,
        };
        if let Some(replacement) = replacement {
            output.push_str(&template[last..block.start]);
            output.push_str(&replacement);
            last = block.end;
        }
    }
    output.push_str(&template[last..]);

    debug!("Rendered {} picture tag(s)", rendered);
    Ok(output)
}
