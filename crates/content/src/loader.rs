//! JSON content source loader.
//!
//! The source document is a JSON object mapping titles to subtitle groups,
//! in presentation order. `serde_json` is built with `preserve_order` so the
//! declaration order of titles, captions, and items survives parsing intact.
//!
//! Inside a title's mapping, the `slide_layout` control key is extracted
//! into [`TitleEntry::layout`] here, during parsing. The layout traversal
//! therefore iterates plain sibling groups and never consumes keys as a side
//! effect of reading them.

use crate::error::ContentError;
use crate::model::{ContentItem, ContentTree, SubtitleGroup, TitleEntry};
use serde_json::{Map, Value};

/// Control key naming an explicit slide layout inside a title's mapping.
pub const LAYOUT_HINT_KEY: &str = "slide_layout";

/// Position assigned to image items that do not name one.
pub const DEFAULT_POSITION: &str = "bottom";

const DEFAULT_BULLET_LEVEL: u8 = 1;
const MAX_BULLET_LEVEL: u8 = 8;

/// Parse a JSON source document into a [`ContentTree`].
pub fn parse_str(source: &str) -> Result<ContentTree, ContentError> {
    let root: Value = serde_json::from_str(source)?;
    parse_value(&root)
}

/// Parse an already-deserialized JSON value into a [`ContentTree`].
pub fn parse_value(root: &Value) -> Result<ContentTree, ContentError> {
    let map = root.as_object().ok_or(ContentError::InvalidRoot)?;

    let mut entries = Vec::with_capacity(map.len());
    for (index, (title, value)) in map.iter().enumerate() {
        if title.trim().is_empty() {
            return Err(ContentError::EmptyTitle { index });
        }
        entries.push(parse_title_entry(title, value)?);
    }
    Ok(ContentTree::new(entries))
}

fn parse_title_entry(title: &str, value: &Value) -> Result<TitleEntry, ContentError> {
    let map = value
        .as_object()
        .ok_or_else(|| ContentError::InvalidTitleValue {
            title: title.to_string(),
            found: json_kind(value),
        })?;

    let mut layout = None;
    let mut subtitle_groups = Vec::new();
    for (key, group_value) in map {
        if key == LAYOUT_HINT_KEY {
            layout = Some(parse_layout_hint(title, group_value)?);
        } else {
            subtitle_groups.push(parse_group(title, key, group_value)?);
        }
    }

    Ok(TitleEntry {
        title: title.to_string(),
        layout,
        subtitle_groups,
    })
}

fn parse_layout_hint(title: &str, value: &Value) -> Result<usize, ContentError> {
    value
        .as_u64()
        .map(|index| index as usize)
        .ok_or_else(|| ContentError::InvalidLayoutHint {
            title: title.to_string(),
            value: value.to_string(),
        })
}

/// A group's value is an array of items, a single item (string or object),
/// or the legacy labeled-bullet mapping where each value is a bullet text
/// and the label itself is ignored.
fn parse_group(title: &str, caption: &str, value: &Value) -> Result<SubtitleGroup, ContentError> {
    let entries = match value {
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| parse_item(title, caption, index, item))
            .collect::<Result<Vec<_>, _>>()?,
        Value::Object(map) if is_item_object(map) => {
            vec![parse_item(title, caption, 0, value)?]
        }
        Value::Object(map) => parse_labeled_bullets(title, caption, map)?,
        Value::String(_) => vec![parse_item(title, caption, 0, value)?],
        other => {
            return Err(ContentError::InvalidItem {
                title: title.to_string(),
                caption: caption.to_string(),
                index: 0,
                message: format!("expected items, got {}", json_kind(other)),
            });
        }
    };

    Ok(SubtitleGroup::new(caption, entries))
}

fn is_item_object(map: &Map<String, Value>) -> bool {
    map.contains_key("text") || map.contains_key("image")
}

fn parse_labeled_bullets(
    title: &str,
    caption: &str,
    map: &Map<String, Value>,
) -> Result<Vec<ContentItem>, ContentError> {
    map.values()
        .enumerate()
        .map(|(index, value)| match value {
            Value::String(text) => Ok(ContentItem::bullet(text.as_str(), DEFAULT_BULLET_LEVEL)),
            other => Err(ContentError::InvalidItem {
                title: title.to_string(),
                caption: caption.to_string(),
                index,
                message: format!("labeled entry must be a string, got {}", json_kind(other)),
            }),
        })
        .collect()
}

fn parse_item(
    title: &str,
    caption: &str,
    index: usize,
    value: &Value,
) -> Result<ContentItem, ContentError> {
    let invalid = |message: String| ContentError::InvalidItem {
        title: title.to_string(),
        caption: caption.to_string(),
        index,
        message,
    };

    match value {
        Value::String(text) => Ok(ContentItem::bullet(text.as_str(), DEFAULT_BULLET_LEVEL)),
        Value::Object(map) => {
            for key in map.keys() {
                if !matches!(key.as_str(), "text" | "image" | "level" | "position") {
                    log::debug!("ignoring unknown item key '{key}' under '{title}' / '{caption}'");
                }
            }
            if map.contains_key("text") && map.contains_key("image") {
                return Err(invalid(
                    "item cannot be both a bullet ('text') and an image ('image')".to_string(),
                ));
            }
            if let Some(text) = map.get("text") {
                let text = text
                    .as_str()
                    .ok_or_else(|| invalid("'text' must be a string".to_string()))?;
                let level = parse_level(map, &invalid)?;
                return Ok(ContentItem::bullet(text, level));
            }
            if let Some(source) = map.get("image") {
                let source = source
                    .as_str()
                    .ok_or_else(|| invalid("'image' must be a string path".to_string()))?;
                if source.is_empty() {
                    return Err(invalid("'image' path must not be empty".to_string()));
                }
                let position = match map.get("position") {
                    Some(value) => value
                        .as_str()
                        .ok_or_else(|| invalid("'position' must be a string".to_string()))?,
                    None => DEFAULT_POSITION,
                };
                return Ok(ContentItem::image(source, position));
            }
            Err(invalid(
                "item object must contain 'text' or 'image'".to_string(),
            ))
        }
        other => Err(invalid(format!(
            "unsupported item of type {}",
            json_kind(other)
        ))),
    }
}

fn parse_level(
    map: &Map<String, Value>,
    invalid: &dyn Fn(String) -> ContentError,
) -> Result<u8, ContentError> {
    match map.get("level") {
        None => Ok(DEFAULT_BULLET_LEVEL),
        Some(value) => value
            .as_u64()
            .filter(|&level| level <= MAX_BULLET_LEVEL as u64)
            .map(|level| level as u8)
            .ok_or_else(|| {
                invalid(format!(
                    "'level' must be an integer between 0 and {MAX_BULLET_LEVEL}, got {value}"
                ))
            }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
