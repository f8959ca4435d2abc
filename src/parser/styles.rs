//! Paragraph style table from `word/styles.xml`.

use std::collections::HashMap;

use quick_xml::events::Event;
use quick_xml::Reader;

use super::xml;
use crate::error::Result;

/// Outline levels at or above this value mean "body text".
const BODY_TEXT_OUTLINE_LEVEL: u8 = 9;

/// Longest `basedOn` chain followed before giving up.
const MAX_INHERITANCE_DEPTH: usize = 16;

#[derive(Debug, Clone, Default)]
struct StyleDef {
    name: Option<String>,
    based_on: Option<String>,
    /// Zero-based outline level as written in the part
    outline_level: Option<u8>,
}

/// Resolved view of a paragraph style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedStyle {
    /// Display name (falls back to the style id)
    pub name: String,
    /// One-based outline level, if the style or an ancestor defines one
    pub outline_level: Option<u8>,
}

/// Paragraph styles keyed by style id.
#[derive(Debug, Clone, Default)]
pub struct StyleMap {
    styles: HashMap<String, StyleDef>,
}

impl StyleMap {
    /// Create an empty style map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the paragraph styles of a styles part.
    pub fn parse(xml_bytes: &[u8]) -> Result<Self> {
        let mut reader = Reader::from_reader(xml_bytes);
        let mut map = StyleMap::new();
        let mut current: Option<(String, StyleDef)> = None;
        let mut in_ppr = false;

        loop {
            match reader.read_event()? {
                Event::Start(e) | Event::Empty(e) => match e.local_name().as_ref() {
                    b"style" => {
                        let is_paragraph = xml::attr(&e, b"type")?.as_deref() == Some("paragraph");
                        current = match xml::attr(&e, b"styleId")? {
                            Some(id) if is_paragraph => Some((id, StyleDef::default())),
                            _ => None,
                        };
                    }
                    b"name" => {
                        if let Some((_, def)) = current.as_mut() {
                            def.name = xml::val(&e)?;
                        }
                    }
                    b"basedOn" => {
                        if let Some((_, def)) = current.as_mut() {
                            def.based_on = xml::val(&e)?;
                        }
                    }
                    b"pPr" => in_ppr = true,
                    b"outlineLvl" if in_ppr => {
                        if let Some((_, def)) = current.as_mut() {
                            def.outline_level = xml::val(&e)?.and_then(|v| v.parse().ok());
                        }
                    }
                    _ => {}
                },
                Event::End(e) => match e.local_name().as_ref() {
                    b"pPr" => in_ppr = false,
                    b"style" => {
                        if let Some((id, def)) = current.take() {
                            map.styles.insert(id, def);
                        }
                    }
                    _ => {}
                },
                Event::Eof => break,
                _ => {}
            }
        }

        log::debug!("Loaded {} paragraph styles", map.styles.len());
        Ok(map)
    }

    /// Number of known paragraph styles.
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Check if no styles are known.
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }

    /// Resolve a style id to its display name and inherited outline level.
    ///
    /// Unknown ids resolve to the id itself with no outline level.
    pub fn resolve(&self, style_id: &str) -> ResolvedStyle {
        let Some(def) = self.styles.get(style_id) else {
            return ResolvedStyle {
                name: style_id.to_string(),
                outline_level: None,
            };
        };

        let mut outline = def.outline_level;
        let mut parent = def.based_on.as_deref();
        let mut depth = 0;
        while outline.is_none() && depth < MAX_INHERITANCE_DEPTH {
            let Some(parent_def) = parent.and_then(|id| self.styles.get(id)) else {
                break;
            };
            outline = parent_def.outline_level;
            parent = parent_def.based_on.as_deref();
            depth += 1;
        }

        ResolvedStyle {
            name: def.name.clone().unwrap_or_else(|| style_id.to_string()),
            outline_level: outline
                .filter(|level| *level < BODY_TEXT_OUTLINE_LEVEL)
                .map(|level| level + 1),
        }
    }
}
