//! Core properties (`docProps/core.xml`) to [`Metadata`].

use chrono::{DateTime, Utc};
use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::Result;
use crate::model::Metadata;

/// Parse the core properties part.
pub fn parse_core_properties(xml_bytes: &[u8]) -> Result<Metadata> {
    let mut reader = Reader::from_reader(xml_bytes);
    let mut metadata = Metadata::default();
    let mut field: Option<Vec<u8>> = None;

    loop {
        match reader.read_event()? {
            Event::Start(e) => field = Some(e.local_name().as_ref().to_vec()),
            Event::End(_) => field = None,
            Event::Text(t) => {
                let Some(name) = field.as_deref() else {
                    continue;
                };
                let value = t.unescape()?.trim().to_string();
                if value.is_empty() {
                    continue;
                }
                match name {
                    b"title" => metadata.title = Some(value),
                    b"creator" => metadata.author = Some(value),
                    b"subject" => metadata.subject = Some(value),
                    b"created" => metadata.created = parse_w3c_date(&value),
                    b"modified" => metadata.modified = parse_w3c_date(&value),
                    _ => {}
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(metadata)
}

/// Parse a W3CDTF timestamp as written by word processors.
fn parse_w3c_date(value: &str) -> Option<DateTime<Utc>> {
    match DateTime::parse_from_rfc3339(value) {
        Ok(dt) => Some(dt.with_timezone(&Utc)),
        Err(e) => {
            log::debug!("Ignoring unparseable date '{}': {}", value, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    const CORE: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties"
  xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/"
  xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
  <dc:title>Class Schedule &amp; Rooms</dc:title>
  <dc:creator>Registrar</dc:creator>
  <dc:subject></dc:subject>
  <dcterms:created xsi:type="dcterms:W3CDTF">2024-09-01T08:30:00Z</dcterms:created>
  <dcterms:modified xsi:type="dcterms:W3CDTF">not a date</dcterms:modified>
</cp:coreProperties>"#;

    #[test]
    fn test_parse_core_properties() {
        let metadata = parse_core_properties(CORE.as_bytes()).unwrap();
        assert_eq!(metadata.title.as_deref(), Some("Class Schedule & Rooms"));
        assert_eq!(metadata.author.as_deref(), Some("Registrar"));
        assert_eq!(metadata.subject, None);
        assert_eq!(metadata.created.unwrap().year(), 2024);
        assert_eq!(metadata.modified, None);
    }
}
