//! Small helpers over quick-xml events shared by the part readers.

use quick_xml::events::BytesStart;
use quick_xml::Reader;

use crate::error::Result;

/// Value of the attribute with the given local name (prefix ignored).
pub(crate) fn attr(element: &BytesStart<'_>, name: &[u8]) -> Result<Option<String>> {
    for attribute in element.attributes() {
        let attribute = attribute?;
        if attribute.key.local_name().as_ref() == name {
            return Ok(Some(attribute.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

/// The `val` attribute, used by nearly every WordprocessingML property.
pub(crate) fn val(element: &BytesStart<'_>) -> Result<Option<String>> {
    attr(element, b"val")
}

/// Interpret an on/off property such as `<w:b/>` or `<w:b w:val="0"/>`.
pub(crate) fn toggle(element: &BytesStart<'_>) -> Result<bool> {
    Ok(match val(element)? {
        None => true,
        Some(v) => !matches!(v.as_str(), "0" | "false" | "off"),
    })
}

/// Skip the children of an element whose start tag was just read.
///
/// `has_children` is false for self-closing elements, which need no skip.
pub(crate) fn skip(
    reader: &mut Reader<&[u8]>,
    element: &BytesStart<'_>,
    has_children: bool,
) -> Result<()> {
    if has_children {
        reader.read_to_end(element.name())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use quick_xml::events::Event;

    fn first_element(xml: &str) -> BytesStart<'_> {
        let mut reader = Reader::from_str(xml);
        loop {
            match reader.read_event().unwrap() {
                Event::Start(e) | Event::Empty(e) => return e,
                Event::Eof => panic!("no element"),
                _ => {}
            }
        }
    }

    #[test]
    fn test_attr_ignores_prefix() {
        let e = first_element(r#"<w:jc w:val="center"/>"#);
        assert_eq!(val(&e).unwrap().as_deref(), Some("center"));
        assert_eq!(attr(&e, b"other").unwrap(), None);
    }

    #[test]
    fn test_toggle_values() {
        assert!(toggle(&first_element("<w:b/>")).unwrap());
        assert!(toggle(&first_element(r#"<w:b w:val="true"/>"#)).unwrap());
        assert!(!toggle(&first_element(r#"<w:b w:val="0"/>"#)).unwrap());
        assert!(!toggle(&first_element(r#"<w:b w:val="false"/>"#)).unwrap());
    }

    #[test]
    fn test_skip_nested() {
        let xml = "<a><b><c/></b><d/></a>";
        let mut reader = Reader::from_str(xml);
        reader.read_event().unwrap(); // <a>
        let b = match reader.read_event().unwrap() {
            Event::Start(e) => e,
            other => panic!("unexpected {:?}", other),
        };
        skip(&mut reader, &b, true).unwrap();
        match reader.read_event().unwrap() {
            Event::Empty(e) => assert_eq!(e.local_name().as_ref(), b"d"),
            other => panic!("unexpected {:?}", other),
        }
    }
}
