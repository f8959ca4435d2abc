//! Streaming reader for the main document part (`word/document.xml`).
//!
//! Walks the body once, in document order, and produces model blocks.
//! Only local names are matched so any namespace prefix works.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use super::styles::StyleMap;
use super::xml;
use super::ParseOptions;
use crate::error::{Error, Result};
use crate::model::{
    Alignment, Block, Paragraph, Rgb, Table, TableCell, TableRow, TextRun, VerticalMerge,
};

/// Paragraph-level containers whose runs belong to the paragraph.
const RUN_CONTAINERS: &[&[u8]] = &[
    b"hyperlink",
    b"ins",
    b"smartTag",
    b"fldSimple",
    b"sdt",
    b"sdtContent",
    b"customXml",
];

/// Parse the body of a main document part into blocks.
pub(crate) fn parse_body(
    xml_bytes: &[u8],
    styles: &StyleMap,
    options: &ParseOptions,
) -> Result<Vec<Block>> {
    BodyReader {
        reader: Reader::from_reader(xml_bytes),
        styles,
        options,
    }
    .read_document()
}

struct BodyReader<'a, 's> {
    reader: Reader<&'a [u8]>,
    styles: &'s StyleMap,
    options: &'s ParseOptions,
}

/// A paragraph plus whether its properties closed a section.
struct ParsedParagraph {
    paragraph: Paragraph,
    ends_section: bool,
}

impl<'a, 's> BodyReader<'a, 's> {
    fn next(&mut self) -> Result<Event<'a>> {
        match self.reader.read_event()? {
            Event::Eof => Err(Error::Xml("unexpected end of document part".to_string())),
            event => Ok(event),
        }
    }

    fn read_document(mut self) -> Result<Vec<Block>> {
        loop {
            match self.reader.read_event()? {
                Event::Start(e) if e.local_name().as_ref() == b"body" => {
                    return self.read_body();
                }
                Event::Eof => {
                    return Err(Error::MissingPart("document body".to_string()));
                }
                _ => {}
            }
        }
    }

    fn read_body(&mut self) -> Result<Vec<Block>> {
        let mut blocks = Vec::new();

        loop {
            match self.next()? {
                Event::Start(e) => match e.local_name().as_ref() {
                    b"p" => self.push_paragraph(&mut blocks)?,
                    b"tbl" => blocks.push(Block::Table(self.read_table()?)),
                    b"sectPr" => {
                        xml::skip(&mut self.reader, &e, true)?;
                        blocks.push(Block::SectionBreak);
                    }
                    // Block-level content controls wrap ordinary body content.
                    b"sdt" | b"sdtContent" | b"customXml" => {}
                    _ => xml::skip(&mut self.reader, &e, true)?,
                },
                Event::Empty(e) => match e.local_name().as_ref() {
                    b"p" => blocks.push(Block::Paragraph(Paragraph::new())),
                    b"sectPr" => blocks.push(Block::SectionBreak),
                    _ => {}
                },
                Event::End(e) if e.local_name().as_ref() == b"body" => break,
                _ => {}
            }
        }

        log::debug!("Read {} body blocks", blocks.len());
        Ok(blocks)
    }

    fn push_paragraph(&mut self, blocks: &mut Vec<Block>) -> Result<()> {
        let parsed = self.read_paragraph()?;
        blocks.push(Block::Paragraph(parsed.paragraph));
        if parsed.ends_section && self.options.inline_section_breaks {
            blocks.push(Block::SectionBreak);
        }
        Ok(())
    }

    fn read_paragraph(&mut self) -> Result<ParsedParagraph> {
        let mut paragraph = Paragraph::new();
        let mut ends_section = false;

        loop {
            match self.next()? {
                Event::Start(e) => {
                    let name = e.local_name();
                    match name.as_ref() {
                        b"pPr" => ends_section = self.read_paragraph_properties(&mut paragraph)?,
                        b"r" => paragraph.add_run(self.read_run()?),
                        n if RUN_CONTAINERS.contains(&n) => {}
                        _ => xml::skip(&mut self.reader, &e, true)?,
                    }
                }
                Event::End(e) if e.local_name().as_ref() == b"p" => break,
                _ => {}
            }
        }

        Ok(ParsedParagraph {
            paragraph,
            ends_section,
        })
    }

    /// Returns true when the properties carry a section break.
    fn read_paragraph_properties(&mut self, paragraph: &mut Paragraph) -> Result<bool> {
        let mut ends_section = false;
        let mut explicit_outline = None;

        loop {
            let (e, has_children) = match self.next()? {
                Event::Start(e) => (e, true),
                Event::Empty(e) => (e, false),
                Event::End(e) if e.local_name().as_ref() == b"pPr" => break,
                _ => continue,
            };

            match e.local_name().as_ref() {
                b"pStyle" => {
                    if let Some(id) = xml::val(&e)? {
                        let resolved = self.styles.resolve(&id);
                        paragraph.style.style_name = Some(resolved.name);
                        paragraph.style.outline_level = resolved.outline_level;
                    }
                }
                b"jc" => {
                    if let Some(value) = xml::val(&e)? {
                        paragraph.style.alignment = parse_alignment(&value);
                    }
                }
                b"outlineLvl" => {
                    explicit_outline = xml::val(&e)?.and_then(|v| v.parse::<u8>().ok());
                }
                b"sectPr" => ends_section = true,
                _ => {}
            }
            xml::skip(&mut self.reader, &e, has_children)?;
        }

        if let Some(level) = explicit_outline {
            paragraph.style.outline_level = (level < 9).then_some(level + 1);
        }
        Ok(ends_section)
    }

    fn read_run(&mut self) -> Result<TextRun> {
        let mut run = TextRun::default();

        loop {
            match self.next()? {
                Event::Start(e) => match e.local_name().as_ref() {
                    b"rPr" => self.read_run_properties(&mut run)?,
                    b"t" => self.read_text(&mut run.text)?,
                    _ => xml::skip(&mut self.reader, &e, true)?,
                },
                Event::Empty(e) => match e.local_name().as_ref() {
                    b"tab" => run.text.push('\t'),
                    b"br" | b"cr" => run.text.push('\n'),
                    _ => {}
                },
                Event::End(e) if e.local_name().as_ref() == b"r" => break,
                _ => {}
            }
        }

        Ok(run)
    }

    fn read_text(&mut self, out: &mut String) -> Result<()> {
        loop {
            match self.next()? {
                Event::Text(t) => out.push_str(&t.unescape()?),
                Event::CData(c) => out.push_str(&String::from_utf8_lossy(&c)),
                Event::End(e) if e.local_name().as_ref() == b"t" => return Ok(()),
                _ => {}
            }
        }
    }

    fn read_run_properties(&mut self, run: &mut TextRun) -> Result<()> {
        loop {
            let (e, has_children) = match self.next()? {
                Event::Start(e) => (e, true),
                Event::Empty(e) => (e, false),
                Event::End(e) if e.local_name().as_ref() == b"rPr" => return Ok(()),
                _ => continue,
            };

            let style = &mut run.style;
            match e.local_name().as_ref() {
                b"b" => style.bold = xml::toggle(&e)?,
                b"i" => style.italic = xml::toggle(&e)?,
                b"u" => style.underline = xml::val(&e)?.as_deref() != Some("none"),
                b"sz" => {
                    style.font_size = xml::val(&e)?
                        .and_then(|v| v.parse::<f32>().ok())
                        .map(|half_points| half_points / 2.0);
                }
                b"color" => style.color = xml::val(&e)?.and_then(|v| Rgb::from_hex(&v)),
                _ => {}
            }
            // Also covers rPrChange, whose nested rPr must not end this loop.
            xml::skip(&mut self.reader, &e, has_children)?;
        }
    }

    fn read_table(&mut self) -> Result<Table> {
        let mut table = Table::new();

        loop {
            match self.next()? {
                Event::Start(e) => match e.local_name().as_ref() {
                    b"tr" => table.add_row(self.read_row()?),
                    _ => xml::skip(&mut self.reader, &e, true)?,
                },
                Event::End(e) if e.local_name().as_ref() == b"tbl" => break,
                _ => {}
            }
        }

        Ok(table)
    }

    fn read_row(&mut self) -> Result<TableRow> {
        let mut row = TableRow::default();

        loop {
            match self.next()? {
                Event::Start(e) => match e.local_name().as_ref() {
                    b"tc" => row.cells.push(self.read_cell()?),
                    b"sdt" | b"sdtContent" | b"customXml" => {}
                    _ => xml::skip(&mut self.reader, &e, true)?,
                },
                Event::End(e) if e.local_name().as_ref() == b"tr" => break,
                _ => {}
            }
        }

        Ok(row)
    }

    fn read_cell(&mut self) -> Result<TableCell> {
        let mut cell = TableCell::empty();

        loop {
            match self.next()? {
                Event::Start(e) => match e.local_name().as_ref() {
                    b"tcPr" => self.read_cell_properties(&mut cell)?,
                    b"p" => cell.content.push(self.read_paragraph()?.paragraph),
                    b"tbl" => {
                        log::warn!("Skipping nested table inside a table cell");
                        xml::skip(&mut self.reader, &e, true)?;
                    }
                    b"sdt" | b"sdtContent" | b"customXml" => {}
                    _ => xml::skip(&mut self.reader, &e, true)?,
                },
                Event::Empty(e) if e.local_name().as_ref() == b"p" => {
                    cell.content.push(Paragraph::new());
                }
                Event::End(e) if e.local_name().as_ref() == b"tc" => break,
                _ => {}
            }
        }

        Ok(cell)
    }

    fn read_cell_properties(&mut self, cell: &mut TableCell) -> Result<()> {
        loop {
            let (e, has_children) = match self.next()? {
                Event::Start(e) => (e, true),
                Event::Empty(e) => (e, false),
                Event::End(e) if e.local_name().as_ref() == b"tcPr" => return Ok(()),
                _ => continue,
            };

            match e.local_name().as_ref() {
                b"gridSpan" => {
                    cell.grid_span = xml::val(&e)?
                        .and_then(|v| v.parse::<u16>().ok())
                        .unwrap_or(1)
                        .max(1);
                }
                b"vMerge" => cell.vertical_merge = parse_vertical_merge(&e)?,
                _ => {}
            }
            xml::skip(&mut self.reader, &e, has_children)?;
        }
    }
}

/// `restart` opens a merge; a bare `<w:vMerge/>` continues one.
fn parse_vertical_merge(e: &BytesStart<'_>) -> Result<VerticalMerge> {
    Ok(match xml::val(e)?.as_deref() {
        Some("restart") => VerticalMerge::Start,
        _ => VerticalMerge::Continue,
    })
}

fn parse_alignment(value: &str) -> Alignment {
    match value {
        "center" => Alignment::Center,
        "right" | "end" => Alignment::Right,
        "both" | "distribute" => Alignment::Justify,
        _ => Alignment::Left,
    }
}
