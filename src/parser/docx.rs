//! DOCX reader: OOXML package → styled paragraphs and table grids.
//!
//! Only direct run formatting is read (a run is bold when its own `w:rPr`
//! says so, not when its style does). Paragraph style ids are resolved to
//! display names through `word/styles.xml`.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fs::File;
use std::io::{Cursor, Read, Seek};
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader as XmlReader;
use zip::ZipArchive;

use crate::error::{Error, Result};
use crate::model::{SourceUnit, StyledParagraph, StyledRun, TableGrid};

const DOCUMENT_PART: &str = "word/document.xml";
const STYLES_PART: &str = "word/styles.xml";
const FALLBACK_STYLE: &str = "Normal";

/// Reader for `.docx` packages.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocxReader {
    _private: (),
}

impl DocxReader {
    /// Create a new reader.
    pub fn new() -> Self {
        Self { _private: () }
    }

    /// Read a `.docx` file into source units, in document order.
    pub fn read_path(&self, path: &Path) -> Result<Vec<SourceUnit>> {
        let file = File::open(path)?;
        self.read(file)
    }

    /// Read a `.docx` package from memory.
    pub fn read_bytes(&self, data: &[u8]) -> Result<Vec<SourceUnit>> {
        self.read(Cursor::new(data))
    }

    fn read<R: Read + Seek>(&self, reader: R) -> Result<Vec<SourceUnit>> {
        let mut archive = ZipArchive::new(reader)?;

        let styles = match read_entry(&mut archive, STYLES_PART) {
            Ok(xml) => StyleMap::parse(&xml)?,
            Err(e) => {
                log::debug!("No usable {}: {}", STYLES_PART, e);
                StyleMap::default()
            }
        };

        let xml = read_entry(&mut archive, DOCUMENT_PART)?;
        parse_document(&xml, &styles)
    }
}

fn read_entry<R: Read + Seek>(archive: &mut ZipArchive<R>, name: &str) -> Result<String> {
    let mut entry = archive.by_name(name)?;
    let mut buffer = Vec::new();
    entry.read_to_end(&mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Paragraph style id → display name.
#[derive(Debug, Clone, Default)]
struct StyleMap {
    names: HashMap<String, String>,
    default_paragraph: Option<String>,
}

impl StyleMap {
    fn parse(xml: &str) -> Result<Self> {
        let mut reader = XmlReader::from_str(xml);
        let mut map = StyleMap::default();
        // (style id, is default paragraph style)
        let mut current: Option<(String, bool)> = None;

        loop {
            match reader.read_event()? {
                Event::Start(e) | Event::Empty(e) => match e.local_name().as_ref() {
                    b"style" => {
                        let is_paragraph = attr(&e, b"type").as_deref() == Some("paragraph");
                        let is_default = matches!(attr(&e, b"default").as_deref(), Some("1" | "true"));
                        current = attr(&e, b"styleId").map(|id| (id, is_paragraph && is_default));
                    }
                    b"name" => {
                        if let (Some((id, is_default)), Some(name)) = (&current, attr(&e, b"val")) {
                            let name = display_name(&name);
                            if *is_default {
                                map.default_paragraph = Some(name.clone());
                            }
                            map.names.insert(id.clone(), name);
                        }
                    }
                    _ => {}
                },
                Event::End(e) if e.local_name().as_ref() == b"style" => current = None,
                Event::Eof => break,
                _ => {}
            }
        }

        Ok(map)
    }

    fn resolve(&self, style_id: Option<&str>) -> String {
        match style_id {
            Some(id) => self
                .names
                .get(id)
                .cloned()
                .unwrap_or_else(|| id.to_string()),
            None => self
                .default_paragraph
                .clone()
                .unwrap_or_else(|| FALLBACK_STYLE.to_string()),
        }
    }
}

/// Built-in styles are stored lowercase ("heading 1"); Word shows them
/// capitalized ("Heading 1").
fn display_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_lowercase() => first.to_uppercase().chain(chars).collect(),
        _ => name.to_string(),
    }
}

fn attr(e: &BytesStart<'_>, local: &[u8]) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|a| a.key.local_name().as_ref() == local)
        .and_then(|a| a.unescape_value().ok().map(Cow::into_owned))
}

/// `w:b`, `w:i` and friends are on unless `w:val` turns them off.
fn toggle_on(e: &BytesStart<'_>) -> bool {
    !matches!(attr(e, b"val").as_deref(), Some("0" | "false" | "off"))
}

/// Subtrees the walker does not descend into: text boxes, the fallback
/// branch of alternate content, and tracked-change records of old formatting.
const SKIPPED: &[&[u8]] = &[b"txbxContent", b"Fallback", b"rPrChange", b"pPrChange"];

struct ParagraphBuilder {
    style_id: Option<String>,
    runs: Vec<StyledRun>,
}

struct CellBuilder {
    paragraphs: Vec<String>,
    span: usize,
}

/// Event-driven walk over `word/document.xml`.
struct DocumentWalker<'s> {
    styles: &'s StyleMap,
    units: Vec<SourceUnit>,
    paragraph: Option<ParagraphBuilder>,
    run: Option<StyledRun>,
    in_text: bool,
    skip_depth: usize,
    table_depth: usize,
    rows: Vec<Vec<String>>,
    row: Vec<String>,
    cell: Option<CellBuilder>,
}

impl<'s> DocumentWalker<'s> {
    fn new(styles: &'s StyleMap) -> Self {
        Self {
            styles,
            units: Vec::new(),
            paragraph: None,
            run: None,
            in_text: false,
            skip_depth: 0,
            table_depth: 0,
            rows: Vec::new(),
            row: Vec::new(),
            cell: None,
        }
    }

    fn start(&mut self, e: &BytesStart<'_>) {
        let local = e.local_name();
        if SKIPPED.contains(&local.as_ref()) {
            self.skip_depth += 1;
        }
        if self.skip_depth > 0 {
            return;
        }

        match local.as_ref() {
            b"p" => {
                self.paragraph = Some(ParagraphBuilder {
                    style_id: None,
                    runs: Vec::new(),
                });
            }
            b"pStyle" => {
                if let Some(p) = self.paragraph.as_mut() {
                    p.style_id = attr(e, b"val");
                }
            }
            b"r" => self.run = Some(StyledRun::default()),
            b"b" => {
                if let Some(run) = self.run.as_mut() {
                    run.bold = toggle_on(e);
                }
            }
            b"i" => {
                if let Some(run) = self.run.as_mut() {
                    run.italic = toggle_on(e);
                }
            }
            b"t" => self.in_text = true,
            b"tab" => self.push_text("\t"),
            b"br" | b"cr" => self.push_text("\n"),
            b"tbl" => {
                self.table_depth += 1;
                if self.table_depth == 1 {
                    self.rows.clear();
                }
            }
            b"tr" if self.table_depth == 1 => self.row.clear(),
            b"tc" if self.table_depth == 1 => {
                self.cell = Some(CellBuilder {
                    paragraphs: Vec::new(),
                    span: 1,
                });
            }
            b"gridSpan" if self.table_depth == 1 => {
                if let (Some(cell), Some(span)) = (self.cell.as_mut(), attr(e, b"val")) {
                    cell.span = span.parse().unwrap_or(1).max(1);
                }
            }
            _ => {}
        }
    }

    fn end(&mut self, local: &[u8]) {
        if self.skip_depth > 0 {
            if SKIPPED.contains(&local) {
                self.skip_depth -= 1;
            }
            return;
        }

        match local {
            b"t" => self.in_text = false,
            b"r" => {
                if let (Some(run), Some(p)) = (self.run.take(), self.paragraph.as_mut()) {
                    p.runs.push(run);
                }
            }
            b"p" => self.finish_paragraph(),
            b"tc" if self.table_depth == 1 => {
                if let Some(cell) = self.cell.take() {
                    let text = cell.paragraphs.join("\n");
                    for _ in 0..cell.span {
                        self.row.push(text.clone());
                    }
                }
            }
            b"tr" if self.table_depth == 1 => {
                let row = std::mem::take(&mut self.row);
                self.rows.push(row);
            }
            b"tbl" => {
                if self.table_depth == 1 {
                    let rows = std::mem::take(&mut self.rows);
                    self.units.push(SourceUnit::TableGrid(TableGrid { rows }));
                }
                self.table_depth = self.table_depth.saturating_sub(1);
            }
            _ => {}
        }
    }

    fn push_text(&mut self, text: &str) {
        if let Some(run) = self.run.as_mut() {
            run.text.push_str(text);
        }
    }

    fn finish_paragraph(&mut self) {
        let Some(builder) = self.paragraph.take() else {
            return;
        };

        if self.table_depth == 0 {
            let mut p = StyledParagraph::new(self.styles.resolve(builder.style_id.as_deref()));
            for run in builder.runs {
                p.add_run(run);
            }
            self.units.push(SourceUnit::StyledParagraph(p));
        } else if self.table_depth == 1 {
            if let Some(cell) = self.cell.as_mut() {
                let text: String = builder.runs.iter().map(|r| r.text.as_str()).collect();
                cell.paragraphs.push(text);
            }
        }
    }
}

fn parse_document(xml: &str, styles: &StyleMap) -> Result<Vec<SourceUnit>> {
    let mut reader = XmlReader::from_str(xml);
    let mut walker = DocumentWalker::new(styles);

    loop {
        match reader.read_event()? {
            Event::Start(e) => walker.start(&e),
            Event::Empty(e) => {
                walker.start(&e);
                walker.end(e.local_name().as_ref());
            }
            Event::Text(t) => {
                if walker.in_text {
                    let text = t.unescape().map_err(|e| Error::Docx(e.to_string()))?;
                    walker.push_text(&text);
                }
            }
            Event::End(e) => walker.end(e.local_name().as_ref()),
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(walker.units)
}

#[cfg(test)]
mod tests {
    use super::*;

    const STYLES: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:style w:type="paragraph" w:default="1" w:styleId="Normal"><w:name w:val="Normal"/></w:style>
  <w:style w:type="paragraph" w:styleId="Heading2"><w:name w:val="heading 2"/></w:style>
  <w:style w:type="paragraph" w:styleId="ListNumber"><w:name w:val="List Number"/></w:style>
</w:styles>"#;

    fn styles() -> StyleMap {
        StyleMap::parse(STYLES).unwrap()
    }

    fn wrap(body: &str) -> String {
        format!(
            r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{}</w:body></w:document>"#,
            body
        )
    }

    #[test]
    fn test_style_map() {
        let map = styles();
        assert_eq!(map.resolve(Some("Heading2")), "Heading 2");
        assert_eq!(map.resolve(Some("ListNumber")), "List Number");
        assert_eq!(map.resolve(Some("Unknown")), "Unknown");
        assert_eq!(map.resolve(None), "Normal");
    }

    #[test]
    fn test_paragraph_with_runs() {
        let xml = wrap(
            r#"<w:p><w:pPr><w:pStyle w:val="Heading2"/></w:pPr><w:r><w:t>Intro</w:t></w:r></w:p>
               <w:p><w:r><w:t xml:space="preserve">Plain </w:t></w:r><w:r><w:rPr><w:b/></w:rPr><w:t>bold</w:t></w:r><w:r><w:rPr><w:b w:val="0"/><w:i/></w:rPr><w:t> it</w:t></w:r></w:p>"#,
        );
        let units = parse_document(&xml, &styles()).unwrap();
        assert_eq!(units.len(), 2);

        let SourceUnit::StyledParagraph(heading) = &units[0] else {
            panic!("expected paragraph");
        };
        assert_eq!(heading.style_name, "Heading 2");
        assert_eq!(heading.text, "Intro");

        let SourceUnit::StyledParagraph(body) = &units[1] else {
            panic!("expected paragraph");
        };
        assert_eq!(body.style_name, "Normal");
        assert_eq!(body.text, "Plain bold it");
        assert!(body.runs[1].bold);
        assert!(!body.runs[2].bold);
        assert!(body.runs[2].italic);
    }

    #[test]
    fn test_empty_paragraph_element() {
        let units = parse_document(&wrap("<w:p/>"), &styles()).unwrap();
        let SourceUnit::StyledParagraph(p) = &units[0] else {
            panic!("expected paragraph");
        };
        assert!(p.is_blank());
    }

    #[test]
    fn test_table_in_document_order() {
        let xml = wrap(
            r#"<w:p><w:r><w:t>Before</w:t></w:r></w:p>
               <w:tbl>
                 <w:tr><w:tc><w:p><w:r><w:t>A</w:t></w:r></w:p></w:tc><w:tc><w:p><w:r><w:t>B</w:t></w:r></w:p></w:tc></w:tr>
                 <w:tr><w:tc><w:p><w:r><w:t>1</w:t></w:r></w:p><w:p><w:r><w:t>more</w:t></w:r></w:p></w:tc><w:tc><w:p/></w:tc></w:tr>
               </w:tbl>
               <w:p><w:r><w:t>After</w:t></w:r></w:p>"#,
        );
        let units = parse_document(&xml, &styles()).unwrap();
        assert_eq!(units.len(), 3);

        let SourceUnit::TableGrid(grid) = &units[1] else {
            panic!("expected table");
        };
        assert_eq!(grid.rows[0], vec!["A", "B"]);
        assert_eq!(grid.rows[1], vec!["1\nmore", ""]);
    }

    #[test]
    fn test_grid_span_repeats_cell() {
        let xml = wrap(
            r#"<w:tbl><w:tr><w:tc><w:tcPr><w:gridSpan w:val="2"/></w:tcPr><w:p><w:r><w:t>Wide</w:t></w:r></w:p></w:tc></w:tr></w:tbl>"#,
        );
        let units = parse_document(&xml, &styles()).unwrap();
        let SourceUnit::TableGrid(grid) = &units[0] else {
            panic!("expected table");
        };
        assert_eq!(grid.rows[0], vec!["Wide", "Wide"]);
    }

    #[test]
    fn test_tabs_and_breaks() {
        let xml = wrap(r#"<w:p><w:r><w:t>a</w:t><w:tab/><w:t>b</w:t><w:br/><w:t>c</w:t></w:r></w:p>"#);
        let units = parse_document(&xml, &styles()).unwrap();
        let SourceUnit::StyledParagraph(p) = &units[0] else {
            panic!("expected paragraph");
        };
        assert_eq!(p.text, "a\tb\nc");
    }

    #[test]
    fn test_text_box_keeps_enclosing_paragraph() {
        let xml = wrap(
            r#"<w:p><w:r><w:t xml:space="preserve">Before </w:t></w:r><w:r><mc:AlternateContent>
                 <mc:Choice Requires="wps"><w:drawing><wps:txbx><w:txbxContent><w:p><w:r><w:t>Box</w:t></w:r></w:p></w:txbxContent></wps:txbx></w:drawing></mc:Choice>
                 <mc:Fallback><w:pict><v:textbox><w:txbxContent><w:p><w:r><w:t>Box</w:t></w:r></w:p></w:txbxContent></v:textbox></w:pict></mc:Fallback>
               </mc:AlternateContent></w:r><w:r><w:t>After</w:t></w:r></w:p>"#,
        );
        let units = parse_document(&xml, &styles()).unwrap();
        assert_eq!(units.len(), 1);

        let SourceUnit::StyledParagraph(p) = &units[0] else {
            panic!("expected paragraph");
        };
        assert_eq!(p.text, "Before After");
        assert_eq!(p.style_name, "Normal");
    }

    #[test]
    fn test_tracked_formatting_changes_ignored() {
        let xml = wrap(
            r#"<w:p><w:pPr><w:pStyle w:val="ListNumber"/><w:pPrChange><w:pPr><w:pStyle w:val="Heading2"/></w:pPr></w:pPrChange></w:pPr>
               <w:r><w:rPr><w:i/><w:rPrChange><w:rPr><w:b/></w:rPr></w:rPrChange></w:rPr><w:t>Now italic</w:t></w:r></w:p>"#,
        );
        let units = parse_document(&xml, &styles()).unwrap();
        let SourceUnit::StyledParagraph(p) = &units[0] else {
            panic!("expected paragraph");
        };
        assert_eq!(p.style_name, "List Number");
        assert!(p.runs[0].italic);
        assert!(!p.runs[0].bold);
    }

    #[test]
    fn test_read_bytes_rejects_non_zip() {
        let result = DocxReader::new().read_bytes(b"not a zip archive");
        assert!(result.is_err());
    }
}
