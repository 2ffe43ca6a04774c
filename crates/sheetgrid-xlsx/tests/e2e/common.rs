//! Helpers for cracking open rendered XLSX packages.

use std::collections::HashMap;
use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;

/// Read one entry of the package as a string; panics if it is absent.
pub fn zip_entry(bytes: &[u8], name: &str) -> String {
    try_zip_entry(bytes, name)
        .unwrap_or_else(|| panic!("package entry {name} not found"))
}

/// Read one entry of the package as a string, if present.
pub fn try_zip_entry(bytes: &[u8], name: &str) -> Option<String> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut file = archive.by_name(name).ok()?;
    let mut out = String::new();
    file.read_to_string(&mut out).unwrap();
    Some(out)
}

/// The shared-string table, in index order.
pub fn shared_strings(bytes: &[u8]) -> Vec<String> {
    let xml = match try_zip_entry(bytes, "xl/sharedStrings.xml") {
        Some(xml) => xml,
        None => return Vec::new(),
    };
    let mut reader = Reader::from_str(&xml);
    reader.trim_text(true);

    let mut strings = Vec::new();
    let mut in_t = false;
    loop {
        match reader.read_event().unwrap() {
            Event::Start(e) if e.name().as_ref() == b"t" => in_t = true,
            Event::Text(t) if in_t => {
                strings.push(t.unescape().unwrap().into_owned());
            }
            Event::End(e) if e.name().as_ref() == b"t" => in_t = false,
            Event::Eof => break,
            _ => {}
        }
    }
    strings
}

/// Cell reference ("A1") to display text for the first worksheet, with
/// shared-string cells resolved through the shared-string table.
pub fn sheet_cells(bytes: &[u8]) -> HashMap<String, String> {
    let xml = zip_entry(bytes, "xl/worksheets/sheet1.xml");
    let shared = shared_strings(bytes);
    let mut reader = Reader::from_str(&xml);
    reader.trim_text(true);

    let mut cells = HashMap::new();
    let mut cell_ref: Option<String> = None;
    let mut is_shared = false;
    let mut in_v = false;
    loop {
        match reader.read_event().unwrap() {
            Event::Start(e) if e.name().as_ref() == b"c" => {
                cell_ref = e
                    .try_get_attribute("r")
                    .unwrap()
                    .map(|a| a.unescape_value().unwrap().into_owned());
                is_shared = matches!(
                    e.try_get_attribute("t").unwrap(),
                    Some(a) if a.value.as_ref() == b"s"
                );
            }
            Event::Start(e) if e.name().as_ref() == b"v" => in_v = true,
            Event::Text(t) if in_v => {
                let raw = t.unescape().unwrap().into_owned();
                if let Some(r) = cell_ref.take() {
                    let value = if is_shared {
                        shared[raw.parse::<usize>().unwrap()].clone()
                    } else {
                        raw
                    };
                    cells.insert(r, value);
                }
            }
            Event::End(e) if e.name().as_ref() == b"v" => in_v = false,
            Event::Eof => break,
            _ => {}
        }
    }
    cells
}

/// Merged ranges ("A1:B2") declared by the first worksheet.
pub fn merged_ranges(bytes: &[u8]) -> Vec<String> {
    let xml = zip_entry(bytes, "xl/worksheets/sheet1.xml");
    let mut reader = Reader::from_str(&xml);
    reader.trim_text(true);

    let mut ranges = Vec::new();
    loop {
        match reader.read_event().unwrap() {
            Event::Empty(e) | Event::Start(e) if e.name().as_ref() == b"mergeCell" => {
                if let Some(attr) = e.try_get_attribute("ref").unwrap() {
                    ranges.push(attr.unescape_value().unwrap().into_owned());
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }
    ranges
}
