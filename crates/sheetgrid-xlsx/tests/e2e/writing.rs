use pretty_assertions::assert_eq;
use sheetgrid_core::{record, CellOptions, CellValue, TableColumn};
use sheetgrid_xlsx::GridWriter;

use crate::common::{merged_ranges, sheet_cells, zip_entry};

#[test]
fn test_merged_header_over_body_rows() {
    let mut writer = GridWriter::new();
    writer
        .append_cell("Quarterly totals", CellOptions::new().span(2).style("bold celled"))
        .unwrap();
    writer.advance_row();
    writer.append("Q1").unwrap();
    writer.append("Q2").unwrap();

    let rendered = writer.render().unwrap();
    let cells = sheet_cells(&rendered.bytes);

    assert_eq!(cells.get("A1").map(String::as_str), Some("Quarterly totals"));
    assert_eq!(cells.get("A2").map(String::as_str), Some("Q1"));
    assert_eq!(cells.get("B2").map(String::as_str), Some("Q2"));
    assert_eq!(merged_ranges(&rendered.bytes), vec!["A1:B1".to_string()]);

    // Both coordinates of the merged region carry the same style index
    let sheet = zip_entry(&rendered.bytes, "xl/worksheets/sheet1.xml");
    let a1 = cell_style_index(&sheet, "A1");
    let b1 = cell_style_index(&sheet, "B1");
    assert!(a1.is_some(), "A1 has no style in: {sheet}");
    assert_eq!(a1, b1);

    // And that style is bold with thin borders
    let styles = zip_entry(&rendered.bytes, "xl/styles.xml");
    assert!(styles.contains("<b/>"), "bold font missing from: {styles}");
    assert!(styles.contains(r#"style="thin""#), "thin border missing from: {styles}");
}

/// The `s=` style index of a cell element in a worksheet part
fn cell_style_index(sheet: &str, cell_ref: &str) -> Option<String> {
    let tag = sheet
        .split('<')
        .find(|tag| tag.starts_with("c ") && tag.contains(&format!(r#"r="{cell_ref}""#)))?;
    let index = tag.split(r#"s=""#).nth(1)?.split('"').next()?;
    Some(index.to_string())
}

#[test]
fn test_rowspan_pushes_later_appends_right() {
    let mut writer = GridWriter::new();
    writer
        .append_cell("tall", CellOptions::new().rowspan(2).style("center"))
        .unwrap();
    writer.append("beside").unwrap();
    writer.advance_row();
    writer.append("pushed").unwrap();

    let rendered = writer.render().unwrap();
    let cells = sheet_cells(&rendered.bytes);

    assert_eq!(cells.get("A1").map(String::as_str), Some("tall"));
    assert_eq!(cells.get("B1").map(String::as_str), Some("beside"));
    // Row 2 column A is covered by the rowspan, so the append landed in B2
    assert_eq!(cells.get("A2"), None);
    assert_eq!(cells.get("B2").map(String::as_str), Some("pushed"));
    assert_eq!(merged_ranges(&rendered.bytes), vec!["A1:A2".to_string()]);
}

#[test]
fn test_column_widths_applied() {
    let mut writer = GridWriter::new();
    writer.set_column_width(1, 24.0).unwrap();
    writer.append("wide column").unwrap();

    let rendered = writer.render().unwrap();
    let sheet = zip_entry(&rendered.bytes, "xl/worksheets/sheet1.xml");
    assert!(sheet.contains("<cols>"), "no column definitions in: {sheet}");
    assert!(sheet.contains(r#"min="1" max="1""#));
    assert!(sheet.contains(r#"customWidth="1""#));
}

#[test]
fn test_write_table_end_to_end() {
    let mut writer = GridWriter::new();
    let columns = vec![
        TableColumn::new("id", "ID").with_width(8.0),
        TableColumn::new("amount", "Amount")
            .with_style("right")
            .with_style_fn(|v, _| {
                if v.as_number().unwrap_or(0.0) < 0.0 {
                    "red".to_string()
                } else {
                    String::new()
                }
            }),
    ];
    let rows = vec![
        record([("id", CellValue::from(1)), ("amount", CellValue::from(250))]),
        record([("id", CellValue::from(2)), ("amount", CellValue::from(-40))]),
    ];
    writer.write_table(&columns, &rows).unwrap();

    let rendered = writer.render().unwrap();
    let cells = sheet_cells(&rendered.bytes);

    // Headers start on a fresh row below the initial cursor row
    assert_eq!(cells.get("A2").map(String::as_str), Some("ID"));
    assert_eq!(cells.get("B2").map(String::as_str), Some("Amount"));
    assert_eq!(cells.get("A3").map(String::as_str), Some("1"));
    assert_eq!(cells.get("B3").map(String::as_str), Some("250"));
    assert_eq!(cells.get("B4").map(String::as_str), Some("-40"));

    // The negative amount picked up the "red" class fill
    let styles = zip_entry(&rendered.bytes, "xl/styles.xml");
    assert!(styles.contains("FFFFC7CE"), "red fill missing from: {styles}");
}

#[test]
fn test_dense_grid_renders_row_major() {
    let mut writer = GridWriter::new();
    for row in 0..3 {
        if row > 0 {
            writer.advance_row();
        }
        for col in 0..2 {
            writer.append(format!("r{row}c{col}")).unwrap();
        }
    }

    let rendered = writer.render().unwrap();
    let cells = sheet_cells(&rendered.bytes);
    assert_eq!(cells.len(), 6);
    for (cell_ref, expected) in [
        ("A1", "r0c0"),
        ("B1", "r0c1"),
        ("A2", "r1c0"),
        ("B2", "r1c1"),
        ("A3", "r2c0"),
        ("B3", "r2c1"),
    ] {
        assert_eq!(cells.get(cell_ref).map(String::as_str), Some(expected));
    }

    // Rows appear top to bottom in the sheet part
    let sheet = zip_entry(&rendered.bytes, "xl/worksheets/sheet1.xml");
    let positions: Vec<_> = (1..=3)
        .map(|r| sheet.find(&format!("<row r=\"{r}\"")).unwrap())
        .collect();
    assert!(positions[0] < positions[1] && positions[1] < positions[2]);
}

#[test]
fn test_write_table_thousands_formatter() {
    let mut writer = GridWriter::new();
    let columns = vec![
        TableColumn::new("id", "ID"),
        TableColumn::new("amt", "Amount").with_formatter(|v| group_thousands(&v.to_string())),
    ];
    let rows = vec![record([("id", CellValue::from(1)), ("amt", CellValue::from(1000))])];
    writer.write_table(&columns, &rows).unwrap();

    let rendered = writer.render().unwrap();
    let cells = sheet_cells(&rendered.bytes);
    assert_eq!(cells.get("A2").map(String::as_str), Some("ID"));
    assert_eq!(cells.get("B2").map(String::as_str), Some("Amount"));
    assert_eq!(cells.get("A3").map(String::as_str), Some("1"));
    assert_eq!(cells.get("B3").map(String::as_str), Some("1,000"));
}

fn group_thousands(s: &str) -> String {
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", s),
    };
    let mut out = String::new();
    let len = digits.len();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    format!("{sign}{out}")
}

#[test]
fn test_sheet_and_file_names() {
    let mut writer = GridWriter::new()
        .with_sheet_name("Data")
        .with_file_name("export.xlsx");
    writer.append("x").unwrap();

    let rendered = writer.render().unwrap();
    assert_eq!(rendered.file_name.as_deref(), Some("export.xlsx"));
    let workbook = zip_entry(&rendered.bytes, "xl/workbook.xml");
    assert!(workbook.contains(r#"name="Data""#));
}
