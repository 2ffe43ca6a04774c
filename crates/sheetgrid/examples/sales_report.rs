//! Build a small styled sales report and save it to sales_report.xlsx.
//!
//! Run with: cargo run --example sales_report

use sheetgrid::prelude::*;

fn main() -> XlsxResult<()> {
    let mut writer = GridWriter::new()
        .with_sheet_name("Sales")
        .with_file_name("sales_report.xlsx");

    writer.append_cell(
        "Monthly Sales Report",
        CellOptions::new().span(3).style("bold center celled"),
    )?;

    let columns = vec![
        TableColumn::new("product", "Product").with_width(20.0),
        TableColumn::new("units", "Units").with_style("right"),
        TableColumn::new("revenue", "Revenue")
            .with_style("right")
            .with_formatter(|v| format!("${v}"))
            .with_style_fn(|v, _| {
                if v.as_number().unwrap_or(0.0) < 1000.0 {
                    "red".to_string()
                } else {
                    "green".to_string()
                }
            }),
    ];
    let rows = vec![
        record([
            ("product", CellValue::from("Widget")),
            ("units", CellValue::from(42)),
            ("revenue", CellValue::from(4200)),
        ]),
        record([
            ("product", CellValue::from("Gadget")),
            ("units", CellValue::from(7)),
            ("revenue", CellValue::from(630)),
        ]),
    ];
    writer.write_table(&columns, &rows)?;

    let rendered = writer.render()?;
    let name = rendered.file_name.clone().unwrap_or_default();
    rendered.save(&name)?;
    println!("wrote {name} ({} bytes)", rendered.bytes.len());
    Ok(())
}
