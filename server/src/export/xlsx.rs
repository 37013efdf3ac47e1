//! xlsx rendering of a planned sheet
//!
//! Maps the planner's rows and merge blocks onto worksheet cells with
//! rust_xlsxwriter. Entry cells carry thin borders, each time block a
//! thick outline, padding rows stay blank and borderless.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Workbook, XlsxError};

use super::layout::{SheetPlan, SheetRow, TimeBlock};

const HEADERS: [&str; 4] = ["Čas", "Ev. č.", "Jméno dítěte", "Poznámka"];
const COLUMN_WIDTHS: [f64; 4] = [10.0, 7.0, 46.0, 26.0];

/// Render a planned sheet for a target date into xlsx bytes
pub fn render(plan: &SheetPlan, date: NaiveDate) -> Result<Vec<u8>, XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Rezervace")?;

    for (col, width) in COLUMN_WIDTHS.iter().enumerate() {
        worksheet.set_column_width(col as u16, *width)?;
    }

    let title = sheet_title(date);
    let title_format = Format::new()
        .set_bold()
        .set_font_size(16)
        .set_align(FormatAlign::Center);
    let header_format = Format::new().set_bold();

    let edges = block_edges(&plan.blocks);

    for (row_idx, row) in plan.rows.iter().enumerate() {
        let row_idx = row_idx as u32;
        match row {
            SheetRow::Title => {
                worksheet.merge_range(row_idx, 0, row_idx, 3, &title, &title_format)?;
            }
            SheetRow::Spacer | SheetRow::Padding => {}
            SheetRow::Header => {
                for (col, label) in HEADERS.iter().enumerate() {
                    worksheet.write_string_with_format(
                        row_idx,
                        col as u16,
                        *label,
                        &header_format,
                    )?;
                }
            }
            SheetRow::Entry { name } => {
                let (top, bottom) = edges
                    .get(&(row_idx as usize))
                    .copied()
                    .unwrap_or((false, false));
                worksheet.write_string_with_format(
                    row_idx,
                    2,
                    name,
                    &entry_format(false, false, top, bottom),
                )?;
                // Sequence and note stay blank for manual fill-in
                worksheet.write_blank(row_idx, 1, &entry_format(false, false, top, bottom))?;
                worksheet.write_blank(row_idx, 3, &entry_format(false, true, top, bottom))?;
            }
        }
    }

    for block in &plan.blocks {
        write_time_label(worksheet, block)?;
    }

    workbook.save_to_buffer()
}

/// Title line with the target date zero-padded to `DD.MM.YYYY`
fn sheet_title(date: NaiveDate) -> String {
    format!(
        "Elektronická rezervace času na {:02}.{:02}.{}",
        date.day(),
        date.month(),
        date.year()
    )
}

/// Map each entry row to whether it opens or closes a block
fn block_edges(blocks: &[TimeBlock]) -> HashMap<usize, (bool, bool)> {
    let mut edges = HashMap::new();
    for block in blocks {
        for row in block.start..block.end {
            let top = row == block.start;
            let bottom = row + 1 == block.end;
            edges.insert(row, (top, bottom));
        }
    }
    edges
}

/// Thin borders everywhere, thickened on the block outline edges
fn entry_format(left_edge: bool, right_edge: bool, top_edge: bool, bottom_edge: bool) -> Format {
    let pick = |edge: bool| {
        if edge {
            FormatBorder::Thick
        } else {
            FormatBorder::Thin
        }
    };
    Format::new()
        .set_border_left(pick(left_edge))
        .set_border_right(pick(right_edge))
        .set_border_top(pick(top_edge))
        .set_border_bottom(pick(bottom_edge))
}

/// Merged, centered time label on the block's leftmost column
fn write_time_label(
    worksheet: &mut rust_xlsxwriter::Worksheet,
    block: &TimeBlock,
) -> Result<(), XlsxError> {
    let format = entry_format(true, false, true, true)
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter);

    let first = block.start as u32;
    let last = (block.end - 1) as u32;
    if first == last {
        // merge_range needs at least two cells
        worksheet.write_string_with_format(first, 0, &block.label, &format)?;
    } else {
        worksheet.merge_range(first, 0, last, 0, &block.label, &format)?;
    }
    Ok(())
}
