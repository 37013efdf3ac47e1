//! Sheet layout planner for the roster export
//!
//! Pure row planning, no spreadsheet library involved. The planner
//! turns the ordered reservation list into a flat row sequence plus a
//! list of merged time blocks; the renderer maps both onto worksheet
//! cells. Keeping the pagination arithmetic here makes it testable
//! without parsing xlsx output.

use shared::models::Reservation;

/// Adding a group that would push the page body past this many
/// reservation rows forces a page break first.
pub const PAGE_BREAK_THRESHOLD: usize = 43;

/// Every non-final page body is padded to exactly this many rows so
/// printed pages line up.
pub const PAGE_BODY_ROWS: usize = 45;

/// One planned worksheet row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetRow {
    /// Merged title cell spanning all four columns
    Title,
    /// Blank row between title and header
    Spacer,
    /// Column header row
    Header,
    /// One reservation; the sequence and note columns stay blank
    Entry { name: String },
    /// Borderless filler row closing out a page body
    Padding,
}

/// A vertically merged time-label block with a thick outline
///
/// `start..end` are absolute row indices into [`SheetPlan::rows`].
/// A time group split by a page break produces one block per page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeBlock {
    pub label: String,
    pub start: usize,
    pub end: usize,
}

/// Planner output consumed by the renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetPlan {
    pub rows: Vec<SheetRow>,
    pub blocks: Vec<TimeBlock>,
}

/// Plan the sheet rows for an ordered reservation list
///
/// Input must be sorted by time then name; consecutive rows with the
/// same time label form one group. A group that no longer fits on the
/// current page carries over whole; a group too large for any page is
/// split at the break threshold, with each part getting its own merged
/// block. The final page is left unpadded.
pub fn plan_sheet(reservations: &[Reservation]) -> SheetPlan {
    let mut rows = Vec::new();
    let mut blocks = Vec::new();

    push_chrome(&mut rows);
    let mut body_count = 0usize;

    let mut i = 0;
    while i < reservations.len() {
        let label = reservations[i].time.as_str();
        let group_end = reservations[i..]
            .iter()
            .position(|r| r.time != label)
            .map(|offset| i + offset)
            .unwrap_or(reservations.len());
        let group = &reservations[i..group_end];

        if body_count > 0 && body_count + group.len() > PAGE_BREAK_THRESHOLD {
            close_page(&mut rows, &mut body_count);
        }

        let mut block_start = rows.len();
        for reservation in group {
            if body_count == PAGE_BREAK_THRESHOLD {
                // The group alone overflows the page; split its merge
                blocks.push(TimeBlock {
                    label: label.to_string(),
                    start: block_start,
                    end: rows.len(),
                });
                close_page(&mut rows, &mut body_count);
                block_start = rows.len();
            }
            rows.push(SheetRow::Entry {
                name: reservation.name.clone(),
            });
            body_count += 1;
        }
        blocks.push(TimeBlock {
            label: label.to_string(),
            start: block_start,
            end: rows.len(),
        });

        i = group_end;
    }

    SheetPlan { rows, blocks }
}

fn push_chrome(rows: &mut Vec<SheetRow>) {
    rows.push(SheetRow::Title);
    rows.push(SheetRow::Spacer);
    rows.push(SheetRow::Header);
}

fn close_page(rows: &mut Vec<SheetRow>, body_count: &mut usize) {
    while *body_count < PAGE_BODY_ROWS {
        rows.push(SheetRow::Padding);
        *body_count += 1;
    }
    push_chrome(rows);
    *body_count = 0;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reservations(groups: &[(&str, usize)]) -> Vec<Reservation> {
        let mut out = Vec::new();
        let mut id = 0i64;
        for (time, count) in groups {
            for n in 0..*count {
                id += 1;
                out.push(Reservation {
                    id,
                    name: format!("Dítě {time} {n:02}"),
                    time: (*time).to_string(),
                });
            }
        }
        out
    }

    fn count(plan: &SheetPlan, probe: fn(&SheetRow) -> bool) -> usize {
        plan.rows.iter().filter(|r| probe(r)).count()
    }

    #[test]
    fn test_small_groups_single_page() {
        let plan = plan_sheet(&reservations(&[("09:00", 3), ("09:15", 2)]));

        assert_eq!(plan.rows[0], SheetRow::Title);
        assert_eq!(plan.rows[1], SheetRow::Spacer);
        assert_eq!(plan.rows[2], SheetRow::Header);
        assert_eq!(count(&plan, |r| matches!(r, SheetRow::Title)), 1);
        assert_eq!(count(&plan, |r| matches!(r, SheetRow::Entry { .. })), 5);
        assert_eq!(count(&plan, |r| matches!(r, SheetRow::Padding)), 0);

        assert_eq!(plan.blocks.len(), 2);
        assert_eq!(plan.blocks[0].label, "09:00");
        assert_eq!((plan.blocks[0].start, plan.blocks[0].end), (3, 6));
        assert_eq!((plan.blocks[1].start, plan.blocks[1].end), (6, 8));
    }

    #[test]
    fn test_group_exactly_at_threshold_stays() {
        let plan = plan_sheet(&reservations(&[("09:00", 40), ("09:15", 3)]));
        assert_eq!(count(&plan, |r| matches!(r, SheetRow::Title)), 1);
        assert_eq!(count(&plan, |r| matches!(r, SheetRow::Padding)), 0);
    }

    #[test]
    fn test_group_carries_over_whole() {
        let plan = plan_sheet(&reservations(&[("09:00", 41), ("09:15", 5)]));

        assert_eq!(count(&plan, |r| matches!(r, SheetRow::Title)), 2);
        // First page body: 41 entries padded to 45
        assert_eq!(count(&plan, |r| matches!(r, SheetRow::Padding)), 4);

        assert_eq!(plan.blocks.len(), 2);
        let second = &plan.blocks[1];
        assert_eq!(second.label, "09:15");
        assert_eq!(second.end - second.start, 5);
        // Second block starts right after the second chrome
        assert_eq!(second.start, 3 + 45 + 3);
    }

    #[test]
    fn test_oversized_group_splits_with_padding() {
        let plan = plan_sheet(&reservations(&[("09:00", 46)]));

        assert_eq!(count(&plan, |r| matches!(r, SheetRow::Title)), 2);
        assert_eq!(count(&plan, |r| matches!(r, SheetRow::Entry { .. })), 46);
        assert_eq!(count(&plan, |r| matches!(r, SheetRow::Padding)), 2);

        // The merge splits across the two page blocks
        assert_eq!(plan.blocks.len(), 2);
        assert_eq!(plan.blocks[0].label, "09:00");
        assert_eq!(plan.blocks[0].end - plan.blocks[0].start, 43);
        assert_eq!(plan.blocks[1].label, "09:00");
        assert_eq!(plan.blocks[1].end - plan.blocks[1].start, 3);

        // Last page stays unpadded
        assert!(matches!(plan.rows.last(), Some(SheetRow::Entry { .. })));
    }

    #[test]
    fn test_entry_names_preserve_order() {
        let input = reservations(&[("09:00", 2)]);
        let plan = plan_sheet(&input);
        let names: Vec<&str> = plan
            .rows
            .iter()
            .filter_map(|r| match r {
                SheetRow::Entry { name } => Some(name.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(names, vec!["Dítě 09:00 00", "Dítě 09:00 01"]);
    }

    #[test]
    fn test_empty_input_yields_chrome_only() {
        let plan = plan_sheet(&[]);
        assert_eq!(plan.rows.len(), 3);
        assert!(plan.blocks.is_empty());
    }
}
