use anyhow::Result;
use chrono::NaiveDate;
use tabled::{Table, Tabled};
use tabled::settings::{Style, Color};
use tabled::settings::object::Rows;
use timesheet_core::{parse_assignments, Timesheet, WeekView};

#[derive(Tabled)]
struct DayRow {
    #[tabled(rename = "Dag")]
    day: String,
    #[tabled(rename = "Dato")]
    date: String,
    #[tabled(rename = "Kode")]
    code: String,
    #[tabled(rename = "Timer")]
    hours: String,
}

/// Session for the week containing `anchor`, with the command-line
/// assignments applied in order.
pub fn build_timesheet(anchor: NaiveDate, entries: &[String]) -> Result<Timesheet> {
    let mut sheet = Timesheet::new(anchor);
    for assignment in parse_assignments(entries)? {
        for update in assignment.updates {
            sheet.update_day(assignment.day, update);
        }
    }
    Ok(sheet)
}

pub fn render_table(view: &WeekView, colored: bool) -> String {
    let mut rows: Vec<DayRow> = view.days.iter().map(|d| DayRow {
        day: d.name.to_string(),
        date: d.date_label.clone(),
        code: d.code_label.to_string(),
        hours: if d.hours.is_empty() { "-".to_string() } else { d.hours.clone() },
    }).collect();

    rows.push(DayRow {
        day: "Total".to_string(),
        date: String::new(),
        code: String::new(),
        hours: view.total_label.clone(),
    });

    let mut table = Table::new(rows);
    table.with(Style::modern());
    if colored {
        table.modify(Rows::first(), Color::FG_CYAN);
    }
    table.to_string()
}

pub fn print(sheet: &Timesheet, json: bool) -> Result<()> {
    let view = sheet.view();
    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    println!("\n\x1b[1;36m{}\x1b[0m", view.header);
    println!("{}", render_table(&view, true));
    println!("{}", sheet.save());
    Ok(())
}
