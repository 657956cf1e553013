use chrono::NaiveDate;
use ratatui::widgets::TableState;
use timesheet_core::model::activity_code;
use timesheet_core::{Direction, EntryUpdate, Timesheet, DAYS_PER_WEEK};

pub enum InputMode {
    Normal,
    EditingHours,
}

pub struct App {
    pub sheet: Timesheet,
    pub today: NaiveDate,
    pub state: TableState,
    pub input: String,
    pub input_mode: InputMode,
    pub cursor_position: usize,
    pub status: Option<String>,
}

impl App {
    pub fn new(anchor: NaiveDate, today: NaiveDate) -> App {
        let mut state = TableState::default();
        state.select(Some(0));
        App {
            sheet: Timesheet::new(anchor),
            today,
            state,
            input: String::new(),
            input_mode: InputMode::Normal,
            cursor_position: 0,
            status: None,
        }
    }

    pub fn selected_day(&self) -> usize {
        self.state.selected().unwrap_or(0).min(DAYS_PER_WEEK - 1)
    }

    pub fn next(&mut self) {
        let i = (self.selected_day() + 1) % DAYS_PER_WEEK;
        self.state.select(Some(i));
    }

    pub fn previous(&mut self) {
        let i = (self.selected_day() + DAYS_PER_WEEK - 1) % DAYS_PER_WEEK;
        self.state.select(Some(i));
    }

    pub fn previous_week(&mut self) {
        self.sheet.go_to(Direction::Previous);
        self.status = None;
    }

    pub fn next_week(&mut self) {
        self.sheet.go_to(Direction::Next);
        self.status = None;
    }

    pub fn this_week(&mut self) {
        self.sheet.jump_to(self.today);
        self.status = None;
    }

    pub fn cycle_code(&mut self, forward: bool) {
        let day = self.selected_day();
        let current = self.sheet.current_week().day(day).code;
        let code = activity_code::cycle(current, forward);
        self.sheet.update_day(day, EntryUpdate::Code(code));
    }

    pub fn save(&mut self) {
        self.status = Some(self.sheet.save().to_string());
    }

    pub fn enter_edit_mode(&mut self) {
        self.input_mode = InputMode::EditingHours;
        self.input = self.sheet.current_week().day(self.selected_day()).hours.clone();
        self.cursor_position = self.input.chars().count();
    }

    pub fn exit_input_mode(&mut self) {
        self.input_mode = InputMode::Normal;
        self.input.clear();
        self.cursor_position = 0;
    }

    /// Hours accept digits and one decimal separator; `,` is stored as `.`.
    pub fn input_char(&mut self, c: char) {
        let c = if c == ',' { '.' } else { c };
        if !(c.is_ascii_digit() || c == '.') {
            return;
        }
        if c == '.' && self.input.contains('.') {
            return;
        }
        let byte_index = self.input.chars().take(self.cursor_position).map(|c| c.len_utf8()).sum();
        self.input.insert(byte_index, c);
        self.cursor_position += 1;
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position > 0 {
            let byte_index: usize = self.input.chars().take(self.cursor_position - 1).map(|c| c.len_utf8()).sum();
            self.input.remove(byte_index);
            self.cursor_position -= 1;
        }
    }

    pub fn move_cursor_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.input.chars().count() {
            self.cursor_position += 1;
        }
    }

    pub fn submit_edit(&mut self) {
        let day = self.selected_day();
        let hours = std::mem::take(&mut self.input);
        self.sheet.update_day(day, EntryUpdate::Hours(hours));
        self.exit_input_mode();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use timesheet_core::ActivityCode;

    fn app() -> App {
        let today = NaiveDate::from_ymd_opt(2024, 5, 15).unwrap();
        App::new(today, today)
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            app.input_char(c);
        }
    }

    #[test]
    fn test_selection_wraps() {
        let mut app = app();
        app.previous();
        assert_eq!(app.selected_day(), 6);
        app.next();
        assert_eq!(app.selected_day(), 0);
    }

    #[test]
    fn test_edit_commit_and_cancel() {
        let mut app = app();
        app.next();
        app.enter_edit_mode();
        type_str(&mut app, "7,5x.");
        assert_eq!(app.input, "7.5");
        app.submit_edit();
        assert_eq!(app.sheet.current_week().day(1).hours, "7.5");

        app.enter_edit_mode();
        assert_eq!(app.input, "7.5");
        app.delete_char();
        app.exit_input_mode();
        assert_eq!(app.sheet.current_week().day(1).hours, "7.5");
        assert_eq!(app.sheet.total(), 7.5);
    }

    #[test]
    fn test_insert_at_cursor() {
        let mut app = app();
        app.enter_edit_mode();
        type_str(&mut app, "85");
        app.move_cursor_left();
        app.input_char('.');
        assert_eq!(app.input, "8.5");
    }

    #[test]
    fn test_cycle_code() {
        let mut app = app();
        app.cycle_code(true);
        assert_eq!(app.sheet.current_week().day(0).code, Some(ActivityCode::Regular));
        app.cycle_code(false);
        app.cycle_code(false);
        assert_eq!(app.sheet.current_week().day(0).code, Some(ActivityCode::DayOff));
    }

    #[test]
    fn test_navigation_keeps_week_data() {
        let mut app = app();
        app.enter_edit_mode();
        type_str(&mut app, "8");
        app.submit_edit();

        app.next_week();
        assert_eq!(app.sheet.total(), 0.0);
        app.previous_week();
        app.previous_week();
        app.this_week();
        assert_eq!(app.sheet.total(), 8.0);
    }

    #[test]
    fn test_save_sets_status() {
        let mut app = app();
        app.enter_edit_mode();
        type_str(&mut app, "6");
        app.submit_edit();
        app.save();
        assert_eq!(app.status.as_deref(), Some("Uge 20 gemt (6 timer)"));
        app.next_week();
        assert_eq!(app.status, None);
    }
}
