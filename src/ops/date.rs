use chrono::{Datelike, Days, Local, Months, NaiveDate};

/// Canonical due-date text
pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse canonical `YYYY-MM-DD` text (surrounding whitespace ignored)
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT).ok()
}

/// Long form for display, e.g. "May 1, 2024"
pub fn display_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Cursor state for a single-date calendar picker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatePicker {
    cursor: NaiveDate,
}

impl DatePicker {
    pub fn new(cursor: NaiveDate) -> Self {
        DatePicker { cursor }
    }

    pub fn cursor(&self) -> NaiveDate {
        self.cursor
    }

    pub fn set_cursor(&mut self, date: NaiveDate) {
        self.cursor = date;
    }

    /// Move by whole days. Out-of-range moves leave the cursor in place.
    pub fn move_days(&mut self, delta: i64) {
        let days = Days::new(delta.unsigned_abs());
        let moved = if delta >= 0 {
            self.cursor.checked_add_days(days)
        } else {
            self.cursor.checked_sub_days(days)
        };
        if let Some(d) = moved {
            self.cursor = d;
        }
    }

    /// Move by months, clamping the day to the end of the target month.
    pub fn move_months(&mut self, delta: i32) {
        let months = Months::new(delta.unsigned_abs());
        let moved = if delta >= 0 {
            self.cursor.checked_add_months(months)
        } else {
            self.cursor.checked_sub_months(months)
        };
        if let Some(d) = moved {
            self.cursor = d;
        }
    }

    /// Weeks of the cursor's month, Monday first. Days outside the
    /// month are `None`.
    pub fn month_grid(&self) -> Vec<[Option<NaiveDate>; 7]> {
        let first = self.cursor.with_day(1).unwrap_or(self.cursor);
        let offset = first.weekday().num_days_from_monday() as usize;

        let mut weeks = Vec::new();
        let mut week = [None; 7];
        let mut col = offset;
        let mut day = first;
        while day.month() == first.month() {
            week[col] = Some(day);
            col += 1;
            if col == 7 {
                weeks.push(week);
                week = [None; 7];
                col = 0;
            }
            match day.succ_opt() {
                Some(next) => day = next,
                None => break,
            }
        }
        if col > 0 {
            weeks.push(week);
        }
        weeks
    }
}
