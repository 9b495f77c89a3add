use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Three-letter weekday code, index-aligned so `0 → SUN … 6 → SAT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WeekdayCode {
    Sun,
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
}

const ALL: [WeekdayCode; 7] = [
    WeekdayCode::Sun,
    WeekdayCode::Mon,
    WeekdayCode::Tue,
    WeekdayCode::Wed,
    WeekdayCode::Thu,
    WeekdayCode::Fri,
    WeekdayCode::Sat,
];

impl WeekdayCode {
    pub fn index(self) -> u32 {
        self as u32
    }

    /// Index modulo 7, so any integer maps to a code.
    pub fn from_index(i: u32) -> Self {
        ALL[(i % 7) as usize]
    }

    pub fn code(self) -> &'static str {
        match self {
            WeekdayCode::Sun => "SUN",
            WeekdayCode::Mon => "MON",
            WeekdayCode::Tue => "TUE",
            WeekdayCode::Wed => "WED",
            WeekdayCode::Thu => "THU",
            WeekdayCode::Fri => "FRI",
            WeekdayCode::Sat => "SAT",
        }
    }

    /// Lenient label parsing: accepts codes ("MON"), full English names
    /// ("Monday"), and any case. Anything shorter than three letters is
    /// rejected since "T" or "S" would be ambiguous.
    pub fn from_label(label: &str) -> Option<Self> {
        let l = label.trim().to_ascii_lowercase();
        if l.len() < 3 {
            return None;
        }
        ALL.into_iter().find(|w| {
            let code = w.code().to_ascii_lowercase();
            l.starts_with(&code) && full_name(*w).starts_with(&l)
        })
    }
}

fn full_name(w: WeekdayCode) -> &'static str {
    match w {
        WeekdayCode::Sun => "sunday",
        WeekdayCode::Mon => "monday",
        WeekdayCode::Tue => "tuesday",
        WeekdayCode::Wed => "wednesday",
        WeekdayCode::Thu => "thursday",
        WeekdayCode::Fri => "friday",
        WeekdayCode::Sat => "saturday",
    }
}

impl From<Weekday> for WeekdayCode {
    fn from(w: Weekday) -> Self {
        WeekdayCode::from_index(w.num_days_from_sunday())
    }
}

impl fmt::Display for WeekdayCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
