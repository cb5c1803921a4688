use serde::Serialize;

/// One production report row: a date plus the mined output values.
#[derive(Debug, Clone, Serialize)]
pub struct ProductionRecord {
    pub azon: i64,            // ⇔ termeles.azon (INTEGER PRIMARY KEY, 0 until stored)
    pub year: i64,            // ⇔ termeles.ev
    pub month: i64,           // ⇔ termeles.honap
    pub day: i64,             // ⇔ termeles.nap
    pub gold: Option<i64>,    // ⇔ termeles.aranytermeles (BIGINT, default 0)
    pub silver: Option<i64>,  // ⇔ termeles.ezusttermeles (BIGINT, default 0)
    pub diamond: i64,         // ⇔ termeles.gyemanttermeles (BIGINT, required)
}

impl ProductionRecord {
    /// Constructor for records parsed from a CSV row.
    /// `azon` stays 0; SQLite assigns the real key at insert time.
    pub fn new(year: i64, month: i64, day: i64, gold: Option<i64>, silver: Option<i64>, diamond: i64) -> Self {
        Self {
            azon: 0,
            year,
            month,
            day,
            gold,
            silver,
            diamond,
        }
    }

    /// Source-style date rendering, day.month.year.
    pub fn date_str(&self) -> String {
        format!("{:02}.{:02}.{}", self.day, self.month, self.year)
    }
}
