use chrono::{DateTime, Datelike, Utc};

pub trait ClockPort: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    fn current_year(&self) -> i32 {
        self.now().year()
    }
}
