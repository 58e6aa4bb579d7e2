//! Date entry capability.
//!
//! Native pickers hand back real dates, browser inputs hand back strings.
//! Each platform gets its own implementation, chosen once at composition time.

use crate::ports::errors::DateInputError;
use crate::ports::Platform;
use crate::vehicle::DateValue;

pub trait DateInputPort: Send + Sync {
    fn platform(&self) -> Platform;

    /// Turn what the user entered into a draft date value.
    fn parse(&self, raw: &str) -> Result<DateValue, DateInputError>;

    /// Render a draft date for display; `None` when it cannot be read as a date.
    fn format(&self, value: &DateValue) -> Option<String>;
}
