//! Raw minute/second input and its keystroke validation policy

/// Seed value for the seconds field on launch and after a stop
pub const DEFAULT_SECONDS_TEXT: &str = "10";

/// Accepted range for a typed minute or second value
const ACCEPTED_RANGE: std::ops::RangeInclusive<i64> = 1..=59;

/// The two input fields, kept as typed so cleared and partial states survive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerInput {
    pub minutes_text: String,
    pub seconds_text: String,
}

impl TimerInput {
    pub fn new() -> Self {
        Self {
            minutes_text: "0".to_string(),
            seconds_text: DEFAULT_SECONDS_TEXT.to_string(),
        }
    }

    /// Apply a minutes edit; returns whether it was accepted
    pub fn set_minutes_text(&mut self, text: &str) -> bool {
        apply_edit(&mut self.minutes_text, text)
    }

    /// Apply a seconds edit; returns whether it was accepted
    pub fn set_seconds_text(&mut self, text: &str) -> bool {
        apply_edit(&mut self.seconds_text, text)
    }

    pub fn minutes(&self) -> u32 {
        parse_field(&self.minutes_text)
    }

    pub fn seconds(&self) -> u32 {
        parse_field(&self.seconds_text)
    }

    /// Total countdown length described by the current fields
    pub fn total_seconds(&self) -> u64 {
        u64::from(self.minutes()) * 60 + u64::from(self.seconds())
    }

    /// Overwrite both fields from a remaining number of seconds
    pub fn show_remaining(&mut self, remaining_seconds: u64) {
        self.minutes_text = (remaining_seconds / 60).to_string();
        self.seconds_text = (remaining_seconds % 60).to_string();
    }

    /// Back to the input screen defaults: minutes cleared, seconds seeded
    pub fn reset(&mut self) {
        self.minutes_text.clear();
        self.seconds_text = DEFAULT_SECONDS_TEXT.to_string();
    }
}

impl Default for TimerInput {
    fn default() -> Self {
        Self::new()
    }
}

fn apply_edit(field: &mut String, text: &str) -> bool {
    // Blank means the field was cleared, not zero
    if text.trim().is_empty() {
        *field = text.to_string();
        return true;
    }

    match text.parse::<i64>() {
        Ok(value) if ACCEPTED_RANGE.contains(&value) => {
            *field = text.to_string();
            true
        }
        _ => false,
    }
}

fn parse_field(text: &str) -> u32 {
    text.parse().unwrap_or(0)
}
