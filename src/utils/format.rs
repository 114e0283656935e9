//! Time display formatting

/// Pad a minute or second value to two digits; zero renders as "00"
pub fn format_number(number: u32) -> String {
    format!("{:02}", number)
}

/// Format the countdown display as `MM:SS:00`
///
/// The trailing `:00` is a fixed suffix kept for display compatibility.
pub fn format_time(minutes: u32, seconds: u32) -> String {
    format!("{}:{}:00", format_number(minutes), format_number(seconds))
}

/// Display value for a remaining number of seconds
pub fn format_remaining(remaining_seconds: u64) -> String {
    let minutes = (remaining_seconds / 60) as u32;
    let seconds = (remaining_seconds % 60) as u32;
    format_time(minutes, seconds)
}
