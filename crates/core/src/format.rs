use std::time::Duration;

use chrono::NaiveDate;

use crate::submission::SubmissionOrigin;

/// Format elapsed time as `1.5s` or `2m 5s`
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 60.0 {
        format!("{:.1}s", secs)
    } else {
        format!("{}m {}s", d.as_secs() / 60, d.as_secs() % 60)
    }
}

/// Banner message for a successful submission
pub fn format_ready_message(origin: SubmissionOrigin) -> String {
    format!("Your PDF notes are ready! ({})", origin.label())
}

/// Title given to notes produced from a submission
pub fn format_note_title(origin: SubmissionOrigin) -> String {
    format!("New Notes ({})", origin.tag())
}

pub fn format_generated_on(date: NaiveDate) -> String {
    format!("Generated on {}", date.format("%Y-%m-%d"))
}

/// Capitalize the first letter, used for tab labels
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_under_and_over_a_minute() {
        assert_eq!(format_duration(Duration::from_millis(3000)), "3.0s");
        assert_eq!(format_duration(Duration::from_secs(125)), "2m 5s");
    }

    #[test]
    fn messages_embed_the_origin() {
        assert_eq!(
            format_ready_message(SubmissionOrigin::Link),
            "Your PDF notes are ready! (YouTube Link)"
        );
        assert_eq!(
            format_ready_message(SubmissionOrigin::File),
            "Your PDF notes are ready! (Local File)"
        );
        assert_eq!(format_note_title(SubmissionOrigin::Link), "New Notes (link)");
        assert_eq!(format_note_title(SubmissionOrigin::File), "New Notes (file)");
    }

    #[test]
    fn generated_on_uses_iso_date() {
        let date = NaiveDate::from_ymd_opt(2023, 5, 1).unwrap();
        assert_eq!(format_generated_on(date), "Generated on 2023-05-01");
    }

    #[test]
    fn capitalizes_tab_names() {
        assert_eq!(capitalize("dashboard"), "Dashboard");
        assert_eq!(capitalize(""), "");
    }
}
