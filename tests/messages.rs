#[cfg(test)]
mod tests {
    use lextrack::libs::messages::{warning, Message};

    #[test]
    fn test_report_screen_lines() {
        assert_eq!(Message::ReportHeader("January 2024".to_string()).to_string(), "📊 Time report: January 2024");
        assert_eq!(Message::ReportAttorney("Jane Doe".to_string()).to_string(), "Attorney: Jane Doe");
    }

    #[test]
    fn test_validation_messages_state_expected_format() {
        assert_eq!(
            Message::InvalidDateFormat("15/01/2024".to_string()).to_string(),
            "Invalid date '15/01/2024'. Expected format: YYYY-MM-DD"
        );
        assert_eq!(
            Message::InvalidTimeFormat("9am".to_string()).to_string(),
            "Invalid time '9am'. Expected format: HH:MM"
        );
    }

    #[test]
    fn test_warning_prefix_for_confirm_prompts() {
        let text = warning(Message::ConfirmDeleteTimeLog(7));
        assert!(text.starts_with("⚠️"));
        assert!(text.contains("Delete time log 7?"));
    }
}
