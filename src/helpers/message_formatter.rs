pub struct MessageFormatter;

impl MessageFormatter {
    /// Normalizes message text before it is sent.
    ///
    /// Literal `\n`, `\t` and `\r` escapes become real control characters,
    /// every line is trimmed, runs of blank lines collapse into one and
    /// blank lines at either end are dropped. `None` passes through.
    pub fn format_message(text: Option<&str>) -> Option<String> {
        text.map(Self::format_text)
    }

    pub fn format_text(text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        let unescaped = text
            .replace("\\n", "\n")
            .replace("\\t", "\t")
            .replace("\\r", "\r");

        let mut lines: Vec<&str> = Vec::new();
        let mut previous_blank = false;

        for line in unescaped.split('\n').map(str::trim) {
            let blank = line.is_empty();
            if blank && previous_blank {
                continue;
            }
            lines.push(line);
            previous_blank = blank;
        }

        while lines.first().is_some_and(|l| l.is_empty()) {
            lines.remove(0);
        }
        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }

        let formatted = lines.join("\n");
        if formatted != text {
            log::debug!("message before formatting: {:?}", text);
            log::debug!("message after formatting: {:?}", formatted);
        }

        formatted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(text: &str) -> String {
        MessageFormatter::format_text(text)
    }

    #[test]
    fn test_literal_escapes_become_control_characters() {
        assert_eq!(fmt("a\\nb"), "a\nb");
        assert_eq!(fmt("a\\tb"), "a\tb");
        assert_eq!(fmt("first\\r\\nsecond"), "first\nsecond");
    }

    #[test]
    fn test_blank_line_runs_collapse_to_one() {
        assert_eq!(fmt("a\\n\\n\\n\\nb"), "a\n\nb");
        assert_eq!(fmt("a\n\n\n\nb\n\n\nc"), "a\n\nb\n\nc");
    }

    #[test]
    fn test_outer_blank_lines_are_stripped() {
        assert_eq!(fmt("\\n\\na\\nb\\n\\n"), "a\nb");
    }

    #[test]
    fn test_each_line_is_trimmed() {
        assert_eq!(fmt("   hello  \n\t world \t"), "hello\nworld");
    }

    #[test]
    fn test_empty_and_whitespace_input() {
        assert_eq!(fmt(""), "");
        assert_eq!(fmt("   \n \\n  "), "");
    }

    #[test]
    fn test_none_passes_through() {
        assert_eq!(MessageFormatter::format_message(None), None);
        assert_eq!(MessageFormatter::format_message(Some("x\\ny")), Some("x\ny".to_string()));
    }
}
