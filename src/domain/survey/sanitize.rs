//! Free-text sanitization applied after validation, before persistence.

use super::response::{SurveyAnswer, SurveyResponse};

/// HTML-escapes `& < > " '` and drops control characters other than `\n` and `\t`.
pub fn sanitize_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '\n' | '\t' => out.push(c),
            c if c.is_control() => {}
            c => out.push(c),
        }
    }
    out
}

/// Sanitizes every free-text value of a response. Option labels are left alone.
pub fn sanitize_response(response: SurveyResponse) -> SurveyResponse {
    response.map_values(|answer| match answer {
        SurveyAnswer::FreeText { text } => SurveyAnswer::FreeText {
            text: sanitize_text(&text),
        },
        SurveyAnswer::MultiSelect { selected, other } => SurveyAnswer::MultiSelect {
            selected,
            other: other.map(|o| sanitize_text(&o)),
        },
        single @ SurveyAnswer::SingleSelect { .. } => single,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_html_metacharacters() {
        assert_eq!(
            sanitize_text(r#"Tom & "Jerry" <'cat'>"#),
            "Tom &amp; &quot;Jerry&quot; &lt;&#x27;cat&#x27;&gt;"
        );
    }

    #[test]
    fn keeps_newline_and_tab_but_strips_other_controls() {
        assert_eq!(sanitize_text("a\nb\tc\u{0007}d\re\u{007f}"), "a\nb\tcde");
    }

    #[test]
    fn plain_text_is_unchanged() {
        assert_eq!(sanitize_text("Weekend day care, please"), "Weekend day care, please");
    }

    #[test]
    fn response_sanitizes_text_and_other_only() {
        let response = SurveyResponse::new()
            .with("a", SurveyAnswer::text("x & y"))
            .with("b", SurveyAnswer::multi_with_other(["R&D"], "\"quoted\""))
            .with("c", SurveyAnswer::single("$30 & up"));

        let clean = sanitize_response(response);

        assert_eq!(clean.text_value("a"), Some("x &amp; y"));
        assert_eq!(clean.multi_values("b"), vec!["R&D", "&quot;quoted&quot;"]);
        assert_eq!(clean.single_value("c"), Some("$30 & up"));
    }
}
