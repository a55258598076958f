use crate::scan::TokenMatch;

/// Pretty-print malformed token occurrences with source context using ariadne
pub fn format_diagnostics(source: &str, filename: &str, matches: &[TokenMatch]) -> String {
    use ariadne::{Color, Label, Report, ReportKind, Source};

    let mut output = Vec::new();

    for token_match in matches {
        let Err(error) = &token_match.result else {
            continue;
        };
        // ariadne counts chars, regex spans count bytes
        let start = source[..token_match.span.start].chars().count();
        let end = start + source[token_match.span.start..token_match.span.end].chars().count();

        let report = Report::build(ReportKind::Error, filename, start)
            .with_message(error.to_string())
            .with_label(
                Label::new((filename, start..end))
                    .with_color(Color::Red)
                    .with_message(error.label()),
            )
            .with_note("malformed tokens are left in the output unchanged")
            .finish();

        if report
            .write((filename, Source::from(source)), &mut output)
            .is_err()
        {
            return "Error formatting failed".to_string();
        }
    }

    String::from_utf8(output).unwrap_or_else(|_| "Error formatting failed".to_string())
}
