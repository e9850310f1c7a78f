//! ターミナル表示
//!
//! `SessionView` をテキストに変換する。

use laundry_advisor_common::{AnalysisContent, AnalysisRow, Overlay, SessionView, REMEDIATION_HINT};

const CATEGORY_HEADER: &str = "Category";
const INSTRUCTION_HEADER: &str = "Instruction";

/// 表示内容をテキスト化
///
/// CLIのドライバはプレビュー生成を待ってから表示するため、`Banner` は
/// ブラウザ版でしか発生しない。ここでは網羅性のためだけに扱う。
pub fn render_view(view: &SessionView) -> String {
    match view {
        SessionView::Empty => String::new(),
        SessionView::Banner { message } => format!("Error: {}\n{}", message, REMEDIATION_HINT),
        SessionView::Preview { overlay, content, .. } => {
            let mut out = Vec::new();
            match overlay {
                Some(Overlay::ErrorText(message)) => out.push(message.clone()),
                Some(Overlay::Spinner) => out.push("Analyzing...".to_string()),
                Some(Overlay::Check) => out.push("✔".to_string()),
                Some(Overlay::Cross) => out.push("✖".to_string()),
                None => {}
            }
            if let Some(content) = content {
                out.push(render_content(content));
            }
            out.join("\n")
        }
    }
}

/// 解析内容（エラーボックスまたは表）をテキスト化
pub fn render_content(content: &AnalysisContent) -> String {
    match content {
        AnalysisContent::ErrorMessage(message) => render_error_box(message),
        AnalysisContent::Table(rows) => render_table(rows),
    }
}

/// 失敗として終了すべき表示か
pub fn is_failure(view: &SessionView) -> bool {
    match view {
        SessionView::Banner { .. } => true,
        SessionView::Preview { overlay, content, .. } => {
            matches!(overlay, Some(Overlay::ErrorText(_)))
                || matches!(content, Some(AnalysisContent::ErrorMessage(_)))
        }
        SessionView::Empty => false,
    }
}

pub fn render_error_box(message: &str) -> String {
    let width = message.lines().map(display_width).max().unwrap_or(0);
    let border = format!("+{}+", "-".repeat(width + 2));

    let mut lines = vec![border.clone()];
    for line in message.lines() {
        lines.push(format!("| {} |", pad(line, width)));
    }
    lines.push(border);
    lines.join("\n")
}

/// カテゴリ/指示の表
pub fn render_table(rows: &[AnalysisRow]) -> String {
    if rows.is_empty() {
        return "(no care instructions found)".to_string();
    }

    let category_width = rows
        .iter()
        .map(|r| display_width(&r.category))
        .chain(std::iter::once(display_width(CATEGORY_HEADER)))
        .max()
        .unwrap_or(0);
    let instruction_width = rows
        .iter()
        .map(|r| display_width(&r.instruction))
        .chain(std::iter::once(display_width(INSTRUCTION_HEADER)))
        .max()
        .unwrap_or(0);

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format!(
        "{} | {}",
        pad(CATEGORY_HEADER, category_width),
        INSTRUCTION_HEADER
    ));
    lines.push(format!(
        "{}-+-{}",
        "-".repeat(category_width),
        "-".repeat(instruction_width)
    ));
    for row in rows {
        lines.push(format!("{} | {}", pad(&row.category, category_width), row.instruction));
    }
    lines.join("\n")
}

fn display_width(s: &str) -> usize {
    s.chars().count()
}

fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(s));
    format!("{}{}", s, " ".repeat(fill))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_table_aligned() {
        let rows = vec![
            AnalysisRow::new("Wash", "30°C"),
            AnalysisRow::new("Dry cleaning", "Professional only"),
        ];
        let table = render_table(&rows);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "Category     | Instruction");
        assert_eq!(lines[1], "-------------+------------------");
        assert_eq!(lines[2], "Wash         | 30°C");
        assert_eq!(lines[3], "Dry cleaning | Professional only");
    }

    #[test]
    fn test_render_table_empty() {
        assert_eq!(render_table(&[]), "(no care instructions found)");
    }

    #[test]
    fn test_render_error_box() {
        let rendered = render_error_box("Not a label");
        assert_eq!(rendered, "+-------------+\n| Not a label |\n+-------------+");
    }

    #[test]
    fn test_render_banner_includes_hint() {
        let view = SessionView::Banner { message: "connection refused".into() };
        let rendered = render_view(&view);
        assert!(rendered.starts_with("Error: connection refused"));
        assert!(rendered.contains("LAUNDRY_BACKEND_URL"));
        assert!(is_failure(&view));
    }

    #[test]
    fn test_is_failure_for_table() {
        let view = SessionView::Preview {
            data_url: "data:".into(),
            blurred: true,
            overlay: None,
            content: Some(AnalysisContent::Table(vec![AnalysisRow::new("Wash", "Cold")])),
        };
        assert!(!is_failure(&view));
        assert!(render_view(&view).contains("Wash     | Cold"));
    }
}
