//! 解析マークダウンパーサー
//!
//! 解析エンドポイントが返すマークダウン風テキストを
//! カテゴリ/指示の行に変換する。
//!
//! 文法:
//! - `"## "` で始まる行: カテゴリ見出し
//! - `"• "` で始まる行: 指示（`[` `]` は全て除去）
//! - それ以外の行: 無視

use crate::types::AnalysisRow;

/// 見出し行のプレフィックス
pub const HEADING_PREFIX: &str = "## ";

/// 箇条書き行のプレフィックス
pub const BULLET_PREFIX: &str = "• ";

/// クライアント側で合成するエラーブロックの先頭マーカー
pub const ERROR_MARKER: &str = "## Error";

const ERROR_PREFIX: &str = "## Error\n\n";

/// 解析テキストを行に変換
///
/// 見出しより前の箇条書き、空の見出しに続く箇条書き、
/// 括弧除去後に空になる指示は出力しない。
/// 出力順は入力の行順のまま（重複排除・ソートなし）。
///
/// # Examples
/// ```
/// use laundry_advisor_common::parse_analysis;
///
/// let rows = parse_analysis("## Wash\n• [Do] not bleach");
/// assert_eq!(rows.len(), 1);
/// assert_eq!(rows[0].category, "Wash");
/// assert_eq!(rows[0].instruction, "Do not bleach");
/// ```
pub fn parse_analysis(text: &str) -> Vec<AnalysisRow> {
    let mut rows = Vec::new();
    let mut current_category = "";

    for line in split_lines(text) {
        if let Some(category) = line.strip_prefix(HEADING_PREFIX) {
            current_category = category;
        } else if let Some(item) = line.strip_prefix(BULLET_PREFIX) {
            let instruction: String = item.chars().filter(|c| !matches!(c, '[' | ']')).collect();
            if !current_category.is_empty() && !instruction.is_empty() {
                rows.push(AnalysisRow::new(current_category, instruction));
            }
        }
    }

    rows
}

/// `\n` / `\r\n` / `\r` のいずれも改行として扱う
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .flat_map(|line| line.split('\r'))
}

/// エラーメッセージをエラーブロックに整形
pub fn format_error_markdown(message: &str) -> String {
    format!("{}{}", ERROR_PREFIX, message)
}

/// 表示すべき解析内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisContent {
    /// エラーブロック（マーカー除去済みのメッセージ）
    ErrorMessage(String),
    /// カテゴリ/指示の表
    Table(Vec<AnalysisRow>),
}

impl AnalysisContent {
    /// 解析テキストを分類
    ///
    /// `"## Error"` で始まる場合はエラーブロック、それ以外は表としてパースする。
    pub fn classify(text: &str) -> Self {
        if text.starts_with(ERROR_MARKER) {
            AnalysisContent::ErrorMessage(text.replacen(ERROR_PREFIX, "", 1))
        } else {
            AnalysisContent::Table(parse_analysis(text))
        }
    }
}
