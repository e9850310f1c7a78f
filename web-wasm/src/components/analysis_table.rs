//! 解析結果表示コンポーネント

use leptos::prelude::*;
use laundry_advisor_common::{AnalysisContent, AnalysisRow};

/// 解析内容（エラーボックスまたは表）
#[component]
pub fn AnalysisView(content: AnalysisContent) -> impl IntoView {
    match content {
        AnalysisContent::ErrorMessage(message) => view! {
            <div class="error-message">{message}</div>
        }
        .into_any(),
        AnalysisContent::Table(rows) => view! { <AnalysisTable rows=rows /> }.into_any(),
    }
}

#[component]
pub fn AnalysisTable(rows: Vec<AnalysisRow>) -> impl IntoView {
    view! {
        <table class="analysis-table">
            <thead>
                <tr>
                    <th>"Category"</th>
                    <th>"Instruction"</th>
                </tr>
            </thead>
            <tbody>
                {rows
                    .into_iter()
                    .map(|row| view! {
                        <tr>
                            <td>{row.category}</td>
                            <td>{row.instruction}</td>
                        </tr>
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}
