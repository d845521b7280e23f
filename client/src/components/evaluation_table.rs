//! Evaluation export table and raw JSON preview.

#[cfg(test)]
#[path = "evaluation_table_test.rs"]
mod evaluation_table_test;

use leptos::prelude::*;

use crate::net::types::{EvaluationExport, LoadedExport};
use crate::util::format::cell_text;

/// Header and body cells ready for rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableModel {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TableModel {
    /// Build the table for an export, or `None` when the server omitted the
    /// column list and no header can be derived.
    pub fn from_export(export: &EvaluationExport) -> Option<Self> {
        let headers = export.columns.clone()?;
        let rows = export
            .data
            .iter()
            .map(|row| headers.iter().map(|column| cell_text(row, column)).collect())
            .collect();
        Some(Self { headers, rows })
    }
}

/// Response table with the raw export preview underneath.
#[component]
pub fn EvaluationTable(loaded: LoadedExport) -> impl IntoView {
    let table = TableModel::from_export(&loaded.export);
    let raw_json = loaded.pretty_json();

    let body = match table {
        Some(TableModel { headers, rows }) if !rows.is_empty() => view! {
            <div class="evaluation-table__scroll">
                <table class="evaluation-table">
                    <thead>
                        <tr>
                            <th class="evaluation-table__index">"#"</th>
                            {headers.into_iter().map(|h| view! { <th>{h}</th> }).collect::<Vec<_>>()}
                        </tr>
                    </thead>
                    <tbody>
                        {rows
                            .into_iter()
                            .enumerate()
                            .map(|(idx, cells)| {
                                view! {
                                    <tr>
                                        <td class="evaluation-table__index">{idx + 1}</td>
                                        {cells.into_iter().map(|c| view! { <td>{c}</td> }).collect::<Vec<_>>()}
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </tbody>
                </table>
            </div>
        }
        .into_any(),
        Some(_) => view! { <p class="evaluation-table__empty">"No responses yet."</p> }.into_any(),
        None => view! {
            <p class="evaluation-table__notice">
                "The server did not provide a column list for this export."
            </p>
        }
        .into_any(),
    };

    view! {
        <section class="evaluation-table__section">
            <h3>"Responses"</h3>
            {body}
        </section>
        <section class="evaluation-table__section">
            <h3>"Raw JSON"</h3>
            <pre class="evaluation-table__json">{raw_json}</pre>
        </section>
    }
}
