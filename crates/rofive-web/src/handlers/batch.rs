//! Batch calculator: multipart CSV upload and JSON API.

use axum::body::Bytes;
use axum::extract::{Multipart, State};
use axum::response::Html;
use axum::Json;
use serde_json::json;
use tracing::{info, warn};

use rofive_common::{BatchResult, Result, RofiveError};
use rofive_core::{read_smiles_column, BatchRunner, RuleOfFiveReport};

use crate::handlers::page::{error_banner, render_page};
use crate::handlers::escape;
use crate::state::SharedState;

pub async fn batch_submit(
    State(state): State<SharedState>,
    multipart: Multipart,
) -> Html<String> {
    let bytes = match read_upload(multipart).await {
        Ok(bytes) => bytes,
        Err(message) => {
            warn!(%message, "rejected batch upload");
            return Html(render_page("", &error_banner(&message)));
        }
    };

    match run_batch(&bytes, state.config.batch.max_rows) {
        Ok(result) => {
            info!(rows = result.len(), valid = result.valid_count(), "batch upload evaluated");
            Html(render_page("", &table_html(&result)))
        }
        Err(e) => Html(render_page("", &error_banner(&e.to_string()))),
    }
}

pub async fn api_batch(State(state): State<SharedState>, body: Bytes) -> Json<serde_json::Value> {
    match run_batch(&body, state.config.batch.max_rows) {
        Ok(result) => {
            let rows: Vec<serde_json::Value> = result
                .rows
                .iter()
                .map(|row| {
                    json!({
                        "smiles": row.smiles,
                        "outcome": row.outcome,
                        "rule_of_five": row.outcome.descriptors().map(RuleOfFiveReport::evaluate),
                    })
                })
                .collect();
            Json(json!({ "status": "success", "rows": rows }))
        }
        Err(e) => Json(json!({ "status": "error", "error": e.to_string() })),
    }
}

/// Pull the uploaded file out of the multipart stream. Accepts the field
/// named `file`, or failing that any field carrying a filename.
async fn read_upload(mut multipart: Multipart) -> std::result::Result<Bytes, String> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| format!("malformed upload: {e}"))?
    {
        if field.name() == Some("file") || field.file_name().is_some() {
            return field.bytes().await.map_err(|e| format!("unreadable upload: {e}"));
        }
    }
    Err("no file supplied".to_string())
}

fn run_batch(bytes: &[u8], max_rows: usize) -> Result<BatchResult> {
    let smiles = read_smiles_column(bytes)?;
    if smiles.len() > max_rows {
        return Err(RofiveError::BatchTooLarge { got: smiles.len(), limit: max_rows });
    }
    Ok(BatchRunner::new().run(smiles))
}

/// Aligned output table: one row per input row; failed rows keep their
/// place with blank descriptor cells and an error marker.
fn table_html(result: &BatchResult) -> String {
    let rows: String = result
        .rows
        .iter()
        .map(|row| match row.outcome.descriptors() {
            Some(d) => {
                let report = RuleOfFiveReport::evaluate(d);
                format!(
                    "<tr><td class=\"smiles\">{}</td><td>{:.2}</td><td>{:.2}</td>\
                     <td>{}</td><td>{}</td><td>{}</td></tr>",
                    escape(&row.smiles),
                    d.molecular_weight,
                    d.logp,
                    d.h_donors,
                    d.h_acceptors,
                    report.violations,
                )
            }
            None => format!(
                "<tr><td class=\"smiles\">{}</td><td>&mdash;</td><td>&mdash;</td>\
                 <td>&mdash;</td><td>&mdash;</td><td class=\"muted\">invalid structure</td></tr>",
                escape(&row.smiles),
            ),
        })
        .collect();

    format!(
        r#"<p>{} compounds processed, {} valid.</p>
<table>
    <thead><tr>
        <th>SMILES</th><th>MolWt</th><th>LogP</th>
        <th>NumHDonors</th><th>NumHAcceptors</th><th>RO5 Violations</th>
    </tr></thead>
    <tbody>{}</tbody>
</table>"#,
        result.len(),
        result.valid_count(),
        rows,
    )
}
