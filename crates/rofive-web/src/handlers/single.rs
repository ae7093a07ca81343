//! Single compound calculator: form POST and JSON API.

use axum::extract::{Query, State};
use axum::response::Html;
use axum::{Form, Json};
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use rofive_common::EvaluationOutcome;
use rofive_core::{DescriptorEvaluator, RuleOfFiveReport};

use crate::handlers::page::render_page;
use crate::handlers::escape;
use crate::state::SharedState;

#[derive(Debug, Deserialize)]
pub struct EvaluateParams {
    pub smiles: String,
}

pub async fn evaluate_submit(
    State(_state): State<SharedState>,
    Form(form): Form<EvaluateParams>,
) -> Html<String> {
    let smiles = form.smiles.trim();
    if smiles.is_empty() {
        // Same as the initial page: nothing to evaluate yet
        return Html(render_page("", ""));
    }
    let outcome = DescriptorEvaluator::new().evaluate(smiles);
    info!(smiles, valid = outcome.is_valid(), "single evaluation");
    Html(render_page(&result_html(smiles, &outcome), ""))
}

pub async fn api_evaluate(
    State(_state): State<SharedState>,
    Query(params): Query<EvaluateParams>,
) -> Json<serde_json::Value> {
    let smiles = params.smiles.trim();
    let outcome = DescriptorEvaluator::new().evaluate(smiles);
    let rule_of_five = outcome.descriptors().map(RuleOfFiveReport::evaluate);
    Json(json!({
        "smiles": smiles,
        "outcome": outcome,
        "rule_of_five": rule_of_five,
    }))
}

/// The four labelled values plus the Rule-of-Five verdict, or the
/// invalid-structure message.
pub fn result_html(smiles: &str, outcome: &EvaluationOutcome) -> String {
    let descriptors = match outcome {
        EvaluationOutcome::Invalid { .. } => {
            return r#"<div class="alert">Invalid SMILES string.</div>"#.to_string();
        }
        EvaluationOutcome::Valid { descriptors } => descriptors,
    };

    let report = RuleOfFiveReport::evaluate(descriptors);
    let verdict = if report.passes {
        format!(
            r#"<span class="badge pass">Passes Rule of 5 ({} violation{})</span>"#,
            report.violations,
            if report.violations == 1 { "" } else { "s" },
        )
    } else {
        format!(
            r#"<span class="badge fail">Fails Rule of 5 ({} violations)</span>"#,
            report.violations
        )
    };

    format!(
        r#"<div class="result">
    <p class="muted">Compound: <code>{}</code></p>
    <dl>
        <dt>Molecular Weight</dt><dd>{:.2}</dd>
        <dt>Lipophilicity (LogP)</dt><dd>{:.2}</dd>
        <dt>Number of H-bond donors</dt><dd>{}</dd>
        <dt>Number of H-bond acceptors</dt><dd>{}</dd>
    </dl>
    {}
</div>"#,
        escape(smiles),
        descriptors.molecular_weight,
        descriptors.logp,
        descriptors.h_donors,
        descriptors.h_acceptors,
        verdict,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rofive_common::DescriptorRecord;

    #[test]
    fn invalid_outcome_renders_message() {
        let html = result_html("junk", &EvaluationOutcome::Invalid { reason: "r".into() });
        assert!(html.contains("Invalid SMILES string."));
    }

    #[test]
    fn valid_outcome_renders_two_decimals_and_verdict() {
        let outcome = EvaluationOutcome::Valid {
            descriptors: DescriptorRecord {
                molecular_weight: 46.069,
                logp: -0.0014,
                h_donors: 1,
                h_acceptors: 1,
            },
        };
        let html = result_html("CCO", &outcome);
        assert!(html.contains("46.07"));
        assert!(html.contains("-0.00"));
        assert!(html.contains("Passes Rule of 5"));
    }

    #[test]
    fn smiles_is_escaped_in_markup() {
        let html = result_html(
            "<script>",
            &EvaluationOutcome::Valid {
                descriptors: DescriptorRecord {
                    molecular_weight: 1.0,
                    logp: 0.0,
                    h_donors: 0,
                    h_acceptors: 0,
                },
            },
        );
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
