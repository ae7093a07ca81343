//! The calculator page: Rule-of-Five background, single compound form,
//! batch upload form. Result fragments from the POST handlers are
//! injected under their sections; the GET render leaves both empty.

use axum::extract::State;
use axum::response::Html;

use crate::state::SharedState;

pub async fn index(State(_state): State<SharedState>) -> Html<String> {
    Html(render_page("", ""))
}

const STYLE: &str = r#"
body { font-family: -apple-system, 'Segoe UI', Roboto, sans-serif;
       margin: 0; background: #f6f7f9; color: #1c2733; }
.wrap { max-width: 960px; margin: 0 auto; padding: 24px 16px 64px; }
.topnav { background: #1c2733; padding: 12px 16px; }
.topnav a { color: #dce3ea; margin-right: 18px; text-decoration: none; font-size: 0.95rem; }
.topnav a:hover { color: #fff; }
h1 { margin: 24px 0 8px; }
section { border-radius: 10px; padding: 22px; margin-top: 24px; }
#rule-of-five { background: rgba(0, 61, 124, 0.08); }
#single { background: rgba(239, 124, 0, 0.12); }
#batch { background: rgba(255, 0, 0, 0.08); }
section h2 { margin-top: 0; }
ul.criteria li { margin: 6px 0; }
form { margin: 16px 0; }
input[type=text] { width: 60%; padding: 8px; font-family: monospace;
                   border: 1px solid #b7c0c9; border-radius: 6px; }
button { padding: 8px 16px; border: 0; border-radius: 6px;
         background: #003d7c; color: #fff; cursor: pointer; }
table { border-collapse: collapse; width: 100%; margin-top: 12px; background: #fff; }
th, td { border: 1px solid #d4dae0; padding: 6px 10px; text-align: left; font-size: 0.92rem; }
td.smiles { font-family: monospace; }
.alert { background: #fde8e8; border: 1px solid #e5a3a3; border-radius: 6px;
         padding: 10px 14px; margin-top: 12px; }
.result { background: #fff; border-radius: 6px; padding: 14px; margin-top: 12px; }
.result dt { font-weight: 600; margin-top: 8px; }
.badge { display: inline-block; padding: 2px 10px; border-radius: 10px; font-size: 0.85rem; }
.badge.pass { background: #d9f2df; color: #1e6b34; }
.badge.fail { background: #fde8e8; color: #9a2727; }
.muted { color: #5c6b7a; }
"#;

const RULE_SECTION: &str = r#"
<section id="rule-of-five">
    <h2>Lipinski's Rule of 5</h2>
    <p>Christopher A. Lipinski, a medicinal chemist at Pfizer, formulated the
    Rule of Five in the mid-1990s after analyzing the physicochemical
    properties of compounds that survived into late clinical stages. Orally
    successful drugs clustered below a set of thresholds that all happen to
    be multiples of five, and the pattern became a standard early filter for
    oral bioavailability.</p>
    <p>Poor absorption or permeation is more likely when a compound violates
    <strong>more than one</strong> of the following criteria:</p>
    <ul class="criteria">
        <li><strong>Molecular weight over 500 daltons.</strong> Larger
        molecules diffuse more slowly and struggle to cross cell membranes.</li>
        <li><strong>More than 5 hydrogen-bond donors</strong> (N or O atoms
        carrying hydrogen, such as -OH and -NH). Excess donors raise polarity
        and hinder partitioning into the membrane lipid phase.</li>
        <li><strong>More than 10 hydrogen-bond acceptors</strong> (N and O
        atoms, such as =O and -N-). Like donors, they raise polarity and
        reduce membrane permeability.</li>
        <li><strong>Calculated LogP over 5.</strong> Strongly lipophilic
        compounds tend to have poor aqueous solubility and end up
        sequestered in fatty tissue.</li>
    </ul>
    <p class="muted">The rule is a guideline, not a law: actively transported
    compounds, prodrugs, and classes such as peptides and macrocycles are
    known exceptions, and it says nothing about toxicity, metabolism, or
    target affinity.</p>
</section>
"#;

pub fn render_page(single_result: &str, batch_result: &str) -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Lipinski Descriptors Calculator</title>
    <style>{STYLE}</style>
</head>
<body>
<nav class="topnav">
    <a href="#rule-of-five">Lipinski's Rule of 5</a>
    <a href="#single">Single Compound Calculator</a>
    <a href="#batch">Batch Calculator</a>
</nav>
<div class="wrap">
    <h1>Lipinski Descriptors Calculator</h1>
    {RULE_SECTION}
    <section id="single">
        <h2>Single Compound Calculator</h2>
        <form method="POST" action="/evaluate">
            <label for="smiles">Enter the Simplified Molecular Input Line Entry System
            (SMILES) string of a compound.</label><br>
            <input type="text" id="smiles" name="smiles" placeholder="CCO">
            <button type="submit">Calculate</button>
        </form>
        {single_result}
    </section>
    <section id="batch">
        <h2>Batch Calculator</h2>
        <p>Calculate the molecular weight, number of hydrogen bond donors, number of
        hydrogen bond acceptors, and lipophilicity for compounds in batch mode.
        Upload a CSV file containing the SMILES strings of the compounds to process.
        Please ensure the column with SMILES strings is labeled 'SMILES'.</p>
        <form method="POST" action="/batch" enctype="multipart/form-data">
            <input type="file" name="file" accept=".csv">
            <button type="submit">Upload and Calculate</button>
        </form>
        {batch_result}
    </section>
</div>
</body>
</html>"##
    )
}

/// Red banner used by both sections for upload/input problems.
pub fn error_banner(message: &str) -> String {
    format!(r#"<div class="alert">{}</div>"#, super::escape(message))
}
