use std::io::Cursor;
use tiny_http::Response;

use figure_nn::{EvaluationReport, ShapeLabel};

use crate::render::{render_page, Page};
use crate::state::SharedState;

// ---------------------------------------------------------------------------
// GET /valid
// ---------------------------------------------------------------------------

/// Generates a validation set, runs the predictor over it and renders the
/// accuracy report.
pub fn handle_get(state: &SharedState) -> Response<Cursor<Vec<u8>>> {
    let samples = state.data.validation_set();
    let report = EvaluationReport::evaluate(&state.network, &samples);
    crate::routes::html_response(render_report(&report))
}

pub fn render_report(report: &EvaluationReport) -> String {
    let recall_rows: String = report
        .recall_by_label()
        .iter()
        .map(|(label, recall)| format!("<tr><th>{}</th><td>{:.2}%</td></tr>", label, recall))
        .collect();

    render_page(Page::Report, |tmpl| {
        tmpl.replace("{{COUNT_ALL}}", &report.count_all.to_string())
            .replace("{{COUNT_TRUE}}", &report.count_true.to_string())
            .replace("{{COUNT_FALSE}}", &report.count_false.to_string())
            .replace("{{PERCENT_TRUE}}", &format!("{:.2}", report.percent_true))
            .replace("{{RECALL_ROWS}}", &recall_rows)
            .replace("{{CONFUSION}}", &build_confusion_matrix_html(&report.confusion))
    })
}

// ---------------------------------------------------------------------------
// Confusion matrix
// ---------------------------------------------------------------------------

fn build_confusion_matrix_html(matrix: &[Vec<usize>]) -> String {
    let max_off_diag = matrix.iter().enumerate()
        .flat_map(|(r, row)| row.iter().enumerate().filter(move |(c, _)| *c != r).map(|(_, &v)| v))
        .max()
        .unwrap_or(1)
        .max(1);

    let name = |slot: usize| ShapeLabel::from_slot(slot).map(|l| l.as_str()).unwrap_or("?");

    let header: String = (0..matrix.len()).map(|c| format!("<th>P:{}</th>", name(c))).collect();
    let rows: String = matrix.iter().enumerate().map(|(r, row)| {
        let cells: String = row.iter().enumerate().map(|(c, &v)| {
            if r == c {
                format!("<td class=\"conf-diag\">{}</td>", v)
            } else {
                let alpha = (v as f64 / max_off_diag as f64 * 0.4).min(0.4);
                let style = if v > 0 {
                    format!(" style=\"background:rgba(220,38,38,{:.2})\"", alpha)
                } else {
                    String::new()
                };
                format!("<td{}>{}</td>", style, v)
            }
        }).collect();
        format!("<tr><th>T:{}</th>{}</tr>", name(r), cells)
    }).collect();

    format!(
        r#"<table class="conf-matrix">
  <thead><tr><th></th>{header}</tr></thead>
  <tbody>{rows}</tbody>
</table>"#,
        header = header, rows = rows
    )
}
