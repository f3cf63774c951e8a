use std::io::Cursor;
use tiny_http::Response;

use crate::render::{render_page, Page};
use crate::state::SharedState;

// ---------------------------------------------------------------------------
// GET /
// ---------------------------------------------------------------------------

/// Drawing page: an N×N grid of toggle cells whose state is posted back to
/// `/` as JSON.
pub fn handle_get(state: &SharedState) -> Response<Cursor<Vec<u8>>> {
    let side = state.image_side();
    let summary = training_summary(state);

    crate::routes::html_response(render_page(Page::Figure, |tmpl| {
        tmpl.replace("{{SIDE}}", &side.to_string())
            .replace("{{GRID}}", &build_grid(side))
            .replace("{{TRAIN_SUMMARY}}", &summary)
    }))
}

fn build_grid(side: usize) -> String {
    (0..side)
        .map(|row| {
            let cells: String = (0..side)
                .map(|col| format!(r#"<td class="cell" data-row="{}" data-col="{}"></td>"#, row, col))
                .collect();
            format!("<tr>{}</tr>", cells)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn training_summary(state: &SharedState) -> String {
    let report = &state.train_report;
    let config = state.network.config();
    let final_error = report
        .last()
        .map(|e| format!("{:.4}", e.mean_error))
        .unwrap_or_else(|| "n/a".into());

    format!(
        r#"<table class="summary-table">
          <tr><th>Network</th><td>{input} → {hidden} → {output}</td></tr>
          <tr><th>Epochs</th><td>{epochs}</td></tr>
          <tr><th>Weight updates</th><td>{updates}</td></tr>
          <tr><th>Final mean error</th><td>{error}</td></tr>
          <tr><th>Training time</th><td>{time:.1}s</td></tr>
        </table>"#,
        input = config.input_size(),
        hidden = config.hidden_size,
        output = config.output_size,
        epochs = report.epochs.len(),
        updates = report.total_updates(),
        error = final_error,
        time = report.total_elapsed_ms() as f64 / 1000.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use figure_nn::{DatasetConfig, DatasetGenerator, Network, NetworkConfig, TrainReport};
    use crate::state::AppState;

    #[test]
    fn untrained_summary_shows_placeholder_error() {
        let state = Arc::new(AppState {
            network: Network::new(NetworkConfig::new(3, 4).with_seed(1)).unwrap(),
            data: DatasetGenerator::standard(DatasetConfig { image_side: 3, ..DatasetConfig::default() }).unwrap(),
            train_report: TrainReport::default(),
        });
        let html = training_summary(&state);
        assert!(html.contains("<td>n/a</td>"));
        assert!(html.contains("9 → 4 → 3"));
    }

    #[test]
    fn grid_has_side_squared_cells() {
        let html = build_grid(3);
        assert_eq!(html.matches("class=\"cell\"").count(), 9);
        assert_eq!(html.matches("<tr>").count(), 3);
    }
}
