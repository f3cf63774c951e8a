use std::io::{Cursor, Read};

use serde::{Deserialize, Serialize};
use tiny_http::{Request, Response};
use tracing::debug;

use figure_nn::{Result, ShapeLabel, ShapeSample};

use crate::state::SharedState;

/// Largest request body accepted by `POST /`.
const MAX_BODY_BYTES: u64 = 64 * 1024;

/// Body of `POST /`. `figureType` is accepted for compatibility with
/// clients that send labeled samples; it does not affect the prediction.
#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    pub image: Vec<Vec<bool>>,
    #[serde(rename = "figureType", default)]
    pub figure_type: Option<ShapeLabel>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct Score {
    pub label: ShapeLabel,
    pub score: f64,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct PredictResponse {
    pub result: ShapeLabel,
    pub scores: Vec<Score>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct: Option<bool>,
}

// ---------------------------------------------------------------------------
// POST /
// ---------------------------------------------------------------------------

pub fn handle_post(request: &mut Request, state: &SharedState) -> Response<Cursor<Vec<u8>>> {
    let mut body = String::new();
    let read = request
        .as_reader()
        .take(MAX_BODY_BYTES + 1)
        .read_to_string(&mut body);
    if let Err(e) = read {
        return crate::routes::json_error(400, &format!("could not read body: {}", e));
    }
    if body.len() as u64 > MAX_BODY_BYTES {
        return crate::routes::json_error(413, "request body too large");
    }

    match predict(&body, state) {
        Ok(resp) => crate::routes::json_response(200, &resp),
        Err(e) => crate::routes::json_error(400, &e.to_string()),
    }
}

pub fn predict(body: &str, state: &SharedState) -> Result<PredictResponse> {
    let req: PredictRequest = serde_json::from_str(body)?;
    let side = state.image_side();

    // The label is only a placeholder for validation; prediction ignores it.
    let sample = ShapeSample::with_side(req.image, req.figure_type.unwrap_or(ShapeLabel::Circle), side)?;

    let (result, output) = state.network.predict_with_scores(&sample);
    let scores = ShapeLabel::ALL
        .iter()
        .map(|&label| Score { label, score: output[label.slot()] })
        .collect();

    debug!(%result, expected = ?req.figure_type, "prediction");

    Ok(PredictResponse {
        result,
        scores,
        correct: req.figure_type.map(|expected| expected == result),
    })
}
