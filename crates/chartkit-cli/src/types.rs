use chartkit_model::{SeriesPoint, ViewKind};
use serde::Serialize;

/// One rendered view, as emitted by `chartkit chart --format json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartOutput {
    pub view: ViewKind,
    pub title: String,
    pub points: Vec<SeriesPoint>,
}

impl ChartOutput {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
