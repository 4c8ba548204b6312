use serde::{Deserialize, Serialize};

/// one cell of one grid layer, in long format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridRow {
    pub layer: String,
    pub row: usize,
    pub col: usize,
    pub count: u64,
}
