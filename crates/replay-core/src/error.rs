use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeriesError {
    #[error("Shape mismatch: {dates} dates vs {prices} prices")]
    ShapeMismatch { dates: usize, prices: usize },

    #[error("Index {index} out of range for series of length {len}")]
    OutOfRange { index: usize, len: usize },
}
