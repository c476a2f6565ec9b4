//! Fit/apply transform steps and the pipeline composing them.

pub mod impute;
pub mod missing_flag;
pub mod pipeline;
pub mod traits;

pub use impute::{FittedMedianImputer, MedianImputer, MedianImputerParams};
pub use missing_flag::{
    flag_column_name, FittedMissingIndicator, MissingIndicator, MissingIndicatorParams,
    FLAG_SUFFIX,
};
pub use pipeline::{FittedPipelineStep, Pipeline, PipelineStep};
pub use traits::{FittedTransformer, Transformer};
