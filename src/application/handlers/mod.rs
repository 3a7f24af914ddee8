//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod model;

pub use model::{
    ComputeRankingHandler, ComputeRankingQuery, CreateModelCommand, CreateModelHandler,
    DeleteModelCommand, DeleteModelHandler, ExportModelHandler, ExportModelQuery,
    GetModelHandler, GetModelQuery, ImportModelCommand, ImportModelHandler, ListModelsHandler,
    ModelExport, SubmitExpertInputCommand, SubmitExpertInputHandler,
};
