//! Decision model command and query handlers.

mod compute_ranking;
mod create_model;
mod delete_model;
mod export_model;
mod get_model;
mod import_model;
mod list_models;
mod submit_expert_input;

pub use compute_ranking::{ComputeRankingHandler, ComputeRankingQuery};
pub use create_model::{CreateModelCommand, CreateModelHandler};
pub use delete_model::{DeleteModelCommand, DeleteModelHandler};
pub use export_model::{ExportModelHandler, ExportModelQuery, ModelExport};
pub use get_model::{GetModelHandler, GetModelQuery};
pub use import_model::{ImportModelCommand, ImportModelHandler};
pub use list_models::ListModelsHandler;
pub use submit_expert_input::{SubmitExpertInputCommand, SubmitExpertInputHandler};
