pub mod category;
pub mod config;
pub mod language;
pub mod paths;
pub mod problem;

pub use category::Category;
pub use language::Language;
pub use paths::{Slug, WorkspacePaths};
pub use problem::{ExampleBlock, ProblemCatalog, ProblemRecord, Selector};
