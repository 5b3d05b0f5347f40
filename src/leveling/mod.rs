pub mod formula;
pub mod naming;
pub mod resolver;

pub use formula::{requirement, Category, FormulaParams, FormulaTable};
pub use naming::{achievement_description, achievement_name};
pub use resolver::{progress_percentage, resolve_level};
