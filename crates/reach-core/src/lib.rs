pub mod import;
pub mod repository;
pub mod session;
pub mod template;

pub use import::{ImportError, ImportPlan, derive_list_name, plan_import, plan_import_today};
pub use repository::{
    ContactRepository, JsonStoreRepository, MemoryRepository, RepositoryError,
};
pub use session::{ImportSession, SubmitError};
pub use template::{contact_placeholders, substitute_placeholders, unresolved_placeholders};
