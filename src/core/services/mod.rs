//! Business logic services
//!
//! Services contain pure business logic that operates on domain models.
//! They depend only on port traits, never on concrete adapters.
//!
//! - [`filter`] - relative paths and ignore rules
//! - [`template`] - pylint message templates
//! - [`registry`] - ordered VCS backend probing
//! - [`selector`] - discovered file → lint task
//! - [`runner`] - lint task → outcome

pub mod filter;
pub mod registry;
pub mod runner;
pub mod selector;
pub mod template;

pub use filter::{IgnoreFilter, relative_path, should_include};
pub use registry::{DetectedRepository, VcsRegistry};
pub use runner::Runner;
pub use selector::Selector;
pub use template::{DEFAULT_TEMPLATE, MessageTemplate};
