//! Assessment inputs.
//!
//! Weight tables, response sheets and exercise metrics are read from YAML or
//! JSON files. Exercise metrics and a precomputed Purple Team score can also
//! be entered interactively through [`prompt`].

mod format;
mod loader;
pub mod prompt;

pub use format::InputFormat;
pub use loader::{
    load_document, load_purple_metrics, load_response_sheet, load_weight_table, parse_document,
};
pub use prompt::{prompt_purple_metrics, prompt_purple_score, Prompter};
