mod catalog;
mod classify;
mod convert;
mod headings;
mod location;
mod output;
mod patterns;
mod pipeline;
mod run;
mod sanitize;
mod segment;
mod toc;

pub use convert::ConversionError;
pub use run::run;

pub(crate) use catalog::prepare_rules;
pub(crate) use convert::{load_document_text, split_document};
pub(crate) use patterns::BenchmarkPatterns;
pub(crate) use toc::{crop_titles, extract_toc_titles};
