pub mod global;
pub mod output;
pub mod pages;

pub use global::Config;
pub use output::{format_reports, OutputFormat};
pub use pages::{render, render_all, Page, PageReport};
