//! One report per playground page.
//!
//! EDUCATIONAL PURPOSE: every page runs the feature it is named after and
//! records what happened as plain text lines. Nothing here has side effects
//! beyond logging; printing is left to the caller.

use clap::ValueEnum;
use log::{debug, trace};
use serde::Serialize;
use types::{present_values, Increaser, Length, Optional, ZERO_LENGTH};

use crate::global::{self, Config, SAMPLE_SEQUENCE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    TypeAlias,
    Statements,
    UnusedResult,
    OneTimeInit,
    Optionals,
}

impl Page {
    /// Every page, in the order the playground presents them.
    pub const ALL: [Page; 5] = [
        Page::TypeAlias,
        Page::Statements,
        Page::UnusedResult,
        Page::OneTimeInit,
        Page::Optionals,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Page::TypeAlias => "type-alias",
            Page::Statements => "statements",
            Page::UnusedResult => "unused-result",
            Page::OneTimeInit => "one-time-init",
            Page::Optionals => "optionals",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::TypeAlias => "Type Alias Declaration",
            Page::Statements => "Multiple Statements on a Single Line",
            Page::UnusedResult => "Unused Result Warnings",
            Page::OneTimeInit => "One-Time Initialization",
            Page::Optionals => "Optionals",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageReport {
    pub page: Page,
    pub title: &'static str,
    pub lines: Vec<String>,
}

pub fn render(page: Page) -> PageReport {
    debug!("rendering page {}", page.name());
    let lines = match page {
        Page::TypeAlias => type_alias(),
        Page::Statements => statements(),
        Page::UnusedResult => unused_result(),
        Page::OneTimeInit => one_time_init(),
        Page::Optionals => optionals(),
    };
    trace!("page {} produced {} line(s)", page.name(), lines.len());

    PageReport {
        page,
        title: page.title(),
        lines,
    }
}

/// Renders `pages` in the given order; an empty slice means every page.
pub fn render_all(pages: &[Page]) -> Vec<PageReport> {
    if pages.is_empty() {
        return Page::ALL.iter().copied().map(render).collect();
    }
    pages.iter().copied().map(render).collect()
}

fn type_alias() -> Vec<String> {
    let length: Length = ZERO_LENGTH;
    vec![
        "type Length = f64".to_string(),
        format!("length: Length = {:?}", length),
    ]
}

// Two statements, one line.
#[rustfmt::skip]
fn statements() -> Vec<String> {
    let cat = "?"; let line = cat.to_string();
    vec![line]
}

fn unused_result() -> Vec<String> {
    let mut counter = Increaser::default();
    let next = counter.increase();
    let mut lines = vec![format!("increase() = {}, value still {}", next, counter.value)];

    counter.increase_in_place();
    lines.push(format!("increase_in_place() -> value {}", counter.value));
    lines
}

fn one_time_init() -> Vec<String> {
    let first = SAMPLE_SEQUENCE.len();
    let second = SAMPLE_SEQUENCE.len();
    vec![
        format!("sample sequence read twice: {} and {} elements", first, second),
        format!("initializer ran {} time(s)", global::sample_inits()),
    ]
}

fn optionals() -> Vec<String> {
    let some_optional = Optional::present(Config::SOME_OPTIONAL);
    let mut lines = Vec::new();

    // Enumeration case pattern.
    if let Optional::Present(x) = some_optional {
        lines.push(format!("x: {}", x));
    }
    for element in SAMPLE_SEQUENCE.iter() {
        match element {
            Optional::Present(number) => lines.push(format!("number: {}", number)),
            Optional::Absent => {}
        }
    }

    // Optional pattern.
    some_optional.if_present(|x| lines.push(format!("x?: {}", x)));
    let numbers: Vec<i64> = present_values(SAMPLE_SEQUENCE.iter().copied()).collect();
    lines.push(format!("present values: {:?}", numbers));

    let missing: Optional<i64> = Optional::absent();
    lines.push(missing.fold(|| "missing: absent".to_string(), |v| format!("missing: {}", v)));
    lines
}
