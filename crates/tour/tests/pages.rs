use tour::{render, render_all, Page};

#[test]
fn render_all_defaults_to_every_page_in_order() {
    let pages: Vec<Page> = render_all(&[]).into_iter().map(|r| r.page).collect();
    assert_eq!(pages, Page::ALL.to_vec());
}

#[test]
fn render_all_keeps_requested_order() {
    let reports = render_all(&[Page::Optionals, Page::TypeAlias]);
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0].page, Page::Optionals);
    assert_eq!(reports[1].page, Page::TypeAlias);
}

#[test]
fn report_title_matches_page() {
    for page in Page::ALL {
        assert_eq!(render(page).title, page.title());
    }
}

#[test]
fn statements_page_prints_the_cat() {
    assert_eq!(render(Page::Statements).lines, vec!["?".to_string()]);
}

#[test]
fn type_alias_page_shows_zero_length() {
    let lines = render(Page::TypeAlias).lines;
    assert_eq!(lines[1], "length: Length = 0.0");
}

#[test]
fn unused_result_page_shows_both_variants() {
    let lines = render(Page::UnusedResult).lines;
    assert_eq!(
        lines,
        vec![
            "increase() = 1, value still 0".to_string(),
            "increase_in_place() -> value 1".to_string(),
        ]
    );
}

#[test]
fn optionals_page_matches_and_filters() {
    let lines = render(Page::Optionals).lines;
    assert_eq!(
        lines,
        vec![
            "x: 42".to_string(),
            "number: 2".to_string(),
            "number: 3".to_string(),
            "number: 5".to_string(),
            "x?: 42".to_string(),
            "present values: [2, 3, 5]".to_string(),
            "missing: absent".to_string(),
        ]
    );
}

#[test]
fn one_time_init_page_reports_single_run() {
    let lines = render(Page::OneTimeInit).lines;
    assert_eq!(lines[0], "sample sequence read twice: 5 and 5 elements");
    assert_eq!(lines[1], "initializer ran 1 time(s)");
}

#[test]
fn page_names_are_kebab_case() {
    let names: Vec<&str> = Page::ALL.iter().map(|p| p.name()).collect();
    assert_eq!(
        names,
        vec![
            "type-alias",
            "statements",
            "unused-result",
            "one-time-init",
            "optionals"
        ]
    );
}
