use anyhow::{Context, Result, anyhow};
use rowkit_search::{ScopeBar, SearchSelector, SizeClass};
use tracing::{debug, info_span, warn};

use crate::cli::{OutputFormatArg, ScopesArgs, ViewArgs};
use crate::render::{ViewReport, scopes_table, section_counts, summary_line, view_table};
use crate::selector_file::{SelectorFile, load_selector_file};

pub fn run_view(args: &ViewArgs) -> Result<()> {
    let span = info_span!("view", file = %args.file.display());
    let _guard = span.enter();
    let file = load_selector_file(&args.file)?;
    let report = build_view_report(
        file,
        args.query.as_deref(),
        args.scope.as_deref(),
        args.hide_empty,
    )?;
    match args.format {
        OutputFormatArg::Table => {
            println!("{}", view_table(&report));
            println!("{}", summary_line(&report));
        }
        OutputFormatArg::Json => {
            let json = serde_json::to_string_pretty(&report).context("serialize view")?;
            println!("{json}");
        }
    }
    Ok(())
}

pub fn run_scopes(args: &ScopesArgs) -> Result<()> {
    let file = load_selector_file(&args.file)?;
    let bar = ScopeBar::new(&file.options, SizeClass::Regular);
    if !bar.has_scopes() {
        println!("No scopes configured");
        return Ok(());
    }
    println!("{}", scopes_table(&bar));
    Ok(())
}

/// Drives a selector the way the search screen does and captures its view.
///
/// A scope is selected first (which clears search text), then the query is
/// typed. A filtering scope shadows the query, including the first scope of
/// a bar without the all-scope; the shadowed text is kept in the report.
pub fn build_view_report(
    file: SelectorFile,
    query: Option<&str>,
    scope: Option<&str>,
    hide_empty: bool,
) -> Result<ViewReport> {
    let total = file.sections.option_count();
    let mut selector = SearchSelector::new(&file.options, SizeClass::Regular);
    selector.setup_options(file.sections);

    if let Some(scope) = scope {
        let index = selector
            .scope_bar()
            .labels()
            .iter()
            .position(|label| label.eq_ignore_ascii_case(scope))
            .ok_or_else(|| {
                anyhow!(
                    "unknown scope '{scope}' (available: {})",
                    selector.scope_bar().labels().join(", ")
                )
            })?;
        selector.select_scope(index)?;
    }
    let mut ignored_query = None;
    if let Some(query) = query {
        if selector.scope_bar().is_filtering() {
            warn!(
                scope = selector.scope_bar().selected_label(),
                query,
                "Scope filter active, --query ignored"
            );
            ignored_query = Some(query.to_string());
        }
        selector.update_search_results(query)?;
    }

    let view = selector.current_view()?;
    debug!(rows = ?section_counts(view.sections()), "Rows per section");
    let mut report = ViewReport::new(selector.filter_state()?, view, total, hide_empty);
    report.ignored_query = ignored_query;
    Ok(report)
}
