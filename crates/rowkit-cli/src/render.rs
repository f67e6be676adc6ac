//! Table and JSON rendering of filtered views.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};
use rowkit_model::{FilterState, FilteredView, LabeledOption, Section};
use rowkit_search::ScopeBar;
use serde::Serialize;

/// Machine-readable view printed by `view --format json`.
#[derive(Debug, Clone, Serialize)]
pub struct ViewReport {
    pub filter: FilterState,
    pub visible: usize,
    pub total: usize,
    /// Search text dropped because a scope filter was active.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignored_query: Option<String>,
    pub sections: Vec<SectionReport>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionReport {
    pub index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub options: Vec<LabeledOption>,
}

impl ViewReport {
    /// Builds the report; `hide_empty` drops sections with no visible options.
    pub fn new(
        filter: &FilterState,
        view: &FilteredView<LabeledOption>,
        total: usize,
        hide_empty: bool,
    ) -> Self {
        let sections = view
            .sections()
            .iter()
            .enumerate()
            .filter(|(_, section)| !(hide_empty && section.is_empty()))
            .map(|(index, section)| SectionReport {
                index,
                title: section.title.clone(),
                options: section.options.clone(),
            })
            .collect();
        Self {
            filter: filter.clone(),
            visible: view.option_count(),
            total,
            ignored_query: None,
            sections,
        }
    }
}

pub fn view_table(report: &ViewReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Section"),
        header_cell("Code"),
        header_cell("Label"),
        header_cell("Scopes"),
    ]);
    apply_table_style(&mut table);
    for section in &report.sections {
        let name = section_name(section.index, section.title.as_deref());
        if section.options.is_empty() {
            table.add_row(vec![
                Cell::new(&name).fg(Color::DarkGrey),
                dim_cell("-"),
                dim_cell("no matches"),
                dim_cell("-"),
            ]);
            continue;
        }
        for (row, option) in section.options.iter().enumerate() {
            let section_cell = if row == 0 {
                Cell::new(&name)
                    .fg(Color::Blue)
                    .add_attribute(Attribute::Bold)
            } else {
                Cell::new("")
            };
            table.add_row(vec![
                section_cell,
                Cell::new(&option.code),
                Cell::new(&option.label),
                scopes_cell(&option.scopes),
            ]);
        }
    }
    table
}

pub fn scopes_table(bar: &ScopeBar) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Scope"),
        header_cell("Filters"),
    ]);
    apply_table_style(&mut table);
    if let Some(column) = table.column_mut(0) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    for (index, label) in bar.labels().iter().enumerate() {
        let filters = label != bar.all_scope_title();
        table.add_row(vec![
            Cell::new(index),
            Cell::new(label),
            if filters {
                Cell::new("yes")
            } else {
                dim_cell("no (shows all)")
            },
        ]);
    }
    table
}

pub fn summary_line(report: &ViewReport) -> String {
    let filter = match &report.filter {
        FilterState::NoFilter => "no filter".to_string(),
        FilterState::TextQuery(text) => format!("query \"{text}\""),
        FilterState::Scope(scope) => format!("scope {scope}"),
    };
    let mut line = format!("{} of {} options ({filter})", report.visible, report.total);
    if let Some(query) = &report.ignored_query {
        line.push_str(&format!(", query \"{query}\" ignored"));
    }
    line
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    if table.column_count() >= 4 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Percentage(30)),
            ColumnConstraint::LowerBoundary(Width::Fixed(6)),
            ColumnConstraint::UpperBoundary(Width::Percentage(45)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
        ]);
    }
}

fn section_name(index: usize, title: Option<&str>) -> String {
    match title {
        Some(title) => title.to_string(),
        None => format!("Section {}", index + 1),
    }
}

fn scopes_cell(scopes: &[String]) -> Cell {
    if scopes.is_empty() {
        dim_cell("any")
    } else {
        Cell::new(scopes.join(", "))
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

/// Sections with their option counts, used in logs.
pub fn section_counts(sections: &[Section<LabeledOption>]) -> Vec<usize> {
    sections.iter().map(Section::len).collect()
}
