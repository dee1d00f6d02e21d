//! Text rendering of a [`FormDocument`] for the terminal host.

use crate::form::{FieldId, FieldStatus, FormController, FormDocument};

const LABEL_WIDTH: usize = 12;

fn status_marker(status: Option<FieldStatus>) -> &'static str {
    match status {
        Some(FieldStatus::Success) => "[ok]",
        Some(FieldStatus::Error) => "[x] ",
        None => "[ ] ",
    }
}

fn display_value(field: FieldId, value: &str) -> String {
    if field.is_secret() {
        format!("\"{}\"", "*".repeat(value.chars().count()))
    } else {
        format!("{:?}", value)
    }
}

/// One line per field: marker, label, value and help text when present.
pub fn field_line(document: &FormDocument, field: FieldId) -> String {
    let group = document.group(field);
    let mut line = format!(
        "{} {:<width$} {}",
        status_marker(group.status),
        field.as_str(),
        display_value(field, &group.value),
        width = LABEL_WIDTH
    );
    if !group.help.is_empty() {
        line.push_str(" - ");
        line.push_str(&group.help);
    }
    line
}

pub fn mode_line(form: &FormController<FormDocument>) -> String {
    let wizard = form.wizard();
    if !wizard.enabled {
        return "Mode: single page".to_string();
    }
    let layout = form.layout();
    let position = layout.position(wizard.current).map(|index| index + 1).unwrap_or(0);
    format!("Mode: wizard (step {} of {})", position, layout.len())
}

pub fn banner_line(document: &FormDocument) -> Option<String> {
    document.alert().map(|alert| {
        let class = alert.kind.css_class();
        let label = class.rsplit(' ').next().unwrap_or(class);
        format!("Banner ({}): {}", label, alert.message)
    })
}

/// Everything currently visible on the form.
pub fn form_lines(form: &FormController<FormDocument>) -> Vec<String> {
    let document = form.view();
    let mut lines = vec![mode_line(form)];
    for step in form.layout().steps() {
        if !document.is_step_visible(step.id) {
            continue;
        }
        lines.push(format!("Step {}", step.id));
        for &field in &step.fields {
            lines.push(format!("  {}", field_line(document, field)));
        }
    }
    if let Some(banner) = banner_line(document) {
        lines.push(banner);
    }
    lines
}
