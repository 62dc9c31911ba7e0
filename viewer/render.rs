use crate::state::ViewerState;

/// HTML renderer for the viewer.
///
/// A single template (`viewer/assets/viewer.html`) with `{{TOKEN}}`
/// placeholders is loaded at compile time; `index_page` substitutes the
/// run-specific values. Placeholders that remain unfilled are blanked so a
/// missed token produces a clean page rather than a raw `{{TOKEN}}`.
const TEMPLATE: &str = include_str!("assets/viewer.html");

/// Renders the index page for the loaded run.
pub fn index_page(state: &ViewerState) -> String {
    let mut html = TEMPLATE.to_owned();

    html = html.replace("{{SOURCE}}", &escape(&state.source_name));
    html = html.replace("{{SUMMARY_ROWS}}", &summary_rows(state));
    html = html.replace(
        "{{LOSS_SECTION}}",
        if state.loss_svg.is_some() {
            "<h2>Loss</h2>\n<img src=\"/chart/loss.svg\" alt=\"Loss chart\">"
        } else {
            ""
        },
    );

    blank_remaining(html)
}

fn summary_rows(state: &ViewerState) -> String {
    let summary = &state.summary;
    let mut rows = String::new();

    rows.push_str(&row("Epochs", &summary.epochs.to_string()));
    if let Some(value) = summary.final_accuracy {
        rows.push_str(&row("Final training accuracy", &format!("{:.4}", value)));
    }
    if let Some(best) = summary.best_accuracy {
        rows.push_str(&row(
            "Best training accuracy",
            &format!("{:.4} (epoch {})", best.value, best.epoch),
        ));
    }
    if let Some(value) = summary.final_val_accuracy {
        rows.push_str(&row("Final validation accuracy", &format!("{:.4}", value)));
    }
    if let Some(best) = summary.best_val_accuracy {
        rows.push_str(&row(
            "Best validation accuracy",
            &format!("{:.4} (epoch {})", best.value, best.epoch),
        ));
    }
    if let Some(value) = summary.final_loss {
        rows.push_str(&row("Final training loss", &format!("{:.4}", value)));
    }
    if let Some(value) = summary.final_val_loss {
        rows.push_str(&row("Final validation loss", &format!("{:.4}", value)));
    }

    rows
}

fn row(name: &str, value: &str) -> String {
    format!("<tr><td>{}</td><td>{}</td></tr>\n", name, value)
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

/// Replaces any `{{UPPERCASE_TOKEN}}` that wasn't already substituted with an
/// empty string.
fn blank_remaining(mut html: String) -> String {
    while let Some(start) = html.find("{{") {
        if let Some(end) = html[start..].find("}}") {
            let abs_end = start + end + 2;
            html.replace_range(start..abs_end, "");
        } else {
            break;
        }
    }
    html
}
