//! Selector view (View in TEA pattern)
//!
//! [`render`] produces the frame as plain text so it can be tested without
//! a terminal; [`view`] draws the same lines through ratatui with the
//! cursor row highlighted.


use dropshell_app::SelectorState;
use dropshell_core::InstanceSummary;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

pub const HEADER: &str = "What Droplet you want to log into?";
pub const FETCHING: &str = "Please wait while we fetch the droplets...";
pub const EMPTY: &str = "No droplets found.";
pub const PREVIOUS_HINT: &str = "Press ⬆️ up to load previous droplets.";
pub const MORE_HINT: &str = "Press ⬇️ down to load more droplets.";
pub const LEGEND: &str = "Press ⬆️ up or ⬇️ down arrows to select, enter to ssh into, or q to quit.";

const CURSOR: char = '>';

/// One selectable row
fn choice_line(item: &InstanceSummary, under_cursor: bool) -> String {
    let marker = if under_cursor { CURSOR } else { ' ' };
    format!(
        "{marker} {} [{}/{}] => (Region: {}, ID: {})",
        item.name, item.private_addr, item.public_addr, item.region, item.id
    )
}

/// Frame lines for the current state
pub fn render_lines(state: &SelectorState) -> Vec<String> {
    let mut lines = vec![HEADER.to_string(), String::new()];

    if state.fetching() {
        lines.push(FETCHING.to_string());
    } else {
        // Hint slots stay in place on an empty page
        let show_previous = state.has_previous_page() && state.at_top_row();
        lines.push(if show_previous {
            PREVIOUS_HINT.to_string()
        } else {
            String::new()
        });

        if state.items.is_empty() {
            lines.push(EMPTY.to_string());
        } else {
            lines.extend(
                state
                    .items
                    .iter()
                    .enumerate()
                    .map(|(i, item)| choice_line(item, i == state.cursor)),
            );
        }

        lines.push(String::new());
        let show_more = state.has_next_page() && state.at_bottom_row();
        lines.push(if show_more {
            MORE_HINT.to_string()
        } else {
            String::new()
        });
    }

    lines.push(String::new());
    lines.push(LEGEND.to_string());
    lines
}

/// Render the frame as text
pub fn render(state: &SelectorState) -> String {
    render_lines(state).join("\n")
}

/// Draw the frame
pub fn view(frame: &mut Frame, state: &SelectorState) {
    let cursor_style = Style::new().add_modifier(Modifier::BOLD | Modifier::REVERSED);

    let lines: Vec<Line> = render_lines(state)
        .into_iter()
        .map(|line| {
            if line.starts_with(CURSOR) {
                Line::styled(line, cursor_style)
            } else {
                Line::raw(line)
            }
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), frame.area());
}
