use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph, Wrap};

use crate::core::container::Container;
use crate::tui::DemoApp;

pub fn draw(frame: &mut Frame, app: &DemoApp) {
    use Constraint::{Length, Min, Percentage};
    let layout = Layout::vertical([Length(1), Min(0), Length(8), Length(1)]);
    let [title_area, main_area, log_area, help_area] = layout.areas(frame.area());

    let [tree_area, screen_area] =
        Layout::horizontal([Percentage(45), Percentage(55)]).areas(main_area);

    draw_title(frame, title_area, app);
    draw_tree(frame, tree_area, app);
    draw_screen(frame, screen_area, app);
    draw_command_log(frame, log_area, app);
    draw_help(frame, help_area);

    if let Some(alert) = &app.alert {
        let popup = centered_rect(50, 30, frame.area());
        frame.render_widget(Clear, popup);
        let body = format!(
            "{}\n\n[ {} ]",
            alert.message,
            alert.buttons.join(" ]  [ ")
        );
        let dialog = Paragraph::new(body)
            .block(
                Block::bordered()
                    .title(alert.title.as_str())
                    .border_style(Style::default().fg(Color::Red)),
            )
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(dialog, popup);
    }
}

fn draw_title(frame: &mut Frame, area: Rect, app: &DemoApp) {
    let state = app.store.state();
    let phase = if app.transitions.is_animating() {
        "animating"
    } else {
        "idle"
    };
    let title = format!(
        "Switchback Demo | {} | transitions: {phase} (queued: {})",
        if state.app_in_foreground {
            "foreground"
        } else {
            "background"
        },
        app.transitions.pending_len(),
    );
    frame.render_widget(Line::raw(title), area);
}

fn draw_tree(frame: &mut Frame, area: Rect, app: &DemoApp) {
    let visible_tag = app.store.visible_container().tag.clone();
    let mut lines = Vec::new();
    tree_lines(&app.store.state().root, 0, visible_tag.as_str(), "", &mut lines);
    let tree = Paragraph::new(lines).block(Block::bordered().title("Container tree"));
    frame.render_widget(tree, area);
}

fn tree_lines(
    container: &Container<String>,
    depth: usize,
    visible_tag: &str,
    note: &str,
    lines: &mut Vec<Line<'static>>,
) {
    let indent = "  ".repeat(depth);
    match container {
        Container::Stack(stack) => {
            let text = format!(
                "{indent}■ Stack \"{}\" [{}]{note}",
                stack.tag,
                stack.views().join(" › ")
            );
            if stack.tag.as_str() == visible_tag {
                lines.push(Line::styled(
                    format!("{text}  ◀ visible"),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ));
            } else {
                lines.push(Line::raw(text));
            }
        }
        Container::Tabs(tabs) => {
            lines.push(Line::raw(format!(
                "{indent}▣ Tabs \"{}\" (tab {}/{}){note}",
                tabs.tag,
                tabs.selected_index() + 1,
                tabs.children().len()
            )));
            for (index, child) in tabs.children().iter().enumerate() {
                let note = if index == tabs.selected_index() {
                    "  (selected)"
                } else {
                    ""
                };
                tree_lines(child, depth + 1, visible_tag, note, lines);
            }
        }
    }
    if let Some(overlay) = container.overlay() {
        lines.push(Line::styled(
            format!("{indent}  overlay · {overlay}"),
            Style::default().fg(Color::Cyan),
        ));
    }
    if let Some(modal) = container.modal() {
        lines.push(Line::styled(
            format!("{indent}  modal ▼"),
            Style::default().fg(Color::Yellow),
        ));
        tree_lines(modal, depth + 2, visible_tag, "", lines);
    }
}

fn draw_screen(frame: &mut Frame, area: Rect, app: &DemoApp) {
    let under_modal = app.store.state().root.visible_modal_host().is_some();
    let (title, border) = if under_modal {
        ("Screen (modal)", Style::default().fg(Color::Yellow))
    } else {
        ("Screen", Style::default())
    };

    let stack = app.store.visible_container();
    let mut body = format!("\n\n{}\n", stack.top_view());
    if let Some(overlay) = app.store.state().visible_overlay() {
        body.push_str(&format!("\n[ {overlay} ]"));
    }
    if app.transitions.is_animating() {
        body.push_str("\n~ transitioning ~");
    }
    body.push_str(&format!(
        "\n\nstack \"{}\" depth {}",
        stack.tag,
        stack.views().len()
    ));

    let screen = Paragraph::new(body)
        .block(Block::bordered().title(title).border_style(border))
        .alignment(Alignment::Center);
    frame.render_widget(screen, area);
}

fn draw_command_log(frame: &mut Frame, area: Rect, app: &DemoApp) {
    // Newest commands at the bottom, clipped to the panel height.
    let visible_rows = area.height.saturating_sub(2) as usize;
    let lines: Vec<Line> = app
        .presented
        .iter()
        .rev()
        .take(visible_rows)
        .rev()
        .map(|entry| Line::raw(entry.as_str()))
        .collect();
    let log = Paragraph::new(lines).block(Block::bordered().title("Presented commands"));
    frame.render_widget(log, area);
}

fn draw_help(frame: &mut Frame, area: Rect) {
    let help = "q quit · esc back · 1-3 tabs · p push · o pop · r replace · \
                u unwind · s reset stack · m modal · d dismiss · v overlay · \
                n new root · f fg/bg · a alert";
    frame.render_widget(
        Line::styled(help, Style::default().add_modifier(Modifier::DIM)),
        area,
    );
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    use Constraint::Percentage;
    let [_, middle, _] = Layout::vertical([
        Percentage((100 - percent_y) / 2),
        Percentage(percent_y),
        Percentage((100 - percent_y) / 2),
    ])
    .areas(area);
    let [_, center, _] = Layout::horizontal([
        Percentage((100 - percent_x) / 2),
        Percentage(percent_x),
        Percentage((100 - percent_x) / 2),
    ])
    .areas(middle);
    center
}
