use clip_client::PromptBackend;
use ratatui::prelude::*;
use ratatui::widgets::*;
use tui_input::Input;
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget};

use super::app::{App, FormFocus};
use crate::core::{ConfirmDialog, FormField, Modal, TOAST_TITLE, TagLabel, TagLabelList};

pub fn draw<B: PromptBackend + 'static>(f: &mut Frame, app: &mut App<B>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(5),    // Prompts
            Constraint::Length(8), // Logs
            Constraint::Length(1), // Key hints
        ])
        .split(f.area());

    draw_header(f, app, chunks[0]);
    draw_prompts(f, app, chunks[1]);
    draw_logs(f, app, chunks[2]);
    draw_footer(f, app, chunks[3]);

    if app.toast().is_open() {
        draw_toast(f);
    }
    if app.root().create_dialog().is_open() {
        draw_form(f, app);
    }
    if app.delete_dialog().is_open() {
        draw_confirm(f, app.delete_dialog());
    }
}

fn draw_header<B: PromptBackend + 'static>(f: &mut Frame, app: &App<B>, area: Rect) {
    let status = match app.root().collection() {
        Some(c) => Span::styled(
            format!(" {} prompts · {} tags ", c.prompts.len(), c.tags.len()),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        None => Span::styled(
            " no data ",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
    };
    let title = Paragraph::new(Line::from(vec![
        Span::raw(" Prompt Clip "),
        Span::raw(" | "),
        status,
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(title, area);
}

fn tag_spans<'a>(
    labels: impl Iterator<Item = TagLabel<'a>>,
    cursor: Option<usize>,
) -> Vec<Span<'a>> {
    let mut spans = Vec::new();
    for (i, label) in labels.enumerate() {
        let mut style = Style::default().fg(Color::Black).bg(Color::LightBlue);
        if cursor == Some(i) {
            style = style.bg(Color::LightRed).add_modifier(Modifier::BOLD);
        }
        let text = if label.removable {
            format!(" {} × ", label.name)
        } else {
            format!(" {} ", label.name)
        };
        spans.push(Span::styled(text, style));
        spans.push(Span::raw(" "));
    }
    spans
}

fn draw_prompts<B: PromptBackend + 'static>(f: &mut Frame, app: &mut App<B>, area: Rect) {
    let prompts = app.root().prompts();
    let block = Block::default().title(" Prompts ").borders(Borders::ALL);

    if prompts.is_empty() {
        let empty = Paragraph::new("No prompts yet. Press 'n' to create one.")
            .style(Style::default().add_modifier(Modifier::DIM))
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let rows = prompts.iter().map(|p| {
        let content = p.content.lines().next().unwrap_or_default().to_string();
        let tags = Line::from(tag_spans(TagLabelList::read_only(&p.tags).labels(), None));
        Row::new(vec![
            Cell::from(p.name.clone()),
            Cell::from(content),
            Cell::from(tags),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(25),
            Constraint::Percentage(45),
            Constraint::Percentage(30),
        ],
    )
    .header(
        Row::new(vec!["Name", "Content", "Tags"])
            .style(Style::default().add_modifier(Modifier::BOLD)),
    )
    .block(block)
    .row_highlight_style(Style::default().bg(Color::DarkGray))
    .highlight_symbol("> ");

    f.render_stateful_widget(table, area, &mut app.table_state);
}

fn draw_logs<B: PromptBackend + 'static>(f: &mut Frame, app: &App<B>, area: Rect) {
    let logs = TuiLoggerWidget::default()
        .block(
            Block::default()
                .title(" Logs ")
                .border_style(Style::default().fg(Color::White).add_modifier(Modifier::DIM))
                .borders(Borders::ALL),
        )
        .output_separator('|')
        .output_timestamp(Some("%H:%M:%S".to_string()))
        .output_level(Some(TuiLoggerLevelOutput::Abbreviated))
        .output_target(false)
        .output_file(false)
        .output_line(false)
        .style(Style::default().fg(Color::White))
        .state(&app.logger_state);
    f.render_widget(logs, area);
}

fn draw_footer<B: PromptBackend + 'static>(f: &mut Frame, app: &App<B>, area: Rect) {
    let hints = Line::from(vec![
        Span::styled(" c ", Style::default().add_modifier(Modifier::REVERSED)),
        Span::raw(format!(" {}  ", app.toast().tooltip())),
        Span::styled(" n ", Style::default().add_modifier(Modifier::REVERSED)),
        Span::raw(" new  "),
        Span::styled(" d ", Style::default().add_modifier(Modifier::REVERSED)),
        Span::raw(" delete  "),
        Span::styled(" q ", Style::default().add_modifier(Modifier::REVERSED)),
        Span::raw(" quit"),
    ]);
    f.render_widget(Paragraph::new(hints), area);
}

fn draw_toast(f: &mut Frame) {
    let rect = toast_rect(f.area());
    if rect.is_empty() {
        return;
    }
    f.render_widget(Clear, rect);
    f.render_widget(
        Paragraph::new(TOAST_TITLE)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Green))
            .block(Block::default().borders(Borders::ALL)),
        rect,
    );
}

fn draw_input(f: &mut Frame, input: &Input, title: &str, focused: bool, area: Rect) {
    let width = area.width.saturating_sub(2) as usize;
    let scroll = input.visual_scroll(width);
    let border = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let widget = Paragraph::new(input.value())
        .scroll((0, scroll as u16))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {title} "))
                .border_style(border),
        );
    f.render_widget(widget, area);
    if focused {
        let x = area.x + 1 + input.visual_cursor().saturating_sub(scroll) as u16;
        f.set_cursor_position((x, area.y + 1));
    }
}

fn error_line(message: Option<&'static str>) -> Paragraph<'static> {
    Paragraph::new(message.unwrap_or_default()).style(Style::default().fg(Color::Red))
}

fn draw_form<B: PromptBackend + 'static>(f: &mut Frame, app: &App<B>) {
    let dialog = app.root().create_dialog();
    let form = app.root().form();
    let area = centered_rect(70, 20, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", dialog.title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let [name, name_err, content, content_err, tag_row, chips, submit, help] =
        Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .areas(inner);

    let errors = app.form_errors.as_ref();

    draw_input(
        f,
        &app.name_input,
        FormField::Name.label(),
        app.focus == FormFocus::Name,
        name,
    );
    f.render_widget(
        error_line(errors.and_then(|e| e.for_field(FormField::Name))),
        name_err,
    );

    draw_input(
        f,
        &app.content_input,
        FormField::Content.label(),
        app.focus == FormFocus::Content,
        content,
    );
    f.render_widget(
        error_line(errors.and_then(|e| e.for_field(FormField::Content))),
        content_err,
    );

    let [tag_field, add_button] =
        Layout::horizontal([Constraint::Min(10), Constraint::Length(9)]).areas(tag_row);
    draw_input(
        f,
        &app.tag_input,
        "Tag",
        app.focus == FormFocus::TagInput,
        tag_field,
    );
    let add_style = if form.can_add_tag() {
        Style::default().fg(Color::Green)
    } else {
        Style::default().add_modifier(Modifier::DIM)
    };
    f.render_widget(
        Paragraph::new(" + add ")
            .style(add_style)
            .block(Block::default().borders(Borders::ALL)),
        add_button,
    );

    let cursor = (app.focus == FormFocus::Tags).then_some(app.tag_cursor);
    let list = TagLabelList::removable(&form.pending_tags);
    let chips_line = if list.is_empty() {
        Line::from(Span::styled("No tags", Style::default().add_modifier(Modifier::DIM)))
    } else {
        Line::from(tag_spans(list.labels(), cursor))
    };
    f.render_widget(Paragraph::new(chips_line).wrap(Wrap { trim: true }), chips);

    let submit_style = if app.focus == FormFocus::Submit {
        Style::default().fg(Color::Black).bg(Color::Cyan)
    } else {
        Style::default().fg(Color::Cyan)
    };
    f.render_widget(
        Paragraph::new(Span::styled(" Save ", submit_style)).alignment(Alignment::Right),
        submit,
    );

    f.render_widget(
        Paragraph::new("Tab: next field  Enter: add tag / remove tag / save  Esc: close")
            .style(Style::default().add_modifier(Modifier::DIM)),
        help,
    );
}

fn draw_confirm(f: &mut Frame, dialog: &ConfirmDialog) {
    let area = centered_rect(50, 7, f.area());
    f.render_widget(Clear, area);

    let text = vec![
        Line::from(dialog.description()),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!(" {} (n) ", ConfirmDialog::CANCEL_LABEL),
                Style::default().add_modifier(Modifier::REVERSED),
            ),
            Span::raw("   "),
            Span::styled(
                format!(" {} (y) ", ConfirmDialog::CONFIRM_LABEL),
                Style::default().fg(Color::White).bg(Color::Red),
            ),
        ]),
    ];
    f.render_widget(
        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .title(format!(" {} ", dialog.title()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        ),
        area,
    );
}

/// Top-right corner, kept inside `area` however small it is
fn toast_rect(area: Rect) -> Rect {
    let width = (TOAST_TITLE.len() as u16 + 4).min(area.width);
    let y = area.y + 1u16.min(area.height);
    let height = 3u16.min(area.height.saturating_sub(y - area.y));
    let x = area.x + area.width.saturating_sub(width + 1);
    Rect::new(x, y, width, height)
}

fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let [_, row, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height.min(area.height)),
        Constraint::Fill(1),
    ])
    .areas(area);
    let [_, rect, _] = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Percentage(percent_x),
        Constraint::Fill(1),
    ])
    .areas(row);
    rect
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_rect_stays_inside_small_terminals() {
        for height in 0..6 {
            let area = Rect::new(0, 0, 80, height);
            let rect = toast_rect(area);
            assert!(rect.bottom() <= area.bottom(), "height {height}: {rect:?}");
            assert!(rect.right() <= area.right());
        }
        assert_eq!(toast_rect(Rect::new(0, 0, 80, 24)).height, 3);
    }

    #[test]
    fn test_toast_rect_on_narrow_terminal() {
        let area = Rect::new(0, 0, 10, 24);
        let rect = toast_rect(area);
        assert_eq!(rect.width, 10);
        assert_eq!(rect.x, 0);
    }
}
