use crate::app::{App, FavoritesState, PostsState};
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

const BODY_PREVIEW_CHARS: usize = 72;

pub fn draw(frame: &mut Frame, app: &App) {
    let [main, footer] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());

    match &app.posts {
        PostsState::Loading => draw_loading(frame, main),
        _ => draw_posts(frame, app, main),
    }

    draw_footer(frame, app, footer);

    if let Some(notice) = &app.notice {
        draw_notice(frame, &notice.message);
    }
}

fn draw_loading(frame: &mut Frame, area: Rect) {
    let loading = Paragraph::new("Loading posts...")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Posts "));
    frame.render_widget(loading, area);
}

fn draw_posts(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Posts ");
    let posts = app.posts();

    if posts.is_empty() {
        let empty = Paragraph::new("No posts.")
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = posts
        .iter()
        .map(|post| {
            let marker = if app.is_favorite(post.id) {
                Span::styled("★ ", Style::default().fg(Color::Yellow))
            } else {
                Span::raw("  ")
            };
            let title = Span::styled(
                post.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            );
            let body = Line::from(format!("  {}", preview(&post.body)))
                .style(Style::default().fg(Color::Gray));
            ListItem::new(vec![Line::from(vec![marker, title]), body])
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = ListState::default().with_selected(Some(app.selected));
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let mut hints = String::from(" ↑/↓ select   space toggle favorite   q quit");
    if matches!(app.favorites, FavoritesState::Unloaded) {
        hints.push_str("   (favorites loading)");
    }
    let footer = Paragraph::new(hints).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, area);
}

fn draw_notice(frame: &mut Frame, message: &str) {
    let area = centered_rect(frame.area(), 44, 5);
    frame.render_widget(Clear, area);

    let popup = Paragraph::new(vec![
        Line::from(message.to_string()),
        Line::from(""),
        Line::from(Span::styled(
            "press any key",
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Error ")
            .style(Style::default().fg(Color::Red)),
    );
    frame.render_widget(popup, area);
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn preview(body: &str) -> String {
    let flat = body.replace('\n', " ");
    if flat.chars().count() > BODY_PREVIEW_CHARS {
        let cut: String = flat.chars().take(BODY_PREVIEW_CHARS - 1).collect();
        format!("{cut}…")
    } else {
        flat
    }
}
