// Layout tree -> ratatui widgets

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table};

use crate::dashboard::format::Panel;
use crate::dashboard::layout::{Content, DashboardLayout, Region, SplitDirection};

const COLUMN_SPACING: u16 = 2;

/// Renders the complete dashboard into the frame.
pub fn draw_layout(f: &mut Frame, layout: &DashboardLayout) {
    draw_region(f, f.area(), layout.root());
}

fn draw_region(f: &mut Frame, area: Rect, region: &Region) {
    let Some(direction) = region.direction() else {
        match region.content() {
            Some(Content::Banner(text)) => draw_banner(f, area, text),
            Some(Content::Panel(panel)) => draw_panel(f, area, panel),
            None => {}
        }
        return;
    };

    let children = region.children();
    let constraints: Vec<Constraint> = children
        .iter()
        .map(|c| c.size().map_or(Constraint::Fill(1), Constraint::Length))
        .collect();
    let chunks = Layout::default()
        .direction(match direction {
            SplitDirection::Column => Direction::Vertical,
            SplitDirection::Row => Direction::Horizontal,
        })
        .constraints(constraints)
        .split(area);

    for (child, chunk) in children.iter().zip(chunks.iter()) {
        draw_region(f, *chunk, child);
    }
}

fn draw_banner(f: &mut Frame, area: Rect, text: &str) {
    let line = Line::from(Span::styled(
        text,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ));
    let para = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().bg(Color::Blue));
    f.render_widget(para, area);
}

fn draw_panel(f: &mut Frame, area: Rect, panel: &Panel) {
    let block = Block::default()
        .title(Span::styled(
            panel.title.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(panel.border_color));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let key_width = column_width(panel.rows.iter().map(|(k, _)| k.as_str()));
    let value_width = column_width(panel.rows.iter().map(|(_, v)| v.as_str()));
    let table_area = center_horizontally(
        inner,
        key_width + COLUMN_SPACING + value_width,
        panel.rows.len() as u16,
    );

    let key_style = Style::default().fg(panel.key_color);
    let value_style = Style::default().fg(panel.value_color);
    let rows = panel.rows.iter().map(|(key, value)| {
        Row::new(vec![
            Cell::from(Span::styled(key.as_str(), key_style)),
            Cell::from(Span::styled(value.as_str(), value_style)),
        ])
    });
    let table = Table::new(
        rows,
        [Constraint::Length(key_width), Constraint::Length(value_width)],
    )
    .column_spacing(COLUMN_SPACING);
    f.render_widget(table, table_area);
}

fn column_width<'a>(cells: impl Iterator<Item = &'a str>) -> u16 {
    cells
        .map(|c| c.chars().count())
        .max()
        .unwrap_or(0)
        .min(u16::MAX as usize) as u16
}

/// Top-aligned rect of at most `width` x `height`, centered across `area`.
fn center_horizontally(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height: height.min(area.height),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_horizontally_fits_inside() {
        let area = Rect::new(2, 1, 20, 5);
        assert_eq!(center_horizontally(area, 10, 3), Rect::new(7, 1, 10, 3));
    }

    #[test]
    fn test_center_horizontally_clamps_oversized() {
        let area = Rect::new(0, 0, 8, 2);
        assert_eq!(center_horizontally(area, 30, 6), area);
    }

    #[test]
    fn test_column_width_empty_is_zero() {
        assert_eq!(column_width(std::iter::empty()), 0);
    }
}
