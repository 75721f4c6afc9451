use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Height of a single bordered control.
pub const FIELD_HEIGHT: u16 = 3;

/// Fields stacked in each of the two columns.
pub const FIELDS_PER_COLUMN: usize = 4;

/// Regions of the prediction page, top to bottom.
pub struct Page {
    pub title: Rect,
    pub subtitle: Rect,
    pub header: Rect,
    pub columns: (Rect, Rect),
    pub full_width: Rect,
    pub button: Rect,
    pub banner: Rect,
    pub footer: Rect,
    pub hints: Rect,
}

/// Splits the page into its regions.
pub fn page(area: Rect) -> Page {
    let outer = centered_rect(80, 100, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                                         // title
            Constraint::Length(1),                                         // subtitle
            Constraint::Length(2),                                         // header
            Constraint::Length(FIELD_HEIGHT * FIELDS_PER_COLUMN as u16), // columns
            Constraint::Length(FIELD_HEIGHT),                              // yr_built
            Constraint::Length(3),                                         // button
            Constraint::Length(3),                                         // banner
            Constraint::Min(0),                                            // spacer
            Constraint::Length(2),                                         // footer
            Constraint::Length(1),                                         // hints
        ])
        .split(outer);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[3]);

    Page {
        title: rows[0],
        subtitle: rows[1],
        header: rows[2],
        columns: (cols[0], cols[1]),
        full_width: rows[4],
        button: centered_rect(30, 100, rows[5]),
        banner: rows[6],
        footer: rows[8],
        hints: rows[9],
    }
}

/// Splits a column into `n` stacked field slots.
pub fn stack(area: Rect, n: usize) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            (0..n)
                .map(|_| Constraint::Length(FIELD_HEIGHT))
                .chain(std::iter::once(Constraint::Min(0)))
                .collect::<Vec<_>>(),
        )
        .split(area)
        .iter()
        .take(n)
        .copied()
        .collect()
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vert[1])[1]
}
