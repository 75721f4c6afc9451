use house_pricing::{
    form::{Control, FieldSpec},
    Estimate,
};
use ratatui::{
    layout::Alignment,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::theme::Theme;

const DISCLAIMER: &str =
    "Prediksi ini berdasarkan model machine learning dan tidak menggantikan penilaian profesional.";

/// Width of the slider track, in cells.
const TRACK_WIDTH: usize = 24;

/// A single labelled control.
///
/// `editing` holds the text being typed into a number input, if any.
pub fn field<'a>(
    spec: &FieldSpec,
    value: f64,
    focused: bool,
    editing: Option<&'a str>,
) -> Paragraph<'a> {
    let border = if focused { Theme::focused() } else { Theme::border() };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(format!(" {} ", spec.label))
        .title_style(if focused { Theme::focused() } else { Theme::dim() });

    let line = match spec.control {
        Control::NumberInput => number_line(spec, value, focused, editing),
        Control::Slider => slider_line(spec, value, focused),
        Control::YesNo => yes_no_line(value, focused),
    };

    Paragraph::new(line).block(block)
}

fn number_line<'a>(
    spec: &FieldSpec,
    value: f64,
    focused: bool,
    editing: Option<&'a str>,
) -> Line<'a> {
    let stepper = if focused { Theme::focused() } else { Theme::muted() };

    let shown = match editing {
        Some(buf) => vec![
            Span::styled(buf, Theme::text()),
            Span::styled("█", Theme::focused()),
        ],
        None => vec![Span::styled(spec.display(value), Theme::text())],
    };

    let mut spans = vec![Span::styled("[-] ", stepper)];
    spans.extend(shown);
    spans.push(Span::styled(" [+]", stepper));
    Line::from(spans)
}

fn slider_line<'a>(spec: &FieldSpec, value: f64, focused: bool) -> Line<'a> {
    let thumb = slider_position(spec, value, TRACK_WIDTH);
    let filled = "━".repeat(thumb);
    let rest = "─".repeat(TRACK_WIDTH.saturating_sub(thumb + 1));
    let accent = if focused { Theme::focused() } else { Theme::dim() };

    Line::from(vec![
        Span::styled(spec.display(spec.min), Theme::muted()),
        Span::raw(" "),
        Span::styled(filled, accent),
        Span::styled("●", accent),
        Span::styled(rest, Theme::muted()),
        Span::raw(" "),
        Span::styled(spec.display(spec.max), Theme::muted()),
        Span::raw("   "),
        Span::styled(spec.display(value), Theme::text()),
    ])
}

/// Cell index of the slider thumb on a track `width` cells wide.
pub fn slider_position(spec: &FieldSpec, value: f64, width: usize) -> usize {
    let span = spec.max - spec.min;
    if width == 0 || span <= 0. {
        return 0;
    }

    let ratio = ((value - spec.min) / span).clamp(0., 1.);
    (ratio * (width - 1) as f64).round() as usize
}

fn yes_no_line<'a>(value: f64, focused: bool) -> Line<'a> {
    let selected = if focused { Theme::focused() } else { Theme::text() };
    let option = |label: &'a str, on: bool| {
        if on {
            Span::styled(format!("(•) {label}"), selected)
        } else {
            Span::styled(format!("( ) {label}"), Theme::muted())
        }
    };

    Line::from(vec![
        option("Ya", value != 0.),
        Span::raw("   "),
        option("Tidak", value == 0.),
    ])
}

pub fn button(label: &str, focused: bool) -> Paragraph<'_> {
    Paragraph::new(Line::from(Span::styled(format!(" {label} "), Theme::button(focused))))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(if focused { Theme::focused() } else { Theme::border() }),
        )
}

/// Success banner with the formatted estimate.
pub fn banner(estimate: &Estimate) -> Paragraph<'_> {
    Paragraph::new(Line::from(vec![
        Span::styled(" ✔ Estimasi Harga Rumah: ", Theme::success()),
        Span::styled(estimate.formatted.as_str(), Theme::success()),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Theme::success()),
    )
}

/// Static disclaimer under a horizontal rule.
pub fn footer() -> Paragraph<'static> {
    Paragraph::new(Span::styled(DISCLAIMER, Theme::disclaimer()))
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Theme::muted()),
        )
        .wrap(Wrap { trim: true })
}

pub fn hints(hints: &[(&'static str, &'static str)]) -> Paragraph<'static> {
    let spans = hints
        .iter()
        .flat_map(|&(key, action)| {
            [
                Span::styled(key, Theme::dim()),
                Span::styled(format!(" {action}    "), Theme::muted()),
            ]
        })
        .collect::<Vec<_>>();

    Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
}
