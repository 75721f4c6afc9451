use anyhow::Result;
use crossterm::event::KeyCode;
use house_pricing::{
    form::{spec, Focus, FORM_ORDER},
    Feature, FormState, Predictor,
};
use ratatui::{
    layout::Rect,
    style::Modifier,
    text::Span,
    widgets::{Block, Paragraph},
    Frame,
};

use crate::ui::{
    layout::{self, FIELDS_PER_COLUMN},
    theme::Theme,
    widgets,
};

use super::Action;

const TITLE: &str = "House Price Prediction App";
const SUBTITLE: &str = "Prediksi harga rumah berdasarkan fitur-fitur properti.";
const HEADER: &str = "Input Fitur Rumah";
const BUTTON: &str = "Prediksi Harga";

const HINTS: &[(&str, &str)] = &[
    ("tab/↑↓", "move"),
    ("←→", "adjust"),
    ("0-9", "type"),
    ("enter/p", "predict"),
    ("q", "quit"),
];

/// The single page of the app: the input form plus the latest estimate.
pub struct FormScreen {
    form: FormState,
    predictor: Predictor,
}

impl FormScreen {
    pub fn new(predictor: Predictor) -> Self {
        Self {
            form: FormState::new(),
            predictor,
        }
    }
}

pub fn handle_key(state: &mut FormScreen, key: KeyCode) -> Result<Action> {
    let form = &mut state.form;

    match key {
        KeyCode::Char('q') => return Ok(Action::Quit),
        KeyCode::Esc if form.editing().is_some() => form.cancel_edit(),
        KeyCode::Esc => return Ok(Action::Quit),
        KeyCode::Tab | KeyCode::Down | KeyCode::Char('j') => form.focus_next(),
        KeyCode::BackTab | KeyCode::Up | KeyCode::Char('k') => form.focus_prev(),
        KeyCode::Left | KeyCode::Char('h') => form.decrement(),
        KeyCode::Right | KeyCode::Char('l') => form.increment(),
        KeyCode::Backspace => form.backspace(),
        KeyCode::Char('p') => {
            form.submit(&state.predictor)?;
        }
        KeyCode::Enter if form.editing().is_some() => {
            form.commit();
        }
        KeyCode::Enter if form.focus() == Focus::PredictButton => {
            form.submit(&state.predictor)?;
        }
        KeyCode::Enter => form.focus_next(),
        KeyCode::Char(c) => {
            form.input_char(c);
        }
        _ => {}
    }

    Ok(Action::None)
}

pub fn draw(f: &mut Frame, state: &FormScreen) {
    let area = f.size();
    f.render_widget(Block::default().style(Theme::base()), area);

    let page = layout::page(area);
    let form = &state.form;

    f.render_widget(
        Paragraph::new(Span::styled(TITLE, Theme::title().add_modifier(Modifier::BOLD))),
        page.title,
    );
    f.render_widget(Paragraph::new(Span::styled(SUBTITLE, Theme::dim())), page.subtitle);
    f.render_widget(Paragraph::new(Span::styled(HEADER, Theme::title())), page.header);

    let (left, right) = FORM_ORDER.split_at(FIELDS_PER_COLUMN);
    let (right, below) = right.split_at(FIELDS_PER_COLUMN);

    let slots = layout::stack(page.columns.0, FIELDS_PER_COLUMN)
        .into_iter()
        .zip(left)
        .chain(layout::stack(page.columns.1, FIELDS_PER_COLUMN).into_iter().zip(right))
        .chain(std::iter::once(page.full_width).zip(below));

    for (slot, &feature) in slots {
        draw_field(f, form, feature, slot);
    }

    f.render_widget(
        widgets::button(BUTTON, form.focus() == Focus::PredictButton),
        page.button,
    );

    if let Some(estimate) = form.estimate() {
        f.render_widget(widgets::banner(estimate), page.banner);
    }

    f.render_widget(widgets::footer(), page.footer);
    f.render_widget(widgets::hints(HINTS), page.hints);
}

fn draw_field(f: &mut Frame, form: &FormState, feature: Feature, area: Rect) {
    let focused = form.focus() == Focus::Field(feature);
    let editing = if focused { form.editing() } else { None };

    f.render_widget(
        widgets::field(spec(feature), form.value(feature), focused, editing),
        area,
    );
}
