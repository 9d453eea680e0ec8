//! Service entry/edit dialog
//!
//! Modal dialog for adding or editing a tracked service with form fields,
//! tab navigation, validation, and save/cancel functionality.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::models::{BillingCycle, Money, ServiceCategory, ServiceDraft, KNOWN_PROVIDERS};
use crate::store::{ServiceCommand, StoreEvent};
use crate::tui::app::{ActiveDialog, App};
use crate::tui::layout::centered_rect;
use crate::tui::widgets::input::TextInput;
use crate::tui::widgets::Notification;

/// Number of dropdown rows visible at once
const PROVIDER_ROWS: usize = 5;

/// Which field is currently focused in the service form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServiceField {
    #[default]
    Name,
    Provider,
    Amount,
    Billing,
    Category,
}

impl ServiceField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Provider,
            Self::Provider => Self::Amount,
            Self::Amount => Self::Billing,
            Self::Billing => Self::Category,
            Self::Category => Self::Name,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Name => Self::Category,
            Self::Provider => Self::Name,
            Self::Amount => Self::Provider,
            Self::Billing => Self::Amount,
            Self::Category => Self::Billing,
        }
    }
}

/// State for the service form dialog
#[derive(Debug, Clone)]
pub struct ServiceFormState {
    /// Currently focused field
    pub focused_field: ServiceField,

    /// Service name input
    pub name_input: TextInput,

    /// Amount input
    pub amount_input: TextInput,

    /// Chosen provider, None until one is picked
    pub selected_provider: Option<String>,

    /// Highlight index in the provider dropdown
    pub provider_list_index: usize,

    /// Index into BillingCycle::ALL
    pub billing_index: usize,

    /// Index into ServiceCategory::ALL
    pub category_index: usize,

    /// Whether this is an edit (vs new service)
    pub is_edit: bool,
}

impl Default for ServiceFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl ServiceFormState {
    /// Create a new form state with create-mode defaults
    pub fn new() -> Self {
        let mut state = Self {
            focused_field: ServiceField::Name,
            name_input: TextInput::new().placeholder("e.g., ChatGPT Plus, Claude Pro"),
            amount_input: TextInput::new().placeholder("20.00"),
            selected_provider: None,
            provider_list_index: 0,
            billing_index: 0,
            category_index: 0,
            is_edit: false,
        };
        state.update_focus();
        state
    }

    /// Create form state pre-populated from an existing service
    pub fn from_service(service: &crate::models::AiService) -> Self {
        let mut state = Self::new();
        state.is_edit = true;
        state.name_input = TextInput::new().content(&service.name);
        state.amount_input = TextInput::new().content(format!(
            "{}.{:02}",
            service.amount.dollars(),
            service.amount.cents_part()
        ));
        state.selected_provider = Some(service.provider.clone());
        state.provider_list_index = KNOWN_PROVIDERS
            .iter()
            .position(|p| *p == service.provider)
            .unwrap_or(0);
        state.billing_index = BillingCycle::ALL
            .iter()
            .position(|c| *c == service.billing_cycle)
            .unwrap_or(0);
        state.category_index = ServiceCategory::ALL
            .iter()
            .position(|c| *c == service.category)
            .unwrap_or(0);
        state.update_focus();
        state
    }

    /// Move to the next field
    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
        self.update_focus();
    }

    /// Move to the previous field
    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
        self.update_focus();
    }

    /// Update which input has focus
    fn update_focus(&mut self) {
        self.name_input.focused = self.focused_field == ServiceField::Name;
        self.amount_input.focused = self.focused_field == ServiceField::Amount;
    }

    /// Get the currently focused text input, if the field is a text field
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            ServiceField::Name => Some(&mut self.name_input),
            ServiceField::Amount => Some(&mut self.amount_input),
            _ => None,
        }
    }

    /// The billing cycle currently chosen in the form
    pub fn billing_cycle(&self) -> BillingCycle {
        BillingCycle::ALL[self.billing_index % BillingCycle::ALL.len()]
    }

    /// The category currently chosen in the form
    pub fn category(&self) -> ServiceCategory {
        ServiceCategory::ALL[self.category_index % ServiceCategory::ALL.len()]
    }

    /// Cycle the billing selector by the given step
    pub fn cycle_billing(&mut self, step: isize) {
        let len = BillingCycle::ALL.len() as isize;
        self.billing_index = ((self.billing_index as isize + step).rem_euclid(len)) as usize;
    }

    /// Cycle the category selector by the given step
    pub fn cycle_category(&mut self, step: isize) {
        let len = ServiceCategory::ALL.len() as isize;
        self.category_index = ((self.category_index as isize + step).rem_euclid(len)) as usize;
    }

    /// Build a draft from the form, or None if a required field is missing
    /// or the amount does not parse as non-negative money
    ///
    /// Rejection is silent: the dialog simply stays open.
    pub fn build_draft(&self) -> Option<ServiceDraft> {
        let name = self.name_input.value().trim();
        if name.is_empty() {
            return None;
        }

        let provider = self.selected_provider.as_deref()?.trim();
        if provider.is_empty() {
            return None;
        }

        let amount_str = self.amount_input.value().trim();
        if amount_str.is_empty() {
            return None;
        }
        let amount = Money::parse(amount_str).ok()?;
        if amount.is_negative() {
            return None;
        }

        Some(ServiceDraft::new(
            name,
            provider,
            amount,
            self.billing_cycle(),
            self.category(),
        ))
    }
}

/// Render the service dialog
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = centered_rect(60, 70, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let title = match &app.active_dialog {
        ActiveDialog::AddService => " Add AI Service ",
        ActiveDialog::EditService(_) => " Edit AI Service ",
        _ => " Service ",
    };

    let block = Block::default()
        .title(title)
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(block, area);

    // Inner area for content
    let inner = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(2),
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                       // Name
            Constraint::Length(1),                       // Provider
            Constraint::Length(PROVIDER_ROWS as u16 + 1), // Provider dropdown
            Constraint::Length(1),                       // Amount
            Constraint::Length(1),                       // Billing
            Constraint::Length(1),                       // Category
            Constraint::Length(1),                       // Spacer
            Constraint::Length(1),                       // Hints
            Constraint::Min(0),                          // Remaining
        ])
        .split(inner);

    let form = &app.service_form;

    render_text_field(frame, chunks[0], "Name", &form.name_input);
    render_provider_field(frame, form, chunks[1], chunks[2]);
    render_text_field(frame, chunks[3], "Amount", &form.amount_input);
    render_selector_field(
        frame,
        chunks[4],
        "Billing",
        &form.billing_cycle().to_string(),
        form.focused_field == ServiceField::Billing,
    );
    render_selector_field(
        frame,
        chunks[5],
        "Category",
        &form.category().to_string(),
        form.focused_field == ServiceField::Category,
    );

    let hints = Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
        Span::raw(" Next  "),
        Span::styled("[Shift+Tab]", Style::default().fg(Color::Yellow)),
        Span::raw(" Prev  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Save  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[7]);
}

/// Render a labeled text field with cursor support
fn render_text_field(frame: &mut Frame, area: Rect, label: &str, input: &TextInput) {
    let focused = input.focused;

    let label_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };

    let value = input.value();
    let display_value = if value.is_empty() && !focused {
        input.placeholder.clone()
    } else {
        value.to_string()
    };

    let value_style = if focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Yellow)
    };

    let mut spans = vec![Span::styled(format!("{:>10}: ", label), label_style)];

    if focused {
        // Show value with cursor
        let cursor_pos = input.cursor.min(display_value.len());
        let (before, after) = display_value.split_at(cursor_pos);

        spans.push(Span::styled(before.to_string(), value_style));

        let cursor_char = after.chars().next().unwrap_or(' ');
        spans.push(Span::styled(
            cursor_char.to_string(),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ));

        if after.len() > 1 {
            spans.push(Span::styled(after[1..].to_string(), value_style));
        }
    } else {
        spans.push(Span::styled(display_value, value_style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render a cycling selector field ("◂ Monthly ▸")
fn render_selector_field(frame: &mut Frame, area: Rect, label: &str, value: &str, focused: bool) {
    let label_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };

    let value_style = if focused {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };

    let spans = vec![
        Span::styled(format!("{:>10}: ", label), label_style),
        Span::styled(if focused { "◂ " } else { "  " }, Style::default().fg(Color::Yellow)),
        Span::styled(value.to_string(), value_style),
        Span::styled(if focused { " ▸" } else { "  " }, Style::default().fg(Color::Yellow)),
    ];

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the provider field with its dropdown
fn render_provider_field(
    frame: &mut Frame,
    form: &ServiceFormState,
    input_area: Rect,
    dropdown_area: Rect,
) {
    let focused = form.focused_field == ServiceField::Provider;

    let label_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };

    let display_value = match &form.selected_provider {
        Some(provider) => provider.clone(),
        None => "Select provider".to_string(),
    };

    let value_style = if form.selected_provider.is_some() {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut spans = vec![
        Span::styled(format!("{:>10}: ", "Provider"), label_style),
        Span::styled(display_value, value_style),
    ];
    if focused && form.selected_provider.is_some() {
        spans.push(Span::styled(
            " (Backspace to change)",
            Style::default().fg(Color::DarkGray),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), input_area);

    // Render dropdown while the field is focused and nothing is selected yet
    if focused && form.selected_provider.is_none() {
        render_provider_dropdown(frame, form, dropdown_area);
    }
}

/// Render the provider dropdown list, windowed around the highlight
fn render_provider_dropdown(frame: &mut Frame, form: &ServiceFormState, area: Rect) {
    let highlight = form.provider_list_index.min(KNOWN_PROVIDERS.len() - 1);
    let start = highlight.saturating_sub(PROVIDER_ROWS - 1);
    let visible = &KNOWN_PROVIDERS[start..KNOWN_PROVIDERS.len().min(start + PROVIDER_ROWS)];

    let items: Vec<ListItem> = visible
        .iter()
        .map(|provider| {
            ListItem::new(Line::from(Span::styled(
                format!("  {}", provider),
                Style::default().fg(Color::White),
            )))
        })
        .collect();

    let list = List::new(items)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = ListState::default();
    state.select(Some(highlight - start));

    frame.render_stateful_widget(list, area, &mut state);
}

/// Handle key input for the service dialog
pub fn handle_key(app: &mut App, key: crossterm::event::KeyEvent) {
    use crossterm::event::{KeyCode, KeyModifiers};

    let form = &mut app.service_form;

    match key.code {
        KeyCode::Esc => {
            // Cancel: close without emitting anything
            app.close_dialog();
        }

        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                form.prev_field();
            } else {
                form.next_field();
            }
        }

        KeyCode::BackTab => {
            form.prev_field();
        }

        KeyCode::Enter => {
            // In the provider dropdown, Enter picks the highlighted entry
            if form.focused_field == ServiceField::Provider && form.selected_provider.is_none() {
                let idx = form.provider_list_index.min(KNOWN_PROVIDERS.len() - 1);
                form.selected_provider = Some(KNOWN_PROVIDERS[idx].to_string());
                form.next_field();
                return;
            }

            // Otherwise, try to save
            submit(app);
        }

        KeyCode::Up => {
            if form.focused_field == ServiceField::Provider && form.selected_provider.is_none() {
                if form.provider_list_index > 0 {
                    form.provider_list_index -= 1;
                }
            }
        }

        KeyCode::Down => {
            if form.focused_field == ServiceField::Provider && form.selected_provider.is_none() {
                if form.provider_list_index + 1 < KNOWN_PROVIDERS.len() {
                    form.provider_list_index += 1;
                }
            }
        }

        KeyCode::Left => match form.focused_field {
            ServiceField::Billing => form.cycle_billing(-1),
            ServiceField::Category => form.cycle_category(-1),
            _ => {
                if let Some(input) = form.focused_input() {
                    input.move_left();
                }
            }
        },

        KeyCode::Right => match form.focused_field {
            ServiceField::Billing => form.cycle_billing(1),
            ServiceField::Category => form.cycle_category(1),
            _ => {
                if let Some(input) = form.focused_input() {
                    input.move_right();
                }
            }
        },

        KeyCode::Home => {
            if let Some(input) = form.focused_input() {
                input.move_start();
            }
        }

        KeyCode::End => {
            if let Some(input) = form.focused_input() {
                input.move_end();
            }
        }

        KeyCode::Backspace => {
            // Backspace on a chosen provider reopens the dropdown
            if form.focused_field == ServiceField::Provider && form.selected_provider.is_some() {
                form.selected_provider = None;
                return;
            }
            if let Some(input) = form.focused_input() {
                input.backspace();
            }
        }

        KeyCode::Delete => {
            if let Some(input) = form.focused_input() {
                input.delete();
            }
        }

        KeyCode::Char(c) => {
            if let Some(input) = form.focused_input() {
                input.insert(c);
            }
        }

        _ => {}
    }
}

/// Try to submit the form
///
/// An invalid form is rejected silently: nothing is emitted and the dialog
/// stays open. On success the store is updated, a notification is queued,
/// the form resets, and the dialog closes.
fn submit(app: &mut App) {
    let Some(draft) = app.service_form.build_draft() else {
        return;
    };

    let target = app.editing_target();
    match app.store.dispatch(ServiceCommand::Submit { draft, target }) {
        Ok(StoreEvent::Updated(_)) => {
            app.notify(Notification::success(
                "Your AI service has been updated successfully.",
            ));
        }
        Ok(_) => {
            app.notify(Notification::success(
                "Your AI service has been added to the tracker.",
            ));
        }
        Err(e) => {
            app.notify(Notification::info(e.to_string()));
        }
    }

    app.service_form = ServiceFormState::new();
    app.close_dialog();
}
