use cohort_core::{
    DisplayOptions, Event, EventFilter, EventStatus, PageControl, Paginator, Settings, info_text,
    page_controls, sample_events,
};
use iced::widget::{Column, button, column, container, pick_list, row, scrollable, text, text_input};
use iced::{Element, Length, Task, Theme};

const SAMPLE_EVENT_COUNT: usize = 137;

/// Status filter choice for the pick list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusChoice {
    All,
    Only(EventStatus),
}

impl std::fmt::Display for StatusChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusChoice::All => write!(f, "All statuses"),
            StatusChoice::Only(status) => write!(f, "{}", status),
        }
    }
}

impl StatusChoice {
    pub fn all() -> Vec<StatusChoice> {
        std::iter::once(StatusChoice::All)
            .chain(EventStatus::all().into_iter().map(StatusChoice::Only))
            .collect()
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    SearchChanged(String),
    StatusSelected(StatusChoice),
    PreviousPage,
    NextPage,
    GoToPage(usize),
}

pub struct State {
    events: Vec<Event>,
    filter: EventFilter,
    paginator: Paginator,
    display: DisplayOptions,
}

impl State {
    pub fn new(events: Vec<Event>, settings: Settings) -> Self {
        let paginator = match settings.paginator() {
            Ok(paginator) => paginator,
            Err(e) => {
                log::warn!("Falling back to default page size: {}", e);
                Paginator::default()
            }
        };
        let mut state = Self {
            events,
            filter: EventFilter::default(),
            paginator,
            display: settings.display.with_item_name("events"),
        };
        state.refresh();
        state
    }

    /// Re-run the filter; a changed filter sends the list back to page 1
    fn refresh(&mut self) {
        if self.paginator.observe_triggers(&self.filter) {
            log::debug!("Filter changed, back to page 1");
        }
        let matching = self.events.iter().filter(|e| self.filter.matches(e)).count();
        self.paginator.sync_total_items(matching);
    }

    fn status_choice(&self) -> StatusChoice {
        self.filter
            .status
            .map_or(StatusChoice::All, StatusChoice::Only)
    }
}

pub fn initialize() -> (State, Task<Message>) {
    let settings = Settings::load_or_default();
    let events = sample_events(SAMPLE_EVENT_COUNT);
    log::info!("Loaded {} events", events.len());
    (State::new(events, settings), Task::none())
}

pub fn update(state: &mut State, message: Message) -> Task<Message> {
    match message {
        Message::SearchChanged(search) => {
            state.filter.search = search;
            state.refresh();
        }
        Message::StatusSelected(choice) => {
            state.filter.status = match choice {
                StatusChoice::All => None,
                StatusChoice::Only(status) => Some(status),
            };
            state.refresh();
        }
        Message::PreviousPage => {
            state.paginator.previous();
        }
        Message::NextPage => {
            state.paginator.next();
        }
        Message::GoToPage(page) => {
            state.paginator.go_to(page);
        }
    }
    Task::none()
}

pub fn view(state: &State) -> Element<'_, Message> {
    let visible = state.filter.apply(&state.events);
    let window = state.paginator.window(&visible);

    let toolbar = row![
        text_input("Search events", &state.filter.search)
            .on_input(Message::SearchChanged)
            .padding(8)
            .width(Length::Fixed(320.0)),
        pick_list(
            StatusChoice::all(),
            Some(state.status_choice()),
            Message::StatusSelected,
        )
        .width(Length::Fixed(180.0)),
    ]
    .spacing(10);

    let rows: Vec<Element<'_, Message>> = window
        .current_items
        .iter()
        .map(|event| event_row(event))
        .collect();
    let list = if rows.is_empty() {
        column![text(format!("No {} match the current filter", state.display.item_name)).size(14)]
    } else {
        Column::with_children(rows).spacing(4)
    };

    let mut content = column![
        text("Community events").size(24),
        toolbar,
        scrollable(list).height(Length::Fill),
    ]
    .spacing(12)
    .padding(20);

    if let Some(info) = info_text(&window, &state.display) {
        content = content.push(text(info).size(14));
    }
    content = content.push(page_bar(
        window.current_page,
        window.total_pages,
        &state.display,
    ));

    container(content).into()
}

fn event_row<'a>(event: &Event) -> Element<'a, Message> {
    row![
        text(event.title.clone()).width(Length::Fixed(300.0)),
        text(event.location.clone()).width(Length::Fixed(160.0)),
        text(event.starts_at.date().to_string()).width(Length::Fixed(110.0)),
        text(event.status.to_string()).width(Length::Fixed(100.0)),
        text(format!("{} seats left", event.seats_left())),
    ]
    .spacing(10)
    .into()
}

fn page_bar<'a>(
    current_page: usize,
    total_pages: usize,
    display: &DisplayOptions,
) -> Element<'a, Message> {
    let mut bar = row![].spacing(5);
    for control in page_controls(current_page, total_pages, display.max_pages_to_show) {
        let element: Element<'a, Message> = match control {
            PageControl::Previous { enabled } => button(text("Previous"))
                .on_press_maybe(enabled.then_some(Message::PreviousPage))
                .style(page_button_style(&display.class_name, false))
                .padding(5)
                .into(),
            PageControl::Next { enabled } => button(text("Next"))
                .on_press_maybe(enabled.then_some(Message::NextPage))
                .style(page_button_style(&display.class_name, false))
                .padding(5)
                .into(),
            PageControl::Page { number, active } => button(text(number.to_string()))
                .on_press_maybe((!active).then_some(Message::GoToPage(number)))
                .style(page_button_style(&display.class_name, active))
                .padding(5)
                .into(),
            PageControl::Ellipsis => text("…").size(14).into(),
        };
        bar = bar.push(element);
    }
    bar.into()
}

/// Map the configured class name onto one of iced's built-in button styles
fn page_button_style(
    class_name: &str,
    active: bool,
) -> fn(&Theme, button::Status) -> button::Style {
    match (class_name, active) {
        (_, true) => button::primary,
        ("pagination-plain", false) => button::text,
        _ => button::secondary,
    }
}
