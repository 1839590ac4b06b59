//! Core application state and Iced Application implementation
//!
//! The views own their control flow; this layer maps messages onto them,
//! turns submissions into tasks and renders the current screen.

use iced::keyboard::{self, Key};
use iced::widget::{button, column, container, image, row, scrollable, text, Space};
use iced::{Alignment, Element, Event, Length, Padding, Subscription, Task, Theme};

use crate::backend::{Book, RecommendationClient, RecommendationError};
use crate::config::Settings;
use crate::router::{Handoff, Navigator, Route};
use crate::ui::theme::{self, Palette};
use crate::ui::{book_card, search_bar};
use crate::views::search::RequestId;
use crate::views::team::RandomAvatars;
use crate::views::{DetailView, SearchView, TeamView};

// ============================================================================
// UI State Types
// ============================================================================

/// The view currently on screen
///
/// The search view lives on the app itself so results survive a trip to a
/// detail page and back.
#[derive(Debug, Clone)]
pub enum Screen {
    Search,
    Team {
        view: TeamView,
        avatars: Vec<Option<image::Handle>>,
    },
    Detail(DetailView),
}

// ============================================================================
// Application State
// ============================================================================

pub struct Shelfwise {
    settings: Settings,
    client: RecommendationClient,
    navigator: Navigator,
    search: SearchView,
    screen: Screen,
}

#[derive(Debug, Clone)]
pub enum Message {
    PromptChanged(String),
    PromptSubmit,
    RecommendationsLoaded(RequestId, Result<Vec<Book>, RecommendationError>),
    BookSelected(usize),
    NavigateTo(Route),
    Back,
    AvatarLoaded { url: String, result: Result<Vec<u8>, String> },
    IcedEvent(Event),
}

impl Shelfwise {
    pub fn new(settings: Settings, initial: Route) -> (Self, Task<Message>) {
        let client = RecommendationClient::new(&settings.api_base_url);
        let mut app = Self {
            settings,
            client,
            navigator: Navigator::new(initial.clone()),
            search: SearchView::new(),
            screen: Screen::Search,
        };
        let task = app.activate(initial, None);
        (app, task)
    }

    pub fn title(&self) -> String {
        match &self.screen {
            Screen::Detail(detail) => match detail.book() {
                Some(book) => format!("{} - Shelfwise", book.title),
                None => String::from("Shelfwise"),
            },
            Screen::Team { .. } => String::from("Team - Shelfwise"),
            Screen::Search => String::from("Shelfwise"),
        }
    }

    pub fn search(&self) -> &SearchView {
        &self.search
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn route(&self) -> Route {
        self.navigator.current()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PromptChanged(prompt) => {
                self.search.set_prompt(prompt);
                Task::none()
            }

            Message::PromptSubmit => self.submit_search(),

            Message::RecommendationsLoaded(request, result) => {
                self.search.complete(request, result);
                Task::none()
            }

            Message::BookSelected(index) => match self.search.select(index) {
                Some(handoff) => self.open(Route::Book(index.to_string()), Some(handoff)),
                None => {
                    tracing::warn!("No book at index {}", index);
                    Task::none()
                }
            },

            Message::NavigateTo(route) => self.open(route, None),

            Message::Back => self.back(),

            Message::AvatarLoaded { url, result } => {
                if let Screen::Team { view, avatars } = &mut self.screen {
                    match result {
                        Ok(bytes) => {
                            for (slot, member) in avatars.iter_mut().zip(view.members()) {
                                if member.avatar == url {
                                    *slot = Some(image::Handle::from_bytes(bytes.clone()));
                                }
                            }
                        }
                        Err(e) => tracing::warn!("Could not load avatar {}: {}", url, e),
                    }
                }
                Task::none()
            }

            Message::IcedEvent(event) => {
                if let Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) = event {
                    if key == Key::Named(keyboard::key::Named::Escape) {
                        return self.update(Message::Back);
                    }
                }
                Task::none()
            }
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        iced::event::listen().map(Message::IcedEvent)
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    fn submit_search(&mut self) -> Task<Message> {
        let Some(submission) = self.search.submit() else {
            return Task::none();
        };

        let client = self.client.clone();
        let request = submission.request;
        let prompt = submission.prompt;
        Task::perform(
            async move { client.fetch_recommendations(&prompt).await },
            move |result| Message::RecommendationsLoaded(request, result),
        )
    }

    fn open(&mut self, route: Route, handoff: Option<Handoff>) -> Task<Message> {
        if !self.navigator.navigate(route.clone()) {
            return Task::none();
        }
        self.activate(route, handoff)
    }

    fn back(&mut self) -> Task<Message> {
        match self.navigator.back() {
            Some(route) => self.activate(route, None),
            None => Task::none(),
        }
    }

    /// Put the view for `route` on screen; only a detail view takes a handoff
    fn activate(&mut self, route: Route, handoff: Option<Handoff>) -> Task<Message> {
        match route {
            Route::Search => {
                self.screen = Screen::Search;
                Task::none()
            }
            Route::Book(id) => {
                self.screen = Screen::Detail(DetailView::activate(id, handoff));
                Task::none()
            }
            Route::Team => {
                let view = TeamView::new(&self.settings.avatar_base_url, &mut RandomAvatars);
                let tasks: Vec<Task<Message>> = view
                    .members()
                    .iter()
                    .map(|member| {
                        let url = member.avatar.clone();
                        Task::perform(fetch_avatar(url.clone()), move |result| {
                            Message::AvatarLoaded {
                                url: url.clone(),
                                result,
                            }
                        })
                    })
                    .collect();
                let avatars = vec![None; view.members().len()];
                self.screen = Screen::Team { view, avatars };
                Task::batch(tasks)
            }
        }
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    pub fn view(&self) -> Element<'_, Message> {
        let current = self.route();
        let nav = row![
            nav_button("Search", Route::Search, &current),
            nav_button("Team", Route::Team, &current),
            Space::with_width(Length::Fill),
            text(current.path()).size(12).color(Palette::TEXT_MUTED),
        ]
        .spacing(8)
        .align_y(Alignment::Center);

        let body = match &self.screen {
            Screen::Search => self.view_search(),
            Screen::Detail(detail) => view_detail(detail),
            Screen::Team { view, avatars } => view_team(view, avatars),
        };

        container(
            column![nav, Space::with_height(12), body]
                .padding(16)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .style(theme::frame)
        .into()
    }

    fn view_search(&self) -> Element<'_, Message> {
        let bar = search_bar::view(
            self.search.prompt(),
            self.search.is_loading(),
            Message::PromptChanged,
            Message::PromptSubmit,
        );

        let below: Element<'_, Message> = if self.search.is_loading() {
            centered_hint("Finding books...")
        } else if self.search.books().is_empty() {
            centered_hint("Describe a mood, a theme or a book you loved.")
        } else {
            let cards: Vec<Element<'_, Message>> = self
                .search
                .books()
                .iter()
                .enumerate()
                .map(|(i, book)| book_card::view(book, Message::BookSelected(i)))
                .collect();
            scrollable(column(cards).spacing(4))
                .height(Length::Fill)
                .into()
        };

        column![bar, Space::with_height(12), below].into()
    }
}

fn nav_button<'a>(label: &'a str, target: Route, current: &Route) -> Element<'a, Message> {
    let color = if &target == current {
        Palette::PRIMARY
    } else {
        Palette::TEXT_MUTED
    };
    button(text(label).size(14).color(color))
        .on_press(Message::NavigateTo(target))
        .padding(Padding::from([6.0, 12.0]))
        .style(theme::flat_button)
        .into()
}

fn centered_hint(hint: &str) -> Element<'_, Message> {
    container(text(hint).size(14).color(Palette::TEXT_MUTED))
        .width(Length::Fill)
        .center_x(Length::Fill)
        .into()
}

fn view_detail(detail: &DetailView) -> Element<'_, Message> {
    let back = button(text("← Back").size(14))
        .on_press(Message::Back)
        .style(theme::flat_button);

    let (Some(book), Some(states)) = (detail.book(), detail.stars()) else {
        return column![
            back,
            Space::with_height(16),
            centered_hint("Nothing to show here. Open a book from the search results."),
        ]
        .into();
    };

    let card = container(
        column![
            text(&book.title).size(26).color(Palette::TEXT),
            text(format!("by {}", book.author)).size(16).color(Palette::TEXT_MUTED),
            row![
                text(&book.genre).size(13).color(Palette::PRIMARY),
                text(book.year.to_string()).size(13).color(Palette::TEXT_MUTED),
            ]
            .spacing(12),
            book_card::star_row(book.rating, states, 18),
            Space::with_height(8),
            text(&book.description).size(15).color(Palette::TEXT),
        ]
        .spacing(6),
    )
    .padding(20)
    .width(Length::Fill)
    .style(theme::surface);

    column![back, Space::with_height(12), scrollable(card)].into()
}

fn view_team<'a>(view: &'a TeamView, avatars: &'a [Option<image::Handle>]) -> Element<'a, Message> {
    let cards: Vec<Element<'a, Message>> = view
        .members()
        .iter()
        .zip(avatars)
        .map(|(member, avatar)| {
            let picture: Element<'a, Message> = match avatar {
                Some(handle) => image(handle.clone()).width(64).height(64).into(),
                None => container(text(member.initial().to_string()).size(28).color(Palette::PRIMARY))
                    .width(64)
                    .height(64)
                    .center_x(64)
                    .center_y(64)
                    .into(),
            };

            container(
                row![
                    picture,
                    column![
                        text(member.name).size(16).color(Palette::TEXT),
                        text(member.role).size(13).color(Palette::TEXT_MUTED),
                    ]
                    .spacing(2),
                ]
                .spacing(16)
                .align_y(Alignment::Center),
            )
            .padding(12)
            .width(Length::Fill)
            .style(theme::surface)
            .into()
        })
        .collect();

    scrollable(column(cards).spacing(8)).height(Length::Fill).into()
}

async fn fetch_avatar(url: String) -> Result<Vec<u8>, String> {
    let response = reqwest::get(&url).await.map_err(|e| e.to_string())?;
    let response = response.error_for_status().map_err(|e| e.to_string())?;
    let bytes = response.bytes().await.map_err(|e| e.to_string())?;
    Ok(bytes.to_vec())
}
