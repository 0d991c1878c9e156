#[path = "subscription.rs"]
mod subscription;
#[path = "update.rs"]
mod update;
#[path = "view.rs"]
mod view;

use iced::window::Direction;
use iced::{Element, Subscription, Task, Theme};

use crate::settings;
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::theme::ThemeManager;
use crate::state::UiState;
use crate::widgets::chrome::{ChromeEvent, ChromeWidget};
use crate::widgets::sidebar::{SidebarEvent, SidebarWidget};
use crate::widgets::status_bar::{StatusBarEvent, StatusBarWidget};

pub(crate) const MIN_WINDOW_WIDTH: f32 = 800.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 600.0;
pub(crate) const APP_TITLE: &str = "Xed";

/// App-wide events that drive the root update loop.
#[derive(Debug, Clone)]
pub(crate) enum AppEvent {
    IcedReady,
    // Chrome widget
    Chrome(ChromeEvent),
    // Sidebar widget
    Sidebar(SidebarEvent),
    // Status bar widget
    StatusBar(StatusBarEvent),
    // Direct operations
    ResizeWindow(Direction),
}

/// Container for all widget instances.
pub(crate) struct Widgets {
    pub(crate) chrome: ChromeWidget,
    pub(crate) sidebar: SidebarWidget,
    pub(crate) status_bar: StatusBarWidget,
}

/// Root application state.
pub(crate) struct App {
    pub(crate) theme_manager: ThemeManager,
    pub(crate) fonts: FontsConfig,
    pub(crate) ui: UiState,
    pub(crate) widgets: Widgets,
}

impl App {
    /// Initialize the application and return the first task.
    pub(crate) fn new() -> (Self, Task<AppEvent>) {
        let settings = settings::load_initial_settings();

        let widgets = Widgets {
            chrome: ChromeWidget::new(),
            sidebar: SidebarWidget::new(settings.sidebar),
            status_bar: StatusBarWidget::new(),
        };

        let app = App {
            theme_manager: ThemeManager::new(),
            fonts: FontsConfig::default(),
            ui: UiState::default(),
            widgets,
        };

        (app, Task::done(AppEvent::IcedReady))
    }

    /// Return the window title.
    pub(crate) fn title(&self) -> String {
        String::from(APP_TITLE)
    }

    /// Return the current iced theme.
    pub(crate) fn theme(&self) -> Theme {
        self.theme_manager.iced_theme()
    }

    /// Return active subscriptions.
    pub(crate) fn subscription(&self) -> Subscription<AppEvent> {
        subscription::subscription(self)
    }

    /// Handle an incoming event.
    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        update::update(self, event)
    }

    /// Render the root view.
    pub(crate) fn view(&self) -> Element<'_, AppEvent, Theme, iced::Renderer> {
        view::view(self)
    }
}
