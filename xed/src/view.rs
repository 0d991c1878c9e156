use iced::widget::{
    Space, Stack, column, container, mouse_area, opaque, row, text,
};
use iced::{Element, Length, Theme, alignment, mouse};

use super::{APP_TITLE, App, AppEvent};
use crate::components::primitive::resize_grips;
use crate::shared::ui::theme::ThemeProps;
use crate::widgets::chrome::ChromeEvent;
use crate::widgets::chrome::view::action_bar;
use crate::widgets::sidebar::view::{resize_handle, sidebar_panel};
use crate::widgets::sidebar::{SidebarEvent, SidebarIntent};
use crate::widgets::status_bar::StatusBarEvent;
use crate::widgets::status_bar::view::status_bar;

const HEADER_SEPARATOR_HEIGHT: f32 = 1.0;
const SEPARATOR_ALPHA: f32 = 0.3;
const EDITOR_EMPTY_HINT: &str = "No file open";

/// Render the root application view.
pub(super) fn view(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let theme = app.theme_manager.current();
    let theme_props: ThemeProps<'_> = ThemeProps::new(theme);
    let is_resizing = app.widgets.sidebar.is_resizing();

    let shell = column![
        view_header(app, theme_props),
        view_body(app, theme_props),
        view_status_bar(app, theme_props),
    ]
    .width(Length::Fill)
    .height(Length::Fill);

    let shell = mouse_area(shell).on_move(|position| {
        AppEvent::Sidebar(SidebarEvent::Intent(SidebarIntent::CursorMoved {
            position,
        }))
    });

    let mut layers: Vec<Element<'_, AppEvent, Theme, iced::Renderer>> =
        vec![shell.into()];

    if is_resizing {
        // Keeps the resize cursor and swallows hover while dragging.
        layers.push(view_drag_capture());
    } else {
        layers.push(resize_grips::view().map(|event| match event {
            resize_grips::ResizeGripEvent::Resize(dir) => {
                AppEvent::ResizeWindow(dir)
            },
        }));
    }

    Stack::with_children(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Render the header: action bar + separator.
fn view_header<'a>(
    app: &'a App,
    theme_props: ThemeProps<'a>,
) -> Element<'a, AppEvent, Theme, iced::Renderer> {
    let action_bar = action_bar::view(action_bar::ActionBarProps {
        title: APP_TITLE,
        vm: app.widgets.chrome.vm(),
        theme: theme_props,
        fonts: &app.fonts,
    })
    .map(|intent| AppEvent::Chrome(ChromeEvent::Intent(intent)));

    column![action_bar, view_separator(theme_props)]
        .width(Length::Fill)
        .height(Length::Shrink)
        .into()
}

/// Render the sidebar with its handle next to the editor area.
fn view_body<'a>(
    app: &'a App,
    theme_props: ThemeProps<'a>,
) -> Element<'a, AppEvent, Theme, iced::Renderer> {
    let sidebar_vm = app.widgets.sidebar.vm();
    let editor = view_editor_area(app, theme_props);

    if !sidebar_vm.visible {
        return editor;
    }

    let panel = sidebar_panel::view(sidebar_panel::SidebarPanelProps {
        vm: sidebar_vm,
        theme: theme_props,
        fonts: &app.fonts,
    })
    .map(|intent| AppEvent::Sidebar(SidebarEvent::Intent(intent)));

    let handle = resize_handle::view(resize_handle::ResizeHandleProps {
        vm: sidebar_vm,
        theme: theme_props,
    })
    .map(|intent| AppEvent::Sidebar(SidebarEvent::Intent(intent)));

    row![panel, handle, editor]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_editor_area<'a>(
    app: &'a App,
    theme_props: ThemeProps<'a>,
) -> Element<'a, AppEvent, Theme, iced::Renderer> {
    let palette = theme_props.theme.iced_palette();
    let editor_font = &app.fonts.editor;

    let hint = text(EDITOR_EMPTY_HINT)
        .font(editor_font.font_type)
        .size(editor_font.size);

    container(hint)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(move |_| iced::widget::container::Style {
            background: Some(palette.background.into()),
            text_color: Some(palette.dim_white),
            ..Default::default()
        })
        .into()
}

fn view_status_bar<'a>(
    app: &'a App,
    theme_props: ThemeProps<'a>,
) -> Element<'a, AppEvent, Theme, iced::Renderer> {
    let status_bar = status_bar::view(status_bar::StatusBarProps {
        vm: app.widgets.status_bar.vm(),
        theme: theme_props,
        fonts: &app.fonts,
    })
    .map(|intent| AppEvent::StatusBar(StatusBarEvent::Intent(intent)));

    column![view_separator(theme_props), status_bar]
        .width(Length::Fill)
        .height(Length::Shrink)
        .into()
}

fn view_separator<'a>(
    theme_props: ThemeProps<'a>,
) -> Element<'a, AppEvent, Theme, iced::Renderer> {
    let palette = theme_props.theme.iced_palette();

    container(Space::new())
        .width(Length::Fill)
        .height(Length::Fixed(HEADER_SEPARATOR_HEIGHT))
        .style(move |_| {
            let mut background = palette.dim_white;
            background.a = SEPARATOR_ALPHA;
            iced::widget::container::Style {
                background: Some(background.into()),
                ..Default::default()
            }
        })
        .into()
}

fn view_drag_capture<'a>() -> Element<'a, AppEvent, Theme, iced::Renderer> {
    opaque(
        mouse_area(Space::new().width(Length::Fill).height(Length::Fill))
            .interaction(mouse::Interaction::ResizingHorizontally),
    )
}
