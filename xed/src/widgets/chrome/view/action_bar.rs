use iced::widget::{MouseArea, Space, Stack, container, row, svg, text};
use iced::{Element, Length, alignment};

use super::super::event::ChromeIntent;
use super::super::model::ChromeViewModel;
use crate::components::primitive::icon_button::{
    IconButtonEvent, IconButtonProps, IconButtonTone,
    view as icon_button_view,
};
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::icons::{
    LOGO_SMALL, WINDOW_CLOSE, WINDOW_MAXIMIZE, WINDOW_MINIMIZE,
};
use crate::shared::ui::theme::ThemeProps;

pub(crate) const ACTION_BAR_HEIGHT: f32 = 30.0;
const ACTION_BAR_TITLE_SCALE: f32 = 0.9;
const ACTION_BAR_CONTROL_BUTTON_SIZE: f32 = 24.0;
const ACTION_BAR_CONTROL_ICON_SIZE: f32 = 16.0;
const ACTION_BAR_LOGO_ICON_SIZE: f32 = 18.0;
const ACTION_BAR_HORIZONTAL_PADDING: f32 = 12.0;
const ACTION_BAR_RIGHT_PADDING: f32 = 8.0;
const ACTION_BAR_CONTROLS_SPACING: f32 = 6.0;

/// Props for rendering the action bar.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ActionBarProps<'a> {
    pub(crate) title: &'a str,
    pub(crate) vm: ChromeViewModel,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the draggable window header with the window controls.
pub(crate) fn view<'a>(
    props: ActionBarProps<'a>,
) -> Element<'a, ChromeIntent> {
    let title_font_size = props.fonts.ui.size * ACTION_BAR_TITLE_SCALE;
    let palette = props.theme.theme.iced_palette();
    let dim_foreground = palette.dim_foreground;
    let dim_black = palette.dim_black;
    let enabled = props.vm.controls_enabled;

    let logo = svg::Svg::new(svg::Handle::from_memory(LOGO_SMALL))
        .width(Length::Fixed(ACTION_BAR_LOGO_ICON_SIZE))
        .height(Length::Fixed(ACTION_BAR_LOGO_ICON_SIZE))
        .style(move |_, _| svg::Style {
            color: Some(dim_foreground),
        });

    let logo_container = container(logo)
        .width(Length::Shrink)
        .height(Length::Fill)
        .align_y(alignment::Vertical::Center)
        .padding([0.0, ACTION_BAR_HORIZONTAL_PADDING]);

    let center_zone = container(
        text(props.title)
            .size(title_font_size)
            .font(props.fonts.ui.font_type),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .padding([0.0, ACTION_BAR_HORIZONTAL_PADDING])
    .style(move |_| iced::widget::container::Style {
        text_color: Some(dim_foreground),
        ..Default::default()
    });

    let controls_row = row![
        icon_button(
            WINDOW_MINIMIZE,
            IconButtonTone::Neutral,
            enabled,
            props.theme,
        )
        .map(|_| ChromeIntent::MinimizeWindow),
        icon_button(
            WINDOW_MAXIMIZE,
            IconButtonTone::Neutral,
            enabled,
            props.theme,
        )
        .map(|_| ChromeIntent::ToggleMaximize),
        icon_button(
            WINDOW_CLOSE,
            IconButtonTone::Destructive,
            enabled,
            props.theme,
        )
        .map(|_| ChromeIntent::CloseWindow),
    ]
    .spacing(ACTION_BAR_CONTROLS_SPACING)
    .align_y(alignment::Vertical::Center);

    let controls_container = container(controls_row)
        .width(Length::Shrink)
        .height(Length::Fill)
        .align_y(alignment::Vertical::Center)
        .padding([0.0, ACTION_BAR_RIGHT_PADDING]);

    let drag_surface = MouseArea::new(
        container(Space::new().width(Length::Fill).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill),
    );
    let drag_surface = if enabled {
        drag_surface
            .on_press(ChromeIntent::StartWindowDrag)
            .on_double_click(ChromeIntent::ToggleMaximize)
    } else {
        drag_surface
    };

    let base_row = row![
        logo_container,
        Space::new().width(Length::Fill),
        controls_container
    ]
    .align_y(alignment::Vertical::Center)
    .width(Length::Fill)
    .height(Length::Fill);

    // The title sits between the drag surface and the controls so that
    // clicks on it still reach the drag surface.
    let content = Stack::new()
        .push(drag_surface)
        .push(center_zone)
        .push(base_row);

    container(content)
        .width(Length::Fill)
        .height(Length::Fixed(ACTION_BAR_HEIGHT))
        .style(move |_| iced::widget::container::Style {
            background: Some(dim_black.into()),
            ..Default::default()
        })
        .into()
}

fn icon_button<'a>(
    icon: &'static [u8],
    tone: IconButtonTone,
    enabled: bool,
    theme: ThemeProps<'a>,
) -> Element<'a, IconButtonEvent> {
    icon_button_view(IconButtonProps {
        icon,
        theme,
        size: ACTION_BAR_CONTROL_BUTTON_SIZE,
        icon_size: ACTION_BAR_CONTROL_ICON_SIZE,
        tone,
        enabled,
    })
}
