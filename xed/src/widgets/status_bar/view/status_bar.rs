use iced::widget::{Row, Space, button, container, row, svg, text, tooltip};
use iced::{Background, Element, Length, alignment};

use super::super::event::StatusBarIntent;
use super::super::model::{
    STATUS_BAR_HEIGHT, StatusBarViewModel, StatusItem, TreeToggleViewModel,
};
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::icons::TREE_VIEW_TOGGLE;
use crate::shared::ui::theme::{IcedColorPalette, ThemeProps};

const STATUS_TEXT_SCALE: f32 = 0.85;
const STATUS_ITEM_SPACING: f32 = 4.0;
const STATUS_REGION_SPACING: f32 = 12.0;
const STATUS_HORIZONTAL_PADDING: f32 = 8.0;
const TREE_TOGGLE_SIZE: f32 = 20.0;
const TREE_TOGGLE_ICON_SIZE: f32 = 14.0;
const TREE_TOGGLE_ACTIVE_ALPHA: f32 = 0.35;
const TREE_TOGGLE_TOOLTIP: &str = "Toggle Tree View";

/// Props for rendering the status bar.
#[derive(Debug, Clone, Copy)]
pub(crate) struct StatusBarProps<'a> {
    pub(crate) vm: StatusBarViewModel<'a>,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the status strip: tree toggle and left items, then right items.
pub(crate) fn view<'a>(
    props: StatusBarProps<'a>,
) -> Element<'a, StatusBarIntent> {
    let palette = props.theme.theme.iced_palette().clone();
    let text_size = props.fonts.ui.size * STATUS_TEXT_SCALE;

    let mut left = Row::new()
        .spacing(STATUS_REGION_SPACING)
        .align_y(alignment::Vertical::Center);
    if let Some(toggle) = props.vm.tree_toggle {
        left = left.push(tree_toggle(toggle, &palette));
    }
    for item in props.vm.left {
        left = left.push(status_item(item, text_size));
    }

    let right = props.vm.right.iter().fold(
        Row::new()
            .spacing(STATUS_REGION_SPACING)
            .align_y(alignment::Vertical::Center),
        |region, item| region.push(status_item(item, text_size)),
    );

    let content = row![left, Space::new().width(Length::Fill), right]
        .align_y(alignment::Vertical::Center)
        .width(Length::Fill)
        .height(Length::Fill);

    container(content)
        .width(Length::Fill)
        .height(Length::Fixed(STATUS_BAR_HEIGHT))
        .padding([0.0, STATUS_HORIZONTAL_PADDING])
        .style(move |_| iced::widget::container::Style {
            background: Some(palette.dim_black.into()),
            text_color: Some(palette.dim_foreground),
            ..Default::default()
        })
        .into()
}

fn tree_toggle<'a>(
    toggle: TreeToggleViewModel,
    palette: &IcedColorPalette,
) -> Element<'a, StatusBarIntent> {
    let active = toggle.active;
    let active_color = palette.blue;
    let base_color = palette.dim_foreground;
    let hover_color = palette.foreground;
    let mut active_background = palette.dim_blue;
    active_background.a = TREE_TOGGLE_ACTIVE_ALPHA;

    let icon = svg::Svg::new(svg::Handle::from_memory(TREE_VIEW_TOGGLE))
        .width(Length::Fixed(TREE_TOGGLE_ICON_SIZE))
        .height(Length::Fixed(TREE_TOGGLE_ICON_SIZE))
        .style(move |_, status| {
            let color = if active {
                active_color
            } else if status == svg::Status::Hovered {
                hover_color
            } else {
                base_color
            };

            svg::Style { color: Some(color) }
        });

    let toggle_button = button(
        container(icon)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center),
    )
    .on_press(StatusBarIntent::ToggleTreeView)
    .padding(0)
    .width(Length::Fixed(TREE_TOGGLE_SIZE))
    .height(Length::Fixed(TREE_TOGGLE_SIZE))
    .style(move |_, _| iced::widget::button::Style {
        background: active.then_some(Background::Color(active_background)),
        ..Default::default()
    });

    tooltip(
        toggle_button,
        text(TREE_TOGGLE_TOOLTIP),
        tooltip::Position::Top,
    )
    .into()
}

fn status_item<'a>(
    item: &'a StatusItem,
    text_size: f32,
) -> Element<'a, StatusBarIntent> {
    let mut content = Row::new()
        .spacing(STATUS_ITEM_SPACING)
        .align_y(alignment::Vertical::Center);
    if let Some(icon) = item.icon() {
        content = content.push(text(icon).size(text_size));
    }

    content.push(text(item.label()).size(text_size)).into()
}
