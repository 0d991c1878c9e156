use iced::widget::{column, container, text};
use iced::{Element, Length};

use super::super::event::SidebarIntent;
use super::super::model::SidebarViewModel;
use crate::shared::ui::fonts::FontsConfig;
use crate::shared::ui::theme::ThemeProps;

const PANEL_PADDING: f32 = 10.0;
const PANEL_SPACING: f32 = 8.0;
const PANEL_TITLE_SCALE: f32 = 0.8;
const PANEL_TITLE: &str = "EXPLORER";
const PANEL_EMPTY_HINT: &str = "No folder opened";

/// Props for rendering the tree sidebar panel.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SidebarPanelProps<'a> {
    pub(crate) vm: SidebarViewModel,
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) fonts: &'a FontsConfig,
}

/// Render the fixed-width tree panel.
pub(crate) fn view<'a>(
    props: SidebarPanelProps<'a>,
) -> Element<'a, SidebarIntent> {
    let palette = props.theme.theme.iced_palette().clone();
    let ui_size = props.fonts.ui.size;

    let content = column![
        text(PANEL_TITLE).size(ui_size * PANEL_TITLE_SCALE),
        text(PANEL_EMPTY_HINT).size(ui_size),
    ]
    .spacing(PANEL_SPACING);

    container(content)
        .width(Length::Fixed(props.vm.width))
        .height(Length::Fill)
        .padding(PANEL_PADDING)
        .style(move |_| iced::widget::container::Style {
            background: Some(palette.dim_black.into()),
            text_color: Some(palette.dim_foreground),
            ..Default::default()
        })
        .into()
}
