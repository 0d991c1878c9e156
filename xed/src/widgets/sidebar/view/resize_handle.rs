use iced::widget::{Space, container, mouse_area};
use iced::{Element, Length, mouse};

use super::super::event::SidebarIntent;
use super::super::model::{SIDEBAR_HANDLE_WIDTH, SidebarViewModel};
use crate::shared::ui::theme::ThemeProps;

const HANDLE_IDLE_ALPHA: f32 = 0.3;

/// Props for rendering the sidebar resize handle.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ResizeHandleProps<'a> {
    pub(crate) vm: SidebarViewModel,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the draggable strip on the sidebar's right edge.
pub(crate) fn view<'a>(
    props: ResizeHandleProps<'a>,
) -> Element<'a, SidebarIntent> {
    let palette = props.theme.theme.iced_palette();
    let color = if props.vm.is_resizing {
        palette.blue
    } else {
        let mut color = palette.dim_white;
        color.a = HANDLE_IDLE_ALPHA;
        color
    };

    let strip =
        container(Space::new().width(Length::Fill).height(Length::Fill))
            .width(Length::Fixed(SIDEBAR_HANDLE_WIDTH))
            .height(Length::Fill)
            .style(move |_| iced::widget::container::Style {
                background: Some(color.into()),
                ..Default::default()
            });

    mouse_area(strip)
        .on_press(SidebarIntent::ResizePressed)
        .interaction(mouse::Interaction::ResizingHorizontally)
        .into()
}
