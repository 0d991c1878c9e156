use iced::widget::{button, container, svg};
use iced::{Background, Color, Element, Length, alignment};

use crate::shared::ui::theme::{IcedColorPalette, ThemeProps};

const DISABLED_ICON_ALPHA: f32 = 0.4;
const NEUTRAL_HOVER_ALPHA: f32 = 0.35;

/// UI events emitted by an icon button.
#[derive(Debug, Clone)]
pub(crate) enum IconButtonEvent {
    Pressed,
}

/// Hover treatment of an icon button.
#[derive(Debug, Clone, Copy)]
pub(crate) enum IconButtonTone {
    Neutral,
    /// Close-style control, highlighted red on hover.
    Destructive,
}

/// Props for rendering an icon button.
#[derive(Debug, Clone, Copy)]
pub(crate) struct IconButtonProps<'a> {
    pub(crate) icon: &'static [u8],
    pub(crate) theme: ThemeProps<'a>,
    pub(crate) size: f32,
    pub(crate) icon_size: f32,
    pub(crate) tone: IconButtonTone,
    pub(crate) enabled: bool,
}

/// Resolved colors for one tone.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ToneColors {
    icon: Color,
    hover_icon: Color,
    hover_background: Color,
}

/// Render a square svg button; disabled buttons are dimmed and inert.
pub(crate) fn view<'a>(
    props: IconButtonProps<'a>,
) -> Element<'a, IconButtonEvent> {
    let colors = resolve_tone_colors(
        props.tone,
        props.theme.theme.iced_palette(),
    );
    let enabled = props.enabled;

    let icon = svg::Svg::new(svg::Handle::from_memory(props.icon))
        .width(Length::Fixed(props.icon_size))
        .height(Length::Fixed(props.icon_size))
        .style(move |_, status| {
            let color = if !enabled {
                Color {
                    a: DISABLED_ICON_ALPHA,
                    ..colors.icon
                }
            } else if status == svg::Status::Hovered {
                colors.hover_icon
            } else {
                colors.icon
            };

            svg::Style { color: Some(color) }
        });

    let icon_container = container(icon)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    button(icon_container)
        .on_press_maybe(enabled.then_some(IconButtonEvent::Pressed))
        .padding(0)
        .width(Length::Fixed(props.size))
        .height(Length::Fixed(props.size))
        .style(move |_, status| {
            let hovered = matches!(
                status,
                button::Status::Hovered | button::Status::Pressed
            );
            button::Style {
                background: hovered
                    .then_some(Background::Color(colors.hover_background)),
                ..button::Style::default()
            }
        })
        .into()
}

fn resolve_tone_colors(
    tone: IconButtonTone,
    palette: &IcedColorPalette,
) -> ToneColors {
    match tone {
        IconButtonTone::Neutral => ToneColors {
            icon: palette.dim_foreground,
            hover_icon: palette.foreground,
            hover_background: Color {
                a: NEUTRAL_HOVER_ALPHA,
                ..palette.dim_blue
            },
        },
        IconButtonTone::Destructive => ToneColors {
            icon: palette.dim_foreground,
            hover_icon: palette.foreground,
            hover_background: palette.red,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::{IconButtonTone, resolve_tone_colors};
    use crate::shared::ui::theme::{ColorPalette, IcedColorPalette};

    #[test]
    fn given_destructive_tone_when_resolved_then_hover_background_is_red() {
        let palette = IcedColorPalette::from(&ColorPalette::default());

        let colors =
            resolve_tone_colors(IconButtonTone::Destructive, &palette);

        assert_eq!(colors.hover_background, palette.red);
        assert_eq!(colors.icon, palette.dim_foreground);
    }

    #[test]
    fn given_neutral_tone_when_resolved_then_hover_background_is_translucent()
    {
        let palette = IcedColorPalette::from(&ColorPalette::default());

        let colors = resolve_tone_colors(IconButtonTone::Neutral, &palette);

        assert!(colors.hover_background.a < 1.0);
        assert_eq!(colors.hover_icon, palette.foreground);
    }
}
