use iced::alignment::{Horizontal, Vertical};
use iced::widget::{Space, Stack, container, mouse_area};
use iced::window::Direction;
use iced::{Element, Length, mouse};

const RESIZE_EDGE_THICKNESS: f32 = 6.0;
const RESIZE_CORNER_THICKNESS: f32 = 12.0;

/// Events emitted by the window resize grips.
#[derive(Debug, Clone)]
pub(crate) enum ResizeGripEvent {
    Resize(Direction),
}

/// Render the eight window-edge grips of the undecorated window.
pub(crate) fn view() -> Element<'static, ResizeGripEvent> {
    let edge = RESIZE_EDGE_THICKNESS;
    let corner = RESIZE_CORNER_THICKNESS;

    let grips = [
        (Direction::North, Length::Fill, edge.into(), Horizontal::Left, Vertical::Top),
        (Direction::South, Length::Fill, edge.into(), Horizontal::Left, Vertical::Bottom),
        (Direction::East, edge.into(), Length::Fill, Horizontal::Right, Vertical::Top),
        (Direction::West, edge.into(), Length::Fill, Horizontal::Left, Vertical::Top),
        (Direction::NorthWest, corner.into(), corner.into(), Horizontal::Left, Vertical::Top),
        (Direction::NorthEast, corner.into(), corner.into(), Horizontal::Right, Vertical::Top),
        (Direction::SouthWest, corner.into(), corner.into(), Horizontal::Left, Vertical::Bottom),
        (Direction::SouthEast, corner.into(), corner.into(), Horizontal::Right, Vertical::Bottom),
    ];

    grips
        .into_iter()
        .fold(Stack::new(), |stack, (direction, width, height, x, y)| {
            let grip = mouse_area(Space::new().width(width).height(height))
                .on_press(ResizeGripEvent::Resize(direction))
                .interaction(interaction_for(direction));

            stack.push(
                container(grip)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .align_x(x)
                    .align_y(y),
            )
        })
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn interaction_for(direction: Direction) -> mouse::Interaction {
    match direction {
        Direction::North | Direction::South => {
            mouse::Interaction::ResizingVertically
        },
        Direction::East | Direction::West => {
            mouse::Interaction::ResizingHorizontally
        },
        Direction::NorthWest | Direction::SouthEast => {
            mouse::Interaction::ResizingDiagonallyDown
        },
        Direction::NorthEast | Direction::SouthWest => {
            mouse::Interaction::ResizingDiagonallyUp
        },
    }
}
