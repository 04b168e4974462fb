use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config::CURSOR_RADIUS_PX;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

impl PointerPosition {
    /// Top-left corner of the disc so that it is centred on the pointer.
    pub fn follower_origin(self) -> (i32, i32) {
        (self.x - CURSOR_RADIUS_PX, self.y - CURSOR_RADIUS_PX)
    }
}

/// Tracks the pointer itself so mouse moves only re-render the disc.
#[function_component(CursorFollower)]
pub fn cursor_follower() -> Html {
    let position = use_state(PointerPosition::default);
    {
        let position = position.clone();
        use_event_with_window("mousemove", move |e: MouseEvent| {
            position.set(PointerPosition {
                x: e.client_x(),
                y: e.client_y(),
            });
        });
    }

    let (x, y) = position.follower_origin();
    html! {
        <div
            class="cursor-follower"
            style={format!("transform: translate({}px, {}px);", x, y)}
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disc_is_centred_on_pointer() {
        let position = PointerPosition { x: 300, y: 40 };
        assert_eq!(position.follower_origin(), (288, 28));
        assert_eq!(PointerPosition::default().follower_origin(), (-12, -12));
    }
}
