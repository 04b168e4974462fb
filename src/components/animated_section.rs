use yew::prelude::*;

use crate::config::REVEAL_THRESHOLD;
use crate::state::reveal::RevealState;
use crate::viewport::observe_once;

#[derive(Properties, PartialEq)]
pub struct AnimatedSectionProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Fades and lifts its children into place the first time they scroll into
/// view. Never hides them again.
#[function_component(AnimatedSection)]
pub fn animated_section(props: &AnimatedSectionProps) -> Html {
    let node = use_node_ref();
    let reveal = use_state(RevealState::default);

    {
        let node = node.clone();
        let reveal = reveal.clone();
        use_effect_with_deps(
            move |_| {
                let handle = node.cast::<web_sys::Element>().and_then(|element| {
                    observe_once(&element, REVEAL_THRESHOLD, move || {
                        let mut next = *reveal;
                        if next.observe(true) {
                            reveal.set(next);
                        }
                    })
                });
                // dropping the handle disconnects the observer
                move || drop(handle)
            },
            (),
        );
    }

    html! {
        <div ref={node} class={classes!(reveal.class(), props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}
