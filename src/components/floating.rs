use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FloatingElementProps {
    /// Phase offset of the loop, in seconds.
    #[prop_or_default]
    pub delay: f64,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(FloatingElement)]
pub fn floating_element(props: &FloatingElementProps) -> Html {
    html! {
        <div
            class={classes!("floating", props.class.clone())}
            style={format!("animation-delay: {}s;", props.delay)}
        >
            { for props.children.iter() }
        </div>
    }
}
