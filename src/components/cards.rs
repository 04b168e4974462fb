use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FeatureCardProps {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[function_component(FeatureCard)]
pub fn feature_card(props: &FeatureCardProps) -> Html {
    html! {
        <div class="feature-card">
            <div class="feature-icon">{props.icon}</div>
            <h3>{props.title}</h3>
            <p>{props.description}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct InfoBadgeProps {
    pub icon: &'static str,
    pub text: AttrValue,
    #[prop_or_default]
    pub highlight: bool,
}

#[function_component(InfoBadge)]
pub fn info_badge(props: &InfoBadgeProps) -> Html {
    html! {
        <div class={classes!("info-badge", props.highlight.then(|| "highlight"))}>
            <span class="info-badge-icon">{props.icon}</span>
            <span class="info-badge-text">{props.text.clone()}</span>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct LotusIconProps {
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(LotusIcon)]
pub fn lotus_icon(props: &LotusIconProps) -> Html {
    html! {
        <svg
            viewBox="0 0 24 24"
            fill="currentColor"
            class={props.class.clone()}
            xmlns="http://www.w3.org/2000/svg"
        >
            <path d="M12 2C12 2 8 6 8 10C8 12.21 9.79 14 12 14C14.21 14 16 12.21 16 10C16 6 12 2 12 2Z" />
            <path d="M12 14C12 14 16 10 20 10C22.21 10 24 11.79 24 14C24 16.21 22.21 18 20 18C16 18 12 14 12 14Z" />
            <path d="M12 14C12 14 8 18 4 18C1.79 18 0 16.21 0 14C0 11.79 1.79 10 4 10C8 10 12 14 12 14Z" />
            <path d="M12 14C12 14 6 16 6 20C6 22.21 7.79 24 10 24C12.21 24 14 22.21 14 20C14 16 12 14 12 14Z" />
            <path d="M12 14C12 14 18 16 18 20C18 22.21 16.21 24 14 24C11.79 24 10 22.21 10 20C10 16 12 14 12 14Z" />
            <circle cx="12" cy="14" r="2" />
        </svg>
    }
}
