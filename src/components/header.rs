use yew::prelude::*;

use crate::config;
use crate::state::navigation::SectionId;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub active: SectionId,
    pub drawer_open: bool,
    pub on_navigate: Callback<&'static str>,
    pub on_toggle_drawer: Callback<()>,
    pub on_get_tickets: Callback<()>,
}

/// Fixed header with the desktop nav and the collapsible mobile drawer.
#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let HeaderProps {
        active,
        drawer_open,
        on_navigate,
        on_toggle_drawer,
        on_get_tickets,
    } = props;

    let nav_link = |section: SectionId, class: &'static str| {
        let on_navigate = on_navigate.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(section.id());
        });
        html! {
            <button
                key={section.id()}
                class={classes!(class, (*active == section).then(|| "active"))}
                {onclick}
            >
                {section.label()}
            </button>
        }
    };

    let get_tickets = {
        let on_get_tickets = on_get_tickets.clone();
        Callback::from(move |_: MouseEvent| on_get_tickets.emit(()))
    };

    let toggle_drawer = {
        let on_toggle_drawer = on_toggle_drawer.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle_drawer.emit(());
        })
    };

    html! {
        <header class="site-header">
            <div class="header-inner">
                <div class="header-brand">
                    <img src={config::logo_url()} alt={config::EVENT_NAME} />
                    <div class="header-titles">
                        <h1>{config::EVENT_NAME}</h1>
                        <p>{format!("{} • {}", config::EVENT_DATE_LABEL, config::EVENT_CITY)}</p>
                    </div>
                </div>

                <nav class="desktop-nav">
                    { for SectionId::ALL.into_iter().map(|section| nav_link(section, "nav-link")) }
                    <button class="cta-pill" onclick={get_tickets.clone()}>{"Get Tickets"}</button>
                </nav>

                <button class="burger-menu" aria-label="Menu" onclick={toggle_drawer}>
                    { if *drawer_open { "✕" } else { "☰" } }
                </button>
            </div>

            {
                if *drawer_open {
                    html! {
                        <nav class="mobile-drawer">
                            { for SectionId::ALL.into_iter().map(|section| nav_link(section, "drawer-link")) }
                            <button class="cta-pill wide" onclick={get_tickets}>{"Get Tickets"}</button>
                        </nav>
                    }
                } else {
                    html! {}
                }
            }
        </header>
    }
}
