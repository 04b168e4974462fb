use gloo_timers::callback::Timeout;
use log::{debug, info};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::components::cursor_follower::CursorFollower;
use crate::components::header::Header;
use crate::components::ticket_modal::TicketModal;
use crate::pages::sections::{
    About, Experience, Footer, Hero, Sponsorship, SupportingPartners, Tickets, Vendors,
};
use crate::state::modal::{ModalAction, ModalState, OverlayClick};
use crate::state::navigation::{NavAction, NavigationState};
use crate::viewport::{self, DomSections};

/// The whole festival page. Owns the navigation and modal state and the
/// window listeners that feed them.
#[function_component(Festival)]
pub fn festival() -> Html {
    let nav = use_reducer(NavigationState::default);
    let modal = use_reducer(ModalState::default);
    // Dropping a pending Timeout cancels it, so a newer navigation or an
    // unmount wins over an older scroll.
    let pending_scroll = use_mut_ref(|| None::<Timeout>);

    {
        let nav = nav.clone();
        use_effect_with_deps(
            move |_| {
                let measure = move || {
                    if let Some(y) = viewport::scroll_y() {
                        nav.dispatch(NavAction::scrolled(y, &DomSections));
                    }
                };
                // Pick up the position if the page was restored mid-scroll
                measure();
                let on_scroll = Closure::<dyn Fn()>::new(measure);

                let window = web_sys::window();
                if let Some(window) = &window {
                    if window
                        .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())
                        .is_err()
                    {
                        log::warn!("could not subscribe to scroll events");
                    }
                }
                info!("festival page mounted");

                move || {
                    if let Some(window) = window {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            on_scroll.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let navigate = {
        let nav = nav.clone();
        let pending_scroll = pending_scroll.clone();
        Callback::from(move |id: &'static str| {
            // Validate against a copy; the reducer applies the same drawer close
            let mut next = (*nav).clone();
            match next.plan_navigation(id, &DomSections) {
                Ok(plan) => {
                    nav.dispatch(NavAction::CloseDrawer);
                    debug!("scrolling to {} in {}ms", plan.target, plan.delay_ms);
                    let timeout = Timeout::new(plan.delay_ms, move || {
                        DomSections.scroll_into_view(plan.target);
                    });
                    *pending_scroll.borrow_mut() = Some(timeout);
                }
                Err(err) => debug!("navigation skipped: {}", err),
            }
        })
    };

    let toggle_drawer = {
        let nav = nav.clone();
        Callback::from(move |_: ()| nav.dispatch(NavAction::ToggleDrawer))
    };

    let open_ticket_modal = {
        let modal = modal.clone();
        Callback::from(move |_: ()| {
            info!("opening ticket modal");
            modal.dispatch(ModalAction::Open);
        })
    };

    let close_ticket_modal = {
        let modal = modal.clone();
        Callback::from(move |_: ()| modal.dispatch(ModalAction::Close))
    };

    let overlay_click = {
        let modal = modal.clone();
        Callback::from(move |target: OverlayClick| modal.dispatch(ModalAction::Click(target)))
    };

    html! {
        <div class="festival-page">
            <style>{ PAGE_STYLES }</style>

            <TicketModal
                is_open={modal.is_open}
                on_click={overlay_click}
                on_close={close_ticket_modal}
            />

            <CursorFollower />

            <Header
                active={nav.active}
                drawer_open={nav.drawer_open}
                on_navigate={navigate}
                on_toggle_drawer={toggle_drawer}
                on_get_tickets={open_ticket_modal.clone()}
            />

            <Hero on_buy_tickets={open_ticket_modal.clone()} />
            <Experience />
            <Tickets on_buy_tickets={open_ticket_modal} />
            <Vendors />
            <Sponsorship />
            <About />
            <SupportingPartners />
            <Footer />
        </div>
    }
}

const PAGE_STYLES: &str = r#"
    .festival-page {
        min-height: 100vh;
        background: #fff;
        overflow-x: hidden;
        font-family: 'Inter', system-ui, sans-serif;
        color: #111827;
    }
    .container { max-width: 1200px; margin: 0 auto; padding: 0 1rem; }
    .container.narrow { max-width: 900px; }
    .container.center { text-align: center; }
    .container.split {
        display: grid;
        grid-template-columns: 1fr;
        gap: 3rem;
        align-items: center;
    }
    @media (min-width: 1024px) {
        .container.split { grid-template-columns: 1fr 1fr; }
    }
    .gradient-text {
        background: linear-gradient(90deg, #f97316, #ec4899);
        -webkit-background-clip: text;
        background-clip: text;
        color: transparent;
    }

    /* reveal */
    .reveal {
        opacity: 0;
        transform: translateY(30px);
        transition: opacity 0.6s ease-out, transform 0.6s ease-out;
    }
    .reveal.revealed {
        opacity: 1;
        transform: none;
    }

    /* floating decorations */
    @keyframes float {
        0%   { transform: translateY(0) rotate(0deg) scale(1); }
        33%  { transform: translateY(-13px) rotate(5deg) scale(1.07); }
        50%  { transform: translateY(-20px) rotate(0deg) scale(1.1); }
        66%  { transform: translateY(-13px) rotate(-5deg) scale(1.07); }
        100% { transform: translateY(0) rotate(0deg) scale(1); }
    }
    .floating {
        position: absolute;
        font-size: 2rem;
        opacity: 0.3;
        animation: float 6s ease-in-out infinite;
        animation-fill-mode: backwards;
    }
    .float-crown { top: 5rem; left: 2.5rem; }
    .float-star { top: 8rem; right: 5rem; }
    .float-sparkles { bottom: 8rem; left: 5rem; }
    .float-lotus { top: 50%; right: 2.5rem; color: #f87171; }
    .float-globe { bottom: 5rem; right: 8rem; }
    .lotus { width: 2rem; height: 2rem; }
    .lotus.small { width: 1.25rem; height: 1.25rem; color: #f97316; }

    /* cursor */
    .cursor-follower {
        position: fixed;
        top: 0;
        left: 0;
        width: 24px;
        height: 24px;
        border-radius: 9999px;
        background: linear-gradient(90deg, #f97316, #ec4899);
        pointer-events: none;
        z-index: 50;
        mix-blend-mode: difference;
        transition: transform 0.08s ease-out;
    }

    /* header */
    .site-header {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        z-index: 40;
        background: rgba(255, 255, 255, 0.95);
        backdrop-filter: blur(12px);
        border-bottom: 1px solid #e5e7eb;
        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
    }
    .header-inner {
        max-width: 1200px;
        margin: 0 auto;
        padding: 1rem;
        display: flex;
        align-items: center;
        justify-content: space-between;
    }
    .header-brand { display: flex; align-items: center; gap: 0.75rem; }
    .header-brand img { height: 4rem; width: auto; }
    .header-titles h1 { font-size: 1.25rem; font-weight: 700; margin: 0; }
    .header-titles p { font-size: 0.875rem; color: #4b5563; margin: 0; }
    .desktop-nav { display: none; align-items: center; gap: 2rem; }
    .nav-link, .drawer-link {
        background: none;
        border: none;
        font-weight: 500;
        color: #374151;
        cursor: pointer;
        transition: color 0.2s;
    }
    .nav-link:hover, .drawer-link:hover, .nav-link.active { color: #f97316; }
    .burger-menu {
        background: none;
        border: none;
        font-size: 1.5rem;
        color: #374151;
        cursor: pointer;
    }
    .mobile-drawer {
        display: flex;
        flex-direction: column;
        gap: 1rem;
        padding: 1rem;
        border-top: 1px solid #e5e7eb;
        animation: drawer-open 0.2s ease-out;
    }
    .drawer-link { text-align: left; }
    @keyframes drawer-open {
        from { opacity: 0; max-height: 0; }
        to { opacity: 1; max-height: 400px; }
    }
    @media (min-width: 640px) {
        .header-titles { display: block; }
    }
    @media (max-width: 639px) {
        .header-titles { display: none; }
    }
    @media (min-width: 1024px) {
        .desktop-nav { display: flex; }
        .burger-menu, .mobile-drawer { display: none; }
    }
    .cta-pill {
        background: linear-gradient(90deg, #f97316, #ec4899);
        color: #fff;
        border: none;
        padding: 0.5rem 1.5rem;
        border-radius: 9999px;
        font-weight: 600;
        cursor: pointer;
        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
        transition: transform 0.2s;
    }
    .cta-pill:hover { transform: scale(1.05); }
    .cta-pill.wide { padding: 0.75rem 1.5rem; }

    /* hero */
    .hero {
        position: relative;
        min-height: 100vh;
        display: flex;
        align-items: center;
        justify-content: center;
        overflow: hidden;
        padding-top: 8rem;
        background-size: cover;
        background-position: center;
    }
    .hero-overlay {
        position: absolute;
        inset: 0;
        background: linear-gradient(180deg, rgba(0,0,0,0.7), rgba(0,0,0,0.5), rgba(0,0,0,0.8));
    }
    .hero-floaters { position: absolute; inset: 0; pointer-events: none; }
    .hero-content {
        position: relative;
        z-index: 20;
        text-align: center;
        padding: 0 1.5rem;
        max-width: 64rem;
        color: #fff;
    }
    .hero-announcement {
        display: inline-block;
        padding: 0.75rem 1.5rem;
        border-radius: 9999px;
        background: rgba(0, 0, 0, 0.8);
        border: 3px solid #f97316;
        font-weight: 700;
        letter-spacing: 0.05em;
        margin-bottom: 2rem;
    }
    .hero-logo { height: 28rem; width: auto; max-width: 100%; filter: drop-shadow(0 25px 25px rgba(0,0,0,0.3)); }
    .hero-title { font-size: clamp(2.5rem, 8vw, 6rem); font-weight: 900; line-height: 1.1; margin: 1rem 0; }
    .hero-title span { display: block; }
    @keyframes glow {
        0%, 100% { text-shadow: 0 0 20px rgba(255, 165, 0, 0.5); }
        50% { text-shadow: 0 0 40px rgba(255, 105, 180, 0.5); }
    }
    .hero-title .glow { animation: glow 3s infinite; }
    @keyframes shimmer {
        0%, 100% { background-position: 0% 50%; }
        50% { background-position: 100% 50%; }
    }
    .hero-title .shimmer {
        font-size: 1.2em;
        background: linear-gradient(90deg, #fb923c, #f472b6, #facc15, #fb923c);
        background-size: 200% 200%;
        -webkit-background-clip: text;
        background-clip: text;
        color: transparent;
        animation: shimmer 4s infinite;
    }
    .hero-badges { display: flex; flex-wrap: wrap; justify-content: center; gap: 0.75rem; margin: 1.5rem 0; }
    .info-badge {
        display: flex;
        align-items: center;
        gap: 0.75rem;
        padding: 0.75rem 1rem;
        border-radius: 9999px;
        background: rgba(255, 255, 255, 0.95);
        color: #1f2937;
        font-weight: 600;
        font-size: 0.875rem;
        white-space: nowrap;
        transition: transform 0.3s;
    }
    .info-badge:hover { transform: translateY(-2px) scale(1.05); }
    .info-badge.highlight { background: linear-gradient(90deg, #f97316, #ec4899); color: #fff; }
    .hero-subtitle { font-size: 1.5rem; font-weight: 600; }
    .hero-tagline { font-size: 1.125rem; font-style: italic; color: #fde68a; margin: 1.5rem 0; }
    .flyer-download {
        display: inline-flex;
        align-items: center;
        gap: 1rem;
        padding: 0.5rem 1.5rem 0.5rem 0.5rem;
        border-radius: 1rem;
        background: rgba(255, 255, 255, 0.1);
        border: 2px solid rgba(255, 255, 255, 0.4);
        color: #fff;
        text-decoration: none;
        font-weight: 700;
    }
    .flyer-download img { width: 4rem; height: 5rem; object-fit: cover; border-radius: 0.5rem; background: #fff; }
    .hero-cta-group { margin-top: 2rem; }
    .cta-button {
        background: linear-gradient(90deg, #f97316, #ec4899);
        color: #fff;
        border: none;
        padding: 1rem 2.5rem;
        border-radius: 9999px;
        font-size: 1.125rem;
        font-weight: 700;
        cursor: pointer;
        transition: transform 0.3s;
    }
    .cta-button:hover { transform: translateY(-5px) scale(1.05); }
    @keyframes pulse-glow {
        0%, 100% { box-shadow: 0 0 20px rgba(255, 165, 0, 0.3); }
        50% { box-shadow: 0 0 30px rgba(255, 165, 0, 0.5); }
    }
    .cta-button.pulse { animation: pulse-glow 2s ease-in-out infinite; }
    .scroll-indicator {
        position: absolute;
        bottom: 2rem;
        left: 50%;
        width: 1.5rem;
        height: 2.5rem;
        margin-left: -0.75rem;
        border: 2px solid rgba(255, 255, 255, 0.6);
        border-radius: 9999px;
        z-index: 20;
    }
    @keyframes bob {
        0%, 100% { transform: translateY(0); }
        50% { transform: translateY(12px); }
    }
    .scroll-dot {
        width: 0.25rem;
        height: 0.75rem;
        margin: 0.5rem auto 0;
        border-radius: 9999px;
        background: rgba(255, 255, 255, 0.8);
        animation: bob 2s infinite;
    }
    .particles { position: absolute; inset: 0; pointer-events: none; }
    @keyframes drift {
        0%, 100% { transform: translateY(0) scale(1); opacity: 0.3; }
        50% { transform: translateY(-100px) scale(1.5); opacity: 0.8; }
    }
    .particle {
        position: absolute;
        width: 0.25rem;
        height: 0.25rem;
        border-radius: 9999px;
        background: #fdba74;
        animation-name: drift;
        animation-iteration-count: infinite;
    }

    /* content sections */
    .section { padding: 5rem 0; }
    @media (min-width: 768px) {
        .section { padding: 8rem 0; }
    }
    .section h2 { font-size: clamp(2.25rem, 5vw, 3.75rem); font-weight: 700; margin-bottom: 1.5rem; }
    .section-heading { text-align: center; margin-bottom: 4rem; }
    .section-heading p { color: #4b5563; font-size: 1.25rem; max-width: 48rem; margin: 0 auto; }
    .features-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
        gap: 2rem;
    }
    .feature-card {
        background: #fff;
        border-radius: 1rem;
        padding: 2rem;
        border: 1px solid #f3f4f6;
        box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
        transition: transform 0.3s, box-shadow 0.3s;
        height: 100%;
    }
    .feature-card:hover { transform: translateY(-8px) scale(1.02); box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25); }
    .feature-icon {
        width: 4rem;
        height: 4rem;
        border-radius: 1rem;
        display: flex;
        align-items: center;
        justify-content: center;
        font-size: 2rem;
        background: linear-gradient(135deg, #f97316, #ec4899);
        margin-bottom: 1.5rem;
    }
    .feature-card h3 { font-size: 1.25rem; font-weight: 700; margin-bottom: 1rem; }
    .feature-card p { color: #4b5563; line-height: 1.6; }
    .experience-logo { display: block; height: 16rem; margin: 4rem auto 0; }

    .tickets { background: linear-gradient(135deg, #fff7ed, #fdf2f8); }
    .ticket-card {
        background: #fff;
        border-radius: 1.5rem;
        padding: 3rem 2rem;
        text-align: center;
        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
    }
    .ticket-tier {
        display: inline-block;
        padding: 0.5rem 1.5rem;
        border-radius: 9999px;
        background: linear-gradient(90deg, #f97316, #ec4899);
        color: #fff;
        font-weight: 700;
        letter-spacing: 0.05em;
    }
    .ticket-price { margin: 1.5rem 0 0.5rem; }
    .ticket-price .amount { font-size: 4.5rem; font-weight: 900; }
    .ticket-price .unit { color: #6b7280; margin-left: 0.5rem; }
    .ticket-notice { color: #ea580c; font-weight: 600; margin-bottom: 2rem; }
    .ticket-hint { color: #6b7280; font-size: 0.875rem; margin-top: 1rem; }
    .group-discount {
        margin-top: 2.5rem;
        padding-top: 2rem;
        border-top: 1px solid #f3f4f6;
        display: flex;
        flex-direction: column;
        gap: 0.75rem;
        align-items: center;
    }
    .group-discount-title { font-weight: 700; color: #9d174d; }
    .group-discount a { color: #374151; text-decoration: none; font-weight: 500; }

    .dark { background: #111827; color: #fff; }
    .dark p { color: #d1d5db; }
    .details-card {
        background: rgba(255, 255, 255, 0.05);
        border: 1px solid rgba(255, 255, 255, 0.1);
        border-radius: 1.5rem;
        padding: 2.5rem;
    }
    .details-card.light { background: #fff; border-color: #f3f4f6; box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1); }
    .details-card h3 { font-size: 1.875rem; font-weight: 700; text-align: center; margin-bottom: 2.5rem; }
    .detail-row { display: flex; gap: 1.5rem; align-items: flex-start; margin-bottom: 1.5rem; }
    .detail-icon { font-size: 1.75rem; }
    .detail-title { font-weight: 700; font-size: 1.25rem; margin: 0; }
    .detail-body { font-size: 1.125rem; margin: 0; }
    .sponsorship { background: linear-gradient(135deg, #fdf2f8, #fff7ed); }

    .about { background: #f9fafb; }
    .about p { color: #4b5563; font-size: 1.125rem; line-height: 1.7; }
    .about-motto {
        display: inline-flex;
        align-items: center;
        gap: 0.5rem;
        margin: 2rem 0;
        padding: 0.75rem 1.5rem;
        border-radius: 9999px;
        background: #fff;
        font-weight: 600;
    }
    .about-card { background: #fff; border-radius: 1.5rem; padding: 2.5rem; box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1); }
    .about-card h3 { font-size: 1.875rem; font-weight: 700; margin-bottom: 1.5rem; }
    .about-quote { font-style: italic; color: #ea580c !important; }

    .partners { padding: 6rem 0; background: linear-gradient(180deg, #fff, #f9fafb); }
    .partners-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
        gap: 3rem;
        max-width: 64rem;
        margin: 0 auto;
    }
    .partner-card {
        background: #fff;
        border-radius: 1.5rem;
        padding: 1.5rem;
        border: 1px solid #f3f4f6;
        aspect-ratio: 3 / 2;
        display: flex;
        align-items: center;
        justify-content: center;
        transition: transform 0.3s;
    }
    .partner-card:hover { transform: scale(1.02); }
    .partner-card img { width: 100%; height: 100%; object-fit: contain; }
    .trust-pill {
        display: flex;
        width: fit-content;
        align-items: center;
        gap: 0.5rem;
        margin: 4rem auto 0;
        padding: 0.5rem 1rem;
        border-radius: 9999px;
        background: #f9fafb;
        border: 1px solid #f3f4f6;
        font-size: 0.875rem;
        color: #4b5563;
    }
    .trust-dot { width: 0.5rem; height: 0.5rem; border-radius: 9999px; background: #22c55e; }

    .site-footer { background: #111827; color: #fff; text-align: center; padding: 4rem 1rem; }
    .site-footer img { height: 6rem; margin-bottom: 1.5rem; }
    .footer-sub { color: #9ca3af; font-size: 0.875rem; }

    /* ticket modal */
    .modal-overlay {
        position: fixed;
        inset: 0;
        z-index: 50;
        background: rgba(0, 0, 0, 0.8);
        backdrop-filter: blur(4px);
        display: flex;
        align-items: center;
        justify-content: center;
        padding: 1rem;
        animation: fade-in 0.2s ease-out;
    }
    @keyframes fade-in {
        from { opacity: 0; }
        to { opacity: 1; }
    }
    @keyframes pop-in {
        from { opacity: 0; transform: translateY(50px) scale(0.8); }
        to { opacity: 1; transform: none; }
    }
    .modal-content {
        position: relative;
        background: #fff;
        border-radius: 1.5rem;
        padding: 2rem;
        max-width: 28rem;
        width: 100%;
        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
        animation: pop-in 0.3s ease-out;
    }
    .modal-close {
        position: absolute;
        top: 1rem;
        right: 1rem;
        padding: 0.5rem;
        border: none;
        border-radius: 9999px;
        background: none;
        color: #6b7280;
        font-size: 1.25rem;
        cursor: pointer;
    }
    .modal-close:hover { background: #f3f4f6; color: #374151; }
    .modal-header { text-align: center; margin-bottom: 2rem; }
    .modal-header h3 { font-size: 1.75rem; font-weight: 700; margin: 0 0 0.5rem; }
    .modal-header p { color: #4b5563; font-size: 1.125rem; margin: 0; }
    .modal-qr {
        background: linear-gradient(135deg, #f9fafb, #fff);
        border: 2px solid #f3f4f6;
        border-radius: 1rem;
        padding: 1.5rem;
        margin-bottom: 1.5rem;
    }
    .modal-qr img { display: block; width: 100%; max-width: 20rem; margin: 0 auto; border-radius: 0.75rem; }
    .modal-instructions { text-align: center; }
    .modal-price { font-weight: 600; color: #374151; }
    .modal-hint { font-size: 0.875rem; color: #6b7280; }
    .modal-tip {
        margin-top: 0.75rem;
        padding: 1rem;
        border-radius: 0.75rem;
        background: linear-gradient(90deg, #fff7ed, #fdf2f8);
        border: 1px solid #fed7aa;
        color: #c2410c;
        font-size: 0.875rem;
        font-weight: 500;
    }
"#;
