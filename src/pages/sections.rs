use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::animated_section::AnimatedSection;
use crate::components::cards::{FeatureCard, InfoBadge, LotusIcon};
use crate::components::floating::FloatingElement;
use crate::components::particles::HeroParticles;
use crate::config;
use crate::state::navigation::SectionId;
use crate::state::parallax::hero_style;
use crate::state::pricing::EARLY_BIRD;
use crate::viewport::{self, open_in_new_tab};

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub on_buy_tickets: Callback<()>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    // Only the hero follows the scroll position, so only the hero re-renders
    let scroll_y = use_state(|| viewport::scroll_y().unwrap_or(0.0));
    {
        let scroll_y = scroll_y.clone();
        use_event_with_window("scroll", move |_: Event| {
            if let Some(y) = viewport::scroll_y() {
                scroll_y.set(y);
            }
        });
    }
    let buy = {
        let on_buy_tickets = props.on_buy_tickets.clone();
        Callback::from(move |_: MouseEvent| on_buy_tickets.emit(()))
    };

    html! {
        <section
            id={SectionId::Home.id()}
            class="hero"
            style={format!("background-image: url('{}');", config::HERO_BACKGROUND_URL)}
        >
            <div class="hero-overlay"></div>

            <div class="hero-floaters">
                <FloatingElement delay={0.0} class="float-crown">{"👑"}</FloatingElement>
                <FloatingElement delay={1.0} class="float-star">{"⭐"}</FloatingElement>
                <FloatingElement delay={2.0} class="float-sparkles">{"✨"}</FloatingElement>
                <FloatingElement delay={3.0} class="float-lotus"><LotusIcon class="lotus" /></FloatingElement>
                <FloatingElement delay={4.0} class="float-globe">{"🌐"}</FloatingElement>
            </div>

            <div class="hero-content" style={hero_style(*scroll_y)}>
                <div class="hero-announcement">
                    <span>{"✨ "}<strong>{"SANSKRITI"}</strong>{" PRESENTS ✨"}</span>
                </div>

                <img class="hero-logo" src={config::logo_url()} alt="Incredible India Festival Logo" />

                <h1 class="hero-title">
                    <span class="glow">{"INCREDIBLE"}</span>
                    <span class="shimmer">{"INDIA FESTIVAL"}</span>
                </h1>

                <div class="hero-badges">
                    <InfoBadge icon="📅" text={config::EVENT_DATE_LABEL} highlight={true} />
                    <InfoBadge icon="🕛" text="12:00 PM - 7:00 PM" />
                    <InfoBadge icon="📍" text="Summerfest Grounds" />
                </div>
                <p class="hero-subtitle">{"First time ever at the iconic Summerfest Grounds"}</p>

                <p class="hero-tagline">
                    {"\"Come join us to make history • Where culture meets rhythm and flavors tell stories\""}
                </p>

                <a class="flyer-download" href={config::FLYER_PATH} download={config::FLYER_DOWNLOAD_NAME}>
                    <img src={config::FLYER_PATH} alt="Flyer thumbnail" />
                    <span>{"Download Event Flyer"}</span>
                </a>

                <div class="hero-cta-group">
                    <button class="cta-button pulse" onclick={buy}>{"Buy Tickets Now"}</button>
                </div>
            </div>

            <div class="scroll-indicator"><div class="scroll-dot"></div></div>

            <HeroParticles />
        </section>
    }
}

const HIGHLIGHTS: [(&str, &str, &str); 4] = [
    (
        "🎵",
        "Live Performances & Fashion Show",
        "Experience folk & classical dances, live music performances by talented local singers, awesome percussionists, and a stunning fashion showcase celebrating India's diverse cultural heritage.",
    ),
    (
        "🍛",
        "Authentic Indian Food trucks and Stalls",
        "Savor authentic Indian cuisine from various regions, featuring traditional dishes and modern fusion flavors from local vendors.",
    ),
    (
        "🎨",
        "Art Exhibits & Cultural Activities",
        "Discover beautiful jewelry, indian outfits, intricate henna art, cultural exhibits, cricket booth, and family-friendly activities showcasing Indian artistic traditions.",
    ),
    (
        "🎮",
        "Games",
        "Enjoy traditional Indian games and fun activities for all ages. From interactive cultural experiences that bring families together to water-balloon fights for kids and Indian games for seniors as well.",
    ),
];

#[function_component(Experience)]
pub fn experience() -> Html {
    html! {
        <AnimatedSection>
            <section id={SectionId::Experience.id()} class="section experience">
                <div class="container">
                    <div class="section-heading">
                        <h2>{"Festival "}<span class="gradient-text">{"Highlights"}</span></h2>
                        <p>
                            {"A journey through India's culture - experience the music, flavors, and traditions that unite us. \
                              Celebrating the richness of diverse traditions through music, cuisine and cultural experiences."}
                        </p>
                    </div>
                    <div class="features-grid">
                        {
                            for HIGHLIGHTS.iter().map(|(icon, title, description)| html! {
                                <FeatureCard icon={*icon} title={*title} description={*description} />
                            })
                        }
                    </div>
                    <img class="experience-logo" src={config::logo_url()} alt="Incredible India Festival Logo" />
                </div>
            </section>
        </AnimatedSection>
    }
}

#[derive(Properties, PartialEq)]
pub struct TicketsProps {
    pub on_buy_tickets: Callback<()>,
}

#[function_component(Tickets)]
pub fn tickets(props: &TicketsProps) -> Html {
    let buy = {
        let on_buy_tickets = props.on_buy_tickets.clone();
        Callback::from(move |_: MouseEvent| on_buy_tickets.emit(()))
    };

    html! {
        <AnimatedSection>
            <section id={SectionId::Tickets.id()} class="section tickets">
                <div class="container narrow">
                    <div class="section-heading">
                        <h2>{"Get Your "}<span class="gradient-text">{"Tickets"}</span></h2>
                        <p>{"Secure your spot at this historic celebration"}</p>
                    </div>
                    <div class="ticket-card">
                        <div class="ticket-tier">{EARLY_BIRD.headline()}</div>
                        <div class="ticket-price">
                            <span class="amount">{format!("${}", EARLY_BIRD.price_usd)}</span>
                            <span class="unit">{"per person"}</span>
                        </div>
                        <p class="ticket-notice">{EARLY_BIRD.notice()}</p>
                        <button class="cta-button pulse" onclick={buy}>{"Buy Tickets Now"}</button>
                        <p class="ticket-hint">{"Tap to scan QR code and purchase tickets"}</p>

                        <div class="group-discount">
                            <div class="group-discount-title">{"CONTACT FOR GROUP DISCOUNT"}</div>
                            <a href={format!("tel:{}", config::CONTACT_PHONE)}>{"📞 "}{config::CONTACT_PHONE}</a>
                            <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{"✉️ "}{config::CONTACT_EMAIL}</a>
                        </div>
                    </div>
                </div>
            </section>
        </AnimatedSection>
    }
}

#[function_component(Vendors)]
pub fn vendors() -> Html {
    let contact = Callback::from(|_: MouseEvent| open_in_new_tab(config::VENDOR_FORM_URL));

    html! {
        <AnimatedSection>
            <section id={SectionId::Info.id()} class="section info dark">
                <div class="container split">
                    <div>
                        <h2>{"Vendor "}<span class="gradient-text">{"Opportunities"}</span></h2>
                        <p>
                            {"Sponsorship, advertising and exhibit opportunities available. \
                              Sell cultural items, offer services like henna, jewelry, and more!"}
                        </p>
                        <button class="cta-button" onclick={contact}>{"Contact for Vendor Opportunities"}</button>
                    </div>
                    <div class="details-card">
                        <h3>{"Event Details"}</h3>
                        <DetailRow icon="📅" title="Date" body="Saturday, July 12th, 2025" />
                        <DetailRow icon="🕛" title="Time" body="12:00 PM - 7:00 PM" />
                        <DetailRow icon="📍" title="Venue" body="Summerfest Grounds, Milwaukee, Wisconsin" />
                    </div>
                </div>
            </section>
        </AnimatedSection>
    }
}

#[function_component(Sponsorship)]
pub fn sponsorship() -> Html {
    let contact = Callback::from(|_: MouseEvent| open_in_new_tab(config::SPONSOR_FORM_URL));

    html! {
        <AnimatedSection>
            <section class="section sponsorship">
                <div class="container split">
                    <div>
                        <h2>{"Sponsorship "}<span class="gradient-text">{"Opportunities"}</span></h2>
                        <p>
                            {"Partner with us to make this historic celebration even more special. \
                              Get exclusive visibility and connect with thousands of attendees."}
                        </p>
                        <button class="cta-button" onclick={contact}>{"Contact for Sponsorship"}</button>
                    </div>
                    <div class="details-card light">
                        <h3>{"Sponsorship Benefits"}</h3>
                        <DetailRow icon="👑" title="Brand Visibility" body="Reach thousands of attendees and community members" />
                        <DetailRow icon="👥" title="Community Impact" body="Support cultural celebration and community engagement" />
                        <DetailRow icon="⚡" title="Exclusive Benefits" body="Custom sponsorship packages available" />
                    </div>
                </div>
            </section>
        </AnimatedSection>
    }
}

#[derive(Properties, PartialEq)]
struct DetailRowProps {
    icon: &'static str,
    title: &'static str,
    body: &'static str,
}

#[function_component(DetailRow)]
fn detail_row(props: &DetailRowProps) -> Html {
    html! {
        <div class="detail-row">
            <span class="detail-icon">{props.icon}</span>
            <div>
                <p class="detail-title">{props.title}</p>
                <p class="detail-body">{props.body}</p>
            </div>
        </div>
    }
}

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <AnimatedSection>
            <section id={SectionId::About.id()} class="section about">
                <div class="container narrow center">
                    <h2>{"About "}<span class="gradient-text">{config::ORGANIZER}</span></h2>
                    <p>
                        {"Sanskriti, a non-profit organization with a mission to preserve, celebrate, and share India's cultural heritage. \
                          A non-profit social and cultural organization based in Wisconsin, aims to connect communities by fostering \
                          friendship, understanding, and cultural exchange through engaging social and cultural events that celebrate \
                          diversity and bring people together."}
                    </p>
                    <div class="about-motto">
                        <LotusIcon class="lotus small" />
                        <span>{"Come curious, leave inspired"}</span>
                    </div>
                    <div class="about-card">
                        <h3>{"Let's celebrate the Incredible India within us!"}</h3>
                        <p>
                            {"The festival will feature live performances, authentic Indian food trucks and stalls, art exhibits, \
                              and family-friendly activities, inviting the entire Wisconsin and beyond to experience \
                              the colors and flavors of India."}
                        </p>
                        <p class="about-quote">{"\"Where culture meets rhythm and flavors tell stories\""}</p>
                    </div>
                </div>
            </section>
        </AnimatedSection>
    }
}

#[function_component(SupportingPartners)]
pub fn supporting_partners() -> Html {
    let [first, second] = config::partner_logo_urls();

    html! {
        <AnimatedSection class="partners">
            <div class="container">
                <div class="section-heading">
                    <h2>{"Our "}<span class="gradient-text">{"Supporting Partners"}</span></h2>
                    <p>{"Proudly supported by industry leaders who share our vision"}</p>
                </div>
                <div class="partners-grid">
                    <div class="partner-card"><img src={first} alt="Partner Logo 1" /></div>
                    <div class="partner-card"><img src={second} alt="Partner Logo 2" /></div>
                </div>
                <div class="trust-pill">
                    <span>{"Trusted by Industry Leaders"}</span>
                    <span class="trust-dot"></span>
                </div>
            </div>
        </AnimatedSection>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <img src={config::logo_url()} alt={config::EVENT_NAME} />
            <p>{format!("© 2025 {}, Inc. All rights reserved.", config::ORGANIZER)}</p>
            <p class="footer-sub">{format!("{} - {}, Wisconsin", config::EVENT_NAME, config::EVENT_CITY)}</p>
        </footer>
    }
}
