use chrono::{Duration, SecondsFormat, Utc};
use log::{info, warn};
use web_sys::Element;
use yew::prelude::*;

use furnitor::{page_config, Enhancements, Feature};


struct Card {
    class: &'static str,
    title: &'static str,
    body: &'static str,
}

const COLLECTION: [Card; 3] = [
    Card { class: "shop-card", title: "Nordic Lounge", body: "Oak frames and wool upholstery built to last decades." },
    Card { class: "shop-card", title: "Atelier Dining", body: "Extendable tables that seat four or ten." },
    Card { class: "shop-card", title: "Quiet Bedroom", body: "Low platforms, soft linens, no clutter." },
];

const FEATURES: [Card; 3] = [
    Card { class: "feature-card", title: "Free delivery", body: "White-glove delivery and assembly in every city we serve." },
    Card { class: "feature-card", title: "10 year warranty", body: "Every joint, hinge and cushion is covered." },
    Card { class: "feature-card", title: "Made to order", body: "Pick fabric, finish and size. We build it for you." },
];

const TECH: [(&str, &str); 4] = [
    ("bi bi-tree", "FSC timber"),
    ("bi bi-droplet", "Water-based finishes"),
    ("bi bi-recycle", "Recycled packaging"),
    ("bi bi-tools", "Lifetime repairs"),
];


fn card_list(cards: &[Card]) -> Html {
    cards
        .iter()
        .map(|card| {
            html! {
                <div class={classes!("card", card.class)}>
                    <h3>{ card.title }</h3>
                    <p>{ card.body }</p>
                </div>
            }
        })
        .collect()
}


#[function_component(Landing)]
pub fn landing() -> Html {
    // Three days out, so the offer banner always has something to count.
    let offer_ends = use_memo(
        |_| (Utc::now() + Duration::days(3)).to_rfc3339_opts(SecondsFormat::Secs, true),
        (),
    );

    // Stand-in for the menu widget: it only flips `show`, the enhancements
    // handle scroll locking and collapsing.
    let collapse_ref = use_node_ref();
    let toggle_menu = {
        let collapse_ref = collapse_ref.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(collapse) = collapse_ref.cast::<Element>() {
                let _ = collapse.class_list().toggle("show");
            }
        })
    };

    // Install the enhancements once the markup is in the DOM; tear down on unmount.
    {
        use_effect_with_deps(
            move |_| {
                let mut features = Feature::ALL.to_vec();
                features.push(Feature::TypingAnimation);
                let enhancements = match Enhancements::install(page_config(), &features) {
                    Ok(enhancements) => {
                        info!("Landing page enhanced");
                        Some(enhancements)
                    }
                    Err(err) => {
                        warn!("Landing page left unenhanced: {}", err);
                        None
                    }
                };
                move || drop(enhancements)
            },
            (),
        );
    }

    html! {
        <div class="landing-page">
            <nav class="navbar">
                <a class="navbar-brand" href="#home">{"Furnitor"}</a>
                <button class="navbar-toggler" type="button" onclick={toggle_menu}>
                    <span class="navbar-toggler-icon"></span>
                </button>
                <div class="navbar-collapse" ref={collapse_ref}>
                    <a class="nav-link" href="#home">{"Home"}</a>
                    <a class="nav-link" href="#collection">{"Collection"}</a>
                    <a class="nav-link" href="#features">{"Why us"}</a>
                    <a class="nav-link" href="#craft">{"Craft"}</a>
                    <a class="nav-link" href="#contact">{"Contact"}</a>
                    <a class="nav-link" href="https://blog.furnitor.example">{"Journal"}</a>
                </div>
            </nav>

            <section id="home" class="hero-wrapper">
                <div class="hero-section">
                    <h1 class="hero-title">{"Furniture that grows with you"}</h1>
                    <p>{"Honest materials, quiet design, built in small batches."}</p>
                    <a class="btn btn-primary" href="#">{"Browse the catalog"}</a>
                </div>
            </section>

            <section id="collection">
                <h2>{"The collection"}</h2>
                <img class="lazy" data-src="/assets/collection.webp" alt="Living room with the Nordic Lounge set" />
                <div class="card-grid">
                    { card_list(&COLLECTION) }
                </div>
            </section>

            <section id="features">
                <h2>{"Why Furnitor"}</h2>
                <div class="card-grid">
                    { card_list(&FEATURES) }
                </div>
                <div class="offer">
                    {"Spring offer ends in "}
                    <span class="countdown" data-countdown={(*offer_ends).clone()}>{"…"}</span>
                </div>
            </section>

            <section id="craft">
                <h2>{"How we build"}</h2>
                <div class="tech-grid">
                    {
                        TECH.iter().map(|(icon, label)| html! {
                            <div class="tech-item">
                                <i class={*icon}></i>
                                <span>{ *label }</span>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
                <img class="lazy" data-src="/assets/workshop.webp" alt="Our workshop" />
            </section>

            <section id="contact">
                <h2>{"Talk to a designer"}</h2>
                <form class="contact-form">
                    <input type="email" name="email" placeholder="you@example.com" />
                    <textarea name="message" placeholder="Tell us about your space"></textarea>
                    <button class="btn btn-primary" type="submit">{"Send"}</button>
                </form>
                <a class="btn btn-outline" href="https://shop.furnitor.example">{"Visit the shop"}</a>
            </section>

            <style>
                {r#"
                    .navbar {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 1000;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        padding: 1rem 2rem;
                        background: rgba(255, 255, 255, 0.95);
                        transition: background 0.3s ease, box-shadow 0.3s ease;
                    }
                    .navbar-toggler {
                        display: none;
                    }
                    .nav-link {
                        margin-left: 1.5rem;
                        color: #333;
                        text-decoration: none;
                    }
                    .nav-link.active {
                        color: #b5651d;
                        font-weight: 600;
                    }
                    .hero-wrapper {
                        overflow: hidden;
                        min-height: 90vh;
                    }
                    .hero-section {
                        padding: 12rem 2rem 6rem;
                        text-align: center;
                    }
                    section {
                        padding: 6rem 2rem;
                    }
                    .card-grid, .tech-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                        gap: 2rem;
                    }
                    .card {
                        padding: 2rem;
                        border-radius: 12px;
                        background: #faf7f2;
                    }
                    .tech-item i {
                        display: inline-block;
                        font-size: 2rem;
                    }
                    img.lazy {
                        min-height: 200px;
                        background: #eee;
                    }
                    .btn.loading {
                        opacity: 0.6;
                        pointer-events: none;
                    }
                    @media (max-width: 991px) {
                        .navbar-toggler {
                            display: block;
                        }
                        .navbar-collapse {
                            display: none;
                        }
                        .navbar-collapse.show {
                            display: flex;
                            flex-direction: column;
                        }
                    }
                "#}
            </style>
        </div>
    }
}
