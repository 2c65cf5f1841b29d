use yew::prelude::*;
use yew_router::prelude::*;
use log::info;
use web_sys::MouseEvent;
use chrono::{Datelike, Local};

mod config;
mod analysis;
mod chat;
mod media;
mod reports;
mod animation {
    pub mod hooks;
    pub mod parallax;
    pub mod reveal;
    pub mod styles;
}
mod components {
    pub mod chatbot;
}
mod pages {
    pub mod home;
    pub mod about;
    pub mod contact;
    pub mod learn_more;
    pub mod performance_analysis;
    pub mod training_reports;
}

use animation::{
    hooks::{use_scroll_reveal, use_scrolled_past},
    styles::AnimationStyles,
};
use components::chatbot::ChatBot;
use pages::{
    about::About,
    contact::Contact,
    home::Home,
    learn_more::LearnMore,
    performance_analysis::PerformanceAnalysis,
    training_reports::TrainingReports,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/analysis")]
    Analysis,
    #[at("/reports")]
    Reports,
    #[at("/contact")]
    Contact,
    #[at("/learn")]
    LearnMore,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home | Route::NotFound => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::About => {
            info!("Rendering About page");
            html! { <About /> }
        },
        Route::Analysis => {
            info!("Rendering Performance Analysis page");
            html! { <PerformanceAnalysis /> }
        },
        Route::Reports => {
            info!("Rendering Training Reports page");
            html! { <TrainingReports /> }
        },
        Route::Contact => {
            info!("Rendering Contact page");
            html! { <Contact /> }
        },
        Route::LearnMore => {
            info!("Rendering Learn More page");
            html! { <LearnMore /> }
        },
    }
}

const NAV_LINKS: [(Route, &str); 4] = [
    (Route::About, "ABOUT US"),
    (Route::Analysis, "PERFORMANCE ANALYSIS"),
    (Route::Reports, "TRAINING REPORTS"),
    (Route::Contact, "CONTACT"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_scrolled_past(50.0);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let links = |on_click: Option<Callback<MouseEvent>>| -> Html {
        NAV_LINKS
            .iter()
            .map(|(route, label)| html! {
                <div onclick={on_click.clone()}>
                    <Link<Route> to={route.clone()} classes="nav-link">
                        {*label}
                    </Link<Route>>
                </div>
            })
            .collect()
    };

    html! {
        <nav class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <span class="nav-logo-icon">{"⛨"}</span>
                    <span class="nav-logo-text">{"INJURYSHIELD"}</span>
                </Link<Route>>

                <div class="nav-links">
                    { links(None) }
                </div>

                <div class="nav-actions">
                    <button class="get-started-button">{"GET STARTED"}</button>
                </div>

                <button class="burger-menu" onclick={toggle_menu}>
                    { if *menu_open { "✕" } else { "☰" } }
                </button>
            </div>
            {
                if *menu_open {
                    html! {
                        <div class="mobile-menu">
                            { links(Some(close_menu.clone())) }
                            <button class="get-started-button" onclick={close_menu}>
                                {"GET STARTED"}
                            </button>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </nav>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    let footer_ref = use_node_ref();
    use_scroll_reveal(footer_ref.clone());

    let on_subscribe = Callback::from(|e: SubmitEvent| e.prevent_default());
    let year = Local::now().year();

    html! {
        <footer class="site-footer" ref={footer_ref}>
            <div class="footer-grid">
                <div class="reveal-left">
                    <div class="footer-brand">
                        <span class="nav-logo-icon">{"⛨"}</span>
                        <span>{"INJURYSHIELD"}</span>
                    </div>
                    <p class="muted">{"Revolutionizing sports performance through advanced analytics and injury prevention."}</p>
                </div>
                <div class="reveal">
                    <h3>{"Quick Links"}</h3>
                    <ul>
                        <li><Link<Route> to={Route::About}>{"About Us"}</Link<Route>></li>
                        <li><Link<Route> to={Route::Analysis}>{"Performance Analysis"}</Link<Route>></li>
                        <li><Link<Route> to={Route::Reports}>{"Training Reports"}</Link<Route>></li>
                        <li><Link<Route> to={Route::Contact}>{"Contact"}</Link<Route>></li>
                    </ul>
                </div>
                <div class="reveal">
                    <h3>{"Resources"}</h3>
                    <ul>
                        <li><a href="#">{"Documentation"}</a></li>
                        <li><a href="#">{"API Reference"}</a></li>
                        <li><a href="#">{"Blog"}</a></li>
                        <li><a href="#">{"Support"}</a></li>
                    </ul>
                </div>
                <div class="reveal-right">
                    <h3>{"Newsletter"}</h3>
                    <p class="muted">{"Stay updated with our latest features and releases."}</p>
                    <form class="newsletter-form" onsubmit={on_subscribe}>
                        <input type="email" placeholder="Enter your email" />
                        <button type="submit">{"Subscribe"}</button>
                    </form>
                </div>
            </div>
            <div class="footer-bottom">
                <p>{format!("© {} InjuryShield. All rights reserved.", year)}</p>
            </div>
        </footer>
    }
}

#[function_component(SiteStyles)]
fn site_styles() -> Html {
    html! {
        <style>
            {r#"
            * { box-sizing: border-box; }
            body {
                margin: 0;
                background: #000;
                color: #fff;
                font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
            }
            a { color: inherit; text-decoration: none; }
            .container { max-width: 1200px; margin: 0 auto; padding: 0 1.5rem; }
            .muted { color: #9ca3af; }
            .accent { color: #ef4444; }
            .btn-primary {
                background: #ef4444;
                color: #fff;
                border: none;
                border-radius: 9999px;
                padding: 1rem 2rem;
                cursor: pointer;
                transition: background 0.3s ease, transform 0.3s ease;
            }
            .btn-primary:hover { background: #dc2626; transform: scale(1.05); }
            .btn-primary:disabled { opacity: 0.5; cursor: not-allowed; transform: none; }
            .card {
                background: #1f2937;
                border-radius: 0.75rem;
                padding: 2rem;
                transition: background 0.3s ease, transform 0.3s ease;
            }
            .card:hover { background: #374151; }
            .section { padding: 5rem 0; }
            .section-dark { background: #111827; }
            .section-title { font-size: 2.25rem; font-weight: 700; text-align: center; margin-bottom: 4rem; }
            .grid-3 { display: grid; grid-template-columns: repeat(3, 1fr); gap: 3rem; }
            .grid-4 { display: grid; grid-template-columns: repeat(4, 1fr); gap: 2rem; }
            .bullet::before { content: "•"; color: #ef4444; margin-right: 0.5rem; }

            .top-nav {
                position: fixed;
                width: 100%;
                z-index: 50;
                padding: 1.5rem 0;
                transition: all 0.3s ease;
            }
            .top-nav.scrolled {
                background: rgba(0, 0, 0, 0.9);
                backdrop-filter: blur(16px);
                padding: 1rem 0;
            }
            .nav-content {
                max-width: 1200px;
                margin: 0 auto;
                padding: 0 1.5rem;
                display: flex;
                align-items: center;
                justify-content: space-between;
            }
            .nav-logo { display: flex; align-items: center; gap: 0.75rem; font-size: 1.25rem; font-weight: 700; }
            .nav-logo:hover .nav-logo-text { color: #ef4444; }
            .nav-logo-icon { color: #ef4444; font-size: 1.75rem; }
            .nav-links { display: flex; gap: 2rem; }
            .nav-link { font-size: 0.9rem; letter-spacing: 0.05em; transition: color 0.3s ease; }
            .nav-link:hover { color: #ef4444; }
            .get-started-button {
                background: #ef4444;
                color: #fff;
                border: none;
                border-radius: 9999px;
                padding: 0.5rem 1.5rem;
                cursor: pointer;
            }
            .burger-menu { display: none; background: none; border: none; color: #fff; font-size: 1.5rem; cursor: pointer; }
            .mobile-menu {
                display: flex;
                flex-direction: column;
                gap: 1rem;
                padding: 1rem 1.5rem;
                background: rgba(0, 0, 0, 0.95);
            }

            .site-footer { background: #111827; padding: 3rem 0; }
            .footer-grid {
                max-width: 1200px;
                margin: 0 auto;
                padding: 0 1.5rem;
                display: grid;
                grid-template-columns: repeat(4, 1fr);
                gap: 2rem;
            }
            .footer-grid ul { list-style: none; padding: 0; line-height: 2; color: #9ca3af; }
            .footer-grid a:hover { color: #fff; }
            .footer-brand { display: flex; align-items: center; gap: 0.75rem; font-size: 1.25rem; font-weight: 700; margin-bottom: 1.5rem; }
            .newsletter-form { display: flex; }
            .newsletter-form input { flex: 1; background: #1f2937; color: #fff; border: none; padding: 0.5rem 1rem; border-radius: 0.5rem 0 0 0.5rem; }
            .newsletter-form button { background: #ef4444; color: #fff; border: none; padding: 0.5rem 1rem; border-radius: 0 0.5rem 0.5rem 0; cursor: pointer; }
            .footer-bottom { border-top: 1px solid #1f2937; margin-top: 3rem; padding-top: 2rem; text-align: center; color: #9ca3af; }

            @media (max-width: 768px) {
                .nav-links, .nav-actions { display: none; }
                .burger-menu { display: block; }
                .grid-3, .grid-4, .footer-grid { grid-template-columns: 1fr; }
            }
            "#}
        </style>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <SiteStyles />
            <AnimationStyles />
            <Nav />
            <Switch<Route> render={switch} />
            <Footer />
            <ChatBot />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
