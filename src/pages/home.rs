use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;
use crate::animation::hooks::{use_parallax, use_scroll_reveal, use_scroll_to_top};

const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1517649763962-0c623066013b?auto=format&fit=crop&q=80";

const FLOATING_CARDS: [(&str, &str); 4] = [
    ("📈", "Real-time Analytics"),
    ("🧠", "AI-Powered Insights"),
    ("🎯", "Precision Tracking"),
    ("👥", "Team Management"),
];

const FEATURES: [(&str, &str, &str); 3] = [
    ("📈", "Advanced Analytics", "Real-time performance tracking and injury risk assessment powered by AI."),
    ("🧠", "Expert Insights", "Get personalized recommendations from sports science professionals."),
    ("👥", "Team Integration", "Seamlessly connect with your entire sports organization."),
];

#[function_component(Home)]
pub fn home() -> Html {
    let page_ref = use_node_ref();
    let navigator = use_navigator();

    use_scroll_to_top();
    use_scroll_reveal(page_ref.clone());
    use_parallax();

    let on_learn_more = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = &navigator {
            navigator.push(&Route::LearnMore);
        }
    });

    html! {
        <div class="home" ref={page_ref}>
            <section class="hero">
                <div class="hero-background">
                    <img src={HERO_IMAGE} alt="Background" class="hero-image parallax" data-rate="0.5" />
                    <div class="hero-gradient"></div>
                </div>

                <div class="container hero-content">
                    <div class="animate-float-text">
                        <h1 class="hero-title">
                            <div class="animate-float-slow">
                                {"FROM THE "}<span class="accent">{"FIELD"}</span>
                            </div>
                            <div class="animate-float" style="animation-delay: 200ms;">
                                {"TO THE FUTURE"}
                            </div>
                        </h1>
                    </div>
                    <p class="hero-subtitle animate-float-text delay-200">
                        {"Created by practitioners, InjuryShield turns data and analytics into your greatest performance advantage."}
                    </p>
                    <button class="btn-primary animate-float-text delay-300" onclick={on_learn_more}>
                        {"Learn More ›"}
                    </button>
                </div>

                <div class="floating-cards">
                    {
                        FLOATING_CARDS.iter().enumerate().map(|(index, (icon, label))| html! {
                            <div class="floating-card animate-float" style={format!("animation-delay: {}ms;", index * 200)}>
                                <div class="floating-card-icon">{*icon}</div>
                                <p>{*label}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section class="section section-dark">
                <div class="container">
                    <h2 class="section-title reveal">{"Why Choose InjuryShield?"}</h2>
                    <div class="grid-3">
                        {
                            FEATURES.iter().enumerate().map(|(index, (icon, title, description))| html! {
                                <div class="card reveal-scale" style={format!("transition-delay: {}ms;", index * 200)}>
                                    <div class="feature-icon">{*icon}</div>
                                    <h3>{*title}</h3>
                                    <p class="muted">{*description}</p>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>

            <section class="section cta-section">
                <div class="container">
                    <div class="cta-box reveal">
                        <h2>{"Ready to Transform Your Performance?"}</h2>
                        <p class="muted">
                            {"Join thousands of athletes and teams who have already elevated their game with InjuryShield."}
                        </p>
                        <Link<Route> to={Route::Contact} classes="btn-primary">
                            {"Get Started Today"}
                        </Link<Route>>
                    </div>
                </div>
            </section>

            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    overflow: hidden;
                }
                .hero-background { position: absolute; inset: 0; }
                .hero-image {
                    width: 100%;
                    height: 120%;
                    object-fit: cover;
                    opacity: 0.4;
                }
                .hero-gradient {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to right, #000, rgba(0, 0, 0, 0.7), transparent);
                }
                .hero-content { position: relative; z-index: 10; padding-top: 5rem; }
                .hero-title { font-size: clamp(3rem, 8vw, 6rem); font-weight: 700; margin-bottom: 1.5rem; }
                .hero-subtitle { font-size: 1.25rem; color: #d1d5db; max-width: 42rem; margin-bottom: 2rem; }
                .floating-cards {
                    position: absolute;
                    right: 2.5rem;
                    top: 50%;
                    transform: translateY(-50%);
                    display: grid;
                    gap: 1.5rem;
                    z-index: 10;
                }
                .floating-card {
                    background: rgba(255, 255, 255, 0.1);
                    backdrop-filter: blur(16px);
                    padding: 1.5rem;
                    border-radius: 1rem;
                    cursor: pointer;
                }
                .floating-card:hover { background: rgba(255, 255, 255, 0.2); }
                .floating-card-icon, .feature-icon { font-size: 2rem; margin-bottom: 0.75rem; }
                .cta-section { position: relative; }
                .cta-box { max-width: 48rem; margin: 0 auto; text-align: center; }
                .cta-box h2 { font-size: 2.25rem; margin-bottom: 1.5rem; }
                .cta-box p { font-size: 1.25rem; margin-bottom: 2rem; }
                @media (max-width: 1024px) {
                    .floating-cards { display: none; }
                }
                "#}
            </style>
        </div>
    }
}
