use yew::prelude::*;
use yew_router::prelude::*;
use crate::Route;
use crate::animation::hooks::{use_parallax, use_scroll_reveal, use_scroll_to_top};

struct TeamMember {
    name: &'static str,
    role: &'static str,
    image: &'static str,
    description: &'static str,
    skills: &'static [&'static str],
}

const TEAM: [TeamMember; 3] = [
    TeamMember {
        name: "Dr. Sarah Chen",
        role: "Chief Scientific Officer",
        image: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?auto=format&fit=crop&q=80",
        description: "Leading our research and development in sports science and biomechanics.",
        skills: &["Biomechanics", "Data Analysis", "Research"],
    },
    TeamMember {
        name: "Michael Rodriguez",
        role: "Head of Engineering",
        image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?auto=format&fit=crop&q=80",
        description: "Driving innovation in our AI and machine learning systems.",
        skills: &["AI", "Machine Learning", "Software Architecture"],
    },
    TeamMember {
        name: "Emma Thompson",
        role: "Performance Director",
        image: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?auto=format&fit=crop&q=80",
        description: "Overseeing athlete development and performance optimization.",
        skills: &["Athletic Training", "Performance Analytics", "Team Management"],
    },
];

const ACHIEVEMENTS: [(&str, &str, &str); 4] = [
    ("👥", "10K+", "Athletes Monitored"),
    ("⛨", "95%", "Injury Prevention Rate"),
    ("🎯", "50+", "Professional Teams"),
    ("🏅", "24/7", "Support Available"),
];

const CORE_VALUES: [(&str, &str, &str); 4] = [
    ("⛨", "Protection", "Safeguarding athlete health and well-being through prevention."),
    ("🏅", "Excellence", "Striving for the highest standards in everything we do."),
    ("👥", "Collaboration", "Working together to achieve exceptional results."),
    ("🎯", "Innovation", "Pushing boundaries in sports science and technology."),
];

const HERO_IMAGE: &str = "https://images.unsplash.com/photo-1461896836934-ffe607ba8211?auto=format&fit=crop&q=80";

#[function_component(About)]
pub fn about() -> Html {
    let page_ref = use_node_ref();

    use_scroll_to_top();
    use_scroll_reveal(page_ref.clone());
    use_parallax();

    html! {
        <div class="about" ref={page_ref}>
            <section class="about-hero">
                <img src={HERO_IMAGE} alt="Athletes training" class="about-hero-image parallax" data-rate="0.3" />
                <div class="about-hero-overlay"></div>
                <div class="container about-hero-content">
                    <span class="about-hero-icon animate-float">{"⛨"}</span>
                    <h1 class="animate-float-text">{"About "}<span class="accent">{"InjuryShield"}</span></h1>
                    <p class="muted animate-float-text delay-200">
                        {"We combine sports science, biomechanics and machine learning to keep athletes healthy and performing at their peak."}
                    </p>
                    <a href="#mission" class="scroll-hint animate-float">{"⌄"}</a>
                </div>
            </section>

            <section id="mission" class="section section-dark">
                <div class="container about-mission">
                    <div class="reveal-left">
                        <h2>{"Our Mission"}</h2>
                        <p class="muted">
                            {"Injuries end seasons and careers. Our mission is to give every coach, physio and athlete the insight they need to see risk coming, adjust training early and stay in the game."}
                        </p>
                    </div>
                    <div class="reveal-right">
                        <h2>{"Our Vision"}</h2>
                        <p class="muted">
                            {"A world where injury prevention is proactive, data-driven and available to teams of every size, from grassroots clubs to professional franchises."}
                        </p>
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="container">
                    <div class="grid-4">
                        {
                            ACHIEVEMENTS.iter().map(|(icon, number, label)| html! {
                                <div class="achievement reveal-scale">
                                    <div class="achievement-icon">{*icon}</div>
                                    <div class="achievement-number">{*number}</div>
                                    <div class="muted">{*label}</div>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>

            <section class="section section-dark">
                <div class="container">
                    <h2 class="section-title reveal">{"Our Core Values"}</h2>
                    <div class="grid-4">
                        {
                            CORE_VALUES.iter().map(|(icon, title, description)| html! {
                                <div class="card reveal">
                                    <div class="feature-icon">{*icon}</div>
                                    <h3>{*title}</h3>
                                    <p class="muted">{*description}</p>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="container">
                    <h2 class="section-title reveal">{"Meet Our Team"}</h2>
                    <div class="grid-3">
                        {
                            TEAM.iter().map(|member| html! {
                                <div class="team-card reveal-scale">
                                    <img src={member.image} alt={member.name} class="team-photo" />
                                    <div class="team-body">
                                        <h3>{member.name}</h3>
                                        <p class="accent">{member.role}</p>
                                        <p class="muted">{member.description}</p>
                                        <div class="skills">
                                            {
                                                member.skills.iter().map(|skill| html! {
                                                    <span class="skill">{*skill}</span>
                                                }).collect::<Html>()
                                            }
                                        </div>
                                    </div>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>

            <section class="section section-dark">
                <div class="container cta-box reveal">
                    <h2>{"Join Us in Shaping the Future of Sports"}</h2>
                    <Link<Route> to={Route::Contact} classes="btn-primary">
                        {"Get in Touch →"}
                    </Link<Route>>
                </div>
            </section>

            <style>
                {r#"
                .about-hero {
                    position: relative;
                    min-height: 80vh;
                    display: flex;
                    align-items: center;
                    overflow: hidden;
                }
                .about-hero-image {
                    position: absolute;
                    inset: 0;
                    width: 100%;
                    height: 130%;
                    object-fit: cover;
                    opacity: 0.35;
                }
                .about-hero-overlay {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to bottom, rgba(0, 0, 0, 0.2), #000);
                }
                .about-hero-content { position: relative; z-index: 10; text-align: center; padding-top: 5rem; }
                .about-hero-content h1 { font-size: clamp(2.5rem, 6vw, 4.5rem); }
                .about-hero-content p { font-size: 1.25rem; max-width: 40rem; margin: 0 auto 2rem; }
                .about-hero-icon { font-size: 4rem; color: #ef4444; display: inline-block; }
                .scroll-hint { font-size: 2rem; display: inline-block; }
                .about-mission { display: grid; grid-template-columns: 1fr 1fr; gap: 4rem; }
                .achievement { text-align: center; }
                .achievement-icon { font-size: 2rem; color: #ef4444; }
                .achievement-number { font-size: 2.5rem; font-weight: 700; margin: 0.5rem 0; }
                .team-card { background: #1f2937; border-radius: 0.75rem; overflow: hidden; }
                .team-photo { width: 100%; height: 18rem; object-fit: cover; }
                .team-body { padding: 1.5rem; }
                .skills { display: flex; flex-wrap: wrap; gap: 0.5rem; margin-top: 1rem; }
                .skill { background: #374151; border-radius: 9999px; padding: 0.25rem 0.75rem; font-size: 0.8rem; }
                @media (max-width: 768px) {
                    .about-mission { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </div>
    }
}
