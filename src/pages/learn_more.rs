use yew::prelude::*;
use yew_router::prelude::*;
use web_sys::MouseEvent;
use crate::Route;
use yew_hooks::prelude::{use_window_scroll, use_window_size};
use crate::animation::hooks::{use_scroll_reveal, use_scroll_to_top};

const FEATURES: [(&str, &str, &str); 3] = [
    ("🧠", "AI-Powered Analysis", "Advanced machine learning algorithms analyze movement patterns in real-time, providing instant feedback and risk assessment."),
    ("⛨", "Injury Prevention", "Proactive monitoring system that identifies potential injury risks before they become serious problems."),
    ("⚡", "Performance Optimization", "Data-driven insights help athletes and teams achieve peak performance through personalized recommendations."),
];

const STEPS: [(&str, &str); 4] = [
    ("Data Collection", "Collect biomechanical data through our non-invasive sensors and existing training equipment."),
    ("AI Analysis", "Our proprietary algorithms analyze movement patterns and identify potential risk factors."),
    ("Risk Assessment", "Receive comprehensive reports highlighting areas of concern and injury risk factors."),
    ("Personalized Recommendations", "Get tailored training modifications and recovery protocols to minimize injury risk."),
];

struct FeatureTab {
    tab: &'static str,
    title: &'static str,
    description: &'static str,
    points: [&'static str; 4],
    placeholder: &'static str,
}

const FEATURE_TABS: [FeatureTab; 3] = [
    FeatureTab {
        tab: "Predictive Analytics",
        title: "Predictive Analytics",
        description: "Our AI-powered predictive analytics identify potential injury risks before they occur, allowing coaches and medical staff to take preventative action.",
        points: [
            "Machine learning algorithms trained on millions of data points",
            "Personalized risk profiles for each athlete",
            "Trend analysis across teams and sports",
            "Early warning system for potential injuries",
        ],
        placeholder: "[Predictive Analytics Dashboard Visualization]",
    },
    FeatureTab {
        tab: "Real-time Monitoring",
        title: "Real-time Monitoring",
        description: "Monitor athlete performance and biomechanics in real-time during training and competition.",
        points: [
            "Live data streaming from wearable sensors",
            "Immediate feedback on movement patterns",
            "Automatic alerts for concerning metrics",
            "Session comparison and progress tracking",
        ],
        placeholder: "[Real-time Monitoring Interface]",
    },
    FeatureTab {
        tab: "Team Dashboards",
        title: "Team Dashboards",
        description: "Comprehensive team dashboards provide coaches and medical staff with a holistic view of team health and performance.",
        points: [
            "Team-wide risk assessment",
            "Customizable views for different staff roles",
            "Historical data and trend analysis",
            "Comparative metrics across positions and players",
        ],
        placeholder: "[Team Dashboard Interface]",
    },
];

struct CaseStudy {
    title: &'static str,
    description: &'static str,
    stats: [(&'static str, &'static str); 3],
}

const CASE_STUDIES: [CaseStudy; 3] = [
    CaseStudy {
        title: "Professional Sports Team",
        description: "Reduced injury rates by 35% and improved player availability by implementing InjuryShield's predictive analytics.",
        stats: [("injuries", "-35%"), ("performance", "+22%"), ("recovery", "-28%")],
    },
    CaseStudy {
        title: "University Athletics Program",
        description: "Integrated InjuryShield across 24 sports teams, resulting in better athlete management and performance outcomes.",
        stats: [("injuries", "-42%"), ("performance", "+18%"), ("recovery", "-33%")],
    },
    CaseStudy {
        title: "Olympic Training Center",
        description: "Used InjuryShield to prepare elite athletes for international competition, optimizing training loads and recovery protocols.",
        stats: [("injuries", "-29%"), ("performance", "+25%"), ("recovery", "-31%")],
    },
];

const TESTIMONIALS: [(&str, &str, &str, usize); 3] = [
    ("InjuryShield has completely transformed how we approach player health and performance. It's now an integral part of our training program.", "Michael Rodriguez", "Head Coach, Professional Soccer Team", 5),
    ("The predictive analytics have helped us reduce injuries by over 40% in just one season. The return on investment has been remarkable.", "Dr. Sarah Chen", "Head of Sports Medicine, University Athletics", 5),
    ("As an athlete, having access to my own data has empowered me to take control of my training and recovery in ways I never thought possible.", "James Wilson", "Professional Basketball Player", 4),
];

const FAQS: [(&str, &str); 5] = [
    ("How does InjuryShield collect data?", "InjuryShield seamlessly integrates with existing wearable technology, force plates, video analysis systems, and other data sources. Our platform is compatible with most industry-standard equipment and can be customized to work with proprietary systems."),
    ("Is InjuryShield suitable for all sports?", "Yes, InjuryShield has been designed to work across all sports. Our adaptive algorithms can be tailored to the specific movements, stresses, and injury patterns common in different sports, from team-based activities to individual performance sports."),
    ("How accurate are the predictive analytics?", "Our predictive models have been validated through extensive research and real-world implementation. In controlled studies, InjuryShield has demonstrated up to 85% accuracy in identifying high-risk movement patterns that correlate with injury occurrence."),
    ("What kind of support does InjuryShield provide?", "We offer comprehensive implementation support, including on-site setup, staff training, and ongoing technical assistance. Our sports science team is also available for consultations on data interpretation and program optimization."),
    ("How quickly can we implement InjuryShield?", "Most organizations can be fully operational with InjuryShield within 2-4 weeks. This includes system integration, staff training, and initial baseline data collection."),
];

fn star_rating(rating: usize) -> String {
    "★".repeat(rating)
}

/// Percentage of the page scrolled so far, clamped to `0..=100`. A page that
/// fits in the viewport counts as fully read.
pub fn scroll_progress(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 {
        return 100.0;
    }
    (scroll_y / scrollable * 100.0).clamp(0.0, 100.0)
}

#[hook]
fn use_scroll_progress() -> f64 {
    let (_, scroll_y) = use_window_scroll();
    let (_, viewport) = use_window_size();
    let document_height = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
        .map(|body| body.scroll_height() as f64)
        .unwrap_or(0.0);
    scroll_progress(scroll_y, document_height, viewport)
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: &'static str,
    answer: &'static str,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    // Only the inner node's class toggles. The wrapper's class attribute
    // never changes, so the observer's `active` class stays put.
    html! {
        <div class="reveal">
            <div class={classes!("faq-item", is_open.then(|| "open"))}>
                <button class="faq-question" onclick={toggle}>
                    <span>{props.question}</span>
                    <span class="accent">{if *is_open { "−" } else { "+" }}</span>
                </button>
                {
                    if *is_open {
                        html! { <div class="faq-answer muted"><p>{props.answer}</p></div> }
                    } else {
                        html! {}
                    }
                }
            </div>
        </div>
    }
}

#[function_component(LearnMore)]
pub fn learn_more() -> Html {
    let page_ref = use_node_ref();
    let active_tab = use_state(|| 0usize);
    let progress = use_scroll_progress();

    use_scroll_to_top();
    use_scroll_reveal(page_ref.clone());

    let tab = &FEATURE_TABS[*active_tab];
    // Circle of radius 16; dash length 100 maps straight to a percentage.
    let dash_offset = 100.0 - progress;

    html! {
        <div class="learn-more" ref={page_ref}>
            <div class="progress-indicator" title={format!("{:.0}% read", progress)}>
                <svg viewBox="0 0 40 40">
                    <circle class="progress-track" r="16" cx="20" cy="20" />
                    <circle class="progress-bar" r="16" cx="20" cy="20" pathLength="100"
                        stroke-dasharray="100" stroke-dashoffset={dash_offset.to_string()} />
                </svg>
            </div>

            <section class="learn-hero">
                <div class="container">
                    <h1 class="animate-float-text">{"Revolutionizing "}<span class="accent">{"Sports Performance"}</span></h1>
                    <p class="muted animate-float-text delay-200">
                        {"Discover how InjuryShield combines cutting-edge technology with sports science to prevent injuries and optimize athletic performance."}
                    </p>
                </div>
            </section>

            <section class="section section-dark">
                <div class="container grid-3">
                    {
                        FEATURES.iter().map(|(icon, title, description)| html! {
                            <div class="card reveal-scale">
                                <div class="feature-icon">{*icon}</div>
                                <h3>{*title}</h3>
                                <p class="muted">{*description}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section class="section">
                <div class="container">
                    <h2 class="section-title reveal">{"How It Works"}</h2>
                    <div class="steps">
                        {
                            STEPS.iter().enumerate().map(|(index, (title, description))| html! {
                                <div class={if index % 2 == 0 { "step reveal-left" } else { "step reveal-right" }}>
                                    <h3><span class="accent">{format!("0{}.", index + 1)}</span>{" "}{*title}</h3>
                                    <p class="muted">{*description}</p>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>

            <section class="section section-dark">
                <div class="container">
                    <h2 class="section-title reveal">{"Platform Features"}</h2>
                    <div class="tabs reveal">
                        {
                            FEATURE_TABS.iter().enumerate().map(|(index, feature)| {
                                let is_active = *active_tab == index;
                                let active_tab = active_tab.clone();
                                let onclick = Callback::from(move |_: MouseEvent| active_tab.set(index));
                                html! {
                                    <button class={classes!("tab", is_active.then(|| "tab-active"))} {onclick}>
                                        {feature.tab}
                                    </button>
                                }
                            }).collect::<Html>()
                        }
                    </div>
                    <div class="tab-panel">
                        <div>
                            <h3>{tab.title}</h3>
                            <p class="muted">{tab.description}</p>
                            <ul class="checklist">
                                { tab.points.iter().map(|point| html! { <li>{"✓ "}{*point}</li> }).collect::<Html>() }
                            </ul>
                        </div>
                        <div class="tab-visual"><span>{tab.placeholder}</span></div>
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="container">
                    <h2 class="section-title reveal">{"Success Stories"}</h2>
                    <div class="grid-3">
                        {
                            CASE_STUDIES.iter().map(|study| html! {
                                <div class="card reveal-scale">
                                    <h3>{"🏅 "}{study.title}</h3>
                                    <p class="muted">{study.description}</p>
                                    <div class="stats">
                                        {
                                            study.stats.iter().map(|(label, value)| html! {
                                                <div class="stat">
                                                    <div class="stat-value accent">{*value}</div>
                                                    <div class="stat-label muted">{*label}</div>
                                                </div>
                                            }).collect::<Html>()
                                        }
                                    </div>
                                </div>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>

            <section class="section section-dark">
                <div class="container">
                    <h2 class="section-title reveal">{"What Our Users Say"}</h2>
                    <div class="grid-3">
                        {
                            TESTIMONIALS.iter().map(|(quote, name, title, rating)| {
                                let stars = star_rating(*rating);
                                html! {
                                <div class="card testimonial reveal">
                                    <p>{*quote}</p>
                                    <div class="testimonial-footer">
                                        <div>
                                            <h4>{*name}</h4>
                                            <p class="muted">{*title}</p>
                                        </div>
                                        <div class="accent">{stars}</div>
                                    </div>
                                </div>
                                }
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </section>

            <section class="section">
                <div class="container faq-list">
                    <h2 class="section-title reveal">{"Frequently Asked Questions"}</h2>
                    {
                        FAQS.iter().map(|(question, answer)| html! {
                            <FaqItem question={*question} answer={*answer} />
                        }).collect::<Html>()
                    }
                </div>
            </section>

            <section class="section section-dark">
                <div class="container cta-box reveal">
                    <h2>{"Ready to Protect Your Athletes?"}</h2>
                    <p class="muted">{"Talk to our team about bringing InjuryShield to your organization."}</p>
                    <Link<Route> to={Route::Contact} classes="btn-primary">
                        {"Contact Us →"}
                    </Link<Route>>
                </div>
            </section>

            <style>
                {r#"
                .learn-more { padding-top: 5rem; overflow: hidden; }
                .learn-hero { padding: 5rem 0; text-align: center; }
                .learn-hero h1 { font-size: clamp(2.5rem, 6vw, 4.5rem); }
                .learn-hero p { font-size: 1.25rem; max-width: 42rem; margin: 0 auto; }
                .progress-indicator {
                    position: fixed;
                    bottom: 2rem;
                    left: 2rem;
                    z-index: 40;
                    width: 3rem;
                    height: 3rem;
                    background: rgba(31, 41, 55, 0.8);
                    border-radius: 9999px;
                    padding: 0.25rem;
                }
                .progress-indicator svg { transform: rotate(-90deg); }
                .progress-track { fill: transparent; stroke: #374151; stroke-width: 2; }
                .progress-bar { fill: transparent; stroke: #ef4444; stroke-width: 2; stroke-linecap: round; }
                .steps { display: grid; gap: 2rem; max-width: 48rem; margin: 0 auto; }
                .tabs { display: flex; justify-content: center; gap: 1rem; margin-bottom: 2rem; flex-wrap: wrap; }
                .tab { background: #374151; color: #fff; border: none; border-radius: 9999px; padding: 0.75rem 1.5rem; cursor: pointer; }
                .tab-active { background: #ef4444; }
                .tab-panel {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 2rem;
                    align-items: center;
                    background: rgba(255, 255, 255, 0.05);
                    border-radius: 0.75rem;
                    padding: 2rem;
                }
                .checklist { list-style: none; padding: 0; line-height: 2; color: #d1d5db; }
                .tab-visual {
                    aspect-ratio: 16 / 9;
                    background: linear-gradient(135deg, #1f2937, #000);
                    border-radius: 0.75rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-family: monospace;
                    color: rgba(255, 255, 255, 0.3);
                }
                .stats { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1rem; text-align: center; }
                .stat-value { font-size: 1.25rem; font-weight: 700; }
                .stat-label { font-size: 0.75rem; text-transform: capitalize; }
                .testimonial-footer { display: flex; justify-content: space-between; align-items: flex-end; }
                .faq-list { max-width: 48rem; }
                .faq-item { background: rgba(255, 255, 255, 0.05); border-radius: 0.75rem; margin-bottom: 1.5rem; }
                .faq-question {
                    width: 100%;
                    background: none;
                    border: none;
                    color: #fff;
                    padding: 1.5rem;
                    display: flex;
                    justify-content: space-between;
                    font-size: 1rem;
                    cursor: pointer;
                    text-align: left;
                }
                .faq-answer { padding: 0 1.5rem 1.5rem; }
                @media (max-width: 768px) {
                    .tab-panel { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::{scroll_progress, star_rating};

    #[test]
    fn ratings_render_as_stars() {
        assert_eq!(star_rating(4), "★★★★");
        assert_eq!(star_rating(0), "");
    }

    #[test]
    fn progress_is_a_clamped_percentage() {
        assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(1000.0, 3000.0, 1000.0), 50.0);
        assert_eq!(scroll_progress(2500.0, 3000.0, 1000.0), 100.0);
    }

    #[test]
    fn short_page_counts_as_read() {
        assert_eq!(scroll_progress(0.0, 800.0, 1000.0), 100.0);
    }
}
