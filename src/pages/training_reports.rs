use yew::prelude::*;
use web_sys::HtmlInputElement;
use log::info;

use crate::animation::hooks::use_scroll_to_top;
use crate::reports::{
    filter_reports, ExpandedSections, Report, ReportSection, ViewMode, MOCK_REPORTS,
};

/// Card previews show only the first few insights.
const PREVIEW_INSIGHTS: usize = 2;

fn risk_badge(report: &Report) -> Html {
    let level = report.risk_level;
    html! {
        <span class={classes!("risk-badge", level.color_class())}>
            {level.icon()}{" "}{format!("{} Risk", level.label())}
        </span>
    }
}

fn placeholder(caption: &str, text: &str) -> Html {
    html! {
        <div class="section-body">
            <div class="placeholder-visual"><p class="muted">{caption.to_string()}</p></div>
            <p>{text.to_string()}</p>
        </div>
    }
}

fn section_body(section: ReportSection, report: &Report) -> Html {
    let bullets = |lines: &[&str]| {
        lines
            .iter()
            .map(|line| html! { <li><span class="accent">{"• "}</span>{line.to_string()}</li> })
            .collect::<Html>()
    };
    match section {
        ReportSection::Summary => html! {
            <div class="section-body">
                <h4>{"Key Insights"}</h4>
                <ul>{ bullets(report.insights) }</ul>
                <h4>{"Recommendations"}</h4>
                <ul>{ bullets(report.recommendations) }</ul>
            </div>
        },
        ReportSection::Movement => placeholder(
            "Movement analysis visualization",
            "Detailed movement analysis and comparison data will be displayed here.",
        ),
        ReportSection::Risk => placeholder(
            "Risk assessment heat maps",
            "Comprehensive risk assessment data and visualizations will be shown here.",
        ),
        ReportSection::History => placeholder(
            "Historical performance graphs",
            "Trend analysis and historical performance data will be displayed here.",
        ),
    }
}

#[derive(Properties, PartialEq)]
struct ReportModalProps {
    report: Report,
    on_close: Callback<()>,
}

#[function_component(ReportModal)]
fn report_modal(props: &ReportModalProps) -> Html {
    let expanded = use_state(ExpandedSections::default);
    let report = &props.report;

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let stop_propagation = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="modal-backdrop" onclick={close.clone()}>
            <div class="modal" onclick={stop_propagation}>
                <div class="modal-header">
                    <div class="modal-athlete">
                        <img src={report.athlete_photo} alt={report.athlete_name} class="avatar" />
                        <div>
                            <h2>{report.athlete_name}</h2>
                            <p class="muted">{report.session_type}</p>
                        </div>
                    </div>
                    <button class="modal-close" onclick={close}>{"✕"}</button>
                </div>
                <div class="modal-meta">
                    <span>{"📅 "}{report.display_date()}</span>
                    { risk_badge(report) }
                </div>

                <div class="modal-sections">
                    {
                        ReportSection::ALL.iter().map(|&section| {
                            let is_open = expanded.is_open(section);
                            let on_toggle = {
                                let expanded = expanded.clone();
                                Callback::from(move |_: MouseEvent| {
                                    let mut next = (*expanded).clone();
                                    next.toggle(section);
                                    expanded.set(next);
                                })
                            };
                            html! {
                                <div class="report-section">
                                    <button class="section-toggle" onclick={on_toggle}>
                                        <h3>{section.title()}</h3>
                                        <span>{ if is_open { "▲" } else { "▼" } }</span>
                                    </button>
                                    { if is_open { section_body(section, report) } else { html! {} } }
                                </div>
                            }
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </div>
    }
}

#[function_component(TrainingReports)]
pub fn training_reports() -> Html {
    let view_mode = use_state(|| ViewMode::Grid);
    let search_term = use_state(String::new);
    let selected = use_state(|| None::<Report>);

    use_scroll_to_top();

    let on_search = {
        let search_term = search_term.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            search_term.set(input.value());
        })
    };

    let set_view = |mode: ViewMode| {
        let view_mode = view_mode.clone();
        Callback::from(move |_: MouseEvent| view_mode.set(mode))
    };

    let on_close = {
        let selected = selected.clone();
        Callback::from(move |_| selected.set(None))
    };

    let visible = filter_reports(MOCK_REPORTS, &search_term);
    let layout_class = match *view_mode {
        ViewMode::Grid => "reports-grid",
        ViewMode::List => "reports-list",
    };
    let toggle_class = |mode: ViewMode| classes!("view-toggle", (*view_mode == mode).then(|| "view-toggle-active"));

    html! {
        <div class="reports-page">
            <div class="container">
                <div class="reports-header">
                    <h1>{"Training Reports"}</h1>
                    <p class="muted">{"Comprehensive analysis and insights for athlete performance monitoring"}</p>
                </div>

                <div class="reports-controls">
                    <input type="text" class="reports-search" placeholder="🔍 Search reports..."
                        value={(*search_term).clone()} oninput={on_search} />
                    <div class="view-toggles">
                        <button class={toggle_class(ViewMode::Grid)} onclick={set_view(ViewMode::Grid)}>{"▦"}</button>
                        <button class={toggle_class(ViewMode::List)} onclick={set_view(ViewMode::List)}>{"☰"}</button>
                    </div>
                </div>

                {
                    if visible.is_empty() {
                        html! { <p class="muted no-results">{format!("No reports match \"{}\"", search_term.trim())}</p> }
                    } else {
                        html! {
                            <div class={layout_class}>
                                {
                                    visible.into_iter().map(|report| {
                                        let on_open = {
                                            let selected = selected.clone();
                                            let report = report.clone();
                                            Callback::from(move |_: MouseEvent| {
                                                info!("Opening report {}", report.id);
                                                selected.set(Some(report.clone()));
                                            })
                                        };
                                        html! {
                                            <div class="report-card" key={report.id} onclick={on_open}>
                                                <div class="report-photo">
                                                    <img src={report.athlete_photo} alt={report.athlete_name} />
                                                    <div class="report-photo-shade"></div>
                                                    <div class="report-photo-caption">
                                                        <h3>{report.athlete_name}</h3>
                                                        <div class="report-photo-meta">
                                                            <span>{"📅 "}{report.display_date()}</span>
                                                            { risk_badge(report) }
                                                        </div>
                                                    </div>
                                                </div>
                                                <div class="report-body">
                                                    <p class="muted">{"⚡ "}{report.session_type}</p>
                                                    {
                                                        report.insights.iter().take(PREVIEW_INSIGHTS).map(|insight| html! {
                                                            <p class="insight">{"• "}{*insight}</p>
                                                        }).collect::<Html>()
                                                    }
                                                </div>
                                            </div>
                                        }
                                    }).collect::<Html>()
                                }
                            </div>
                        }
                    }
                }
            </div>

            {
                if let Some(report) = &*selected {
                    html! { <ReportModal key={report.id} report={report.clone()} on_close={on_close} /> }
                } else {
                    html! {}
                }
            }

            <style>
                {r#"
                .reports-page { min-height: 100vh; background: #111827; padding: 5rem 0 3rem; }
                .reports-header { padding: 2rem 0; }
                .reports-header h1 { font-size: 2.25rem; margin-bottom: 1rem; }
                .reports-controls {
                    background: #1f2937;
                    border-radius: 0.75rem;
                    padding: 1.5rem;
                    margin-bottom: 2rem;
                    display: flex;
                    gap: 1rem;
                    align-items: center;
                    justify-content: space-between;
                }
                .reports-search {
                    flex: 1;
                    background: #374151;
                    color: #fff;
                    border: none;
                    border-radius: 0.5rem;
                    padding: 0.5rem 1rem;
                }
                .reports-search:focus { outline: 2px solid #ef4444; }
                .view-toggles { display: flex; background: #374151; border-radius: 0.5rem; overflow: hidden; }
                .view-toggle { background: transparent; color: #fff; border: none; padding: 0.5rem 0.75rem; cursor: pointer; }
                .view-toggle:hover { background: #4b5563; }
                .view-toggle-active, .view-toggle-active:hover { background: #ef4444; }
                .reports-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1.5rem; }
                .reports-list { display: grid; grid-template-columns: 1fr; gap: 1.5rem; }
                .no-results { text-align: center; padding: 3rem 0; }
                .report-card {
                    background: #1f2937;
                    border-radius: 0.75rem;
                    overflow: hidden;
                    cursor: pointer;
                    transition: background 0.3s ease;
                }
                .report-card:hover { background: #374151; }
                .report-photo { position: relative; height: 12rem; }
                .report-photo img { width: 100%; height: 100%; object-fit: cover; }
                .report-photo-shade { position: absolute; inset: 0; background: linear-gradient(to top, rgba(0, 0, 0, 0.7), transparent); }
                .report-photo-caption { position: absolute; left: 1rem; right: 1rem; bottom: 1rem; }
                .report-photo-meta { display: flex; justify-content: space-between; font-size: 0.875rem; color: #d1d5db; }
                .report-body { padding: 1rem; font-size: 0.875rem; }
                .insight { color: #d1d5db; margin: 0.5rem 0 0; }
                .risk-low { color: #22c55e; }
                .risk-medium { color: #eab308; }
                .risk-high { color: #ef4444; }
                .modal-backdrop {
                    position: fixed;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.5);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    z-index: 50;
                    padding: 1rem;
                }
                .modal {
                    background: #1f2937;
                    border-radius: 0.75rem;
                    width: 100%;
                    max-width: 56rem;
                    max-height: 90vh;
                    overflow-y: auto;
                }
                .modal-header { display: flex; justify-content: space-between; align-items: center; padding: 1.5rem 1.5rem 0.5rem; }
                .modal-athlete { display: flex; gap: 1rem; align-items: center; }
                .avatar { width: 4rem; height: 4rem; border-radius: 9999px; object-fit: cover; }
                .modal-close { background: none; border: none; color: #9ca3af; font-size: 1.5rem; cursor: pointer; }
                .modal-close:hover { color: #fff; }
                .modal-meta { display: flex; gap: 1.5rem; padding: 0 1.5rem 1.5rem; border-bottom: 1px solid #374151; }
                .modal-sections { padding: 1.5rem; }
                .report-section { margin-bottom: 1.5rem; }
                .section-toggle {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    background: none;
                    border: none;
                    color: #fff;
                    cursor: pointer;
                }
                .section-body { background: #374151; border-radius: 0.75rem; padding: 1.5rem; margin-top: 1rem; }
                .section-body ul { list-style: none; padding: 0; }
                .placeholder-visual {
                    aspect-ratio: 16 / 9;
                    background: #1f2937;
                    border-radius: 0.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    margin-bottom: 1rem;
                }
                @media (max-width: 1024px) {
                    .reports-grid { grid-template-columns: repeat(2, 1fr); }
                }
                @media (max-width: 768px) {
                    .reports-grid { grid-template-columns: 1fr; }
                    .reports-controls { flex-direction: column; }
                }
                "#}
            </style>
        </div>
    }
}
