use std::cell::Cell;
use std::rc::Rc;

use yew::prelude::*;
use web_sys::{Blob, File, HtmlInputElement, HtmlVideoElement};
use wasm_bindgen_futures::spawn_local;
use gloo_timers::callback::Interval;
use log::{info, warn};

use crate::analysis::{RiskAnalysis, RECOMMENDATIONS, TICK_MS};
use crate::animation::hooks::use_scroll_to_top;
use crate::media::{self, ObjectUrl, Recorder, RECORDING_FILENAME};

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Live,
    Upload,
}

enum AnalysisAction {
    Start,
    Tick(f64),
    Clear,
}

#[derive(Debug, Default, PartialEq)]
struct AnalysisState(RiskAnalysis);

impl Reducible for AnalysisState {
    type Action = AnalysisAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = self.0.clone();
        match action {
            AnalysisAction::Start => next.start(),
            AnalysisAction::Tick(unit) => {
                if next.advance(unit) {
                    info!("Mock analysis finished");
                }
            }
            AnalysisAction::Clear => next.clear(),
        }
        Rc::new(Self(next))
    }
}

/// The mock analysis plus a callback that (re)starts it. The ticker stops on
/// its own once the run completes or is cleared.
#[hook]
fn use_risk_analysis() -> (UseReducerHandle<AnalysisState>, Callback<()>) {
    let analysis = use_reducer(AnalysisState::default);
    let ticker = use_mut_ref(|| None::<Interval>);

    let start = {
        let dispatcher = analysis.dispatcher();
        let ticker = ticker.clone();
        Callback::from(move |_| {
            dispatcher.dispatch(AnalysisAction::Start);
            let dispatcher = dispatcher.clone();
            // Replacing the handle cancels any previous run.
            *ticker.borrow_mut() = Some(Interval::new(TICK_MS, move || {
                dispatcher.dispatch(AnalysisAction::Tick(js_sys::Math::random()));
            }));
        })
    };

    use_effect_with_deps(
        move |in_progress| {
            if !*in_progress {
                ticker.borrow_mut().take();
            }
            || ()
        },
        analysis.0.in_progress(),
    );

    (analysis, start)
}

#[function_component(PerformanceAnalysis)]
pub fn performance_analysis() -> Html {
    let active_tab = use_state(|| Tab::Live);
    let (analysis, start_analysis) = use_risk_analysis();

    let video_ref = use_node_ref();
    let stream = use_mut_ref(|| None::<web_sys::MediaStream>);
    let camera_error = use_state(|| None::<String>);
    let recorder = use_mut_ref(|| None::<Recorder>);
    let chunks = use_mut_ref(Vec::<Blob>::new);
    let chunk_count = use_state(|| 0usize);
    let is_recording = use_state(|| false);
    let uploaded = use_state(|| None::<ObjectUrl>);

    use_scroll_to_top();

    // Camera lives only while the live tab is showing.
    {
        let video_ref = video_ref.clone();
        let stream = stream.clone();
        let camera_error = camera_error.clone();
        let recorder = recorder.clone();
        let is_recording = is_recording.clone();
        use_effect_with_deps(
            move |tab| {
                let cancelled = Rc::new(Cell::new(false));
                if *tab == Tab::Live {
                    let cancelled = cancelled.clone();
                    let stream = stream.clone();
                    spawn_local(async move {
                        match media::open_camera().await {
                            Ok(opened) => {
                                if cancelled.get() {
                                    media::close_camera(&opened);
                                    return;
                                }
                                if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                                    video.set_src_object(Some(&opened));
                                }
                                *stream.borrow_mut() = Some(opened);
                                camera_error.set(None);
                            }
                            Err(e) => {
                                gloo_console::error!("Error accessing camera:", e.to_string());
                                camera_error.set(Some(e.to_string()));
                            }
                        }
                    });
                }
                move || {
                    cancelled.set(true);
                    if recorder.borrow_mut().take().is_some() {
                        is_recording.set(false);
                    }
                    if let Some(opened) = stream.borrow_mut().take() {
                        media::close_camera(&opened);
                    }
                }
            },
            *active_tab,
        );
    }

    let select_tab = |tab: Tab| {
        let active_tab = active_tab.clone();
        Callback::from(move |_: MouseEvent| active_tab.set(tab))
    };

    let on_record_toggle = {
        let stream = stream.clone();
        let recorder = recorder.clone();
        let chunks = chunks.clone();
        let chunk_count = chunk_count.clone();
        let is_recording = is_recording.clone();
        let start_analysis = start_analysis.clone();
        Callback::from(move |_: MouseEvent| {
            if *is_recording {
                if let Some(active) = recorder.borrow().as_ref() {
                    if let Err(e) = active.stop() {
                        warn!("{}", e);
                    }
                }
                is_recording.set(false);
                return;
            }

            let Some(opened) = stream.borrow().clone() else {
                return;
            };
            chunks.borrow_mut().clear();
            chunk_count.set(0);

            let on_stop = {
                let chunks = chunks.clone();
                let chunk_count = chunk_count.clone();
                let start_analysis = start_analysis.clone();
                move || {
                    chunk_count.set(chunks.borrow().len());
                    start_analysis.emit(());
                }
            };
            match Recorder::start(&opened, chunks.clone(), on_stop) {
                Ok(started) => {
                    *recorder.borrow_mut() = Some(started);
                    is_recording.set(true);
                }
                Err(e) => warn!("{}", e),
            }
        })
    };

    let accept_file = {
        let uploaded = uploaded.clone();
        let start_analysis = start_analysis.clone();
        Callback::from(move |file: File| match ObjectUrl::for_file(&file) {
            Ok(url) => {
                info!("Analysing upload {}", url.name());
                uploaded.set(Some(url));
                start_analysis.emit(());
            }
            Err(e) => warn!("{}", e),
        })
    };

    let on_file_change = {
        let accept_file = accept_file.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                accept_file.emit(file);
            }
        })
    };

    let on_drop = Callback::from(move |e: DragEvent| {
        e.prevent_default();
        if let Some(file) = e
            .data_transfer()
            .and_then(|transfer| transfer.files())
            .and_then(|files| files.get(0))
        {
            accept_file.emit(file);
        }
    });

    let prevent_drag_default = Callback::from(|e: DragEvent| e.prevent_default());

    let on_clear_upload = {
        let uploaded = uploaded.clone();
        let analysis = analysis.clone();
        Callback::from(move |_: MouseEvent| {
            uploaded.set(None);
            analysis.dispatch(AnalysisAction::Clear);
        })
    };

    let can_download = *chunk_count > 0 || uploaded.is_some();
    let on_download = {
        let chunks = chunks.clone();
        Callback::from(move |_: MouseEvent| {
            let chunks = chunks.borrow();
            if chunks.is_empty() {
                return;
            }
            if let Err(e) = media::download_chunks(&chunks, RECORDING_FILENAME) {
                warn!("{}", e);
            }
        })
    };

    let state = &analysis.0;
    let tab_class = |tab: Tab| classes!("tab-button", (*active_tab == tab).then(|| "tab-button-active"));

    let left_panel = match *active_tab {
        Tab::Live => html! {
            <div class="live-view">
                <video ref={video_ref} class="camera" autoplay=true muted=true playsinline=true />
                {
                    if let Some(error) = &*camera_error {
                        html! { <p class="camera-error">{format!("Camera not available ({})", error)}</p> }
                    } else {
                        html! {}
                    }
                }
                <div class="record-controls">
                    <button class={classes!("record-button", is_recording.then(|| "recording"))}
                        onclick={on_record_toggle}>
                        { if *is_recording { "■" } else { "▶" } }
                    </button>
                </div>
            </div>
        },
        Tab::Upload => html! {
            <div class="drop-zone" ondrop={on_drop}
                ondragover={prevent_drag_default.clone()} ondragenter={prevent_drag_default}>
                {
                    if let Some(video) = &*uploaded {
                        html! {
                            <div class="upload-preview">
                                <video src={video.url().to_string()} controls=true />
                                <button class="clear-upload" onclick={on_clear_upload}>{"🗑"}</button>
                            </div>
                        }
                    } else {
                        html! {
                            <>
                                <div class="upload-icon">{"⇪"}</div>
                                <p class="muted">{"Drag and drop your video here or"}</p>
                                <label class="browse-button">
                                    {"Browse Files"}
                                    <input type="file" class="hidden" accept="video/*" onchange={on_file_change} />
                                </label>
                            </>
                        }
                    }
                }
            </div>
        },
    };

    html! {
        <div class="analysis-page">
            <div class="container">
                <div class="analysis-header">
                    <h1>{"Performance Analysis"}</h1>
                    <div class="tab-row">
                        <button class={tab_class(Tab::Live)} onclick={select_tab(Tab::Live)}>
                            {"📷 Live AI Motion Analysis"}
                        </button>
                        <button class={tab_class(Tab::Upload)} onclick={select_tab(Tab::Upload)}>
                            {"🖼 Uploaded Media Analysis"}
                        </button>
                    </div>
                </div>

                <div class="analysis-grid">
                    <div class="panel">{ left_panel }</div>

                    <div class="panel">
                        <h2>{"Analysis Results"}</h2>
                        <p class="muted status">{"ⓘ "}{state.status_label()}</p>

                        <div class="score-row">
                            <span>{"Injury Risk Score"}</span>
                            <span class="score accent">{format!("{}%", state.display_score())}</span>
                        </div>
                        <div class="score-track">
                            <div class="score-fill" style={format!("width: {}%;", state.score())}></div>
                        </div>

                        <div class="result-box">
                            <h3>{"Movement Analysis"}</h3>
                            {
                                if state.feedback().is_empty() {
                                    html! { <p class="muted">{"Start recording or upload a video to begin analysis"}</p> }
                                } else {
                                    state.feedback().iter().map(|line| html! {
                                        <p class="bullet">{*line}</p>
                                    }).collect::<Html>()
                                }
                            }
                        </div>

                        <div class="result-box">
                            <h3>{"Recommendations"}</h3>
                            <ul>
                                { RECOMMENDATIONS.iter().map(|line| html! { <li class="bullet">{*line}</li> }).collect::<Html>() }
                            </ul>
                        </div>

                        <button class="download-button" disabled={!can_download} onclick={on_download}>
                            {"⤓ Download Analysis Report"}
                        </button>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .analysis-page { min-height: 100vh; background: #111827; padding: 6rem 0 3rem; }
                .analysis-header h1 { font-size: 2.25rem; margin-bottom: 1rem; }
                .tab-row { display: flex; gap: 1rem; margin-bottom: 2rem; flex-wrap: wrap; }
                .tab-button {
                    background: #374151;
                    color: #fff;
                    border: none;
                    border-radius: 0.5rem;
                    padding: 0.75rem 1.5rem;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }
                .tab-button:hover { background: #4b5563; transform: scale(1.05); }
                .tab-button-active, .tab-button-active:hover { background: #ef4444; transform: none; }
                .analysis-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 2rem; }
                .panel { background: #1f2937; border-radius: 0.75rem; padding: 1.5rem; }
                .live-view { position: relative; }
                .camera { width: 100%; border-radius: 0.5rem; transform: scaleX(-1); background: #000; min-height: 240px; }
                .camera-error { color: #fca5a5; font-size: 0.875rem; }
                .record-controls { position: absolute; bottom: 1rem; left: 50%; transform: translateX(-50%); }
                .record-button {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 9999px;
                    border: none;
                    background: #fff;
                    color: #000;
                    cursor: pointer;
                }
                .record-button.recording { background: #ef4444; transform: scale(1.05); }
                .drop-zone {
                    border: 2px dashed #4b5563;
                    border-radius: 0.5rem;
                    padding: 2rem;
                    min-height: 300px;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                }
                .upload-icon { font-size: 3rem; color: #9ca3af; }
                .upload-preview { position: relative; width: 100%; }
                .upload-preview video { width: 100%; border-radius: 0.5rem; }
                .clear-upload {
                    position: absolute;
                    top: 0.5rem;
                    right: 0.5rem;
                    background: #ef4444;
                    border: none;
                    border-radius: 9999px;
                    padding: 0.5rem;
                    cursor: pointer;
                }
                .browse-button { background: #ef4444; padding: 0.75rem 1.5rem; border-radius: 0.5rem; cursor: pointer; }
                .hidden { display: none; }
                .status { font-size: 0.875rem; }
                .score-row { display: flex; justify-content: space-between; align-items: center; margin: 1.5rem 0 0.5rem; }
                .score { font-size: 1.5rem; font-weight: 700; }
                .score-track { height: 0.5rem; background: #374151; border-radius: 9999px; overflow: hidden; margin-bottom: 2rem; }
                .score-fill { height: 100%; background: #ef4444; transition: width 0.3s ease; }
                .result-box { background: #374151; border-radius: 0.5rem; padding: 1rem; margin-bottom: 1rem; font-size: 0.875rem; }
                .result-box ul { list-style: none; padding: 0; }
                .download-button {
                    width: 100%;
                    margin-top: 1.5rem;
                    padding: 0.75rem;
                    border: none;
                    border-radius: 0.5rem;
                    background: #ef4444;
                    color: #fff;
                    cursor: pointer;
                }
                .download-button:disabled { background: #374151; cursor: not-allowed; }
                @media (max-width: 768px) {
                    .analysis-grid { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: AnalysisState, action: AnalysisAction) -> Rc<AnalysisState> {
        Rc::new(state).reduce(action)
    }

    #[test]
    fn reducer_runs_a_full_analysis() {
        let mut state = reduce(AnalysisState::default(), AnalysisAction::Start);
        assert!(state.0.in_progress());

        for _ in 0..20 {
            state = state.reduce(AnalysisAction::Tick(1.0));
        }
        assert!(!state.0.in_progress());
        assert_eq!(state.0.display_score(), 100);
        assert_eq!(state.0.feedback().len(), 4);

        let cleared = state.reduce(AnalysisAction::Clear);
        assert_eq!(*cleared, AnalysisState::default());
    }
}
