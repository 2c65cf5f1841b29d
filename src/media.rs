//! Thin wrappers over the browser's camera, recorder and blob APIs used by the
//! performance analysis page. The captured media is never inspected.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use thiserror::Error;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Blob, BlobEvent, BlobPropertyBag, File, HtmlAnchorElement, MediaRecorder,
    MediaRecorderOptions, MediaStream, MediaStreamConstraints, MediaStreamTrack, Url,
};

pub const RECORDING_MIME: &str = "video/webm";
pub const RECORDING_FILENAME: &str = "performance-analysis.webm";

#[derive(Debug, Error)]
pub enum MediaError {
    #[error("no browser window")]
    NoWindow,
    #[error("camera unavailable: {0}")]
    Camera(String),
    #[error("recorder failed: {0}")]
    Recorder(String),
    #[error("blob handling failed: {0}")]
    Blob(String),
}

fn describe(value: JsValue) -> String {
    value
        .as_string()
        .or_else(|| value.dyn_ref::<js_sys::Error>().map(|e| String::from(e.message())))
        .unwrap_or_else(|| format!("{:?}", value))
}

/// Asks for a video-only camera stream.
pub async fn open_camera() -> Result<MediaStream, MediaError> {
    let window = web_sys::window().ok_or(MediaError::NoWindow)?;
    let devices = window
        .navigator()
        .media_devices()
        .map_err(|e| MediaError::Camera(describe(e)))?;

    let constraints = MediaStreamConstraints::new();
    constraints.set_video(&JsValue::TRUE);
    constraints.set_audio(&JsValue::FALSE);

    let promise = devices
        .get_user_media_with_constraints(&constraints)
        .map_err(|e| MediaError::Camera(describe(e)))?;
    let stream = JsFuture::from(promise)
        .await
        .map_err(|e| MediaError::Camera(describe(e)))?;
    stream
        .dyn_into::<MediaStream>()
        .map_err(|e| MediaError::Camera(describe(e)))
}

pub fn close_camera(stream: &MediaStream) {
    for track in stream.get_tracks().iter() {
        if let Ok(track) = track.dyn_into::<MediaStreamTrack>() {
            track.stop();
        }
    }
}

/// A running `MediaRecorder`. Chunks accumulate in `chunks`; `on_stop` runs
/// once the recorder has flushed its last chunk.
pub struct Recorder {
    recorder: MediaRecorder,
    _on_data: Closure<dyn FnMut(BlobEvent)>,
    _on_stop: Closure<dyn FnMut()>,
}

impl Recorder {
    pub fn start(
        stream: &MediaStream,
        chunks: Rc<RefCell<Vec<Blob>>>,
        on_stop: impl FnMut() + 'static,
    ) -> Result<Self, MediaError> {
        let options = MediaRecorderOptions::new();
        options.set_mime_type(RECORDING_MIME);
        let recorder =
            MediaRecorder::new_with_media_stream_and_media_recorder_options(stream, &options)
                .map_err(|e| MediaError::Recorder(describe(e)))?;

        let on_data = Closure::<dyn FnMut(BlobEvent)>::new(move |event: BlobEvent| {
            if let Some(data) = event.data() {
                if data.size() > 0.0 {
                    chunks.borrow_mut().push(data);
                }
            }
        });
        let on_stop = Closure::<dyn FnMut()>::new(on_stop);

        recorder.set_ondataavailable(Some(on_data.as_ref().unchecked_ref()));
        recorder.set_onstop(Some(on_stop.as_ref().unchecked_ref()));
        recorder
            .start()
            .map_err(|e| MediaError::Recorder(describe(e)))?;

        Ok(Self {
            recorder,
            _on_data: on_data,
            _on_stop: on_stop,
        })
    }

    pub fn stop(&self) -> Result<(), MediaError> {
        self.recorder
            .stop()
            .map_err(|e| MediaError::Recorder(describe(e)))
    }
}

impl Drop for Recorder {
    fn drop(&mut self) {
        // The handlers die with us, so the browser must stop calling them first.
        self.recorder.set_ondataavailable(None);
        self.recorder.set_onstop(None);
        let _ = self.recorder.stop();
    }
}

/// An object URL for a local file, revoked when dropped.
#[derive(Debug, PartialEq)]
pub struct ObjectUrl {
    url: String,
    name: String,
}

impl ObjectUrl {
    pub fn for_file(file: &File) -> Result<Self, MediaError> {
        let url = Url::create_object_url_with_blob(file).map_err(|e| MediaError::Blob(describe(e)))?;
        Ok(Self {
            url,
            name: file.name(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Drop for ObjectUrl {
    fn drop(&mut self) {
        let _ = Url::revoke_object_url(&self.url);
    }
}

/// Joins the chunks into one blob and hands it to the browser as a download.
pub fn download_chunks(chunks: &[Blob], filename: &str) -> Result<(), MediaError> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or(MediaError::NoWindow)?;
    let body = document.body().ok_or(MediaError::NoWindow)?;

    let parts: Array = chunks.iter().collect();
    let options = BlobPropertyBag::new();
    options.set_type(RECORDING_MIME);
    let blob = Blob::new_with_blob_sequence_and_options(&parts, &options)
        .map_err(|e| MediaError::Blob(describe(e)))?;
    let url = Url::create_object_url_with_blob(&blob).map_err(|e| MediaError::Blob(describe(e)))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| MediaError::Blob(describe(e)))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| MediaError::Blob(describe(e.into())))?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    let _ = anchor.style().set_property("display", "none");

    let _ = body.append_child(&anchor);
    anchor.click();
    let _ = body.remove_child(&anchor);
    let _ = Url::revoke_object_url(&url);
    Ok(())
}
