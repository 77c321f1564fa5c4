//! Intro overlay: the muted autoplaying video layer that gates the scene.

use crate::constants::{ID_INTRO_OVERLAY, ID_MAIN_SCENE};
use crate::core::scene::SCENE_FADE_SECS;
use crate::dom;
use web_sys as web;

/// Start the intro video muted. Autoplay policies require the mute before
/// `play()`; a rejected play promise just leaves the poster frame, and the
/// skip control remains the guaranteed path to the main scene.
pub fn start_video(video: &web::HtmlVideoElement) {
    video.set_muted(true);
    match video.play() {
        Ok(promise) => {
            wasm_bindgen_futures::spawn_local(async move {
                if wasm_bindgen_futures::JsFuture::from(promise).await.is_err() {
                    log::warn!("[intro] autoplay rejected; waiting on skip control");
                }
            });
        }
        Err(e) => log::warn!("[intro] video play failed: {e:?}"),
    }
}

/// Cross-fade the intro layer out and the main scene in. Both use the same
/// duration; overlap is fine. The overlay keeps occupying its layer but
/// stops intercepting the pointer.
pub fn fade_to_main(document: &web::Document) {
    let fade = format!("opacity {SCENE_FADE_SECS}s ease");
    if let Ok(intro) = dom::element_by_id(document, ID_INTRO_OVERLAY) {
        dom::set_style(&intro, "transition", &fade);
        dom::set_style(&intro, "opacity", "0");
        dom::set_style(&intro, "pointer-events", "none");
    }
    if let Ok(main) = dom::element_by_id(document, ID_MAIN_SCENE) {
        dom::set_style(&main, "transition", &fade);
        dom::set_style(&main, "opacity", "1");
        dom::set_style(&main, "pointer-events", "auto");
    }
}

pub fn pause_video(document: &web::Document) {
    use wasm_bindgen::JsCast;
    if let Some(el) = document.get_element_by_id(crate::constants::ID_INTRO_VIDEO) {
        if let Ok(video) = el.dyn_into::<web::HtmlVideoElement>() {
            let _ = video.pause();
        }
    }
}
