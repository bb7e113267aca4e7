//! Share text, social intent links and the downloadable grid image.

mod image;

pub use image::{copy_to_clipboard, download_grid_image, grid_svg};

use crate::core::config::SITE_URL;

/// Sentence posted alongside the shared image.
pub fn share_text(progress_percent: u32) -> String {
    format!(
        "I've lived {progress_percent}% of my life according to Life Visualizer. Check out your own life progress!"
    )
}

/// Page being shared: the current location on web, the public site elsewhere.
pub fn share_url() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.location().href().ok())
            .unwrap_or_else(|| SITE_URL.to_string())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        SITE_URL.to_string()
    }
}

pub fn x_intent_url(text: &str, url: &str) -> String {
    format!(
        "https://twitter.com/intent/tweet?text={}&url={}",
        urlencoding::encode(text),
        urlencoding::encode(url)
    )
}

pub fn whatsapp_url(text: &str, url: &str) -> String {
    format!("https://wa.me/?text={}", urlencoding::encode(&format!("{text} {url}")))
}
