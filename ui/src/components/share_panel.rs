use dioxus::prelude::*;

#[cfg(target_arch = "wasm32")]
use crate::core::platform;
use crate::core::cells::build_cells;
use crate::core::events::LifeEvents;
use crate::core::layout::solve;
use crate::core::profile::Profile;
use crate::core::temporal::{derive_snapshot, today};
use crate::share::{
    copy_to_clipboard, download_grid_image, grid_svg, share_text, share_url, whatsapp_url,
    x_intent_url,
};
use crate::t;

#[derive(Clone, Debug, PartialEq)]
enum ShareStatus {
    Idle,
    Working,
    Done(String),
    Error(String),
}

/// Offscreen render size for the downloadable image.
const IMAGE_WIDTH: f64 = 1200.0;
const IMAGE_HEIGHT: f64 = 900.0;

fn render_svg(profile: &Profile) -> String {
    let snapshot = derive_snapshot(profile, today());
    let geometry = solve(snapshot.total_months, IMAGE_WIDTH, IMAGE_HEIGHT);
    let cells = build_cells(&snapshot, &LifeEvents::milestones());
    grid_svg(&geometry, &cells)
}

#[component]
pub fn SharePanel(profile: Profile, on_close: EventHandler<()>) -> Element {
    let progress = derive_snapshot(&profile, today()).display_progress_percent();
    let text = share_text(progress);
    let url = share_url();
    let x_link = x_intent_url(&text, &url);
    let whatsapp_link = whatsapp_url(&text, &url);

    let status = use_signal(|| ShareStatus::Idle);

    let feedback = match &status() {
        ShareStatus::Idle => None,
        ShareStatus::Working => Some(("share-panel__status".to_string(), t!("share-working"))),
        ShareStatus::Done(message) => Some((
            "share-panel__status share-panel__status--success".to_string(),
            message.clone(),
        )),
        ShareStatus::Error(err) => Some((
            "share-panel__status share-panel__status--error".to_string(),
            err.clone(),
        )),
    };
    let busy = status() == ShareStatus::Working;

    let download_handler = {
        let profile = profile.clone();
        let mut status_signal = status;
        move |_| {
            if status_signal() == ShareStatus::Working {
                return;
            }
            status_signal.set(ShareStatus::Working);
            let svg = render_svg(&profile);

            #[cfg(target_arch = "wasm32")]
            {
                let mut status_signal = status_signal;
                platform::spawn_future(async move {
                    match download_grid_image(svg).await {
                        Ok(message) => status_signal.set(ShareStatus::Done(message)),
                        Err(err) => {
                            tracing::error!(%err, "share image failed");
                            status_signal.set(ShareStatus::Error(err));
                        }
                    }
                });
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                match futures::executor::block_on(download_grid_image(svg)) {
                    Ok(message) => status_signal.set(ShareStatus::Done(message)),
                    Err(err) => {
                        tracing::error!(%err, "share image failed");
                        status_signal.set(ShareStatus::Error(err));
                    }
                }
            }
        }
    };

    let copy_handler = {
        let payload = format!("{text} {url}");
        let mut status_signal = status;
        move |_| {
            let payload = payload.clone();

            #[cfg(target_arch = "wasm32")]
            {
                let mut status_signal = status_signal;
                platform::spawn_future(async move {
                    match copy_to_clipboard(payload).await {
                        Ok(()) => status_signal.set(ShareStatus::Done(t!("share-copied"))),
                        Err(err) => status_signal.set(ShareStatus::Error(err)),
                    }
                });
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                match futures::executor::block_on(copy_to_clipboard(payload)) {
                    Ok(()) => status_signal.set(ShareStatus::Done(t!("share-copied"))),
                    Err(err) => status_signal.set(ShareStatus::Error(err)),
                }
            }
        }
    };

    rsx! {
        section { class: "share-panel", role: "dialog", aria_label: t!("share-title"),
            div { class: "share-panel__header",
                h2 { {t!("share-title")} }
                button {
                    r#type: "button",
                    class: "button button--ghost share-panel__close",
                    onclick: move |_| on_close.call(()),
                    {t!("share-close")}
                }
            }

            p { class: "share-panel__preview", "{text}" }

            div { class: "share-panel__actions",
                button {
                    r#type: "button",
                    class: "button button--primary",
                    disabled: busy,
                    onclick: download_handler,
                    {t!("share-download")}
                }
                button {
                    r#type: "button",
                    class: "button",
                    onclick: copy_handler,
                    {t!("share-copy")}
                }
                a {
                    class: "button button--ghost",
                    href: "{x_link}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    {t!("share-on-x")}
                }
                a {
                    class: "button button--ghost",
                    href: "{whatsapp_link}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    {t!("share-on-whatsapp")}
                }
            }

            if let Some((class_name, message)) = feedback {
                p { class: "{class_name}", role: "status", "{message}" }
            }
        }
    }
}
