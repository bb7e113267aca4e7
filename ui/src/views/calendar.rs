use dioxus::prelude::*;

use crate::components::{AppLoader, LifeGrid, ProfileForm, ProgressFooter, ProgressHeader};
use crate::core::config::{MOUNT_DELAY_EMPTY_MS, MOUNT_DELAY_WITH_PROFILE_MS};
use crate::hooks::{use_profile, use_profile_store, use_scheduled_task};

/// Landing route: the form when no profile is saved, the calendar otherwise.
#[component]
pub fn Calendar() -> Element {
    // Subscribe to the global language code (if provided) so we re-render on change.
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_current = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    let store = use_profile_store();
    let profile = use_profile();
    let mut mounted = use_signal(|| false);
    let mount_timer = use_scheduled_task();

    let had_profile = use_hook(move || {
        let had_profile = store.has_profile();
        let delay = if had_profile {
            MOUNT_DELAY_WITH_PROFILE_MS
        } else {
            MOUNT_DELAY_EMPTY_MS
        };
        mount_timer.schedule(delay, move || mounted.set(true));
        had_profile
    });

    if !mounted() {
        return rsx! {
            AppLoader { with_profile: had_profile }
        };
    }

    rsx! {
        match profile() {
            Some(profile) => rsx! {
                section { class: "page page-calendar",
                    ProgressHeader { profile: profile.clone() }
                    LifeGrid { profile: profile.clone() }
                    ProgressFooter { profile }
                }
            },
            None => rsx! {
                ProfileForm {}
            },
        }
    }
}
