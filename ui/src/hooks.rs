//! Dioxus hooks over the core store and scheduler.

use dioxus::prelude::*;

use crate::core::config::LayoutConfig;
use crate::core::layout::ContainerSize;
use crate::core::profile::Profile;
use crate::core::store::ProfileStore;
use crate::core::timing::ScheduledTask;

/// Store provided by the platform root via `use_context_provider`.
pub fn use_profile_store() -> ProfileStore {
    use_context::<ProfileStore>()
}

/// Current profile as a signal, kept in sync with the store until unmount.
pub fn use_profile() -> ReadOnlySignal<Option<Profile>> {
    let store = use_profile_store();
    let profile = use_signal(|| store.profile());

    let subscription = use_hook({
        let store = store.clone();
        move || {
            store.subscribe(move |next| {
                let mut profile = profile;
                profile.set(next.cloned());
            })
        }
    });
    use_drop(move || store.unsubscribe(subscription));

    profile.into()
}

/// A scheduler slot whose pending callback is cancelled when the component unmounts.
pub fn use_scheduled_task() -> ScheduledTask {
    let task = use_hook(ScheduledTask::new);
    use_drop({
        let task = task.clone();
        move || task.cancel()
    });
    task
}

/// Debounced container measurement.
///
/// Returns the committed size plus a handler to attach as `onresize`. Raw
/// measurements are held back until they have been stable for
/// `resize_debounce_ms`, and changes within `resize_threshold` pixels on both
/// axes are dropped.
pub fn use_container_size(
    config: LayoutConfig,
) -> (ReadOnlySignal<ContainerSize>, impl FnMut(Event<ResizeData>)) {
    let container = use_signal(ContainerSize::default);
    let debounce = use_scheduled_task();

    let onresize = move |evt: Event<ResizeData>| {
        let Ok(size) = evt.data().get_content_box_size() else {
            return;
        };
        let measured = ContainerSize::new(size.width, size.height);
        debounce.schedule(config.resize_debounce_ms, move || {
            let mut container = container;
            let current = *container.peek();
            if measured.is_measured() && measured.differs_from(&current, config.resize_threshold) {
                tracing::debug!(width = measured.width, height = measured.height, "grid container resized");
                container.set(measured);
            }
        });
    };

    (container.into(), onresize)
}
