use leptos::prelude::*;
use leptos_use::use_window_scroll;

use crate::{
    motion::{PendingSlot, TitleRotation, TITLE_INTERVAL},
    scroll::{ScrollSample, ScrollTracker},
};

/// Classifies every window scroll event with a tracker owned by the calling component.
pub fn use_scroll_samples(mut on_sample: impl FnMut(ScrollSample) + 'static) {
    let (_, y) = use_window_scroll();
    let tracker = StoredValue::new(ScrollTracker::default());
    Effect::watch(
        move || y.get(),
        move |offset, _, _| {
            if let Some(sample) = tracker.try_update_value(|t| t.observe(*offset)) {
                on_sample(sample);
            }
        },
        false,
    );
}

/// Advances through `len` titles every [`TITLE_INTERVAL`]. Only one timeout is ever pending;
/// it is cleared when the owning component unmounts.
pub fn use_title_rotation(len: usize) -> ReadSignal<TitleRotation> {
    let (rotation, set_rotation) = signal(TitleRotation::new(len));
    let pending = StoredValue::new(PendingSlot::<TimeoutHandle>::default());

    Effect::watch(
        move || rotation.with(TitleRotation::index),
        move |_, _, _| {
            match set_timeout_with_handle(
                move || set_rotation.update(TitleRotation::advance),
                TITLE_INTERVAL,
            ) {
                Ok(handle) => {
                    if let Some(stale) = pending
                        .try_update_value(|slot| slot.replace(handle))
                        .flatten()
                    {
                        stale.clear();
                    }
                }
                Err(e) => log::warn!("couldn't schedule title rotation: {e:?}"),
            }
        },
        true,
    );

    on_cleanup(move || {
        if let Some(handle) = pending.try_update_value(PendingSlot::take).flatten() {
            handle.clear();
        }
    });

    rotation
}
