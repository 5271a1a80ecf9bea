//! Auto-refresh timer for list pages.
//!
//! The interval set is fixed and enumerated; the control owns at most one
//! browser interval at any instant. Changing the period tears the old timer
//! down before installing the new one, and unmount always clears it, so a
//! tick can never fire against a disposed page.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PollInterval {
    #[default]
    Off,
    Sec10,
    Sec30,
    Min1,
    Min5,
}

impl PollInterval {
    pub const ALL: [PollInterval; 5] = [
        PollInterval::Off,
        PollInterval::Sec10,
        PollInterval::Sec30,
        PollInterval::Min1,
        PollInterval::Min5,
    ];

    /// Timer period; `None` means polling is off.
    pub fn millis(self) -> Option<u32> {
        match self {
            PollInterval::Off => None,
            PollInterval::Sec10 => Some(10_000),
            PollInterval::Sec30 => Some(30_000),
            PollInterval::Min1 => Some(60_000),
            PollInterval::Min5 => Some(300_000),
        }
    }

    pub fn value(self) -> &'static str {
        match self {
            PollInterval::Off => "off",
            PollInterval::Sec10 => "10s",
            PollInterval::Sec30 => "30s",
            PollInterval::Min1 => "1m",
            PollInterval::Min5 => "5m",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PollInterval::Off => "Off",
            PollInterval::Sec10 => "10 s",
            PollInterval::Sec30 => "30 s",
            PollInterval::Min1 => "1 min",
            PollInterval::Min5 => "5 min",
        }
    }

    /// Parse a `<select>` value; anything unknown lands on `Off`.
    pub fn from_value(value: &str) -> Self {
        match value {
            "10s" => PollInterval::Sec10,
            "30s" => PollInterval::Sec30,
            "1m" => PollInterval::Min1,
            "5m" => PollInterval::Min5,
            _ => PollInterval::Off,
        }
    }
}

/// Put a new timer handle into the slot, returning whatever was there so
/// the caller can clear it. The slot is the single-active-timer invariant.
pub fn replace_handle(slot: &mut Option<i32>, next: Option<i32>) -> Option<i32> {
    std::mem::replace(slot, next)
}

fn clear_interval(handle: i32) {
    if let Some(window) = web_sys::window() {
        window.clear_interval_with_handle(handle);
    }
}

/// Auto-refresh toggle rendered in a list page header.
///
/// Each tick re-runs `on_tick`, which must re-issue the last *applied*
/// fetch — the control itself knows nothing about filters.
#[component]
pub fn PollerControl(
    interval: RwSignal<PollInterval>,
    on_tick: Callback<()>,
) -> impl IntoView {
    let timer_handle = StoredValue::new(None::<i32>);

    Effect::new(move |_| {
        let current = interval.get();

        // Tear down before installing: at most one timer, always.
        timer_handle.update_value(|slot| {
            if let Some(old) = replace_handle(slot, None) {
                clear_interval(old);
            }
        });

        let Some(ms) = current.millis() else {
            return;
        };
        let Some(window) = web_sys::window() else {
            return;
        };

        let closure = Closure::wrap(Box::new(move || {
            on_tick.run(());
        }) as Box<dyn FnMut()>);

        match window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            ms as i32,
        ) {
            Ok(handle) => {
                timer_handle.set_value(Some(handle));
                // The browser owns the callback for as long as the interval
                // lives; the handle is what we clear.
                closure.forget();
            }
            Err(_) => {
                log::warn!("failed to install auto-refresh timer");
            }
        }
    });

    on_cleanup(move || {
        timer_handle.update_value(|slot| {
            if let Some(old) = replace_handle(slot, None) {
                clear_interval(old);
            }
        });
    });

    view! {
        <div class="poller-control">
            <span class="poller-control__label">"Auto-refresh"</span>
            <select
                class="poller-control__select"
                on:change=move |ev| {
                    interval.set(PollInterval::from_value(&event_target_value(&ev)));
                }
                prop:value=move || interval.get().value().to_string()
            >
                {PollInterval::ALL
                    .iter()
                    .map(|&iv| {
                        view! {
                            <option value=iv.value() selected=move || interval.get() == iv>
                                {iv.label()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_roundtrip() {
        for iv in PollInterval::ALL {
            assert_eq!(PollInterval::from_value(iv.value()), iv);
        }
        assert_eq!(PollInterval::from_value("nonsense"), PollInterval::Off);
    }

    #[test]
    fn test_only_off_has_no_period() {
        assert_eq!(PollInterval::Off.millis(), None);
        for iv in [
            PollInterval::Sec10,
            PollInterval::Sec30,
            PollInterval::Min1,
            PollInterval::Min5,
        ] {
            assert!(iv.millis().is_some());
        }
    }

    #[test]
    fn test_slot_holds_at_most_one_handle() {
        let mut slot = None;
        assert_eq!(replace_handle(&mut slot, Some(1)), None);
        // Installing a second timer hands the first back for clearing.
        assert_eq!(replace_handle(&mut slot, Some(2)), Some(1));
        assert_eq!(slot, Some(2));
        // Teardown empties the slot.
        assert_eq!(replace_handle(&mut slot, None), Some(2));
        assert_eq!(slot, None);
    }
}
