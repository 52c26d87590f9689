//! Image carousel with swipe gestures, thumbnails, optional autoplay and a
//! fullscreen toggle.

use icondata::{BsArrowsFullscreen, BsChevronLeft, BsChevronRight};
use leptos::{ev, html, prelude::*};

use crate::{
    components::icons,
    fullscreen,
    interval::schedule,
    slider::{SliderOptions, SliderState, SwipeTracker, autoplay_key},
};

fn first_touch_x(event: &ev::TouchEvent) -> Option<f64> {
    event
        .target_touches()
        .get(0)
        .map(|touch| f64::from(touch.client_x()))
}

/// Renders a slider over `images`, which must not be empty.
pub fn component(images: Vec<String>, options: Signal<SliderOptions>) -> impl IntoView {
    let images = StoredValue::new(images);
    let count = images.with_value(Vec::len);
    let state = RwSignal::new(SliderState::new(count));
    let swipe = StoredValue::new(SwipeTracker::default());
    let is_fullscreen = RwSignal::new(false);
    let main_ref = NodeRef::<html::Div>::new();

    let autoplay =
        Memo::new(move |_| options.with(|options| state.with(|state| autoplay_key(options, state))));
    // Re-runs, clearing the previous timer, whenever the key changes.
    Effect::new(move || {
        if let Some((period, _)) = autoplay.get() {
            schedule(period, move || state.update(SliderState::next));
        }
    });

    Effect::new(move || {
        let subscription = fullscreen::on_change(move |active| is_fullscreen.set(active));
        on_cleanup(move || subscription.cancel());
    });

    let toggle_fullscreen = move |_| {
        let node = main_ref.get_untracked();
        let element: Option<&web_sys::Element> = node.as_deref().map(|div| div.as_ref());
        fullscreen::toggle(element, is_fullscreen.get_untracked());
    };

    let on_touch_start = move |event: ev::TouchEvent| {
        if let Some(x) = first_touch_x(&event) {
            swipe.update_value(|tracker| tracker.start(x));
        }
    };
    let on_touch_move = move |event: ev::TouchEvent| {
        if let Some(x) = first_touch_x(&event) {
            swipe.update_value(|tracker| tracker.move_to(x));
        }
    };
    let on_touch_end = move |_: ev::TouchEvent| {
        let mut gesture = None;
        swipe.update_value(|tracker| gesture = tracker.finish());
        if let Some(direction) = gesture {
            state.update(|slider| slider.apply(direction));
        }
    };

    let select =
        move |index: usize| move |_: ev::MouseEvent| state.update(|slider| slider.select(index));
    let current_image = move || {
        let active = state.with(SliderState::active);
        images.with_value(|images| images.get(active).cloned().unwrap_or_default())
    };

    let dots = (0..count)
        .map(|index| {
            view! {
                <button
                    on:click=select(index)
                    class=move || {
                        if state.with(|slider| slider.is_active(index)) {
                            "w-6 h-2 bg-white rounded-full transition-all duration-300"
                        } else {
                            "w-2 h-2 rounded-full transition-all duration-300 bg-white/50 hover:bg-white/80"
                        }
                    }
                    aria-label=format!("Go to image {}", index + 1)
                ></button>
            }
        })
        .collect_view();

    let desktop_thumbnails = images.with_value(|images| {
        images
            .iter()
            .cloned()
            .enumerate()
            .map(|(index, src)| {
                view! {
                    <button
                        on:click=select(index)
                        class=move || {
                            let state_class = if state.with(|slider| slider.is_active(index)) {
                                "border-purple-600 shadow-lg shadow-purple-200 scale-105"
                            } else {
                                "border-transparent opacity-70 hover:opacity-100 hover:border-gray-300"
                            };
                            format!(
                                "flex-shrink-0 w-24 h-24 rounded-xl overflow-hidden border-3 transition-all duration-300 transform hover:scale-105 hover:shadow-lg {state_class}",
                            )
                        }
                        aria-label=format!("View image {}", index + 1)
                        aria-current=move || state.with(|slider| slider.is_active(index)).to_string()
                    >
                        <img src=src alt=format!("Thumbnail {}", index + 1) class="object-cover w-full h-full"/>
                    </button>
                }
            })
            .collect_view()
    });

    let mobile_thumbnails = images.with_value(|images| {
        images
            .iter()
            .cloned()
            .enumerate()
            .map(|(index, src)| {
                view! {
                    <button
                        on:click=select(index)
                        class=move || {
                            if state.with(|slider| slider.is_active(index)) {
                                "flex-shrink-0 w-20 h-20 rounded-lg overflow-hidden border-2 transition-all duration-300 border-purple-500 ring-2 ring-purple-200"
                            } else {
                                "flex-shrink-0 w-20 h-20 rounded-lg overflow-hidden border-2 transition-all duration-300 border-gray-200 opacity-70"
                            }
                        }
                        aria-label=format!("View image {}", index + 1)
                        aria-current=move || state.with(|slider| slider.is_active(index)).to_string()
                    >
                        <img src=src alt=format!("Thumbnail {}", index + 1) class="object-cover w-full h-full"/>
                    </button>
                }
            })
            .collect_view()
    });

    view! {
        <div class=move || {
            if is_fullscreen.get() {
                "flex relative flex-col justify-center items-center w-full h-full fixed inset-0 z-50 bg-black"
            } else {
                "flex relative flex-col justify-center items-center w-full h-full"
            }
        }>
            <div
                node_ref=main_ref
                class=move || {
                    if is_fullscreen.get() {
                        "overflow-hidden relative w-full rounded-2xl shadow-2xl aspect-square group max-w-none h-full"
                    } else {
                        "overflow-hidden relative w-full max-w-4xl rounded-2xl shadow-2xl aspect-square group"
                    }
                }
                on:touchstart=on_touch_start
                on:touchmove=on_touch_move
                on:touchend=on_touch_end
            >
                <img
                    src=current_image
                    alt=move || format!("Slide {}", state.with(SliderState::active) + 1)
                    class="object-cover w-full h-full transition-transform duration-500 ease-out hover:scale-105"
                />

                <div class="absolute top-4 right-4 py-1 px-3 text-sm font-semibold text-white rounded-full backdrop-blur-sm bg-black/70">
                    {move || state.with(SliderState::counter_label)}
                </div>

                <button
                    on:click=toggle_fullscreen
                    class="absolute top-4 left-4 p-2 text-white rounded-full transition-all duration-200 hover:scale-110 backdrop-blur-sm bg-black/70 hover:bg-black/90"
                    aria-label="Toggle fullscreen"
                    aria-pressed=move || is_fullscreen.get().to_string()
                >
                    {icons::component(BsArrowsFullscreen, "size-4")}
                </button>

                <button
                    on:click=move |_| state.update(SliderState::prev)
                    class="absolute left-4 top-1/2 p-3 text-white rounded-full opacity-0 transition-all duration-300 -translate-y-1/2 group-hover:opacity-100 hover:scale-110 backdrop-blur-sm bg-white/20 hover:bg-white/30"
                    aria-label="Previous image"
                >
                    {icons::component(BsChevronLeft, "size-6")}
                </button>
                <button
                    on:click=move |_| state.update(SliderState::next)
                    class="absolute right-4 top-1/2 p-3 text-white rounded-full opacity-0 transition-all duration-300 -translate-y-1/2 group-hover:opacity-100 hover:scale-110 backdrop-blur-sm bg-white/20 hover:bg-white/30"
                    aria-label="Next image"
                >
                    {icons::component(BsChevronRight, "size-6")}
                </button>

                <div class="flex absolute bottom-4 left-1/2 gap-2 -translate-x-1/2 lg:hidden">{dots}</div>
            </div>

            <div class="hidden px-4 mt-6 w-full max-w-4xl lg:flex">
                <div class="flex overflow-x-auto gap-3 py-4 px-2 scrollbar-hide">{desktop_thumbnails}</div>
            </div>

            <div class="px-4 mt-6 w-full max-w-md lg:hidden">
                <div class="flex overflow-x-auto gap-3 py-4 scrollbar-hide">{mobile_thumbnails}</div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_signature() {
        let _component: fn(Vec<String>, Signal<SliderOptions>) -> _ = component;
    }
}
