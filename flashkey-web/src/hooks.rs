//! Shared Yew hooks.

use gloo::timers::callback::Interval;
use yew::prelude::*;

/// Run `on_tick` once per second while `running` is true.
///
/// The interval is owned by the effect and dropped when `running` flips or
/// the component unmounts, so no tick can fire after teardown. The callback
/// is refreshed on every render, so ticks always observe the latest
/// component state.
#[hook]
pub fn use_second_tick<F>(running: bool, on_tick: F)
where
    F: Fn() + 'static,
{
    let tick = use_mut_ref(|| Box::new(|| {}) as Box<dyn Fn()>);
    *tick.borrow_mut() = Box::new(on_tick);

    use_effect_with(running, move |&running| {
        let interval = running.then(|| {
            Interval::new(1_000, move || {
                (*tick.borrow())();
            })
        });
        move || drop(interval)
    });
}
