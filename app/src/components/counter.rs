use std::rc::Rc;

use leptos::*;

/// Text shown under the counter and mirrored into the title.
pub fn click_label(count: u32) -> String {
    format!("You clicked {count} times")
}

/// State behind [`Counter`]: the click count plus the port that is told
/// about every change.
pub struct ClickCounter<F> {
    count: RwSignal<u32>,
    on_state_changed: Rc<F>,
}

impl<F> Clone for ClickCounter<F> {
    fn clone(&self) -> Self {
        Self {
            count: self.count,
            on_state_changed: Rc::clone(&self.on_state_changed),
        }
    }
}

impl<F> ClickCounter<F>
where
    F: Fn(String) + 'static,
{
    /// Starts at zero and reports the initial label right away.
    pub fn new(cx: Scope, on_state_changed: F) -> Self {
        let counter = Self {
            count: create_rw_signal(cx, 0),
            on_state_changed: Rc::new(on_state_changed),
        };
        counter.notify();
        counter
    }

    pub fn increment(&self) {
        self.count.update(|count| *count = count.saturating_add(1));
        log::debug!("Inc {}", self.count.get_untracked());
        self.notify();
    }

    /// Click handler for the button; ignores the event itself.
    pub fn on_click<E: 'static>(&self) -> impl Fn(E) + 'static {
        let counter = self.clone();
        move |_| counter.increment()
    }

    pub fn count(&self) -> u32 {
        self.count.get()
    }

    pub fn label(&self) -> String {
        click_label(self.count())
    }

    fn notify(&self) {
        (self.on_state_changed)(click_label(self.count.get_untracked()));
    }
}

/// Renders an existing [`ClickCounter`].
pub fn counter_view<F>(cx: Scope, counter: ClickCounter<F>) -> impl IntoView
where
    F: Fn(String) + 'static,
{
    let on_click = counter.on_click();
    let label = move || counter.label();

    view! { cx,
        <p>{label}</p>
        <button on:click=on_click>"Click me"</button>
    }
}

/// A click counter.
///
/// Every change of the count, including the initial zero, is handed to
/// `on_state_changed` as `"You clicked {count} times"`.
#[component]
pub fn Counter<F>(
    cx: Scope,
    /// Receives the label after mount and after each click.
    on_state_changed: F,
) -> impl IntoView
where
    F: Fn(String) + 'static,
{
    let counter = ClickCounter::new(cx, on_state_changed);
    counter_view(cx, counter)
}
