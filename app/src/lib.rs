use leptos::*;

mod components;
mod title;

pub use components::*;
pub use title::set_document_title;

/// Heading of the card on the root screen.
pub const ROOT_CARD_MESSAGE: &str = "Персонаж";

#[component]
pub fn App(cx: Scope) -> impl IntoView {
    view! { cx,
        <div class="App">
            <header class="App-header">
                <Counter on_state_changed=|title: String| set_document_title(&title) />
                <CharacterCard message=ROOT_CARD_MESSAGE />
            </header>
        </div>
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::cell::RefCell;
    use std::sync::Once;

    use log::{Level, Log, Metadata, Record};

    thread_local! {
        static RECORDS: RefCell<Vec<String>> = RefCell::new(Vec::new());
    }

    /// Keeps debug records per test thread so parallel tests don't mix.
    struct ThreadLog;

    impl Log for ThreadLog {
        fn enabled(&self, metadata: &Metadata) -> bool {
            metadata.level() <= Level::Debug
        }

        fn log(&self, record: &Record) {
            if self.enabled(record.metadata()) {
                RECORDS.with(|records| records.borrow_mut().push(record.args().to_string()));
            }
        }

        fn flush(&self) {}
    }

    static LOGGER: ThreadLog = ThreadLog;
    static INIT: Once = Once::new();

    /// Runs `f` and returns the log messages it emitted on this thread.
    pub fn capture_logs(f: impl FnOnce()) -> Vec<String> {
        INIT.call_once(|| {
            if log::set_logger(&LOGGER).is_ok() {
                log::set_max_level(log::LevelFilter::Debug);
            }
        });
        RECORDS.with(|records| records.borrow_mut().clear());
        f();
        RECORDS.with(|records| records.take())
    }

    /// Text content of rendered HTML: tags, comments and hydration markers
    /// dropped, surrounding whitespace of each text run trimmed.
    pub fn visible_text(html: &str) -> String {
        let mut text = String::new();
        let mut run = String::new();
        let mut in_tag = false;
        for c in html.chars() {
            match c {
                '<' => {
                    in_tag = true;
                    text.push_str(run.trim());
                    run.clear();
                }
                '>' if in_tag => in_tag = false,
                _ if !in_tag => run.push(c),
                _ => {}
            }
        }
        text.push_str(run.trim());
        text
    }
}
