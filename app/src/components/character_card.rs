use leptos::*;

/// Fixed line rendered under every card heading.
pub const CARD_DESCRIPTION: &str = "Тестовое описание персонажа";

/// A static character card: the caller's heading and a fixed description.
#[component]
pub fn CharacterCard(
    cx: Scope,
    /// Heading text, rendered verbatim (empty is fine).
    #[prop(into)]
    message: String,
) -> impl IntoView {
    view! { cx,
        <div>
            <h1>{message}</h1>
            <p>{CARD_DESCRIPTION}</p>
        </div>
    }
}
