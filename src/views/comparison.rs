use maud::{Markup, html};

pub fn content() -> Markup {
    html! {
        section class="panel" {
            h3 { "Comparison" }
            p { "Side-by-side comparison of buildings and periods will appear here." }
        }
    }
}
