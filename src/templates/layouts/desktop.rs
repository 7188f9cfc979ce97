use maud::{html, Markup, Render, DOCTYPE};

pub fn desktop_layout(title: &str, content: impl Render) -> Markup {
    html! {
        (DOCTYPE)
        html lang="ru" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href="/css/style.css";
            }
            (content)
        }
    }
}
