use yew::prelude::*;
use web_sys::window;

use crate::components::{footer::Footer, header::Header};
use crate::config;
use crate::theme::{ThemePreference, ThemeStore};

#[derive(Properties, PartialEq)]
pub struct PageShellProps {
    /// Theme resolved by `ThemeStore::initialize` before mounting.
    pub initial_theme: ThemePreference,
    #[prop_or_default]
    pub children: Children,
}

/// Sets `<title>` and the description meta tag, adding the tag when the
/// host page has none.
fn apply_metadata() {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };
    document.set_title(config::SITE_TITLE);

    let meta = match document.query_selector("meta[name=\"description\"]").ok().flatten() {
        Some(meta) => meta,
        None => {
            let Some(head) = document.head() else { return };
            let Ok(meta) = document.create_element("meta") else { return };
            let _ = meta.set_attribute("name", "description");
            let _ = head.append_child(&meta);
            meta
        }
    };
    let _ = meta.set_attribute("content", config::SITE_DESCRIPTION);
}

#[function_component(PageShell)]
pub fn page_shell(props: &PageShellProps) -> Html {
    let theme = use_state(|| props.initial_theme);

    use_effect_with_deps(
        move |_| {
            apply_metadata();
            || ()
        },
        (),
    );

    let on_toggle = {
        let theme = theme.clone();
        Callback::from(move |_| {
            let next = ThemeStore::browser().toggle(*theme);
            theme.set(next);
        })
    };

    html! {
        <div class="page-shell">
            <style>
                {r#"
                    body { margin: 0; }
                    .dark body { background: #111827; }
                    .page-shell {
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                    }
                    .page-main { flex-grow: 1; }
                    .cta-button {
                        padding: 0.5rem 1rem;
                        border: none;
                        border-radius: 0.375rem;
                        background: #16a34a;
                        color: #ffffff;
                        cursor: pointer;
                    }
                    .cta-button:hover { background: #15803d; }
                "#}
            </style>
            <Header theme={*theme} on_toggle={on_toggle} />
            { for props.children.iter() }
            <Footer />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    #[tokio::test]
    async fn wraps_children_between_header_and_footer() {
        let html = ServerRenderer::<PageShell>::with_props(|| PageShellProps {
            initial_theme: ThemePreference::Dark,
            children: Children::new(vec![html! { <p id="page-body">{"body"}</p> }]),
        })
        .render()
        .await;

        let header = html.find("class=\"site-header\"").unwrap();
        let body = html.find("id=\"page-body\"").unwrap();
        let footer = html.find("class=\"site-footer\"").unwrap();
        assert!(header < body && body < footer);
        assert!(html.contains("☀️"));
    }
}
