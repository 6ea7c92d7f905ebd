use yew::prelude::*;
use log::debug;

use crate::config;
use crate::content::{CONTACT, COPYRIGHT, LEGAL_LINKS, NEWSLETTER_BLURB, QUICK_LINKS};
use crate::motion::use_in_view;

#[function_component(Footer)]
pub fn footer() -> Html {
    let footer_ref = use_node_ref();
    let visible = use_in_view(footer_ref.clone());

    // Newsletter signup has no backend yet; keep the page from navigating.
    let onsubmit = Callback::from(|e: SubmitEvent| {
        e.prevent_default();
        debug!("Newsletter form submitted, nothing to send it to");
    });

    html! {
        <footer id="contact" ref={footer_ref} class={classes!("site-footer", visible.then(|| "visible"))}>
            <style>
                {r#"
                    .site-footer {
                        margin-top: auto;
                        padding: 2.5rem 0;
                        background: #f3f4f6;
                        opacity: 0;
                        transition: opacity 0.8s ease-out;
                    }
                    .site-footer.visible { opacity: 1; }
                    .dark .site-footer { background: #111827; }
                    .footer-grid {
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 2rem;
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1rem;
                    }
                    .footer-grid h3 {
                        font-size: 1.125rem;
                        font-weight: 600;
                        color: #1f2937;
                        margin-bottom: 1rem;
                    }
                    .dark .footer-grid h3 { color: #e5e7eb; }
                    .footer-grid p, .footer-grid a, .footer-bottom { color: #4b5563; }
                    .dark .footer-grid p, .dark .footer-grid a, .dark .footer-bottom { color: #9ca3af; }
                    .footer-grid a:hover, .footer-bottom a:hover { color: #16a34a; }
                    .dark .footer-grid a:hover, .dark .footer-bottom a:hover { color: #4ade80; }
                    .footer-links { list-style: none; padding: 0; }
                    .footer-links li + li { margin-top: 0.5rem; }
                    .newsletter-form input {
                        width: 100%;
                        padding: 0.5rem;
                        margin-bottom: 0.5rem;
                        border: 1px solid #d1d5db;
                        border-radius: 0.375rem;
                        background: #ffffff;
                    }
                    .dark .newsletter-form input {
                        background: #1f2937;
                        border-color: #4b5563;
                        color: #e5e7eb;
                    }
                    .newsletter-form button {
                        width: 100%;
                        padding: 0.5rem 1rem;
                        border: none;
                        border-radius: 0.375rem;
                        background: #16a34a;
                        color: #ffffff;
                        cursor: pointer;
                    }
                    .newsletter-form button:hover { background: #15803d; }
                    .footer-bottom { text-align: center; margin-top: 2rem; }
                    @media (min-width: 768px) {
                        .footer-grid { grid-template-columns: repeat(4, 1fr); }
                    }
                "#}
            </style>
            <div class="footer-grid">
                <div>
                    <img
                        class="footer-logo"
                        src={config::LOGO_PATH}
                        alt={config::LOGO_ALT}
                        width="150"
                        height="50"
                    />
                </div>
                <div>
                    <h3>{"Quick Links"}</h3>
                    <ul class="footer-links">
                        { for QUICK_LINKS.iter().map(|link| html! {
                            <li><a href={link.href}>{link.label}</a></li>
                        }) }
                    </ul>
                </div>
                <div>
                    <h3>{"Contact Us"}</h3>
                    <p>{CONTACT.phone}</p>
                    <p>
                        <a href={format!("mailto:{}", CONTACT.email)}>{CONTACT.email}</a>
                    </p>
                </div>
                <div>
                    <h3>{"Newsletter"}</h3>
                    <p>{NEWSLETTER_BLURB}</p>
                    <form class="newsletter-form" onsubmit={onsubmit}>
                        <input type="email" placeholder="Your email address" />
                        <button type="submit">{"Subscribe"}</button>
                    </form>
                </div>
            </div>
            <div class="footer-bottom">
                {COPYRIGHT}
                { for LEGAL_LINKS.iter().map(|link| html! {
                    <>
                        {" | "}
                        <a href={link.href}>{link.label}</a>
                    </>
                }) }
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    #[tokio::test]
    async fn renders_contact_details_and_links() {
        let html = ServerRenderer::<Footer>::new().render().await;

        assert!(html.contains(CONTACT.phone));
        assert!(html.contains("mailto:info@kalpicapital.com"));
        for link in QUICK_LINKS.iter().chain(LEGAL_LINKS.iter()) {
            assert!(html.contains(link.label), "missing {}", link.label);
        }
    }

    #[tokio::test]
    async fn newsletter_form_has_no_destination() {
        let html = ServerRenderer::<Footer>::new().render().await;

        assert!(html.contains("placeholder=\"Your email address\""));
        assert!(html.contains("Subscribe"));
        assert!(!html.contains("action="));
    }

    #[tokio::test]
    async fn stays_hidden_until_scrolled_into_view() {
        let html = ServerRenderer::<Footer>::new().render().await;
        assert!(html.contains("class=\"site-footer\""));
    }
}
