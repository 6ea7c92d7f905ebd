use yew::prelude::*;
use web_sys::MouseEvent;

use crate::config;
use crate::content::NAV_LINKS;
use crate::theme::ThemePreference;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub theme: ThemePreference,
    pub on_toggle: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let HeaderProps { theme, on_toggle } = props;

    let toggle_theme = {
        let on_toggle = on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    // Moon while light, sun while dark
    let (icon, label) = match theme {
        ThemePreference::Light => ("🌙", "Switch to dark theme"),
        ThemePreference::Dark => ("☀️", "Switch to light theme"),
    };

    html! {
        <header class="site-header">
            <style>
                {r#"
                    @keyframes headerSlideDown {
                        from { opacity: 0; transform: translateY(-50px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    .site-header {
                        position: fixed;
                        top: 0;
                        width: 100%;
                        z-index: 50;
                        background: #ffffff;
                        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                        animation: headerSlideDown 0.5s ease-out both;
                    }
                    .dark .site-header { background: #111827; }
                    .header-content {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 1rem;
                    }
                    .header-logo { object-fit: contain; }
                    .header-nav { display: none; gap: 1.5rem; }
                    .header-nav a { color: #374151; text-decoration: none; }
                    .header-nav a:hover { color: #16a34a; }
                    .dark .header-nav a { color: #d1d5db; }
                    .dark .header-nav a:hover { color: #4ade80; }
                    .header-actions { display: flex; align-items: center; gap: 1rem; }
                    .theme-toggle {
                        padding: 0.5rem;
                        border: none;
                        border-radius: 9999px;
                        background: #e5e7eb;
                        cursor: pointer;
                    }
                    .theme-toggle:hover { background: #d1d5db; }
                    .dark .theme-toggle { background: #374151; }
                    .dark .theme-toggle:hover { background: #4b5563; }
                    @media (min-width: 768px) {
                        .header-nav { display: flex; }
                    }
                "#}
            </style>
            <div class="header-content">
                <div class="header-brand">
                    <img
                        class="header-logo"
                        src={config::LOGO_PATH}
                        alt={config::LOGO_ALT}
                        width="150"
                        height="50"
                    />
                </div>
                <nav class="header-nav">
                    { for NAV_LINKS.iter().map(|link| html! {
                        <a href={link.target}>{link.label}</a>
                    }) }
                </nav>
                <div class="header-actions">
                    <button class="cta-button">{"Get Started"}</button>
                    <button
                        class="theme-toggle"
                        aria-label={label}
                        title={label}
                        onclick={toggle_theme}
                    >
                        {icon}
                    </button>
                </div>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    async fn render(theme: ThemePreference) -> String {
        ServerRenderer::<Header>::with_props(move || HeaderProps {
            theme,
            on_toggle: Callback::from(|_| ()),
        })
        .render()
        .await
    }

    #[tokio::test]
    async fn light_theme_offers_the_moon() {
        let html = render(ThemePreference::Light).await;
        assert!(html.contains("🌙"));
        assert!(!html.contains("☀️"));
        assert!(html.contains("Switch to dark theme"));
    }

    #[tokio::test]
    async fn dark_theme_offers_the_sun() {
        let html = render(ThemePreference::Dark).await;
        assert!(html.contains("☀️"));
        assert!(!html.contains("🌙"));
        assert!(html.contains("Switch to light theme"));
    }

    #[tokio::test]
    async fn renders_navigation_in_order() {
        let html = render(ThemePreference::Light).await;
        let about = html.find("href=\"/#about\"").unwrap();
        let solutions = html.find("href=\"/#solutions\"").unwrap();
        let contact = html.find("href=\"/#contact\"").unwrap();
        assert!(about < solutions && solutions < contact);
        assert!(html.contains("Kalpi Capital Logo"));
        assert!(html.contains("Get Started"));
    }
}
