// Static copy for the landing page. Renderers take these as plain data.

#[derive(Clone, Debug, PartialEq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavLink {
    pub label: &'static str,
    pub target: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FooterLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ContactInfo {
    pub phone: &'static str,
    pub email: &'static str,
}

pub const HEADLINES: [&str; 3] = [
    "Unlocking Algorithmic Alpha",
    "Data-Driven Strategies",
    "Systematic Quant Investing",
];

pub const HERO_SUBTITLE: &str =
    "Create, backtest, and deploy Quant AI/ML portfolios without writing code.";

pub const FEATURES_TITLE: &str = "Why Choose Kalpi Capital?";

pub const FEATURES: [Feature; 6] = [
    Feature {
        title: "No-Code Strategy Builder",
        description: "Build complex quantitative strategies with our intuitive click and drop interface. No coding required.",
    },
    Feature {
        title: "Advanced Backtesting",
        description: "Test your strategies against historical data with detailed performance metrics and analytics.",
    },
    Feature {
        title: "Portfolio Creation",
        description: "Create equal & custom weighted portfolios with ease with rebalancing options.",
    },
    Feature {
        title: "Machine Learning & AI Strategy",
        description: "Use AI/ML techniques to build, combine and optimize strategies.",
    },
    Feature {
        title: "Strategy Marketplace",
        description: "Discover and subscribe to proven strategies from professional Quant researchers.",
    },
    Feature {
        title: "Multi-Factor Model",
        description: "Create a multi-factor portfolio for robust risk adjusted returns.",
    },
];

pub const NAV_LINKS: [NavLink; 3] = [
    NavLink { label: "About", target: "/#about" },
    NavLink { label: "Solutions", target: "/#solutions" },
    NavLink { label: "Contact", target: "/#contact" },
];

pub const QUICK_LINKS: [FooterLink; 4] = [
    FooterLink { label: "Strategy Builder", href: "#" },
    FooterLink { label: "Backtest", href: "#" },
    FooterLink { label: "My Strategies", href: "#" },
    FooterLink { label: "Marketplace", href: "#" },
];

pub const LEGAL_LINKS: [FooterLink; 3] = [
    FooterLink { label: "Terms of Service", href: "#" },
    FooterLink { label: "Privacy Policy", href: "#" },
    FooterLink { label: "Disclaimer", href: "#" },
];

pub const CONTACT: ContactInfo = ContactInfo {
    phone: "+91-8879191901",
    email: "info@kalpicapital.com",
};

pub const NEWSLETTER_BLURB: &str =
    "Subscribe for updates on market trends and quantitative research.";

pub const COPYRIGHT: &str = "© 2023 Kalpi Capital. All rights reserved.";
