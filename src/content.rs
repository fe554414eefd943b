//! Hard-coded copy for every section of the page.

use chrono::{DateTime, Datelike};

pub const OWNER: &str = "Robin Okafor";
pub const ROLE: &str = "Systems & Web Engineer";
pub const TAGLINE: &str =
    "I build fast, boring-in-the-best-way software: from storage engines to the pages that sit on top of them.";
pub const EMAIL: &str = "hello@robinokafor.dev";
pub const SITE_URL: &str = "https://robinokafor.dev";
/// Served from `public/`.
pub const FAVICON: &str = "/favicon.svg";

pub const ABOUT: &[&str] = &[
    "I'm a software engineer with a decade of experience shipping backend services, developer tooling and the occasional frontend that has to stay up on launch day.",
    "Most of my recent work is in Rust and TypeScript. I care about predictable latency, small dependency trees and code that the next person can read without a guide.",
    "Outside of work I climb, roast coffee badly and maintain a handful of open source crates.",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CareerEntry {
    pub role: &'static str,
    pub organization: &'static str,
    pub period: &'static str,
    pub summary: &'static str,
}

pub const CAREER: &[CareerEntry] = &[
    CareerEntry {
        role: "Staff Engineer",
        organization: "Northwind Logistics",
        period: "2022 - present",
        summary: "Leads the routing platform team; moved the dispatch engine from a Python monolith to a set of Rust services handling 40k events/s.",
    },
    CareerEntry {
        role: "Senior Engineer",
        organization: "Brightline Health",
        period: "2019 - 2022",
        summary: "Built the patient-messaging pipeline and the internal design system used across four product teams.",
    },
    CareerEntry {
        role: "Software Engineer",
        organization: "Kestrel Labs",
        period: "2016 - 2019",
        summary: "Full-stack work on a B2B analytics product: query planner, caching layer and the React dashboard on top.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub repo: Option<&'static str>,
    pub live: Option<&'static str>,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "tidepool",
        description: "An embeddable log-structured key/value store with crash-safe compaction and a tiny async API.",
        tags: &["Rust", "Storage", "Tokio"],
        repo: Some("https://github.com/robinokafor/tidepool"),
        live: None,
    },
    Project {
        title: "wayfinder",
        description: "Route planning playground that renders live vehicle positions over vector tiles, compiled to WebAssembly.",
        tags: &["Rust", "WASM", "Leptos", "MapLibre"],
        repo: Some("https://github.com/robinokafor/wayfinder"),
        live: Some("https://wayfinder.robinokafor.dev"),
    },
    Project {
        title: "quietbox",
        description: "Self-hosted notification digest: collects webhooks all day and sends one readable email at night.",
        tags: &["Go", "SQLite", "SMTP"],
        repo: Some("https://github.com/robinokafor/quietbox"),
        live: None,
    },
    Project {
        title: "this site",
        description: "Single page portfolio rendered with Leptos and exported as static files.",
        tags: &["Rust", "Leptos", "Tailwind"],
        repo: Some("https://github.com/robinokafor/portfolio-site"),
        live: Some(SITE_URL),
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    /// devicon / extra icon class
    pub icon: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub",
        href: "https://github.com/robinokafor",
        icon: "devicon-github-plain",
    },
    SocialLink {
        label: "LinkedIn",
        href: "https://linkedin.com/in/robinokafor",
        icon: "devicon-linkedin-plain",
    },
    SocialLink {
        label: "Email",
        href: "mailto:hello@robinokafor.dev",
        icon: "extra-email",
    },
];

/// Section anchors in page order, with their nav labels.
pub const SECTIONS: &[(&str, &str)] = &[
    ("about", "About"),
    ("projects", "Projects"),
    ("contact", "Contact"),
];

/// Year the site was built, for the copyright line.
pub fn build_year() -> Option<i32> {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .ok()
        .map(|t| t.year())
}
