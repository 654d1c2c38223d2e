//! Landing Page

use leptos::prelude::*;

use super::{AboutModel, ApiDocs, ChatWidget};
use crate::components::SectionHeading;

struct Feature {
    title: &'static str,
    desc: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        title: "Text generation",
        desc: "Articles, product descriptions and marketing copy",
    },
    Feature {
        title: "Coding help",
        desc: "Writing, explaining and debugging code in many languages",
    },
    Feature {
        title: "Data analysis",
        desc: "Processing and interpreting large volumes of information",
    },
    Feature {
        title: "Translation",
        desc: "Accurate translation across more than 50 languages",
    },
    Feature {
        title: "Context awareness",
        desc: "Deep understanding of context and nuance in text",
    },
    Feature {
        title: "High speed",
        desc: "Requests handled in real time",
    },
];

const NAV: &[(&str, &str)] = &[
    ("home", "Home"),
    ("demo", "Demo"),
    ("features", "Features"),
    ("api", "API"),
    ("about", "About"),
    ("contact", "Contact"),
];

const CONTACTS: &[(&str, &str)] = &[
    ("Email", "support@llm-platform.dev"),
    ("Telegram", "@llm_platform"),
    ("GitHub", "github.com/llm-platform"),
];

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing">
            <nav class="nav">
                <span class="brand">"LLM Platform"</span>
                <div class="nav-links">
                    {NAV
                        .iter()
                        .map(|(id, label)| view! { <a href=format!("#{id}")>{*label}</a> })
                        .collect_view()}
                </div>
            </nav>

            <header id="home" class="hero">
                <span class="badge">"GPT-4 Turbo Architecture"</span>
                <h1>"A new generation of language models"</h1>
                <p class="tagline">
                    "A powerful LLM for hard problems: from text generation to data analysis and writing code"
                </p>
                <div class="cta">
                    <a href="#demo" class="btn btn-primary">"Try the demo"</a>
                    <a href="#api" class="btn">"API documentation"</a>
                </div>
            </header>

            <ChatWidget />

            <section id="features" class="section features">
                <SectionHeading
                    title="Model capabilities"
                    subtitle="A wide range of uses for business and development"
                />
                <div class="grid">
                    {FEATURES
                        .iter()
                        .map(|f| view! {
                            <div class="card feature">
                                <h3>{f.title}</h3>
                                <p>{f.desc}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </section>

            <ApiDocs />
            <AboutModel />

            <section id="contact" class="section contact">
                <SectionHeading
                    title="Get in touch"
                    subtitle="Ready to start using our LLM platform?"
                />
                <div class="grid">
                    {CONTACTS
                        .iter()
                        .map(|(channel, handle)| view! {
                            <div class="card contact-card">
                                <p class="channel">{*channel}</p>
                                <p class="handle">{*handle}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
                <a href="#demo" class="btn btn-primary">"Get started"</a>
            </section>

            <footer class="footer">
                <span class="brand">"LLM Platform"</span>
                <p>"© 2024 LLM Platform. All rights reserved."</p>
            </footer>
        </div>
    }
}
