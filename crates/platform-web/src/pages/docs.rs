//! API snippet and model spec sheet

use leptos::prelude::*;

use crate::components::SectionHeading;

const REST_EXAMPLE: &str = r#"POST https://api.llm-platform.dev/v1/chat/completions

{
  "model": "gpt-4-turbo",
  "messages": [
    {"role": "user", "content": "Hello!"}
  ],
  "temperature": 0.7
}"#;

const ARCHITECTURE: &[(&str, &str)] = &[
    ("Parameters", "175B"),
    ("Layers", "96"),
    ("Heads", "96"),
    ("Context length", "128K tokens"),
];

const PERFORMANCE: &[(&str, &str)] = &[
    ("Speed", "~80 tokens/sec"),
    ("Latency", "<500ms"),
    ("Uptime", "99.9%"),
    ("Availability", "24/7"),
];

const TRAINING_DATA: &[&str] = &[
    "Scientific papers and research",
    "Technical documentation and code",
    "Books and literature",
    "Web content in 50+ languages",
];

#[component]
pub fn ApiDocs() -> impl IntoView {
    view! {
        <section id="api" class="section api">
            <SectionHeading
                title="API documentation"
                subtitle="Simple integration into your applications"
            />
            <div class="card">
                <h3>"Basic request"</h3>
                <pre class="code"><code>{REST_EXAMPLE}</code></pre>
            </div>
        </section>
    }
}

#[component]
fn SpecTable(title: &'static str, rows: &'static [(&'static str, &'static str)]) -> impl IntoView {
    view! {
        <div class="card spec">
            <h3>{title}</h3>
            <dl>
                {rows
                    .iter()
                    .map(|(name, value)| view! {
                        <div class="spec-row">
                            <dt>{*name}</dt>
                            <dd>{*value}</dd>
                        </div>
                    })
                    .collect_view()}
            </dl>
        </div>
    }
}

#[component]
pub fn AboutModel() -> impl IntoView {
    view! {
        <section id="about" class="section about">
            <SectionHeading
                title="About the model"
                subtitle="Technical specifications and architecture"
            />
            <div class="grid">
                <SpecTable title="Architecture" rows=ARCHITECTURE />
                <SpecTable title="Performance" rows=PERFORMANCE />
            </div>
            <div class="card">
                <h3>"Training data"</h3>
                <p>"The model was trained on a diverse dataset including:"</p>
                <ul class="checklist">
                    {TRAINING_DATA.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
                </ul>
            </div>
        </section>
    }
}
