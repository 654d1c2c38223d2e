//! UI Components

use leptos::prelude::*;
use platform_core::Message;

/// Message bubble component
#[component]
pub fn MessageBubble(message: Message) -> impl IntoView {
    let class = format!("message message-{}", message.role);
    let time = message
        .timestamp
        .with_timezone(&chrono::Local)
        .format("%H:%M")
        .to_string();

    view! {
        <div class=class>
            <p class="content">{message.content}</p>
            <span class="time">{time}</span>
        </div>
    }
}

/// Three pulsing dots shown while a reply is pending
#[component]
pub fn TypingIndicator() -> impl IntoView {
    view! {
        <div class="message message-assistant typing" aria-label="Waiting for reply">
            <span class="dot"></span>
            <span class="dot"></span>
            <span class="dot"></span>
        </div>
    }
}

/// Title and subtitle at the top of each landing section
#[component]
pub fn SectionHeading(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <h2 class="section-title">{title}</h2>
        <p class="section-subtitle">{subtitle}</p>
    }
}
