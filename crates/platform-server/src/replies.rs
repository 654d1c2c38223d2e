//! Canned Replies
//!
//! The demo responder does not run a model. It answers with one of a handful
//! of scripted replies, some of which quote the start of the visitor's
//! message back to them.

use std::ops::RangeInclusive;

use platform_core::Locale;
use rand::Rng;
use rand::seq::SliceRandom;

/// Placeholder replaced by the quoted prompt
const EXCERPT: &str = "{excerpt}";

/// Characters of the prompt quoted in a reply
const EXCERPT_CHARS: usize = 50;

/// Range of the fake `tokens_used` figure
pub const TOKENS_USED: RangeInclusive<u32> = 50..=200;

const EN_REPLIES: &[&str] = &[
    "Interesting question about \"{excerpt}\". I am a modern language model built on a transformer architecture. I can help with text analysis, content generation, coding and much more.",
    "Thanks for your request! I have processed \"{excerpt}\" and I am ready to give a detailed answer. LLMs use an attention mechanism to understand context.",
    "Great question! Regarding \"{excerpt}\", modern LLMs are trained on trillions of tokens and can solve complex tasks across many domains.",
    "I run on a GPT-4 Turbo architecture with 175 billion parameters. I can handle up to 128K tokens of context and generate text at about 80 tokens per second.",
    "My main job is to help people solve problems through natural language understanding. I can write code, analyze data, create content and much more.",
];

const RU_REPLIES: &[&str] = &[
    "Интересный вопрос о \"{excerpt}\". Я — современная языковая модель на базе трансформерной архитектуры. Могу помочь с анализом текста, генерацией контента, кодированием и многим другим.",
    "Спасибо за ваш запрос! Я обработала \"{excerpt}\" и готова предоставить детальный ответ. LLM модели используют механизм внимания (attention mechanism) для понимания контекста.",
    "Отличный вопрос! Касательно \"{excerpt}\" — могу сказать, что современные LLM обучаются на триллионах токенов и способны решать сложные задачи в различных доменах.",
    "Я работаю на основе GPT-4 Turbo архитектуры с 175 миллиардами параметров. Могу обрабатывать контекст до 128K токенов и генерировать ответы со скоростью ~80 токенов в секунду.",
    "Моя основная задача — помогать пользователям решать задачи через понимание естественного языка. Я могу генерировать код, анализировать данные, создавать контент и многое другое.",
];

/// A generated reply before it is wrapped for the wire
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DemoReply {
    pub text: String,
    pub tokens_used: u32,
}

/// Set of reply templates to pick from
#[derive(Clone, Debug)]
pub struct ReplyBook {
    templates: Vec<String>,
}

impl ReplyBook {
    pub fn new<I, S>(templates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            templates: templates.into_iter().map(Into::into).collect(),
        }
    }

    /// Built-in replies for `locale`
    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::En => Self::new(EN_REPLIES.iter().copied()),
            Locale::Ru => Self::new(RU_REPLIES.iter().copied()),
        }
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Pick a reply for `message`.
    ///
    /// An empty book produces empty text, which the widget shows as its
    /// empty-reply placeholder.
    pub fn compose<R>(&self, message: &str, rng: &mut R) -> DemoReply
    where
        R: Rng + ?Sized,
    {
        let text = self
            .templates
            .choose(&mut *rng)
            .map(|template| template.replace(EXCERPT, &excerpt(message)))
            .unwrap_or_default();

        DemoReply {
            text,
            tokens_used: rng.gen_range(TOKENS_USED),
        }
    }
}

/// First few characters of the prompt followed by an ellipsis
fn excerpt(message: &str) -> String {
    let mut quoted: String = message.chars().take(EXCERPT_CHARS).collect();
    quoted.push_str("...");
    quoted
}
