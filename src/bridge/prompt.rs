use std::fmt;

/// Tone for a generated post. The composer offers the named tones; anything
/// else is passed through as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tone {
    Excited,
    Critical,
    Poetic,
    Funny,
    Sarcastic,
    Custom(String),
}

impl Tone {
    pub const PRESETS: [Tone; 5] = [
        Tone::Excited,
        Tone::Critical,
        Tone::Poetic,
        Tone::Funny,
        Tone::Sarcastic,
    ];

    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        match raw.to_ascii_lowercase().as_str() {
            "excited" => Tone::Excited,
            "critical" => Tone::Critical,
            "poetic" => Tone::Poetic,
            "funny" => Tone::Funny,
            "sarcastic" => Tone::Sarcastic,
            "" => Tone::default(),
            _ => Tone::Custom(raw.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Tone::Excited => "Excited",
            Tone::Critical => "Critical",
            Tone::Poetic => "Poetic",
            Tone::Funny => "Funny",
            Tone::Sarcastic => "Sarcastic",
            Tone::Custom(s) => s,
        }
    }
}

impl Default for Tone {
    fn default() -> Self {
        Tone::Custom("witty".to_string())
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn post_prompt(topic: &str, tone: &Tone) -> String {
    format!(
        "Write a short social media post (max 200 words) for a book lover's social network about: \"{topic}\".\n\
         The tone should be {tone}.\n\
         Focus on engaging the audience with a question or a strong opinion.\n\
         Do not use hashtags."
    )
}

pub fn persona_instruction(name: &str, book: &str, personality: &str) -> String {
    format!(
        "You are roleplaying as {name} from the book {book}.\n\
         Your personality is: {personality}.\n\
         Keep your responses concise (under 50 words) and conversational, as if chatting on a social messaging app.\n\
         Stay in character at all times."
    )
}
