pub const PERSONA: &str = "You are Spotify's Growth Analyst.";

pub const MILESTONES: [&str; 9] = [
    "Audiobooks catalog: 500,000+ titles (tripled)",
    "Available in 14 markets",
    "52% of listeners aged 18–34",
    "10% MoM listening growth in France, Netherlands, and Germany",
    "36% YoY increase in audiobook starts",
    "37% YoY increase in listening hours",
    "Audiobooks+ users: +18% consumption in 30 days",
    "UK audiobook revenue: +31% YoY (£268M)",
    "US digital audio: +14% adult, +48% kids/teens growth",
];

pub const INSTRUCTION: &str = "Write a 2–3 sentence data-driven insight that explains what’s driving growth and how Spotify is reimagining audiobooks for the next generation.";

/// Embeds `message` verbatim; nothing in it is escaped or trimmed.
pub fn build_prompt(message: &str) -> String {
    let mut prompt = String::new();
    prompt.push('\n');
    prompt.push_str(PERSONA);
    prompt.push_str("\n\nRecent milestones:\n");
    for milestone in MILESTONES {
        prompt.push_str("- ");
        prompt.push_str(milestone);
        prompt.push('\n');
    }
    prompt.push_str("\nUser question: \"");
    prompt.push_str(message);
    prompt.push_str("\"\n\n");
    prompt.push_str(INSTRUCTION);
    prompt.push('\n');
    prompt
}
