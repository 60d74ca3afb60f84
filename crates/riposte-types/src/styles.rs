//! The built-in catalogue of response styles.
//!
//! A style bundles the short label stamped onto every record with the
//! persona text that biases generation. The client core never interprets
//! either (both travel as opaque strings), so applications are free to
//! define styles of their own and skip this catalogue entirely.

/// Built-in response styles, ordered roughly from general to specialised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    /// One short sentence, straight at the weakest point.
    Punchy,
    /// Turn the input's own logic against it.
    LogicTwist,
    /// Cheerful, dismissive absurdity.
    Absurdist,
    /// Tease the devotion to a favourite franchise.
    FandomJab,
    /// Hold the hidden double standard up to the light.
    DoubleStandard,
    /// Playful, condescending provocation.
    Brat,
}

impl Style {
    pub const ALL: [Style; 6] = [
        Style::Punchy,
        Style::LogicTwist,
        Style::Absurdist,
        Style::FandomJab,
        Style::DoubleStandard,
        Style::Brat,
    ];

    /// The label stamped onto records generated in this style.
    pub fn label(self) -> &'static str {
        match self {
            Style::Punchy => "Short & Punchy",
            Style::LogicTwist => "Logic Twist",
            Style::Absurdist => "Absurdist",
            Style::FandomJab => "Fandom Jab",
            Style::DoubleStandard => "Double Standard",
            Style::Brat => "Brat",
        }
    }

    /// Persona text biasing generation towards this style.
    pub fn persona(self) -> &'static str {
        match self {
            Style::Punchy => {
                "Answer with exactly one short, devastatingly witty sentence. \
                 Strike at the specific content of the input, never at a generic target; \
                 prefer a vivid, unexpected metaphor over any stock insult."
            }
            Style::LogicTwist => {
                "Play the input's own reasoning back at it until it collapses. \
                 Stay colloquial and mock-polite; make the flaw obvious through an \
                 everyday-life comparison instead of naming any formal fallacy."
            }
            Style::Absurdist => {
                "Respond with cheerful, dismissive absurdity. Non-sequiturs and deadpan \
                 emoji are welcome; coherence is optional, disdain is not. Keep it short."
            }
            Style::FandomJab => {
                "Tease the input's devotion to its favourite game, brand or franchise. \
                 Aim at the fandom reflexes on display, not at the person. Keep it short."
            }
            Style::DoubleStandard => {
                "Find the double standard hiding in the input and hold it up to the \
                 light, sweetly, as if doing the author a favour. One sharp sentence."
            }
            Style::Brat => {
                "Condescending, playful provocation: sing-song, faux-sympathetic, \
                 clearly unimpressed. One short sentence, ending in a jab dressed \
                 up as a compliment."
            }
        }
    }

    /// Resolve the style a record was generated in from its label.
    ///
    /// Labels are free-form on the wire, so matching is by containment, and
    /// an unrecognised label falls back to [`Style::LogicTwist`].
    pub fn from_label(label: &str) -> Style {
        let lowered = label.trim().to_lowercase();
        if lowered.is_empty() {
            return Style::LogicTwist;
        }
        Style::ALL
            .into_iter()
            .find(|style| {
                lowered.contains(&style.label().to_lowercase())
                    || style.label().to_lowercase().contains(&lowered)
            })
            .unwrap_or(Style::LogicTwist)
    }
}
