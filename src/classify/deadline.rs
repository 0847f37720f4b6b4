use super::Tone;
use crate::models::Urgency;

pub fn classify_urgency(urgency: &Urgency) -> Tone {
    match urgency {
        Urgency::Urgent => Tone::Negative,
        Urgency::Soon => Tone::Warning,
        Urgency::Relaxed => Tone::Positive,
        Urgency::Other(_) => Tone::Neutral,
    }
}
