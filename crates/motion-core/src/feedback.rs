//! Encouragement phrases shown when a repetition is counted.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::exercise::ExerciseKind;

static HIGH_KNEES_PHRASES: [&str; 10] = [
    "Great form!",
    "Excellent!",
    "Perfect!",
    "Keep going!",
    "Nice!",
    "So quick!",
    "Awesome!",
    "Spot on!",
    "Beautiful!",
    "Keep it up!",
];

static SIDE_SLIDE_PHRASES: [&str; 10] = [
    "Slide!",
    "Nice step!",
    "So smooth!",
    "Great form!",
    "Good!",
    "Agile!",
    "Quick feet!",
    "Spot on!",
    "Steady!",
    "Keep it up!",
];

/// The fixed phrase list for an exercise.
pub fn phrases(kind: ExerciseKind) -> &'static [&'static str] {
    match kind {
        ExerciseKind::HighKnees => &HIGH_KNEES_PHRASES,
        ExerciseKind::SideSlide => &SIDE_SLIDE_PHRASES,
    }
}

/// Phrase list by exercise name; unrecognized names get the high-knees list.
pub fn phrases_for_name(name: &str) -> &'static [&'static str] {
    name.parse::<ExerciseKind>()
        .map(phrases)
        .unwrap_or(&HIGH_KNEES_PHRASES[..])
}

/// Uniformly pick one phrase for `kind`.
pub fn pick<R: Rng + ?Sized>(kind: ExerciseKind, rng: &mut R) -> &'static str {
    phrases(kind).choose(rng).copied().unwrap_or_default()
}
