//! Phrasebank selector: maps tone + coaching move to concrete phrase atoms
//!
//! The drift guard for the persona's voice: every turn gets 1-3 phrase atoms
//! from the move's recipe, with short-term recency avoidance so the same
//! phrasing doesn't echo across adjacent turns.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::types::{
    CoachingMove, LinguisticFingerprint, Pacing, PhraseBank, PhraseIntensity, RecencyWindow,
    SelectedPhrases, ToneDirective, VoiceAtom, JENNY_FINGERPRINT,
};
use crate::PHRASE_RECENCY_LIMIT;

/// Selects persona phrases for each turn
#[derive(Debug)]
pub struct PhrasebankEngine {
    bank: PhraseBank,
    fingerprint: LinguisticFingerprint,
    recent: RecencyWindow,
    rng: StdRng,
}

impl Default for PhrasebankEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl PhrasebankEngine {
    pub fn new() -> Self {
        Self::with_bank(PhraseBank::jenny(), JENNY_FINGERPRINT, StdRng::from_entropy())
    }

    /// Deterministic selection for tests and replay
    pub fn with_seed(seed: u64) -> Self {
        Self::with_bank(
            PhraseBank::jenny(),
            JENNY_FINGERPRINT,
            StdRng::seed_from_u64(seed),
        )
    }

    pub fn with_bank(bank: PhraseBank, fingerprint: LinguisticFingerprint, rng: StdRng) -> Self {
        Self {
            bank,
            fingerprint,
            recent: RecencyWindow::new(PHRASE_RECENCY_LIMIT),
            rng,
        }
    }

    /// Select a pacing marker, body phrases, and style markers for the turn
    pub fn select(&mut self, tone: &ToneDirective, mv: CoachingMove) -> SelectedPhrases {
        let mut style_markers = tone.style_markers.clone();

        let pacing_marker = Some(self.pacing_marker(tone.pacing));
        let body = self.body_phrases(mv, tone);

        style_markers.extend(move_markers(mv).iter().map(|m| m.to_string()));
        style_markers.extend(fingerprint_markers(tone).iter().map(|m| m.to_string()));

        debug!(mv = %mv, phrases = body.len(), "phrases selected");

        SelectedPhrases {
            body,
            pacing_marker,
            style_markers,
        }
    }

    /// The fixed per-move recipe for 1-3 body phrases
    fn body_phrases(&mut self, mv: CoachingMove, tone: &ToneDirective) -> Vec<String> {
        let bank = self.bank;
        let mut phrases = Vec::new();
        let warmth = tone.warmth;
        let directness = tone.directness;
        let assertiveness = tone.assertiveness;

        match mv {
            CoachingMove::Affirm => {
                if warmth >= 7.0 {
                    phrases.push(self.pick(bank.validations, Some(PhraseIntensity::Medium)));
                    phrases.push(self.pick(bank.empathy_infusions, Some(PhraseIntensity::Medium)));
                } else if warmth >= 4.0 {
                    phrases.push(self.pick(bank.validations, Some(PhraseIntensity::Light)));
                    phrases
                        .push(self.pick(bank.motivational_bursts, Some(PhraseIntensity::Light)));
                } else {
                    phrases.push(self.pick(bank.validations, Some(PhraseIntensity::Light)));
                }
            }
            CoachingMove::Reframe => {
                phrases.push(self.pick(bank.perspective_shift, Some(PhraseIntensity::Medium)));
                if warmth >= 6.0 {
                    phrases.push(self.pick(bank.grounding, Some(PhraseIntensity::Light)));
                }
                if directness >= 7.0 {
                    phrases.push(self.pick(bank.clarity_frames, Some(PhraseIntensity::Medium)));
                }
            }
            CoachingMove::Challenge => {
                let intensity = if assertiveness >= 7.0 {
                    PhraseIntensity::Strong
                } else {
                    PhraseIntensity::Medium
                };
                phrases.push(self.pick(bank.micro_challenges, Some(intensity)));
                if warmth >= 6.0 {
                    phrases.push(self.pick(bank.validations, Some(PhraseIntensity::Light)));
                }
            }
            CoachingMove::Motivate => {
                let intensity = if assertiveness >= 7.0 {
                    PhraseIntensity::Strong
                } else {
                    PhraseIntensity::Medium
                };
                phrases.push(self.pick(bank.motivational_bursts, Some(intensity)));
                if directness >= 7.0 {
                    phrases.push(self.pick(bank.tactical_pivots, Some(PhraseIntensity::Medium)));
                }
            }
            CoachingMove::Accountability => {
                phrases.push(self.pick(bank.clarity_frames, Some(PhraseIntensity::Medium)));
                phrases.push(self.pick(bank.micro_challenges, Some(PhraseIntensity::Medium)));
                if warmth >= 6.0 {
                    phrases.push(self.pick(bank.grounding, Some(PhraseIntensity::Light)));
                }
            }
            CoachingMove::Anchor => {
                let intensity = if assertiveness >= 7.0 {
                    PhraseIntensity::Strong
                } else {
                    PhraseIntensity::Medium
                };
                phrases.push(self.pick(bank.grounding, Some(intensity)));
                phrases.push(self.pick(bank.clarity_frames, Some(PhraseIntensity::Medium)));
            }
            CoachingMove::Mirror => {
                phrases.push(self.pick(bank.reflective_prompts, Some(PhraseIntensity::Medium)));
                if warmth >= 6.0 {
                    phrases.push(self.pick(bank.empathy_infusions, Some(PhraseIntensity::Light)));
                }
            }
            CoachingMove::Breaker => {
                phrases.push(self.pick(bank.grounding, Some(PhraseIntensity::Strong)));
                phrases.push(self.pick(bank.tactical_pivots, Some(PhraseIntensity::Strong)));
            }
            CoachingMove::None => {
                phrases.push(self.pick(bank.autonomy_respect, Some(PhraseIntensity::Light)));
                phrases.push(self.pick(bank.reflective_prompts, Some(PhraseIntensity::Light)));
            }
        }

        phrases
    }

    fn pacing_marker(&mut self, pacing: Pacing) -> String {
        let atoms = match pacing {
            Pacing::Slow => self.bank.pacing_slow,
            Pacing::Medium => self.bank.pacing_medium,
            Pacing::Fast => self.bank.pacing_fast,
        };
        self.pick(atoms, None)
    }

    /// Pick from a category, preferring the target intensity and phrases not
    /// seen in the recent window; falls back to the whole category
    fn pick(&mut self, atoms: &[VoiceAtom], intensity: Option<PhraseIntensity>) -> String {
        let by_intensity: Vec<&VoiceAtom> = match intensity {
            Some(want) => atoms.iter().filter(|a| a.intensity == Some(want)).collect(),
            None => atoms.iter().collect(),
        };
        let candidates = if by_intensity.is_empty() {
            atoms.iter().collect()
        } else {
            by_intensity
        };

        let fresh: Vec<&&VoiceAtom> = candidates
            .iter()
            .filter(|a| !self.recent.contains(a.text))
            .collect();
        let pool: Vec<&VoiceAtom> = if fresh.is_empty() {
            candidates.clone()
        } else {
            fresh.into_iter().copied().collect()
        };

        let chosen = pool[self.rng.gen_range(0..pool.len())];
        self.recent.remember(chosen.text);
        chosen.text.to_string()
    }

    /// Render the selection as a voice style guide for the reply generator
    pub fn build_style_hints(&self, selected: &SelectedPhrases) -> String {
        let mut hints = vec![
            "VOICE STYLE GUIDE:".to_string(),
            "- Write in the coaching voice: warm but direct, curious without interrogation, action-oriented without rushing.".to_string(),
            "- Use short sentences for clarity, longer sentences for reflection.".to_string(),
            "- Avoid corporate jargon, educational buzzwords, and excessive qualifiers.".to_string(),
        ];

        if let Some(marker) = &selected.pacing_marker {
            hints.push(format!("- Pacing: {}", marker));
        }
        if !selected.style_markers.is_empty() {
            hints.push(format!(
                "- Style markers: {}",
                selected.style_markers.join(", ")
            ));
        }
        if !selected.body.is_empty() {
            hints.push("\nPHRASE ATOMS TO WEAVE IN:".to_string());
            for (i, phrase) in selected.body.iter().enumerate() {
                hints.push(format!("{}. \"{}\"", i + 1, phrase));
            }
        }
        hints.push(
            "\nUse these phrases naturally in your response, adapting them to fit the context."
                .to_string(),
        );

        hints.join("\n")
    }

    pub fn fingerprint(&self) -> &LinguisticFingerprint {
        &self.fingerprint
    }

    pub fn recent_count(&self) -> usize {
        self.recent.len()
    }

    /// Clear the recency tracking
    pub fn reset(&mut self) {
        self.recent.clear();
    }
}

/// Style markers attached per coaching move
fn move_markers(mv: CoachingMove) -> &'static [&'static str] {
    match mv {
        CoachingMove::Affirm => &["affirming", "validating"],
        CoachingMove::Reframe => &["perspective-shifting", "reframing"],
        CoachingMove::Challenge => &["challenging-gently", "accountability-oriented"],
        CoachingMove::Motivate => &["energizing", "momentum-building"],
        CoachingMove::Accountability => &["clarity-focused", "action-oriented"],
        CoachingMove::Anchor => &["grounding", "concrete"],
        CoachingMove::Mirror => &["reflective", "metacognitive"],
        CoachingMove::Breaker => &["pattern-breaking", "strategic-redirect"],
        CoachingMove::None => &[],
    }
}

/// Fingerprint markers derived from tone thresholds
fn fingerprint_markers(tone: &ToneDirective) -> Vec<&'static str> {
    let mut markers = Vec::new();

    if tone.warmth >= 7.0 {
        markers.push("warm-empathetic");
    } else if tone.warmth <= 3.0 {
        markers.push("crisp-efficient");
    }
    if tone.directness >= 8.0 {
        markers.push("direct-clear");
    }
    if tone.assertiveness >= 7.0 {
        markers.push("confident-decisive");
    } else if tone.assertiveness <= 3.0 {
        markers.push("gentle-invitational");
    }
    if tone.specificity >= 8.0 {
        markers.push("concrete-actionable");
    }

    markers
}

// =============================================================================
// TESTS
// =============================================================================
