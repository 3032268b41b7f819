//! Integration tests for the rendering layer
//!
//! Verifies the phrasebank recipes and the rhythm engine's pattern routing,
//! including the recency-avoidance discipline on both recency windows.

use pretty_assertions::assert_eq;

use jenny0::core::rhythm::{rewriter::parse_thoughts, Rewriter, RhythmEngine};
use jenny0::core::PhrasebankEngine;
use jenny0::types::{
    ClauseOptions, CoachingMove, EmotionalState, Pacing, PhraseBank, RewriteOptions,
    RhythmPattern, ToneArchetype, ToneDirective,
};

fn tone(warmth: f64, directness: f64, assertiveness: f64, pacing: Pacing) -> ToneDirective {
    ToneDirective {
        warmth,
        directness,
        assertiveness,
        specificity: 6.0,
        pacing,
        style_markers: vec![],
        rationale: "test".to_string(),
    }
}

// =============================================================================
// SCENARIO 1: Phrasebank recipes
// =============================================================================

#[test]
fn test_breaker_recipe_is_grounding_plus_pivot() {
    let mut engine = PhrasebankEngine::with_seed(13);
    let bank = PhraseBank::jenny();

    let selected = engine.select(&tone(5.0, 5.0, 5.0, Pacing::Fast), CoachingMove::Breaker);
    assert_eq!(selected.body.len(), 2);
    assert!(bank.grounding.iter().any(|a| a.text == selected.body[0]));
    assert!(bank.tactical_pivots.iter().any(|a| a.text == selected.body[1]));
}

#[test]
fn test_affirm_recipe_scales_with_warmth() {
    let bank = PhraseBank::jenny();

    // cold affirm: single light validation
    let mut engine = PhrasebankEngine::with_seed(13);
    let selected = engine.select(&tone(2.0, 5.0, 5.0, Pacing::Medium), CoachingMove::Affirm);
    assert_eq!(selected.body.len(), 1);

    // warm affirm: validation plus empathy infusion
    let mut engine = PhrasebankEngine::with_seed(13);
    let selected = engine.select(&tone(8.0, 5.0, 5.0, Pacing::Medium), CoachingMove::Affirm);
    assert_eq!(selected.body.len(), 2);
    assert!(bank.validations.iter().any(|a| a.text == selected.body[0]));
    assert!(bank
        .empathy_infusions
        .iter()
        .any(|a| a.text == selected.body[1]));
}

#[test]
fn test_pacing_marker_matches_bucket() {
    let bank = PhraseBank::jenny();
    let mut engine = PhrasebankEngine::with_seed(17);

    let selected = engine.select(&tone(5.0, 5.0, 5.0, Pacing::Slow), CoachingMove::None);
    let marker = selected.pacing_marker.unwrap();
    assert!(bank.pacing_slow.iter().any(|a| a.text == marker));
}

#[test]
fn test_phrasebank_recency_window_avoids_repeats() {
    let mut engine = PhrasebankEngine::with_seed(19);
    let mut picks = Vec::new();

    // grounding-strong has 3 atoms; three breaker turns consume it without a
    // repeat in either slot
    for _ in 0..3 {
        let selected = engine.select(&tone(5.0, 5.0, 5.0, Pacing::Fast), CoachingMove::Breaker);
        picks.push(selected.body.clone());
    }
    let grounding: Vec<&String> = picks.iter().map(|b| &b[0]).collect();
    let pivots: Vec<&String> = picks.iter().map(|b| &b[1]).collect();
    for slot in [grounding, pivots] {
        let unique: std::collections::HashSet<&&String> = slot.iter().collect();
        assert_eq!(unique.len(), slot.len());
    }
}

// =============================================================================
// SCENARIO 2: Rhythm pattern routing
// =============================================================================

#[test]
fn test_overwhelmed_always_selects_grounding_clarity() {
    let engine = RhythmEngine::with_seed(23);

    // regardless of tone and archetype inputs
    for (t, archetype) in [
        (tone(9.0, 9.0, 9.0, Pacing::Fast), ToneArchetype::HighAchiever),
        (tone(0.0, 0.0, 0.0, Pacing::Slow), ToneArchetype::Unknown),
        (
            tone(5.0, 8.0, 2.0, Pacing::Medium),
            ToneArchetype::QuietDeepThinker,
        ),
    ] {
        let opts = ClauseOptions {
            emotional_state: EmotionalState::Overwhelmed,
            pacing: t.pacing,
            archetype,
        };
        assert_eq!(
            engine.select_pattern(&t, &opts),
            RhythmPattern::GroundingClarity
        );
    }
}

#[test]
fn test_grounding_clarity_arc_shape() {
    let mut engine = RhythmEngine::with_seed(29);
    let opts = ClauseOptions {
        emotional_state: EmotionalState::Overwhelmed,
        pacing: Pacing::Slow,
        archetype: ToneArchetype::AnxiousPerfectionist,
    };
    let arc = engine.grounding_clarity_arc(&opts);

    assert_eq!(arc.pattern, RhythmPattern::GroundingClarity);
    assert!(arc.validation.is_some());
    assert!(arc.direction.is_some());
    assert!(arc.encouragement.is_none());
    // at least one of validation/direction always populated
    assert!(!arc.to_text().is_empty());
}

#[test]
fn test_rewriter_segments_and_classifies() {
    let thoughts = parse_thoughts(
        "I know this feels overwhelming. The next step is to draft your activity list. You have made real progress.",
    );
    assert_eq!(thoughts.len(), 3);
    assert!(thoughts[0].requires_validation);
    assert!(thoughts[1].requires_direction);
}

#[test]
fn test_rewrite_emits_arcs_for_each_thought() {
    let mut rewriter = Rewriter::with_seed(31);
    let opts = RewriteOptions {
        emotional_state: EmotionalState::Stressed,
        pacing: Pacing::Slow,
        archetype: ToneArchetype::AnxiousPerfectionist,
        max_sentences: None,
    };
    let out = rewriter.rewrite(
        "You should simplify your plan. Focus on one thing.",
        &tone(8.0, 5.0, 3.0, Pacing::Slow),
        &opts,
    );
    assert!(!out.is_empty());
    // stressed + slow routes to empathy-action, which always encourages
    assert!(out.split(' ').count() > 6);
}

#[test]
fn test_rhythm_recency_no_repeat_within_window() {
    let mut engine = RhythmEngine::with_seed(37);
    let opts = ClauseOptions {
        emotional_state: EmotionalState::Stable,
        pacing: Pacing::Medium,
        archetype: ToneArchetype::Unknown,
    };

    let mut seen = std::collections::HashSet::new();
    // the stable validation pool holds 8 entries, under the window of 30
    for _ in 0..8 {
        let arc = engine.two_sentence_arc(&opts);
        assert!(seen.insert(arc.validation.unwrap()));
    }
}

#[test]
fn test_seeded_rendering_is_reproducible() {
    let opts = RewriteOptions {
        emotional_state: EmotionalState::Overwhelmed,
        pacing: Pacing::Slow,
        archetype: ToneArchetype::UnfocusedExplorer,
        max_sentences: None,
    };
    let t = tone(7.0, 4.0, 3.0, Pacing::Slow);

    let mut a = Rewriter::with_seed(41);
    let mut b = Rewriter::with_seed(41);
    assert_eq!(
        a.rewrite("This is a lot. Where do I even start?", &t, &opts),
        b.rewrite("This is a lot. Where do I even start?", &t, &opts)
    );
}
