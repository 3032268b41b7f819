//! Rewriter: decomposes free text into thought units and resynthesizes
//! them as sentence arcs
//!
//! Core transformation: generic generated output -> the persona's pacing.

use lazy_static::lazy_static;
use regex::Regex;

use crate::types::{
    ClauseOptions, Pacing, RewriteOptions, SentenceArc, Sentiment, ThoughtUnit, ToneDirective,
};

use super::arcs::RhythmEngine;

lazy_static! {
    static ref RE_SENTENCE_BREAK: Regex = Regex::new(r"[.!?]+").unwrap();
    static ref RE_EMOTIONAL: Regex = Regex::new(
        r"(?i)feel|emotion|stress|overwhelm|anxious|worry|scared|confused|stuck|lost|difficult|hard|struggle|challenging"
    )
    .unwrap();
    static ref RE_DIRECTIONAL: Regex = Regex::new(
        r"(?i)should|need to|have to|must|going to|will|plan|do|action|step|move|next"
    )
    .unwrap();
    static ref RE_POSITIVE: Regex =
        Regex::new(r"(?i)good|great|excited|happy|confident|ready|can|able|progress").unwrap();
    static ref RE_NEGATIVE: Regex =
        Regex::new(r"(?i)bad|terrible|anxious|worried|can't|unable|stuck|lost|overwhelmed")
            .unwrap();
}

/// Transforms raw text into rhythm-patterned coaching text
#[derive(Debug, Default)]
pub struct Rewriter {
    engine: RhythmEngine,
}

impl Rewriter {
    pub fn new() -> Self {
        Self {
            engine: RhythmEngine::new(),
        }
    }

    /// Deterministic rewriting for tests and replay
    pub fn with_seed(seed: u64) -> Self {
        Self {
            engine: RhythmEngine::with_seed(seed),
        }
    }

    /// Rebuild content into sentence arcs, one per thought unit
    pub fn rewrite(&mut self, content: &str, tone: &ToneDirective, opts: &RewriteOptions) -> String {
        let thoughts = parse_thoughts(content);

        let keep = match opts.max_sentences {
            Some(max) => (max + 1) / 2,
            None => thoughts.len(),
        };

        let clause_opts = ClauseOptions {
            emotional_state: opts.emotional_state,
            pacing: opts.pacing,
            archetype: opts.archetype,
        };

        let arcs: Vec<String> = thoughts
            .iter()
            .take(keep)
            .map(|_| self.engine.build_arc(tone, &clause_opts, None).to_text())
            .collect();

        arcs.join(" ")
    }

    /// Build one arc directly for the given tone and options
    pub fn build_arc(&mut self, tone: &ToneDirective, opts: &RewriteOptions) -> SentenceArc {
        let clause_opts = ClauseOptions {
            emotional_state: opts.emotional_state,
            pacing: opts.pacing,
            archetype: opts.archetype,
        };
        self.engine.build_arc(tone, &clause_opts, None)
    }

    /// Light pass: keep the content, inserting breath markers every second
    /// sentence under slow pacing
    pub fn light_rewrite(&mut self, content: &str, opts: &RewriteOptions) -> String {
        let mut result = String::new();
        let mut sentence_count = 0;
        let mut cursor = 0;

        for found in RE_SENTENCE_BREAK.find_iter(content) {
            let sentence = &content[cursor..found.start()];
            if !sentence.trim().is_empty() {
                sentence_count += 1;
                if opts.pacing == Pacing::Slow && sentence_count % 2 == 0 && cursor > 0 {
                    let breath = self.engine.clauses_mut().breath_marker(opts.pacing);
                    result.push_str(&format!(" {} ", breath));
                }
                result.push_str(sentence);
            }
            result.push_str(found.as_str());
            cursor = found.end();
        }
        if cursor < content.len() {
            let tail = &content[cursor..];
            if !tail.trim().is_empty() {
                sentence_count += 1;
                if opts.pacing == Pacing::Slow && sentence_count % 2 == 0 && cursor > 0 {
                    let breath = self.engine.clauses_mut().breath_marker(opts.pacing);
                    result.push_str(&format!(" {} ", breath));
                }
                result.push_str(tail);
            }
        }

        result.trim().to_string()
    }

    pub fn reset(&mut self) {
        self.engine.reset();
    }
}

/// Split content on sentence boundaries and classify each segment
pub fn parse_thoughts(content: &str) -> Vec<ThoughtUnit> {
    RE_SENTENCE_BREAK
        .split(content)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|sentence| ThoughtUnit {
            content: sentence.to_string(),
            sentiment: analyze_sentiment(sentence),
            requires_validation: RE_EMOTIONAL.is_match(sentence),
            requires_direction: RE_DIRECTIONAL.is_match(sentence),
        })
        .collect()
}

/// Coarse sentiment; negative words win ties
fn analyze_sentiment(sentence: &str) -> Sentiment {
    if RE_NEGATIVE.is_match(sentence) {
        Sentiment::Negative
    } else if RE_POSITIVE.is_match(sentence) {
        Sentiment::Positive
    } else {
        Sentiment::Neutral
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{EmotionalState, RhythmPattern, ToneArchetype};

    fn opts(state: EmotionalState, pacing: Pacing) -> RewriteOptions {
        RewriteOptions {
            emotional_state: state,
            pacing,
            archetype: ToneArchetype::Unknown,
            max_sentences: None,
        }
    }

    fn tone() -> ToneDirective {
        ToneDirective {
            warmth: 5.0,
            directness: 5.0,
            assertiveness: 5.0,
            specificity: 5.0,
            pacing: Pacing::Medium,
            style_markers: vec![],
            rationale: "test".to_string(),
        }
    }

    #[test]
    fn test_parse_thoughts_splits_on_boundaries() {
        let thoughts = parse_thoughts("You should act now. This feels hard! Really?");
        assert_eq!(thoughts.len(), 3);
        assert_eq!(thoughts[0].content, "You should act now");
        assert!(thoughts[0].requires_direction);
        assert!(thoughts[1].requires_validation);
    }

    #[test]
    fn test_parse_thoughts_sentiment() {
        let thoughts = parse_thoughts("I'm worried about this. Great progress though. The sky is blue.");
        assert_eq!(thoughts[0].sentiment, Sentiment::Negative);
        assert_eq!(thoughts[1].sentiment, Sentiment::Positive);
        assert_eq!(thoughts[2].sentiment, Sentiment::Neutral);
    }

    #[test]
    fn test_negative_wins_mixed_sentiment() {
        let thoughts = parse_thoughts("Good plan but I'm stuck");
        assert_eq!(thoughts[0].sentiment, Sentiment::Negative);
    }

    #[test]
    fn test_parse_thoughts_empty_input() {
        assert!(parse_thoughts("").is_empty());
        assert!(parse_thoughts("...!!!").is_empty());
    }

    #[test]
    fn test_rewrite_produces_one_arc_per_thought() {
        let mut rewriter = Rewriter::with_seed(5);
        let out = rewriter.rewrite(
            "You need a plan. The timeline is tight.",
            &tone(),
            &opts(EmotionalState::Stable, Pacing::Medium),
        );
        assert!(!out.is_empty());
        // default pattern is the three-clause arc: 2 thoughts -> 6 sentences
        assert_eq!(out.matches('.').count(), 6);
    }

    #[test]
    fn test_rewrite_caps_sentences() {
        let mut rewriter = Rewriter::with_seed(5);
        let mut o = opts(EmotionalState::Stable, Pacing::Fast);
        o.max_sentences = Some(2);
        let out = rewriter.rewrite(
            "First point. Second point. Third point. Fourth point.",
            &tone(),
            &o,
        );
        // one thought kept -> one arc
        assert!(!out.is_empty());
    }

    #[test]
    fn test_overwhelmed_rewrite_uses_grounding_clarity() {
        let mut rewriter = Rewriter::with_seed(5);
        let arc = rewriter.build_arc(&tone(), &opts(EmotionalState::Overwhelmed, Pacing::Fast));
        assert_eq!(arc.pattern, RhythmPattern::GroundingClarity);
    }

    #[test]
    fn test_light_rewrite_preserves_text_without_slow_pacing() {
        let mut rewriter = Rewriter::with_seed(5);
        let input = "Keep going. You are close.";
        let out = rewriter.light_rewrite(input, &opts(EmotionalState::Stable, Pacing::Medium));
        assert_eq!(out, input);
    }

    #[test]
    fn test_light_rewrite_inserts_breath_markers_when_slow() {
        let mut rewriter = Rewriter::with_seed(5);
        let input = "Keep going. You are close. One more push. Almost there.";
        let out = rewriter.light_rewrite(input, &opts(EmotionalState::Stable, Pacing::Slow));
        assert!(out.len() > input.len());
    }

    #[test]
    fn test_seeded_rewrite_is_deterministic() {
        let mut a = Rewriter::with_seed(21);
        let mut b = Rewriter::with_seed(21);
        let o = opts(EmotionalState::Stressed, Pacing::Slow);
        assert_eq!(
            a.rewrite("This is hard. What now?", &tone(), &o),
            b.rewrite("This is hard. What now?", &tone(), &o)
        );
    }
}
