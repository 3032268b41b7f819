//! Clause generator: the building blocks of the sentence arcs
//!
//! Pools are keyed by emotional state, pacing, and archetype; picks avoid
//! the recent window so adjacent arcs don't echo each other.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::{ClauseOptions, EmotionalState, Pacing, RecencyWindow, ToneArchetype};
use crate::CLAUSE_RECENCY_LIMIT;

/// Generates context-aware clauses with recency avoidance
#[derive(Debug)]
pub struct ClauseGenerator {
    recent: RecencyWindow,
    rng: StdRng,
}

impl Default for ClauseGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl ClauseGenerator {
    pub fn new() -> Self {
        Self {
            recent: RecencyWindow::new(CLAUSE_RECENCY_LIMIT),
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic generation for tests and replay
    pub fn with_seed(seed: u64) -> Self {
        Self {
            recent: RecencyWindow::new(CLAUSE_RECENCY_LIMIT),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// First clause: acknowledge the student's state
    pub fn validation_clause(&mut self, opts: &ClauseOptions) -> String {
        let mut pool: Vec<&'static str> = match opts.emotional_state {
            EmotionalState::Overwhelmed => vec![
                "This is a lot to hold.",
                "It makes sense your head feels crowded here.",
                "You're carrying something heavy in this moment.",
                "That's a real weight you're navigating.",
                "Anyone would feel stretched thin with this much on their plate.",
                "This is genuinely overwhelming, and I see that.",
                "Your system is telling you this is too much, and that's valid.",
                "It's completely understandable that this feels like a lot right now.",
            ],
            EmotionalState::Stressed => vec![
                "That tension is real.",
                "Anyone in your spot would feel this pull.",
                "Your reaction is grounded in reality.",
                "I can feel the pressure you're describing.",
                "This is the kind of stress that deserves attention.",
                "That's a legitimate source of friction.",
                "The anxiety you're feeling makes complete sense given the context.",
                "I hear the weight in what you're saying.",
            ],
            EmotionalState::Stable => vec![
                "This tracks with where you've been.",
                "I see the logic in how you're feeling.",
                "This fits the pattern of what you've shared.",
                "That resonates with what I know about your situation.",
                "Your read on this is solid.",
                "I'm tracking with you on this.",
                "This is consistent with the trajectory you've been on.",
                "That makes sense from where you're standing.",
            ],
        };

        match (opts.archetype, opts.emotional_state) {
            (ToneArchetype::AnxiousPerfectionist, state) if state != EmotionalState::Stable => {
                pool.push("You're holding yourself to a standard that's creating real strain.");
                pool.push("The perfectionism here is adding an extra layer of pressure.");
            }
            (ToneArchetype::UnfocusedExplorer, EmotionalState::Overwhelmed) => {
                pool.push("There's a lot of competing directions here, and that's disorienting.");
                pool.push("When everything feels important, nothing feels clear.");
            }
            (ToneArchetype::QuietDeepThinker, EmotionalState::Stressed) => {
                pool.push("You're processing a lot internally, and that takes energy.");
                pool.push("The mental load you're carrying isn't always visible, but it's real.");
            }
            _ => {}
        }

        self.pick(&pool)
    }

    /// Second clause: provide direction or clarity
    pub fn direction_clause(&mut self, opts: &ClauseOptions) -> String {
        let mut pool: Vec<&'static str> = match opts.pacing {
            Pacing::Slow => vec![
                "Let's zoom out for a second and notice the bigger pattern.",
                "Here's one small step that keeps things manageable.",
                "Let's anchor to the simplest next move.",
                "What I want to do is slow this down and look at one piece at a time.",
                "Let's ground in what you can actually control right now.",
                "Here's where I'd start: just one manageable action.",
                "Let's give this the space it needs and not rush the process.",
                "The move here is to simplify, not solve everything at once.",
            ],
            Pacing::Fast => vec![
                "Here's the clean move that gives momentum.",
                "Let's capitalize on this energy.",
                "This is where you make a quick, high-leverage adjustment.",
                "The tactical play here is to act while you have clarity.",
                "Here's the decision that unlocks the next phase.",
                "Let's ride this momentum and make a clear choice.",
                "This is your window, so let's use it strategically.",
                "The move is to commit and execute, not overthink.",
            ],
            Pacing::Medium => vec![
                "Here's the direction that actually serves you.",
                "Let's shape this into something workable.",
                "Here's the move I'd focus on next.",
                "What matters most is getting traction on one clear thing.",
                "Let's build a bridge between where you are and where you want to be.",
                "The path forward is clearer than it feels right now.",
                "Here's what I'd prioritize if I were in your position.",
                "Let's turn this into concrete action.",
            ],
        };

        match (opts.archetype, opts.pacing, opts.emotional_state) {
            (ToneArchetype::HighAchiever, Pacing::Fast, _) => {
                pool.push("This is where your bias for action becomes your advantage.");
                pool.push("You have the momentum, so let's channel it into the highest-ROI move.");
            }
            (ToneArchetype::ReluctantPragmatist, _, EmotionalState::Stressed) => {
                pool.push("I know you're skeptical, but here's the pragmatic next step.");
                pool.push("Let's focus on what's actually realistic and doable, not ideal.");
            }
            (ToneArchetype::UnfocusedExplorer, Pacing::Slow, _) => {
                pool.push("Let's narrow the options down to one clear direction.");
                pool.push("What you need right now is focus, not more possibilities.");
            }
            _ => {}
        }

        self.pick(&pool)
    }

    /// Optional third clause: closing validation and confidence
    pub fn encouragement_clause(&mut self, opts: &ClauseOptions) -> String {
        let mut pool: Vec<&'static str> = vec![
            "You're more capable here than you think.",
            "You can absolutely handle this.",
            "This is a solvable problem with the right pacing.",
            "I see your capacity to navigate this.",
            "You've got what it takes to move through this.",
            "This is within your range, so trust that.",
            "You're building the skill as you go.",
            "The fact that you're engaging with this is already progress.",
        ];

        match opts.emotional_state {
            EmotionalState::Overwhelmed => {
                pool.push("You don't have to solve it all at once.");
                pool.push("One step at a time is enough.");
                pool.push("Give yourself permission to pace this.");
            }
            EmotionalState::Stable => {
                pool.push("You're in a good position to make meaningful progress here.");
                pool.push("This is exactly the kind of clarity that leads to action.");
                pool.push("You're ready for this next step.");
            }
            EmotionalState::Stressed => {}
        }

        match opts.archetype {
            ToneArchetype::AnxiousPerfectionist => {
                pool.push("Progress, not perfection, is the goal here.");
                pool.push("You don't need to have it all figured out to move forward.");
            }
            ToneArchetype::HighAchiever => {
                pool.push("This is where your drive becomes your edge.");
                pool.push("You're built for this kind of challenge.");
            }
            ToneArchetype::QuietDeepThinker => {
                pool.push("Your thoughtfulness here is an asset, not a liability.");
                pool.push("Trust the internal process you're working through.");
            }
            _ => {}
        }

        self.pick(&pool)
    }

    /// Transition phrase creating a pause or rhythm shift
    pub fn breath_marker(&mut self, pacing: Pacing) -> String {
        let pool: &[&'static str] = match pacing {
            Pacing::Slow => &[
                "Okay.",
                "So.",
                "Here's the thing.",
                "Let's pause here.",
                "Take a breath.",
                "Before we move on,",
            ],
            Pacing::Medium => &[
                "Alright.",
                "So here's what I'm seeing.",
                "Here's the pattern.",
                "Now,",
                "From here,",
            ],
            Pacing::Fast => &[
                "Quick note:",
                "Bottom line:",
                "Here's the move:",
                "Fast-forward:",
                "Real talk:",
            ],
        };
        self.pick(pool)
    }

    /// Softener that turns a directive into an invitation
    pub fn softener(&mut self) -> String {
        self.pick(&[
            "Let's",
            "What I'd suggest is",
            "Here's what might serve you:",
            "What will help here is",
            "The move that makes sense is",
            "What I'm thinking is",
            "One option is",
            "What could work here:",
        ])
    }

    /// Pick from a pool, avoiding recent repeats; falls back to the full
    /// pool once everything has been used recently
    fn pick(&mut self, pool: &[&'static str]) -> String {
        let fresh: Vec<&'static str> = pool
            .iter()
            .copied()
            .filter(|c| !self.recent.contains(c))
            .collect();
        let available: &[&'static str] = if fresh.is_empty() { pool } else { &fresh };

        let chosen = available[self.rng.gen_range(0..available.len())];
        self.recent.remember(chosen);
        chosen.to_string()
    }

    pub fn recent_count(&self) -> usize {
        self.recent.len()
    }

    pub fn reset(&mut self) {
        self.recent.clear();
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(state: EmotionalState, pacing: Pacing, archetype: ToneArchetype) -> ClauseOptions {
        ClauseOptions {
            emotional_state: state,
            pacing,
            archetype,
        }
    }

    #[test]
    fn test_validation_clause_nonempty() {
        let mut generator = ClauseGenerator::with_seed(1);
        for state in [
            EmotionalState::Stable,
            EmotionalState::Stressed,
            EmotionalState::Overwhelmed,
        ] {
            let clause =
                generator.validation_clause(&opts(state, Pacing::Medium, ToneArchetype::Unknown));
            assert!(!clause.is_empty());
        }
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let mut a = ClauseGenerator::with_seed(99);
        let mut b = ClauseGenerator::with_seed(99);
        let o = opts(
            EmotionalState::Stressed,
            Pacing::Slow,
            ToneArchetype::AnxiousPerfectionist,
        );
        for _ in 0..10 {
            assert_eq!(a.validation_clause(&o), b.validation_clause(&o));
            assert_eq!(a.direction_clause(&o), b.direction_clause(&o));
        }
    }

    #[test]
    fn test_no_repeat_until_pool_exhausted() {
        let mut generator = ClauseGenerator::with_seed(4);
        let o = opts(EmotionalState::Stable, Pacing::Medium, ToneArchetype::Unknown);
        let mut seen = std::collections::HashSet::new();
        // stable pool has 8 entries and the window holds 30
        for _ in 0..8 {
            assert!(seen.insert(generator.validation_clause(&o)));
        }
    }

    #[test]
    fn test_exhausted_pool_falls_back() {
        let mut generator = ClauseGenerator::with_seed(4);
        for _ in 0..6 {
            generator.breath_marker(Pacing::Slow);
        }
        // pool of 6 is exhausted; the next pick must still succeed
        let marker = generator.breath_marker(Pacing::Slow);
        assert!(!marker.is_empty());
    }

    #[test]
    fn test_reset_clears_recency() {
        let mut generator = ClauseGenerator::with_seed(2);
        generator.softener();
        assert!(generator.recent_count() > 0);
        generator.reset();
        assert_eq!(generator.recent_count(), 0);
    }
}
