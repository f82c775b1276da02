// Demo mode: a bundled recording to showcase the replay UI
//
// This module fabricates the trace a naive scan-and-match engine would emit
// for an end-of-line-anchored literal pattern, over the same input the
// engine's test program uses.
//
// Key states demonstrated:
// - Empty claims while the scan cursor walks the input
// - Claims growing one sub-matcher at a time during an attempt
// - A near-miss ("again " mid-line) where claims reset
// - Three full matches, with the anchor claiming the line break cell
// - More sub-matchers than palette colors, so color assignment wraps
//
// Run with: retrace --demo

use crate::recording::{Claim, Recording, Step};

const DEMO_INPUT: &str = "hello\nagain goodbye\nagain\nhello again\ngoodbye again\n";
const DEMO_PATTERN: &str = "again";

/// Build the bundled sample recording: one sub-matcher per pattern
/// character plus a trailing end-of-line anchor, scanned naively from every
/// input position.
pub fn sample_recording() -> Recording {
    let chars: Vec<char> = DEMO_INPUT.chars().collect();
    let pattern: Vec<char> = DEMO_PATTERN.chars().collect();

    let mut matchers: Vec<String> = pattern.iter().map(|c| c.to_string()).collect();
    matchers.push("$".to_string());

    let idle = vec![Claim::empty(); matchers.len()];
    let mut items = vec![Step {
        string_pos: 0,
        matcher_state: idle.clone(),
    }];

    for origin in 0..chars.len() {
        // Extend the literal match one character at a time.
        let mut matched = 0;
        while matched < pattern.len()
            && origin + matched < chars.len()
            && chars[origin + matched] == pattern[matched]
        {
            matched += 1;
            items.push(Step {
                string_pos: origin + matched,
                matcher_state: attempt_state(&idle, origin, matched),
            });
        }

        // Full literal: the anchor claims the line break (or the cell past
        // the last character when the input has no trailing newline).
        if matched == pattern.len() {
            let at = origin + matched;
            if at == chars.len() || chars[at] == '\n' {
                let mut state = attempt_state(&idle, origin, matched);
                if let Some(anchor) = state.last_mut() {
                    *anchor = Claim::new(at, at + 1);
                }
                items.push(Step {
                    string_pos: at,
                    matcher_state: state,
                });
            }
        }

        // Attempt over; the scan moves to the next origin.
        items.push(Step {
            string_pos: origin + 1,
            matcher_state: idle.clone(),
        });
    }

    Recording {
        matchers,
        input_string: DEMO_INPUT.to_string(),
        items,
    }
}

/// Claim snapshot for an attempt at `origin` with `matched` literal
/// sub-matchers satisfied, each claiming its own character.
fn attempt_state(idle: &[Claim], origin: usize, matched: usize) -> Vec<Claim> {
    let mut state = idle.to_vec();
    for (offset, claim) in state.iter_mut().take(matched).enumerate() {
        *claim = Claim::new(origin + offset, origin + offset + 1);
    }
    state
}
