//! End-to-end tests for the fingering pipeline:
//! fretboard, scale construction, enumeration and ranking.

use fretscale::{
    build_scale, candidate_count, enumerate_fingerings, fingerings_for_octave,
    fingerings_for_scale, is_consistent, rank_fingerings, DistanceMetric, Fretboard,
    GeneratorOptions, NoteName, Pitch, Position, ScaleKind, MAX_OCTAVE, MIN_OCTAVE, SCALE_CUTOFF,
};
use pretty_assertions::assert_eq;

// ═══════════════════════════════════════════════════════════════════════
// Fretboard
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn every_indexed_pitch_is_in_the_modeled_range() {
    let board = Fretboard::standard_guitar();
    for (pitch, positions) in board.indexed_pitches() {
        assert!((MIN_OCTAVE..=MAX_OCTAVE).contains(&pitch.octave), "{pitch}");
        assert!(positions.iter().all(|p| board.pitch_at(*p) == Some(*pitch)));
    }
    let indexed: usize = board.indexed_pitches().map(|(_, ps)| ps.len()).sum();
    assert_eq!(indexed, 6 * 25, "every position should be indexed exactly once");
}

// ═══════════════════════════════════════════════════════════════════════
// Pipeline
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn a3_major_end_to_end() {
    let board = Fretboard::standard_guitar();
    let result = fingerings_for_scale(
        &board,
        Pitch::new(NoteName::A, 3),
        ScaleKind::Major,
        &GeneratorOptions::default(),
    );

    assert!(!result.fingerings.is_empty());
    assert!(result.fingerings.len() <= SCALE_CUTOFF);
    for f in &result.fingerings {
        assert!(is_consistent(f.positions.iter().copied()));
        let sounded: Vec<Pitch> = f.positions.iter().map(|p| board.pitch_at(*p).unwrap()).collect();
        assert_eq!(sounded, result.scale);
    }
    for w in result.fingerings.windows(2) {
        assert!(w[0].score <= w[1].score, "{} > {}", w[0].score, w[1].score);
    }

    println!("✓ A3maj: {} candidates, {} consistent", result.candidates, result.consistent);
    for f in &result.fingerings {
        println!("  S = {:.1}: {:?}", f.score, f.positions);
    }
}

#[test]
fn ranking_matches_manual_pipeline() {
    let board = Fretboard::standard_guitar();
    let scale = build_scale(Pitch::new(NoteName::D, 3), ScaleKind::Minor.steps());
    let paths = enumerate_fingerings(&scale, &board);
    assert_eq!(paths.len(), candidate_count(&scale, &board));

    let manual = rank_fingerings(&paths, SCALE_CUTOFF, DistanceMetric::Euclidean);
    let piped = fingerings_for_scale(
        &board,
        Pitch::new(NoteName::D, 3),
        ScaleKind::Minor,
        &GeneratorOptions::default(),
    );
    assert_eq!(manual, piped.fingerings);
}

#[test]
fn best_e2_minor_stays_compact() {
    let board = Fretboard::standard_guitar();
    let result = fingerings_for_scale(
        &board,
        Pitch::new(NoteName::E, 2),
        ScaleKind::Minor,
        &GeneratorOptions::default(),
    );
    let best = &result.fingerings[0];
    let max_slot = best.positions.iter().map(|p| p.slot).max().unwrap();
    let min_slot = best.positions.iter().map(|p| p.slot).min().unwrap();
    assert!(max_slot - min_slot <= 4, "best shape spans frets {min_slot}..{max_slot}");
    assert_eq!(best.positions[0], Position::new(5, 0));
}

#[test]
fn manhattan_metric_changes_scores_not_validity() {
    let board = Fretboard::standard_guitar();
    let options = GeneratorOptions {
        metric: DistanceMetric::Manhattan,
        ..Default::default()
    };
    let result = fingerings_for_scale(&board, Pitch::new(NoteName::G, 3), ScaleKind::Major, &options);
    assert!(!result.fingerings.is_empty());
    assert!(result.fingerings.iter().all(|f| is_consistent(f.positions.iter().copied())));
    assert!(result.fingerings.windows(2).all(|w| w[0].score <= w[1].score));
}

#[test]
fn octave_two_skips_roots_below_low_e() {
    let board = Fretboard::standard_guitar();
    let results = fingerings_for_octave(
        &board,
        2,
        ScaleKind::Minor,
        &NoteName::ALL,
        &GeneratorOptions::default(),
    );
    assert_eq!(results.len(), 12);
    for r in &results {
        let below_low_e = r.root.index() < NoteName::E.index();
        assert_eq!(r.is_empty(), below_low_e, "{}", r.label());
    }
}

#[test]
fn top_octave_has_no_fingerings_past_the_last_fret() {
    let board = Fretboard::standard_guitar();
    // The scale closes on the octave-7 root, which no fret reaches.
    let results = fingerings_for_octave(
        &board,
        6,
        ScaleKind::Major,
        &NoteName::ALL,
        &GeneratorOptions::default(),
    );
    assert!(results.iter().all(|r| r.is_empty() && r.candidates == 0));
}
