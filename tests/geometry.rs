//! Validates orientation state transitions and the edge identity permutation

use jigtile::geometry::{EdgeLabel, Orientation, Side};
use std::collections::HashSet;

#[test]
fn test_search_order_covers_every_orientation_once() {
    let slots: HashSet<usize> = Orientation::SEARCH_ORDER
        .iter()
        .map(|orientation| orientation.slot())
        .collect();

    assert_eq!(
        slots.len(),
        Orientation::COUNT,
        "Search order must visit all eight orientations exactly once"
    );
    assert!(
        slots.iter().all(|&slot| slot < Orientation::COUNT),
        "Every slot must be within the fixed cache range"
    );
}

#[test]
fn test_four_quarter_turns_are_identity() {
    let mut orientation = Orientation::CANONICAL;
    for _ in 0..4 {
        orientation = orientation.rotated();
    }
    assert_eq!(orientation, Orientation::CANONICAL);

    let start = Orientation::new(2, true);
    let full_turn = start.rotated().rotated().rotated().rotated();
    assert_eq!(full_turn, start);
}

#[test]
fn test_double_flip_is_identity() {
    let start = Orientation::new(3, false);
    assert_eq!(start.flipped().flipped(), start);
    assert!(start.flipped().is_flipped());
    assert!(!start.is_flipped());
}

#[test]
fn test_rotation_count_wraps() {
    assert_eq!(Orientation::new(5, false), Orientation::new(1, false));
    assert_eq!(Orientation::new(4, true), Orientation::new(0, true));
}

#[test]
fn test_canonical_edge_labels() {
    let canonical = Orientation::CANONICAL;
    assert_eq!(canonical.edge_label(Side::North), EdgeLabel::Top);
    assert_eq!(canonical.edge_label(Side::East), EdgeLabel::Right);
    assert_eq!(canonical.edge_label(Side::South), EdgeLabel::Bottom);
    assert_eq!(canonical.edge_label(Side::West), EdgeLabel::Left);
}

#[test]
fn test_quarter_turn_permutes_edge_labels() {
    // One clockwise quarter turn: north shows the reversed west edge
    let rotated = Orientation::CANONICAL.rotated();
    assert_eq!(rotated.edge_label(Side::North), EdgeLabel::LeftRev);
    assert_eq!(rotated.edge_label(Side::East), EdgeLabel::Top);
    assert_eq!(rotated.edge_label(Side::South), EdgeLabel::RightRev);
    assert_eq!(rotated.edge_label(Side::West), EdgeLabel::Bottom);
}

#[test]
fn test_mirror_permutes_edge_labels() {
    // Mirroring reverses north and south in place and swaps east with west
    let flipped = Orientation::CANONICAL.flipped();
    assert_eq!(flipped.edge_label(Side::North), EdgeLabel::TopRev);
    assert_eq!(flipped.edge_label(Side::East), EdgeLabel::Left);
    assert_eq!(flipped.edge_label(Side::South), EdgeLabel::BottomRev);
    assert_eq!(flipped.edge_label(Side::West), EdgeLabel::Right);
}

#[test]
fn test_every_orientation_shows_four_distinct_edges() {
    for orientation in Orientation::SEARCH_ORDER {
        let labels: HashSet<EdgeLabel> = Side::ALL
            .iter()
            .map(|&side| orientation.edge_label(side))
            .collect();
        assert_eq!(
            labels.len(),
            Side::COUNT,
            "Orientation {orientation:?} repeats an edge label across sides"
        );
    }
}

#[test]
fn test_label_reversal_is_involution() {
    let labels = [
        EdgeLabel::Top,
        EdgeLabel::Right,
        EdgeLabel::Bottom,
        EdgeLabel::Left,
        EdgeLabel::TopRev,
        EdgeLabel::RightRev,
        EdgeLabel::BottomRev,
        EdgeLabel::LeftRev,
    ];

    for label in labels {
        assert_eq!(label.reversed().reversed(), label);
        assert_ne!(label.reversed(), label);
    }
}

#[test]
fn test_side_opposites() {
    for side in Side::ALL {
        assert_eq!(side.opposite().opposite(), side);
        assert_ne!(side.opposite(), side);
    }
    assert_eq!(Side::North.opposite(), Side::South);
    assert_eq!(Side::East.opposite(), Side::West);
}

#[test]
fn test_side_display_names() {
    assert_eq!(Side::North.to_string(), "north");
    assert_eq!(Side::East.to_string(), "east");
    assert_eq!(Side::South.to_string(), "south");
    assert_eq!(Side::West.to_string(), "west");
}
