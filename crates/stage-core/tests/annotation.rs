// Host-side tests for the annotation hover/select state machine.

use glam::{Quat, Vec3};
use proptest::prelude::*;
use stage_core::*;

fn set_of(n: usize) -> AnnotationSet {
    AnnotationSet::new(
        (0..n)
            .map(|i| Annotation::new(Vec3::new(i as f32, 0.0, 0.0), format!("a{i}")))
            .collect(),
    )
}

fn tier(set: &AnnotationSet, i: usize) -> VisualTier {
    set.get(i).unwrap().visual.tier()
}

#[test]
fn tiers_map_to_the_three_levels() {
    assert_eq!(
        (VisualTier::Idle.scale(), VisualTier::Idle.opacity()),
        (1.0, 0.01)
    );
    assert_eq!(
        (VisualTier::Hovered.scale(), VisualTier::Hovered.opacity()),
        (1.5, 0.8)
    );
    assert_eq!(
        (VisualTier::Selected.scale(), VisualTier::Selected.opacity()),
        (2.0, 1.0)
    );
}

#[test]
fn hover_enter_and_exit() {
    let mut set = set_of(2);
    assert!(set.set_hovered(Some(0)));
    assert_eq!(tier(&set, 0), VisualTier::Hovered);
    // moving directly to another annotation demotes the first
    assert!(set.set_hovered(Some(1)));
    assert_eq!(tier(&set, 0), VisualTier::Idle);
    assert_eq!(tier(&set, 1), VisualTier::Hovered);
    assert!(set.set_hovered(None));
    assert_eq!(tier(&set, 1), VisualTier::Idle);
    assert_eq!(set.hovered(), None);
    // repeated clear is not a change
    assert!(!set.set_hovered(None));
}

#[test]
fn selecting_b_after_a_leaves_only_b_selected() {
    let mut set = set_of(3);
    assert!(set.select(0));
    assert!(set.select(2));
    assert_eq!(set.selected(), Some(2));
    assert_eq!(tier(&set, 0), VisualTier::Idle);
    assert_eq!(tier(&set, 2), VisualTier::Selected);
    let selected_count = set
        .iter()
        .filter(|a| a.visual.tier() == VisualTier::Selected)
        .count();
    assert_eq!(selected_count, 1);
}

#[test]
fn selection_dominates_hover() {
    let mut set = set_of(2);
    set.select(0);
    // hovering the selected annotation is a no-op on its tier
    set.set_hovered(Some(0));
    assert_eq!(tier(&set, 0), VisualTier::Selected);
    // leaving it does not demote it either
    set.set_hovered(Some(1));
    assert_eq!(tier(&set, 0), VisualTier::Selected);
    set.set_hovered(None);
    assert_eq!(tier(&set, 0), VisualTier::Selected);
}

#[test]
fn clear_selection_returns_to_idle() {
    let mut set = set_of(1);
    set.select(0);
    assert_eq!(set.clear_selection(), Some(0));
    assert_eq!(tier(&set, 0), VisualTier::Idle);
    assert_eq!(set.clear_selection(), None);
}

#[test]
fn out_of_range_indices_are_ignored() {
    let mut set = set_of(1);
    assert!(!set.select(5));
    assert_eq!(set.selected(), None);
    assert!(!set.set_hovered(Some(9)));
    assert_eq!(set.hovered(), None);
}

#[test]
fn replace_drops_all_state() {
    let mut set = set_of(2);
    set.select(1);
    set.set_hovered(Some(0));
    set.replace(vec![Annotation::new(Vec3::ZERO, "fresh")]);
    assert_eq!(set.len(), 1);
    assert_eq!(set.selected(), None);
    assert_eq!(set.hovered(), None);
    assert_eq!(tier(&set, 0), VisualTier::Idle);
}

#[test]
fn step_moves_ten_percent_and_converges() {
    let mut v = VisualState::default();
    v.set_tier(VisualTier::Selected);
    assert!(v.step());
    assert!((v.current_scale - 1.1).abs() < 1e-6);
    assert!((v.current_opacity - (0.01 + 0.99 * 0.1)).abs() < 1e-6);
    let mut frames = 0;
    while v.step() {
        frames += 1;
        assert!(frames < 1000, "smoothing never converged");
    }
    assert!(v.is_converged());
    assert!(v.current_scale <= 2.0);
    // converged values are left alone
    let before = v;
    assert!(!v.step());
    assert_eq!(before, v);
}

#[test]
fn face_copies_camera_rotation() {
    let mut set = set_of(2);
    let q = Quat::from_rotation_y(0.7);
    set.face(q);
    assert!(set.iter().all(|a| a.rotation == q));
}

fn tier_from(i: u8) -> VisualTier {
    match i % 3 {
        0 => VisualTier::Idle,
        1 => VisualTier::Hovered,
        _ => VisualTier::Selected,
    }
}

proptest! {
    #[test]
    fn current_values_approach_without_overshoot(
        tiers in proptest::collection::vec(0u8..3, 1..6),
        frames in 1usize..40,
    ) {
        let mut v = VisualState::default();
        for t in tiers {
            v.set_tier(tier_from(t));
            prop_assert!([1.0, 1.5, 2.0].contains(&v.target_scale()));
            prop_assert!([0.01, 0.8, 1.0].contains(&v.target_opacity()));
            for _ in 0..frames {
                let gap_s = v.target_scale() - v.current_scale;
                let gap_o = v.target_opacity() - v.current_opacity;
                v.step();
                let new_gap_s = v.target_scale() - v.current_scale;
                let new_gap_o = v.target_opacity() - v.current_opacity;
                prop_assert!(new_gap_s.abs() <= gap_s.abs());
                prop_assert!(new_gap_o.abs() <= gap_o.abs());
                // same side of the target as before the step
                prop_assert!(new_gap_s * gap_s >= 0.0);
                prop_assert!(new_gap_o * gap_o >= 0.0);
            }
        }
    }

    #[test]
    fn at_most_one_selected(ops in proptest::collection::vec((0u8..3, 0usize..4), 0..30)) {
        let mut set = set_of(4);
        for (op, i) in ops {
            match op {
                0 => { set.select(i); }
                1 => { set.set_hovered(Some(i)); }
                _ => { set.clear_selection(); }
            }
            let selected = set
                .iter()
                .filter(|a| a.visual.tier() == VisualTier::Selected)
                .count();
            prop_assert!(selected <= 1);
            prop_assert_eq!(selected == 1, set.selected().is_some());
        }
    }
}
