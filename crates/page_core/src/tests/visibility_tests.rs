use super::*;
use crate::test_support::FixedLayout;

#[test]
fn fraction_of_fully_visible_region_is_one() {
    let viewport = Bounds::from_min_size(0.0, 0.0, 800.0, 600.0);
    let region = Bounds::from_min_size(100.0, 100.0, 200.0, 200.0);
    assert_eq!(visible_fraction(region, viewport), 1.0);
}

#[test]
fn fraction_of_partially_scrolled_region() {
    let viewport = Bounds::from_min_size(0.0, 0.0, 800.0, 600.0);
    // 400 tall, top at 480: 120 of 400 rows on screen.
    let region = Bounds::from_min_size(0.0, 480.0, 800.0, 400.0);
    let fraction = visible_fraction(region, viewport);
    assert!((fraction - 0.3).abs() < 1e-6, "got {fraction}");
}

#[test]
fn fraction_of_offscreen_or_empty_region_is_zero() {
    let viewport = Bounds::from_min_size(0.0, 0.0, 800.0, 600.0);
    let below = Bounds::from_min_size(0.0, 700.0, 800.0, 100.0);
    let empty = Bounds::from_min_size(10.0, 10.0, 0.0, 50.0);
    assert_eq!(visible_fraction(below, viewport), 0.0);
    assert_eq!(visible_fraction(empty, viewport), 0.0);
}

#[test]
fn does_not_fire_below_threshold() {
    let mut subscription = watch(&FixedLayout::with_skills(), RegionId::skills(), 0.3);
    for ratio in [0.0, 0.1, 0.29, 0.2999] {
        assert!(!subscription.report(&RegionId::skills(), ratio), "ratio {ratio}");
    }
    assert!(subscription.is_watching());
}

#[test]
fn fires_once_at_threshold() {
    let mut subscription = watch(&FixedLayout::with_skills(), RegionId::skills(), 0.3);

    assert!(subscription.report(&RegionId::skills(), 0.3));
    assert_eq!(subscription.state(), SubscriptionState::Fired);

    assert!(!subscription.report(&RegionId::skills(), 0.0));
    assert!(!subscription.report(&RegionId::skills(), 0.9));
}

#[test]
fn reports_for_other_regions_are_ignored() {
    let mut subscription = watch(&FixedLayout::with_skills(), RegionId::skills(), 0.3);
    assert!(!subscription.report(&RegionId::new("projects"), 1.0));
    assert!(subscription.is_watching());
}

#[test]
fn missing_target_yields_inert_subscription() {
    let mut subscription = watch(&FixedLayout::empty(), RegionId::skills(), 0.3);

    assert_eq!(subscription.state(), SubscriptionState::Inert);
    assert!(!subscription.report(&RegionId::skills(), 1.0));
    subscription.dispose();
    assert_eq!(subscription.state(), SubscriptionState::Disposed);
}

#[test]
fn dispose_is_idempotent_and_blocks_reports() {
    let mut subscription = watch(&FixedLayout::with_skills(), RegionId::skills(), 0.3);

    subscription.dispose();
    subscription.dispose();

    assert_eq!(subscription.state(), SubscriptionState::Disposed);
    assert!(!subscription.report(&RegionId::skills(), 1.0));
}

#[test]
fn threshold_and_ratio_are_clamped() {
    let mut subscription = watch(&FixedLayout::with_skills(), RegionId::skills(), 4.0);
    assert!(!subscription.report(&RegionId::skills(), 0.99));
    assert!(!subscription.report(&RegionId::skills(), f32::NAN));
    assert!(subscription.report(&RegionId::skills(), 2.5));
}

#[test]
fn resume_content_acts_as_layout_host() {
    let content = ResumeContent::builtin();
    let subscription = watch(&content, RegionId::skills(), 0.3);
    assert!(subscription.is_watching());
}
