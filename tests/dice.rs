use msgs::dice::{self, DEFAULT_SIDES, MAX_ROLLS};
use msgs::{MsgError, RandomDie, Result};

#[test]
fn quote_is_one_of_two() {
    for _ in 0..50 {
        let quote = dice::quote_of_the_day();
        assert!(quote == "Take it easy" || quote == "Salvation lies within", "{}", quote);
    }
}

#[test]
fn random_is_in_unit_interval() {
    for _ in 0..1000 {
        let value = dice::random();
        assert!((0.0..1.0).contains(&value), "{}", value);
    }
}

#[test]
fn roll_three_dice_are_six_sided() {
    for _ in 0..100 {
        let rolls = dice::roll_three_dice();
        assert_eq!(rolls.len(), 3);
        assert!(rolls.iter().all(|r| (1..=6).contains(r)));
    }
}

#[test]
fn roll_dice_respects_count_and_sides() -> Result<()> {
    let rolls = dice::roll_dice(200, Some(20))?;
    assert_eq!(rolls.len(), 200);
    assert!(rolls.iter().all(|r| (1..=20).contains(r)));

    let defaults = dice::roll_dice(50, None)?;
    assert!(defaults.iter().all(|r| (1..=DEFAULT_SIDES).contains(r)));

    assert!(dice::roll_dice(0, Some(4))?.is_empty());
    Ok(())
}

#[test]
fn one_sided_die_always_rolls_one() -> Result<()> {
    let die = RandomDie::new(Some(1))?;
    assert_eq!(die.roll(10), vec![1; 10]);
    assert_eq!(die.roll_once(), 1);
    Ok(())
}

#[test]
fn zero_sides_is_rejected() {
    assert!(matches!(RandomDie::new(Some(0)), Err(MsgError::InvalidArgument(_))));
    assert!(matches!(dice::roll_dice(3, Some(0)), Err(MsgError::InvalidArgument(_))));
}

#[test]
fn die_report() -> Result<()> {
    let die = RandomDie::new(None)?;
    assert_eq!(die.num_sides(), DEFAULT_SIDES);

    let report = RandomDie::new(Some(8))?.report(5)?;
    assert_eq!(report.num_sides, 8);
    assert!((1..=8).contains(&report.roll_once));
    assert_eq!(report.rolls.len(), 5);
    assert!(report.rolls.iter().all(|r| (1..=8).contains(r)));
    Ok(())
}

// Should refuse huge roll counts up front instead of trying to allocate them
#[test]
fn too_many_rolls_are_rejected() -> Result<()> {
    assert_eq!(dice::roll_dice(MAX_ROLLS, Some(6))?.len(), MAX_ROLLS as usize);
    assert!(matches!(dice::roll_dice(MAX_ROLLS + 1, Some(6)), Err(MsgError::InvalidArgument(_))));
    assert!(matches!(dice::roll_dice(u32::MAX, None), Err(MsgError::InvalidArgument(_))));

    let die = RandomDie::new(None)?;
    assert_eq!(die.report(MAX_ROLLS)?.rolls.len(), MAX_ROLLS as usize);
    match die.report(u32::MAX) {
        Err(MsgError::InvalidArgument(msg)) => assert!(msg.contains("num_rolls"), "{}", msg),
        other => panic!("expected InvalidArgument, got {:?}", other),
    }
    Ok(())
}
