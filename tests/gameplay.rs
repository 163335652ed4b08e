use rocket_academy::catalog::{Catalog, Level, Part};
use rocket_academy::mission::{
    AssemblyEvent, LaunchOutcome, MissionPhase, OutcomeKind, Progression, Session,
};

fn part(id: &str, order: u32, mass: f64) -> Part {
    Part {
        id: id.to_string(),
        name: id.to_uppercase(),
        required_order: order,
        mass,
        fact: None,
    }
}

fn hop(level: u32, gravity: f64, reward: u64) -> Level {
    Level {
        level,
        name: format!("Hop {level}"),
        description: String::new(),
        target: format!("Target {level}"),
        planet: "Earth".to_string(),
        gravity,
        astronauts: 0,
        required_parts: vec![part("engine", 1, 300.0), part("nose", 2, 100.0)],
        reward,
    }
}

fn two_level_session() -> Session {
    let catalog = Catalog::new(vec![hop(1, 9.8, 10), hop(2, 4.9, 20)]).expect("catalog");
    Session::new(catalog)
}

fn assemble(session: &mut Session) {
    assert!(!session.place_part("engine").is_empty());
    assert!(!session.place_part("nose").is_empty());
}

#[test]
fn full_pad_at_reference_gravity_needs_six_thousand_units() {
    let mut session = two_level_session();
    assemble(&mut session);
    assert_eq!(session.required_fuel(), 6000);
}

#[test]
fn half_gravity_halves_the_fuel() {
    let mut session = two_level_session();
    assert!(session.select_level(2));
    assemble(&mut session);
    assert_eq!(session.required_fuel(), 3000);
}

#[test]
fn successful_launch_pays_reward_once() {
    let mut session = two_level_session();
    assemble(&mut session);
    session.set_fuel(6000);
    assert!(session.can_launch());
    assert_eq!(session.phase(), MissionPhase::Launch);

    let outcome = session.attempt_launch();
    assert_eq!(
        outcome,
        LaunchOutcome::Success {
            reward: 10,
            target: "Target 1".to_string()
        }
    );
    assert_eq!(session.score(), 10);

    // A second press on the frozen pad replays the result.
    assert_eq!(session.attempt_launch(), outcome);
    assert_eq!(session.score(), 10);
    assert_eq!(session.attempts().len(), 1);
    assert!(!session.can_launch());
}

#[test]
fn score_saturates_instead_of_overflowing() {
    let level = Level {
        required_parts: vec![part("engine", 1, 1.0)],
        ..hop(1, 9.8, u64::MAX)
    };
    let mut session = Session::new(Catalog::new(vec![level]).expect("catalog"));
    for _ in 0..2 {
        session.place_part("engine");
        session.set_fuel(100);
        assert!(session.attempt_launch().is_success());
        assert_eq!(
            session.advance_or_wrap(),
            Some(Progression::AllLevelsCompleted { level: 1 })
        );
    }
    assert_eq!(session.score(), u64::MAX);
    assert_eq!(session.attempts()[1].score_after, u64::MAX);
}

#[test]
fn empty_tank_fails_and_freezes_the_pad() {
    let mut session = two_level_session();
    assemble(&mut session);
    session.set_fuel(0);

    let outcome = session.attempt_launch();
    assert_eq!(
        outcome,
        LaunchOutcome::InsufficientFuel {
            required_fuel: 6000,
            loaded_fuel: 0,
            target: "Target 1".to_string()
        }
    );
    assert_eq!(session.score(), 0);
    assert!(session.is_frozen());
    assert!(session.remove_last_part().is_empty());
    assert!(session.reorder_part(0, 1).is_empty());
    assert_eq!(session.set_fuel(9000), 0);
    assert_eq!(session.assembled_parts().len(), 2);
}

#[test]
fn partial_pad_reports_missing_parts() {
    let mut session = two_level_session();
    session.place_part("engine");
    session.set_fuel(100_000);
    assert_eq!(
        session.attempt_launch(),
        LaunchOutcome::MissingParts {
            placed: 1,
            required: 2
        }
    );
}

#[test]
fn missing_parts_take_precedence_over_fuel() {
    let mut session = two_level_session();
    session.place_part("nose");
    assert_eq!(session.attempt_launch().kind(), OutcomeKind::MissingParts);
}

#[test]
fn fuel_is_checked_before_order() {
    let mut session = two_level_session();
    session.place_part("nose");
    session.place_part("engine");
    assert!(!session.is_correctly_ordered());
    session.set_fuel(10);
    assert_eq!(session.attempt_launch().kind(), OutcomeKind::InsufficientFuel);
}

#[test]
fn wrong_order_with_enough_fuel_is_unstable() {
    let mut session = two_level_session();
    session.place_part("nose");
    session.place_part("engine");
    session.set_fuel(6000);
    assert_eq!(session.attempt_launch(), LaunchOutcome::WrongOrder);
    assert_eq!(session.score(), 0);
}

#[test]
fn reorder_fixes_a_misbuilt_stack() {
    let mut session = two_level_session();
    session.place_part("nose");
    session.place_part("engine");
    let events = session.reorder_part(1, 0);
    assert!(matches!(events.as_slice(), [AssemblyEvent::PartReordered { part }] if part.id == "engine"));
    assert!(session.is_correctly_ordered());

    session.set_fuel(6000);
    assert!(session.attempt_launch().is_success());
}

#[test]
fn reorder_moves_bottom_part_to_top() {
    let level = Level {
        required_parts: vec![part("a", 1, 1.0), part("b", 2, 1.0), part("c", 3, 1.0)],
        ..hop(1, 9.8, 1)
    };
    let mut session = Session::new(Catalog::new(vec![level]).expect("catalog"));
    for id in ["a", "b", "c"] {
        session.place_part(id);
    }
    session.reorder_part(0, 2);
    let ids: Vec<&str> = session.assembled_parts().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["b", "c", "a"]);
}

#[test]
fn required_fuel_tracks_the_pad() {
    let mut session = two_level_session();
    assert_eq!(session.required_fuel(), 0);
    session.place_part("engine");
    assert_eq!(session.required_fuel(), 4500);
    session.place_part("nose");
    assert_eq!(session.required_fuel(), 6000);
    session.remove_last_part();
    assert_eq!(session.required_fuel(), 4500);
}

#[test]
fn retry_clears_pad_but_keeps_score() {
    let mut session = two_level_session();
    assemble(&mut session);
    session.set_fuel(10);
    session.attempt_launch();

    assert!(session.retry());
    assert!(!session.is_frozen());
    assert!(session.assembled_parts().is_empty());
    assert_eq!(session.fuel(), 0);
    assert!(session.last_outcome().is_none());
    assert_eq!(session.active_level().level, 1);
    assert_eq!(session.attempts().len(), 1);
}

#[test]
fn advance_requires_a_success() {
    let mut session = two_level_session();
    assert_eq!(session.advance_or_wrap(), None);
    assemble(&mut session);
    session.attempt_launch();
    assert_eq!(session.advance_or_wrap(), None);
    assert_eq!(session.active_level().level, 1);
}

#[test]
fn progression_advances_then_wraps() {
    let mut session = two_level_session();
    assemble(&mut session);
    session.set_fuel(6000);
    session.attempt_launch();
    assert!(!session.retry());

    assert_eq!(
        session.advance_or_wrap(),
        Some(Progression::Advanced { level: 2 })
    );
    assert_eq!(session.active_level().level, 2);
    assert_eq!(session.fuel(), 0);
    assert!(session.assembled_parts().is_empty());

    assemble(&mut session);
    session.set_fuel(3000);
    assert!(session.attempt_launch().is_success());
    assert_eq!(session.score(), 30);

    assert_eq!(
        session.advance_or_wrap(),
        Some(Progression::AllLevelsCompleted { level: 1 })
    );
    assert_eq!(session.active_level().level, 1);
    assert_eq!(session.score(), 30);
}

#[test]
fn select_level_ignores_unknown_ordinals() {
    let mut session = two_level_session();
    session.place_part("engine");
    assert!(!session.select_level(7));
    assert_eq!(session.assembled_parts().len(), 1);
    assert!(session.select_level(2));
    assert!(session.assembled_parts().is_empty());
}

#[test]
fn builtin_campaign_moon_and_mars_totals() {
    let mut session = Session::new(Catalog::builtin());
    assert!(session.select_level(3));
    for id in ["engine", "booster", "body", "crew", "command"] {
        session.place_part(id);
    }
    assert_eq!(session.required_fuel(), 5580);

    assert!(session.select_level(4));
    for id in ["engine", "fuel_stage_1", "body", "habitat", "nose"] {
        session.place_part(id);
    }
    assert_eq!(session.required_fuel(), 14481);
    session.set_fuel(14481);
    assert_eq!(session.attempt_launch().reward(), 100);
}
