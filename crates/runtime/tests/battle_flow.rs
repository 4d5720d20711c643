use cadenza_content::the_chorister;
use cadenza_core::{
    BattleConfig, BattlePhase, MusicError, NoteSkill, PlayerSide, PlayerState, TurnAction,
};
use cadenza_runtime::{BattleSession, SessionError};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn action(side: PlayerSide, chord: &str, melody: &str) -> TurnAction {
    TurnAction::parse(side, chord, melody).unwrap()
}

#[test]
fn duel_setup_exposes_read_accessors() {
    let config = BattleConfig::with_starting_health(80.0);
    let session = BattleSession::duel("Alice", "Alex", &config);
    assert_eq!(session.name(PlayerSide::A), "Alice");
    assert_eq!(session.name(PlayerSide::B), "Alex");
    assert_eq!(session.health(PlayerSide::A), 80.0);
    assert_eq!(session.max_health(PlayerSide::B), 80.0);
    assert_eq!(session.monster_name(PlayerSide::A), "the Unseen");
    assert_eq!(session.phase(), BattlePhase::AwaitingActionA);
    assert_eq!(session.turn(), 0);
}

#[test]
fn malformed_input_is_rejected_at_the_boundary() {
    let mut session = BattleSession::duel("Alice", "Alex", &BattleConfig::new());
    let err = session.submit(PlayerSide::A, "CX", "CCCC").unwrap_err();
    assert_eq!(
        err,
        SessionError::Music(MusicError::UnknownNote('X'))
    );
    let err = session.submit(PlayerSide::A, "CC", "CCCC").unwrap_err();
    assert_eq!(
        err,
        SessionError::Music(MusicError::WrongLength {
            expected: 3,
            actual: 2
        })
    );
    // Nothing was submitted; the handshake has not advanced.
    assert_eq!(session.phase(), BattlePhase::AwaitingActionA);
}

#[test]
fn sweeping_melody_wins_every_slot() {
    init_tracing();
    let mut session = BattleSession::duel("Alice", "Alex", &BattleConfig::new());
    // {C,D} beats {E,F}; the G chords touch neither the C rows nor the E
    // columns, so every slot scores +1 for side A.
    let report = session
        .battle(
            action(PlayerSide::A, "GGG", "CCCC"),
            action(PlayerSide::B, "GGG", "EEEE"),
        )
        .unwrap();
    for note in &report.notes {
        assert_eq!(note.score, 1.0);
        assert_eq!(note.winner, Some(PlayerSide::A));
        assert_eq!(note.skill, Some(NoteSkill::Heal));
    }
    assert_eq!(report.melody_winner, Some(PlayerSide::A));
    // The Unseen only answers a note-perfect execute; CCCC is no combo.
    assert!(report.combo.is_none());
}

#[test]
fn tied_aggregate_suppresses_a_structural_combo_match() {
    let caster = PlayerState::new("Mara", 100.0)
        .with_health(50.0)
        .with_monster(the_chorister());
    let other = PlayerState::new("Alex", 100.0).with_health(50.0);
    let mut session = BattleSession::new(caster, other);

    // CFGC opens with the chorister's minor-heal pattern, but the slots
    // cancel to a zero aggregate: +1, -1, -1, +1.
    let report = session
        .battle(
            action(PlayerSide::A, "DAB", "CFGC"),
            action(PlayerSide::B, "DAB", "ECEE"),
        )
        .unwrap();
    let scores: Vec<f64> = report.notes.iter().map(|n| n.score).collect();
    assert_eq!(scores, vec![1.0, -1.0, -1.0, 1.0]);
    assert_eq!(report.melody_winner, None);
    assert!(report.combo.is_none());
    // Individual slots still resolved and landed.
    assert_eq!(report.notes[0].winner, Some(PlayerSide::A));
    assert_eq!(report.notes[1].winner, Some(PlayerSide::B));
}

#[test]
fn execute_gate_blocks_a_healthy_caster() {
    let caster = PlayerState::new("Mara", 100.0).with_monster(the_chorister());
    let target = PlayerState::new("Alex", 100.0);
    let mut session = BattleSession::new(caster, target);

    // F beats G on every slot: potency 4 clears the execute's minimum, and
    // FFFF matches its leading pattern, but the caster is far too healthy.
    let report = session
        .battle(
            action(PlayerSide::A, "CCC", "FFFF"),
            action(PlayerSide::B, "CCC", "GGGG"),
        )
        .unwrap();
    assert_eq!(report.melody_winner, Some(PlayerSide::A));
    assert_eq!(report.combo.as_ref().unwrap().name, "execute_short");
    // Combo matched and applied, yet the gate kept the target alive.
    assert!(session.health(PlayerSide::B) > 0.0);
    assert_eq!(report.phase, BattlePhase::Complete);
}

#[test]
fn execute_fires_for_a_desperate_caster() {
    init_tracing();
    let caster = PlayerState::new("Mara", 100.0)
        .with_health(40.0)
        .with_monster(the_chorister());
    let target = PlayerState::new("Alex", 100.0);
    let mut session = BattleSession::new(caster, target);

    let report = session
        .battle(
            action(PlayerSide::A, "CCC", "FFFF"),
            action(PlayerSide::B, "CCC", "GGGG"),
        )
        .unwrap();
    assert_eq!(report.combo.as_ref().unwrap().name, "execute_short");
    assert_eq!(session.health(PlayerSide::B), 0.0);
    assert_eq!(
        report.phase,
        BattlePhase::GameOver {
            winner: Some(PlayerSide::A)
        }
    );
    assert!(session.is_over());
}

#[test]
fn turns_roll_over_until_defeat() {
    let mut session = BattleSession::duel("Alice", "Alex", &BattleConfig::new());

    // A's damage notes chip 12 health per turn; 100 hp falls on turn 9.
    let mut last = None;
    while !session.is_over() {
        let report = session
            .battle(
                action(PlayerSide::A, "EEE", "GGGG"),
                action(PlayerSide::B, "EEE", "CCCC"),
            )
            .unwrap();
        assert_eq!(report.turn, session.turn());
        last = Some(report);
    }

    let last = last.unwrap();
    assert_eq!(last.turn, 9);
    assert_eq!(
        last.phase,
        BattlePhase::GameOver {
            winner: Some(PlayerSide::A)
        }
    );
    assert_eq!(session.health(PlayerSide::B), 0.0);

    // The terminal phase refuses further play.
    let refused = session.submit(PlayerSide::A, "EEE", "GGGG").unwrap_err();
    assert_eq!(
        refused,
        SessionError::Battle(cadenza_core::BattleError::BattleOver)
    );
}

#[test]
fn report_display_reads_as_a_turn_summary() {
    let mut session = BattleSession::duel("Alice", "Alex", &BattleConfig::new());
    let report = session
        .battle(
            action(PlayerSide::A, "GGG", "CCCC"),
            action(PlayerSide::B, "GGG", "EEEE"),
        )
        .unwrap();
    let text = report.to_string();
    assert!(text.contains("turn 1"));
    assert!(text.contains("Alice"));
    assert!(text.contains("Alex"));
}
