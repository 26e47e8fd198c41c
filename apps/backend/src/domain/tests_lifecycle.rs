use crate::domain::lifecycle::{
    self, sanitize_name, validate_ticket_count, LobbyConfig,
};
use crate::domain::lobby::{BoardScope, EntryMode, GameMode, LobbyStatus};
use crate::errors::domain::{ConflictKind, DomainError, ForbiddenKind, NotFoundKind};

fn free_lobby(code: &str) -> crate::domain::lobby::Lobby {
    lifecycle::create_lobby(code.to_string(), &LobbyConfig::default(), 9, Vec::new()).unwrap()
}

fn ticket_lobby(code: &str, tickets: &[&str]) -> crate::domain::lobby::Lobby {
    let config = LobbyConfig {
        entry_mode: EntryMode::Ticket,
        ..LobbyConfig::default()
    };
    let tickets = tickets.iter().map(|t| t.to_string()).collect();
    lifecycle::create_lobby(code.to_string(), &config, 9, tickets).unwrap()
}

#[test]
fn new_lobby_is_open_and_waiting() {
    let lobby = free_lobby("AAAA01");
    assert_eq!(lobby.status, LobbyStatus::Waiting);
    assert!(lobby.allow_join);
    assert_eq!(lobby.board.len(), 16);
    assert!(lobby.players.is_empty());
    assert!(lobby.shared.is_none());
}

#[test]
fn shared_scope_creates_common_view() {
    let config = LobbyConfig {
        scope: BoardScope::Shared,
        ..LobbyConfig::default()
    };
    let lobby = lifecycle::create_lobby("AAAA02".to_string(), &config, 9, Vec::new()).unwrap();
    assert!(lobby.shared.is_some());
}

#[test]
fn round_runs_only_from_waiting() {
    let mut lobby = free_lobby("AAAA03");
    lifecycle::join_lobby(&mut lobby, "p1".to_string(), "Alice", "", None, 10).unwrap();

    lifecycle::start_round(&mut lobby).unwrap();
    assert_eq!(lobby.status, LobbyStatus::Running);
    assert!(!lobby.allow_join);

    let err = lifecycle::start_round(&mut lobby).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Conflict(ConflictKind::WrongStatus, _)
    ));

    lifecycle::end_round(&mut lobby).unwrap();
    assert_eq!(lobby.status, LobbyStatus::Ended);
    assert!(lifecycle::end_round(&mut lobby).is_err());
}

#[test]
fn start_resets_any_previous_progress() {
    let mut lobby = free_lobby("AAAA04");
    lifecycle::join_lobby(&mut lobby, "p1".to_string(), "Alice", "", None, 10).unwrap();
    lobby.players.get_mut("p1").unwrap().score = 50;

    lifecycle::start_round(&mut lobby).unwrap();
    assert_eq!(lobby.players["p1"].score, 0);
}

#[test]
fn reset_returns_to_waiting_with_a_fresh_board() {
    let mut lobby = free_lobby("AAAA05");
    lifecycle::join_lobby(&mut lobby, "p1".to_string(), "Alice", "", None, 10).unwrap();
    lifecycle::start_round(&mut lobby).unwrap();
    lifecycle::end_round(&mut lobby).unwrap();

    let old_board = lobby.board.clone();
    lifecycle::reset_lobby(&mut lobby, 12345).unwrap();

    assert_eq!(lobby.status, LobbyStatus::Waiting);
    assert!(lobby.allow_join);
    assert_eq!(lobby.seed, 12345);
    assert_ne!(lobby.board, old_board);
    // The roster survives a reset; progress does not.
    assert!(lobby.players.contains_key("p1"));
    assert_eq!(lobby.players["p1"].score, 0);
}

#[test]
fn join_is_rejected_once_locked() {
    let mut lobby = free_lobby("AAAA06");
    lifecycle::start_round(&mut lobby).unwrap();

    let err =
        lifecycle::join_lobby(&mut lobby, "p9".to_string(), "Late", "", None, 10).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Forbidden(ForbiddenKind::JoinLocked, _)
    ));
}

#[test]
fn capacity_join_closes_the_gate() {
    let mut lobby = free_lobby("AAAA07");
    for i in 0..3 {
        lifecycle::join_lobby(&mut lobby, format!("p{i}"), "x", "", None, 3).unwrap();
    }
    assert!(!lobby.allow_join);
}

#[test]
fn join_into_a_full_lobby_reports_full() {
    let mut lobby = free_lobby("AAAA08");
    for i in 0..10 {
        lifecycle::join_lobby(&mut lobby, format!("p{i}"), "x", "", None, 10).unwrap();
    }

    // Capacity wins over the closed gate: the overflow join is Full,
    // not JoinLocked.
    let err = lifecycle::join_lobby(&mut lobby, "p10".to_string(), "x", "", None, 10).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Conflict(ConflictKind::LobbyFull, _)
    ));
}

#[test]
fn closed_gate_on_a_lobby_with_room_is_join_locked() {
    let mut lobby = free_lobby("AAAA11");
    lobby.allow_join = false;

    let err = lifecycle::join_lobby(&mut lobby, "p1".to_string(), "x", "", None, 10).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Forbidden(ForbiddenKind::JoinLocked, _)
    ));
}

#[test]
fn ticket_entry_consumes_the_ticket() {
    let mut lobby = ticket_lobby("AAAA09", &["TICKET01", "TICKET02"]);

    lifecycle::join_lobby(&mut lobby, "p1".to_string(), "Alice", "", Some("ticket01"), 10)
        .unwrap();
    assert_eq!(lobby.tickets["TICKET01"], true);

    // Second use of the same ticket is rejected.
    let err = lifecycle::join_lobby(
        &mut lobby,
        "p2".to_string(),
        "Bob",
        "",
        Some(" TICKET01 "),
        10,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Forbidden(ForbiddenKind::TicketConsumed, _)
    ));
}

#[test]
fn ticket_entry_rejects_unknown_or_missing() {
    let mut lobby = ticket_lobby("AAAA10", &["TICKET01"]);

    let err = lifecycle::join_lobby(&mut lobby, "p1".to_string(), "A", "", Some("NOPE1234"), 10)
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Forbidden(ForbiddenKind::TicketUnknown, _)
    ));

    let err =
        lifecycle::join_lobby(&mut lobby, "p1".to_string(), "A", "", None, 10).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Forbidden(ForbiddenKind::TicketUnknown, _)
    ));
}

#[test]
fn kick_removes_player_and_reopens_join() {
    let mut lobby = free_lobby("AAAA11");
    for i in 0..2 {
        lifecycle::join_lobby(&mut lobby, format!("p{i}"), "x", "", None, 2).unwrap();
    }
    assert!(!lobby.allow_join);

    let removed = lifecycle::kick(&mut lobby, "p0").unwrap();
    assert_eq!(removed.player_id, "p0");
    assert!(lobby.allow_join);
    assert_eq!(lobby.players.len(), 1);

    let err = lifecycle::kick(&mut lobby, "p0").unwrap_err();
    assert!(matches!(err, DomainError::NotFound(NotFoundKind::Player, _)));
}

#[test]
fn prizes_are_set_trimmed_and_cleared() {
    let mut lobby = free_lobby("AAAA12");
    lifecycle::set_prizes(&mut lobby, [Some("  Gold  "), Some("Silver"), None]);
    assert_eq!(lobby.prizes["1"], "Gold");
    assert_eq!(lobby.prizes["2"], "Silver");
    assert!(!lobby.prizes.contains_key("3"));

    // A blank label clears the slot.
    lifecycle::set_prizes(&mut lobby, [Some("   "), None, Some("Bronze")]);
    assert!(!lobby.prizes.contains_key("1"));
    assert!(!lobby.prizes.contains_key("2"));
    assert_eq!(lobby.prizes["3"], "Bronze");
}

#[test]
fn names_are_sanitized() {
    assert_eq!(sanitize_name("  Ada  "), "Ada");
    assert_eq!(sanitize_name("   "), "Player");
    let long = "x".repeat(40);
    assert_eq!(sanitize_name(&long).chars().count(), 24);
}

#[test]
fn ticket_count_bounds() {
    assert!(validate_ticket_count(1).is_ok());
    assert!(validate_ticket_count(100).is_ok());
    assert!(validate_ticket_count(0).is_err());
    assert!(validate_ticket_count(101).is_err());
}

#[test]
fn teams_config_carries_through() {
    let config = LobbyConfig {
        mode: GameMode::Teams,
        ..LobbyConfig::default()
    };
    let lobby = lifecycle::create_lobby("AAAA13".to_string(), &config, 9, Vec::new()).unwrap();
    assert_eq!(lobby.mode, GameMode::Teams);
}
