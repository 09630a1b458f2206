/// Integration tests for game logic
///
/// These tests drive a whole session the way the game loop does: clicks,
/// spawning, movement, the cheese check and the fade-out.
use cheese_defender::constants::{MAX_ROACHES, SPAWN_OFFSET, WORLD_HEIGHT, WORLD_WIDTH};
use cheese_defender::{Point, Roach, RoachKind, Session, Spawner, SpriteBook, Swirl};
use std::time::{Duration, Instant};

fn new_session(seed: u64) -> Session {
    Session::new(
        SpriteBook::placeholder(),
        Spawner::seeded(WORLD_WIDTH, WORLD_HEIGHT, seed),
        Instant::now(),
    )
}

fn roach(kind: RoachKind, x: f32, y: f32, speed: f32) -> Roach {
    Roach::new(
        kind,
        speed,
        Point::new(x, y),
        Point::new(400.0, 300.0),
        SpriteBook::placeholder().for_kind(kind).clone(),
        Swirl::default(),
    )
}

#[test]
fn test_normal_roach_walks_straight_down() {
    let mut session = new_session(1);
    assert_eq!(session.score(), 0);
    session.add_roach(roach(RoachKind::Normal, 400.0, -50.0, 1.5));

    session.advance(Instant::now());

    let moved = &session.roaches()[0];
    assert_eq!(moved.position.x, 400.0);
    assert!((moved.position.y - (-48.5)).abs() < 1e-4);
}

#[test]
fn test_cheese_margin_is_forgiving() {
    // Placeholder cheese is 100x80: drawn over x 350..450, hit region x 360..440
    let mut session = new_session(2);
    let cheese = session.cheese().clone();
    assert!(cheese.rect.contains(Point::new(357.0, 300.0)));

    session.add_roach(roach(RoachKind::Normal, 357.0, 300.0, 1.0));
    session.advance(Instant::now());
    assert!(session.roaches()[0].position.x < cheese.hitbox.left);
    assert!(!session.is_over());

    let mut session = new_session(3);
    session.add_roach(roach(RoachKind::Normal, 359.5, 300.0, 1.0));
    session.advance(Instant::now());
    assert!(session.roaches()[0].position.x >= cheese.hitbox.left);
    assert!(session.is_over());
}

#[test]
fn test_round_stays_over() {
    let mut session = new_session(4);
    session.add_roach(roach(RoachKind::Normal, 400.0, 300.0, 1.0));
    let now = Instant::now();
    session.advance(now);
    assert!(session.is_over());

    // Killing the roach afterwards does not undo it
    session.click(session.roaches()[0].position, now);
    session.advance(now);
    assert!(session.is_over());
}

#[test]
fn test_click_kills_every_overlapping_roach() {
    let mut session = new_session(5);
    session.add_roach(roach(RoachKind::Normal, 100.0, 100.0, 1.0));
    session.add_roach(roach(RoachKind::Fast, 110.0, 105.0, 1.0));
    session.add_roach(roach(RoachKind::BigBoy, 105.0, 100.0, 1.0));
    session.add_roach(roach(RoachKind::Tipsy, 300.0, 100.0, 1.0));

    let now = Instant::now();
    let kills = session.click(Point::new(105.0, 102.0), now);

    // Normal and Fast die; BigBoy only loses one hit point; Tipsy is elsewhere
    assert_eq!(kills, 2);
    assert_eq!(session.score(), 2);
    let alive: Vec<RoachKind> = session
        .roaches()
        .iter()
        .filter(|r| r.is_alive())
        .map(|r| r.kind)
        .collect();
    assert_eq!(alive, vec![RoachKind::BigBoy, RoachKind::Tipsy]);

    // Clicking the same spot again finishes the BigBoy only
    assert_eq!(session.click(Point::new(105.0, 102.0), now), 1);
    assert_eq!(session.score(), 3);
}

#[test]
fn test_dead_roaches_fade_then_leave() {
    let mut session = new_session(6);
    session.add_roach(roach(RoachKind::Normal, 100.0, 100.0, 1.0));
    let died_at = Instant::now();
    assert_eq!(session.click(Point::new(100.0, 100.0), died_at), 1);

    let draws = session.advance(died_at + Duration::from_millis(1499));
    assert_eq!(draws.len(), 1);
    assert_eq!(session.roaches().len(), 1);
    // Dead roaches stay where they died
    assert_eq!(session.roaches()[0].position, Point::new(100.0, 100.0));

    let draws = session.advance(died_at + Duration::from_millis(1500));
    assert!(draws.is_empty());
    assert!(session.roaches().is_empty());
}

#[test]
fn test_spawning_fills_to_cap_from_offscreen() {
    let mut session = new_session(7);
    for _ in 0..(MAX_ROACHES * 2) {
        session.spawn();
    }
    assert_eq!(session.roaches().len(), MAX_ROACHES);
    for roach in session.roaches() {
        let p = roach.position;
        let outside_x = p.x == -SPAWN_OFFSET || p.x == WORLD_WIDTH + SPAWN_OFFSET;
        let outside_y = p.y == -SPAWN_OFFSET || p.y == WORLD_HEIGHT + SPAWN_OFFSET;
        assert!(outside_x || outside_y);
    }
}

#[test]
fn test_killing_frees_a_spawn_slot() {
    let mut session = new_session(8);
    for _ in 0..MAX_ROACHES {
        session.spawn();
    }
    let target = session.roaches()[0].position;
    let died_at = Instant::now();
    // A BigBoy needs two clicks
    let kills = session.click(target, died_at) + session.click(target, died_at);
    assert!(kills >= 1);

    // Still counted while fading
    session.spawn();
    assert_eq!(session.roaches().len(), MAX_ROACHES);

    session.advance(died_at + Duration::from_secs(2));
    assert!(session.roaches().len() < MAX_ROACHES);
    session.spawn();
    assert!(session.roaches().len() <= MAX_ROACHES);
}
