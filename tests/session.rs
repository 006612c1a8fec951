use dino_run::consts::BEST_SCORE_KEY;
use dino_run::hud::HeadlessHud;
use dino_run::platform::{KeyValueStore, MemoryStore};
use dino_run::renderer::DrawList;
use dino_run::sim::{Dino, GameEvent, GamePhase};
use dino_run::{Game, Settings, Tuning};

/// Enough ticks for well over a hundred spawns
const TICK_LIMIT: usize = 20_000;

fn game_with<S: KeyValueStore>(store: S, seed: u64) -> Game<S, HeadlessHud> {
    Game::new(
        seed,
        Tuning::default(),
        Settings::default(),
        store,
        HeadlessHud::default(),
    )
}

/// Step until the run ends; a dino that never jumps meets a cactus sooner or later
fn run_until_crash<S: KeyValueStore>(game: &mut Game<S, HeadlessHud>) -> u32 {
    for _ in 0..TICK_LIMIT {
        if let Some(GameEvent::Crashed { score }) = game.step() {
            return score;
        }
    }
    panic!("no crash within {TICK_LIMIT} ticks");
}

#[test]
fn full_session_start_crash_restart() {
    let mut store = MemoryStore::new();
    let mut game = game_with(&mut store, 11);
    assert_eq!(game.phase(), GamePhase::Waiting);
    assert!(game.hud().hint_visible);

    assert!(game.key_down("Space", " "));
    assert_eq!(game.phase(), GamePhase::Playing);
    assert!(!game.hud().hint_visible);
    assert!(!game.hud().game_over_visible);

    let score = run_until_crash(&mut game);
    assert_eq!(game.phase(), GamePhase::GameOver);
    assert!(game.hud().game_over_visible);
    assert_eq!(game.hud().score, format!("{:05}", score));

    if score > 0 {
        assert_eq!(game.best_score(), score);
        assert_eq!(game.hud().best, format!("{:05}", score));
    }

    // Nothing moves while the banner is up
    let frozen = game.state().frame_count;
    assert_eq!(game.step(), None);
    assert_eq!(game.state().frame_count, frozen);

    // Restart: release and press again
    game.key_up("Space", " ");
    game.key_down("Space", " ");
    assert_eq!(game.phase(), GamePhase::Waiting);
    assert!(game.hud().hint_visible);
    assert!(!game.hud().game_over_visible);
    assert_eq!(game.hud().score, "00000");

    let state = game.state();
    assert_eq!(state.score(), 0.0);
    assert_eq!(state.speed, 8.0);
    assert!(state.obstacles.is_empty());
    assert!(state.particles.is_empty());
    assert_eq!(state.dino, Dino::new());
    assert_eq!(state.frame_count, 0);
    assert!(!state.clouds.is_empty());

    drop(game);
    if score > 0 {
        assert_eq!(store.get(BEST_SCORE_KEY), Some(score.to_string()));
    }
}

#[test]
fn lower_score_keeps_stored_best() {
    let mut store = MemoryStore::with_entry(BEST_SCORE_KEY, "99999");
    let mut game = game_with(&mut store, 5);
    assert_eq!(game.hud().best, "99999");

    game.pointer_down();
    run_until_crash(&mut game);

    assert_eq!(game.best_score(), 99_999);
    assert_eq!(game.hud().best, "99999");
    drop(game);
    assert_eq!(store.get(BEST_SCORE_KEY).as_deref(), Some("99999"));
}

#[test]
fn best_survives_into_next_session() {
    let mut store = MemoryStore::new();
    let mut game = game_with(&mut store, 11);
    game.pointer_down();
    let first = run_until_crash(&mut game);

    // Restart and play a second run in the same session
    game.pointer_down();
    game.pointer_down();
    let second = run_until_crash(&mut game);
    let best = first.max(second);
    assert_eq!(game.best_score(), best);
    assert_eq!(game.hud().best, format!("{:05}", best));
    drop(game);

    // A new session sees the stored value
    let game = game_with(store, 1);
    assert_eq!(game.best_score(), best);
    assert_eq!(game.hud().best, format!("{:05}", best));
}

#[test]
fn same_seed_same_run() {
    let mut a = game_with(MemoryStore::new(), 77);
    let mut b = game_with(MemoryStore::new(), 77);
    a.pointer_down();
    b.pointer_down();

    for tick in 0..600 {
        if tick % 90 == 0 {
            a.pointer_down();
            b.pointer_down();
        }
        let ea = a.step();
        let eb = b.step();
        assert_eq!(ea, eb);
        if ea.is_some() {
            break;
        }
    }

    assert_eq!(a.state().score_ticks, b.state().score_ticks);
    assert_eq!(a.state().obstacles, b.state().obstacles);
    assert_eq!(a.state().particles, b.state().particles);
    assert_eq!(a.state().clouds, b.state().clouds);
}

#[test]
fn frames_paint_every_phase() {
    let mut game = game_with(MemoryStore::new(), 9);
    let mut surface = DrawList::new();

    // Waiting: the scene is painted even though nothing moves
    let gate = game.frame(0.0, &mut surface);
    assert!(gate.draw);
    assert!(!surface.is_empty());

    game.touch_start();
    let mut now = 0.0;
    while game.phase() == GamePhase::Playing {
        now += 1000.0 / 60.0;
        surface.clear();
        let gate = game.frame(now, &mut surface);
        assert!(gate.step && gate.draw);
        assert!(!surface.is_empty());
        assert!(now < 1000.0 * TICK_LIMIT as f64 / 60.0, "run never ended");
    }

    // GameOver: still painting the frozen scene
    surface.clear();
    let gate = game.frame(now + 20.0, &mut surface);
    assert!(gate.draw);
    assert!(!surface.is_empty());
}

#[test]
fn autopilot_clears_the_first_cactus() {
    let mut game = game_with(MemoryStore::new(), 21);
    game.set_autopilot(true);
    game.pointer_down();

    let mut jumped = false;
    for _ in 0..TICK_LIMIT {
        game.step();
        jumped |= game.state().dino.jumping;
        if game.phase() != GamePhase::Playing {
            break;
        }
        if game.state().obstacles.iter().any(|o| !o.is_bird() && o.x < 0.0) {
            // A cactus made it past the dino
            break;
        }
    }
    assert!(jumped, "autopilot never jumped");
}
