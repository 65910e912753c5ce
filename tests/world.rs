// World scenarios (native). These drive the public simulation API with a
// recording audio player and never touch the browser.

use rand::SeedableRng;
use rand::rngs::SmallRng;
use salsa_run::boss::BossState;
use salsa_run::collision::{self, CollisionEvent};
use salsa_run::combat;
use salsa_run::enemy::Enemy;
use salsa_run::sprites;
use salsa_run::{Game, GameConfig, InputState, LEVEL1, RecordingAudio, Sound, World};

fn world() -> World {
    World::new(&LEVEL1, GameConfig::default(), 42).unwrap()
}

fn idle() -> InputState {
    InputState::default()
}

/// Park every ground enemy far away so scenarios only see what they set up.
fn clear_ground_enemies(w: &mut World) {
    for enemy in &mut w.level_mut().enemies {
        if let Enemy::Ground(g) = enemy {
            g.body.x = 100_000.0;
        }
    }
}

fn first_ground_index(w: &World) -> usize {
    w.level()
        .enemies
        .iter()
        .position(|e| matches!(e, Enemy::Ground(_)))
        .unwrap()
}

fn boss_index(w: &World) -> usize {
    w.level().enemies.iter().position(|e| e.as_boss().is_some()).unwrap()
}

#[test]
fn falling_onto_chicken_is_a_stomp() {
    let mut w = world();
    clear_ground_enemies(&mut w);
    let idx = first_ground_index(&w);
    assert_eq!(w.level().enemies[idx].body().y, 360.0);

    let c = w.character_mut();
    c.body.x = 100.0;
    c.body.y = 180.0;
    c.body.speed_y = -5.0;
    w.level_mut().enemies[idx].body_mut().x = 100.0;

    let events = collision::detect(&w, 1000.0);
    assert_eq!(events, vec![CollisionEvent::Stomp { enemy: idx }]);

    let mut audio = RecordingAudio::default();
    combat::resolve(&mut w, &events, 1000.0, &mut audio);
    assert!(w.level().enemies[idx].is_dead());
    assert_eq!(w.character().body.speed_y, 15.0);
    assert_eq!(w.character().energy(), 100);
    assert_eq!(audio.count(Sound::ChickenDead), 1);
}

#[test]
fn jumping_onto_a_walking_chicken_stomps_it() {
    let mut w = world();
    clear_ground_enemies(&mut w);
    let idx = first_ground_index(&w);
    let mut audio = RecordingAudio::default();
    w.start();

    let jump = InputState { jump: true, ..InputState::default() };
    w.step(100.0, &jump, &mut audio);
    w.step(100.0, &idle(), &mut audio);
    w.step(100.0, &idle(), &mut audio);
    assert!(w.character().is_above_ground());

    // Walks in under the character while it is in the air.
    w.level_mut().enemies[idx].body_mut().x = 130.0;
    for _ in 0..10 {
        w.step(100.0, &idle(), &mut audio);
        if w.level().enemies[idx].is_dead() {
            break;
        }
    }
    assert!(w.level().enemies[idx].is_dead());
    assert_eq!(w.character().energy(), 100);
    assert_eq!(audio.count(Sound::ChickenDead), 1);
    assert_eq!(audio.count(Sound::Hurt), 0);
    assert_eq!(audio.count(Sound::Jump), 1);
}

#[test]
fn walking_into_chicken_hurts_once_per_window() {
    let mut w = world();
    clear_ground_enemies(&mut w);
    let idx = first_ground_index(&w);
    if let Enemy::Ground(g) = &mut w.level_mut().enemies[idx] {
        g.body.x = 150.0;
    }
    let mut audio = RecordingAudio::default();

    let events = collision::detect(&w, 0.0);
    assert_eq!(events, vec![CollisionEvent::SideHit { enemy: idx }]);
    combat::resolve(&mut w, &events, 0.0, &mut audio);
    assert_eq!(w.character().energy(), 80);

    assert!(collision::detect(&w, 200.0).is_empty(), "invulnerable inside hurt window");
    let events = collision::detect(&w, 600.0);
    combat::resolve(&mut w, &events, 600.0, &mut audio);
    assert_eq!(w.character().energy(), 60);
    assert_eq!(audio.count(Sound::Hurt), 2);
}

// The grace covers every enemy, not only the stomped one.
#[test]
fn stomp_grace_suppresses_side_damage() {
    let mut w = world();
    clear_ground_enemies(&mut w);
    w.character_mut().stomp(1000.0);
    let idx = first_ground_index(&w);
    if let Enemy::Ground(g) = &mut w.level_mut().enemies[idx] {
        g.body.x = 150.0;
    }
    w.character_mut().body.speed_y = 0.0;
    assert!(collision::detect(&w, 1200.0).is_empty());
    assert_eq!(collision::detect(&w, 1600.0), vec![CollisionEvent::SideHit { enemy: idx }]);
}

#[test]
fn pickups_count_and_bottles_cap_at_five() {
    let mut w = world();
    clear_ground_enemies(&mut w);
    let mut audio = RecordingAudio::default();

    w.level_mut().coins[0].body.x = 60.0;
    w.level_mut().coins[0].body.y = 250.0;
    let events = collision::detect(&w, 0.0);
    assert!(events.contains(&CollisionEvent::Coin { index: 0 }));
    combat::resolve(&mut w, &events, 0.0, &mut audio);
    assert_eq!(w.coins_collected(), 1);

    for i in 0..w.level().bottles.len() {
        let b = &mut w.level_mut().bottles[i];
        b.body.x = 100.0;
    }
    let events = collision::detect(&w, 100.0);
    combat::resolve(&mut w, &events, 100.0, &mut audio);
    assert_eq!(w.bottles_available(), 5);
    let left = w.level().bottles.iter().filter(|b| !b.collected).count();
    assert_eq!(left, LEVEL1.bottles.len() - 5);
    assert_eq!(audio.count(Sound::BottlePickup), 5);
}

#[test]
fn collected_items_are_compacted_after_tick() {
    let mut w = world();
    clear_ground_enemies(&mut w);
    w.level_mut().coins[0].body.x = 60.0;
    w.level_mut().coins[0].body.y = 250.0;
    let total = w.level().coins.len();
    let mut audio = RecordingAudio::default();
    w.start();
    w.step(100.0, &idle(), &mut audio);
    assert_eq!(w.level().coins.len(), total - 1);
    assert_eq!(w.coins_collected(), 1);
    assert_eq!(w.bars().coins.percentage(), 10.0);
}

#[test]
fn thrown_bottle_kills_chicken_and_splashes() {
    let mut w = world();
    clear_ground_enemies(&mut w);
    for b in &mut w.level_mut().bottles {
        b.body.x = 100.0;
    }
    let idx = first_ground_index(&w);
    // Where the bottle comes down; held there so its walk does not matter.
    let hold = |w: &mut World| w.level_mut().enemies[idx].body_mut().x = 470.0;
    hold(&mut w);
    let mut audio = RecordingAudio::default();
    w.start();
    w.step(100.0, &idle(), &mut audio);
    assert_eq!(w.bottles_available(), 5);

    let throw = InputState { throw: true, ..InputState::default() };
    w.step(100.0, &throw, &mut audio);
    assert_eq!(audio.count(Sound::Throw), 1);
    assert_eq!(w.bottles_available(), 4);
    for _ in 0..12 {
        hold(&mut w);
        w.step(100.0, &idle(), &mut audio);
        if w.level().enemies[idx].is_dead() {
            break;
        }
    }
    assert!(w.level().enemies[idx].is_dead());
    assert_eq!(w.level().enemies[idx].body().y, 360.0);
    assert_eq!(audio.count(Sound::ChickenDead), 1);
    assert_eq!(audio.count(Sound::Splash), 1);
    assert!(!w.projectiles()[0].is_active());

    for _ in 0..20 {
        w.step(100.0, &idle(), &mut audio);
    }
    assert!(w.projectiles().is_empty(), "splashed bottles are removed");
    assert_eq!(audio.count(Sound::ChickenDead), 1);
}

#[test]
fn missed_bottle_splashes_on_the_ground() {
    let mut w = world();
    clear_ground_enemies(&mut w);
    for b in &mut w.level_mut().bottles {
        b.body.x = 100.0;
    }
    let mut audio = RecordingAudio::default();
    w.start();
    w.step(100.0, &idle(), &mut audio);
    let throw = InputState { throw: true, ..InputState::default() };
    w.step(100.0, &throw, &mut audio);
    assert_eq!(w.projectiles().len(), 1);
    for _ in 0..30 {
        w.step(100.0, &idle(), &mut audio);
    }
    assert_eq!(audio.count(Sound::Splash), 1);
    assert!(w.projectiles().is_empty());
}

#[test]
fn boss_defeat_wins_and_freezes() {
    let mut w = world();
    clear_ground_enemies(&mut w);
    let mut audio = RecordingAudio::default();
    w.start();
    let boss = w.level_mut().boss_mut().unwrap();
    for i in 0..4 {
        boss.hit(i as f64);
    }
    assert!(boss.is_dead());

    for _ in 0..20 {
        w.step(100.0, &idle(), &mut audio);
    }
    assert!(w.phase().game_won);
    assert!(!w.phase().game_over);
    assert!(w.level().boss().is_none(), "dead boss removed");
    assert_eq!(audio.count(Sound::Win), 1);

    let ticks = w.ticks_run();
    let x = w.character().body.x;
    let right = InputState { right: true, ..InputState::default() };
    assert_eq!(w.step(100.0, &right, &mut audio), 0);
    assert_eq!(w.ticks_run(), ticks);
    assert_eq!(w.character().body.x, x);
}

#[test]
fn death_plays_out_before_game_over() {
    let mut w = world();
    clear_ground_enemies(&mut w);
    let mut audio = RecordingAudio::default();
    w.start();
    for i in 0..5 {
        w.character_mut().hit(i as f64 * 1000.0);
    }
    assert!(w.character().is_dead());
    assert!(!w.phase().game_over);
    for _ in 0..20 {
        w.step(100.0, &idle(), &mut audio);
    }
    assert!(w.phase().game_over);
    assert!(!w.phase().game_won);
    assert_eq!(audio.count(Sound::Lose), 1);
}

#[test]
fn restart_after_win_is_fresh_and_idempotent() {
    let mut audio = RecordingAudio::default();
    let mut game = Game::new(&LEVEL1, GameConfig::default(), 9).unwrap();
    clear_ground_enemies(game.world_mut());
    game.start(&mut audio);
    let right = InputState { right: true, ..InputState::default() };
    for _ in 0..10 {
        game.step(100.0, &right, &mut audio);
    }
    for i in 0..4 {
        game.world_mut().level_mut().boss_mut().unwrap().hit(i as f64);
    }
    for _ in 0..20 {
        game.step(100.0, &idle(), &mut audio);
    }
    assert!(game.world().phase().game_won);

    game.restart(&mut audio).unwrap();
    let w = game.world();
    assert_eq!(w.ticks_run(), 0, "nothing from the old world ran");
    assert_eq!(w.character().energy(), 100);
    assert_eq!(w.camera_x(), 0.0);
    assert!(w.phase().game_started);
    assert!(!w.phase().is_over());
    assert!(w.level().boss().is_some());
    assert!(audio.stop_all_calls >= 1);

    let first = (w.character().clone(), w.level().clone(), w.camera_x());
    game.restart(&mut audio).unwrap();
    let w = game.world();
    assert_eq!((w.character().clone(), w.level().clone(), w.camera_x()), first);
}

#[test]
fn boss_intro_locks_character_then_releases() {
    let mut w = world();
    clear_ground_enemies(&mut w);
    let mut audio = RecordingAudio::default();
    w.character_mut().body.x = 3900.0;
    w.start();
    w.step(100.0, &idle(), &mut audio);
    assert!(w.character().is_immobilized());
    assert_eq!(audio.count(Sound::BossAlert), 1);

    for _ in 0..15 {
        w.step(100.0, &idle(), &mut audio);
    }
    assert!(!w.character().is_immobilized());
    assert!(w.level().boss().unwrap().bar_visible());
    assert_eq!(audio.count(Sound::BossAlert), 1);
}

#[test]
fn attacking_boss_pecks_from_reach() {
    let mut w = world();
    clear_ground_enemies(&mut w);
    let boss = boss_index(&w);
    // Hitboxes 50 px apart.
    w.character_mut().body.x = 4410.0;
    let player = w.character().body.clone();
    let mut rng = SmallRng::seed_from_u64(3);
    let b = w.level_mut().boss_mut().unwrap();
    for _ in 0..13 {
        b.think(&player, &mut rng);
    }
    assert_eq!(b.state(0.0), BossState::Attack);
    assert_eq!(b.body.gap_x(&player), 50.0);
    assert!(!collision::collides(&player, w.level().enemies[boss].body()));

    let events = collision::detect(&w, 0.0);
    assert_eq!(events, vec![CollisionEvent::SideHit { enemy: boss }]);
    let mut audio = RecordingAudio::default();
    combat::resolve(&mut w, &events, 0.0, &mut audio);
    assert_eq!(w.character().energy(), 80);
    assert_eq!(audio.count(Sound::Hurt), 1);

    w.character_mut().body.x = 4300.0;
    assert!(collision::detect(&w, 1000.0).is_empty(), "out of reach");
}

#[test]
fn bottle_hurts_engaged_boss() {
    let mut w = world();
    clear_ground_enemies(&mut w);
    w.character_mut().body.x = 4400.0;
    for b in &mut w.level_mut().bottles {
        b.body.x = 4400.0;
    }
    let mut audio = RecordingAudio::default();
    w.start();
    for _ in 0..14 {
        w.step(100.0, &idle(), &mut audio);
    }
    assert_eq!(w.bottles_available(), 5);
    assert!(w.level().boss().unwrap().is_engaged());

    let throw = InputState { throw: true, ..InputState::default() };
    w.step(100.0, &throw, &mut audio);
    for _ in 0..5 {
        if w.level().boss().unwrap().energy() < 100 {
            break;
        }
        w.step(100.0, &idle(), &mut audio);
    }
    assert_eq!(w.bottles_available(), 4);
    assert_eq!(w.level().boss().unwrap().energy(), 75);
    assert_eq!(audio.count(Sound::BossHurt), 1);
    assert_eq!(w.bars().boss.percentage(), 75.0);
}

#[test]
fn boss_death_sequence_advances_every_200ms() {
    let mut w = world();
    clear_ground_enemies(&mut w);
    let mut audio = RecordingAudio::default();
    w.start();
    let boss = w.level_mut().boss_mut().unwrap();
    for i in 0..4 {
        boss.hit(i as f64);
    }

    let image = |w: &World| w.level().boss().unwrap().image();
    w.step(100.0, &idle(), &mut audio);
    assert_eq!(image(&w), sprites::BOSS_ALERT[0]);
    w.step(100.0, &idle(), &mut audio);
    assert_eq!(image(&w), sprites::BOSS_DEAD[0]);
    w.step(100.0, &idle(), &mut audio);
    assert_eq!(image(&w), sprites::BOSS_DEAD[0]);
    w.step(100.0, &idle(), &mut audio);
    assert_eq!(image(&w), sprites::BOSS_DEAD[1]);
    w.step(100.0, &idle(), &mut audio);
    assert!(!w.phase().game_won);
    w.step(100.0, &idle(), &mut audio);
    assert!(w.phase().game_won);
    assert!(w.level().boss().is_none());
}
