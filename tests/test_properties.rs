use proptest::prelude::*;

use side_shooter::compute::{advance_entities, init_state, resolve_collisions};
use side_shooter::entities::{Bullet, Direction, Enemy};
use side_shooter::geometry::{box_collides, Rect};
use side_shooter::input::{apply_input, HeldIntents, Intent};
use side_shooter::spawner::spawn_probability;
use side_shooter::GameConfig;

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::Forward),
        Just(Direction::Up),
        Just(Direction::Down),
    ]
}

proptest! {
    #[test]
    fn spawn_probability_never_decreases(a in 0.0f32..5000.0, b in 0.0f32..5000.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(spawn_probability(lo, 0.993) <= spawn_probability(hi, 0.993));
    }

    #[test]
    fn spawn_probability_is_a_probability(t in 0.0f32..1e6, decay in 0.01f32..=1.0) {
        let p = spawn_probability(t, decay);
        prop_assert!((0.0..=1.0).contains(&p));
    }

    #[test]
    fn right_intent_moves_by_speed_times_dt(x0 in 0.0f32..=760.0, dt in 0.0f32..2.0) {
        let mut s = init_state(GameConfig::default());
        s.player.x = x0;
        let right: HeldIntents = [Intent::Right].into_iter().collect();
        let s2 = apply_input(&s, &right, dt);

        let moved = x0 + 200.0 * dt;
        let expected = if moved > 760.0 { 760.0 } else { moved };
        prop_assert_eq!(s2.player.x, expected);
        prop_assert_eq!(s2.player.y, s.player.y);
    }

    #[test]
    fn player_always_ends_inside_viewport(
        x in -2000.0f32..2000.0,
        y in -2000.0f32..2000.0,
    ) {
        let mut s = init_state(GameConfig::default());
        s.player.x = x;
        s.player.y = y;
        let p = resolve_collisions(&s).player;
        prop_assert!(p.x >= 0.0 && p.x + p.width <= 800.0);
        prop_assert!(p.y >= 0.0 && p.y + p.height <= 474.0);
    }

    #[test]
    fn step_leaves_no_bullet_off_screen(
        bullets in prop::collection::vec((0.0f32..800.0, 0.0f32..474.0, direction()), 0..40),
        dt in 0.0f32..0.5,
    ) {
        let mut s = init_state(GameConfig::default());
        s.bullets = bullets
            .into_iter()
            .map(|(x, y, direction)| Bullet { x, y, direction, width: 20.0, height: 20.0 })
            .collect();
        let before = s.bullets.len();
        let s2 = advance_entities(&s, dt);
        prop_assert!(s2.bullets.len() <= before);
        for b in &s2.bullets {
            prop_assert!(b.y >= 0.0 && b.y <= 474.0 && b.x <= 800.0);
        }
    }

    #[test]
    fn kills_match_score_and_removed_entities(
        enemies in prop::collection::vec((0.0f32..800.0, 0.0f32..398.0), 0..10),
        bullets in prop::collection::vec((0.0f32..800.0, 0.0f32..474.0), 0..20),
    ) {
        let mut s = init_state(GameConfig::default());
        s.enemies = enemies
            .into_iter()
            .map(|(x, y)| Enemy { x, y, width: 90.0, height: 76.0 })
            .collect();
        s.bullets = bullets
            .into_iter()
            .map(|(x, y)| Bullet { x, y, direction: Direction::Forward, width: 30.0, height: 30.0 })
            .collect();

        let s2 = resolve_collisions(&s);
        let enemies_killed = s.enemies.len() - s2.enemies.len();
        let bullets_spent = s.bullets.len() - s2.bullets.len();
        prop_assert_eq!(enemies_killed, bullets_spent);
        prop_assert_eq!(s2.score as usize, enemies_killed * 100);
    }

    #[test]
    fn disjoint_boxes_never_collide(
        x in -500.0f32..500.0,
        y in -500.0f32..500.0,
        w in 1.0f32..100.0,
        h in 1.0f32..100.0,
        gap in 0.0f32..100.0,
    ) {
        let a = Rect::new(x, y, w, h);
        let right_of = Rect::new(a.right() + gap, y, w, h);
        let below = Rect::new(x, a.bottom() + gap, w, h);
        prop_assert!(!box_collides(&a, &right_of));
        prop_assert!(!box_collides(&a, &below));
    }
}
