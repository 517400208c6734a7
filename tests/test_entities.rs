use side_shooter::compute::init_state;
use side_shooter::entities::*;
use side_shooter::GameConfig;

#[test]
fn entity_clone_and_eq() {
    assert_eq!(GameStatus::Playing, GameStatus::Playing);
    assert_ne!(GameStatus::Playing, GameStatus::GameOver);
    assert_ne!(Direction::Up, Direction::Down);
    assert_eq!(
        GameEvent::EnemyDestroyed { score: 100 },
        GameEvent::EnemyDestroyed { score: 100 }
    );

    let enemy = Enemy { x: 1.0, y: 2.0, width: 90.0, height: 76.0 };
    assert_eq!(enemy.clone(), enemy);
}

#[test]
fn volley_is_forward_up_down() {
    assert_eq!(
        Direction::VOLLEY,
        [Direction::Forward, Direction::Up, Direction::Down]
    );
}

#[test]
fn player_center_is_middle_of_box() {
    let p = Player { x: 50.0, y: 100.0, width: 40.0, height: 50.0 };
    assert_eq!(p.center(), (70.0, 125.0));
}

#[test]
fn player_clamped_to_viewport() {
    let p = Player { x: -10.0, y: 500.0, width: 40.0, height: 50.0 };
    let c = p.clamped_to(800.0, 474.0);
    assert_eq!(c.x, 0.0);
    assert_eq!(c.y, 424.0);
    assert_eq!(c.width, 40.0);
}

#[test]
fn bounds_mirror_fields() {
    let b = Bullet { x: 3.0, y: 4.0, direction: Direction::Forward, width: 30.0, height: 30.0 };
    let r = b.bounds();
    assert_eq!((r.x, r.y, r.right(), r.bottom()), (3.0, 4.0, 33.0, 34.0));
}

#[test]
fn game_state_clone_is_independent() {
    let original = init_state(GameConfig::default());
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.player.x = 99.0;
    cloned.score = 999;
    cloned.enemies.push(Enemy { x: 5.0, y: 5.0, width: 90.0, height: 76.0 });

    assert_eq!(original.player.x, 50.0);
    assert_eq!(original.score, 0);
    assert!(original.enemies.is_empty());
}
