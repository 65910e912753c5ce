// Level 1: the desert run.
// Chickens and chicks spread across five screens, the boss guarding the end.
use super::{EnemySpawn, LevelDesc};

pub static LEVEL1: LevelDesc = LevelDesc {
    name: "Desert Run",
    level_end_x: 5000.0,
    background_tiles: 7,
    enemies: &[
        EnemySpawn::Chicken { x: 700.0 },
        EnemySpawn::Chick { x: 950.0 },
        EnemySpawn::Chicken { x: 1300.0 },
        EnemySpawn::Chicken { x: 1750.0 },
        EnemySpawn::Chick { x: 2100.0 },
        EnemySpawn::Chick { x: 2250.0 },
        EnemySpawn::Chicken { x: 2700.0 },
        EnemySpawn::Chicken { x: 3150.0 },
        EnemySpawn::Chick { x: 3500.0 },
        EnemySpawn::Chicken { x: 3800.0 },
        EnemySpawn::Boss { x: 4500.0 },
    ],
    coins: &[
        (450.0, 150.0),
        (550.0, 100.0),
        (650.0, 150.0),
        (1500.0, 220.0),
        (1950.0, 120.0),
        (2050.0, 120.0),
        (2800.0, 180.0),
        (3300.0, 250.0),
        (3400.0, 150.0),
        (3950.0, 200.0),
    ],
    bottles: &[400.0, 800.0, 1200.0, 1600.0, 2000.0, 2400.0, 2900.0, 3300.0, 3700.0, 4000.0],
    clouds: &[0.0, 1800.0, 3600.0],
};
