//! Frame composition: the world flattened into an ordered draw list, and the
//! surface trait a backend implements to draw it.

use crate::entity::Entity;
use crate::level::{TILE_HEIGHT, TILE_STEP, TILE_WIDTH};
use crate::sprites;
use crate::status_bar::StatusBar;
use crate::world::{Phase, World};

/// Draw order, back to front.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Layer {
    Background,
    Clouds,
    Enemies,
    Collectibles,
    Projectiles,
    Character,
    Ui,
}

/// World sprites scroll with the camera; screen sprites stay put.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Space {
    World,
    Screen,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Sprite {
    pub image: &'static str,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Mirror horizontally around the sprite's own box.
    pub flipped: bool,
    pub space: Space,
    pub layer: Layer,
}

impl Sprite {
    fn of(body: &Entity, image: &'static str, layer: Layer) -> Self {
        Self {
            image,
            x: body.x,
            y: body.y,
            width: body.width,
            height: body.height,
            flipped: body.other_direction,
            space: Space::World,
            layer,
        }
    }

    fn bar(bar: &StatusBar, x: f64, y: f64, space: Space) -> Self {
        Self {
            image: bar.image(),
            x,
            y,
            width: StatusBar::WIDTH,
            height: StatusBar::HEIGHT,
            flipped: false,
            space,
            layer: Layer::Ui,
        }
    }

    /// Left edge on screen for the given camera offset.
    pub fn screen_x(&self, camera_x: f64) -> f64 {
        match self.space {
            Space::World => self.x + camera_x,
            Space::Screen => self.x,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderFrame {
    pub camera_x: f64,
    pub sprites: Vec<Sprite>,
    pub phase: Phase,
}

/// Backend the frame is drawn onto (the browser canvas, or a test recorder).
pub trait Surface {
    fn begin_frame(&mut self);
    fn draw(&mut self, sprite: &Sprite, camera_x: f64);
    fn end_frame(&mut self, phase: Phase);
}

/// Flatten the world into draw order.
pub fn compose(world: &World) -> RenderFrame {
    let level = world.level();
    let mut out = Vec::new();

    for i in -1..=level.background_tiles {
        let x = i as f64 * TILE_STEP;
        let variant = i.rem_euclid(2) as usize;
        let tile = |image| Sprite {
            image,
            x,
            y: 0.0,
            width: TILE_WIDTH,
            height: TILE_HEIGHT,
            flipped: false,
            space: Space::World,
            layer: Layer::Background,
        };
        out.push(tile(sprites::AIR));
        for layer in &sprites::BACKGROUND_LAYERS {
            out.push(tile(layer[variant]));
        }
    }

    for cloud in &level.clouds {
        out.push(Sprite::of(&cloud.body, cloud.image, Layer::Clouds));
    }

    for enemy in &level.enemies {
        out.push(Sprite::of(enemy.body(), enemy.image(), Layer::Enemies));
    }

    for coin in level.coins.iter().filter(|c| !c.collected) {
        out.push(Sprite::of(&coin.body, coin.image(), Layer::Collectibles));
    }
    for bottle in level.bottles.iter().filter(|b| !b.collected) {
        out.push(Sprite::of(&bottle.body, bottle.image(), Layer::Collectibles));
    }

    for bottle in world.projectiles() {
        out.push(Sprite::of(&bottle.body, bottle.image(), Layer::Projectiles));
    }

    let character = world.character();
    out.push(Sprite::of(&character.body, character.image(), Layer::Character));

    let bars = world.bars();
    for bar in [&bars.health, &bars.coins, &bars.bottles] {
        let (x, y) = bar.kind.screen_pos();
        out.push(Sprite::bar(bar, x, y, Space::Screen));
    }
    for enemy in &level.enemies {
        if let Some((dx, dy)) = enemy.health_bar_offset() {
            let body = enemy.body();
            out.push(Sprite::bar(&bars.boss, body.x + dx, body.y + dy, Space::World));
        }
    }

    RenderFrame {
        camera_x: world.camera_x(),
        sprites: out,
        phase: world.phase(),
    }
}

/// Draw a composed frame.
pub fn present(frame: &RenderFrame, surface: &mut dyn Surface) {
    surface.begin_frame();
    for sprite in &frame.sprites {
        surface.draw(sprite, frame.camera_x);
    }
    surface.end_frame(frame.phase);
}
