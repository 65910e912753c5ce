// Canvas surface.
// Images are created lazily by path and drawn once the browser has decoded
// them; a sprite whose image is still loading is skipped for that frame.

use std::collections::{HashMap, HashSet};

use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement, window};

use crate::error::GameError;
use crate::render::{Sprite, Surface};
use crate::world::Phase;

const CANVAS_ID: &str = "salsa-canvas";
const WIDTH: u32 = 720;
const HEIGHT: u32 = 480;

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    images: HashMap<&'static str, HtmlImageElement>,
    broken: HashSet<&'static str>,
}

impl CanvasSurface {
    /// Reuse the page's canvas or append one.
    pub fn attach() -> Result<Self, GameError> {
        let win = window().ok_or(GameError::Missing("window"))?;
        let doc = win.document().ok_or(GameError::Missing("document"))?;
        let canvas: HtmlCanvasElement = match doc.get_element_by_id(CANVAS_ID) {
            Some(el) => el.dyn_into().map_err(|_| GameError::Dom(format!("#{CANVAS_ID} is not a canvas")))?,
            None => {
                let c: HtmlCanvasElement = doc
                    .create_element("canvas")?
                    .dyn_into()
                    .map_err(|_| GameError::Dom("created element is not a canvas".into()))?;
                c.set_id(CANVAS_ID);
                c.set_width(WIDTH);
                c.set_height(HEIGHT);
                c.set_attribute("style", "display:block; margin:24px auto; background:#000; border-radius:12px;")?;
                doc.body().ok_or(GameError::Missing("body"))?.append_child(&c)?;
                c
            }
        };
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or(GameError::Missing("2d context"))?
            .dyn_into()
            .map_err(|_| GameError::Dom("context is not 2d".into()))?;
        Ok(Self {
            canvas,
            ctx,
            images: HashMap::new(),
            broken: HashSet::new(),
        })
    }

    fn image(&mut self, path: &'static str) -> Option<HtmlImageElement> {
        if let Some(img) = self.images.get(path) {
            return Some(img.clone());
        }
        match HtmlImageElement::new() {
            Ok(img) => {
                img.set_src(path);
                self.images.insert(path, img.clone());
                Some(img)
            }
            Err(err) => {
                warn!("cannot create image for {path}: {err:?}");
                None
            }
        }
    }

    fn overlay(&self, title: &str, hint: &str) {
        let w = self.canvas.width() as f64;
        let h = self.canvas.height() as f64;
        self.ctx.set_fill_style_str("rgba(0,0,0,0.55)");
        self.ctx.fill_rect(0.0, 0.0, w, h);
        self.ctx.set_text_align("center");
        self.ctx.set_fill_style_str("#ffd166");
        self.ctx.set_font("bold 48px 'Trebuchet MS', sans-serif");
        let _ = self.ctx.fill_text(title, w / 2.0, h / 2.0 - 10.0);
        self.ctx.set_fill_style_str("#ffffff");
        self.ctx.set_font("20px 'Trebuchet MS', sans-serif");
        let _ = self.ctx.fill_text(hint, w / 2.0, h / 2.0 + 30.0);
    }
}

impl Surface for CanvasSurface {
    fn begin_frame(&mut self) {
        let w = self.canvas.width() as f64;
        let h = self.canvas.height() as f64;
        self.ctx.clear_rect(0.0, 0.0, w, h);
    }

    fn draw(&mut self, sprite: &Sprite, camera_x: f64) {
        if self.broken.contains(sprite.image) {
            return;
        }
        let Some(img) = self.image(sprite.image) else {
            return;
        };
        if !img.complete() {
            return;
        }
        if img.natural_width() == 0 {
            warn!("image failed to load: {}", sprite.image);
            self.broken.insert(sprite.image);
            return;
        }
        let x = sprite.screen_x(camera_x);
        let drawn = if sprite.flipped {
            self.ctx.save();
            let _ = self.ctx.translate(x + sprite.width, sprite.y);
            let _ = self.ctx.scale(-1.0, 1.0);
            let r = self
                .ctx
                .draw_image_with_html_image_element_and_dw_and_dh(&img, 0.0, 0.0, sprite.width, sprite.height);
            self.ctx.restore();
            r
        } else {
            self.ctx
                .draw_image_with_html_image_element_and_dw_and_dh(&img, x, sprite.y, sprite.width, sprite.height)
        };
        if let Err(err) = drawn {
            warn!("draw {} failed: {err:?}", sprite.image);
            self.broken.insert(sprite.image);
        }
    }

    fn end_frame(&mut self, phase: Phase) {
        if phase.game_won {
            self.overlay("You won!", "Press Enter to play again");
        } else if phase.game_over {
            self.overlay("Game over", "Press Enter to try again");
        } else if !phase.game_started {
            self.overlay("Salsa Run", "Press Enter to start");
        }
    }
}
