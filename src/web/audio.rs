// <audio> element player.

use std::collections::{HashMap, HashSet};

use log::warn;
use web_sys::HtmlAudioElement;

use crate::audio::{AudioPlayer, Sound};

pub struct HtmlAudio {
    enabled: bool,
    elements: HashMap<Sound, HtmlAudioElement>,
    missing: HashSet<Sound>,
}

impl Default for HtmlAudio {
    fn default() -> Self {
        Self {
            enabled: true,
            elements: HashMap::new(),
            missing: HashSet::new(),
        }
    }
}

impl HtmlAudio {
    fn element(&mut self, sound: Sound) -> Option<&HtmlAudioElement> {
        if !self.elements.contains_key(&sound) {
            match HtmlAudioElement::new_with_src(&sound.path()) {
                Ok(el) => {
                    el.set_loop(sound.looping());
                    self.elements.insert(sound, el);
                }
                Err(err) => {
                    if self.missing.insert(sound) {
                        warn!("sound '{}' unavailable: {err:?}", sound.name());
                    }
                    return None;
                }
            }
        }
        self.elements.get(&sound)
    }
}

impl AudioPlayer for HtmlAudio {
    fn play(&mut self, sound: Sound, volume: f64) {
        if !self.enabled {
            return;
        }
        if let Some(el) = self.element(sound) {
            el.set_volume(volume.clamp(0.0, 1.0));
            el.set_current_time(0.0);
            // Autoplay may be refused until the first user gesture.
            let _ = el.play();
        }
    }

    fn stop(&mut self, sound: Sound) {
        if let Some(el) = self.elements.get(&sound) {
            let _ = el.pause();
            el.set_current_time(0.0);
        }
    }

    fn stop_all(&mut self) {
        for el in self.elements.values() {
            let _ = el.pause();
            el.set_current_time(0.0);
        }
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.stop_all();
        }
    }
}
