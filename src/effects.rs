/// One-shot explosion animation.

use std::rc::Rc;

use crate::assets::{Frame, TextureSequence};
use crate::entities::{Body, EntityId, Sprite};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExplosionState {
    /// Showing frame `i` of the sequence.
    Frame(usize),
    /// Past the last frame; the owner must drop the entity.
    Removed,
}

/// Plays every frame of its texture sequence once, then reports `Removed`.
#[derive(Clone, Debug)]
pub struct Explosion {
    pub id: EntityId,
    pub body: Body,
    textures: Rc<TextureSequence>,
    cursor: usize,
    state: ExplosionState,
}

impl Explosion {
    /// A fresh explosion showing frame 0.  Callers that want the usual
    /// spawn behaviour call `update` once before the first draw.
    pub fn new(id: EntityId, center_x: f32, center_y: f32, textures: Rc<TextureSequence>) -> Self {
        let (width, height) = textures
            .get(0)
            .map(|f| (f.source.width as f32, f.source.height as f32))
            .unwrap_or((0.0, 0.0));
        Explosion {
            id,
            body: Body::new(center_x, center_y, width, height),
            textures,
            cursor: 0,
            state: ExplosionState::Frame(0),
        }
    }

    /// Step to the next frame.  Once the cursor runs past the last frame
    /// the state becomes `Removed` and stays there.
    pub fn update(&mut self) -> ExplosionState {
        if self.state == ExplosionState::Removed {
            return self.state;
        }
        self.cursor += 1;
        self.state = if self.cursor < self.textures.len() {
            ExplosionState::Frame(self.cursor)
        } else {
            ExplosionState::Removed
        };
        self.state
    }

    pub fn state(&self) -> ExplosionState {
        self.state
    }

    pub fn current_frame(&self) -> Option<&Frame> {
        match self.state {
            ExplosionState::Frame(i) => self.textures.get(i),
            ExplosionState::Removed => None,
        }
    }
}

impl Sprite for Explosion {
    fn id(&self) -> EntityId {
        self.id
    }
    fn body(&self) -> &Body {
        &self.body
    }
}
