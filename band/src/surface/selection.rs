//! Scoped texture selection.

use std::ops::{Deref, DerefMut};

use super::{Surface, TextureId};

/// Keeps a texture selected on a surface for as long as it lives.
///
/// Drawing through the guard lands in the texture. The texture is unselected
/// when the guard drops, on every exit path. A guard whose select was ignored
/// because another texture was already selected leaves that selection alone,
/// so drawing keeps landing in the outer texture.
pub struct SelectedTexture<'a> {
    surface: &'a mut dyn Surface,
    id: TextureId,
    owned: bool,
}

impl<'a> SelectedTexture<'a> {
    pub fn new(surface: &'a mut dyn Surface, id: TextureId) -> Self {
        let owned = surface.select_texture(id);
        if !owned {
            tracing::debug!("texture {:?} not selected, drawing stays on the current target", id);
        }
        Self { surface, id, owned }
    }

    pub fn id(&self) -> TextureId {
        self.id
    }

    /// Whether this guard's select took effect.
    pub fn is_selected(&self) -> bool {
        self.owned
    }
}

impl<'a> Deref for SelectedTexture<'a> {
    type Target = dyn Surface + 'a;

    fn deref(&self) -> &Self::Target {
        &*self.surface
    }
}

impl<'a> DerefMut for SelectedTexture<'a> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut *self.surface
    }
}

impl Drop for SelectedTexture<'_> {
    fn drop(&mut self) {
        if self.owned {
            self.surface.unselect_texture();
        }
    }
}
