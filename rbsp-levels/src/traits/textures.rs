use crate::rbsp::Texture;

pub trait HasTextures {
    fn textures(&self) -> &[Texture];

    fn get_texture(&self, index: usize) -> Option<&Texture> {
        self.textures().get(index)
    }

    /// Look up a texture by a face's raw shader index.
    fn texture_for_shader(&self, shader: i32) -> Option<&Texture> {
        if shader < 0 {
            return None;
        }
        self.get_texture(shader as usize)
    }
}
