/// Viewport state.
#[derive(Default)]
pub struct ViewportState {
    pub texture: Option<egui::TextureHandle>,
    /// Rendered image size in pixels.
    pub image_size: Option<[usize; 2]>,
    pub viewing_label: String,
}
