use super::helpers;
use crate::core::CLICK_TEXEL_BYTES;
use wgpu;

/// GPU side of the ripple ring: a tiny RGBA8 texture read with nearest
/// filtering so every texel maps to exactly one click.
pub(crate) struct ClickTexture {
    pub(crate) texture: wgpu::Texture,
    pub(crate) view: wgpu::TextureView,
    pub(crate) sampler: wgpu::Sampler,
    width: u32,
    height: u32,
}

impl ClickTexture {
    pub(crate) fn new(device: &wgpu::Device, width: u32, height: u32) -> Self {
        let (texture, view) = helpers::create_data_texture(
            device,
            "click_data_texture",
            width,
            height,
            wgpu::TextureFormat::Rgba8Unorm,
        );
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("click_data_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Nearest,
            min_filter: wgpu::FilterMode::Nearest,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });
        Self {
            texture,
            view,
            sampler,
            width,
            height,
        }
    }

    #[inline]
    pub(crate) fn byte_len(&self) -> usize {
        self.width as usize * self.height as usize * CLICK_TEXEL_BYTES
    }

    /// Replace the whole texture. Short buffers are ignored with a warning.
    pub(crate) fn upload(&self, queue: &wgpu::Queue, bytes: &[u8]) {
        if bytes.len() < self.byte_len() {
            log::warn!(
                "[gpu] click data too short: {} < {} bytes",
                bytes.len(),
                self.byte_len()
            );
            return;
        }
        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &self.texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &bytes[..self.byte_len()],
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(self.width * CLICK_TEXEL_BYTES as u32),
                rows_per_image: Some(self.height),
            },
            wgpu::Extent3d {
                width: self.width,
                height: self.height,
                depth_or_array_layers: 1,
            },
        );
    }
}
