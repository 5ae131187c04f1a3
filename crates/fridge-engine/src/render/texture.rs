use super::RenderCtx;

/// A GPU-resident sprite image.
///
/// Decoding the image file happens outside the engine; this type uploads
/// already-decoded RGBA8 pixels and hands out the view/sampler pair the
/// sprite pipeline binds. The handle is opaque to callers.
pub struct SpriteTexture {
    view: wgpu::TextureView,
    sampler: wgpu::Sampler,
    width: u32,
    height: u32,
}

impl SpriteTexture {
    /// Uploads `pixels` (tightly packed straight-alpha RGBA8, row-major) as a
    /// `width` x `height` texture.
    ///
    /// Panics if the buffer length does not match the dimensions; decoded
    /// images always satisfy this.
    pub fn from_rgba8(ctx: &RenderCtx<'_>, width: u32, height: u32, pixels: &[u8]) -> Self {
        assert!(width > 0 && height > 0, "sprite image has zero size");
        assert_eq!(
            pixels.len() as u64,
            u64::from(width) * u64::from(height) * 4,
            "pixel buffer does not match {width}x{height} RGBA8"
        );

        let size = wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        };

        let texture = ctx.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("fridge sprite texture"),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        ctx.queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            pixels,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * width),
                rows_per_image: Some(height),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        let sampler = ctx.device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("fridge sprite sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::MipmapFilterMode::Nearest,
            ..Default::default()
        });

        Self {
            view,
            sampler,
            width,
            height,
        }
    }

    /// Source image size in pixels.
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub(crate) fn view(&self) -> &wgpu::TextureView {
        &self.view
    }

    pub(crate) fn sampler(&self) -> &wgpu::Sampler {
        &self.sampler
    }
}
