use crate::foundation::error::{SceneError, SceneResult};
use crate::foundation::math::mul_div255_u8;

pub type PremulRgba8 = [u8; 4];

/// Porter-Duff source-over of premultiplied pixels, with `src` scaled by `opacity`.
pub fn over(dst: PremulRgba8, src: PremulRgba8, opacity: f32) -> PremulRgba8 {
    let opacity = opacity.clamp(0.0, 1.0);
    if opacity <= 0.0 || src[3] == 0 {
        return dst;
    }

    let op = ((opacity * 255.0).round() as i32).clamp(0, 255) as u16;
    let sa = mul_div255_u8(u16::from(src[3]), op);
    if sa == 0 {
        return dst;
    }

    let inv = 255u16 - u16::from(sa);

    let mut out = [0u8; 4];
    out[3] = sa.saturating_add(mul_div255_u8(u16::from(dst[3]), inv));

    for i in 0..3 {
        let sc = mul_div255_u8(u16::from(src[i]), op);
        let dc = mul_div255_u8(u16::from(dst[i]), inv);
        out[i] = sc.saturating_add(dc);
    }
    out
}

/// Additive ("lighter") blend: per-channel saturating sum of premultiplied values.
pub fn add(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    [
        dst[0].saturating_add(src[0]),
        dst[1].saturating_add(src[1]),
        dst[2].saturating_add(src[2]),
        dst[3].saturating_add(src[3]),
    ]
}

pub fn over_in_place(dst: &mut [u8], src: &[u8], opacity: f32) -> SceneResult<()> {
    check_buffers("over_in_place", dst, src)?;
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]], opacity);
        d.copy_from_slice(&out);
    }
    Ok(())
}

pub fn add_in_place(dst: &mut [u8], src: &[u8]) -> SceneResult<()> {
    check_buffers("add_in_place", dst, src)?;
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        if s[3] == 0 && s[0] == 0 && s[1] == 0 && s[2] == 0 {
            continue;
        }
        let out = add([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
        d.copy_from_slice(&out);
    }
    Ok(())
}

/// Add a `src_width`-wide tile into `dst` (a `dst_width`-wide buffer) with its top-left
/// corner at `origin`. The tile must lie fully inside `dst`.
pub fn add_region(
    dst: &mut [u8],
    dst_width: usize,
    src: &[u8],
    src_width: usize,
    origin: (usize, usize),
) -> SceneResult<()> {
    if src_width == 0 || !src.len().is_multiple_of(src_width * 4) {
        return Err(SceneError::render("add_region expects whole rgba8 rows"));
    }
    let src_height = src.len() / (src_width * 4);
    let (x0, y0) = origin;
    let dst_height = dst.len() / (dst_width * 4).max(1);
    if x0 + src_width > dst_width || y0 + src_height > dst_height {
        return Err(SceneError::render(format!(
            "add_region tile {src_width}x{src_height} at ({x0}, {y0}) exceeds {dst_width}x{dst_height}"
        )));
    }

    let row_bytes = src_width * 4;
    for (row, s) in src.chunks_exact(row_bytes).enumerate() {
        let start = ((y0 + row) * dst_width + x0) * 4;
        add_in_place(&mut dst[start..start + row_bytes], s)?;
    }
    Ok(())
}

/// Convert premultiplied RGBA8 to straight alpha.
pub fn unpremultiply(px: PremulRgba8) -> [u8; 4] {
    let a = px[3];
    if a == 0 {
        return [0, 0, 0, 0];
    }
    if a == 255 {
        return px;
    }
    let un = |c: u8| -> u8 {
        ((u32::from(c) * 255 + u32::from(a) / 2) / u32::from(a)).min(255) as u8
    };
    [un(px[0]), un(px[1]), un(px[2]), a]
}

fn check_buffers(op: &str, dst: &[u8], src: &[u8]) -> SceneResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(SceneError::render(format!(
            "{op} expects equal-length rgba8 buffers"
        )));
    }
    Ok(())
}
