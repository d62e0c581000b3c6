use crate::foundation::error::{SceneError, SceneResult};

/// Approximate Gaussian blur of a premultiplied RGBA8 buffer.
///
/// Three successive box blurs (running sums, clamp-to-edge) whose widths are chosen so the
/// combined variance matches `sigma`. Cost is independent of the radius.
pub fn blur_rgba8_premul(src: &[u8], width: u32, height: u32, sigma: f64) -> SceneResult<Vec<u8>> {
    let expected_len = (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| SceneError::render("blur buffer size overflow"))?;
    if src.len() != expected_len {
        return Err(SceneError::render(
            "blur_rgba8_premul expects src matching width*height*4",
        ));
    }
    if !sigma.is_finite() || sigma < 0.0 {
        return Err(SceneError::validation("blur sigma must be finite and >= 0"));
    }

    let mut out = src.to_vec();
    if sigma < 0.5 || width == 0 || height == 0 {
        return Ok(out);
    }

    let mut tmp = vec![0u8; expected_len];
    for size in box_sizes_for_gauss(sigma, 3) {
        let radius = (size / 2) as usize;
        if radius == 0 {
            continue;
        }
        horizontal_box(&out, &mut tmp, width as usize, height as usize, radius);
        vertical_box(&tmp, &mut out, width as usize, height as usize, radius);
    }
    Ok(out)
}

/// Odd box widths whose `n`-fold convolution approximates a Gaussian of `sigma`.
fn box_sizes_for_gauss(sigma: f64, n: u32) -> Vec<u32> {
    let nf = f64::from(n);
    let w_ideal = ((12.0 * sigma * sigma / nf) + 1.0).sqrt();
    let mut wl = w_ideal.floor() as u32;
    if wl.is_multiple_of(2) {
        wl = wl.saturating_sub(1);
    }
    let wl = wl.max(1);
    let wu = wl + 2;
    let wlf = f64::from(wl);
    let m_ideal =
        (12.0 * sigma * sigma - nf * wlf * wlf - 4.0 * nf * wlf - 3.0 * nf) / (-4.0 * wlf - 4.0);
    let m = m_ideal.round().clamp(0.0, nf) as u32;
    (0..n).map(|i| if i < m { wl } else { wu }).collect()
}

fn horizontal_box(src: &[u8], dst: &mut [u8], w: usize, h: usize, r: usize) {
    let span = (2 * r + 1) as u32;
    let last = w - 1;
    for y in 0..h {
        let row = y * w * 4;
        let px = |x: usize, c: usize| u32::from(src[row + x.min(last) * 4 + c]);

        let mut acc = [0u32; 4];
        for (c, a) in acc.iter_mut().enumerate() {
            *a = px(0, c) * (r as u32 + 1);
            for x in 1..=r {
                *a += px(x, c);
            }
        }
        for x in 0..w {
            let out = row + x * 4;
            for c in 0..4 {
                dst[out + c] = div_round(acc[c], span);
            }
            let add = x + r + 1;
            let sub = x.saturating_sub(r);
            for (c, a) in acc.iter_mut().enumerate() {
                *a = *a + px(add, c) - px(sub, c);
            }
        }
    }
}

fn vertical_box(src: &[u8], dst: &mut [u8], w: usize, h: usize, r: usize) {
    let span = (2 * r + 1) as u32;
    let last = h - 1;
    for x in 0..w {
        let px = |y: usize, c: usize| u32::from(src[(y.min(last) * w + x) * 4 + c]);

        let mut acc = [0u32; 4];
        for (c, a) in acc.iter_mut().enumerate() {
            *a = px(0, c) * (r as u32 + 1);
            for y in 1..=r {
                *a += px(y, c);
            }
        }
        for y in 0..h {
            let out = (y * w + x) * 4;
            for c in 0..4 {
                dst[out + c] = div_round(acc[c], span);
            }
            let add = y + r + 1;
            let sub = y.saturating_sub(r);
            for (c, a) in acc.iter_mut().enumerate() {
                *a = *a + px(add, c) - px(sub, c);
            }
        }
    }
}

fn div_round(acc: u32, span: u32) -> u8 {
    ((acc + span / 2) / span).min(255) as u8
}
