//! Channel reordering and vertical flipping of interleaved pixel buffers.
//!
//! ROS cameras commonly publish BGR(A) rows top-to-bottom while texture
//! consumers expect RGB(A) and, depending on the renderer, bottom-to-top rows.
//! Both fixes are a permutation of the buffer: the length never changes.

use std::borrow::Cow;

use crate::image_pipeline::codec::layout::PixelLayout;

/// Source channel for each destination channel when swapping: B<->R, G and A stay.
const CHANNEL_SWAP: [usize; 4] = [2, 1, 0, 3];

/// Reorders a byte-per-sample buffer whose channel count is derived from `tag`.
///
/// Returns the input untouched when neither transform is requested.
///
/// # Panics
///
/// Panics when `buffer.len() != width * height * channels`.
pub fn reorder_pixels<'a>(
    buffer: &'a [u8],
    tag: &str,
    width: usize,
    height: usize,
    channel_swap: bool,
    flip_vertical: bool,
) -> Cow<'a, [u8]> {
    reorder_with_layout(
        buffer,
        PixelLayout::from_tag(tag),
        width,
        height,
        channel_swap,
        flip_vertical,
    )
}

/// Reorders a buffer with an explicit layout, moving whole samples.
///
/// # Panics
///
/// Panics when `buffer.len()` does not match `layout.buffer_len(width, height)`.
pub fn reorder_with_layout<'a>(
    buffer: &'a [u8],
    layout: PixelLayout,
    width: usize,
    height: usize,
    channel_swap: bool,
    flip_vertical: bool,
) -> Cow<'a, [u8]> {
    if !channel_swap && !flip_vertical {
        return Cow::Borrowed(buffer);
    }

    assert_eq!(
        buffer.len(),
        layout.buffer_len(width, height),
        "pixel buffer does not match {}x{} with {} channel(s) of {} byte(s)",
        width,
        height,
        layout.channels,
        layout.sample_bytes
    );

    let row_bytes = width * layout.pixel_bytes();
    // single channel buffers have nothing to swap
    let swap = channel_swap && (3..=4).contains(&layout.channels);

    let mut converted = vec![0u8; buffer.len()];
    if row_bytes == 0 {
        return Cow::Owned(converted);
    }

    for (row, out_row) in converted.chunks_exact_mut(row_bytes).enumerate() {
        let src_row = if flip_vertical { height - 1 - row } else { row };
        let src = &buffer[src_row * row_bytes..(src_row + 1) * row_bytes];

        if swap {
            swap_row(src, out_row, layout);
        } else {
            out_row.copy_from_slice(src);
        }
    }

    Cow::Owned(converted)
}

fn swap_row(src: &[u8], dst: &mut [u8], layout: PixelLayout) {
    let pixel_bytes = layout.pixel_bytes();
    let sample = layout.sample_bytes;

    for (dst_px, src_px) in dst
        .chunks_exact_mut(pixel_bytes)
        .zip(src.chunks_exact(pixel_bytes))
    {
        for channel in 0..layout.channels {
            let from = CHANNEL_SWAP[channel] * sample;
            dst_px[channel * sample..(channel + 1) * sample]
                .copy_from_slice(&src_px[from..from + sample]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterned(len: usize) -> Vec<u8> {
        (0..len).map(|i| (i * 37 % 251) as u8).collect()
    }

    #[test]
    fn test_identity_is_zero_copy() {
        let buffer = patterned(2 * 3 * 3);
        let out = reorder_pixels(&buffer, "bgr8", 2, 3, false, false);
        assert!(matches!(out, Cow::Borrowed(_)));
        assert_eq!(&*out, &buffer[..]);
    }

    #[test]
    fn test_flip_mono() {
        let buffer = [1u8, 2, 3, 4];
        let out = reorder_pixels(&buffer, "mono8", 2, 2, false, true);
        assert_eq!(&*out, &[3, 4, 1, 2]);
    }

    #[test]
    fn test_swap_bgra() {
        let buffer = [10u8, 20, 30, 40, 11, 21, 31, 41];
        let out = reorder_pixels(&buffer, "bgra8", 2, 1, true, false);
        assert_eq!(&*out, &[30, 20, 10, 40, 31, 21, 11, 41]);
    }

    #[test]
    fn test_swap_bgr() {
        let buffer = [1u8, 2, 3, 4, 5, 6];
        let out = reorder_pixels(&buffer, "bgr8", 2, 1, true, false);
        assert_eq!(&*out, &[3, 2, 1, 6, 5, 4]);
    }

    #[test]
    fn test_swap_is_noop_for_mono() {
        let buffer = patterned(12);
        let out = reorder_pixels(&buffer, "mono8", 4, 3, true, false);
        assert_eq!(&*out, &buffer[..]);
    }

    #[test]
    fn test_swap_and_flip_single_pass() {
        // two rows of two BGR pixels
        let buffer = [
            1u8, 2, 3, 4, 5, 6, //
            7, 8, 9, 10, 11, 12,
        ];
        let out = reorder_pixels(&buffer, "bgr8", 2, 2, true, true);
        assert_eq!(
            &*out,
            &[
                9, 8, 7, 12, 11, 10, //
                3, 2, 1, 6, 5, 4,
            ]
        );
    }

    #[test]
    fn test_swap_twice_restores() {
        let buffer = patterned(5 * 4 * 4);
        let once = reorder_pixels(&buffer, "rgba8", 5, 4, true, false).into_owned();
        assert_ne!(once, buffer);
        let twice = reorder_pixels(&once, "rgba8", 5, 4, true, false);
        assert_eq!(&*twice, &buffer[..]);
    }

    #[test]
    fn test_flip_twice_restores() {
        for (tag, channels) in [("mono8", 1), ("rgb8", 3), ("bgra8", 4)] {
            let buffer = patterned(3 * 7 * channels);
            let once = reorder_pixels(&buffer, tag, 3, 7, false, true).into_owned();
            let twice = reorder_pixels(&once, tag, 3, 7, false, true);
            assert_eq!(&*twice, &buffer[..], "flip involution failed for {tag}");
        }
    }

    #[test]
    fn test_length_preserved() {
        let buffer = patterned(6 * 5 * 4);
        for (swap, flip) in [(true, false), (false, true), (true, true)] {
            let out = reorder_pixels(&buffer, "bgra8", 6, 5, swap, flip);
            assert_eq!(out.len(), buffer.len());
        }
    }

    #[test]
    fn test_multi_byte_samples_move_together() {
        // one row of two 16-bit BGR pixels, little endian
        let buffer = [
            0x01u8, 0x10, 0x02, 0x20, 0x03, 0x30, //
            0x04, 0x40, 0x05, 0x50, 0x06, 0x60,
        ];
        let layout = PixelLayout {
            channels: 3,
            sample_bytes: 2,
        };
        let out = reorder_with_layout(&buffer, layout, 2, 1, true, false);
        assert_eq!(
            &*out,
            &[0x03, 0x30, 0x02, 0x20, 0x01, 0x10, 0x06, 0x60, 0x05, 0x50, 0x04, 0x40]
        );
    }

    #[test]
    fn test_flip_mono16_rows() {
        let buffer = [1u8, 0, 2, 0, 3, 0, 4, 0];
        let layout = PixelLayout {
            channels: 1,
            sample_bytes: 2,
        };
        let out = reorder_with_layout(&buffer, layout, 2, 2, false, true);
        assert_eq!(&*out, &[3, 0, 4, 0, 1, 0, 2, 0]);
    }

    #[test]
    #[should_panic(expected = "pixel buffer does not match")]
    fn test_length_mismatch_is_a_caller_bug() {
        let buffer = [0u8; 5];
        let _ = reorder_pixels(&buffer, "rgb8", 2, 1, true, false);
    }
}
