// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the gallery hot paths.
//!
//! Measures the performance of:
//! - Slideshow ticks through the state machine (resolve + crossfade)
//! - Crossfade sampling, which runs on every animation frame
//! - Circular thumbnail rendering at startup

use criterion::{criterion_group, criterion_main, Criterion};
use iced_gallery::application::gallery::{Command, GalleryState};
use iced_gallery::application::port::ImageBytes;
use iced_gallery::config::THUMBNAIL_SIZE;
use iced_gallery::domain::gallery::{ImageList, ImageRef};
use iced_gallery::infrastructure::MemoryImageSource;
use iced_gallery::media::circular_thumbnail;
use image_rs::{ImageFormat, Rgba, RgbaImage};
use std::hint::black_box;
use std::io::Cursor;
use std::time::{Duration, Instant};

const IMAGE_COUNT: usize = 9;

fn gallery() -> (GalleryState, MemoryImageSource) {
    let names: Vec<String> = (1..=IMAGE_COUNT)
        .map(|n| format!("images/image{n}.jpeg"))
        .collect();
    let source = names.iter().fold(MemoryImageSource::new(), |source, name| {
        source.with_image(name.as_str(), vec![0u8; 1024])
    });
    let list = ImageList::new(names.into_iter().map(ImageRef::new).collect())
        .expect("non-empty gallery");
    (GalleryState::new(list), source)
}

/// Encodes a synthetic photo-sized PNG.
fn sample_png(width: u32, height: u32) -> ImageBytes {
    let image = RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x % 256) as u8, (y % 256) as u8, 128, 255])
    });
    let mut buffer = Cursor::new(Vec::new());
    image
        .write_to(&mut buffer, ImageFormat::Png)
        .expect("encode sample image");
    ImageBytes::from(buffer.into_inner())
}

/// Benchmark a full slideshow loop over the gallery.
fn bench_slideshow_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_cycle");

    group.bench_function("slideshow_full_loop", |b| {
        let (mut state, source) = gallery();
        let start = Instant::now();
        state.apply(Command::ToggleSlideshow, &source, start);

        b.iter(|| {
            for step in 1..=IMAGE_COUNT as u32 {
                let now = start + Duration::from_secs(2) * step;
                let outcome = state.apply(Command::Tick, &source, now);
                black_box(outcome);
                state.finish_transition(now + Duration::from_secs(1));
            }
        });
    });

    group.bench_function("crossfade_sample", |b| {
        let (mut state, source) = gallery();
        let start = Instant::now();
        state.apply(Command::Select(0), &source, start);
        state.apply(Command::Next, &source, start);
        let crossfade = state.crossfade().expect("crossfade running").clone();
        let frame_time = start + Duration::from_millis(640);

        b.iter(|| black_box(crossfade.sample(black_box(frame_time))));
    });

    group.finish();
}

/// Benchmark thumbnail rendering for one typical image.
fn bench_thumbnail(c: &mut Criterion) {
    let mut group = c.benchmark_group("thumbnail");
    let bytes = sample_png(640, 480);

    group.bench_function("circular_thumbnail_640x480", |b| {
        b.iter(|| black_box(circular_thumbnail(black_box(&bytes), THUMBNAIL_SIZE)));
    });

    group.finish();
}

criterion_group!(benches, bench_slideshow_cycle, bench_thumbnail);
criterion_main!(benches);
