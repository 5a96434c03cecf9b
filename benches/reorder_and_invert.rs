use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use ros_vision_rs::camera::{BackProjection, CameraInfo};
use ros_vision_rs::image_pipeline::{
    ConversionConfig, ImageMessage, ImageToTexturePipeline, reorder_pixels,
};
use ros_vision_rs::linalg::{Matrix, invert};

fn generate_mock_bgra_data(width: usize, height: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(width * height * 4);
    for y in 0..height {
        for x in 0..width {
            let value = ((x + y) % 256) as u8;
            data.extend_from_slice(&[value, value / 2, 255 - value, 255]);
        }
    }
    data
}

fn benchmark_reorder_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("reorder_by_size");

    let sizes = vec![
        (100, 100, "100x100"),
        (640, 480, "640x480"),
        (1920, 1080, "1920x1080"),
    ];

    for (width, height, label) in sizes {
        let mock_data = generate_mock_bgra_data(width, height);

        group.bench_with_input(
            BenchmarkId::from_parameter(label),
            &mock_data,
            |b, data| {
                b.iter(|| {
                    let _ = reorder_pixels(black_box(data), "bgra8", width, height, true, true);
                });
            },
        );
    }

    group.finish();
}

fn benchmark_reorder_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("reorder_modes");
    let mock_data = generate_mock_bgra_data(640, 480);

    let modes = vec![
        (true, false, "swap"),
        (false, true, "flip"),
        (true, true, "swap_and_flip"),
    ];

    for (swap, flip, label) in modes {
        group.bench_with_input(
            BenchmarkId::from_parameter(label),
            &mock_data,
            |b, data| {
                b.iter(|| {
                    let _ = reorder_pixels(black_box(data), "bgra8", 640, 480, swap, flip);
                });
            },
        );
    }

    group.finish();
}

fn benchmark_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("raw_image_pipeline");
    let message = ImageMessage {
        width: 640,
        height: 480,
        encoding: "bgra8".to_string(),
        is_bigendian: 0,
        step: 640 * 4,
        data: generate_mock_bgra_data(640, 480),
    };

    group.bench_function("with_validation", |b| {
        let config = ConversionConfig::builder()
            .channel_swap(true)
            .validate_dimensions(true)
            .build();
        let pipeline = ImageToTexturePipeline::new(config);

        b.iter(|| {
            let _ = pipeline.convert(black_box(&message));
        });
    });

    group.bench_function("without_validation", |b| {
        let config = ConversionConfig::builder()
            .channel_swap(true)
            .validate_dimensions(false)
            .build();
        let pipeline = ImageToTexturePipeline::new(config);

        b.iter(|| {
            let _ = pipeline.convert(black_box(&message));
        });
    });

    group.finish();
}

fn benchmark_inversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("matrix_inversion");

    for n in [3usize, 8, 32] {
        let mut m = Matrix::identity(n);
        for i in 0..n {
            for j in 0..n {
                m[(i, j)] += ((i * 7 + j * 3) % 11) as f64 / 11.0;
            }
            m[(i, i)] += n as f64;
        }

        group.bench_with_input(BenchmarkId::from_parameter(n), &m, |b, m| {
            b.iter(|| {
                let _ = invert(black_box(m));
            });
        });
    }

    group.finish();
}

fn benchmark_pixel_grid(c: &mut Criterion) {
    let camera = CameraInfo {
        width: 640,
        height: 480,
        k: [525.0, 0.0, 319.5, 0.0, 525.0, 239.5, 0.0, 0.0, 1.0],
        p: [525.0, 0.0, 319.5, 0.0, 0.0, 525.0, 239.5, 0.0, 0.0, 0.0, 1.0, 0.0],
    };

    c.bench_function("pixels_in_world_640x480", |b| {
        b.iter(|| {
            let _ = black_box(&camera).pixels_in_world(BackProjection::Normalized);
        });
    });
}

criterion_group!(
    benches,
    benchmark_reorder_sizes,
    benchmark_reorder_modes,
    benchmark_pipeline,
    benchmark_inversion,
    benchmark_pixel_grid
);
criterion_main!(benches);
