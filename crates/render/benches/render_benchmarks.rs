//! Rasterizer benchmarks.

use common::Point;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use render::{lerp, triangulate, PixelBuffer, Rasterizer};
use scene::{parse_points, Element, Scene, Style};

fn mixed_scene(size: u32) -> Scene {
    let view_box = "0 0 100 100".parse().expect("valid viewBox");
    Scene::new(view_box, size, size)
        .with_element(Element::line(
            Point::new(0.0, 0.0),
            Point::new(100.0, 100.0),
            Style::new().with_stroke("rgb(255, 0, 0)"),
        ))
        .with_element(Element::polyline(
            parse_points("10,90 30,10 50,90 70,10 90,90"),
            Style::new().with_stroke("#0000ff").with_stroke_opacity(0.5),
        ))
        .with_element(Element::polygon(
            parse_points("10,10 80,20 90,80 20,70"),
            Style::new().with_fill("rgb(0, 128, 0)").with_fill_opacity(0.4),
        ))
        .with_element(Element::path(
            "M 10 50 Q 50 0 90 50 T 90 90 Z",
            Style::new().with_stroke("#ff8800"),
        ))
}

/// Benchmark full scene rendering.
fn bench_render_scene(c: &mut Criterion) {
    let rasterizer = Rasterizer::default();
    let mut group = c.benchmark_group("render_scene");

    for size in [101, 401, 1001].iter() {
        let scene = mixed_scene(*size);
        group.bench_with_input(BenchmarkId::new("mixed", size), size, |b, &size| {
            let mut buffer = PixelBuffer::new(size, size);
            b.iter(|| {
                rasterizer.render(black_box(&scene), &mut buffer).expect("render");
                black_box(buffer.as_bytes().len())
            })
        });
    }

    group.finish();
}

/// Benchmark the circle rasterizer, whose stroke draws hundreds of radii.
fn bench_circle(c: &mut Criterion) {
    let rasterizer = Rasterizer::default();
    let mut group = c.benchmark_group("circle");

    let filled = Scene::new("0 0 200 200".parse().expect("valid viewBox"), 201, 201).with_element(
        Element::circle(Point::new(100.0, 100.0), 80.0, Style::new().with_fill("#00ff00")),
    );
    let stroked = Scene::new("0 0 200 200".parse().expect("valid viewBox"), 201, 201).with_element(
        Element::circle(
            Point::new(100.0, 100.0),
            80.0,
            Style::new().with_fill("#00ff00").with_stroke("#000000"),
        ),
    );

    group.bench_function("fill", |b| {
        let mut buffer = PixelBuffer::new(201, 201);
        b.iter(|| rasterizer.render(black_box(&filled), &mut buffer).expect("render"))
    });

    group.bench_function("fill_and_stroke", |b| {
        let mut buffer = PixelBuffer::new(201, 201);
        b.iter(|| rasterizer.render(black_box(&stroked), &mut buffer).expect("render"))
    });

    group.finish();
}

/// Benchmark geometry helpers.
fn bench_geometry(c: &mut Criterion) {
    let mut group = c.benchmark_group("geometry");
    let quad = parse_points("1,1 8,2 9,8 2,7");

    group.bench_function("triangulate_quad", |b| {
        b.iter(|| black_box(triangulate(black_box(&quad))))
    });

    for length in [10.0, 100.0, 1000.0].iter() {
        group.bench_with_input(BenchmarkId::new("lerp", length), length, |b, &length| {
            b.iter(|| black_box(lerp(0.0, 0.0, length, length / 3.0).count()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_render_scene, bench_circle, bench_geometry);

criterion_main!(benches);
