use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lanediv::{divide_slice, floor_divide_slice};

fn bench_u32(c: &mut Criterion) {
    let src: Vec<u32> = (0..4096u32).map(|i| i.wrapping_mul(2_654_435_761)).collect();
    c.bench_function("divide_slice/u32/7", |b| {
        b.iter(|| {
            let mut buf = src.clone();
            divide_slice(&mut buf, black_box(7u32));
            buf
        })
    });
    c.bench_function("hardware_div/u32/7", |b| {
        b.iter(|| {
            let mut buf = src.clone();
            let d = black_box(7u32);
            for x in &mut buf {
                *x /= d;
            }
            buf
        })
    });
}

fn bench_i64(c: &mut Criterion) {
    let src: Vec<i64> = (0..4096i64)
        .map(|i| i.wrapping_mul(-0x61c8_8646_80b5_83eb) >> 1)
        .collect();
    c.bench_function("divide_slice/i64/-37", |b| {
        b.iter(|| {
            let mut buf = src.clone();
            divide_slice(&mut buf, black_box(-37i64));
            buf
        })
    });
    c.bench_function("floor_divide_slice/i64/-37", |b| {
        b.iter(|| {
            let mut buf = src.clone();
            floor_divide_slice(&mut buf, black_box(-37i64));
            buf
        })
    });
    c.bench_function("hardware_div/i64/-37", |b| {
        b.iter(|| {
            let mut buf = src.clone();
            let d = black_box(-37i64);
            for x in &mut buf {
                *x /= d;
            }
            buf
        })
    });
}

criterion_group!(benches, bench_u32, bench_i64);
criterion_main!(benches);
