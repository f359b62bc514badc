/*
 * Copyright (c) Radzivon Bartoshyk, 10/2026. All rights reserved.
 *
 * Redistribution and use in source and binary forms, with or without modification,
 * are permitted provided that the following conditions are met:
 *
 * 1.  Redistributions of source code must retain the above copyright notice, this
 * list of conditions and the following disclaimer.
 *
 * 2.  Redistributions in binary form must reproduce the above copyright notice,
 * this list of conditions and the following disclaimer in the documentation
 * and/or other materials provided with the distribution.
 *
 * 3.  Neither the name of the copyright holder nor the names of its
 * contributors may be used to endorse or promote products derived from
 * this software without specific prior written permission.
 *
 * THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;
use ycbcr_reconstruct::{convert, ycbcr_to_rgba, ChromaSubsampling, PackedYCbCrImage};

const WIDTH: u32 = 1920;
const HEIGHT: u32 = 1080;
const DOWN_FACTOR: u32 = 2;

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut rng = rand::rng();
    let samples = (WIDTH / DOWN_FACTOR) as usize * (HEIGHT / DOWN_FACTOR) as usize;
    let raw: Vec<u8> = (0..samples * 3).map(|_| rng.random()).collect();

    c.bench_function("convert 4:2:0 1920x1080", |b| {
        b.iter(|| convert(&raw, WIDTH, HEIGHT, DOWN_FACTOR, ChromaSubsampling::Yuv420).unwrap())
    });

    c.bench_function("convert 4:4:4 1920x1080", |b| {
        b.iter(|| convert(&raw, WIDTH, HEIGHT, DOWN_FACTOR, ChromaSubsampling::Yuv444).unwrap())
    });

    let image = PackedYCbCrImage {
        data: &raw,
        width: WIDTH,
        height: HEIGHT,
        down_factor: DOWN_FACTOR,
    };
    let mut rgba = vec![0u8; WIDTH as usize * HEIGHT as usize * 4];

    c.bench_function("ycbcr_to_rgba 4:2:0 1920x1080", |b| {
        b.iter(|| {
            ycbcr_to_rgba(&image, &mut rgba, WIDTH * 4, ChromaSubsampling::Yuv420).unwrap();
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
