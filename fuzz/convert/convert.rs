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

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use ycbcr_reconstruct::{convert, ChromaSubsampling};

#[derive(Arbitrary, Debug)]
struct ConvertInput {
    width: u8,
    height: u8,
    down_factor: u8,
    is_420: bool,
    data: Vec<u8>,
}

fuzz_target!(|input: ConvertInput| {
    let subsampling = if input.is_420 {
        ChromaSubsampling::Yuv420
    } else {
        ChromaSubsampling::Yuv444
    };
    let width = input.width as u32;
    let height = input.height as u32;
    let down_factor = input.down_factor as u32;

    if let Ok(frame) = convert(&input.data, width, height, down_factor, subsampling) {
        assert_eq!(frame.data.len(), width as usize * height as usize * 3);
        assert_eq!(
            input.data.len(),
            (width / down_factor) as usize * (height / down_factor) as usize * 3
        );
    }

    if width == 0 || height == 0 || down_factor == 0 {
        return;
    }
    if width % down_factor != 0 || height % down_factor != 0 {
        return;
    }

    let samples = (width / down_factor) as usize * (height / down_factor) as usize;
    let fill = input.data.first().copied().unwrap_or(128);
    let data = vec![fill; samples * 3];
    let frame = convert(&data, width, height, down_factor, subsampling).unwrap();
    let first = frame.pixel(0, 0);
    assert!(frame.data.chunks_exact(3).all(|px| px == first));
});
