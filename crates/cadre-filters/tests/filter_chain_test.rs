// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use cadre_filters::filters::{ColorDepthReduction, FxaaAntiAliasing, Scanlines};
use cadre_filters::{FrameRenderer, RenderError, VideoGameEmulator};

/// A fixed base renderer so the tests assert on exact output.
struct StaticFrame(&'static str);

impl FrameRenderer for StaticFrame {
    fn render_frame(&self) -> Result<String, RenderError> {
        Ok(self.0.to_string())
    }
}

/// A base renderer that always fails, for propagation tests.
struct BrokenRenderer;

impl FrameRenderer for BrokenRenderer {
    fn render_frame(&self) -> Result<String, RenderError> {
        Err(RenderError::NoCartridge)
    }
}

#[test]
fn single_wrapper_appends_its_annotation() {
    let chain = FxaaAntiAliasing::new(Box::new(StaticFrame("frame")));

    let rendered = chain.render_frame().expect("render should succeed");

    assert_eq!(rendered, "frame with FxaaAntiAliasing");
}

#[test]
fn nested_wrappers_annotate_innermost_first() {
    // Innermost filter is the one closest to the base renderer.
    let chain = Scanlines::new(Box::new(ColorDepthReduction::new(Box::new(
        FxaaAntiAliasing::new(Box::new(StaticFrame("frame"))),
    ))));

    let rendered = chain.render_frame().expect("render should succeed");

    assert_eq!(
        rendered,
        "frame with FxaaAntiAliasing with ColorDepthReduction with Scanlines"
    );
}

#[test]
fn base_failure_propagates_through_the_whole_stack() {
    let chain = Scanlines::new(Box::new(FxaaAntiAliasing::new(Box::new(BrokenRenderer))));

    assert_eq!(chain.render_frame(), Err(RenderError::NoCartridge));
}

#[test]
fn emulator_output_flows_through_filters() {
    let mut emulator = VideoGameEmulator::default();
    emulator.insert_cartridge("Star Courier");
    let chain = FxaaAntiAliasing::new(Box::new(emulator));

    let rendered = chain.render_frame().expect("render should succeed");

    assert_eq!(
        rendered,
        "256x240 frame 0 of Star Courier with FxaaAntiAliasing"
    );
}

#[test]
fn same_filter_can_be_stacked_twice() {
    let chain = FxaaAntiAliasing::new(Box::new(FxaaAntiAliasing::new(Box::new(StaticFrame(
        "frame",
    )))));

    let rendered = chain.render_frame().expect("render should succeed");

    assert_eq!(rendered, "frame with FxaaAntiAliasing with FxaaAntiAliasing");
}
