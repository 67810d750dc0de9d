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

//! Demo binary exercising the three Cadre mechanisms end to end.
//!
//! Run with `RUST_LOG=info cargo run -p sandbox` to see the notification
//! fan-out and the filter/strategy delegation in the logs.

use anyhow::Result;
use cadre_filters::filters::{FxaaAntiAliasing, Scanlines};
use cadre_filters::{EmulatorSettings, FrameRenderer, VideoGameEmulator};
use cadre_routing::calculators::{CarRouteCalculator, MotorcycleRouteCalculator};
use cadre_routing::{LatLong, MapEngine};
use cadre_widgets::{Audio, Knob, Slider};
use std::sync::{Arc, Mutex};

fn main() -> Result<()> {
    env_logger::init();

    demo_filter_chain()?;
    demo_widget_fanout()?;
    demo_route_strategies()?;

    Ok(())
}

/// Stacks two filters on the emulator and renders a couple of frames.
fn demo_filter_chain() -> Result<()> {
    let mut emulator = VideoGameEmulator::new(EmulatorSettings::default());
    emulator.insert_cartridge("Star Courier");

    let chain = Scanlines::new(Box::new(FxaaAntiAliasing::new(Box::new(emulator))));
    for _ in 0..2 {
        println!("{}", chain.render_frame()?);
    }
    Ok(())
}

/// Binds a slider and a knob to one audio subject and lets a single slide
/// repaint both widgets.
fn demo_widget_fanout() -> Result<()> {
    let audio = Arc::new(Mutex::new(Audio::new()));
    let slider = Arc::new(Slider::new("volume"));
    let knob = Arc::new(Knob::new("gain"));

    slider.bind_audio(&audio);
    knob.bind_audio(&audio);
    {
        let mut audio = audio
            .lock()
            .map_err(|_| anyhow::anyhow!("audio lock poisoned"))?;
        audio.register(slider.clone());
        audio.register(knob.clone());
    }

    slider.slide(42)?;
    knob.turn(0.8)?;

    let audio = audio
        .lock()
        .map_err(|_| anyhow::anyhow!("audio lock poisoned"))?;
    println!(
        "audio state: {} (slider at {}, knob at {})",
        audio.state(),
        slider.position(),
        knob.gain()
    );
    Ok(())
}

/// Calculates the same trip with two strategies.
fn demo_route_strategies() -> Result<()> {
    let mut engine = MapEngine::new(Box::new(MotorcycleRouteCalculator));
    // Paris to Lyon.
    engine.set_endpoints(LatLong::new(48.8566, 2.3522), LatLong::new(45.7640, 4.8357));

    let motorcycle = engine.calculate()?;
    engine.set_calculator(Box::new(CarRouteCalculator));
    let car = engine.calculate()?;

    println!(
        "motorcycle: {:.0} km in {:.1} h, car: {:.0} km in {:.1} h",
        motorcycle.distance_km,
        motorcycle.duration.as_secs_f64() / 3600.0,
        car.distance_km,
        car.duration.as_secs_f64() / 3600.0
    );
    Ok(())
}
