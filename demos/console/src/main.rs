//! Runs the ADC emulation without a GUI and prints per-window RMS stats.
//!
//! Halfway through the run the amplitude is changed through `LiveParams`,
//! the way an on-screen entry widget would.

use adc_rms::{Config, LiveParams, RunGuard, Sweep, Tick, Trace};

fn main() {
    println!("=== adc-rms console run ===\n");

    let config = Config {
        run_duration_us: 2_400_000,
        ..Config::default()
    };

    let params = config.params(50.0, 1000.0).expect("Valid signal parameters");
    let live = LiveParams::new(&params);
    let guard = RunGuard::new();

    let Some(_lease) = guard.try_start() else {
        println!("Signal emulation process already working!");
        return;
    };

    let mut sweep = Sweep::new(config).expect("Valid config");
    let mut trace = Trace::<64>::new();
    let window_len = config.samples_per_window();

    println!("   window | time, s | RMS | min RMS | max RMS");
    let mut sink = |tick: &Tick| {
        trace.record(*tick);

        if tick.time_micros == config.run_duration_us / 2 {
            live.set_amplitude(2000.0);
            println!("   -- amplitude set to 2000 --");
        }

        if tick.bin + 1 == window_len {
            println!(
                "   {:6} | {:7.3} | {:3} | {:7} | {:7}",
                tick.window,
                tick.time_micros as f64 / 1_000_000.0,
                tick.result.smoothed_magnitude,
                tick.stats.min().unwrap_or_default(),
                tick.stats.max().unwrap_or_default(),
            );
        }
    };
    sweep.run(&live, &mut sink);

    println!("\n   Last {} raw samples (centred):", trace.len());
    let samples: Vec<String> = trace.centered_raw().map(|v| v.to_string()).collect();
    println!("   {}", samples.join(" "));
}
