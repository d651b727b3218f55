//! Lists the audio output devices on this machine.
//!
//! Run with: cargo run --example list_outputs

use audio_outputs::enumerate_output_devices;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing for debug output
    tracing_subscriber::fmt::init();

    let devices = enumerate_output_devices()?;

    if devices.is_empty() {
        println!("No audio output devices found.");
        return Ok(());
    }

    println!("Available audio output devices:");
    for device in devices {
        println!("  {device}");
    }

    Ok(())
}
