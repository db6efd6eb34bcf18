//! Pins the process to the processor it starts on and reports which one that is.

fn main() {
    match core_pin::pin_to_current_cpu() {
        Ok(processor_id) => println!("Pinned to processor {processor_id}"),
        Err(e) => {
            eprintln!("Pinning failed in {}: {e}", e.failing_call());
            std::process::exit(1);
        }
    }
}
