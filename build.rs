#![allow(clippy::indexing_slicing, clippy::exit, clippy::unwrap_used)]
fn main() {
    // Host builds (unit tests) link with the normal toolchain; only the
    // firmware needs the ESP linker scripts.
    if std::env::var_os("CARGO_FEATURE_BOARD").is_none() {
        return;
    }

    if std::env::var("PROFILE").unwrap_or_default() == "release" {
        println!("cargo:rustc-env=DEFMT_LOG=off");
    }

    linker_be_nice();
    println!("cargo:rustc-link-arg=-Tdefmt.x");
    println!("cargo:rustc-link-arg=-Tlinkall.x");
}

fn linker_be_nice() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 {
        let kind = &args[1];
        let what = &args[2];

        match kind.as_str() {
            "undefined-symbol" => match what.as_str() {
                "_defmt_timestamp" => {
                    eprintln!();
                    eprintln!(
                        "💡 `defmt` not found - make sure `defmt.x` is added as a linker script and the firmware has `use esp_println as _;`"
                    );
                    eprintln!();
                }
                "_stack_start" => {
                    eprintln!();
                    eprintln!("💡 Is the linker script `linkall.x` missing?");
                    eprintln!();
                }
                "esp_rtos_initialized" | "esp_rtos_yield_task" | "esp_rtos_task_create" => {
                    eprintln!();
                    eprintln!(
                        "💡 No scheduler found. Make sure `esp_rtos::start` runs before spawning tasks."
                    );
                    eprintln!();
                }
                _ => (),
            },
            _ => {
                std::process::exit(1);
            }
        }

        std::process::exit(0);
    }

    println!(
        "cargo:rustc-link-arg=-Wl,--error-handling-script={}",
        std::env::current_exe().unwrap().display()
    );
}
