//! Host-side helper: `cargo run --bin serve` builds the wasm package into
//! `static/pkg` with wasm-pack and serves `static/` on port 8000.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::path::Path;
    use std::process::{Command, Stdio};
    use std::{thread, time::Duration};

    // 1. Compile wasm via wasm-pack into static/pkg
    println!("Building WASM pkg …");
    match Command::new("wasm-pack")
        .args(["build", "--release", "--target", "web", "--out-dir", "static/pkg"])
        .status()
    {
        Ok(st) if st.success() => {}
        Ok(_) => {
            eprintln!("wasm-pack finished with errors. Ensure wasm-pack is installed (https://rustwasm.github.io/wasm-pack/).");
            std::process::exit(1);
        }
        Err(_) => {
            eprintln!("wasm-pack not found in PATH. Skipping wasm build; the site may serve stale artifacts.");
        }
    }

    // 2. The grid fetches its animation from the site root.
    let asset = Path::new("static").join(tile_grid_wasm::config::DEFAULT_ASSET_URL);
    if !asset.exists() {
        eprintln!("{} is missing; the grid will fail to load until it is added.", asset.display());
    }

    // 3. Serve static/ on 8000
    println!("Launching local server at http://127.0.0.1:8000 …");
    let mut server = Command::new("python3")
        .args(["-m", "http.server", "8000", "--directory", "static"])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .unwrap_or_else(|err| {
            eprintln!("failed to start http server: {err}");
            std::process::exit(1);
        });

    // Keep process alive while the server runs
    loop {
        if let Ok(Some(status)) = server.try_wait() {
            eprintln!("http server exited: {status}");
            std::process::exit(1);
        }
        thread::sleep(Duration::from_secs(1));
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {}
