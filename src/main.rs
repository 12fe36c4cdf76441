//! Host-side helper: `cargo run` builds the WASM bundle into `static/pkg`
//! and serves `static/` on http://127.0.0.1:8000.

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::io::Result<()> {
    use std::io::{Error, ErrorKind};
    use std::process::{Command, Stdio};

    println!("Building WASM pkg …");
    match Command::new("wasm-pack")
        .args([
            "build",
            "--release",
            "--target",
            "web",
            "--out-dir",
            "static/pkg",
        ])
        .status()
    {
        Ok(st) if st.success() => {}
        Ok(_) => {
            return Err(Error::new(
                ErrorKind::Other,
                "wasm-pack finished with errors. Ensure wasm-pack is installed (https://rustwasm.github.io/wasm-pack/).",
            ));
        }
        Err(_) => {
            eprintln!("wasm-pack not found in PATH. Skipping wasm build; the site may serve stale artifacts.");
        }
    }

    println!("Launching local server at http://127.0.0.1:8000 …");
    let mut server = Command::new("python3")
        .args(["-m", "http.server", "8000", "--directory", "static"])
        .stdout(Stdio::null())
        .stderr(Stdio::inherit())
        .spawn()?;
    server.wait()?;
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {}
