#![allow(dead_code)]

use std::path::Path;
use std::process::{Child, Command, Output, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use pokedex::model::ViewerConfig;

pub struct ServerGuard {
    pub base_url: String,
    _dir: tempfile::TempDir,
    child: Child,
}

impl Drop for ServerGuard {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

impl ServerGuard {
    /// Viewer config pointed at this server, with the defaults otherwise.
    pub fn config(&self) -> ViewerConfig {
        ViewerConfig {
            api_base: self.base_url.clone(),
            ..ViewerConfig::default()
        }
    }
}

pub fn spawn_server(fixture: &serde_json::Value) -> Result<ServerGuard> {
    let dir = tempfile::tempdir().context("create server tempdir")?;

    let fixture_path = dir.path().join("fixture.json");
    std::fs::write(&fixture_path, serde_json::to_vec(fixture)?).context("write fixture")?;
    let addr_file = dir.path().join("addr.txt");

    let child = Command::new(env!("CARGO_BIN_EXE_dex-fixture-server"))
        .args([
            "--addr",
            "127.0.0.1:0",
            "--addr-file",
            addr_file.to_str().unwrap(),
            "--fixture",
            fixture_path.to_str().unwrap(),
        ])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .context("spawn dex-fixture-server")?;

    let base_url = read_addr_file(&addr_file)?;
    wait_for_healthz(&base_url)?;

    Ok(ServerGuard {
        base_url,
        _dir: dir,
        child,
    })
}

fn read_addr_file(addr_file: &Path) -> Result<String> {
    let start = Instant::now();
    loop {
        if start.elapsed() > Duration::from_secs(5) {
            anyhow::bail!("addr file not written at {}", addr_file.display());
        }

        if let Ok(s) = std::fs::read_to_string(addr_file) {
            let s = s.trim();
            if !s.is_empty() {
                return Ok(format!("http://{}", s));
            }
        }
        thread::sleep(Duration::from_millis(10));
    }
}

pub fn wait_for_healthz(base_url: &str) -> Result<()> {
    let client = reqwest::blocking::Client::new();
    let start = Instant::now();
    loop {
        if start.elapsed() > Duration::from_secs(5) {
            anyhow::bail!("server did not become healthy at {}/healthz", base_url);
        }
        match client.get(format!("{}/healthz", base_url)).send() {
            Ok(resp) if resp.status().is_success() => return Ok(()),
            _ => {
                thread::sleep(Duration::from_millis(50));
            }
        }
    }
}

/// Four entries with French names and flavor text. Pikachu's text carries the API's
/// hard line and page breaks.
pub fn sample_fixture() -> serde_json::Value {
    serde_json::json!({
        "entries": [
            {
                "id": 1,
                "name": "bulbasaur",
                "artwork": "https://img.example/art/1.png",
                "sprite": "https://img.example/sprite/1.png",
                "types": ["grass", "poison"],
                "names": { "en": "Bulbasaur", "fr": "Bulbizarre" },
                "flavor": { "fr": "Une graine étrange." }
            },
            {
                "id": 4,
                "name": "charmander",
                "sprite": "https://img.example/sprite/4.png",
                "types": ["fire"],
                "names": { "fr": "Salamèche" }
            },
            {
                "id": 25,
                "name": "pikachu",
                "artwork": "https://img.example/art/25.png",
                "types": ["electric"],
                "names": { "fr": "Pikachu" },
                "flavor": { "fr": "Il stocke\nde l'électricité\u{000C}dans ses joues." }
            },
            {
                "id": 26,
                "name": "raichu",
                "types": ["electric"],
                "species_status": 500
            }
        ]
    })
}

/// `n` entries named `mon-<id>` without any localization.
pub fn numbered_fixture(n: u32) -> serde_json::Value {
    let entries: Vec<serde_json::Value> = (1..=n)
        .map(|id| {
            serde_json::json!({
                "id": id,
                "name": format!("mon-{}", id),
                "types": ["normal"]
            })
        })
        .collect();
    serde_json::json!({ "entries": entries })
}

pub fn run_pokedex(data_dir: &Path, base_url: &str, args: &[&str]) -> Result<Output> {
    Command::new(env!("CARGO_BIN_EXE_pokedex"))
        .arg("--data-dir")
        .arg(data_dir)
        .args(["--api-base", base_url])
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .with_context(|| format!("run pokedex {:?}", args))
}

/// Runs the CLI and returns stdout, failing on a non-zero exit.
pub fn pokedex_ok(data_dir: &Path, base_url: &str, args: &[&str]) -> Result<String> {
    let out = run_pokedex(data_dir, base_url, args)?;
    if !out.status.success() {
        anyhow::bail!(
            "pokedex {:?} failed (status {:?})\nstdout:\n{}\nstderr:\n{}",
            args,
            out.status,
            String::from_utf8_lossy(&out.stdout),
            String::from_utf8_lossy(&out.stderr)
        );
    }
    Ok(String::from_utf8_lossy(&out.stdout).to_string())
}

/// Drives `fut` on a current-thread runtime, like the CLI does. The server helpers above
/// block, so tests spawn the server first and only then enter the runtime.
pub fn block_on<F: std::future::Future>(fut: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("build tokio runtime")
        .block_on(fut)
}
