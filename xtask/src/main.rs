//! Build automation tasks for Volcano Run
//!
//! Usage:
//!   cargo xtask build-web       # Stage a playable web build in dist/web
//!   cargo xtask package-itch    # Zip dist/web for itch.io upload

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

const WASM_TARGET: &str = "wasm32-unknown-unknown";
const WASM_NAME: &str = "volcano-run.wasm";
const ITCH_ZIP: &str = "volcano-run-itch.zip";
/// Loader matching the macroquad version in Cargo.toml
const MQ_JS_BUNDLE: &str =
    "https://raw.githubusercontent.com/not-fl3/macroquad/v0.4.14/js/mq_js_bundle.js";

#[derive(Parser)]
#[command(name = "xtask", about = "Build automation for Volcano Run")]
struct Cli {
    #[command(subcommand)]
    command: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Build WASM and stage it with the page and assets
    BuildWeb {
        /// Prefix the page title with [DEV]
        #[arg(long)]
        dev: bool,
    },
    /// Build the web version and zip it for itch.io
    PackageItch,
}

fn main() -> Result<()> {
    let root = Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .map(Path::to_path_buf)
        .context("xtask must live inside the workspace")?;

    match Cli::parse().command {
        Task::BuildWeb { dev } => build_web(&root, dev).map(|_| ()),
        Task::PackageItch => {
            let web = build_web(&root, false)?;
            zip_dir(&web, &root.join("dist").join(ITCH_ZIP))
        }
    }
}

fn run(cmd: &mut Command) -> Result<()> {
    let status = cmd.status().with_context(|| format!("Failed to start {:?}", cmd))?;
    if !status.success() {
        bail!("{:?} exited with {}", cmd, status);
    }
    Ok(())
}

/// Mirror `src` into `dst`
fn copy_tree(src: &Path, dst: &Path) -> Result<()> {
    fs::create_dir_all(dst)?;
    for entry in fs::read_dir(src).with_context(|| format!("Reading {}", src.display()))? {
        let path = entry?.path();
        let target = dst.join(path.file_name().context("entry without a name")?);
        if path.is_dir() {
            copy_tree(&path, &target)?;
        } else {
            fs::copy(&path, &target)?;
        }
    }
    Ok(())
}

/// Returns the staged directory
fn build_web(root: &Path, dev: bool) -> Result<PathBuf> {
    println!("Building {}...", WASM_TARGET);
    run(Command::new("cargo")
        .current_dir(root)
        .args(["build", "--release", "--target", WASM_TARGET]))?;

    let web = root.join("dist/web");
    if web.exists() {
        fs::remove_dir_all(&web)?;
    }
    fs::create_dir_all(&web)?;

    let wasm = root.join("target").join(WASM_TARGET).join("release").join(WASM_NAME);
    fs::copy(&wasm, web.join(WASM_NAME))
        .with_context(|| format!("{} missing after build", wasm.display()))?;

    let page = fs::read_to_string(root.join("docs/index.html")).context("docs/index.html missing")?;
    let page = if dev {
        page.replace("<title>Volcano Run", "<title>[DEV] Volcano Run")
    } else {
        page
    };
    fs::write(web.join("index.html"), page)?;

    println!("Fetching macroquad loader...");
    run(Command::new("curl")
        .args(["-fsSL", "-o"])
        .arg(web.join("mq_js_bundle.js"))
        .arg(MQ_JS_BUNDLE))?;

    copy_tree(&root.join("assets"), &web.join("assets"))?;

    println!("Web build staged in {}", web.display());
    Ok(web)
}

fn zip_dir(dir: &Path, zip: &Path) -> Result<()> {
    if zip.exists() {
        fs::remove_file(zip)?;
    }
    run(Command::new("zip").current_dir(dir).arg("-r").arg(zip).arg("."))?;
    println!("itch.io package ready: {}", zip.display());
    Ok(())
}
